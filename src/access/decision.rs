// src/access/decision.rs
use serde::ser::{Serialize, SerializeStruct, Serializer};

use tracing::error;

use crate::consts::ACCESS_UNVERIFIED;
use crate::enums::Role;
use crate::error::{CoreError, ErrorKind};

/// Outcome of one authorization check; built per call, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Granted(Role),
    Denied(Denial),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    /// Client-facing reason. Matches the error's message for refusals; store and
    /// configuration faults get a fixed text so backend detail stays server-side.
    pub reason: String,
    /// Set when the membership lookup failed, as opposed to a legitimate refusal
    pub indeterminate: bool,
}

impl AccessDecision {
    pub fn denied(reason: impl Into<String>) -> Self {
        AccessDecision::Denied(Denial {
            reason: reason.into(),
            indeterminate: false,
        })
    }

    pub fn from_error(err: &CoreError) -> Self {
        if err.kind() == ErrorKind::AccessDenied {
            return AccessDecision::denied(err.to_string());
        }
        error!(error = %err, kind = ?err.kind(), "workspace access could not be determined");
        AccessDecision::Denied(Denial {
            reason: ACCESS_UNVERIFIED.to_string(),
            indeterminate: true,
        })
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Granted(_))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            AccessDecision::Granted(role) => Some(*role),
            AccessDecision::Denied(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            AccessDecision::Granted(_) => None,
            AccessDecision::Denied(denial) => Some(&denial.reason),
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, AccessDecision::Denied(d) if d.indeterminate)
    }
}

/// `{"allowed":true,"role":"admin"}` or `{"allowed":false,"reason":"..."}`,
/// with `"indeterminate":true` added when no decision could be reached.
impl Serialize for AccessDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AccessDecision::Granted(role) => {
                let mut s = serializer.serialize_struct("AccessDecision", 2)?;
                s.serialize_field("allowed", &true)?;
                s.serialize_field("role", role)?;
                s.end()
            }
            AccessDecision::Denied(denial) => {
                let len = if denial.indeterminate { 3 } else { 2 };
                let mut s = serializer.serialize_struct("AccessDecision", len)?;
                s.serialize_field("allowed", &false)?;
                s.serialize_field("reason", &denial.reason)?;
                if denial.indeterminate {
                    s.serialize_field("indeterminate", &true)?;
                }
                s.end()
            }
        }
    }
}
