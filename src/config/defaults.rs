// src/config/defaults.rs
use crate::config::app::{CipherConfig, StoreConfig};
use crate::consts::{
    DEFAULT_DB_KEY_VAR, DEFAULT_KEY_VAR, DEFAULT_MEMBERSHIP_DB, DEFAULT_PREVIOUS_KEY_VAR,
};

pub const DEFAULT_CONFIG_PATH: &str = "todo-os.toml";

pub fn default_cipher() -> CipherConfig {
    CipherConfig {
        key_var: DEFAULT_KEY_VAR.into(),
        previous_key_var: DEFAULT_PREVIOUS_KEY_VAR.into(),
    }
}

pub fn default_store() -> StoreConfig {
    StoreConfig {
        membership_db: DEFAULT_MEMBERSHIP_DB.into(),
        db_key_var: DEFAULT_DB_KEY_VAR.into(),
    }
}
