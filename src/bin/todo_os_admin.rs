// src/bin/todo_os_admin.rs
//! Operator tool: key provisioning, blob maintenance and membership checks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpassword::read_password;
use std::io::Write;
use todo_os_security::access::WorkspaceGuard;
use todo_os_security::crypto::{generate_key, key_fingerprint, key_representations};
use todo_os_security::{
    config, CredentialCipher, CredentialKey32, EnvSecretProvider, MembershipRecord, Role, SqliteMembershipStore,
    UserId, WorkspaceId,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "todo_os_admin")]
#[command(about = "Credential cipher and workspace membership administration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new credential key (hex, for ENCRYPTION_KEY)
    Keygen,
    /// Encrypt a secret read from the terminal without echo
    Encrypt,
    /// Decrypt a stored blob with the current key
    Decrypt {
        blob: String,
    },
    /// Re-encrypt a blob from the previous key to the current key
    Rotate {
        blob: String,
    },
    /// Add a member or change their role
    Grant {
        workspace: String,
        user: String,
        role: Role,
    },
    /// Remove a membership
    Revoke {
        workspace: String,
        user: String,
    },
    /// Print the access decision for a user as JSON
    Check {
        workspace: String,
        user: String,
        /// Roles that satisfy the check (repeatable)
        #[arg(long = "require")]
        require: Vec<Role>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let conf = config::load().context("Failed to load configuration")?;
    let cipher = CredentialCipher::from_config(EnvSecretProvider, &conf.cipher);

    match cli.command {
        Command::Keygen => {
            let key = generate_key();
            let (assignment, fingerprint) = keygen_output(&conf.cipher.key_var, &key);
            println!("{assignment}");
            eprintln!("{fingerprint}");
            info!("generated credential key");
        }
        Command::Encrypt => {
            print!("Secret: ");
            std::io::stdout().flush()?;
            let secret = read_password().context("Failed to read secret")?;
            let blob = cipher
                .encrypt(secret.trim_end())
                .with_context(|| format!("Encryption failed, is {} set?", cipher.key_var()))?;
            println!("{blob}");
        }
        Command::Decrypt { blob } => {
            let plaintext = cipher.decrypt(&blob).context("Decryption failed")?;
            println!("{}", plaintext.expose_secret());
        }
        Command::Rotate { blob } => {
            let rotated = cipher.rotate(&blob).context("Rotation failed")?;
            println!("{rotated}");
        }
        Command::Grant {
            workspace,
            user,
            role,
        } => {
            let store = open_store(&conf)?;
            store.add_member(&MembershipRecord {
                user_id: UserId(user),
                workspace_id: WorkspaceId(workspace),
                role,
            })?;
            info!(%role, "membership saved");
        }
        Command::Revoke { workspace, user } => {
            let store = open_store(&conf)?;
            let removed = store.remove_member(&UserId(user), &WorkspaceId(workspace))?;
            info!(removed, "membership revoke finished");
        }
        Command::Check {
            workspace,
            user,
            require,
        } => {
            let guard = WorkspaceGuard::new(open_store(&conf)?);
            let decision = guard.check_access(
                &UserId(user),
                &WorkspaceId(workspace),
                Some(require.as_slice()),
            );
            println!("{}", serde_json::to_string(&decision)?);
        }
    }

    Ok(())
}

/// `KEY_VAR=<hex>` for stdout and the fingerprint line for stderr
fn keygen_output(key_var: &str, key: &CredentialKey32) -> (String, String) {
    let repr = key_representations(key);
    (
        format!("{key_var}={}", repr.hex),
        format!("fingerprint: {}", key_fingerprint(key)),
    )
}

fn open_store(conf: &config::Config) -> Result<SqliteMembershipStore> {
    SqliteMembershipStore::open_with_config(&conf.store, &EnvSecretProvider).with_context(|| {
        format!(
            "Failed to open membership database {}",
            conf.store.membership_db
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keygen_prints_assignment_and_fingerprint() {
        let key = CredentialKey32::new([0x42; 32]);
        let (assignment, fingerprint) = keygen_output("ENCRYPTION_KEY", &key);
        assert_eq!(assignment, format!("ENCRYPTION_KEY={}", "42".repeat(32)));
        assert_eq!(fingerprint, format!("fingerprint: {}", key_fingerprint(&key)));
        assert_eq!(fingerprint.len(), "fingerprint: ".len() + 16);
    }
}
