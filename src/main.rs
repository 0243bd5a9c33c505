use clap::{Parser, Subcommand};
use hubpay::application::auth_payload::build_auth_payload;
use hubpay::application::permission_sync::PermissionSynchronizer;
use hubpay::config::GatewayConfig;
use hubpay::domain::payment::ThreeDsChallengeResult;
use hubpay::domain::permission::{Permission, Role};
use hubpay::domain::ports::{ManifestBox, PermissionStoreBox, RoleStoreBox};
use hubpay::infrastructure::in_memory::{InMemoryPermissionStore, InMemoryRoleStore};
use hubpay::infrastructure::manifest::StaticManifest;
use hubpay::infrastructure::opayo::OpayoClient;
use hubpay::interfaces::json::parameters_reader::ParametersReader;
use hubpay::interfaces::json::writer::JsonWriter;
use miette::{IntoDiagnostic, Result, miette};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the hub roles and any manifest permission missing from storage
    SyncPermissions {
        /// JSON manifest of permission descriptors. Defaults to the hub's built-in list.
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Path to persistent database (optional). If provided, uses RocksDB.
        #[arg(long)]
        db_path: Option<PathBuf>,
    },
    /// Request a merchant session key from the gateway
    SessionKey,
    /// Fetch a transaction, retrying while the gateway reports failure
    Transaction {
        id: String,
    },
    /// Print the authorization payload for a JSON parameters file ("-" for stdin)
    AuthPayload {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Build the authorization payload for a parameters file and submit it
    Authorize {
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Complete a 3-D Secure v2 challenge for a transaction
    CompleteChallenge {
        transaction_id: String,

        #[arg(long)]
        cres: String,

        #[arg(long)]
        session_data: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncOutput {
    roles_created: usize,
    permissions_created: usize,
    roles: Vec<Role>,
    permissions: Vec<Permission>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionKeyOutput {
    merchant_session_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut writer = JsonWriter::new(stdout.lock());

    match cli.command {
        Command::SyncPermissions { manifest, db_path } => {
            let manifest: ManifestBox = match manifest {
                Some(path) => {
                    let file = File::open(path).into_diagnostic()?;
                    Box::new(StaticManifest::from_reader(file).into_diagnostic()?)
                }
                None => Box::new(StaticManifest::hub()),
            };
            let (role_store, permission_store) = open_stores(db_path)?;

            let synchronizer = PermissionSynchronizer::new(manifest, role_store, permission_store);
            let report = synchronizer.sync().await.into_diagnostic()?;
            let (roles, permissions) = synchronizer.into_results().await.into_diagnostic()?;

            writer
                .write(&SyncOutput {
                    roles_created: report.roles_created,
                    permissions_created: report.permissions_created,
                    roles,
                    permissions,
                })
                .into_diagnostic()?;
        }
        Command::SessionKey => {
            let key = gateway()?
                .merchant_session_key()
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("Gateway did not issue a merchant session key"))?;

            writer
                .write(&SessionKeyOutput {
                    merchant_session_key: key,
                })
                .into_diagnostic()?;
        }
        Command::Transaction { id } => {
            let transaction = gateway()?
                .transaction(&id)
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("Transaction {id} could not be retrieved"))?;

            writer.write(&transaction).into_diagnostic()?;
        }
        Command::AuthPayload { input } => {
            let params = ParametersReader::new(open_input(&input)?)
                .read()
                .into_diagnostic()?;

            writer.write(&build_auth_payload(&params)).into_diagnostic()?;
        }
        Command::Authorize { input } => {
            let params = ParametersReader::new(open_input(&input)?)
                .read()
                .into_diagnostic()?;

            let response = gateway()?
                .authorize(&build_auth_payload(&params))
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("Authorization was rejected by the gateway"))?;

            writer.write(&response).into_diagnostic()?;
        }
        Command::CompleteChallenge {
            transaction_id,
            cres,
            session_data,
        } => {
            let challenge = ThreeDsChallengeResult {
                c_res: cres,
                three_ds_session_data: session_data,
            };

            let response = gateway()?
                .complete_challenge(&transaction_id, &challenge)
                .await
                .into_diagnostic()?
                .ok_or_else(|| miette!("3-D Secure challenge was rejected by the gateway"))?;

            writer.write(&response).into_diagnostic()?;
        }
    }

    Ok(())
}

fn gateway() -> Result<OpayoClient> {
    let config = GatewayConfig::from_env().into_diagnostic()?;
    OpayoClient::new(config).into_diagnostic()
}

fn open_input(path: &Path) -> Result<Box<dyn Read>> {
    if path == Path::new("-") {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(path).into_diagnostic()?))
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_stores(db_path: Option<PathBuf>) -> Result<(RoleStoreBox, PermissionStoreBox)> {
    use hubpay::infrastructure::rocksdb::RocksDBStore;

    match db_path {
        Some(path) => {
            let store = RocksDBStore::open(path).into_diagnostic()?;
            Ok((Box::new(store.clone()), Box::new(store)))
        }
        None => Ok(in_memory_stores()),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_stores(db_path: Option<PathBuf>) -> Result<(RoleStoreBox, PermissionStoreBox)> {
    if db_path.is_some() {
        tracing::warn!(
            "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(in_memory_stores())
}

fn in_memory_stores() -> (RoleStoreBox, PermissionStoreBox) {
    (
        Box::new(InMemoryRoleStore::new()),
        Box::new(InMemoryPermissionStore::new()),
    )
}
