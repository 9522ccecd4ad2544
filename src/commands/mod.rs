//! CLI command definitions and dispatch.

pub mod account;
pub mod activity;
pub mod browse;
pub mod files;

use clap::{Parser, Subcommand};

use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_core::types::FileId;
use vault_service::VaultService;

use crate::output::OutputFormat;

/// FileVault: a personal file vault with trash, favorites and an activity feed
#[derive(Debug, Parser)]
#[command(name = "filevault", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create an account and log in
    Register(account::RegisterArgs),
    /// Log in with email and password
    Login(account::LoginArgs),
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Record local files in the vault
    Upload(files::UploadArgs),
    /// Create a folder
    Mkdir(files::MkdirArgs),
    /// Move records to the trash
    Rm(files::IdsArgs),
    /// Restore records from the trash
    Restore(files::IdsArgs),
    /// Delete records permanently
    Purge(files::IdsArgs),
    /// Toggle the favorite flag
    Star(files::StarArgs),
    /// List a folder
    Ls(browse::LsArgs),
    /// List favorites
    Favorites(browse::SearchArgs),
    /// List recently modified records
    Recent(browse::RecentArgs),
    /// List the trash
    Trash(browse::SearchArgs),
    /// Show the folder tree
    Tree(browse::TreeArgs),
    /// Show vault statistics
    Stats,
    /// Show recent activity
    Activity(activity::ActivityArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let format = self.format;
        match &self.command {
            Commands::Register(args) => account::register(args, config, format).await,
            Commands::Login(args) => account::login(args, config, format).await,
            Commands::Logout => account::logout(config).await,
            Commands::Whoami => account::whoami(config, format).await,
            Commands::Upload(args) => files::upload(args, config, format).await,
            Commands::Mkdir(args) => files::mkdir(args, config, format).await,
            Commands::Rm(args) => files::remove(args, config).await,
            Commands::Restore(args) => files::restore(args, config).await,
            Commands::Purge(args) => files::purge(args, config).await,
            Commands::Star(args) => files::star(args, config).await,
            Commands::Ls(args) => browse::ls(args, config, format).await,
            Commands::Favorites(args) => browse::favorites(args, config, format).await,
            Commands::Recent(args) => browse::recent(args, config, format).await,
            Commands::Trash(args) => browse::trash(args, config, format).await,
            Commands::Tree(args) => browse::tree(args, config, format).await,
            Commands::Stats => browse::stats(config, format).await,
            Commands::Activity(args) => activity::execute(args, config, format).await,
        }
    }
}

/// Which copy of a path a command acts on when live and trashed records share it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    /// Records not in the trash
    Live,
    /// Records in the trash
    Trashed,
}

/// Helper: resolve a record reference given as a UUID or an absolute path
///
/// Paths are not unique: a trashed record keeps its path, so a new upload can
/// reuse it. Path matches in the preferred state win; more than one winner is
/// rejected with the candidate ids.
pub fn resolve_ref(
    vault: &VaultService,
    reference: &str,
    prefer: Prefer,
) -> Result<FileId, AppError> {
    if !reference.starts_with('/') {
        return reference
            .parse::<FileId>()
            .map_err(|e| AppError::validation(format!("Invalid record id '{reference}': {e}")));
    }

    let matches: Vec<_> = vault
        .records()
        .iter()
        .filter(|r| r.path == reference)
        .collect();
    let preferred: Vec<_> = matches
        .iter()
        .copied()
        .filter(|r| r.is_deleted == (prefer == Prefer::Trashed))
        .collect();
    let candidates = if preferred.is_empty() { matches } else { preferred };

    match candidates.as_slice() {
        [] => Err(AppError::not_found(format!("No record at path '{reference}'"))),
        [record] => Ok(record.id),
        many => {
            let ids: Vec<String> = many.iter().map(|r| r.id.to_string()).collect();
            Err(AppError::validation(format!(
                "Path '{reference}' matches {} records; use an id instead: {}",
                many.len(),
                ids.join(", ")
            )))
        }
    }
}

/// Helper: resolve every reference in `references`
pub fn resolve_refs(
    vault: &VaultService,
    references: &[String],
    prefer: Prefer,
) -> Result<Vec<FileId>, AppError> {
    references
        .iter()
        .map(|r| resolve_ref(vault, r, prefer))
        .collect()
}
