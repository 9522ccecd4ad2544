//! Record mutation CLI commands.

use std::io::Write;
use std::path::PathBuf;

use bytes::Bytes;
use clap::Args;

use vault_core::config::AppConfig;
use vault_core::error::{AppError, ErrorKind};
use vault_entity::file::UploadFile;

use super::Prefer;
use crate::output::{self, OutputFormat};
use crate::session::Session;

/// Arguments for the upload command
#[derive(Debug, Args)]
pub struct UploadArgs {
    /// Local files to record
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Target folder (id or absolute path; defaults to the root)
    #[arg(short, long)]
    pub parent: Option<String>,
}

/// Arguments for the mkdir command
#[derive(Debug, Args)]
pub struct MkdirArgs {
    /// Folder name
    pub name: String,

    /// Parent folder (id or absolute path; defaults to the root)
    #[arg(short, long)]
    pub parent: Option<String>,
}

/// Record references (ids or absolute paths)
#[derive(Debug, Args)]
pub struct IdsArgs {
    /// Record ids or absolute paths
    #[arg(required = true)]
    pub ids: Vec<String>,
}

/// Arguments for the star command
#[derive(Debug, Args)]
pub struct StarArgs {
    /// Record id or absolute path
    pub id: String,
}

/// Execute the upload command
pub async fn upload(
    args: &UploadArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let parent = args
        .parent
        .as_deref()
        .map(|p| super::resolve_ref(&session.vault, p, Prefer::Live))
        .transpose()?;

    let mut files = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation(format!("Invalid file name: {}", path.display())))?
            .to_string();
        let content = tokio::fs::read(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::NotFound,
                format!("Failed to read {}: {e}", path.display()),
                e,
            )
        })?;
        files.push(UploadFile::with_content(name, Bytes::from(content)));
    }

    let show_progress = format == OutputFormat::Table;
    let created = session
        .vault
        .upload_with_progress(files, parent, |tick| {
            if show_progress {
                eprint!(
                    "\rUploading {}/{} files... {:>3}%",
                    tick.completed, tick.total, tick.percent
                );
                let _ = std::io::stderr().flush();
            }
        })
        .await?;
    if show_progress {
        eprintln!();
    }

    let refs: Vec<_> = created.iter().collect();
    output::print_records(&refs, format);
    if format == OutputFormat::Table {
        output::print_success(&format!("Uploaded {} file(s)", created.len()));
    }
    Ok(())
}

/// Execute the mkdir command
pub async fn mkdir(
    args: &MkdirArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let parent = args
        .parent
        .as_deref()
        .map(|p| super::resolve_ref(&session.vault, p, Prefer::Live))
        .transpose()?;

    let folder = session.vault.create_folder(&args.name, parent).await?;

    match format {
        OutputFormat::Json => output::print_json(&folder),
        OutputFormat::Table => output::print_success(&format!(
            "Folder '{}' created at {} (id: {})",
            folder.name, folder.path, folder.id
        )),
    }
    Ok(())
}

/// Execute the rm command
pub async fn remove(args: &IdsArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let ids = super::resolve_refs(&session.vault, &args.ids, Prefer::Live)?;
    let count = session.vault.soft_delete(&ids).await?;
    report(count, "moved to trash");
    Ok(())
}

/// Execute the restore command
pub async fn restore(args: &IdsArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let ids = super::resolve_refs(&session.vault, &args.ids, Prefer::Trashed)?;
    let count = session.vault.restore(&ids).await?;
    report(count, "restored");
    Ok(())
}

/// Execute the purge command
pub async fn purge(args: &IdsArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let ids = super::resolve_refs(&session.vault, &args.ids, Prefer::Live)?;
    let count = session.vault.hard_delete(&ids).await?;
    report(count, "permanently deleted");
    Ok(())
}

/// Execute the star command
pub async fn star(args: &StarArgs, config: &AppConfig) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    let id = super::resolve_ref(&session.vault, &args.id, Prefer::Live)?;
    let favorite = session.vault.toggle_favorite(id).await?;
    let name = &session.vault.get(id)?.name;
    if favorite {
        output::print_success(&format!("'{name}' added to favorites"));
    } else {
        output::print_success(&format!("'{name}' removed from favorites"));
    }
    Ok(())
}

fn report(count: usize, action: &str) {
    if count == 0 {
        output::print_warning("No matching records");
    } else {
        output::print_success(&format!("{count} record(s) {action}"));
    }
}
