//! Activity feed CLI command.

use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_service::format_relative;

use crate::output::{self, OutputFormat};
use crate::session::Session;

/// Arguments for the activity command
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Number of entries (defaults to `vault.activity_preview`)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Activity display row
#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    /// When it happened
    when: String,
    /// Action kind
    kind: String,
    /// Summary
    description: String,
    /// Related record
    file: String,
}

/// Execute the activity command
pub async fn execute(
    args: &ActivityArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    let limit = args.limit.unwrap_or(config.vault.activity_preview);
    let entries = session.vault.recent_activity(limit);

    if format == OutputFormat::Json {
        output::print_json(&entries);
        return Ok(());
    }

    let now = Utc::now();
    let rows: Vec<ActivityRow> = entries
        .iter()
        .map(|e| ActivityRow {
            when: format_relative(e.timestamp, now),
            kind: e.kind.to_string(),
            description: e.description.clone(),
            file: e.file_name.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
