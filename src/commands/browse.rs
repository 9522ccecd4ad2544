//! Read-only listing CLI commands.

use clap::Args;
use serde::Serialize;

use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_service::resolver::{TreeNode, filter_by_name};
use vault_service::{Section, format_size};

use crate::output::{self, OutputFormat};
use crate::session::Session;

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct LsArgs {
    /// Folder path to list
    #[arg(default_value = "/")]
    pub path: String,

    /// Only show names containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Optional name filter
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Only show names containing this text (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the recent command
#[derive(Debug, Args)]
pub struct RecentArgs {
    /// Maximum number of records (defaults to `vault.recent_limit`)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Folder to start from
    #[arg(default_value = "/")]
    pub path: String,
}

/// Tree node for JSON output
#[derive(Debug, Serialize)]
struct TreeEntry {
    /// Record name
    name: String,
    /// Absolute path
    path: String,
    /// File or folder
    kind: String,
    /// Nested entries
    children: Vec<TreeEntry>,
}

impl From<&TreeNode<'_>> for TreeEntry {
    fn from(node: &TreeNode<'_>) -> Self {
        Self {
            name: node.record.name.clone(),
            path: node.record.path.clone(),
            kind: if node.record.is_folder() { "folder" } else { "file" }.to_string(),
            children: node.children.iter().map(TreeEntry::from).collect(),
        }
    }
}

/// Execute the ls command
pub async fn ls(args: &LsArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    session.vault.set_current_path(&args.path);
    session
        .vault
        .set_search_query(args.search.clone().unwrap_or_default());

    if format == OutputFormat::Table {
        let trail: Vec<String> = session
            .vault
            .breadcrumbs()
            .into_iter()
            .map(|b| b.label)
            .collect();
        println!("{}", trail.join(" / "));
    }
    output::print_records(&session.vault.visible(Section::Folders), format);
    Ok(())
}

/// Execute the favorites command
pub async fn favorites(
    args: &SearchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    session
        .vault
        .set_search_query(args.search.clone().unwrap_or_default());
    output::print_records(&session.vault.visible(Section::Favorites), format);
    Ok(())
}

/// Execute the recent command
pub async fn recent(
    args: &RecentArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    let limit = args.limit.unwrap_or(config.vault.recent_limit);
    output::print_records(&session.vault.list_recent(limit), format);
    Ok(())
}

/// Execute the trash command
pub async fn trash(
    args: &SearchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    let search = args.search.as_deref().unwrap_or_default();
    output::print_records(&filter_by_name(session.vault.list_trash(), search), format);
    Ok(())
}

/// Execute the tree command
pub async fn tree(args: &TreeArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    let path = vault_service::view::normalize_path(&args.path);
    let nodes = session.vault.tree(&path);

    match format {
        OutputFormat::Json => {
            let entries: Vec<TreeEntry> = nodes.iter().map(TreeEntry::from).collect();
            output::print_json(&entries);
        }
        OutputFormat::Table => {
            println!("{path}");
            print_tree(&nodes, "");
        }
    }
    Ok(())
}

/// Execute the stats command
pub async fn stats(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    let stats = session.vault.stats();

    match format {
        OutputFormat::Json => output::print_json(&stats),
        OutputFormat::Table => {
            output::print_kv("Total items", &stats.total_items.to_string());
            output::print_kv("Files", &stats.file_count.to_string());
            output::print_kv("Folders", &stats.folder_count.to_string());
            output::print_kv("Secure items", &stats.secure_items.to_string());
            output::print_kv("Storage used", &format_size(stats.total_bytes));
            output::print_kv("In trash", &stats.trashed_items.to_string());
        }
    }
    Ok(())
}

fn print_tree(nodes: &[TreeNode<'_>], indent: &str) {
    for (i, node) in nodes.iter().enumerate() {
        let last = i + 1 == nodes.len();
        let branch = if last { "└── " } else { "├── " };
        let suffix = if node.record.is_folder() { "/" } else { "" };
        println!("{indent}{branch}{}{suffix}", node.record.name);

        let next = format!("{indent}{}", if last { "    " } else { "│   " });
        print_tree(&node.children, &next);
    }
}
