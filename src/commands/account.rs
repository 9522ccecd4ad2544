//! Account CLI commands: register, login, logout, whoami.

use clap::Args;

use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_entity::user::UserRecord;

use crate::output::{self, OutputFormat};
use crate::session::Session;

/// Arguments for the register command
#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Email address (the login key)
    #[arg(short, long)]
    pub email: String,

    /// Display name
    #[arg(short, long)]
    pub name: String,

    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(short, long)]
    pub email: String,

    /// Password (will prompt if not provided)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the register command
pub async fn register(
    args: &RegisterArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let user = session
        .auth
        .register(&args.email, &password, &args.name)
        .await?;

    print_user(&user, format);
    if format == OutputFormat::Table {
        output::print_success(&format!("Registered and logged in as {}", user.email));
    }
    Ok(())
}

/// Execute the login command
pub async fn login(
    args: &LoginArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let user = session.auth.login(&args.email, &password).await?;

    match format {
        OutputFormat::Json => output::print_json(&user),
        OutputFormat::Table => output::print_success(&format!("Logged in as {}", user.email)),
    }
    Ok(())
}

/// Execute the logout command
pub async fn logout(config: &AppConfig) -> Result<(), AppError> {
    let mut session = Session::open(config).await?;
    if session.auth.current_user().is_none() {
        output::print_warning("Not logged in");
        return Ok(());
    }

    session.auth.logout().await?;
    output::print_success("Logged out");
    Ok(())
}

/// Execute the whoami command
pub async fn whoami(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let session = Session::open(config).await?;
    match session.auth.current_user() {
        Some(user) => print_user(user, format),
        None => match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Table => output::print_warning("Not logged in"),
        },
    }
    Ok(())
}

fn print_user(user: &UserRecord, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(user),
        OutputFormat::Table => {
            output::print_kv("ID", &user.id.to_string());
            output::print_kv("Name", &user.name);
            output::print_kv("Email", &user.email);
            output::print_kv("Role", &user.role.to_string());
        }
    }
}
