mod domain;
mod clients;
mod config;
mod metadata;
mod validation;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod user_actor;

use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, Instrument};
use crate::app_system::{UserSystem, setup_tracing};
use crate::config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::domain::User;
use crate::metadata::{USER_SCHEMA, USER_TABLE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // An explicit path must exist; the default file is optional
    let config_path = match std::env::args_os().nth(1) {
        Some(path) => Some(PathBuf::from(path)),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
    };
    let config = AppConfig::load(config_path.as_deref(), |name| std::env::var(name).ok())
        .context("loading configuration")?;

    setup_tracing(&config.logging);

    info!(
        table = USER_TABLE.table,
        columns = USER_TABLE.columns.len(),
        "Starting user registry"
    );

    let system = UserSystem::new(&config.store);

    let user = User::new("John Doe", "john.doe@example.com");
    info!(user = %user, "Storing sample user");

    let span = tracing::info_span!("user_creation");
    let user_id = async {
        system.user_client.create_user(user).await
    }
    .instrument(span)
    .await?;

    let stored = system
        .user_client
        .get_user(user_id)
        .await?
        .context("stored user is missing")?;
    info!(user_id, user = %stored, "User stored");

    println!("{}", serde_json::to_string_pretty(&stored)?);
    println!("{}", serde_json::to_string_pretty(&USER_SCHEMA.to_json())?);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
