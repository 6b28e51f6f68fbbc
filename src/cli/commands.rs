use crate::cli::options::Commands;
use crate::error::Result;
use crate::manager::{LmodManager, ManagerConfig};
use tracing::info;

/// Validate the configured roots, then run `command`.
pub async fn execute(config: ManagerConfig, command: Commands) -> Result<()> {
    let manager = LmodManager::new(config)?;

    match command {
        Commands::Install { archives } => {
            let installed = manager.install_all(&archives).await?;
            for tool in &installed {
                info!("Installed {}/{}", tool.module_name(), tool.version());
            }
        }
        Commands::Uninstall { modules } => {
            let removed = manager.uninstall_all(&modules).await?;
            for tool in &removed {
                info!("Uninstalled {}/{}", tool.module_name(), tool.version());
            }
        }
    }

    Ok(())
}

/// Log filter level for a `-v` count
pub fn log_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
