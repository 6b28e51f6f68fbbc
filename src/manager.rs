//! Install and uninstall of tool versions

use crate::archive;
use crate::error::{ManagerError, Result};
use crate::installer;
use crate::modulefile;
use crate::tool::Tool;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, info};

pub const DEFAULT_LMOD_MODULES_DIR: &str = "/etc/lmod/modules";
pub const DEFAULT_INSTALLATION_DIR: &str = "/opt";

#[derive(Debug, Clone)]
pub struct ManagerConfig {
    pub lmod_modules_dir: PathBuf,
    pub installation_dir: PathBuf,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            lmod_modules_dir: PathBuf::from(DEFAULT_LMOD_MODULES_DIR),
            installation_dir: PathBuf::from(DEFAULT_INSTALLATION_DIR),
        }
    }
}

impl ManagerConfig {
    /// Both roots must already exist.
    pub fn validate(&self) -> Result<()> {
        for dir in [&self.lmod_modules_dir, &self.installation_dir] {
            if !dir.is_dir() {
                return Err(ManagerError::DirectoryNotFound { path: dir.clone() });
            }
        }
        Ok(())
    }
}

pub struct LmodManager {
    config: ManagerConfig,
}

impl LmodManager {
    pub fn new(config: ManagerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Install archives in order, stopping at the first failure
    pub async fn install_all(&self, archives: &[PathBuf]) -> Result<Vec<Tool>> {
        let mut installed = Vec::with_capacity(archives.len());
        for archive in archives {
            installed.push(self.install(archive).await?);
        }
        Ok(installed)
    }

    /// Uninstall modules in order, stopping at the first failure
    pub async fn uninstall_all(&self, modules: &[String]) -> Result<Vec<Tool>> {
        let mut removed = Vec::with_capacity(modules.len());
        for module in modules {
            removed.push(self.uninstall(module).await?);
        }
        Ok(removed)
    }

    pub async fn install(&self, archive: &Path) -> Result<Tool> {
        if !archive.is_file() {
            return Err(ManagerError::FileNotFound {
                path: archive.to_path_buf(),
            });
        }

        let tool = Tool::from_archive(archive)?;
        let installation_root = absolute(&self.config.installation_dir)?;
        let installation_dir = tool.installation_dir(&installation_root);
        info!(
            "Installing {}/{} into {}",
            tool.module_name(),
            tool.version(),
            installation_dir.display()
        );

        if let Some(parent) = installation_dir.parent() {
            create_dir_all(parent).await?;
        }
        create_dir_all(&tool.config_dir(&self.config.lmod_modules_dir)).await?;

        let workdir = TempDir::new()
            .map_err(|e| ManagerError::io("Failed to create extraction directory", e))?;
        archive::extract_tar_gz(archive, workdir.path()).await?;

        let extracted_dir = workdir
            .path()
            .join(tool.extracted_archive_dir().unwrap_or_default());
        if !extracted_dir.is_dir() {
            return Err(ManagerError::ExtractedDirectoryMissing {
                path: extracted_dir
                    .strip_prefix(workdir.path())
                    .unwrap_or(extracted_dir.as_path())
                    .to_path_buf(),
            });
        }

        let installer = tool
            .kind()
            .installer_command(&extracted_dir, &installation_dir);
        installer::run_installer(tool.kind(), &installer).await?;
        drop(workdir);

        let config_file = tool.config_file(&self.config.lmod_modules_dir);
        modulefile::write(&config_file, &installation_root).await?;
        debug!("Wrote modulefile {}", config_file.display());

        Ok(tool)
    }

    pub async fn uninstall(&self, module: &str) -> Result<Tool> {
        let tool = Tool::from_module(module)?;
        let installation_dir = tool.installation_dir(&self.config.installation_dir);

        if !installation_dir.exists() {
            return Err(ManagerError::InstallationNotFound {
                path: installation_dir,
            });
        }
        if !installation_dir.join(tool.installation_file()).exists() {
            return Err(ManagerError::InvalidInstallation {
                path: installation_dir,
            });
        }

        let config_file = tool.config_file(&self.config.lmod_modules_dir);
        if !config_file.exists() {
            return Err(ManagerError::ConfigFileNotFound { path: config_file });
        }

        info!(
            "Removing {}/{} from {}",
            tool.module_name(),
            tool.version(),
            installation_dir.display()
        );
        tokio::fs::remove_dir_all(&installation_dir)
            .await
            .map_err(|e| {
                ManagerError::io(format!("Failed to remove {}", installation_dir.display()), e)
            })?;
        tokio::fs::remove_file(&config_file).await.map_err(|e| {
            ManagerError::io(format!("Failed to remove {}", config_file.display()), e)
        })?;

        Ok(tool)
    }
}

async fn create_dir_all(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| ManagerError::io(format!("Failed to create {}", dir.display()), e))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| ManagerError::io(format!("Failed to resolve {}", path.display()), e))
}
