use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("unexpected archive type")]
    UnexpectedArchiveType,

    #[error("unexpected archive name format")]
    UnexpectedArchiveNameFormat,

    #[error("unexpected module type")]
    UnexpectedModuleType,

    #[error("unexpected module name format")]
    UnexpectedModuleNameFormat,

    #[error("file \"{}\" not found", path.display())]
    FileNotFound { path: PathBuf },

    #[error("directory \"{}\" not found", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("installation directory '{}' not found", path.display())]
    InstallationNotFound { path: PathBuf },

    #[error("directory '{}' seems not to contain a valid installation", path.display())]
    InvalidInstallation { path: PathBuf },

    #[error("config file '{}' not found", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("archive does not contain expected directory '{}'", path.display())]
    ExtractedDirectoryMissing { path: PathBuf },

    #[error("installer for {tool} exited with {status}")]
    InstallerFailed {
        tool: String,
        status: std::process::ExitStatus,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ManagerError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ManagerError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ManagerError>;
