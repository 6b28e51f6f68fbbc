//! Classification of vendor archives and Lmod module identifiers

pub mod kind;
pub mod naming;

pub use kind::{InstallerCommand, ToolKind};

use crate::error::{ManagerError, Result};
use std::path::{Path, PathBuf};

/// Target variant that denotes a native toolchain
const NATIVE_TARGET: &str = "x86_64";

/// A tool version classified from an archive or a module name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    kind: ToolKind,
    version: String,
    target: String,
    /// Host platform token, only known when classifying an archive file
    platform: Option<String>,
}

impl Tool {
    pub fn from_archive(archive: &Path) -> Result<Self> {
        let file_name = archive
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let kind = naming::archive_kind(&file_name).ok_or(ManagerError::UnexpectedArchiveType)?;
        let parsed = naming::parse_archive_name(kind, &file_name)
            .ok_or(ManagerError::UnexpectedArchiveNameFormat)?;

        Ok(Self {
            kind,
            version: parsed.version,
            target: parsed.target,
            platform: Some(parsed.platform),
        })
    }

    pub fn from_module(module: &str) -> Result<Self> {
        let kind = naming::module_kind(module).ok_or(ManagerError::UnexpectedModuleType)?;
        let parsed =
            naming::parse_module_name(kind, module).ok_or(ManagerError::UnexpectedModuleNameFormat)?;

        Ok(Self {
            kind,
            version: parsed.version,
            target: parsed.target,
            platform: None,
        })
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Lmod module family, qualified by the target for cross toolchains
    pub fn module_name(&self) -> String {
        if !self.target.is_empty() && self.target != NATIVE_TARGET {
            format!("{}-{}", self.kind.name(), self.target)
        } else {
            self.kind.name().to_string()
        }
    }

    pub fn config_dir(&self, lmod_modules_dir: &Path) -> PathBuf {
        lmod_modules_dir.join(self.module_name())
    }

    pub fn config_file(&self, lmod_modules_dir: &Path) -> PathBuf {
        self.config_dir(lmod_modules_dir)
            .join(format!("{}.lua", self.version))
    }

    pub fn installation_dir(&self, installation_root: &Path) -> PathBuf {
        installation_root
            .join(self.module_name())
            .join(&self.version)
    }

    /// Top-level directory inside the vendor archive.
    ///
    /// Only available for tools classified from an archive.
    pub fn extracted_archive_dir(&self) -> Option<PathBuf> {
        self.platform.as_ref().map(|platform| {
            PathBuf::from(format!(
                "{}-{}-{}-{}-bin",
                self.kind.archive_name(),
                self.version,
                self.target,
                platform
            ))
        })
    }

    pub fn installation_file(&self) -> &'static Path {
        self.kind.installation_file()
    }
}
