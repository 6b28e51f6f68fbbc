//! The fixed table of supported vendor tools

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Vendor tool suites that can be installed as Lmod modules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    GnatPro,
    SparkPro,
    CodePeer,
    GnatStudio,
}

impl ToolKind {
    /// Dispatch order used when classifying names by prefix
    pub const ALL: [ToolKind; 4] = [
        ToolKind::GnatPro,
        ToolKind::SparkPro,
        ToolKind::CodePeer,
        ToolKind::GnatStudio,
    ];

    /// Name of the Lmod module family
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::GnatPro => "gnatpro",
            ToolKind::SparkPro => "sparkpro",
            ToolKind::CodePeer => "codepeer",
            ToolKind::GnatStudio => "gnatstudio",
        }
    }

    /// Prefix of the vendor archive file name
    pub fn archive_name(&self) -> &'static str {
        match self {
            ToolKind::GnatPro => "gnatpro",
            ToolKind::SparkPro => "spark-pro",
            ToolKind::CodePeer => "codepeer",
            ToolKind::GnatStudio => "gnatstudio",
        }
    }

    /// File that every valid installation of this tool contains
    pub fn installation_file(&self) -> &'static Path {
        Path::new(match self {
            ToolKind::GnatPro => "bin/gnat",
            ToolKind::SparkPro => "bin/gnatprove",
            ToolKind::CodePeer => "bin/codepeer",
            ToolKind::GnatStudio => "bin/gnatstudio",
        })
    }

    /// Build the vendor installer invocation.
    ///
    /// `extracted_dir` is the top-level directory unpacked from the archive,
    /// `installation_dir` the final location of this version.
    pub fn installer_command(
        &self,
        extracted_dir: &Path,
        installation_dir: &Path,
    ) -> InstallerCommand {
        match self {
            ToolKind::GnatPro => InstallerCommand {
                program: extracted_dir.join("doinstall"),
                args: Vec::new(),
                current_dir: extracted_dir.to_path_buf(),
                stdin: Some(format!("\n{}\nY\nY\n", installation_dir.display())),
            },
            ToolKind::SparkPro => InstallerCommand {
                program: extracted_dir.join("doinstall"),
                args: Vec::new(),
                current_dir: extracted_dir
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")),
                stdin: Some(format!("{}\n", installation_dir.display())),
            },
            ToolKind::CodePeer | ToolKind::GnatStudio => InstallerCommand {
                program: extracted_dir.join("doinstall"),
                args: vec![installation_dir.as_os_str().to_os_string()],
                current_dir: extracted_dir.to_path_buf(),
                stdin: None,
            },
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully described vendor installer process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
    /// Answers piped to the interactive installer
    pub stdin: Option<String>,
}
