use crate::manager::{ManagerConfig, DEFAULT_INSTALLATION_DIR, DEFAULT_LMOD_MODULES_DIR};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage Lmod modulefiles for vendor toolchain suites
#[derive(Parser, Debug)]
#[command(name = "lmod-manager")]
#[command(about = "Install vendor toolchain archives and manage their Lmod modulefiles")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct LmodManagerCli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to lmod module directory
    #[arg(
        short = 'l',
        value_name = "LMOD_MODULES_DIR",
        env = "LMOD_MODULES_DIR",
        default_value = DEFAULT_LMOD_MODULES_DIR
    )]
    pub lmod_modules_dir: PathBuf,

    /// Path to installation directory
    #[arg(
        short = 'i',
        value_name = "INSTALLATION_DIR",
        env = "LMOD_INSTALLATION_DIR",
        default_value = DEFAULT_INSTALLATION_DIR
    )]
    pub installation_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install archives and generate their modulefiles
    Install {
        /// List of archives (e.g., spark-pro-22.1-x86_64-linux-bin.tar.gz)
        #[arg(value_name = "ARCHIVE", required = true)]
        archives: Vec<PathBuf>,
    },

    /// Remove installations and their modulefiles
    Uninstall {
        /// List of modules (e.g., sparkpro/22.1)
        #[arg(value_name = "MODULE", required = true)]
        modules: Vec<String>,
    },
}

impl From<&LmodManagerCli> for ManagerConfig {
    fn from(cli: &LmodManagerCli) -> Self {
        Self {
            lmod_modules_dir: cli.lmod_modules_dir.clone(),
            installation_dir: cli.installation_dir.clone(),
        }
    }
}
