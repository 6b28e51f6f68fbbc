//! Lmod Manager - vendor toolchain installer
//!
//! This crate installs vendor toolchain archives (GNAT Pro, SPARK Pro,
//! CodePeer, GNAT Studio) below an installation root and generates the Lmod
//! modulefiles that expose each installed version.

pub mod archive;
pub mod cli;
pub mod error;
pub mod installer;
pub mod manager;
pub mod modulefile;
pub mod tool;

pub use error::{ManagerError, Result};
pub use manager::{LmodManager, ManagerConfig};
pub use tool::{Tool, ToolKind};
