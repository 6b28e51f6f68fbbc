//! Lmod modulefile generation

use crate::error::{ManagerError, Result};
use std::path::Path;

/// Render the Lua modulefile shared by every installed tool version.
///
/// Lmod resolves the module name and version at load time, so the only
/// baked-in value is the installation root.
pub fn render(installation_root: &Path) -> String {
    format!(
        concat!(
            "local pkgName = myModuleName()\n",
            "local version = myModuleVersion()\n",
            "local pkg     = pathJoin(\"{}\",pkgName,version,\"bin\")\n",
            "prepend_path(\"PATH\", pkg)\n",
        ),
        installation_root.display()
    )
}

pub async fn write(config_file: &Path, installation_root: &Path) -> Result<()> {
    tokio::fs::write(config_file, render(installation_root))
        .await
        .map_err(|e| ManagerError::io(format!("Failed to write {}", config_file.display()), e))
}
