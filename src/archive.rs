//! Extraction of gzip-compressed vendor tarballs

use crate::error::{ManagerError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tar::Archive;
use tokio::task;
use tracing::{debug, warn};

/// Unpack `src` into `dest`, keeping file modes so installers stay executable.
///
/// Entries containing `..` are skipped. Entries that would be written
/// through a symlink pointing outside `dest` abort the extraction.
pub async fn extract_tar_gz(src: &Path, dest: &Path) -> Result<()> {
    let src = src.to_path_buf();
    let dest = dest.to_path_buf();

    task::spawn_blocking(move || extract_sync(&src, &dest)).await?
}

fn extract_sync(src: &Path, dest: &Path) -> Result<()> {
    let open_err = |e| ManagerError::io(format!("Failed to open archive {}", src.display()), e);
    let read_err = |e| ManagerError::io(format!("Failed to read archive {}", src.display()), e);

    let file = File::open(src).map_err(open_err)?;
    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));
    archive.set_preserve_permissions(true);
    archive.set_preserve_mtime(true);

    std::fs::create_dir_all(dest)
        .map_err(|e| ManagerError::io(format!("Failed to create {}", dest.display()), e))?;

    let mut extracted = 0usize;
    for entry in archive.entries().map_err(read_err)? {
        let mut entry = entry.map_err(read_err)?;
        let path = entry.path().map_err(read_err)?.to_path_buf();

        let unpacked = entry
            .unpack_in(dest)
            .map_err(|e| ManagerError::io(format!("Failed to extract {}", path.display()), e))?;
        if unpacked {
            extracted += 1;
        } else {
            warn!("Skipping unsafe path: {:?}", path);
        }
    }

    debug!("Extracted {} entries from {}", extracted, src.display());

    Ok(())
}
