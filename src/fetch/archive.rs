//! Gzip tarball extraction.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{CopasError, Result};

/// Unpack the gzip-compressed tarball at `archive` into `dest`.
///
/// Existing files in `dest` are overwritten by entries of the same name.
pub fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<()> {
    tracing::debug!("Extracting {} into {}", archive.display(), dest.display());

    let file = File::open(archive)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let mut tarball = tar::Archive::new(decoder);
    tarball.set_overwrite(true);

    tarball.unpack(dest).map_err(|e| CopasError::ExtractFailed {
        archive: archive.to_path_buf(),
        message: e.to_string(),
    })
}
