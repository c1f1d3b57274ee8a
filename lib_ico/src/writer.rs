use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{error, info};

/// Writes `data` to `path`, replacing any existing file.
///
/// The parent directory must already exist. The write is not atomic: a failure
/// partway through can leave a truncated file behind.
pub fn save(data: &[u8], path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();

    let mut file = File::create(path).map_err(|e| {
        error!("Can't create {}: {}", path.display(), e);
        e
    })?;
    file.write_all(data)?;

    info!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
