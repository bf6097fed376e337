//! Persists rendered text.
//!
//! There is no write-to-temp-then-rename step: if writing fails partway the
//! target may be left truncated or empty. The error still aborts the
//! invocation so the build never treats that file as a success.

use std::path::Path;

use tracing::{debug, info};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::domain::Charset;

pub struct OutputWriter;

impl OutputWriter {
    /// Encode `content` and write it to `path`, creating missing parent
    /// directories first. Returns the number of bytes written.
    pub fn write(
        filesystem: &dyn Filesystem,
        path: &Path,
        content: &str,
        charset: &Charset,
    ) -> Result<usize, ApplicationError> {
        let bytes = charset
            .encode(content)
            .map_err(|_| ApplicationError::Unencodable {
                path: path.to_path_buf(),
                charset: charset.label().to_string(),
            })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !filesystem.is_dir(parent) {
                debug!(dir = %parent.display(), "Creating output directory");
                filesystem.create_dir_all(parent).map_err(|source| {
                    ApplicationError::DirectoryCreation {
                        path: parent.to_path_buf(),
                        source,
                    }
                })?;
            }
        }

        filesystem
            .write_file(path, &bytes)
            .map_err(|source| ApplicationError::WriteFailed {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Generated resource written to: {}", path.display());
        Ok(bytes.len())
    }
}
