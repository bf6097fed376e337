//! Template source validation.

use std::path::Path;

use tracing::debug;

use crate::application::{ValidationError, ports::Filesystem};

/// Confirms a template is usable before any processing begins.
///
/// Checks run in order (exists, regular file, readable) and stop at the
/// first failure.
pub struct TemplateValidator;

impl TemplateValidator {
    pub fn validate(filesystem: &dyn Filesystem, template: &Path) -> Result<(), ValidationError> {
        if !filesystem.exists(template) {
            return Err(ValidationError::NotFound {
                path: template.to_path_buf(),
            });
        }
        if !filesystem.is_file(template) {
            return Err(ValidationError::NotAFile {
                path: template.to_path_buf(),
            });
        }
        if !filesystem.is_readable(template) {
            return Err(ValidationError::NotReadable {
                path: template.to_path_buf(),
            });
        }

        debug!(template = %template.display(), "Template validated");
        Ok(())
    }
}
