use std::path::{Path, PathBuf};

/// Directory under the build base that receives relative outputs.
pub const GENERATED_RESOURCES_DIR: &str = "generated-resources";

/// Computes where the generated artifact is written.
pub struct OutputPathResolver;

impl OutputPathResolver {
    /// Absolute outputs are returned unchanged; relative ones land under
    /// `base/generated-resources/`.
    ///
    /// `base` is supplied by the build context and is taken as absolute
    /// without further checks.
    pub fn resolve(output: &Path, base: &Path) -> PathBuf {
        if output.is_absolute() {
            return output.to_path_buf();
        }
        base.join(GENERATED_RESOURCES_DIR).join(output)
    }
}
