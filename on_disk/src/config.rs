use lodb_core::envelope::DEFAULT_COMPRESSION_LEVEL;
use lodb_core::object::DEFAULT_MAX_OBJECT_SIZE;

/// Settings that control how an `OnDiskRepo` creates and stores objects.
///
/// Build one from `Config::default()` and the `with_*` methods.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    default_branch: String,
    compression_level: u32,
    max_object_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_branch: "master".to_string(),
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_object_size: DEFAULT_MAX_OBJECT_SIZE,
        }
    }
}

impl Config {
    /// Branch that the initial HEAD points to.
    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    /// zlib level (0 to 9) used when storing objects.
    pub fn compression_level(&self) -> u32 {
        self.compression_level
    }

    /// Largest body size, in bytes, that will be read back from the store.
    pub fn max_object_size(&self) -> usize {
        self.max_object_size
    }

    pub fn with_default_branch<S: Into<String>>(mut self, branch: S) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Levels above 9 are clamped to 9.
    pub fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level.min(9);
        self
    }

    pub fn with_max_object_size(mut self, max: usize) -> Self {
        self.max_object_size = max;
        self
    }
}
