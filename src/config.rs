//! Project configuration (randomart.yaml) parsing.
//!
//! The config file sets render defaults; command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ArtError, Result};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "randomart.yaml";

/// Image file format written by `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Slab,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Slab => "slab",
        }
    }
}

/// Render settings loaded from randomart.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Output directory for rendered images.
    pub output: PathBuf,

    /// Side length of the sampled grid, in pixels.
    pub size: usize,

    /// Integer upscale applied when writing PNGs.
    pub scale: u32,

    /// Smallest tree complexity to generate (inclusive).
    pub min_complexity: usize,

    /// Largest tree complexity to generate (exclusive).
    pub max_complexity: usize,

    /// Base seed. Image `i` uses `seed + i`; random when unset.
    pub seed: Option<u64>,

    pub format: OutputFormat,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("out"),
            size: 512,
            scale: 1,
            min_complexity: 20,
            max_complexity: 150,
            seed: None,
            format: OutputFormat::Png,
        }
    }
}

impl ArtConfig {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `randomart.yaml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ArtError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILE)),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that cannot produce an image.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(ArtError::Config {
                message: "size must be at least 1".to_string(),
                help: Some("Set size to the image side length in pixels".to_string()),
            });
        }
        if self.format == OutputFormat::Png {
            let side = (self.size as u64).checked_mul(u64::from(self.scale.max(1)));
            if side.map_or(true, |side| side > u64::from(u32::MAX)) {
                return Err(ArtError::Config {
                    message: format!(
                        "size {} at scale {} is too large for a PNG",
                        self.size, self.scale
                    ),
                    help: Some("Lower size or scale".to_string()),
                });
            }
        }
        if self.min_complexity > self.max_complexity {
            return Err(ArtError::Config {
                message: format!(
                    "min_complexity ({}) is greater than max_complexity ({})",
                    self.min_complexity, self.max_complexity
                ),
                help: None,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full() {
        let yaml = r#"
output: renders
size: 256
scale: 2
min_complexity: 5
max_complexity: 10
seed: 77
format: slab
"#;
        let config = ArtConfig::parse(yaml).unwrap();
        assert_eq!(config.output, PathBuf::from("renders"));
        assert_eq!(config.size, 256);
        assert_eq!(config.scale, 2);
        assert_eq!(config.min_complexity, 5);
        assert_eq!(config.max_complexity, 10);
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.format, OutputFormat::Slab);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = ArtConfig::parse("size: 64\n").unwrap();
        assert_eq!(config.size, 64);
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.min_complexity, 20);
        assert_eq!(config.max_complexity, 150);
        assert_eq!(config.seed, None);
        assert_eq!(config.format, OutputFormat::Png);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = ArtConfig::parse("size: [1, 2").unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
    }

    #[test]
    fn test_validate_zero_size() {
        assert!(ArtConfig::parse("size: 0\n").is_err());
    }

    #[test]
    fn test_validate_scaled_png_side() {
        let err = ArtConfig::parse("size: 2\nscale: 2147483648\n").unwrap_err();
        assert!(matches!(err, ArtError::Config { .. }));
        assert!(ArtConfig::parse("size: 2\nscale: 2147483647\n").is_ok());
        // Slab output ignores scale
        assert!(ArtConfig::parse("size: 2\nscale: 4294967295\nformat: slab\n").is_ok());
    }

    #[test]
    fn test_validate_complexity_order() {
        assert!(ArtConfig::parse("min_complexity: 50\nmax_complexity: 10\n").is_err());
        assert!(ArtConfig::parse("min_complexity: 10\nmax_complexity: 10\n").is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "scale: 4\n").unwrap();

        let config = ArtConfig::discover(Some(&path)).unwrap();
        assert_eq!(config.scale, 4);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = ArtConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ArtError::Io { .. }));
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Slab.extension(), "slab");
    }
}
