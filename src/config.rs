//! Playback configuration with YAML schema and validation.
//!
//! Mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde (`deny_unknown_fields`)
//! - Runtime semantic validation
//!
//! Defaults reproduce the classic demo: 100 elements in `[10, 500]`,
//! a 144 Hz frame cap, and a time-derived seed. The algorithm rotation
//! itself is fixed and not part of the configuration surface.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{VizError, VizResult};

/// Playback configuration.
///
/// Loaded from YAML files with schema validation, or built with
/// [`PlaybackConfig::default`].
///
/// ```
/// use sortviz::config::PlaybackConfig;
///
/// let yaml = "
/// array_len: 64
/// min_value: 10
/// max_value: 500
/// fps: 60
/// seed: 42
/// ";
/// let config = PlaybackConfig::from_yaml(yaml).unwrap();
/// assert_eq!(config.array_len, 64);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Number of elements in each freshly generated array.
    #[serde(default = "default_array_len")]
    pub array_len: usize,

    /// Smallest value the generator may produce (inclusive).
    #[serde(default = "default_min_value")]
    pub min_value: u32,

    /// Largest value the generator may produce (inclusive).
    #[serde(default = "default_max_value")]
    pub max_value: u32,

    /// Outer-loop frame-rate cap in Hz.
    #[serde(default = "default_fps")]
    pub fps: u32,

    /// Master seed for reproducible runs. `None` seeds from the clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_array_len() -> usize {
    100
}

const fn default_min_value() -> u32 {
    10
}

const fn default_max_value() -> u32 {
    500
}

const fn default_fps() -> u32 {
    144
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            array_len: default_array_len(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            fps: default_fps(),
            seed: None,
        }
    }
}

impl PlaybackConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails,
    /// or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation beyond what serde can express.
    ///
    /// # Errors
    ///
    /// Returns `VizError::Config` if any parameter is out of range.
    pub fn validate(&self) -> VizResult<()> {
        if self.array_len == 0 {
            return Err(VizError::config("array_len must be at least 1"));
        }
        if self.min_value == 0 {
            // Bar heights are value-proportional; zero-height bars are
            // invisible and counting sort's bucket table starts at 0.
            return Err(VizError::config("min_value must be positive"));
        }
        if self.min_value > self.max_value {
            return Err(VizError::config(format!(
                "min_value {} exceeds max_value {}",
                self.min_value, self.max_value
            )));
        }
        if self.fps == 0 {
            return Err(VizError::config("fps must be positive"));
        }
        Ok(())
    }
}
