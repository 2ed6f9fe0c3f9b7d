use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

/// Settings controlling how a directory becomes a background.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Total time allotted to each image, cross-fade included.
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
    /// Length of the cross-fade into the next image.
    #[serde(with = "humantime_serde")]
    pub transition: Duration,
    /// Randomize image order before pairing.
    pub shuffle: bool,
    /// Optional deterministic seed for the shuffle.
    pub shuffle_seed: Option<u64>,
}

impl Settings {
    const fn default_duration() -> Duration {
        Duration::from_secs(900)
    }

    const fn default_transition() -> Duration {
        Duration::from_secs(2)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_yaml::from_str(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Validate invariants serde defaults cannot express.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            self.duration.subsec_nanos() == 0,
            "duration must be a whole number of seconds"
        );
        ensure!(
            self.transition.subsec_nanos() == 0,
            "transition must be a whole number of seconds"
        );
        ensure!(
            self.transition > Duration::ZERO,
            "transition must be greater than zero"
        );
        ensure!(
            self.duration > self.transition,
            "duration ({}) must be longer than transition ({})",
            humantime::format_duration(self.duration),
            humantime::format_duration(self.transition)
        );
        Ok(self)
    }

    /// Seconds each image is shown before its cross-fade starts.
    #[must_use]
    pub fn static_secs(&self) -> u64 {
        self.duration.saturating_sub(self.transition).as_secs()
    }

    #[must_use]
    pub const fn transition_secs(&self) -> u64 {
        self.transition.as_secs()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: Self::default_duration(),
            transition: Self::default_transition(),
            shuffle: true,
            shuffle_seed: None,
        }
    }
}
