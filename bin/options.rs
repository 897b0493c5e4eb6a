use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

#[cfg(test)]
use proptest::prelude::*;

/// The reason why parsing [`Options`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse session configuration")]
pub struct ParseOptionsError(ron::de::SpannedError);

/// Configuration for a terminal session.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields)]
pub struct Options {
    /// Seeds the dice for a reproducible match.
    #[serde(default)]
    pub seed: Option<u64>,

    /// How long to pause after a turn is skipped.
    #[serde(with = "humantime_serde", default = "Options::default_delay")]
    #[cfg_attr(test, strategy((0u64..60_000).prop_map(Duration::from_millis)))]
    pub delay: Duration,
}

impl Options {
    fn default_delay() -> Duration {
        Duration::from_millis(1500)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            seed: None,
            delay: Options::default_delay(),
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Options {
    type Err = ParseOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
