//! Preset configurations
//!
//! Presets provide complete default solver configurations for common use cases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Throughput: Gabow only, no input validation
    Fast,

    /// Default: strategy picked by edge count, input validated
    Balanced,

    /// Verification: both solvers run and must agree, input validated
    Thorough,

    /// User-defined (YAML only); starts from the balanced defaults
    Custom,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
            Self::Custom => "custom",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            "custom" => Ok(Self::Custom),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("FAST".parse::<Preset>().unwrap(), Preset::Fast);
        assert_eq!("Thorough".parse::<Preset>().unwrap(), Preset::Thorough);
    }

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            "paranoid".parse::<Preset>(),
            Err(ConfigError::UnknownPreset(name)) if name == "paranoid"
        ));
    }

    #[test]
    fn test_display_roundtrip() {
        for preset in [Preset::Fast, Preset::Balanced, Preset::Thorough, Preset::Custom] {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }
}
