use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ClinicError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClinicConfig {
    /// Name shown on the landing page and in the header.
    pub clinic_name: String,

    /// First bookable hour of the day.
    pub opening_hour: u8,

    /// Hour after which no slot starts.
    pub closing_hour: u8,

    /// Visit lengths offered when booking, in minutes.
    pub visit_durations: Vec<u32>,

    /// Header clock refresh period, in seconds.
    pub clock_refresh_secs: u64,

    /// How many patients the demo dataset holds.
    pub sample_patients: usize,

    /// How many appointments the demo dataset holds.
    pub sample_appointments: usize,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: "Brain Dental X".to_string(),
            opening_hour: 8,
            closing_hour: 18,
            visit_durations: vec![30, 45, 60],
            clock_refresh_secs: 60,
            sample_patients: 50,
            sample_appointments: 30,
        }
    }
}

impl ClinicConfig {
    /// Loads a TOML config, falling back to defaults when the file is
    /// absent. Unknown keys are ignored; missing keys take their default.
    pub fn load(path: &Path) -> Result<Self, ClinicError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ClinicError::Configuration {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ClinicError::Configuration {
            message: format!("cannot parse {}: {e}", path.display()),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ClinicError> {
        if self.opening_hour >= self.closing_hour {
            return Err(ClinicError::Configuration {
                message: format!(
                    "opening hour {} must come before closing hour {}",
                    self.opening_hour, self.closing_hour
                ),
            });
        }
        if self.closing_hour > 24 {
            return Err(ClinicError::Configuration {
                message: format!("closing hour {} is not a valid hour", self.closing_hour),
            });
        }
        if self.visit_durations.is_empty() {
            return Err(ClinicError::Configuration {
                message: "at least one visit duration is required".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClinicConfig::default();
        assert_eq!(config.clinic_name, "Brain Dental X");
        assert_eq!(config.opening_hour, 8);
        assert_eq!(config.closing_hour, 18);
        assert_eq!(config.visit_durations, vec![30, 45, 60]);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ClinicConfig = toml::from_str("clinic_name = \"Cabinet Sourire\"").unwrap();
        assert_eq!(config.clinic_name, "Cabinet Sourire");
        assert_eq!(config.clock_refresh_secs, 60);
    }

    #[test]
    fn test_validate_rejects_inverted_hours() {
        let config = ClinicConfig {
            opening_hour: 19,
            closing_hour: 18,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ClinicConfig::load(Path::new("/nonexistent/dentio.toml")).unwrap();
        assert_eq!(config, ClinicConfig::default());
    }
}
