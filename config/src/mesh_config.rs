//! Runtime settings shared by every generator built through the factory.

use thiserror::Error;

use crate::constants::DEFAULT_ARC_LENGTH;

/// Immutable snapshot of the settings a shape factory applies.
///
/// # Examples
/// ```
/// use config::MeshConfig;
/// let config = MeshConfig::default();
/// assert!(config.arc_length > 0.0);
/// assert!(!config.validate_extents);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    /// Target arc length of one side of a circular cross-section.
    pub arc_length: f64,
    /// Reject non-positive or non-finite extents instead of emitting
    /// degenerate geometry.
    pub validate_extents: bool,
}

impl MeshConfig {
    /// Builds a configuration with a custom arc length.
    ///
    /// # Examples
    /// ```
    /// use config::MeshConfig;
    /// let cfg = MeshConfig::new(0.5).expect("valid config");
    /// assert_eq!(cfg.arc_length, 0.5);
    /// assert!(MeshConfig::new(0.0).is_err());
    /// ```
    pub fn new(arc_length: f64) -> Result<Self, ConfigError> {
        if !arc_length.is_finite() || arc_length <= 0.0 {
            return Err(ConfigError::InvalidArcLength(arc_length));
        }
        Ok(Self {
            arc_length,
            validate_extents: false,
        })
    }

    /// Default settings with extent validation turned on.
    ///
    /// # Examples
    /// ```
    /// use config::MeshConfig;
    /// assert!(MeshConfig::strict().validate_extents);
    /// ```
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_extents: true,
            ..Self::default()
        }
    }

    /// Returns a copy with extent validation set to `enabled`.
    #[must_use]
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_extents = enabled;
        self
    }
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            arc_length: DEFAULT_ARC_LENGTH,
            validate_extents: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the arc length is zero, negative, or not finite.
    #[error("arc_length must be positive and finite: {0}")]
    InvalidArcLength(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_permissive() {
        let cfg = MeshConfig::default();
        assert_eq!(cfg.arc_length, DEFAULT_ARC_LENGTH);
        assert!(!cfg.validate_extents);
    }

    #[test]
    fn new_rejects_bad_arc_lengths() {
        assert_eq!(
            MeshConfig::new(0.0).unwrap_err(),
            ConfigError::InvalidArcLength(0.0)
        );
        assert_eq!(
            MeshConfig::new(-1.0).unwrap_err(),
            ConfigError::InvalidArcLength(-1.0)
        );
        assert!(MeshConfig::new(f64::INFINITY).is_err());
        assert!(MeshConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn with_validation_toggles_flag() {
        let cfg = MeshConfig::new(0.25).unwrap().with_validation(true);
        assert!(cfg.validate_extents);
        assert_eq!(cfg.arc_length, 0.25);
    }

    #[test]
    fn error_message_names_value() {
        let msg = ConfigError::InvalidArcLength(-2.0).to_string();
        assert!(msg.contains("arc_length"));
        assert!(msg.contains("-2"));
    }
}
