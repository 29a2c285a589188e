//! Configuration error types

use thiserror::Error;

/// Invalid choreography configuration, detected once at setup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length, period, rate or extent that must be strictly positive
    #[error("{name} must be positive and finite, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    /// A value that must be finite (zero and negatives allowed)
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// A ratio or factor outside its allowed closed range
    #[error("{name} must lie within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Edge fade threshold outside `[0, half_extent)`
    #[error("fade threshold {threshold} must lie within [0, {half_extent})")]
    FadeThreshold { threshold: f32, half_extent: f32 },

    /// Staggered rings whose phase step is a whole number of expansion cycles
    #[error("shockwave phase step {phase_step} leaves the rings synchronized")]
    SynchronizedRings { phase_step: f32 },

    /// A particle or ring count of zero
    #[error("{name} must be at least 1")]
    EmptyCount { name: &'static str },
}

/// Result type for configuration checks
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Accept `value` only when it is finite and strictly positive.
pub fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

/// Accept `value` only when it is finite.
pub fn ensure_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { name, value })
    }
}

/// Accept `value` only when it lies within `[min, max]`.
pub fn ensure_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<f32> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("speed", 6.0), Ok(6.0));
        assert_eq!(
            ensure_positive("speed", 0.0),
            Err(ConfigError::NonPositive {
                name: "speed",
                value: 0.0
            })
        );
        assert!(ensure_positive("speed", -1.0).is_err());
        assert!(ensure_positive("speed", f32::NAN).is_err());
        assert!(ensure_positive("speed", f32::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("depth", -2.0), Ok(-2.0));
        assert!(ensure_finite("depth", f32::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_ensure_range() {
        assert_eq!(ensure_range("ratio", 0.7, 0.0, 1.0), Ok(0.7));
        assert_eq!(ensure_range("ratio", 1.0, 0.0, 1.0), Ok(1.0));
        assert!(ensure_range("ratio", 1.2, 0.0, 1.0).is_err());
        assert!(ensure_range("ratio", f32::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::NonPositive {
            name: "max_distance",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "max_distance must be positive and finite, got 0");

        let err = ConfigError::FadeThreshold {
            threshold: 16.0,
            half_extent: 15.0,
        };
        assert_eq!(err.to_string(), "fade threshold 16 must lie within [0, 15)");
    }
}
