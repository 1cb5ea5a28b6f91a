//! SA configuration and cooling schedules.

use crate::error::{Result, RosterError};

/// Cooling schedule for temperature reduction, applied after every slot's
/// swap attempt.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees {
        /// Cooling parameter, positive.
        beta: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.99999 }
    }
}

impl CoolingSchedule {
    /// Next temperature after one swap attempt.
    #[inline]
    pub fn cool(self, temperature: f64) -> f64 {
        match self {
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
            CoolingSchedule::LundyMees { beta } => temperature / (1.0 + beta * temperature),
        }
    }
}

/// Configuration for the greedy-construction + annealing metaheuristic.
///
/// # Examples
///
/// ```
/// use u_roster::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling(CoolingSchedule::Geometric { alpha: 0.98 })
///     .with_max_rounds(10_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Starting temperature. Large values accept almost any worsening swap.
    pub initial_temperature: f64,

    /// At or below this temperature the search is frozen: worsening swaps
    /// are never accepted and the annealer reduces to hill climbing.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum number of improvement rounds. 0 = no limit.
    pub max_rounds: u64,

    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1e5,
            min_temperature: 1e-9,
            cooling: CoolingSchedule::default(),
            max_rounds: 0,
            time_limit_ms: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_rounds(mut self, n: u64) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(RosterError::InvalidConfig(msg));
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return invalid("initial_temperature must be positive".into());
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return invalid("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if alpha.is_nan() || alpha <= 0.0 || alpha >= 1.0 {
                    return invalid(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if beta.is_nan() || beta <= 0.0 {
                    return invalid(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1e5).abs() < 1e-6);
        assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.99999 });
        assert_eq!(config.max_rounds, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(matches!(config.validate(), Err(RosterError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_nan_temperature() {
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_cooling_parameters() {
        let geometric = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: f64::NAN });
        assert!(geometric.validate().is_err());
        let lundy = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: f64::NAN });
        assert!(lundy.validate().is_err());
        let min = SaConfig::default().with_min_temperature(f64::NAN);
        assert!(min.validate().is_err());
    }

    #[test]
    fn test_validate_bad_beta() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::LundyMees { beta: -1.0 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_steps() {
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geometric.cool(8.0) - 4.0).abs() < 1e-12);
        let lundy = CoolingSchedule::LundyMees { beta: 1.0 };
        assert!((lundy.cool(1.0) - 0.5).abs() < 1e-12);
    }
}
