//! Exact search configuration.

/// Configuration for [`ExactRunner`](super::ExactRunner).
///
/// # Examples
///
/// ```
/// use u_roster::exact::ExactConfig;
///
/// let config = ExactConfig::default()
///     .with_time_limit_ms(5_000)
///     .with_bound_pruning(false);
/// assert_eq!(config.max_nodes, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExactConfig {
    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,

    /// Maximum number of selections (search nodes). 0 = no limit.
    pub max_nodes: u64,

    /// Cut branches whose optimistic score cannot beat the incumbent.
    ///
    /// Only changes how many nodes are explored, never which improvements
    /// are reported.
    pub bound_pruning: bool,
}

impl Default for ExactConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 0,
            max_nodes: 0,
            bound_pruning: true,
        }
    }
}

impl ExactConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    pub fn with_bound_pruning(mut self, enabled: bool) -> Self {
        self.bound_pruning = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExactConfig::default();
        assert_eq!(config.time_limit_ms, 0);
        assert_eq!(config.max_nodes, 0);
        assert!(config.bound_pruning);
    }

    #[test]
    fn test_builders() {
        let config = ExactConfig::default()
            .with_time_limit_ms(10)
            .with_max_nodes(99)
            .with_bound_pruning(false);
        assert_eq!(config.time_limit_ms, 10);
        assert_eq!(config.max_nodes, 99);
        assert!(!config.bound_pruning);
    }
}
