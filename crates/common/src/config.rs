use serde::Deserialize;

use crate::error::{CollectorError, Result};

/// Prefix shared by every environment variable the collector reads.
pub const ENV_PREFIX: &str = "COLLECTOR_";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Number of target points, excluding the base.
    #[serde(default = "default_point_count")]
    pub point_count: i64,
    /// Fixed reproducibility seed. A fresh one is picked when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_svg_output")]
    pub svg_output: String,
    /// Where to write the JSON tour report, if anywhere.
    #[serde(default)]
    pub json_output: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_point_count() -> i64 {
    50
}

fn default_svg_output() -> String {
    "optimal_path.svg".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            point_count: default_point_count(),
            seed: None,
            svg_output: default_svg_output(),
            json_output: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();
        // Parse COLLECTOR_* variables into the Config struct
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .map_err(|e| CollectorError::Config(e.to_string()))
    }

    /// Same as [`Config::from_env`] but reads from explicit key/value pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .map_err(|e| CollectorError::Config(e.to_string()))
    }

    /// Validated target count. Non-positive values are rejected.
    pub fn point_count(&self) -> Result<usize> {
        usize::try_from(self.point_count)
            .ok()
            .filter(|count| *count > 0)
            .ok_or(CollectorError::InvalidPointCount(self.point_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.point_count, 50);
        assert_eq!(config.seed, None);
        assert_eq!(config.svg_output, "optimal_path.svg");
        assert_eq!(config.json_output, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn reads_prefixed_variables() {
        let config = Config::from_vars(vars(&[
            ("COLLECTOR_POINT_COUNT", "12"),
            ("COLLECTOR_SEED", "424242"),
            ("COLLECTOR_JSON_OUTPUT", "tour.json"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.point_count().unwrap(), 12);
        assert_eq!(config.seed, Some(424242));
        assert_eq!(config.json_output.as_deref(), Some("tour.json"));
    }

    #[test]
    fn malformed_value_is_a_config_error() {
        let err = Config::from_vars(vars(&[("COLLECTOR_POINT_COUNT", "lots")])).unwrap_err();
        assert!(matches!(err, CollectorError::Config(_)));
    }

    #[test]
    fn non_positive_point_count_is_rejected() {
        for bad in [0, -3] {
            let config = Config {
                point_count: bad,
                ..Config::default()
            };
            assert!(matches!(
                config.point_count(),
                Err(CollectorError::InvalidPointCount(n)) if n == bad
            ));
        }
    }
}
