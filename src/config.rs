//! Configuration for the query planner.
use crate::compute::base32::BITS_PER_CHAR;
use crate::compute::distance::DistanceMetric;
use crate::compute::geohash::DEFAULT_PRECISION;
use crate::compute::merge::MAX_BITS;
use serde::de::Error;

/// Deepest precision a bound query can reach, in characters.
pub const MAX_QUERY_PRECISION: usize = MAX_BITS / BITS_PER_CHAR;

/// Planner configuration
///
/// # Example
///
/// ```rust
/// use geobounds::{Config, DistanceMetric};
///
/// let json = r#"{
///     "default_precision": 8,
///     "distance_metric": "haversine"
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.default_precision, 8);
/// assert_eq!(config.distance_metric, DistanceMetric::Haversine);
/// assert_eq!(config.max_precision, 22);
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Characters produced by `encode` when no precision is given (1-22)
    #[serde(default = "Config::default_precision")]
    pub default_precision: usize,

    /// Metric used by `distance_meters`
    #[serde(default)]
    pub distance_metric: DistanceMetric,

    /// Deepest precision of a bound query range, in characters (1-22)
    #[serde(default = "Config::default_max_precision")]
    pub max_precision: usize,
}

impl Config {
    const fn default_precision() -> usize {
        DEFAULT_PRECISION
    }

    const fn default_max_precision() -> usize {
        MAX_QUERY_PRECISION
    }

    pub fn with_default_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_QUERY_PRECISION).contains(&precision),
            "Default precision must be between 1 and {}",
            MAX_QUERY_PRECISION
        );

        if precision > 12 {
            log::warn!(
                "Default precision of {} characters is finer than a centimeter; \
                hashes past 12 characters rarely help an index.",
                precision
            );
        }

        self.default_precision = precision;
        self
    }

    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    pub fn with_max_precision(mut self, precision: usize) -> Self {
        assert!(
            (1..=MAX_QUERY_PRECISION).contains(&precision),
            "Max precision must be between 1 and {}",
            MAX_QUERY_PRECISION
        );
        self.max_precision = precision;
        self
    }

    /// Bit budget of a bound query.
    pub fn max_bits(&self) -> usize {
        self.max_precision * BITS_PER_CHAR
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_QUERY_PRECISION).contains(&self.default_precision) {
            return Err(format!(
                "Default precision must be between 1 and {}",
                MAX_QUERY_PRECISION
            ));
        }

        if !(1..=MAX_QUERY_PRECISION).contains(&self.max_precision) {
            return Err(format!(
                "Max precision must be between 1 and {}",
                MAX_QUERY_PRECISION
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_precision: Self::default_precision(),
            distance_metric: DistanceMetric::default(),
            max_precision: Self::default_max_precision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_precision, 10);
        assert_eq!(config.distance_metric, DistanceMetric::Geodesic);
        assert_eq!(config.max_precision, 22);
        assert_eq!(config.max_bits(), 110);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default()
            .with_default_precision(7)
            .with_distance_metric(DistanceMetric::Haversine)
            .with_max_precision(9);

        let json = config.to_json().unwrap();
        let deserialized = Config::from_json(&json).unwrap();

        assert_eq!(deserialized, config);
        assert_eq!(deserialized.max_bits(), 45);
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        assert!(Config::from_json(r#"{"precision": 5}"#).is_err());
    }

    #[test]
    fn test_config_validation() {
        assert!(Config::from_json(r#"{"default_precision": 0}"#).is_err());
        assert!(Config::from_json(r#"{"max_precision": 23}"#).is_err());
        assert!(Config::from_json("{}").is_ok());
    }

    #[test]
    #[should_panic(expected = "Default precision must be between 1 and 22")]
    fn test_with_default_precision_panics_on_zero() {
        let _ = Config::default().with_default_precision(0);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn test_config_toml() {
        let config = Config::from_toml("default_precision = 6\ndistance_metric = \"haversine\"\n")
            .unwrap();
        assert_eq!(config.default_precision, 6);
        assert_eq!(config.distance_metric, DistanceMetric::Haversine);

        let toml_str = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml_str).unwrap(), config);
    }
}
