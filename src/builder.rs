//! Builder for query planners.

use crate::compute::distance::DistanceMetric;
use crate::config::Config;
use crate::error::Result;
use crate::planner::QueryPlanner;

/// Builder for planner configuration.
#[derive(Debug, Default)]
pub struct PlannerBuilder {
    config: Config,
}

impl PlannerBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Precision used by `encode` when none is given.
    pub fn default_precision(mut self, precision: usize) -> Self {
        self.config.default_precision = precision;
        self
    }

    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.config.distance_metric = metric;
        self
    }

    /// Deepest precision of bound query ranges, in characters.
    pub fn max_precision(mut self, precision: usize) -> Self {
        self.config.max_precision = precision;
        self
    }

    /// Validate the configuration and build the planner.
    pub fn build(self) -> Result<QueryPlanner> {
        QueryPlanner::with_config(self.config)
    }
}
