use std::env;

use thiserror::Error;

pub const MAX_NODES_VAR: &str = "NLG_AGGREGATION_MAX_NODES";
pub const STRATEGY_VAR: &str = "NLG_AGGREGATION_STRATEGY";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: \"{1}\"")]
    InvalidValue(&'static str, String),
}

/// Which strategies the [`Aggregator`](crate::aggregation::aggregator::Aggregator) tries, and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyOrder {
    /// Cheap pattern rules, then the generic search.
    #[default]
    RulesFirst,
    GenericFirst,
    GenericOnly,
    RulesOnly,
}

impl StrategyOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        let order = match s.trim().to_ascii_lowercase().as_str() {
            "rules-first" => StrategyOrder::RulesFirst,
            "generic-first" => StrategyOrder::GenericFirst,
            "generic-only" => StrategyOrder::GenericOnly,
            "rules-only" => StrategyOrder::RulesOnly,
            _ => return None,
        };
        Some(order)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregationConfig {
    /// Sentences with more nodes than this skip the generic search.
    pub max_tree_size: Option<usize>,
    pub strategy: StrategyOrder,
}

impl AggregationConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(MAX_NODES_VAR) {
            let max = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue(MAX_NODES_VAR, raw.clone()))?;
            config.max_tree_size = Some(max);
        }
        if let Some(raw) = lookup(STRATEGY_VAR) {
            config.strategy = StrategyOrder::from_str(&raw).ok_or(ConfigError::InvalidValue(STRATEGY_VAR, raw.clone()))?;
        }
        Ok(config)
    }
}
