use tracing::debug;

use super::coordinate::{check_sentences, ElementError};
use super::generic::try_to_aggregate;
use super::rules::Rule;
use crate::config::{AggregationConfig, StrategyOrder};
use crate::structure::element::Element;

/// Rules tried by the aggregator, cheapest and most specific first.
const PIPELINE_RULES: [Rule; 3] = [Rule::Subject, Rule::PredicateDirectObject, Rule::DirectObject];

/// Runs the pattern rules and the generic search in the configured order.
pub struct Aggregator {
    config: AggregationConfig,
}

impl Aggregator {
    pub fn new(config: AggregationConfig) -> Self {
        Aggregator { config: config }
    }

    pub fn aggregate(&self, sent1: &Element, sent2: &Element) -> Result<Option<Element>, ElementError> {
        check_sentences(sent1, sent2)?;
        match self.config.strategy {
            StrategyOrder::RulesFirst => match self.apply_rules(sent1, sent2) {
                Some(merged) => Ok(Some(merged)),
                None => self.apply_generic(sent1, sent2),
            },
            StrategyOrder::GenericFirst => match self.apply_generic(sent1, sent2)? {
                Some(merged) => Ok(Some(merged)),
                None => Ok(self.apply_rules(sent1, sent2)),
            },
            StrategyOrder::GenericOnly => self.apply_generic(sent1, sent2),
            StrategyOrder::RulesOnly => Ok(self.apply_rules(sent1, sent2)),
        }
    }

    fn apply_rules(&self, sent1: &Element, sent2: &Element) -> Option<Element> {
        PIPELINE_RULES.iter().find_map(|rule| rule.apply(sent1, sent2))
    }

    fn apply_generic(&self, sent1: &Element, sent2: &Element) -> Result<Option<Element>, ElementError> {
        if let Some(max) = self.config.max_tree_size {
            let (size1, size2) = (sent1.size(), sent2.size());
            if size1 > max || size2 > max {
                debug!(size1, size2, max, "sentence too large for generic aggregation");
                return Ok(None);
            }
        }
        try_to_aggregate(Some(sent1), Some(sent2))
    }
}
