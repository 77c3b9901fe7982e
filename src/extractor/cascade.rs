// file: src/extractor/cascade.rs
// description: ordered heuristic tiers evaluated until one produces a value

use crate::config::ExtractionConfig;
use tracing::debug;

/// A single heuristic. `run` returns `None` when the tier does not apply.
pub struct Tier<I: ?Sized> {
    pub name: &'static str,
    pub run: fn(&I, &ExtractionConfig) -> Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierHit {
    pub tier: &'static str,
    pub value: String,
}

/// Runs `tiers` in order and returns the first non-empty result.
pub fn first_hit<I: ?Sized>(
    tiers: &[Tier<I>],
    input: &I,
    config: &ExtractionConfig,
) -> Option<TierHit> {
    tiers.iter().find_map(|tier| {
        let value = (tier.run)(input, config).filter(|value| !value.is_empty())?;
        debug!(tier = tier.name, "heuristic tier matched");
        Some(TierHit {
            tier: tier.name,
            value,
        })
    })
}
