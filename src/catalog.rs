//! Pricing catalog

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::{items::ItemCode, pricing::PricingRule};

/// Immutable set of pricing rules, at most one per item.
///
/// When built from rules that repeat an item, the last rule for that item wins.
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    rules: FxHashMap<ItemCode, PricingRule>,
}

impl PricingCatalog {
    /// Create a new catalog from the given rules.
    pub fn new(rules: impl IntoIterator<Item = PricingRule>) -> Self {
        let mut map = FxHashMap::default();

        for rule in rules {
            if let Some(replaced) = map.insert(rule.item(), rule) {
                warn!(
                    item = %rule.item(),
                    replaced_unit_price = replaced.unit_price(),
                    unit_price = rule.unit_price(),
                    "duplicate pricing rule, keeping the last one"
                );
            }
        }

        Self { rules: map }
    }

    /// Look up the rule for an item.
    pub fn get(&self, item: ItemCode) -> Option<&PricingRule> {
        self.rules.get(&item)
    }

    /// Check whether the catalog prices the given item.
    pub fn contains(&self, item: ItemCode) -> bool {
        self.rules.contains_key(&item)
    }

    /// Iterate over the rules in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PricingRule> {
        self.rules.values()
    }

    /// Get the number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<PricingRule> for PricingCatalog {
    fn from_iter<I: IntoIterator<Item = PricingRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}
