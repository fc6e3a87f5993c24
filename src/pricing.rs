//! Pricing rules

use thiserror::Error;

use crate::items::ItemCode;

/// Errors that can occur while pricing a quantity of one item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The price of the quantity does not fit in the minor unit range.
    #[error("price of {count} x {item} overflows")]
    Overflow {
        /// Item being priced
        item: ItemCode,
        /// Quantity being priced
        count: u64,
    },
}

/// Fixed price charged for exactly `quantity` units of one item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BundlePrice {
    quantity: u64,
    price: u64,
}

impl BundlePrice {
    /// Creates a bundle price, or `None` when `quantity` is zero.
    pub fn new(quantity: u64, price: u64) -> Option<Self> {
        (quantity > 0).then_some(Self { quantity, price })
    }

    /// Number of units in one bundle, always at least one
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price of one full bundle, in minor units
    pub fn price(&self) -> u64 {
        self.price
    }
}

/// Pricing rule for a single item: a unit price and an optional bundle price.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PricingRule {
    item: ItemCode,
    unit_price: u64,
    bundle: Option<BundlePrice>,
}

impl PricingRule {
    /// Creates a rule from a unit price and a `(quantity, price)` bundle pair.
    ///
    /// A bundle quantity of zero means no bundle applies and the bundle price is ignored.
    pub fn new(item: impl Into<ItemCode>, unit_price: u64, bundle: (u64, u64)) -> Self {
        let (quantity, price) = bundle;

        Self {
            item: item.into(),
            unit_price,
            bundle: BundlePrice::new(quantity, price),
        }
    }

    /// Creates a rule with no bundle price.
    pub fn unit(item: impl Into<ItemCode>, unit_price: u64) -> Self {
        Self {
            item: item.into(),
            unit_price,
            bundle: None,
        }
    }

    /// Item this rule prices
    pub fn item(&self) -> ItemCode {
        self.item
    }

    /// Price of a single unit, in minor units
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Bundle price, if any
    pub fn bundle(&self) -> Option<&BundlePrice> {
        self.bundle.as_ref()
    }

    /// Price of `count` units of this item.
    ///
    /// Once `count` reaches the bundle quantity, every full bundle is charged at the
    /// bundle price and the remainder at the unit price. Below the threshold, or with no
    /// bundle, every unit is charged at the unit price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the price does not fit in a `u64`.
    pub fn price_for(&self, count: u64) -> Result<u64, PriceError> {
        let overflow = || PriceError::Overflow {
            item: self.item,
            count,
        };

        match self.bundle {
            Some(bundle) if count >= bundle.quantity => {
                let bundles = count / bundle.quantity;
                let remainder = count % bundle.quantity;

                bundles
                    .checked_mul(bundle.price)
                    .zip(remainder.checked_mul(self.unit_price))
                    .and_then(|(bundled, loose)| bundled.checked_add(loose))
                    .ok_or_else(overflow)
            }
            _ => count.checked_mul(self.unit_price).ok_or_else(overflow),
        }
    }
}
