//! Checkout

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{catalog::PricingCatalog, items::ItemCode, pricing::PriceError};

/// Errors raised by a checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// No pricing catalog was supplied when creating the checkout.
    #[error("invalid argument: no pricing catalog supplied")]
    MissingCatalog,

    /// A scanned item has no pricing rule in the catalog.
    #[error("item '{0}' is not valid")]
    UnknownItem(ItemCode),

    /// The price of a scanned item, or the running total, overflowed.
    #[error("price overflow while totalling item '{0}'")]
    PriceOverflow(ItemCode),
}

impl From<PriceError> for CheckoutError {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::Overflow { item, .. } => CheckoutError::PriceOverflow(item),
        }
    }
}

/// Accumulates scanned items and prices them against a shared catalog.
///
/// Scanning never consults the catalog; unknown items only surface as
/// [`CheckoutError::UnknownItem`] from [`Checkout::total_price`].
#[derive(Debug, Clone)]
pub struct Checkout<'a> {
    catalog: &'a PricingCatalog,
    counts: BTreeMap<ItemCode, u64>,
}

impl<'a> Checkout<'a> {
    /// Create an empty checkout priced by the given catalog.
    pub fn new(catalog: &'a PricingCatalog) -> Self {
        Self {
            catalog,
            counts: BTreeMap::new(),
        }
    }

    /// Scan one unit of an item.
    pub fn scan(&mut self, item: impl Into<ItemCode>) {
        let item = item.into();
        let count = self.counts.entry(item).or_insert(0);

        *count = count.saturating_add(1);

        debug!(%item, count = *count, "scanned item");
    }

    /// Scan one unit of each item in turn.
    pub fn scan_all<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Into<ItemCode>,
    {
        items.into_iter().for_each(|item| self.scan(item));
    }

    /// Calculate the total price of everything scanned so far, in minor units.
    ///
    /// Does not change the checkout, so repeated calls give the same total until the
    /// next scan.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::UnknownItem`]: a scanned item has no rule in the catalog.
    ///   When several are unknown, the smallest item code is reported.
    /// - [`CheckoutError::PriceOverflow`]: the total does not fit in a `u64`.
    pub fn total_price(&self) -> Result<u64, CheckoutError> {
        let total = self
            .counts
            .iter()
            .try_fold(0_u64, |total, (&item, &count)| {
                let Some(rule) = self.catalog.get(item) else {
                    warn!(%item, count, "scanned item has no pricing rule");
                    return Err(CheckoutError::UnknownItem(item));
                };

                let price = rule.price_for(count)?;

                trace!(%item, count, price, "priced item");

                total
                    .checked_add(price)
                    .ok_or(CheckoutError::PriceOverflow(item))
            })?;

        debug!(total, items = self.counts.len(), "calculated total price");

        Ok(total)
    }

    /// Number of units of an item scanned so far.
    pub fn count(&self, item: impl Into<ItemCode>) -> u64 {
        self.counts.get(&item.into()).copied().unwrap_or_default()
    }

    /// Total number of units scanned, saturating like the per-item counts.
    pub fn len(&self) -> u64 {
        self.counts.values().copied().fold(0_u64, u64::saturating_add)
    }

    /// Check if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The catalog this checkout prices against.
    pub fn catalog(&self) -> &'a PricingCatalog {
        self.catalog
    }
}

impl<'a> TryFrom<Option<&'a PricingCatalog>> for Checkout<'a> {
    type Error = CheckoutError;

    fn try_from(catalog: Option<&'a PricingCatalog>) -> Result<Self, Self::Error> {
        catalog.map(Checkout::new).ok_or(CheckoutError::MissingCatalog)
    }
}
