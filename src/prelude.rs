//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::PricingCatalog,
    checkout::{Checkout, CheckoutError},
    fixtures::{CatalogFixture, FixtureError},
    items::ItemCode,
    pricing::{BundlePrice, PriceError, PricingRule},
};
