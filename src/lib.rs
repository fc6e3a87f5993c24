//! Till
//!
//! Till prices a basket of scanned items against a catalog of per-item pricing rules,
//! applying single-tier "N for a fixed price" bundle discounts.
//!
//! ```
//! use till::prelude::*;
//!
//! let catalog = PricingCatalog::new([
//!     PricingRule::new('A', 50, (3, 130)),
//!     PricingRule::unit('C', 20),
//! ]);
//!
//! let mut checkout = Checkout::new(&catalog);
//! checkout.scan_all("AAAAC".chars());
//!
//! assert_eq!(checkout.total_price(), Ok(200));
//! ```

pub mod catalog;
pub mod checkout;
pub mod fixtures;
pub mod items;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod utils;
