//! Items

use std::fmt;

use serde::Deserialize;

/// Identifier of a stock item, a single character code such as `A`.
///
/// Scanning accepts any code; whether a code is priced is only decided against a
/// [`PricingCatalog`](crate::catalog::PricingCatalog) when totalling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(char);

impl ItemCode {
    /// Creates a new item code
    pub const fn new(code: char) -> Self {
        Self(code)
    }

    /// Returns the underlying character
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for ItemCode {
    fn from(code: char) -> Self {
        Self(code)
    }
}

impl fmt::Display for ItemCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
