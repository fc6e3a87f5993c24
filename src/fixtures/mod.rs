//! Fixtures
//!
//! Pricing catalogs loaded from YAML files under `./fixtures/catalogs`:
//!
//! ```yaml
//! rules:
//!   - item: A
//!     price: "0.50 GBP"
//!     bundle:
//!       quantity: 3
//!       price: "1.30 GBP"
//!   - item: C
//!     price: "0.20 GBP"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{catalog::PricingCatalog, fixtures::rules::RuleFixture};

pub mod rules;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between rules
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Wrapper for pricing rules in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Pricing rules, in file order
    #[serde(default)]
    pub rules: Vec<RuleFixture>,
}

/// A pricing catalog loaded from a fixture, with the currency its prices are in.
#[derive(Debug)]
pub struct CatalogFixture {
    catalog: PricingCatalog,
    currency: Option<&'static Currency>,
}

impl CatalogFixture {
    /// Load a named catalog set from `./fixtures/catalogs/{name}.yml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its prices are
    /// invalid or use more than one currency.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a named catalog set from `{base_path}/catalogs/{name}.yml`.
    ///
    /// # Errors
    ///
    /// See [`CatalogFixture::from_set`].
    pub fn from_set_in(
        base_path: impl Into<PathBuf>,
        name: &str,
    ) -> Result<Self, FixtureError> {
        let file_path = base_path.into().join("catalogs").join(format!("{name}.yml"));

        Self::from_path(&file_path)
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// See [`CatalogFixture::from_set`].
    pub fn from_path(path: &Path) -> Result<Self, FixtureError> {
        debug!(path = %path.display(), "loading catalog fixture");

        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog from YAML text.
    ///
    /// Rules are kept in file order, so a repeated item takes the last rule given for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, or if its prices are invalid or
    /// use more than one currency.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        let file: CatalogFile = serde_norway::from_str(contents)?;

        let mut currency: Option<&'static Currency> = None;
        let mut rules = Vec::with_capacity(file.rules.len());

        for rule_fixture in file.rules {
            let (rule, rule_currency) = rule_fixture.try_into_rule()?;

            let expected = *currency.get_or_insert(rule_currency);

            if expected != rule_currency {
                return Err(FixtureError::CurrencyMismatch(
                    expected.iso_alpha_code.to_string(),
                    rule_currency.iso_alpha_code.to_string(),
                ));
            }

            rules.push(rule);
        }

        Ok(Self {
            catalog: PricingCatalog::new(rules),
            currency,
        })
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Currency shared by every price, or `None` for a catalog with no rules
    pub fn currency(&self) -> Option<&'static Currency> {
        self.currency
    }

    /// Take the loaded catalog
    pub fn into_catalog(self) -> PricingCatalog {
        self.catalog
    }
}
