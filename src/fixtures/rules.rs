//! Pricing Rule Fixtures

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;

use crate::{fixtures::FixtureError, items::ItemCode, pricing::PricingRule};

/// Pricing rule fixture
#[derive(Debug, Deserialize)]
pub struct RuleFixture {
    /// Item code
    pub item: ItemCode,

    /// Unit price (e.g., "0.50 GBP")
    pub price: String,

    /// Optional bundle price
    #[serde(default)]
    pub bundle: Option<BundleFixture>,
}

/// Bundle price fixture
#[derive(Debug, Deserialize)]
pub struct BundleFixture {
    /// Units per bundle; zero disables the bundle
    pub quantity: u64,

    /// Price of one full bundle (e.g., "1.30 GBP")
    pub price: String,
}

impl RuleFixture {
    /// Convert into a [`PricingRule`], returning it with the currency its prices use.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed, or if the unit and bundle prices
    /// use different currencies.
    pub fn try_into_rule(self) -> Result<(PricingRule, &'static Currency), FixtureError> {
        let (unit_price, currency) = parse_price(&self.price)?;

        let bundle = match self.bundle {
            Some(bundle) => {
                let (bundle_price, bundle_currency) = parse_price(&bundle.price)?;

                if bundle_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        currency.iso_alpha_code.to_string(),
                        bundle_currency.iso_alpha_code.to_string(),
                    ));
                }

                (bundle.quantity, bundle_price)
            }
            None => (0, 0),
        };

        Ok((PricingRule::new(self.item, unit_price, bundle), currency))
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// The amount must be exact in the currency's minor units: "0.505 GBP" is rejected
/// rather than rounded.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is negative or finer than the currency's minor unit, or if
/// the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), FixtureError> {
    let invalid = || FixtureError::InvalidPrice(s.to_string());

    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let mut amount = amount
        .parse::<Decimal>()
        .map_err(|_err| invalid())?
        .normalize();

    if amount.is_sign_negative() || amount.scale() > currency.exponent {
        return Err(invalid());
    }

    amount.rescale(currency.exponent);

    let minor_units = u64::try_from(amount.mantissa()).map_err(|_err| invalid())?;

    Ok((minor_units, currency))
}
