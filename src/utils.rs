//! Utils

use clap::Parser;

use crate::logging::LoggingConfig;

/// Arguments for the checkout example
#[derive(Debug, Parser)]
#[command(name = "checkout", about = "Price a basket of scanned items", long_about = None)]
pub struct ExampleCheckoutArgs {
    /// Item codes to scan, in order (whitespace is ignored)
    #[arg(default_value = "ABACDBA")]
    pub items: String,

    /// Catalog fixture set to price the basket with
    #[arg(short, long, default_value = "default")]
    pub fixture: String,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ExampleCheckoutArgs {
    /// Item codes to scan, skipping whitespace
    pub fn item_codes(&self) -> impl Iterator<Item = char> {
        self.items.chars().filter(|c| !c.is_whitespace())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_basket() -> Result<(), clap::Error> {
        let args = ExampleCheckoutArgs::try_parse_from(["checkout"])?;

        assert_eq!(args.items, "ABACDBA");
        assert_eq!(args.fixture, "default");

        Ok(())
    }

    #[test]
    fn item_codes_skip_whitespace() -> Result<(), clap::Error> {
        let args = ExampleCheckoutArgs::try_parse_from(["checkout", "-f", "bakery", "R R\tM"])?;

        assert_eq!(args.fixture, "bakery");
        assert_eq!(args.item_codes().collect::<String>(), "RRM");

        Ok(())
    }
}
