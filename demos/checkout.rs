//! Checkout Example
//!
//! Scans a basket of items and prints its total price.
//!
//! Use `-f` to load a catalog fixture set by name
//! Pass the item codes to scan as a single argument, e.g. `AAABBD`

use anyhow::Result;
use clap::Parser;
use tracing::info;

use till::{
    checkout::Checkout, fixtures::CatalogFixture, logging::init_subscriber,
    utils::ExampleCheckoutArgs,
};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example program output to user")]
pub fn main() -> Result<()> {
    let args = ExampleCheckoutArgs::parse();

    init_subscriber(&args.logging)?;

    let fixture = CatalogFixture::from_set(&args.fixture)?;

    info!(
        fixture = %args.fixture,
        rules = fixture.catalog().len(),
        "loaded pricing catalog"
    );

    let mut checkout = Checkout::new(fixture.catalog());

    checkout.scan_all(args.item_codes());

    let total = checkout.total_price()?;

    match fixture.currency() {
        Some(currency) => println!(
            "Total Price: {total} ({} minor units)",
            currency.iso_alpha_code
        ),
        None => println!("Total Price: {total}"),
    }

    Ok(())
}
