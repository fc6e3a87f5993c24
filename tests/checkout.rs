//! Checkout scenarios against the standard supermarket rule set:
//!
//! | Item | Unit price | Bundle      |
//! |------|------------|-------------|
//! | A    | 50         | 3 for 130   |
//! | B    | 30         | 2 for 45    |
//! | C    | 20         |             |
//! | D    | 15         |             |

use testresult::TestResult;

use till::prelude::*;

fn pricing_rules() -> Vec<PricingRule> {
    vec![
        PricingRule::new('A', 50, (3, 130)),
        PricingRule::new('B', 30, (2, 45)),
        PricingRule::new('C', 20, (0, 0)),
        PricingRule::new('D', 15, (0, 0)),
    ]
}

fn total_for(catalog: &PricingCatalog, items: &str) -> Result<u64, CheckoutError> {
    let mut checkout = Checkout::new(catalog);
    checkout.scan_all(items.chars());
    checkout.total_price()
}

#[test]
fn basket_totals() -> TestResult {
    let catalog = PricingCatalog::new(pricing_rules());

    let cases = [
        ("", 0),
        ("A", 50),
        ("AA", 100),
        ("B", 30),
        ("ABCD", 115),
        ("AAA", 130),
        ("AAAA", 180),
        ("AAABB", 175),
        ("AABBB", 175),
        ("AABBCC", 185),
        ("CCCDD", 90),
        ("AABBBCDDD", 240),
        ("AAABBBBCDDD", 285),
        ("AAAAAA", 260),
        ("ABACDBA", 210),
    ];

    for (items, expected) in cases {
        assert_eq!(total_for(&catalog, items)?, expected, "basket {items:?}");
    }

    Ok(())
}

#[test]
fn large_quantities() -> TestResult {
    let catalog = PricingCatalog::new(pricing_rules());
    let mut checkout = Checkout::new(&catalog);

    for _ in 0..1000 {
        checkout.scan('A');
        checkout.scan('B');
        checkout.scan('C');
    }

    // A: 333 bundles + 1 unit, B: 500 bundles, C: 1000 units
    assert_eq!(checkout.total_price()?, 333 * 130 + 50 + 500 * 45 + 1000 * 20);

    Ok(())
}

#[test]
fn scan_order_does_not_change_total() -> TestResult {
    let catalog = PricingCatalog::new(pricing_rules());

    let orders = ["AAABBCD", "DCBBAAA", "ABABACD", "BADACAB"];

    for items in orders {
        assert_eq!(total_for(&catalog, items)?, 210, "order {items:?}");
    }

    Ok(())
}

#[test]
fn unknown_item_fails_regardless_of_valid_scans() {
    let catalog = PricingCatalog::new(pricing_rules());

    let result = total_for(&catalog, "AAABBE");

    assert_eq!(result, Err(CheckoutError::UnknownItem(ItemCode::new('E'))));
}

#[test]
fn unknown_item_error_names_item() {
    let catalog = PricingCatalog::new(pricing_rules());

    let result = total_for(&catalog, "AE");

    assert!(
        matches!(&result, Err(err) if err.to_string() == "item 'E' is not valid"),
        "unexpected result {result:?}"
    );
}

#[test]
fn empty_catalog_rejects_any_scan() {
    let catalog = PricingCatalog::new([]);

    let result = total_for(&catalog, "BA");

    assert_eq!(result, Err(CheckoutError::UnknownItem(ItemCode::new('A'))));
}

#[test]
fn total_is_repeatable() -> TestResult {
    let catalog = PricingCatalog::new(pricing_rules());
    let mut checkout = Checkout::new(&catalog);

    checkout.scan_all("AAABBD".chars());

    let first = checkout.total_price()?;
    let second = checkout.total_price()?;

    assert_eq!(first, second);
    assert_eq!(first, 190);

    Ok(())
}

#[test]
fn catalog_is_shared_between_checkouts() -> TestResult {
    let catalog = PricingCatalog::new(pricing_rules());

    let mut first = Checkout::new(&catalog);
    let mut second = Checkout::new(&catalog);

    first.scan_all("AAA".chars());
    second.scan_all("BB".chars());

    assert_eq!(first.total_price()?, 130);
    assert_eq!(second.total_price()?, 45);

    Ok(())
}

#[test]
fn bundle_price_only_applies_at_threshold() -> TestResult {
    let rule = PricingRule::new('B', 30, (2, 45));

    assert_eq!(rule.price_for(1)?, 30);
    assert_eq!(rule.price_for(2)?, 45);
    assert_eq!(rule.price_for(3)?, 75);

    Ok(())
}
