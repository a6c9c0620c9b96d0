//! Property-based tests for the line-item aggregator.
//!
//! Run with: `cargo test --test proptest_tests`

use fintrack::core::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Non-negative price in cents (0.00 to 99999.99).
fn arb_price() -> impl Strategy<Value = f64> {
    (0u64..10_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

/// Non-negative quantity, fractional in steps of 0.001 (0 to 1000).
fn arb_quantity() -> impl Strategy<Value = f64> {
    (0u32..=1_000_000u32).prop_map(|milli| milli as f64 / 1000.0)
}

/// VAT percentage within [0, 100].
fn arb_vat_rate() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(1.0),
        Just(8.0),
        Just(10.0),
        Just(18.0),
        Just(20.0),
        (0u32..=10_000u32).prop_map(|bp| bp as f64 / 100.0),
    ]
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_vat_rate())
        .prop_map(|(q, p, v)| LineItemBuilder::new(q, p).vat_rate(v).build())
}

fn arb_lines() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(arb_line(), 0..=40)
}

/// Lines whose amounts are all exactly representable in binary floating
/// point, so every partial sum is exact regardless of order.
fn arb_dyadic_line() -> impl Strategy<Value = LineItem> {
    (
        0u32..=100u32,
        0u32..=40_000u32,
        prop_oneof![Just(0.0), Just(25.0), Just(50.0), Just(100.0)],
    )
        .prop_map(|(q, quarters, v)| {
            LineItemBuilder::new(q as f64, quarters as f64 / 4.0)
                .vat_rate(v)
                .build()
        })
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// row_total is exactly row_subtotal + row_vat.
    #[test]
    fn row_total_is_subtotal_plus_vat(item in arb_line()) {
        prop_assert_eq!(row_total(&item), row_subtotal(&item) + row_vat(&item));
        let amounts = row_amounts(&item);
        prop_assert_eq!(amounts.total, amounts.subtotal + amounts.vat);
    }

    /// grand_total is exactly subtotal + total_vat for any sequence.
    #[test]
    fn grand_total_is_subtotal_plus_vat(items in arb_lines()) {
        let totals = aggregate(&items);
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.total_vat);
    }

    /// Non-negative inputs never produce negative totals.
    #[test]
    fn non_negative_inputs_give_non_negative_totals(items in arb_lines()) {
        let totals = aggregate(&items);
        prop_assert!(totals.subtotal >= 0.0);
        prop_assert!(totals.total_vat >= 0.0);
        prop_assert!(totals.grand_total >= totals.subtotal);
    }

    /// Reversing the rows leaves the totals unchanged (up to rounding of
    /// the float additions).
    #[test]
    fn reversal_preserves_totals(items in arb_lines()) {
        let forward = aggregate(&items);
        let backward = aggregate(items.iter().rev());
        prop_assert!(approx_eq(forward.subtotal, backward.subtotal));
        prop_assert!(approx_eq(forward.total_vat, backward.total_vat));
        prop_assert!(approx_eq(forward.grand_total, backward.grand_total));
    }

    /// With exactly representable amounts any permutation gives identical
    /// totals, bit for bit.
    #[test]
    fn permutation_exact_for_dyadic_amounts(
        (items, shuffled) in prop::collection::vec(arb_dyadic_line(), 0..=20)
            .prop_flat_map(|items| {
                let shuffled = Just(items.clone()).prop_shuffle();
                (Just(items), shuffled)
            })
    ) {
        prop_assert_eq!(aggregate(&items), aggregate(&shuffled));
    }

    /// Aggregation is a pure function of its input.
    #[test]
    fn aggregate_is_idempotent(items in arb_lines()) {
        prop_assert_eq!(aggregate(&items), aggregate(&items));
    }

    /// Zero-quantity rows never change the totals.
    #[test]
    fn zero_quantity_rows_are_neutral(items in arb_lines(), extra in arb_line()) {
        let mut padded = items.clone();
        padded.push(LineItem { quantity: 0.0, ..extra });
        prop_assert_eq!(aggregate(&items), aggregate(&padded));
    }

    /// Exact totals stay within half a minor unit per row of the float totals.
    #[test]
    fn exact_close_to_float(items in arb_lines()) {
        let float = aggregate(&items);
        let exact = aggregate_exact(&items, "TRY").unwrap();
        let tolerance = 0.01 * (items.len() as f64 + 1.0);

        let exact_subtotal: f64 = exact.subtotal.to_string().parse().unwrap();
        let exact_vat: f64 = exact.total_vat.to_string().parse().unwrap();
        prop_assert!((exact_subtotal - float.subtotal).abs() <= tolerance);
        prop_assert!((exact_vat - float.total_vat).abs() <= tolerance);
        prop_assert_eq!(exact.grand_total, exact.subtotal + exact.total_vat);
    }

    /// The submission filter only keeps described rows with positive quantity.
    #[test]
    fn submittable_rows_have_description_and_quantity(item in arb_line(), described in any::<bool>()) {
        let item = if described {
            LineItem { description: "Service".into(), ..item }
        } else {
            item
        };
        prop_assert_eq!(is_submittable(&item), described && item.quantity > 0.0);
    }
}
