//! Line-item aggregation.
//!
//! All arithmetic is plain `f64`. Totals are recomputed from scratch on
//! every call; nothing is cached and nothing here can fail.

use super::types::{LineItem, RowAmounts, Totals};

/// quantity × unit price.
///
/// Negative inputs are not rejected and yield a negative subtotal.
pub fn row_subtotal(item: &LineItem) -> f64 {
    item.quantity * item.unit_price
}

/// Row subtotal × VAT rate / 100.
pub fn row_vat(item: &LineItem) -> f64 {
    row_subtotal(item) * item.vat_rate / 100.0
}

/// Row subtotal + row VAT.
pub fn row_total(item: &LineItem) -> f64 {
    row_subtotal(item) + row_vat(item)
}

/// Subtotal, VAT and total of a single row in one pass.
pub fn row_amounts(item: &LineItem) -> RowAmounts {
    let subtotal = row_subtotal(item);
    let vat = subtotal * item.vat_rate / 100.0;
    RowAmounts {
        subtotal,
        vat,
        total: subtotal + vat,
    }
}

/// Sum the row amounts of `items` in order, starting from zero.
///
/// An empty sequence yields all-zero totals. `grand_total` is always
/// exactly `subtotal + total_vat`.
pub fn aggregate<'a, I>(items: I) -> Totals
where
    I: IntoIterator<Item = &'a LineItem>,
{
    let (subtotal, total_vat) = items
        .into_iter()
        .fold((0.0, 0.0), |(subtotal, vat), item| {
            (subtotal + row_subtotal(item), vat + row_vat(item))
        });

    Totals {
        subtotal,
        total_vat,
        grand_total: subtotal + total_vat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: f64, unit_price: f64, vat_rate: f64) -> LineItem {
        LineItem::new(quantity, unit_price, vat_rate)
    }

    #[test]
    fn single_row() {
        let row = item(1.0, 1200.0, 20.0);
        assert_eq!(row_subtotal(&row), 1200.0);
        assert_eq!(row_vat(&row), 240.0);
        assert_eq!(row_total(&row), 1440.0);
    }

    #[test]
    fn row_amounts_match_row_functions() {
        let row = item(3.5, 19.99, 18.0);
        let amounts = row_amounts(&row);
        assert_eq!(amounts.subtotal, row_subtotal(&row));
        assert_eq!(amounts.vat, row_vat(&row));
        assert_eq!(amounts.total, row_total(&row));
    }

    #[test]
    fn two_rows() {
        let items = vec![item(2.0, 50.0, 10.0), item(3.0, 20.0, 0.0)];
        let totals = aggregate(&items);
        assert_eq!(totals.subtotal, 160.0);
        assert_eq!(totals.total_vat, 10.0);
        assert_eq!(totals.grand_total, 170.0);
    }

    #[test]
    fn empty_is_zero() {
        let none: [LineItem; 0] = [];
        let totals = aggregate(&none);
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.grand_total, 0.0);
    }

    #[test]
    fn zero_quantity_contributes_nothing() {
        let items = vec![item(1.0, 1200.0, 20.0), item(0.0, 999.0, 20.0)];
        assert_eq!(aggregate(&items), aggregate(&items[..1]));
    }

    #[test]
    fn negative_inputs_pass_through() {
        let row = item(-2.0, 10.0, 20.0);
        assert_eq!(row_subtotal(&row), -20.0);
        assert_eq!(row_vat(&row), -4.0);
        assert_eq!(row_total(&row), -24.0);
    }

    #[test]
    fn fractional_quantity() {
        let row = item(0.5, 80.0, 20.0);
        assert_eq!(row_total(&row), 48.0);
    }
}
