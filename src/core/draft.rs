//! In-memory state of one invoice form session.
//!
//! The draft owns the header and an ordered list of rows. Rows are added
//! blank, edited one field at a time and removed by id. Totals are never
//! stored: [`InvoiceDraft::totals`] re-aggregates the current rows on
//! every call.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::InvoiceError;
use super::format::parse_amount;
use super::totals::{aggregate, row_amounts};
use super::types::*;
use super::validation::is_submittable;

/// A row of the draft together with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRow {
    pub id: RowId,
    pub item: LineItem,
}

/// A single field edit on a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowField {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
    VatRate(f64),
    ProductOrServiceId(Option<String>),
}

impl RowField {
    /// Quantity edit from raw input text; unparsable text counts as 0.
    pub fn quantity_input(text: &str) -> Self {
        Self::Quantity(parse_amount(text))
    }

    /// Unit price edit from raw input text; unparsable text counts as 0.
    pub fn unit_price_input(text: &str) -> Self {
        Self::UnitPrice(parse_amount(text))
    }

    /// VAT rate edit from raw input text; unparsable text counts as 0.
    pub fn vat_rate_input(text: &str) -> Self {
        Self::VatRate(parse_amount(text))
    }

    fn apply(self, item: &mut LineItem) {
        match self {
            Self::Description(text) => item.description = text,
            Self::Quantity(v) => item.quantity = v,
            Self::UnitPrice(v) => item.unit_price = v,
            Self::VatRate(v) => item.vat_rate = v,
            Self::ProductOrServiceId(id) => item.product_or_service_id = id,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Description(_) => "description",
            Self::Quantity(_) => "quantity",
            Self::UnitPrice(_) => "unit_price",
            Self::VatRate(_) => "vat_rate",
            Self::ProductOrServiceId(_) => "product_or_service_id",
        }
    }
}

/// Header and rows of an invoice being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    header: InvoiceHeader,
    rows: Vec<DraftRow>,
    next_row_id: u64,
}

impl InvoiceDraft {
    /// Start a draft with a single blank row.
    pub fn new(invoice_type: InvoiceType, issue_date: NaiveDate) -> Self {
        Self::from_parts(InvoiceHeader::new(invoice_type, issue_date), Vec::new())
    }

    /// Assemble a draft from a header and initial rows. A draft always has
    /// at least one row, so an empty `items` yields one blank row.
    pub fn from_parts(header: InvoiceHeader, items: Vec<LineItem>) -> Self {
        let mut draft = Self {
            header,
            rows: Vec::with_capacity(items.len().max(1)),
            next_row_id: 1,
        };
        for item in items {
            draft.push_line(item);
        }
        if draft.rows.is_empty() {
            draft.push_line(LineItem::empty());
        }
        draft
    }

    pub fn header(&self) -> &InvoiceHeader {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut InvoiceHeader {
        &mut self.header
    }

    pub fn rows(&self) -> &[DraftRow] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&DraftRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Line items in row order.
    pub fn line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.rows.iter().map(|r| &r.item)
    }

    /// Append a blank row ("add row").
    pub fn add_row(&mut self) -> RowId {
        self.push_line(LineItem::empty())
    }

    /// Append a prepared row.
    pub fn push_line(&mut self, item: LineItem) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(DraftRow { id, item });
        trace!(row = %id, rows = self.rows.len(), "row added");
        id
    }

    /// Remove a row. The last remaining row is never removed; returns
    /// whether a row was taken out.
    pub fn remove_row(&mut self, id: RowId) -> bool {
        if self.rows.len() <= 1 {
            return false;
        }
        let before = self.rows.len();
        self.rows.retain(|r| r.id != id);
        let removed = self.rows.len() != before;
        if removed {
            trace!(row = %id, rows = self.rows.len(), "row removed");
        }
        removed
    }

    /// Apply a field edit to the row with `id`.
    pub fn update_row(&mut self, id: RowId, field: RowField) -> Result<(), InvoiceError> {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(InvoiceError::UnknownRow(id))?;
        trace!(row = %id, field = field.name(), "row updated");
        field.apply(&mut row.item);
        Ok(())
    }

    /// Current document totals, recomputed from all rows.
    pub fn totals(&self) -> Totals {
        aggregate(self.line_items())
    }

    /// Current amounts of one row.
    pub fn row_amounts(&self, id: RowId) -> Option<RowAmounts> {
        self.row(id).map(|r| row_amounts(&r.item))
    }

    /// Rows that will be sent on submission, in order.
    pub fn submittable_rows(&self) -> impl Iterator<Item = &DraftRow> {
        self.rows.iter().filter(|r| is_submittable(&r.item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn new_draft_has_one_blank_row() {
        let draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        assert_eq!(draft.rows().len(), 1);
        assert_eq!(draft.rows()[0].id, RowId(1));
        assert_eq!(draft.rows()[0].item, LineItem::empty());
        assert_eq!(draft.header().currency, "TRY");
        assert_eq!(draft.header().issue_date, Some(test_date()));
        assert_eq!(draft.totals(), Totals::default());
    }

    #[test]
    fn row_ids_are_not_reused() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        let second = draft.add_row();
        assert!(draft.remove_row(second));
        let third = draft.add_row();
        assert_eq!(second, RowId(2));
        assert_eq!(third, RowId(3));
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        let only = draft.rows()[0].id;
        assert!(!draft.remove_row(only));
        assert_eq!(draft.rows().len(), 1);
    }

    #[test]
    fn removing_unknown_row_is_noop() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        draft.add_row();
        assert!(!draft.remove_row(RowId(99)));
        assert_eq!(draft.rows().len(), 2);
    }

    #[test]
    fn edits_update_totals() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        let id = draft.rows()[0].id;
        draft.update_row(id, RowField::quantity_input("1")).unwrap();
        draft.update_row(id, RowField::unit_price_input("1200.00")).unwrap();

        let totals = draft.totals();
        assert_eq!(totals.subtotal, 1200.0);
        assert_eq!(totals.total_vat, 240.0);
        assert_eq!(totals.grand_total, 1440.0);
        assert_eq!(draft.row_amounts(id).unwrap().total, 1440.0);

        draft.update_row(id, RowField::vat_rate_input("")).unwrap();
        assert_eq!(draft.totals().grand_total, 1200.0);
    }

    #[test]
    fn unknown_row_edit_fails() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        let err = draft
            .update_row(RowId(42), RowField::Quantity(1.0))
            .unwrap_err();
        assert!(matches!(err, InvoiceError::UnknownRow(RowId(42))));
    }

    #[test]
    fn from_parts_keeps_order() {
        let header = InvoiceHeader::new(InvoiceType::Purchase, test_date());
        let draft = InvoiceDraft::from_parts(
            header,
            vec![LineItem::new(2.0, 50.0, 10.0), LineItem::new(3.0, 20.0, 0.0)],
        );
        let ids: Vec<_> = draft.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, [RowId(1), RowId(2)]);
        assert_eq!(draft.totals().grand_total, 170.0);
    }

    #[test]
    fn submittable_rows_filter() {
        let mut draft = InvoiceDraft::new(InvoiceType::Sales, test_date());
        let first = draft.rows()[0].id;
        draft
            .update_row(first, RowField::Description("Website Redesign".into()))
            .unwrap();
        draft.update_row(first, RowField::Quantity(1.0)).unwrap();
        let blank = draft.add_row();
        draft
            .update_row(blank, RowField::Description("Placeholder".into()))
            .unwrap();

        let ids: Vec<_> = draft.submittable_rows().map(|r| r.id).collect();
        assert_eq!(ids, [first]);
    }
}
