use chrono::NaiveDate;

use super::draft::InvoiceDraft;
use super::error::{InvoiceError, ensure_valid};
use super::types::*;
use super::validation;

/// Builder for an [`InvoiceDraft`] with a filled-in header.
///
/// ```
/// use fintrack::core::*;
/// use chrono::NaiveDate;
///
/// let draft = InvoiceDraftBuilder::new(InvoiceType::Sales, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
///     .number("INV-001")
///     .customer("6f1c2a9e-0000-4000-8000-000000000001")
///     .due_date(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap())
///     .add_line(LineItemBuilder::new(1.0, 1200.0)
///         .description("Website Redesign - Phase 1")
///         .build())
///     .build_checked()
///     .unwrap();
///
/// assert_eq!(draft.totals().grand_total, 1440.0);
/// ```
pub struct InvoiceDraftBuilder {
    header: InvoiceHeader,
    lines: Vec<LineItem>,
}

impl InvoiceDraftBuilder {
    pub fn new(invoice_type: InvoiceType, issue_date: NaiveDate) -> Self {
        Self {
            header: InvoiceHeader::new(invoice_type, issue_date),
            lines: Vec::new(),
        }
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.header.invoice_number = number.into();
        self
    }

    pub fn customer(mut self, id: impl Into<String>) -> Self {
        self.header.customer_id = Some(id.into());
        self
    }

    pub fn supplier(mut self, id: impl Into<String>) -> Self {
        self.header.supplier_id = Some(id.into());
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.header.due_date = Some(date);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.header.currency = code.into();
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.header.notes = Some(notes.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Build the draft without any checks, as the form does while editing.
    pub fn build(self) -> InvoiceDraft {
        InvoiceDraft::from_parts(self.header, self.lines)
    }

    /// Build the draft, running header validation and the optional row
    /// checks. Returns all validation errors (not just the first).
    pub fn build_checked(self) -> Result<InvoiceDraft, InvoiceError> {
        // Input limits to prevent abuse
        if self.lines.len() > 10_000 {
            return Err(InvoiceError::Builder(
                "invoice cannot have more than 10,000 line items".into(),
            ));
        }
        if self.header.invoice_number.len() > 200 {
            return Err(InvoiceError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }

        let mut errors = validation::validate_header(&self.header);
        errors.extend(validation::validate_lines(&self.lines));
        ensure_valid(errors)?;

        Ok(self.build())
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    quantity: f64,
    unit_price: f64,
    vat_rate: f64,
    description: String,
    product_or_service_id: Option<String>,
}

impl LineItemBuilder {
    pub fn new(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            unit_price,
            vat_rate: DEFAULT_VAT_RATE,
            description: String::new(),
            product_or_service_id: None,
        }
    }

    pub fn vat_rate(mut self, rate: f64) -> Self {
        self.vat_rate = rate;
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn product(mut self, id: impl Into<String>) -> Self {
        self.product_or_service_id = Some(id.into());
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            quantity: self.quantity,
            unit_price: self.unit_price,
            vat_rate: self.vat_rate,
            description: self.description,
            product_or_service_id: self.product_or_service_id,
        }
    }
}
