use super::currencies;
use super::error::ValidationError;
use super::types::*;

/// Validate the header of an invoice about to be submitted.
/// Returns all validation errors found (not just the first).
pub fn validate_header(header: &InvoiceHeader) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if header.invoice_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoice_number",
            "invoice number is required",
        ));
    }

    if header.issue_date.is_none() {
        errors.push(ValidationError::new("issue_date", "issue date is required"));
    }

    if header.due_date.is_none() {
        errors.push(ValidationError::new("due_date", "due date is required"));
    }

    let has_counterparty = header
        .counterparty_id()
        .is_some_and(|id| !id.trim().is_empty());
    if !has_counterparty {
        let (field, message) = match header.invoice_type {
            InvoiceType::Sales => ("customer_id", "select a customer for a sales invoice"),
            InvoiceType::Purchase => ("supplier_id", "select a supplier for a purchase invoice"),
        };
        errors.push(ValidationError::new(field, message));
    }

    if !currencies::is_known_currency_code(&header.currency) {
        errors.push(ValidationError::new(
            "currency",
            format!("currency code '{}' is not a known ISO 4217 code", header.currency),
        ));
    }

    errors
}

/// Optional precondition checks on a single row.
///
/// The aggregator accepts any numbers; this is for callers that want to
/// reject nonsensical rows before they reach the totals. Rejects negative
/// quantity or unit price, VAT rates outside `[0, 100]`, and non-finite
/// values.
pub fn validate_line(item: &LineItem, index: usize) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let prefix = format!("lines[{index}]");

    for (field, value) in [
        ("quantity", item.quantity),
        ("unit_price", item.unit_price),
        ("vat_rate", item.vat_rate),
    ] {
        if !value.is_finite() {
            errors.push(ValidationError::new(
                format!("{prefix}.{field}"),
                "must be a finite number",
            ));
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    if item.quantity < 0.0 {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            format!("quantity must not be negative (got {})", item.quantity),
        ));
    }

    if item.unit_price < 0.0 {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            format!("unit price must not be negative (got {})", item.unit_price),
        ));
    }

    if !(0.0..=100.0).contains(&item.vat_rate) {
        errors.push(ValidationError::new(
            format!("{prefix}.vat_rate"),
            format!("VAT rate must be between 0 and 100 (got {})", item.vat_rate),
        ));
    }

    errors
}

/// Validate every row with [`validate_line`].
pub fn validate_lines<'a, I>(items: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'a LineItem>,
{
    items
        .into_iter()
        .enumerate()
        .flat_map(|(i, item)| validate_line(item, i))
        .collect()
}

/// Whether a row is sent to the invoice service on submission.
///
/// Rows without a description or with a non-positive quantity are dropped
/// silently. They still count towards the displayed totals.
pub fn is_submittable(item: &LineItem) -> bool {
    !item.description.is_empty() && item.quantity > 0.0
}
