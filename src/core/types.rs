use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// VAT rate (percent) given to freshly added rows.
pub const DEFAULT_VAT_RATE: f64 = 20.0;

/// Currency preselected on a new invoice.
pub const DEFAULT_CURRENCY: &str = "TRY";

/// Product reference submitted for rows that were not linked to a product.
pub const NIL_PRODUCT_ID: &str = "00000000-0000-0000-0000-000000000000";

/// One row of an invoice: a quantity of a product or service at a unit
/// price and VAT rate.
///
/// Amounts are decimal major units (e.g. `1200.00`). Nothing here is
/// validated; see [`validate_line`](crate::core::validate_line) for the
/// optional non-negative checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Invoiced quantity. Fractional quantities are allowed.
    pub quantity: f64,
    /// Net price per unit.
    pub unit_price: f64,
    /// VAT percentage, normally within `[0, 100]`.
    pub vat_rate: f64,
    /// Free text shown on the invoice.
    pub description: String,
    /// Linked product or service, if one was picked.
    pub product_or_service_id: Option<String>,
}

impl LineItem {
    pub fn new(quantity: f64, unit_price: f64, vat_rate: f64) -> Self {
        Self {
            quantity,
            unit_price,
            vat_rate,
            description: String::new(),
            product_or_service_id: None,
        }
    }

    /// The blank row created by "add row": zero quantity and price at the
    /// default VAT rate.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, DEFAULT_VAT_RATE)
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::empty()
    }
}

/// Derived amounts of a single row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RowAmounts {
    /// quantity × unit price.
    pub subtotal: f64,
    /// subtotal × VAT rate / 100.
    pub vat: f64,
    /// subtotal + vat.
    pub total: f64,
}

/// Document-level totals over all rows.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of row subtotals.
    pub subtotal: f64,
    /// Sum of row VAT amounts.
    pub total_vat: f64,
    /// subtotal + total_vat.
    pub grand_total: f64,
}

/// Direction of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    /// Issued to a customer.
    #[default]
    Sales,
    /// Received from a supplier.
    Purchase,
}

impl InvoiceType {
    /// Wire code used by the invoice service.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Purchase => "purchase",
        }
    }

    /// Parse from the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "sales" => Some(Self::Sales),
            "purchase" => Some(Self::Purchase),
            _ => None,
        }
    }
}

/// Payment state of a stored invoice, as reported by the invoice service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Unpaid,
    Partial,
    Paid,
    Overdue,
}

/// Identifier of a row within one [`InvoiceDraft`](crate::core::InvoiceDraft).
///
/// Assigned by the draft in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Header fields of an invoice being drafted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub invoice_type: InvoiceType,
    /// Required for sales invoices.
    pub customer_id: Option<String>,
    /// Required for purchase invoices.
    pub supplier_id: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub invoice_number: String,
    /// ISO 4217 code.
    pub currency: String,
    /// Internal notes, never printed.
    pub notes: Option<String>,
}

impl InvoiceHeader {
    pub fn new(invoice_type: InvoiceType, issue_date: NaiveDate) -> Self {
        Self {
            invoice_type,
            customer_id: None,
            supplier_id: None,
            issue_date: Some(issue_date),
            due_date: None,
            invoice_number: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            notes: None,
        }
    }

    /// The party the invoice is addressed to, depending on its type.
    pub fn counterparty_id(&self) -> Option<&str> {
        match self.invoice_type {
            InvoiceType::Sales => self.customer_id.as_deref(),
            InvoiceType::Purchase => self.supplier_id.as_deref(),
        }
    }
}
