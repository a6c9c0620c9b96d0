//! Wire types of the invoice-management service.
//!
//! Requests are wrapped as `{"data": ...}`. Responses use one fixed
//! envelope per endpoint:
//!
//! | Endpoint | Envelope |
//! |----------|----------|
//! | `POST /v1/invoices`, `GET /v1/invoices/{id}` | `{"invoice": ...}` |
//! | `GET /v1/invoices` | `{"invoices": [...], "paging": {...}}` |
//! | `POST /v1/invoiceitems` | `{"invoiceItem": ...}` |
//! | `GET /v1/invoiceitems` | `{"invoiceItems": [...], "paging": {...}}` |
//!
//! Anything else is a decode error rather than a best-effort guess.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    InvoiceError, InvoiceHeader, InvoiceStatus, InvoiceType, LineItem, NIL_PRODUCT_ID, Totals,
};

/// Message reported when an error response carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "request failed";

/// Request body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope<T> {
    pub data: T,
}

/// Body of `POST /v1/invoices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoicePayload {
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub invoice_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CreateInvoicePayload {
    /// Build from a draft header. Only the counterparty matching the
    /// invoice type is sent.
    ///
    /// # Errors
    ///
    /// `InvoiceError::Validation` when the issue or due date is missing.
    pub fn from_header(header: &InvoiceHeader) -> Result<Self, InvoiceError> {
        let issue_date = header
            .issue_date
            .ok_or_else(|| InvoiceError::Validation("issue_date: issue date is required".into()))?;
        let due_date = header
            .due_date
            .ok_or_else(|| InvoiceError::Validation("due_date: due date is required".into()))?;

        let (customer_id, supplier_id) = match header.invoice_type {
            InvoiceType::Sales => (header.customer_id.clone(), None),
            InvoiceType::Purchase => (None, header.supplier_id.clone()),
        };

        Ok(Self {
            invoice_type: header.invoice_type,
            currency: header.currency.clone(),
            customer_id,
            supplier_id,
            issue_date,
            due_date,
            invoice_number: header.invoice_number.clone(),
            notes: header.notes.clone(),
        })
    }
}

/// Body of `POST /v1/invoiceitems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceItemPayload {
    pub invoice_id: String,
    pub product_or_service_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
}

impl CreateInvoiceItemPayload {
    /// Build the item request for one row of invoice `invoice_id`.
    /// Rows without a product are sent with the nil product id.
    pub fn from_line(invoice_id: impl Into<String>, item: &LineItem) -> Self {
        Self {
            invoice_id: invoice_id.into(),
            product_or_service_id: item
                .product_or_service_id
                .clone()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| NIL_PRODUCT_ID.to_string()),
            description: Some(item.description.clone()),
            quantity: item.quantity,
            unit_price: Some(item.unit_price),
            vat_rate: Some(item.vat_rate),
        }
    }
}

/// Stored invoice as returned by the service.
///
/// Dates are kept as the server formats them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub currency: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub due_date: String,
    pub invoice_number: String,
    pub issue_date: String,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub supplier_id: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    #[serde(default)]
    pub business_id: Option<String>,
}

/// Stored invoice item with the server-computed amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    pub invoice_id: String,
    pub product_or_service_id: String,
    pub quantity: f64,
    /// VAT-inclusive row total.
    pub total: f64,
    pub unit_price: f64,
    pub vat_amount: f64,
    pub vat_rate: f64,
    #[serde(default)]
    pub business_id: Option<String>,
}

/// Response envelope of the invoice endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceEnvelope {
    pub invoice: Invoice,
}

/// Response envelope of the invoice-item endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemEnvelope {
    pub invoice_item: InvoiceItem,
}

/// Paging block of list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_row_count: Option<u32>,
    #[serde(default)]
    pub page_count: Option<u32>,
    pub total_row_count: u64,
}

/// Response envelope of `GET /v1/invoices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListEnvelope {
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// Response envelope of `GET /v1/invoiceitems`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemListEnvelope {
    pub invoice_items: Vec<InvoiceItem>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the query across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// A missing or zero `totalRowCount` falls back to the page length.
    pub fn new(items: Vec<T>, paging: Option<Paging>) -> Self {
        let total = paging
            .map(|p| p.total_row_count)
            .filter(|&t| t > 0)
            .unwrap_or(items.len() as u64);
        Self { items, total }
    }
}

/// Query of `GET /v1/invoices`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<InvoiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageRowCount", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query of `GET /v1/invoiceitems`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItemQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageRowCount", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl InvoiceItemQuery {
    /// Items of one invoice.
    pub fn for_invoice(invoice_id: impl Into<String>) -> Self {
        Self {
            invoice_id: Some(invoice_id.into()),
            ..Self::default()
        }
    }

    /// Select a page; `page` counts from 1.
    pub fn page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }
}

/// Totals as the server computed them for `items`.
///
/// The item `total` includes VAT, so the subtotal is derived as
/// `total - vatAmount`.
pub fn items_totals(items: &[InvoiceItem]) -> Totals {
    let grand_total: f64 = items.iter().map(|i| i.total).sum();
    let total_vat: f64 = items.iter().map(|i| i.vat_amount).sum();
    Totals {
        subtotal: grand_total - total_vat,
        total_vat,
        grand_total,
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Decode an invoice-endpoint response body.
pub fn decode_invoice(body: &str) -> Result<Invoice, InvoiceError> {
    serde_json::from_str::<InvoiceEnvelope>(body)
        .map(|env| env.invoice)
        .map_err(|e| InvoiceError::Decode(format!("invoice envelope: {e}")))
}

/// Decode an invoice-item-endpoint response body.
pub fn decode_invoice_item(body: &str) -> Result<InvoiceItem, InvoiceError> {
    serde_json::from_str::<InvoiceItemEnvelope>(body)
        .map(|env| env.invoice_item)
        .map_err(|e| InvoiceError::Decode(format!("invoice item envelope: {e}")))
}

/// Decode a `GET /v1/invoices` response body.
pub fn decode_invoice_list(body: &str) -> Result<Page<Invoice>, InvoiceError> {
    serde_json::from_str::<InvoiceListEnvelope>(body)
        .map(|env| Page::new(env.invoices, env.paging))
        .map_err(|e| InvoiceError::Decode(format!("invoice list envelope: {e}")))
}

/// Decode a `GET /v1/invoiceitems` response body.
pub fn decode_invoice_item_list(body: &str) -> Result<Page<InvoiceItem>, InvoiceError> {
    serde_json::from_str::<InvoiceItemListEnvelope>(body)
        .map(|env| Page::new(env.invoice_items, env.paging))
        .map_err(|e| InvoiceError::Decode(format!("invoice item list envelope: {e}")))
}

/// Message to show for an error response: the server's `message` when the
/// body has one, otherwise [`FALLBACK_ERROR_MESSAGE`].
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
