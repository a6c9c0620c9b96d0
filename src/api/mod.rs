//! Invoice-service integration.
//!
//! Builds the create-invoice and create-item requests from an
//! [`InvoiceDraft`](crate::core::InvoiceDraft), sends them to the
//! invoice-management service of the selected environment, and reads
//! stored invoices and their items back.
//!
//! # Example
//!
//! ```ignore
//! use fintrack::api::*;
//! use fintrack::core::format_money;
//!
//! let session = Session::from_env();
//! let client = InvoiceClient::new(&session)?;
//! let stored = client.submit(&draft).await?;
//! println!("created {} with {} items", stored.invoice.id, stored.items.len());
//!
//! let reloaded = client.load_invoice(&stored.invoice.id).await?;
//! println!("server total {}", format_money(reloaded.server_totals().grand_total));
//! ```

mod client;
mod payload;
mod session;

pub use client::{InvoiceClient, StoredInvoice};
pub use payload::{
    CreateInvoiceItemPayload, CreateInvoicePayload, FALLBACK_ERROR_MESSAGE, Invoice,
    InvoiceEnvelope, InvoiceItem, InvoiceItemEnvelope, InvoiceItemListEnvelope, InvoiceItemQuery,
    InvoiceListEnvelope, InvoiceQuery, Page, Paging, RequestEnvelope, decode_invoice,
    decode_invoice_item, decode_invoice_item_list, decode_invoice_list, error_message,
    items_totals,
};
pub use session::{Environment, Service, Session};
