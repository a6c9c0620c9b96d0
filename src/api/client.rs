//! Async client for the invoice-management service.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::payload::{
    CreateInvoiceItemPayload, CreateInvoicePayload, Invoice, InvoiceItem, InvoiceItemQuery,
    InvoiceQuery, Page, RequestEnvelope, decode_invoice, decode_invoice_item,
    decode_invoice_item_list, decode_invoice_list, error_message, items_totals,
};
use super::session::{Service, Session};
use crate::core::{InvoiceDraft, InvoiceError, Totals, ensure_valid, validate_header};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const BUSINESS_CODENAME_HEADER: &str = "mbx-business-codename";
const ITEM_PAGE_SIZE: u32 = 100;

/// A stored invoice together with its stored items.
///
/// Returned by [`InvoiceClient::submit`], with one item per submitted row
/// in row order, and by [`InvoiceClient::load_invoice`].
#[derive(Debug, Clone)]
pub struct StoredInvoice {
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}

impl StoredInvoice {
    /// Totals as computed by the server from the stored items.
    ///
    /// These are not reconciled with the draft's own totals; the two can
    /// differ by the server's rounding.
    pub fn server_totals(&self) -> Totals {
        items_totals(&self.items)
    }
}

/// Client for the invoice-management service.
#[derive(Debug, Clone)]
pub struct InvoiceClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl InvoiceClient {
    /// Create a client bound to `session`.
    ///
    /// # Errors
    ///
    /// `InvoiceError::Network` when the HTTP client cannot be constructed.
    pub fn new(session: &Session) -> Result<Self, InvoiceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| InvoiceError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: session.service_url(Service::InvoiceManagement),
            session: session.clone(),
        })
    }

    /// `GET /v1/invoices/{id}`.
    pub async fn get_invoice(&self, id: &str) -> Result<Invoice, InvoiceError> {
        let body = self
            .get(&format!("/v1/invoices/{id}"), None::<&InvoiceQuery>)
            .await?;
        decode_invoice(&body)
    }

    /// `GET /v1/invoices` with filters and paging.
    pub async fn list_invoices(
        &self,
        query: &InvoiceQuery,
    ) -> Result<Page<Invoice>, InvoiceError> {
        let body = self.get("/v1/invoices", Some(query)).await?;
        decode_invoice_list(&body)
    }

    /// `GET /v1/invoiceitems` with filters and paging.
    pub async fn list_items(
        &self,
        query: &InvoiceItemQuery,
    ) -> Result<Page<InvoiceItem>, InvoiceError> {
        let body = self.get("/v1/invoiceitems", Some(query)).await?;
        decode_invoice_item_list(&body)
    }

    /// Read back a stored invoice and all of its items, following the
    /// item paging until `totalRowCount` items have arrived.
    pub async fn load_invoice(&self, id: &str) -> Result<StoredInvoice, InvoiceError> {
        let invoice = self.get_invoice(id).await?;

        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let query = InvoiceItemQuery::for_invoice(id).page(page, ITEM_PAGE_SIZE);
            let batch = self.list_items(&query).await?;
            let fetched = batch.items.len();
            items.extend(batch.items);
            debug!(invoice_id = %id, page, fetched, total = batch.total, "invoice items page");
            if fetched == 0 || items.len() as u64 >= batch.total {
                break;
            }
            page += 1;
        }

        Ok(StoredInvoice { invoice, items })
    }

    /// `POST /v1/invoices`.
    pub async fn create_invoice(
        &self,
        payload: &CreateInvoicePayload,
    ) -> Result<Invoice, InvoiceError> {
        let body = self.post("/v1/invoices", payload).await?;
        decode_invoice(&body)
    }

    /// `POST /v1/invoiceitems`.
    pub async fn create_item(
        &self,
        payload: &CreateInvoiceItemPayload,
    ) -> Result<InvoiceItem, InvoiceError> {
        let body = self.post("/v1/invoiceitems", payload).await?;
        decode_invoice_item(&body)
    }

    /// Submit a draft: validate its header, create the invoice, then create
    /// one item per submittable row, one request at a time.
    ///
    /// Rows with an empty description or a non-positive quantity are
    /// skipped. The draft's locally computed totals are not sent.
    ///
    /// # Errors
    ///
    /// `InvoiceError::Validation` before anything is sent when the header
    /// is incomplete; otherwise the first failing request's error. Items
    /// created before a failure are not rolled back.
    pub async fn submit(&self, draft: &InvoiceDraft) -> Result<StoredInvoice, InvoiceError> {
        ensure_valid(validate_header(draft.header()))?;

        let invoice = self
            .create_invoice(&CreateInvoicePayload::from_header(draft.header())?)
            .await?;
        debug!(invoice_id = %invoice.id, "invoice created");

        let skipped = draft.rows().len() - draft.submittable_rows().count();
        if skipped > 0 {
            debug!(skipped, "rows without description or quantity not submitted");
        }

        let mut items = Vec::new();
        for row in draft.submittable_rows() {
            let payload = CreateInvoiceItemPayload::from_line(invoice.id.clone(), &row.item);
            let item = self.create_item(&payload).await?;
            debug!(row = %row.id, item_id = %item.id, "invoice item created");
            items.push(item);
        }

        info!(
            invoice_id = %invoice.id,
            invoice_number = %invoice.invoice_number,
            items = items.len(),
            "invoice submitted"
        );
        Ok(StoredInvoice { invoice, items })
    }

    async fn get<Q: Serialize>(
        &self,
        path: &str,
        query: Option<&Q>,
    ) -> Result<String, InvoiceError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "GET");
        let mut req = self.request(Method::GET, &url);
        if let Some(query) = query {
            req = req.query(query);
        }
        self.send(req, &url).await
    }

    async fn post<T: Serialize>(&self, path: &str, payload: &T) -> Result<String, InvoiceError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "POST");
        let req = self
            .request(Method::POST, &url)
            .json(&RequestEnvelope { data: payload });
        self.send(req, &url).await
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let req = self
            .http
            .request(method, url)
            .header(BUSINESS_CODENAME_HEADER, self.session.business_codename());
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<String, InvoiceError> {
        let resp = req
            .send()
            .await
            .map_err(|e| InvoiceError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| InvoiceError::Network(e.to_string()))?;

        if !status.is_success() {
            let message = error_message(&body);
            warn!(%url, status = status.as_u16(), %message, "invoice service rejected request");
            return Err(InvoiceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }
}
