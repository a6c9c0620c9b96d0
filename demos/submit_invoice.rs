use chrono::NaiveDate;
use fintrack::api::{InvoiceClient, Session};
use fintrack::core::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fintrack=debug")),
        )
        .init();

    // FINTRACK_ENV, FINTRACK_BASE_URL, FINTRACK_TOKEN and
    // FINTRACK_BUSINESS_CODENAME select the target service.
    let session = Session::from_env();
    println!("Submitting to {session:?}");

    let Some(issue_date) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
        return;
    };
    let draft = InvoiceDraftBuilder::new(InvoiceType::Sales, issue_date)
        .number("INV-2024-001")
        .customer("cust-1")
        .due_date(issue_date + chrono::Days::new(30))
        .add_line(
            LineItemBuilder::new(1.0, 1200.0)
                .description("Website Redesign - Phase 1")
                .build(),
        )
        .add_line(
            LineItemBuilder::new(12.0, 49.9)
                .vat_rate(20.0)
                .description("Hosting (monthly)")
                .build(),
        )
        .build();

    let local = draft.totals();
    println!("Local grand total: {}", format_money(local.grand_total));

    let client = match InvoiceClient::new(&session) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Client setup failed: {e}");
            return;
        }
    };

    let stored = match client.submit(&draft).await {
        Ok(stored) => stored,
        Err(e) => {
            eprintln!("Submission failed: {e}");
            return;
        }
    };
    println!(
        "Created invoice {} with {} items",
        stored.invoice.id,
        stored.items.len()
    );

    // Read it back the way the invoice detail view does.
    match client.load_invoice(&stored.invoice.id).await {
        Ok(reloaded) => {
            let server = reloaded.server_totals();
            println!(
                "Stored invoice {} ({:?}): {} items, server grand total {}",
                reloaded.invoice.invoice_number,
                reloaded.invoice.status,
                reloaded.items.len(),
                format_money(server.grand_total)
            );
        }
        Err(e) => eprintln!("Read-back failed: {e}"),
    }
}
