use chrono::NaiveDate;
use fintrack::core::*;

fn main() {
    let mut draft = InvoiceDraft::new(InvoiceType::Sales, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
    let first = draft.rows()[0].id;

    // ── Typing into the first row ─────────────────────────────────────
    println!("=== Editing ===");
    draft
        .update_row(first, RowField::Description("Website Redesign - Phase 1".into()))
        .ok();
    for input in ["1", "12", "120", "1200"] {
        draft.update_row(first, RowField::quantity_input("1")).ok();
        draft.update_row(first, RowField::unit_price_input(input)).ok();
        println!(
            "  unit price {:>5} -> grand total {}",
            input,
            format_money(draft.totals().grand_total)
        );
    }

    // ── Adding and removing rows ──────────────────────────────────────
    let hosting = draft.add_row();
    draft
        .update_row(hosting, RowField::Description("Hosting".into()))
        .ok();
    draft.update_row(hosting, RowField::quantity_input("12")).ok();
    draft.update_row(hosting, RowField::unit_price_input("49,90")).ok();
    println!(
        "\n  Hosting row with \"49,90\" counts as {} per unit",
        format_money(draft.row(hosting).map_or(0.0, |r| r.item.unit_price))
    );
    draft.update_row(hosting, RowField::unit_price_input("49.90")).ok();

    let blank = draft.add_row();
    println!("  Rows: {}", draft.rows().len());
    draft.remove_row(blank);
    println!("  Rows after removing the blank one: {}", draft.rows().len());

    let totals = draft.totals();
    println!("\n=== Totals ===");
    println!("  Subtotal:    {}", format_money(totals.subtotal));
    println!("  VAT:         {}", format_money(totals.total_vat));
    println!("  Grand total: {}", format_money(totals.grand_total));

    // ── Ready to submit? ──────────────────────────────────────────────
    println!("\n=== Header Check ===");
    for e in validate_header(draft.header()) {
        println!("  Missing: {e}");
    }

    let header = draft.header_mut();
    header.invoice_number = "INV-2024-001".into();
    header.due_date = NaiveDate::from_ymd_opt(2024, 7, 15);
    header.customer_id = Some("cust-1".into());

    match ensure_valid(validate_header(draft.header())) {
        Ok(()) => println!(
            "  Ready: {} rows will be submitted, due {}",
            draft.submittable_rows().count(),
            draft.header().due_date.map(format_date).unwrap_or_default()
        ),
        Err(e) => println!("  Still invalid: {e}"),
    }
}
