use fintrack::core::*;

fn main() {
    let items = vec![
        LineItemBuilder::new(1.0, 1200.0)
            .description("Website Redesign - Phase 1")
            .build(),
        LineItemBuilder::new(2.0, 50.0)
            .vat_rate(10.0)
            .description("Domain registration")
            .build(),
        LineItemBuilder::new(3.0, 20.0)
            .vat_rate(0.0)
            .description("Printed brochures")
            .build(),
    ];

    // ── Per-row amounts ───────────────────────────────────────────────
    println!("=== Rows ===");
    for item in &items {
        let amounts = row_amounts(item);
        println!(
            "  {:<28} {:>6} x {:>12} @ {:>4}%  = {:>14} (VAT {})",
            item.description,
            item.quantity,
            format_money(item.unit_price),
            item.vat_rate,
            format_money(amounts.total),
            format_money(amounts.vat),
        );
    }

    // ── Invoice totals ────────────────────────────────────────────────
    let totals = aggregate(&items);
    println!("\n=== Totals ===");
    println!("  Subtotal:    {}", format_money(totals.subtotal));
    println!("  VAT:         {}", format_money(totals.total_vat));
    println!("  Grand total: {}", format_money(totals.grand_total));

    // ── Exact totals, rounded per row ─────────────────────────────────
    let priced = vec![
        LineItemBuilder::new(3.0, 29.99).vat_rate(7.0).build(),
        LineItemBuilder::new(1.0, 199.0).vat_rate(19.0).build(),
    ];
    println!("\n=== Exact (EUR) ===");
    match aggregate_exact(&priced, "EUR") {
        Ok(exact) => {
            println!("  Subtotal:    {}", exact.subtotal);
            println!("  VAT:         {}", exact.total_vat);
            println!("  Grand total: {}", exact.grand_total);
        }
        Err(e) => println!("  Failed: {e}"),
    }
}
