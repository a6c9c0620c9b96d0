#![no_main]

use chrono::NaiveDate;
use fintrack::core::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some(date) = NaiveDate::from_ymd_opt(2024, 6, 15) else {
        return;
    };
    let mut draft = InvoiceDraft::new(InvoiceType::Sales, date);

    for chunk in data.chunks(3) {
        let ids: Vec<RowId> = draft.rows().iter().map(|r| r.id).collect();
        let id = ids[chunk[0] as usize % ids.len()];
        let value = chunk.get(2).copied().unwrap_or(0) as f64;
        match chunk.get(1).copied().unwrap_or(0) % 5 {
            0 => {
                draft.add_row();
            }
            1 => {
                draft.remove_row(id);
            }
            2 => {
                let _ = draft.update_row(id, RowField::Quantity(value));
            }
            3 => {
                let _ = draft.update_row(id, RowField::UnitPrice(value * 1.5));
            }
            _ => {
                let _ = draft.update_row(id, RowField::VatRate(value % 101.0));
            }
        }
        assert!(!draft.rows().is_empty());
    }

    let totals = draft.totals();
    assert_eq!(totals.grand_total, totals.subtotal + totals.total_vat);
});
