#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        let _ = fintrack::api::decode_invoice(s);
        let _ = fintrack::api::decode_invoice_item(s);
        let _ = fintrack::api::decode_invoice_list(s);
        let _ = fintrack::api::decode_invoice_item_list(s);
        let _ = fintrack::api::error_message(s);
    }
});
