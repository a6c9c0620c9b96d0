#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let amount = fintrack::core::parse_amount(s);
        assert!(amount.is_finite());
        let _ = fintrack::core::format_money(amount);
    }
});
