//! Core invoice types, totals, draft state and validation.
//!
//! Everything here is synchronous and free of I/O. The aggregator in
//! [`totals`] is a pure function and is safe to call on every keystroke.

mod builder;
pub mod currencies;
mod draft;
mod error;
mod exact;
mod format;
mod totals;
mod types;
mod validation;

pub use builder::*;
pub use currencies::{is_known_currency_code, minor_units};
pub use draft::*;
pub use error::*;
pub use exact::*;
pub use format::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
