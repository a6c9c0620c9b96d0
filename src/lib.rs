//! # fintrack
//!
//! Invoice line-item totals, invoice draft state and invoice-service
//! submission for the FinTrack accounting platform.
//!
//! Line items carry plain `f64` amounts and the default aggregator sums them
//! with ordinary binary floating point. A fixed-point alternative built on
//! [`rust_decimal::Decimal`] lives in [`core::aggregate_exact`]; it rounds
//! every row to the currency's minor units and can therefore differ from the
//! float totals by a few minor units.
//!
//! ## Quick Start
//!
//! ```rust
//! use fintrack::core::*;
//!
//! let items = vec![
//!     LineItemBuilder::new(2.0, 50.0).vat_rate(10.0).description("Domain").build(),
//!     LineItemBuilder::new(3.0, 20.0).vat_rate(0.0).description("Support").build(),
//! ];
//!
//! let totals = aggregate(&items);
//! assert_eq!(totals.subtotal, 160.0);
//! assert_eq!(totals.total_vat, 10.0);
//! assert_eq!(totals.grand_total, 170.0);
//! assert_eq!(format_money(totals.grand_total), "₺170,00");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, totals, exact totals, invoice draft, validation, formatting |
//! | `api` | Session context, wire payloads, async invoice-service client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "api")]
pub mod api;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
