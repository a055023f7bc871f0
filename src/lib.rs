//! # mobilia
//!
//! Back-office document engine for a furniture manufacturer: order
//! acknowledgements, invoices, expenses, and receipts, built around one
//! cascading discount/VAT totals calculator.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Totals are rounded to 2 decimal places with commercial (half-up) rounding.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use mobilia::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = DocumentBuilder::new(
//!     DocumentKind::Invoice,
//!     "INV-2026-001",
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//! )
//! .counterparty(Party::new("Baan Suan Resort"))
//! .add_line(LineItemBuilder::new("Teak dining chair", dec!(4), dec!(1250)).build())
//! .discount(10)
//! .vat(7)
//! .build()
//! .unwrap();
//!
//! // 5000 − 10% = 4500, + 7% VAT = 4815
//! assert_eq!(invoice.totals.unwrap().grand_total, dec!(4815.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, totals calculator, validation, numbering |
//! | `ledger` | Double-entry ledger posting from computed totals |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "ledger")]
pub mod ledger;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
