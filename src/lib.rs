//! # fix-report - FIX message validation reports
//!
//! This crate parses text files holding one FIX-style message per line
//! (`tag=value` fields separated by `|`) and builds two plain-text reports
//! from the parsed batch.
//!
//! ## Architecture
//!
//! - **Parser**: turns a raw line into an immutable [`message::ParsedMessage`]
//! - **Reports**: duplicate-field report and new order single high/low price
//!   report, both pure functions of the parsed batch
//! - **Stats**: per-status tallies for logging
//!
//! Bad lines never abort a run; the outcome of each line is recorded in its
//! [`message::ParseStatus`].
//!
//! ## Example
//!
//! ```rust
//! use fix_report::{parser::Parser, report};
//!
//! let msgs = Parser::default().parse_lines([
//!     "35=D|1=acct1|44=100|",
//!     "8=FIX.4.2|8=REPEATED",
//!     "",
//! ]);
//!
//! assert_eq!(
//!     report::duplicate_fields_report(&msgs),
//!     vec![
//!         "DUPLICATE FIELDS MSGS REPORT:",
//!         "DUPLICATE FIELD DETECTED: field_name=8, orig_msg=8=FIX.4.2|8=REPEATED",
//!     ]
//! );
//! assert_eq!(
//!     report::high_low_price_report(&msgs),
//!     vec![
//!         "NEW ORDER SINGLE HIGH LOW PRICE REPORT:",
//!         "ACCOUNT=acct1, HIGH=100.0, LOW=100.0",
//!     ]
//! );
//! ```
pub mod message;
pub mod parser;
pub mod report;
pub mod stats;
