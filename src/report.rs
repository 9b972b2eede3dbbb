// src/report.rs
//! Report generators.
//!
//! Both reports are pure folds over the parsed batch: same input, same lines.
//! The first line is either a header or a "nothing found" sentinel.

use crate::message::{ParsedMessage, TAG_ACCOUNT, TAG_PRICE};
use crate::parser::is_space;
use indexmap::IndexMap;
use std::fmt;
use tracing::warn;

pub const NO_DUPLICATES: &str = "NO DUPLICATE FIELDS MSGS DETECTED";
pub const DUPLICATES_HEADER: &str = "DUPLICATE FIELDS MSGS REPORT:";
pub const NO_NEW_ORDERS: &str = "NO NEW ORDER SINGLE MSGS FOUND";
pub const HIGH_LOW_HEADER: &str = "NEW ORDER SINGLE HIGH LOW PRICE REPORT:";

pub fn duplicate_fields_report(msgs: &[ParsedMessage]) -> Vec<String> {
    let lines: Vec<String> = msgs
        .iter()
        .filter(|m| m.is_duplicate())
        .map(|m| format!("{}, orig_msg={}", m.diagnostic(), m.original()))
        .collect();

    if lines.is_empty() {
        return vec![NO_DUPLICATES.to_owned()];
    }

    let mut out = Vec::with_capacity(lines.len() + 1);
    out.push(DUPLICATES_HEADER.to_owned());
    out.extend(lines);
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

impl HighLow {
    #[inline]
    fn new(px: f64) -> Self {
        Self { high: px, low: px }
    }

    #[inline]
    fn update(&mut self, px: f64) {
        self.high = self.high.max(px);
        self.low = self.low.min(px);
    }
}

/// Why a new order single could not be counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderError {
    MissingAccount,
    MissingPrice,
    BadPrice(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderError::MissingAccount => write!(f, "missing account (tag {TAG_ACCOUNT})"),
            OrderError::MissingPrice => write!(f, "missing price (tag {TAG_PRICE})"),
            OrderError::BadPrice(v) => write!(f, "bad price (tag {TAG_PRICE}): {v:?}"),
        }
    }
}

impl std::error::Error for OrderError {}

/// Account and price of a well-formed `35=D` message.
pub fn order_account_price(m: &ParsedMessage) -> Result<(&str, f64), OrderError> {
    let acct = m.get(TAG_ACCOUNT).ok_or(OrderError::MissingAccount)?;
    let raw = m.get(TAG_PRICE).ok_or(OrderError::MissingPrice)?;
    parse_price(raw)
        .map(|px| (acct, px))
        .ok_or_else(|| OrderError::BadPrice(raw.to_owned()))
}

/// Decimal price, finite only.
///
/// Surrounding whitespace is ignored and `_` is allowed between two digits
/// (`1_000.5`).
pub fn parse_price(raw: &str) -> Option<f64> {
    let s = raw.trim_matches(is_space);
    let px = if s.contains('_') {
        let b = s.as_bytes();
        let grouped = b.iter().enumerate().all(|(i, &c)| {
            c != b'_'
                || (i > 0 && i + 1 < b.len() && b[i - 1].is_ascii_digit() && b[i + 1].is_ascii_digit())
        });
        if !grouped {
            return None;
        }
        s.replace('_', "").parse::<f64>().ok()?
    } else {
        s.parse::<f64>().ok()?
    };
    px.is_finite().then_some(px)
}

/// High/low price per account, accounts in first-seen order.
///
/// Orders that fail [`order_account_price`] are skipped with a warning.
pub fn high_low_by_account(msgs: &[ParsedMessage]) -> IndexMap<&str, HighLow> {
    let mut by_acct: IndexMap<&str, HighLow> = IndexMap::new();

    for m in msgs.iter().filter(|m| m.is_new_order_single()) {
        match order_account_price(m) {
            Ok((acct, px)) => {
                by_acct
                    .entry(acct)
                    .and_modify(|hl| hl.update(px))
                    .or_insert_with(|| HighLow::new(px));
            }
            Err(e) => warn!(orig_msg = m.original(), "skipping new order single: {e}"),
        }
    }

    by_acct
}

pub fn high_low_price_report(msgs: &[ParsedMessage]) -> Vec<String> {
    let by_acct = high_low_by_account(msgs);
    if by_acct.is_empty() {
        return vec![NO_NEW_ORDERS.to_owned()];
    }

    let mut out = Vec::with_capacity(by_acct.len() + 1);
    out.push(HIGH_LOW_HEADER.to_owned());
    for (acct, hl) in by_acct {
        out.push(format!(
            "ACCOUNT={acct}, HIGH={}, LOW={}",
            format_price(hl.high),
            format_price(hl.low)
        ));
    }
    out
}

/// Shortest round-trip decimal with at least one fractional digit.
///
/// `100` -> `100.0`, `91.1` -> `91.1`, `-0` -> `-0.0`.
pub fn format_price(px: f64) -> String {
    let mut s = px.to_string();
    if px.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Duplicate report, one blank line, price report.
pub fn render_reports(msgs: &[ParsedMessage]) -> Vec<String> {
    let mut out = duplicate_fields_report(msgs);
    out.push(String::new());
    out.extend(high_low_price_report(msgs));
    out
}
