// src/stats.rs
use crate::message::{ParseStatus, ParsedMessage};
use serde::Serialize;
use std::fmt;

/// Per-status tallies for one parsed batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub msgs_total: u64,
    pub msgs_ok: u64,
    pub msgs_empty: u64,
    pub msgs_duplicate: u64,
    pub msgs_malformed: u64,
    pub new_order_singles: u64,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(msgs: &[ParsedMessage]) -> Self {
        let mut s = Self::new();
        for m in msgs {
            s.record(m);
        }
        s
    }

    #[inline]
    pub fn record(&mut self, m: &ParsedMessage) {
        self.msgs_total += 1;
        match m.status() {
            ParseStatus::Ok => self.msgs_ok += 1,
            ParseStatus::Empty => self.msgs_empty += 1,
            ParseStatus::DuplicateField(_) => self.msgs_duplicate += 1,
            ParseStatus::MalformedField(_) => self.msgs_malformed += 1,
        }
        if m.is_new_order_single() {
            self.new_order_singles += 1;
        }
    }
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total={} ok={} empty={} duplicate={} malformed={} new_order_single={}",
            self.msgs_total,
            self.msgs_ok,
            self.msgs_empty,
            self.msgs_duplicate,
            self.msgs_malformed,
            self.new_order_singles
        )
    }
}
