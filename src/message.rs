// src/message.rs
//! Parsed message model.
//!
//! A [`ParsedMessage`] is produced once per input line and never changes
//! afterwards. Parse failures are carried as data in [`ParseStatus`] so a bad
//! line never stops the rest of the batch.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Message type (`35`).
pub const TAG_MSG_TYPE: &str = "35";
/// Account (`1`).
pub const TAG_ACCOUNT: &str = "1";
/// Price (`44`).
pub const TAG_PRICE: &str = "44";

pub const MSG_TYPE_NEW_ORDER_SINGLE: &str = "D";

/// Tag -> value, in wire order.
pub type FieldMap = IndexMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ParseStatus {
    Ok,
    Empty,
    /// First tag seen twice.
    DuplicateField(String),
    /// Non-empty segment with no tag/value delimiter.
    MalformedField(String),
}

impl ParseStatus {
    /// Numeric status code as printed by the legacy validator.
    #[inline]
    pub fn code(&self) -> i32 {
        match self {
            ParseStatus::Ok => 0,
            ParseStatus::Empty => -1,
            ParseStatus::DuplicateField(_) => -2,
            ParseStatus::MalformedField(_) => -3,
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStatus::Ok => f.write_str("GOOD"),
            ParseStatus::Empty => f.write_str("EMPTY MSG"),
            ParseStatus::DuplicateField(tag) => {
                write!(f, "DUPLICATE FIELD DETECTED: field_name={tag}")
            }
            ParseStatus::MalformedField(seg) => write!(f, "MALFORMED FIELD DETECTED: field={seg}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    status: ParseStatus,
    diagnostic: String,
    fields: FieldMap,
    original: String,
}

impl ParsedMessage {
    fn with_status(status: ParseStatus, fields: FieldMap, original: &str) -> Self {
        // fields only survive a clean parse
        let fields = if status == ParseStatus::Ok { fields } else { FieldMap::new() };
        Self {
            diagnostic: status.to_string(),
            status,
            fields,
            original: original.to_owned(),
        }
    }

    pub fn good(fields: FieldMap, original: &str) -> Self {
        Self::with_status(ParseStatus::Ok, fields, original)
    }

    pub fn empty(original: &str) -> Self {
        Self::with_status(ParseStatus::Empty, FieldMap::new(), original)
    }

    pub fn duplicate(tag: &str, original: &str) -> Self {
        Self::with_status(ParseStatus::DuplicateField(tag.to_owned()), FieldMap::new(), original)
    }

    pub fn malformed(segment: &str, original: &str) -> Self {
        Self::with_status(ParseStatus::MalformedField(segment.to_owned()), FieldMap::new(), original)
    }

    #[inline]
    pub fn status(&self) -> &ParseStatus {
        &self.status
    }

    #[inline]
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    #[inline]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// The input line exactly as read, untrimmed.
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.fields.get(tag).map(String::as_str)
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.status == ParseStatus::Ok
    }

    #[inline]
    pub fn is_duplicate(&self) -> bool {
        matches!(self.status, ParseStatus::DuplicateField(_))
    }

    #[inline]
    pub fn msg_type(&self) -> Option<&str> {
        self.get(TAG_MSG_TYPE)
    }

    pub fn is_new_order_single(&self) -> bool {
        self.is_ok() && self.msg_type() == Some(MSG_TYPE_NEW_ORDER_SINGLE)
    }
}
