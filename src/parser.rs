// src/parser.rs
use crate::message::{FieldMap, ParsedMessage};
use anyhow::{Context, Result};
use std::io::Read;
use tracing::debug;

pub const DEFAULT_FIELD_DELIM: char = '|';
pub const DEFAULT_TAG_DELIM: char = '=';
/// Field separator used on the wire by real FIX sessions.
pub const SOH: char = '\x01';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parser {
    field_delim: char,
    tag_delim: char,
}

impl Default for Parser {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_DELIM, DEFAULT_TAG_DELIM)
    }
}

impl Parser {
    #[inline]
    pub fn new(field_delim: char, tag_delim: char) -> Self {
        Self { field_delim, tag_delim }
    }

    /// Parse one raw line.
    ///
    /// The line is trimmed once as a whole; tags and values are kept exactly
    /// as they appear. Empty segments (trailing or doubled delimiters) are
    /// ignored. The first repeated tag aborts the parse and no fields are
    /// kept.
    pub fn parse_msg(&self, raw: &str) -> ParsedMessage {
        let msg = raw.trim_matches(is_space);
        if msg.is_empty() {
            return ParsedMessage::empty(raw);
        }

        let mut fields = FieldMap::new();
        for seg in msg.split(self.field_delim).filter(|s| !s.is_empty()) {
            let Some((tag, value)) = seg.split_once(self.tag_delim) else {
                return ParsedMessage::malformed(seg, raw);
            };
            if fields.contains_key(tag) {
                return ParsedMessage::duplicate(tag, raw);
            }
            fields.insert(tag.to_owned(), value.to_owned());
        }

        ParsedMessage::good(fields, raw)
    }

    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<ParsedMessage>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let p = self.parse_msg(line.as_ref());
                if !p.is_ok() {
                    debug!(line = i + 1, "{}", p.diagnostic());
                }
                p
            })
            .collect()
    }

    /// Read a whole stream and parse it line by line.
    ///
    /// Lines are cut with [`split_lines`].
    pub fn parse_reader<R: Read>(&self, mut r: R) -> Result<Vec<ParsedMessage>> {
        let mut buf = String::new();
        r.read_to_string(&mut buf).context("read messages")?;
        Ok(self.parse_lines(split_lines(&buf)))
    }
}

/// Unicode whitespace plus the `\x1c`..=`\x1f` separators.
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines.
///
/// `\r\n` counts as one break; a lone `\r`, `\n`, form feed, vertical tab,
/// the `\x1c`..=`\x1e` separators, NEL and the Unicode line/paragraph
/// separators each end a line too. A trailing break does not yield an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut it = text.char_indices().peekable();

    while let Some((i, c)) = it.next() {
        if !is_line_break(c) {
            continue;
        }
        out.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = it.peek() {
                it.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

/// Parse with the default `|` / `=` delimiters.
#[inline]
pub fn parse_msg(raw: &str) -> ParsedMessage {
    Parser::default().parse_msg(raw)
}
