//! Key Property Parser
//!
//! Hand-written scanner for `name=value[,name=value...]` lists.
//!
//! # Grammar
//! - name: one or more characters other than `,` `=` `:` `*` `?`
//! - value, quoted: `"` then any mix of plain characters (not `\` or `"`)
//!   and the escapes `\\` `\n` `\"` `\?` `\*`, then a closing `"`
//! - value, unquoted: zero or more characters other than `,` `=` `:` `"`
//!
//! Pairs are separated by a single comma. Scanning stops at the first
//! position where no pair can be read; whatever follows is dropped.

use tracing::debug;

use crate::properties::PropertyList;

/// Bytes that end a property name.
const NAME_DELIMITERS: &[u8] = b",=:*?";

/// Bytes that end an unquoted value.
const VALUE_DELIMITERS: &[u8] = b",=:\"";

/// Characters allowed after a backslash inside a quoted value.
const QUOTED_ESCAPES: &[u8] = b"\\n\"?*";

// == Parse ==
/// Parses a key property list string into an ordered property list.
///
/// Never fails: malformed input yields whatever pairs were read before the
/// scanner got stuck, possibly none. Quoted values are returned verbatim,
/// quotes and escapes included.
pub fn parse_key_properties(input: &str) -> PropertyList {
    let mut scanner = Scanner::new(input);
    let mut properties = PropertyList::new();

    while let Some((name, value)) = scanner.next_pair() {
        properties.insert(name, value);
        if !scanner.eat(b',') {
            break;
        }
    }

    if !scanner.is_exhausted() {
        debug!(
            input,
            dropped = scanner.rest(),
            "Key property list has trailing text that does not parse"
        );
    }

    properties
}

// == Scanner ==
/// Cursor over the input. Every delimiter is ASCII, so each stop position
/// falls on a char boundary.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consumes `expected` if it is the next byte.
    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes bytes until one of `delimiters` or the end of input.
    fn take_until(&mut self, delimiters: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    /// Reads one `name=value` pair. The cursor is left untouched on failure.
    fn next_pair(&mut self) -> Option<(&'a str, &'a str)> {
        let start = self.pos;

        let name = self.take_until(NAME_DELIMITERS);
        if name.is_empty() || !self.eat(b'=') {
            self.pos = start;
            return None;
        }

        // An unterminated or badly escaped quoted value falls back to the
        // unquoted form, which is empty since it cannot start with a quote.
        let value = match self.quoted_value() {
            Some(value) => value,
            None => self.take_until(VALUE_DELIMITERS),
        };

        Some((name, value))
    }

    /// Reads a complete quoted value, quotes included.
    fn quoted_value(&mut self) -> Option<&'a str> {
        if self.peek() != Some(b'"') {
            return None;
        }

        let bytes = self.bytes();
        let mut i = self.pos + 1;
        loop {
            match bytes.get(i).copied()? {
                b'"' => break,
                b'\\' => {
                    let escaped = bytes.get(i + 1).copied()?;
                    if !QUOTED_ESCAPES.contains(&escaped) {
                        return None;
                    }
                    i += 2;
                }
                _ => i += 1,
            }
        }

        let start = self.pos;
        self.pos = i + 1;
        Some(&self.input[start..self.pos])
    }
}
