//! Parser for textual `.strings` files.
//!
//! ```text
//! /* Title of the main window */
//! "window.title" = "Main Window";
//! greeting = "Hello";      // unquoted keys and values
//! "untranslated";          // value defaults to the key
//! ```
//!
//! The whole file may optionally be wrapped in `{ ... }`. Any value that is
//! not a string (`{`, `(` or `<`) is rejected, since only flat tables are
//! supported.

use std::{fmt::Display, path::Path};

use super::{DataTypeError, StringsEntry, UTF8_BOM};

const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Decode the raw bytes of a textual strings file.
///
/// UTF-16 requires a byte order mark. Anything else must be UTF-8, with or
/// without a BOM.
pub fn decode_text(bytes: &[u8], path: &Path) -> Result<String, DataTypeError> {
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes, path);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes, path);
    }

    let rest = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8(rest.to_vec()).map_err(|e| {
        DataTypeError::new(
            path,
            format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        )
    })
}

fn decode_utf16(
    bytes: &[u8],
    to_unit: fn([u8; 2]) -> u16,
    path: &Path,
) -> Result<String, DataTypeError> {
    if bytes.len() % 2 != 0 {
        return Err(DataTypeError::new(path, "UTF-16 data has an odd number of bytes"));
    }

    let units = bytes.chunks_exact(2).map(|pair| to_unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| {
            DataTypeError::new(
                path,
                format!("invalid UTF-16: unpaired surrogate {:#06x}", e.unpaired_surrogate()),
            )
        })
}

/// Parse the decoded text of a strings file.
///
/// Entries are returned in source order, duplicates included.
pub fn parse_strings_text(text: &str, path: &Path) -> Result<Vec<StringsEntry>, DataTypeError> {
    Parser::new(text, path).parse()
}

/// Characters allowed in an unquoted string.
fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '+' | '/' | ':' | '.' | '-')
}

struct Parser<'a> {
    text: &'a str,
    /// Byte offset into `text`.
    pos: usize,
    /// Current line (1-indexed).
    line: usize,
    path: &'a Path,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str, path: &'a Path) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            path,
        }
    }

    fn parse(mut self) -> Result<Vec<StringsEntry>, DataTypeError> {
        let mut entries = Vec::new();

        self.skip_trivia()?;
        let braced = self.eat('{');

        loop {
            self.skip_trivia()?;
            match self.peek() {
                None if braced => return Err(self.error("expected '}' before end of file")),
                None => break,
                Some('}') if braced => {
                    self.bump();
                    self.skip_trivia()?;
                    if let Some(c) = self.peek() {
                        return Err(self.error(format!("unexpected '{}' after closing '}}'", c)));
                    }
                    break;
                }
                Some(_) => entries.push(self.parse_entry()?),
            }
        }

        Ok(entries)
    }

    fn parse_entry(&mut self) -> Result<StringsEntry, DataTypeError> {
        let line = self.line;
        let key = self.parse_string("key")?;

        self.skip_trivia()?;
        let value = if self.eat('=') {
            self.skip_trivia()?;
            self.parse_value()?
        } else {
            key.clone()
        };

        self.skip_trivia()?;
        if !self.eat(';') {
            return Err(self.error(format!("expected ';' after entry \"{}\"", key)));
        }

        Ok(StringsEntry::new(key, value, Some(line)))
    }

    fn parse_value(&mut self) -> Result<String, DataTypeError> {
        match self.peek() {
            Some(c @ ('{' | '(' | '<')) => Err(self.error(format!(
                "expected a string value, found '{}' (nested structures are not supported)",
                c
            ))),
            _ => self.parse_string("value"),
        }
    }

    fn parse_string(&mut self, what: &str) -> Result<String, DataTypeError> {
        match self.peek() {
            Some('"') => self.parse_quoted(),
            Some(c) if is_unquoted_char(c) => Ok(self.parse_unquoted()),
            Some(c) => Err(self.error(format!("expected {}, found '{}'", what, c))),
            None => Err(self.error(format!("expected {}, found end of file", what))),
        }
    }

    fn parse_unquoted(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_unquoted_char) {
            self.bump();
        }
        self.text[start..self.pos].to_string()
    }

    fn parse_quoted(&mut self) -> Result<String, DataTypeError> {
        let start_line = self.line;
        self.bump();

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error_at(start_line, "unterminated string")),
                Some('"') => return Ok(out),
                Some('\\') => self.parse_escape(&mut out)?,
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<(), DataTypeError> {
        let Some(c) = self.bump() else {
            return Err(self.error("unterminated escape sequence"));
        };

        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0'..='7' => out.push(self.parse_octal(c)?),
            'u' | 'U' => out.push(self.parse_unicode()?),
            // `\"`, `\'`, `\\` and unknown escapes keep the escaped character
            other => out.push(other),
        }
        Ok(())
    }

    /// Octal escape of up to three digits, the first already consumed.
    fn parse_octal(&mut self, first: char) -> Result<char, DataTypeError> {
        let mut code = first.to_digit(8).unwrap_or(0);
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    code = code * 8 + digit;
                    self.bump();
                }
                None => break,
            }
        }
        char::from_u32(code).ok_or_else(|| self.error(format!("invalid octal escape \\{:o}", code)))
    }

    /// `\Uxxxx` escape, the `\U` already consumed. A high surrogate must be
    /// followed by a `\Uxxxx` low surrogate.
    fn parse_unicode(&mut self) -> Result<char, DataTypeError> {
        let unit = self.parse_hex4()?;

        if (0xD800..0xDC00).contains(&unit) {
            let rest = self.rest();
            if !(rest.starts_with("\\u") || rest.starts_with("\\U")) {
                return Err(self.error(format!("unpaired surrogate \\U{:04X}", unit)));
            }
            self.pos += 2;
            let low = self.parse_hex4()?;
            return match char::decode_utf16([unit, low]).next() {
                Some(Ok(c)) => Ok(c),
                _ => Err(self.error(format!(
                    "invalid surrogate pair \\U{:04X}\\U{:04X}",
                    unit, low
                ))),
            };
        }

        char::from_u32(u32::from(unit))
            .ok_or_else(|| self.error(format!("unpaired surrogate \\U{:04X}", unit)))
    }

    fn parse_hex4(&mut self) -> Result<u16, DataTypeError> {
        let digits: String = self.rest().chars().take(4).collect();
        if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(self.error("expected four hex digits in unicode escape"));
        }
        self.pos += 4;
        u16::from_str_radix(&digits, 16)
            .map_err(|_| self.error("expected four hex digits in unicode escape"))
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> Result<(), DataTypeError> {
        loop {
            let rest = self.rest();
            if rest.starts_with("//") {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if rest.starts_with("/*") {
                let start_line = self.line;
                self.pos += 2;
                loop {
                    if self.rest().starts_with("*/") {
                        self.pos += 2;
                        break;
                    }
                    if self.bump().is_none() {
                        return Err(self.error_at(start_line, "unterminated comment"));
                    }
                }
            } else if self.peek().is_some_and(char::is_whitespace) {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn error(&self, reason: impl Display) -> DataTypeError {
        self.error_at(self.line, reason)
    }

    fn error_at(&self, line: usize, reason: impl Display) -> DataTypeError {
        DataTypeError::new(self.path, format!("line {}: {}", line, reason))
    }
}
