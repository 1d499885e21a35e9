//! Character scanner for the braced annotation syntax.
//!
//! The scanner walks the input one character at a time. `current()` returns
//! `None` once the input is exhausted; that end-of-stream marker can never
//! collide with an input character.

use std::str::Chars;

use crate::error::ParseError;

/// Single-pass cursor over annotated text
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    position: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned on the first character of `input`
    pub fn new(input: &'a str) -> Self {
        let mut chars = input.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            position: 0,
        }
    }

    /// Character under the cursor, `None` at end of stream
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Character index of the cursor
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor has run past the last character
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current.is_none()
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.chars.next();
            self.position += 1;
        }
    }

    /// Skip a run of `' '`.
    ///
    /// Returns `false` when the end of the stream was reached. Tabs and
    /// newlines are not separators and stop the skip.
    pub fn skip_spaces(&mut self) -> bool {
        while self.current == Some(' ') {
            self.advance();
        }
        !self.at_end()
    }

    /// Consume `expected` if it is under the cursor
    pub fn match_literal(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Try [`match_literal`](Self::match_literal) for every character of
    /// `set` in order; true if any of them matched.
    pub fn match_literal_any(&mut self, set: &str) -> bool {
        let mut matched = false;
        for ch in set.chars() {
            matched |= self.match_literal(ch);
        }
        matched
    }

    /// Consume `expected` or fail with the character actually found
    pub fn expect(&mut self, expected: char, context: &'static str) -> Result<(), ParseError> {
        match self.current {
            Some(ch) if ch == expected => {
                self.advance();
                Ok(())
            }
            Some(found) => Err(ParseError::UnexpectedChar {
                position: self.position,
                expected,
                found,
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.position,
                context,
            }),
        }
    }

    /// Read a non-empty run of ASCII letters and underscores
    pub fn read_identifier(&mut self, context: &'static str) -> Result<String, ParseError> {
        let mut ident = String::new();
        while let Some(ch) = self.current {
            if ch.is_ascii_alphabetic() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if !ident.is_empty() {
            return Ok(ident);
        }
        match self.current {
            Some(found) => Err(ParseError::ExpectedIdentifier {
                position: self.position,
                found,
            }),
            None => Err(ParseError::UnexpectedEnd {
                position: self.position,
                context,
            }),
        }
    }

    /// Read a value up to (not including) the next unescaped `"`.
    ///
    /// The cursor must sit just past the opening quote. A backslash and the
    /// character after it are both kept as-is; escapes are not decoded.
    pub fn read_quoted_value(&mut self) -> Result<String, ParseError> {
        // the opening quote is one character back
        let start = self.position.saturating_sub(1);
        let mut value = String::new();

        loop {
            match self.current {
                None => return Err(ParseError::UnterminatedValue { start }),
                Some('"') => return Ok(value),
                Some('\\') => {
                    value.push('\\');
                    self.advance();
                    match self.current {
                        Some(escaped) => {
                            value.push(escaped);
                            self.advance();
                        }
                        None => return Err(ParseError::UnterminatedValue { start }),
                    }
                }
                Some(ch) => {
                    value.push(ch);
                    self.advance();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_spaces_only_skips_space() {
        let mut scanner = Scanner::new("   a");
        assert!(scanner.skip_spaces());
        assert_eq!(scanner.current(), Some('a'));
        assert_eq!(scanner.position(), 3);

        let mut scanner = Scanner::new("\ta");
        assert!(scanner.skip_spaces());
        assert_eq!(scanner.current(), Some('\t'));

        let mut scanner = Scanner::new("   ");
        assert!(!scanner.skip_spaces());
        assert!(scanner.at_end());
    }

    #[test]
    fn test_match_literal() {
        let mut scanner = Scanner::new("{}");
        assert!(!scanner.match_literal('}'));
        assert!(scanner.match_literal('{'));
        assert!(scanner.match_literal('}'));
        assert!(!scanner.match_literal('}'));
    }

    #[test]
    fn test_match_literal_any_is_or_of_sequential_attempts() {
        let mut scanner = Scanner::new(" { x");
        assert!(scanner.match_literal_any(" { "));
        assert_eq!(scanner.current(), Some('x'));

        // only the brace is present; the spaces fail but the set still matches
        let mut scanner = Scanner::new("{x");
        assert!(scanner.match_literal_any(" { "));
        assert_eq!(scanner.current(), Some('x'));

        let mut scanner = Scanner::new("x");
        assert!(!scanner.match_literal_any(": \""));
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_read_identifier() {
        let mut scanner = Scanner::new("preserve_order: ");
        assert_eq!(scanner.read_identifier("field").unwrap(), "preserve_order");
        assert_eq!(scanner.current(), Some(':'));

        let mut scanner = Scanner::new("{");
        assert_eq!(
            scanner.read_identifier("type"),
            Err(ParseError::ExpectedIdentifier {
                position: 0,
                found: '{'
            })
        );

        let mut scanner = Scanner::new("");
        assert!(matches!(
            scanner.read_identifier("type"),
            Err(ParseError::UnexpectedEnd { .. })
        ));
    }

    #[test]
    fn test_read_quoted_value_copies_escapes() {
        let mut scanner = Scanner::new(r#""a\"b\\c" rest"#);
        assert!(scanner.match_literal('"'));
        assert_eq!(scanner.read_quoted_value().unwrap(), r#"a\"b\\c"#);
        assert_eq!(scanner.current(), Some('"'));
    }

    #[test]
    fn test_read_quoted_value_unterminated() {
        let mut scanner = Scanner::new(r#"x "2023 }"#);
        scanner.advance();
        scanner.skip_spaces();
        assert!(scanner.match_literal('"'));
        assert_eq!(
            scanner.read_quoted_value(),
            Err(ParseError::UnterminatedValue { start: 2 })
        );

        let mut scanner = Scanner::new(r#""abc\"#);
        assert!(scanner.match_literal('"'));
        assert!(scanner.read_quoted_value().is_err());
    }

    #[test]
    fn test_multibyte_positions_are_char_indices() {
        let mut scanner = Scanner::new("\"五月\"");
        assert!(scanner.match_literal('"'));
        assert_eq!(scanner.read_quoted_value().unwrap(), "五月");
        assert_eq!(scanner.position(), 3);
    }
}
