//! Token parser and reorderer.
//!
//! Grammar, with `ws` meaning runs of `' '` only:
//!
//! ```text
//! document := (ws type_name ws "{" (ws field ws ":" ws '"' value '"')* ws "}")*
//! ```

use tracing::{debug, trace};

use super::order::OrderTable;
use super::scanner::Scanner;
use super::token::Token;
use crate::error::ParseError;

/// Parses annotated text and re-emits it in canonical field order.
///
/// The parser only holds its table selection; all cursor state lives in a
/// per-call [`Scanner`], so one parser can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenParser {
    table: OrderTable,
}

impl TokenParser {
    /// Create a parser bound to `table`
    pub fn new(table: OrderTable) -> Self {
        Self { table }
    }

    /// The table this parser orders by
    pub fn table(&self) -> OrderTable {
        self.table
    }

    /// Parse `input` into tokens in document order
    pub fn parse(&self, input: &str) -> Result<Vec<Token>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut scanner = Scanner::new(input);
        let mut tokens = Vec::new();

        while scanner.skip_spaces() {
            tokens.push(parse_token(&mut scanner)?);
        }

        trace!(count = tokens.len(), "parsed annotation tokens");
        Ok(tokens)
    }

    /// Parse `input` and serialize every token in canonical order
    pub fn reorder(&self, input: &str) -> Result<String, ParseError> {
        let tokens = self.parse(input)?;

        let mut output = String::with_capacity(input.len());
        for token in &tokens {
            token.write_ordered(self.table, &mut output);
            output.push(' ');
        }
        let trimmed_len = output.trim_end().len();
        output.truncate(trimmed_len);

        debug!(table = %self.table, tokens = tokens.len(), "reordered annotation");
        Ok(output)
    }

    /// Reorder independent documents, in parallel when the `parallel`
    /// feature is enabled. Results keep the input order.
    pub fn reorder_batch<S>(&self, inputs: &[S]) -> Vec<Result<String, ParseError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs
                .par_iter()
                .map(|input| self.reorder(input.as_ref()))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs
                .iter()
                .map(|input| self.reorder(input.as_ref()))
                .collect()
        }
    }
}

fn parse_token(scanner: &mut Scanner<'_>) -> Result<Token, ParseError> {
    let name = scanner.read_identifier("type name")?;
    scanner.skip_spaces();
    scanner.expect('{', "token body")?;

    let mut token = Token::new(name);
    loop {
        if !scanner.skip_spaces() {
            return Err(ParseError::UnexpectedEnd {
                position: scanner.position(),
                context: "token body",
            });
        }
        if scanner.match_literal('}') {
            return Ok(token);
        }

        let key = scanner.read_identifier("field name")?;
        scanner.skip_spaces();
        scanner.expect(':', "field")?;
        scanner.skip_spaces();
        scanner.expect('"', "field value")?;
        let value = scanner.read_quoted_value()?;
        scanner.expect('"', "field value")?;

        token.insert(key, value);
    }
}

/// Reorder `input` with `table`; the single-call entry point
pub fn reorder(input: &str, table: OrderTable) -> Result<String, ParseError> {
    TokenParser::new(table).reorder(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zh() -> TokenParser {
        TokenParser::new(OrderTable::ZhNormalization)
    }

    #[test]
    fn test_reorder_date() {
        let out = zh()
            .reorder(r#"date { day: "1" year: "2023" month: "5" }"#)
            .unwrap();
        assert_eq!(out, r#"date { year: "2023" month: "5" day: "1" }"#);
    }

    #[test]
    fn test_multiple_tokens_keep_document_order() {
        let input = r#"char { value: "今" }  time { minute: "30" hour: "8" noon: "上午" } char { value: "天" }"#;
        let out = zh().reorder(input).unwrap();
        assert_eq!(
            out,
            r#"char { value: "今" } time { noon: "上午" hour: "8" minute: "30" } char { value: "天" }"#
        );
    }

    #[test]
    fn test_compact_spacing_is_accepted() {
        let out = zh().reorder(r#"money{currency:"元"value:"5"}"#).unwrap();
        assert_eq!(out, r#"money { value: "5" currency: "元" }"#);
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(zh().reorder("sign { }").unwrap(), "sign { }");
    }

    #[test]
    fn test_only_spaces_yields_empty_output() {
        assert_eq!(zh().reorder("   ").unwrap(), "");
        assert!(zh().parse("   ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(zh().reorder(""), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_missing_brace() {
        let err = zh().parse(r#"date year: "2023" }"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedChar {
                position: 5,
                expected: '{',
                found: 'y'
            }
        );
    }

    #[test]
    fn test_unclosed_body() {
        let err = zh().parse(r#"date { year: "2023""#).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { .. }));
    }

    #[test]
    fn test_missing_identifier() {
        let err = zh().parse(r#"date { : "2023" }"#).unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedIdentifier {
                position: 7,
                found: ':'
            }
        );
    }

    #[test]
    fn test_newline_is_not_a_separator() {
        assert!(zh().parse("date { }\nsign { }").is_err());
    }

    #[test]
    fn test_escaped_quote_copied_through() {
        let out = zh().reorder(r#"char { value: "\"" }"#).unwrap();
        assert_eq!(out, r#"char { value: "\"" }"#);
    }

    #[test]
    fn test_reorder_batch_keeps_input_order() {
        let inputs = vec![
            r#"time { minute: "30" hour: "8" }"#.to_string(),
            "broken {".to_string(),
            r#"money { currency: "元" value: "5" }"#.to_string(),
        ];
        let results = zh().reorder_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap(),
            r#"time { hour: "8" minute: "30" }"#
        );
        assert!(results[1].is_err());
        assert_eq!(
            results[2].as_ref().unwrap(),
            r#"money { value: "5" currency: "元" }"#
        );
    }

    #[test]
    fn test_free_function() {
        let out = reorder(
            r#"fraction { numerator: "1" denominator: "3" }"#,
            OrderTable::ZhInverseNormalization,
        )
        .unwrap();
        assert_eq!(out, r#"fraction { numerator: "1" denominator: "3" }"#);
    }
}
