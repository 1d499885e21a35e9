//! End-to-end tests for annotation reordering

use osc_text_core::annotation::{OrderTable, TokenParser};
use osc_text_core::{reorder, ParseError};

#[test]
fn test_mixed_document_zh_tn() {
    let input = concat!(
        r#"char { value: "在" } "#,
        r#"date { day: "1" month: "5" year: "2023" } "#,
        r#"char { value: "花" } "#,
        r#"money { currency: "元" value: "12.5" } "#,
        r#"time { minute: "30" hour: "8" noon: "上午" }"#,
    );
    let out = reorder(input, OrderTable::ZhNormalization).unwrap();
    assert_eq!(
        out,
        concat!(
            r#"char { value: "在" } "#,
            r#"date { year: "2023" month: "5" day: "1" } "#,
            r#"char { value: "花" } "#,
            r#"money { value: "12.5" currency: "元" } "#,
            r#"time { noon: "上午" hour: "8" minute: "30" }"#,
        )
    );
}

#[test]
fn test_tables_disagree_on_money() {
    let input = r#"money { value: "5" currency: "元" decimal: "2" }"#;

    let tn = reorder(input, OrderTable::ZhNormalization).unwrap();
    // zh-tn has no `decimal`, so only known fields are emitted
    assert_eq!(tn, r#"money { value: "5" currency: "元" }"#);

    let itn = reorder(input, OrderTable::ZhInverseNormalization).unwrap();
    assert_eq!(itn, r#"money { currency: "元" value: "5" decimal: "2" }"#);
}

#[test]
fn test_english_preserve_order_escape() {
    let parser = TokenParser::new(OrderTable::EnNormalization);

    let canonical = parser
        .reorder(r#"date { year: "2024" month: "may" day: "third" }"#)
        .unwrap();
    assert_eq!(canonical, r#"date { day: "third" month: "may" year: "2024" }"#);

    let preserved = parser
        .reorder(r#"date { month: "may" day: "third" preserve_order: "true" }"#)
        .unwrap();
    assert_eq!(
        preserved,
        r#"date { month: "may" day: "third" preserve_order: "true" }"#
    );
}

#[test]
fn test_unknown_type_keeps_encountered_order() {
    let input = r#"cardinal { integer: "3" negative: "-" }"#;
    assert_eq!(reorder(input, OrderTable::ZhNormalization).unwrap(), input);
}

#[test]
fn test_reorder_is_idempotent() {
    let input = r#"fraction { numerator: "1" denominator: "3" } measure { value: "千米" numerator: "5" }"#;
    for table in OrderTable::ALL {
        let once = reorder(input, table).unwrap();
        let twice = reorder(&once, table).unwrap();
        assert_eq!(once, twice, "table {table}");
    }
}

#[test]
fn test_parse_failures_carry_positions() {
    let err = reorder(r#"date year: "2023" }"#, OrderTable::ZhNormalization).unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedChar {
            position: 5,
            expected: '{',
            found: 'y'
        }
    );

    let err = reorder(r#"date { year: "2023 }"#, OrderTable::ZhNormalization).unwrap_err();
    assert_eq!(err, ParseError::UnterminatedValue { start: 13 });
}

#[test]
fn test_table_codes_round_trip_through_parser() {
    for table in OrderTable::ALL {
        let parsed: OrderTable = table.code().parse().unwrap();
        assert_eq!(TokenParser::new(parsed).table(), table);
    }
}
