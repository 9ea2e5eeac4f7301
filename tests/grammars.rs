//! End-to-end grammar tests exercising the combinators together through the
//! top-level driver.

use parsely::{
    ParserExt, Value, any_char, bind, chars, char_in, digit, exact, infix_expr, lit, longest,
    one_or_more, sig_lit, zero_or_more,
};

fn number() -> impl parsely::Parser {
    one_or_more(digit()).map(|v| Value::Int(v.text().parse().unwrap()))
}

#[test]
fn decimal_number_with_optional_fraction() {
    let decimal = one_or_more(digit())
        .then(sig_lit(".").then(one_or_more(digit())).optional())
        .map(|v| Value::Float(v.text().parse().unwrap()));

    assert_eq!(decimal.parse_string("123.45").unwrap(), Value::Float(123.45));
    assert_eq!(decimal.parse_string("7").unwrap(), Value::Float(7.0));
}

#[test]
fn partial_number_match_reports_digit_or_end() {
    let decimal = one_or_more(digit());
    let err = decimal.parse_string("12a").unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("At position 2:"), "{}", message);
    assert!(message.contains("\"0123456789\""), "{}", message);
    assert!(message.contains("end of input"), "{}", message);
}

#[test]
fn arithmetic_with_parentheses_and_precedence() {
    fn add(left: Value, right: Value) -> Value {
        Value::Int(left.as_i64().unwrap() + right.as_i64().unwrap())
    }
    fn mul(left: Value, right: Value) -> Value {
        Value::Int(left.as_i64().unwrap() * right.as_i64().unwrap())
    }

    let atom = parsely::forward();
    let term = infix_expr(atom.clone()).op(lit("*"), mul);
    let expr = parsely::forward();
    expr.set(infix_expr(term).op(lit("+"), add));
    atom.set(number().or(lit("(").then(expr.clone()).then(lit(")"))));

    assert_eq!(expr.parse_string("2+3*4").unwrap(), Value::Int(14));
    assert_eq!(expr.parse_string("(2+3)*4").unwrap(), Value::Int(20));
    assert_eq!(expr.parse_string(" 2 + 3 * 4 ").unwrap(), Value::Int(14));
}

#[test]
fn quoted_string_preserves_internal_spaces() {
    let body = zero_or_more(any_char().except(char_in("\"")));
    let string = lit("\"").then(exact(body)).then(lit("\""));

    let value = string.parse_string("\"a b  c\"").unwrap();
    assert_eq!(value.text(), "a b  c");
}

#[test]
fn length_prefixed_binary_record() {
    let record = bind(chars(1), |value| {
        let length = value.as_len().unwrap_or(0);
        Box::new(chars(length))
    });

    let value = record.parse_bytes(&[3, 0x61, 0x62, 0x63]).unwrap();
    assert_eq!(value, Value::Bytes(b"abc".to_vec()));

    // The payload length comes from the prefix byte, not from any declared
    // expectation about its value.
    let short = record.parse_bytes(&[5, 0x61, 0x62]);
    assert!(short.is_err());
}

#[test]
fn longest_beats_declaration_order() {
    let by_length = longest(sig_lit("a")).or(sig_lit("ab"));
    assert_eq!(by_length.parse_string("ab").unwrap(), Value::Str("ab".into()));

    let by_order = sig_lit("a").or(sig_lit("ab"));
    assert!(by_order.parse_string("ab").is_err());
    assert_eq!(
        by_order
            .parse_string_with("ab", false, &parsely::Whitespace)
            .unwrap(),
        Value::Str("a".into())
    );
}

#[test]
fn comment_grammar_with_custom_whitespace() {
    // Treat "--"-to-newline comments as whitespace.
    let comment = lit("--").then(exact(zero_or_more(any_char().except(char_in("\n")))));
    let space = parsely::whitespace().or(comment.discard());

    let parser = sig_lit("begin").then(sig_lit("end"));
    let value = parser
        .parse_string_with("begin -- note\nend", true, &space)
        .unwrap();
    assert_eq!(
        value,
        Value::Tuple(vec![Value::Str("begin".into()), Value::Str("end".into())])
    );
}
