mod common;

use std::{fs, thread};

use pretty_assertions::assert_eq;
use treecalc::{
    Calculation, CanonicalNode, EvalError, ParseError, Parser,
    ast::{BinaryOperator, Expr},
    interpreter::normalizer::normalize,
    layout,
    layout::engine::LayoutOptions,
    parse_and_evaluate,
    tree::Branch,
};

fn assert_success(src: &str, expected: f64) {
    common::init_test_logger();
    match parse_and_evaluate(src) {
        Ok((_, value)) => assert_eq!(value, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: EvalError) {
    common::init_test_logger();
    match parse_and_evaluate(src) {
        Ok((tree, value)) => {
            panic!("Expression {src:?} succeeded with {value} ({tree}) but was expected to fail")
        },
        Err(e) => assert_eq!(e, expected, "wrong error for {src:?}"),
    }
}

fn assert_parse_failure(src: &str, expected: ParseError) {
    assert_failure(src, EvalError::ParseFailure(expected));
}

#[test]
fn precedence_and_grouping() {
    assert_success("2+3*4", 14.0);
    assert_success("(2+3)*4", 20.0);
    assert_success("2*3+4", 10.0);
    assert_success("2*(3+4)", 14.0);
    assert_success("10/(4+1)", 2.0);
}

#[test]
fn operators_are_left_associative() {
    assert_success("8-4-2", 2.0);
    assert_success("8/4/2", 1.0);
    assert_success("8-(4-2)", 6.0);
    assert_success("2*3/4*2", 3.0);
}

#[test]
fn decimals_and_spaces() {
    assert_success("3.5*2-1", 6.0);
    assert_success("  1.25 +   0.75 ", 2.0);
    assert_success("007", 7.0);
    assert_success("(((5)))", 5.0);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", EvalError::DivisionByZero);
    assert_failure("5/0.0", EvalError::DivisionByZero);
    assert_failure("1/(2-2)", EvalError::DivisionByZero);
    assert_failure("1/(0*3)", EvalError::DivisionByZero);
    assert_failure("(1/0)+2", EvalError::DivisionByZero);
    assert_success("0/5", 0.0);
}

#[test]
fn malformed_input_is_distinguished() {
    assert_parse_failure("", ParseError::EmptyInput);
    assert_parse_failure("   ", ParseError::EmptyInput);
    assert_parse_failure("2+",
                         ParseError::TrailingOperator { operator: "+".to_string(),
                                                        offset:   1, });
    assert_parse_failure("(2+3", ParseError::UnmatchedParenthesis { offset: 0 });
    assert_parse_failure("2 3",
                         ParseError::TrailingInput { token:  "3".to_string(),
                                                     offset: 2, });
}

#[test]
fn unexpected_tokens_name_what_was_expected() {
    assert_parse_failure("2+*3",
                         ParseError::UnexpectedToken { token:    "*".to_string(),
                                                       expected: "a number or '('",
                                                       offset:   2, });
    assert_parse_failure("(2 3)",
                         ParseError::UnexpectedToken { token:    "3".to_string(),
                                                       expected: "')'",
                                                       offset:   3, });
    assert_parse_failure(")",
                         ParseError::UnexpectedToken { token:    ")".to_string(),
                                                       expected: "a number or '('",
                                                       offset:   0, });
    assert_parse_failure("-1",
                         ParseError::UnexpectedToken { token:    "-".to_string(),
                                                       expected: "a number or '('",
                                                       offset:   0, });
    assert_parse_failure("()",
                         ParseError::UnexpectedToken { token:    ")".to_string(),
                                                       expected: "a number or '('",
                                                       offset:   1, });
}

#[test]
fn more_parenthesis_mistakes() {
    assert_parse_failure("(", ParseError::UnmatchedParenthesis { offset: 0 });
    assert_parse_failure("1 + ((2)", ParseError::UnmatchedParenthesis { offset: 4 });
    assert_parse_failure("2)",
                         ParseError::TrailingInput { token:  ")".to_string(),
                                                     offset: 1, });
    assert_parse_failure("(1+",
                         ParseError::TrailingOperator { operator: "+".to_string(),
                                                        offset:   2, });
}

#[test]
fn lexical_errors_quote_the_character() {
    assert_parse_failure("2 $",
                         ParseError::UnrecognizedCharacter { text:   "$".to_string(),
                                                             offset: 2, });
    assert_parse_failure("1 + x",
                         ParseError::UnrecognizedCharacter { text:   "x".to_string(),
                                                             offset: 4, });
    // Lexing finishes before parsing starts, so the bad character wins.
    assert_parse_failure("1 + + ?",
                         ParseError::UnrecognizedCharacter { text:   "?".to_string(),
                                                             offset: 6, });
    assert!(parse_and_evaluate("1.").is_err());
    assert!(parse_and_evaluate(".5").is_err());
    assert!(parse_and_evaluate("1\t+ 2").is_err());
}

#[test]
fn overlong_literal_is_error() {
    let literal = "9".repeat(400);
    assert_parse_failure(&literal,
                         ParseError::LiteralTooLarge { literal: literal.clone(),
                                                       offset:  0, });
}

#[test]
fn error_messages_are_readable() {
    let err = parse_and_evaluate("(2+3").unwrap_err();
    assert_eq!(err.to_string(),
               "Parse failure: Unmatched parenthesis: '(' at offset 0 is never closed.");
    assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero.");
    assert_eq!(err.as_parse_error().and_then(ParseError::offset), Some(0));
}

#[test]
fn parentheses_vanish_from_canonical_tree() {
    let (wrapped, _) = parse_and_evaluate("(((5)))").unwrap();
    let (bare, _) = parse_and_evaluate("5").unwrap();
    assert_eq!(wrapped, bare);
    assert_eq!(bare, CanonicalNode::Leaf(5.0));

    let (a, _) = parse_and_evaluate("((1+2))*(3)").unwrap();
    let (b, _) = parse_and_evaluate("(1+2)*3").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "(mul (add 1.0 2.0) 3.0)");
}

#[test]
fn syntax_tree_keeps_parentheses_and_offsets() {
    let expr = Parser::new().parse("(1 + 2) * 3").unwrap();
    let Expr::BinaryOp { left, op, right, offset } = &expr else {
        panic!("expected a binary operation, got {expr:?}");
    };
    assert_eq!(*op, BinaryOperator::Mul);
    assert_eq!(*offset, 8);
    assert!(matches!(left.as_ref(), Expr::Parenthesized { offset: 0, .. }));
    assert_eq!(right.offset(), 10);

    assert_eq!(normalize(&expr),
               CanonicalNode::binary(BinaryOperator::Mul,
                                     CanonicalNode::binary(BinaryOperator::Add,
                                                           CanonicalNode::Leaf(1.0),
                                                           CanonicalNode::Leaf(2.0)),
                                     CanonicalNode::Leaf(3.0)));
}

#[test]
fn syntax_tree_and_canonical_tree_agree() {
    let parser = Parser::new();
    for src in ["8-4-2", "3.5*2-1", "(1+2)/(3-4)", "1/(1-1)", "((7))"] {
        let expr = parser.parse(src).unwrap();
        assert_eq!(expr.evaluate(), normalize(&expr).evaluate(), "disagreement on {src:?}");
    }
}

#[test]
fn branches_fold_from_the_left() {
    let leaves = |values: &[f64]| -> Vec<CanonicalNode> {
        values.iter().copied().map(CanonicalNode::Leaf).collect()
    };

    let sub = Branch::new(BinaryOperator::Sub, leaves(&[10.0, 3.0, 2.0])).unwrap();
    assert_eq!(CanonicalNode::Branch(sub).evaluate(), Ok(5.0));

    let single = Branch::new(BinaryOperator::Div, leaves(&[4.0])).unwrap();
    assert_eq!(CanonicalNode::Branch(single).evaluate(), Ok(4.0));

    let div = Branch::new(BinaryOperator::Div, leaves(&[1.0, 2.0, 0.0])).unwrap();
    assert_eq!(CanonicalNode::Branch(div).evaluate(), Err(EvalError::DivisionByZero));
}

#[test]
fn evaluation_is_deterministic() {
    for src in ["0.1+0.2", "1/3*3", "2.5/7-0.1*3", "5/0", "2 +"] {
        let first = parse_and_evaluate(src);
        let second = parse_and_evaluate(src);
        match (first, second) {
            (Ok((t1, v1)), Ok((t2, v2))) => {
                assert_eq!(v1.to_bits(), v2.to_bits());
                assert_eq!(t1, t2);
            },
            (Err(e1), Err(e2)) => assert_eq!(e1, e2),
            (a, b) => panic!("{src:?} gave {a:?} then {b:?}"),
        }
    }
}

#[test]
fn depth_limit_is_configurable() {
    let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));

    let shallow = Parser::with_max_depth(10);
    assert!(shallow.parse(&nested(9)).is_ok());
    assert_eq!(shallow.parse(&nested(10)),
               Err(ParseError::NestingTooDeep { limit: 10 }));

    let chain = vec!["1"; 12].join("+");
    assert_eq!(shallow.parse(&chain),
               Err(ParseError::NestingTooDeep { limit: 10 }));
    assert_eq!(Parser::with_max_depth(12).parse_and_evaluate(&chain).unwrap().1,
               12.0);
}

#[test]
fn default_depth_limit_is_one_thousand() {
    // Spawned threads get the default 2 MiB stack.
    let handle = thread::spawn(|| {
        let nested = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));

        assert_eq!(Parser::DEFAULT.max_depth(), 1000);
        assert_eq!(parse_and_evaluate(&nested(999)).unwrap().1, 1.0);
        assert_eq!(parse_and_evaluate(&nested(1001)),
                   Err(EvalError::ParseFailure(ParseError::NestingTooDeep { limit: 1000 })));

        let (tree, value) = parse_and_evaluate(&vec!["1"; 1000].join("-")).unwrap();
        assert_eq!(value, -998.0);
        assert_eq!(tree.depth(), 1000);
        assert_eq!(layout(&tree, &LayoutOptions::default()).len(), 1999);

        let chain = vec!["1"; 2000].join("-");
        assert_eq!(parse_and_evaluate(&chain),
                   Err(EvalError::ParseFailure(ParseError::NestingTooDeep { limit: 1000 })));
    });
    handle.join().unwrap();
}

#[test]
fn parsing_nested_groups_uses_constant_stack() {
    let nested = format!("{}2{}", "(".repeat(2000), ")".repeat(2000));
    let parser = Parser::with_max_depth(5000);
    let expr = thread::Builder::new().stack_size(256 * 1024)
                                     .spawn(move || parser.parse(&nested))
                                     .unwrap()
                                     .join()
                                     .unwrap()
                                     .unwrap();

    assert!(matches!(expr, Expr::Parenthesized { offset: 0, .. }));
    assert_eq!(normalize(&expr), CanonicalNode::Leaf(2.0));
}

#[test]
fn overflow_is_an_error() {
    let big = "9".repeat(300);
    let square = format!("{big} * {big}");

    assert_failure(&square, EvalError::NotFinite);
    assert_failure(&format!("1 / ({square} - {square})"), EvalError::NotFinite);
    assert_failure(&format!("{big} / 0.{}1", "0".repeat(50)), EvalError::NotFinite);
    assert_success(&format!("{big} / {big}"), 1.0);

    assert_eq!(CanonicalNode::Leaf(f64::INFINITY).evaluate(), Err(EvalError::NotFinite));
    assert_eq!(CanonicalNode::binary(BinaryOperator::Div,
                                     CanonicalNode::Leaf(1.0),
                                     CanonicalNode::Leaf(f64::NAN)).evaluate(),
               Err(EvalError::NotFinite));
}

#[test]
fn calculation_keeps_tree_on_division_by_zero() {
    let parser = Parser::new();

    let ok = Calculation::run(&parser, "1+1");
    assert!(ok.is_ok());
    assert_eq!(ok.result, Some(2.0));
    assert_eq!(ok.error, None);

    let zero = Calculation::run(&parser, "1/0");
    assert!(!zero.is_ok());
    assert_eq!(zero.result, None);
    assert_eq!(zero.tree.as_ref().map(ToString::to_string),
               Some("(div 1.0 0.0)".to_string()));

    let broken = Calculation::run(&parser, "1+");
    assert_eq!(broken.tree, None);
    assert!(broken.layout(&Default::default()).is_none());
    assert!(matches!(broken.error, Some(EvalError::ParseFailure(_))));
}

#[test]
fn calculation_serializes_error_as_message() {
    let calc = Calculation::run(&Parser::new(), "4/0");
    let json = serde_json::to_value(&calc).unwrap();
    assert_eq!(json,
               serde_json::json!({
                   "expression": "4/0",
                   "tree": { "label": "div", "children": [4.0, 0.0] },
                   "result": null,
                   "error": "Division by zero."
               }));
}

#[test]
fn calculation_reports_overflow_as_error() {
    let big = "9".repeat(300);
    let calc = Calculation::run(&Parser::new(), &format!("{big}*{big}"));
    assert!(!calc.is_ok());
    assert_eq!(calc.result, None);
    assert_eq!(calc.error, Some(EvalError::NotFinite));

    let json = serde_json::to_value(&calc).unwrap();
    assert_eq!(json["result"], serde_json::Value::Null);
    assert_eq!(json["error"], "Result is not a finite number.");
    assert_eq!(json["tree"]["label"], "mul");
}

#[test]
fn requests_run_in_parallel() {
    let parser = Parser::new();
    let sources = ["1+2*3", "(4-1)/3", "9/0", "2 2", "0.5*8"];
    let expected: Vec<_> = sources.iter().map(|src| parser.parse_and_evaluate(src)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = sources.iter()
                                     .map(|src| {
                                         let parser = &parser;
                                         scope.spawn(move || parser.parse_and_evaluate(src))
                                     })
                                     .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, expected);
    });
}

#[test]
fn example_expressions_evaluate() {
    let contents = fs::read_to_string("tests/expressions.txt").expect("missing file");
    let mut count = 0;

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (src, expected) = line.split_once("=>")
                                  .unwrap_or_else(|| panic!("malformed line {line:?}"));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("bad value in {line:?}: {e}"));
        assert_success(src.trim(), expected);
        count += 1;
    }

    assert!(count > 0, "No expressions found in tests/expressions.txt");
}
