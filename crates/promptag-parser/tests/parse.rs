use float_cmp::approx_eq;

use promptag_core::TagAtom;
use promptag_parser::{error::ErrorCode, parse};

#[test]
fn test_simple_prompt() {
    let source = "(masterpiece:1.2), ((ultra-detail)), [1Girl]";

    let atoms = parse(source).expect("Failed to parse");

    assert_eq!(atoms.len(), 3);

    assert_eq!(atoms[0].name(), "masterpiece");
    assert!(approx_eq!(f64, atoms[0].num_weight(), 1.2, ulps = 2));
    assert_eq!(atoms[0].bracket_weight(), 1);

    assert_eq!(atoms[1].name(), "ultra-detail");
    assert!(atoms[1].has_default_num_weight());
    assert_eq!(atoms[1].bracket_weight(), 2);

    assert_eq!(atoms[2].name(), "1Girl");
    assert_eq!(atoms[2].bracket_weight(), -1);
}

#[test]
fn test_multiline_prompt() {
    let source = r#"
        masterpiece,
        (best quality:1.1),
        [lowres, (blurry)]
    "#;

    let atoms = parse(source).expect("Failed to parse");

    assert_eq!(
        atoms,
        vec![
            TagAtom::new("masterpiece"),
            TagAtom::new("best quality")
                .with_num_weight(1.1)
                .with_bracket_weight(1),
            TagAtom::new("lowres").with_bracket_weight(-1),
            TagAtom::new("blurry"),
        ]
    );
}

#[test]
fn test_blank_prompt() {
    assert_eq!(parse("").expect("Failed to parse"), Vec::new());
    assert_eq!(parse(" ,\n , ").expect("Failed to parse"), Vec::new());
}

#[test]
fn test_parse_is_repeatable() {
    let source = "a, (b:0.9), [c]";
    let first = parse(source).expect("Failed to parse");
    let second = parse(source).expect("Failed to parse");
    assert_eq!(first, second);
}

#[test]
fn test_error_codes() {
    let cases = [
        ("(tag", ErrorCode::E101),
        ("tag)", ErrorCode::E102),
        ("(tag]", ErrorCode::E103),
        ("tag:abc", ErrorCode::E104),
        ("tag:", ErrorCode::E105),
        ("a (b)", ErrorCode::E100),
        ("tag\\", ErrorCode::E001),
    ];

    for (source, code) in cases {
        let err = parse(source).expect_err("Parsing should fail");
        assert_eq!(
            err.code(),
            Some(code),
            "unexpected code for {source:?}"
        );
    }
}

#[test]
fn test_error_display() {
    let err = parse("(tag").expect_err("Parsing should fail");
    let message = err.to_string();

    assert!(message.contains("E101"), "message was: {message}");
    assert!(message.contains("unclosed"), "message was: {message}");
}

#[test]
fn test_deeply_nested_prompt() {
    let depth = 200_000;
    let source = format!("{}tag:1.5{}, other", "(".repeat(depth), ")".repeat(depth));

    let atoms = parse(&source).expect("Failed to parse");

    assert_eq!(atoms.len(), 2);
    assert_eq!(atoms[0].bracket_weight(), depth as i32);
    assert_eq!(atoms[1].bracket_weight(), 0);
}

#[test]
fn test_error_span() {
    let err = parse("(tag]").expect_err("Parsing should fail");

    assert_eq!(err.span().map(|span| span.range()), Some(4..5));
}
