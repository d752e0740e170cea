//! Grammar tests for the token parser
//!
//! These tests run the lexer and parser together and check the produced atoms
//! and the error code and span of every malformation.

use promptag_core::TagAtom;

use crate::{
    error::{Diagnostic, ErrorCode},
    lexer, parser,
    span::Span,
};

/// Helper function to parse a source string into atoms
fn parse_atoms(source: &str) -> Vec<TagAtom> {
    let tokens = lexer::tokenize(source).expect("Lexer should succeed");
    match parser::build_atoms(&tokens) {
        Ok(atoms) => atoms,
        Err(e) => panic!("Expected parsing of {source:?} to succeed, but got error: {e}"),
    }
}

/// Helper function to parse a source string and return the diagnostic
fn parse_failure(source: &str) -> Diagnostic {
    let tokens = lexer::tokenize(source).expect("Lexer should succeed");
    match parser::build_atoms(&tokens) {
        Ok(atoms) => panic!("Expected parsing of {source:?} to fail, but got {atoms:?}"),
        Err(diag) => diag,
    }
}

/// Helper to check the error code and primary span of a failure
fn assert_error_at(source: &str, code: ErrorCode, expected: &str, start: usize) {
    let diag = parse_failure(source);

    assert_eq!(diag.code(), Some(code), "wrong code for {source:?}: {diag}");
    let span = diag.primary_span().expect("Diagnostic should have a primary label");
    assert_eq!(span, Span::new(start..start + expected.len()));
    assert_eq!(&source[span.range()], expected);
}

fn names(atoms: &[TagAtom]) -> Vec<&str> {
    atoms.iter().map(TagAtom::name).collect()
}

mod plain_tags {
    use super::*;

    #[test]
    fn test_single_tag_has_default_weights() {
        assert_eq!(parse_atoms("masterpiece"), vec![TagAtom::new("masterpiece")]);
    }

    #[test]
    fn test_tags_keep_source_order() {
        let atoms = parse_atoms("b, a,c ,  d");
        assert_eq!(names(&atoms), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_interior_whitespace_is_part_of_name() {
        let atoms = parse_atoms("  blue sky ,very  long hair");
        assert_eq!(names(&atoms), vec!["blue sky", "very  long hair"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let atoms = parse_atoms("tag, tag");
        assert_eq!(atoms, vec![TagAtom::new("tag"), TagAtom::new("tag")]);
    }

    #[test]
    fn test_unicode_names() {
        let atoms = parse_atoms("青空, 桜の花");
        assert_eq!(names(&atoms), vec!["青空", "桜の花"]);
    }
}

mod separators {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(parse_atoms("").is_empty());
        assert!(parse_atoms("   \t ").is_empty());
        assert!(parse_atoms("\n\n").is_empty());
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(names(&parse_atoms("a,,b")), vec!["a", "b"]);
        assert_eq!(names(&parse_atoms(", a , , b ,")), vec!["a", "b"]);
        assert!(parse_atoms(",,,").is_empty());
    }

    #[test]
    fn test_newline_separates_tags() {
        assert_eq!(names(&parse_atoms("a\nb")), vec!["a", "b"]);
        assert_eq!(names(&parse_atoms("a,\nb,\n")), vec!["a", "b"]);
        assert_eq!(names(&parse_atoms("a\r\nb")), vec!["a", "b"]);
    }

    #[test]
    fn test_newline_inside_group() {
        let atoms = parse_atoms("(\n  a,\n  b\n)");
        assert_eq!(
            atoms,
            vec![
                TagAtom::new("a").with_bracket_weight(1),
                TagAtom::new("b").with_bracket_weight(1),
            ]
        );
    }
}

mod weights {
    use super::*;

    #[test]
    fn test_numeric_weight() {
        assert_eq!(
            parse_atoms("tag:1.2"),
            vec![TagAtom::new("tag").with_num_weight(1.2)]
        );
    }

    #[test]
    fn test_weight_forms() {
        let atoms = parse_atoms("a:2, b:.5, c:-0.25, d:+1.5, e:3.");
        let weights: Vec<f64> = atoms.iter().map(TagAtom::num_weight).collect();
        assert_eq!(weights, vec![2.0, 0.5, -0.25, 1.5, 3.0]);
    }

    #[test]
    fn test_whitespace_around_colon() {
        let atoms = parse_atoms("tag : 0.8 , other:\t1.1");
        assert_eq!(
            atoms,
            vec![
                TagAtom::new("tag").with_num_weight(0.8),
                TagAtom::new("other").with_num_weight(1.1),
            ]
        );
    }

    #[test]
    fn test_explicit_default_weight_equals_plain_tag() {
        assert_eq!(parse_atoms("tag:1"), parse_atoms("tag"));
        assert_eq!(parse_atoms("tag:1.0"), parse_atoms("tag"));
    }

    #[test]
    fn test_weight_inside_group() {
        assert_eq!(
            parse_atoms("(masterpiece:1.2)"),
            vec![
                TagAtom::new("masterpiece")
                    .with_num_weight(1.2)
                    .with_bracket_weight(1)
            ]
        );
    }
}

mod groups {
    use super::*;

    #[test]
    fn test_paren_raises_bracket_weight() {
        assert_eq!(parse_atoms("(tag)")[0].bracket_weight(), 1);
        assert_eq!(parse_atoms("((tag))")[0].bracket_weight(), 2);
        assert_eq!(parse_atoms("(((tag)))")[0].bracket_weight(), 3);
    }

    #[test]
    fn test_square_lowers_bracket_weight() {
        assert_eq!(parse_atoms("[tag]")[0].bracket_weight(), -1);
        assert_eq!(parse_atoms("[[tag]]")[0].bracket_weight(), -2);
    }

    #[test]
    fn test_mixed_nesting_cancels() {
        assert_eq!(parse_atoms("([tag])")[0].bracket_weight(), 0);
        assert_eq!(parse_atoms("[((tag))]")[0].bracket_weight(), 1);
    }

    #[test]
    fn test_group_of_several_tags() {
        let atoms = parse_atoms("((a, b), c), d");
        let depths: Vec<i32> = atoms.iter().map(TagAtom::bracket_weight).collect();
        assert_eq!(names(&atoms), vec!["a", "b", "c", "d"]);
        assert_eq!(depths, vec![2, 2, 1, 0]);
    }

    #[test]
    fn test_whitespace_around_groups() {
        let atoms = parse_atoms("  ( tag )  ,  [ other ] ");
        assert_eq!(
            atoms,
            vec![
                TagAtom::new("tag").with_bracket_weight(1),
                TagAtom::new("other").with_bracket_weight(-1),
            ]
        );
    }

    #[test]
    fn test_empty_group_yields_nothing() {
        assert!(parse_atoms("()").is_empty());
        assert_eq!(names(&parse_atoms("a, [], b")), vec!["a", "b"]);
    }

    #[test]
    fn test_deep_nesting() {
        let depth = 100_000;
        let source = format!("{}tag{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_atoms(&source)[0].bracket_weight(), depth as i32);

        let source = format!("{}tag{}", "[".repeat(depth), "]".repeat(depth));
        assert_eq!(parse_atoms(&source)[0].bracket_weight(), -(depth as i32));
    }

    #[test]
    fn test_deep_nesting_with_siblings() {
        let depth = 100_000;
        let source = format!(
            "{}a, (b){}, c",
            "(".repeat(depth),
            ")".repeat(depth)
        );
        let atoms = parse_atoms(&source);
        let depths: Vec<i32> = atoms.iter().map(TagAtom::bracket_weight).collect();
        assert_eq!(depths, vec![depth as i32, depth as i32 + 1, 0]);
    }

    #[test]
    fn test_full_prompt() {
        let atoms = parse_atoms("(masterpiece:1.2), ((ultra-detail)), [1Girl], blue sky");
        assert_eq!(
            atoms,
            vec![
                TagAtom::new("masterpiece")
                    .with_num_weight(1.2)
                    .with_bracket_weight(1),
                TagAtom::new("ultra-detail").with_bracket_weight(2),
                TagAtom::new("1Girl").with_bracket_weight(-1),
                TagAtom::new("blue sky"),
            ]
        );
    }
}

mod escapes {
    use super::*;

    #[test]
    fn test_escaped_delimiters_are_literal() {
        assert_eq!(names(&parse_atoms(r"a\,b")), vec!["a,b"]);
        assert_eq!(names(&parse_atoms(r"\(smile\)")), vec!["(smile)"]);
        assert_eq!(names(&parse_atoms(r"re\:zero")), vec!["re:zero"]);
        assert_eq!(names(&parse_atoms(r"\[tag\]")), vec!["[tag]"]);
    }

    #[test]
    fn test_escaped_backslash() {
        assert_eq!(names(&parse_atoms(r"a\\b")), vec![r"a\b"]);
    }

    #[test]
    fn test_lone_backslash_is_literal() {
        assert_eq!(names(&parse_atoms(r"a\b")), vec![r"a\b"]);
    }

    #[test]
    fn test_escaped_name_inside_group() {
        let atoms = parse_atoms(r"(kaomoji \(^_^\):1.1)");
        assert_eq!(
            atoms,
            vec![
                TagAtom::new("kaomoji (^_^)")
                    .with_num_weight(1.1)
                    .with_bracket_weight(1)
            ]
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_unclosed_paren() {
        assert_error_at("(tag", ErrorCode::E101, "(", 0);
        assert_error_at("a, (b, (c)", ErrorCode::E101, "(", 3);
        assert_error_at("((a", ErrorCode::E101, "(", 1);
    }

    #[test]
    fn test_deep_unclosed_bracket() {
        let depth = 100_000;
        let source = format!("{}tag{}", "(".repeat(depth), ")".repeat(depth - 1));
        assert_error_at(&source, ErrorCode::E101, "(", 0);
    }

    #[test]
    fn test_unclosed_square() {
        assert_error_at("[tag", ErrorCode::E101, "[", 0);
    }

    #[test]
    fn test_unmatched_closing() {
        assert_error_at("tag)", ErrorCode::E102, ")", 3);
        assert_error_at("a, b]", ErrorCode::E102, "]", 4);
        assert_error_at("(a))", ErrorCode::E102, ")", 3);
    }

    #[test]
    fn test_mismatched_closing() {
        assert_error_at("(tag]", ErrorCode::E103, "]", 4);
        assert_error_at("[tag)", ErrorCode::E103, ")", 4);

        let diag = parse_failure("(tag]");
        let secondary = diag
            .labels()
            .iter()
            .find(|label| label.is_secondary())
            .expect("Opening bracket should be labeled");
        assert_eq!(secondary.span(), Span::new(0..1));
    }

    #[test]
    fn test_invalid_weight() {
        assert_error_at("tag:abc", ErrorCode::E104, "abc", 4);
        assert_error_at("tag:1.2.3", ErrorCode::E104, "1.2.3", 4);
        assert_error_at("tag:1e3", ErrorCode::E104, "1e3", 4);
        assert_error_at("tag::1", ErrorCode::E104, ":", 4);
    }

    #[test]
    fn test_missing_weight() {
        assert_error_at("tag:", ErrorCode::E105, ":", 3);
        assert_error_at("tag: , b", ErrorCode::E105, ":", 3);
        assert_error_at("(tag:)", ErrorCode::E105, ":", 4);
        assert_error_at("tag:\n1.2", ErrorCode::E105, ":", 3);
    }

    #[test]
    fn test_weight_without_name() {
        assert_error_at(":1.2", ErrorCode::E100, ":", 0);
        assert_error_at("(:1.2)", ErrorCode::E100, ":", 1);
    }

    #[test]
    fn test_group_followed_by_group() {
        assert_error_at("(a)(b)", ErrorCode::E100, "(", 3);
        assert_error_at("tag:1:2", ErrorCode::E100, ":", 5);
    }

    #[test]
    fn test_missing_separator() {
        assert_error_at("a (b)", ErrorCode::E100, "(", 2);
        assert_error_at("(a) b", ErrorCode::E100, "b", 4);
        assert_error_at("tag:1.2 more", ErrorCode::E100, "more", 8);
    }

    #[test]
    fn test_error_messages_have_help() {
        for source in ["(tag", "tag)", "(tag]", "tag:x", "tag:", "a (b)"] {
            let diag = parse_failure(source);
            assert!(diag.help().is_some(), "no help for {source:?}");
            assert!(diag.to_string().starts_with("error["));
        }
    }
}
