mod common;

use common::run_program;

#[test]
fn test_undefined_name_is_reported_once() {
    let outcome = run_program("print x\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You haven't yet defined x."));
    assert!(outcome.runtime_error.is_some());
}

#[test]
fn test_declaration_type_mismatch_is_a_single_error() {
    let outcome = run_program("var x: int = \"a\" + \"b\"\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You set x, which is defined to be a int"));
    assert!(outcome.warnings.is_empty());
}

#[test]
fn test_unknown_operands_do_not_cascade() {
    // The inner addition is the only thing wrong; the outer addition and the
    // declaration stay silent.
    let outcome = run_program("var x: int = 1 + \"a\" + 2\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("I don't know how to use +"));
}

#[test]
fn test_undefined_operand_does_not_cascade() {
    let outcome = run_program("var x: int = y * 2\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You haven't yet defined y."));
}

#[test]
fn test_mismatched_ternary_branches_are_a_single_error() {
    let outcome = run_program("var x: int = true ? 1 : \"a\"\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("branches of the if-else expression"));
}

#[test]
fn test_chained_comparison_reports_a_faulty_operand_once() {
    // `y` is reported when the inner link is checked; the outer link
    // re-derives the shared operand silently.
    let outcome = run_program("print 1 < y < 2\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You haven't yet defined y."));
}

#[test]
fn test_comparison_type_mismatch_still_checks_as_a_boolean() {
    let source = r#"var ok: bool = 1 < "a"
"#;
    let outcome = run_program(source);
    // The mismatch is reported, but the comparison itself is a bool, so the
    // declaration stays silent.
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("they aren't the same type"));
}

#[test]
fn test_unary_misuse_is_reported() {
    let outcome = run_program("print not \"a\"\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("I don't know how to use not on a str."));
}
