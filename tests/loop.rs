mod common;

use common::run_program;

#[test]
fn test_loop_iterates_from_zero() {
    let source = r#"for 5 times as (i: int) {
    print i
}
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "0\n1\n2\n3\n4\n");
}

#[test]
fn test_loop_over_zero_times_does_nothing() {
    let outcome = run_program("for 0 times as (i: int) { print i }\n");
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "");
}

#[test]
fn test_loop_count_can_be_an_expression() {
    let source = r#"var n: int = 2
for n + 1 times as (i: int) { print i }
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "0\n1\n2\n");
}

#[test]
fn test_looping_over_a_string_is_reported() {
    let outcome = run_program("for \"a\" times as (i: int) { print i }\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("I can't loop over a str"));
}

#[test]
fn test_induction_variable_must_be_an_int() {
    let outcome = run_program("for 3 times as (i: str) { print i }\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("produces int values, not str"));
}

#[test]
fn test_return_inside_a_loop_leaves_the_function() {
    let source = r#"fun first_hit(limit: int) -> int {
    for limit times as (i: int) {
        return i + 100
    }
}
print first_hit(3)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "100\n");
}

#[test]
fn test_loop_exit_dominates_a_default_return() {
    let source = r#"fun g() -> int {
    for 3 times as (i: int) {
        return i
    }
} default 7
"#;
    let outcome = run_program(source);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("default return expression that will never run"));
}

#[test]
fn test_each_iteration_gets_a_fresh_scope() {
    let source = r#"for 2 times as (i: int) {
    var doubled: int = i * 2
    print doubled
}
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "0\n2\n");
}
