mod common;

use common::run_program;

#[test]
fn test_call_returns_the_sum() {
    let source = r#"fun f(a: int, b: int) -> int { return a + b }
print f(2, 3)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "5\n");
}

#[test]
fn test_recursive_function() {
    let source = r#"fun fact(n: int) -> int {
    if n < 2 {
        return 1
    }
    return n * fact(n - 1)
}
print fact(5)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "120\n");
}

#[test]
fn test_default_return_runs_after_the_body() {
    let source = r#"fun greet(a: int) -> int { print a } default 42
print greet(7)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "7\n42\n");
}

#[test]
fn test_default_return_must_match_the_declared_type() {
    let source = r#"fun h() -> int { print 1 } default "hi"
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(
        outcome.errors[0].contains("h's return type is int"),
        "unexpected message: {}",
        outcome.errors[0]
    );
}

#[test]
fn test_return_type_mismatch_is_reported() {
    let source = r#"fun h() -> int { return "hi" }
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You returned a str"));
}

#[test]
fn test_unreachable_code_warns_exactly_once() {
    let source = r#"fun g() -> int {
    return 1
    print 2
    print 3
}
"#;
    let outcome = run_program(source);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("commands after this return statement"));
}

#[test]
fn test_dominated_default_return_warns() {
    let source = r#"fun g() -> int { return 1 } default 2
"#;
    let outcome = run_program(source);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("default return expression that will never run"));
}

#[test]
fn test_wrong_argument_type_is_reported() {
    let source = r#"fun f(a: int) -> int { return a }
print f("text")
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("argument #1"));
}

#[test]
fn test_wrong_arity_is_reported() {
    let source = r#"fun f(a: int, b: int) -> int { return a + b }
print f(2)
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("has 2 argument(s), but you gave 1"));
    assert_eq!(outcome.runtime_error.as_deref(), Some("Missing arguments b"));
}

#[test]
fn test_body_without_return_or_default_fails_at_runtime() {
    let source = r#"fun z() -> int { print 1 }
print z()
"#;
    let outcome = run_program(source);
    assert!(outcome.errors.is_empty());
    assert_eq!(
        outcome.runtime_error.as_deref(),
        Some("This function ended without returning a value.")
    );
}

#[test]
fn test_calling_a_non_function_is_reported() {
    let source = r#"var x: int = 1
print x(2)
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("I can only call functions"));
    assert!(outcome.runtime_error.is_some());
}

#[test]
fn test_functions_capture_their_defining_scope() {
    let source = r#"var base: int = 10
fun shifted(a: int) -> int { return a + base }
print shifted(5)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "15\n");
}

#[test]
fn test_duplicate_function_name_is_reported() {
    let source = r#"fun f() -> int { return 1 }
fun f() -> int { return 2 }
print f()
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("already defined"));
    // The later definition wins.
    assert_eq!(outcome.stdout, "2\n");
}
