mod common;

use common::run_program;

#[test]
fn test_shadowing_in_a_child_scope_is_silent() {
    let source = r#"var x: str = "outer"
for 2 times as (x: int) {
    print x
}
print x
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "0\n1\nouter\n");
}

#[test]
fn test_duplicate_declaration_is_reported_and_the_later_wins() {
    let source = r#"var x: int = 1
var x: int = 2
print x
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You've already defined `x`."));
    assert_eq!(outcome.stdout, "2\n");
}

#[test]
fn test_block_locals_do_not_leak() {
    let source = r#"if true {
    var local: int = 1
}
print local
"#;
    let outcome = run_program(source);
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You haven't yet defined local."));
}

#[test]
fn test_return_outside_a_function_is_reported() {
    let outcome = run_program("return 1\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("You can't return outside a function."));
    // The evaluator drops a top-level return value.
    assert!(outcome.runtime_error.is_none());
}

#[test]
fn test_if_branches_get_their_own_scope() {
    let source = r#"var x: int = 1
if true {
    var x: str = "inner"
    print x
}
print x
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "inner\n1\n");
}

#[test]
fn test_condition_must_be_a_boolean() {
    let outcome = run_program("if 1 {\n    print 1\n}\n");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("The condition here should be a boolean, not a int."));
    assert!(outcome.runtime_error.is_some());
}

#[test]
fn test_if_else_takes_the_right_branch() {
    let source = r#"if 1 < 2 {
    print "then"
} else {
    print "else"
}
if 2 < 1 {
    print "then"
} else {
    print "else"
}
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "then\nelse\n");
}

#[test]
fn test_exit_point_needs_both_branches() {
    let source = r#"fun g(flag: bool) -> int {
    if flag {
        return 1
    } else {
        print "no exit"
    }
    return 2
}
print g(false)
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "no exit\n2\n");
}

#[test]
fn test_exit_point_in_both_branches_makes_later_code_unreachable() {
    let source = r#"fun g(flag: bool) -> int {
    if flag {
        return 1
    } else {
        return 2
    }
    print "never"
}
print g(true)
"#;
    let outcome = run_program(source);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.stdout, "1\n");
}
