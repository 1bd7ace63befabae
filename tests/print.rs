mod common;

use common::run_program;

#[test]
fn test_print_a_declared_variable() {
    let source = r#"var x: int = 1 + 2
print x
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "3\n");
}

#[test]
fn test_print_literals() {
    let source = r#"print 42
print "hello"
print true
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "42\nhello\ntrue\n");
}

#[test]
fn test_print_floats_keep_a_decimal() {
    let source = r#"var whole: float = 4 ^ 1
var fractional: float = 5 ^ -1
print whole
print fractional
"#;
    let outcome = run_program(source);
    outcome.assert_clean();
    assert_eq!(outcome.stdout, "4.0\n0.2\n");
}
