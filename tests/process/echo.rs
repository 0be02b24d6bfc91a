use crate::support::{Captured, invoke};
use flint::process::builtin::Outcome;
use flint::process::builtin::map::BuiltinMap;

#[test]
fn echo_joins_operands_with_spaces() {
    let mut captured = Captured::new();
    let outcome = invoke(&BuiltinMap::new(), &["echo", "hello", "big  world"], &mut captured);
    assert_eq!(outcome, Outcome::Status(0));
    assert_eq!(captured.stdout(), "hello big  world\n");
}

#[test]
fn echo_without_operands_prints_newline() {
    let mut captured = Captured::new();
    invoke(&BuiltinMap::new(), &["echo"], &mut captured);
    assert_eq!(captured.stdout(), "\n");
    assert!(captured.stderr().is_empty());
}
