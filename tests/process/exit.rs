use crate::support::{Captured, invoke};
use flint::process::builtin::Outcome;
use flint::process::builtin::map::BuiltinMap;

#[test]
fn exit_requests_termination_with_code() {
    let mut captured = Captured::new();
    assert_eq!(
        invoke(&BuiltinMap::new(), &["exit", "42"], &mut captured),
        Outcome::Exit(42)
    );
}

#[test]
fn exit_defaults_to_zero() {
    let mut captured = Captured::new();
    let map = BuiltinMap::new();
    assert_eq!(invoke(&map, &["exit"], &mut captured), Outcome::Exit(0));
    assert_eq!(invoke(&map, &["exit", "nope"], &mut captured), Outcome::Exit(0));
    assert!(captured.stdout().is_empty());
    assert!(captured.stderr().is_empty());
}
