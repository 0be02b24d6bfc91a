use crate::support::{Captured, TestEnv, assert_paths_equal, invoke, lock_env, touch};
use flint::process::builtin::Outcome;
use flint::process::builtin::map::BuiltinMap;
use std::env;
use std::fs;

#[test]
fn cd_uses_home_when_no_operands() {
    let _guard = lock_env();
    let mut env_state = TestEnv::new();
    let home = env_state.root().join("home");
    fs::create_dir_all(&home).unwrap();
    env_state.set_var("HOME", home.to_str().unwrap());
    env_state.set_current_dir(&env_state.root());

    let mut captured = Captured::new();
    assert_eq!(invoke(&BuiltinMap::new(), &["cd"], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &home);
    assert!(captured.stderr().is_empty());
}

#[test]
fn cd_expands_leading_tilde() {
    let _guard = lock_env();
    let mut env_state = TestEnv::new();
    let home = env_state.root().join("home");
    fs::create_dir_all(home.join("projects")).unwrap();
    env_state.set_var("HOME", home.to_str().unwrap());
    env_state.set_current_dir(&env_state.root());

    let mut captured = Captured::new();
    let map = BuiltinMap::new();
    assert_eq!(invoke(&map, &["cd", "~/projects"], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &home.join("projects"));

    assert_eq!(invoke(&map, &["cd", "~"], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &home);
}

#[test]
fn cd_follows_relative_paths() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    fs::create_dir_all(root.join("a/b")).unwrap();
    env_state.set_current_dir(&root);

    let mut captured = Captured::new();
    let map = BuiltinMap::new();
    assert_eq!(invoke(&map, &["cd", "a/b"], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &root.join("a/b"));

    assert_eq!(invoke(&map, &["cd", ".."], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &root.join("a"));
}

#[test]
fn cd_to_missing_directory_reports_and_stays_put() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    env_state.set_current_dir(&root);

    let mut captured = Captured::new();
    let outcome = invoke(&BuiltinMap::new(), &["cd", "/no/such/dir"], &mut captured);

    assert_eq!(outcome, Outcome::Status(1));
    assert_paths_equal(&env::current_dir().unwrap(), &root);
    assert_eq!(captured.stderr(), "cd: /no/such/dir: No such file or directory\n");
    assert!(captured.stdout().is_empty());
}

#[test]
fn cd_to_a_file_is_rejected() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    touch(&root, "plain");
    env_state.set_current_dir(&root);

    let mut captured = Captured::new();
    let outcome = invoke(&BuiltinMap::new(), &["cd", "plain"], &mut captured);

    assert_eq!(outcome, Outcome::Status(1));
    assert_paths_equal(&env::current_dir().unwrap(), &root);
    assert_eq!(captured.stderr(), "cd: plain: No such file or directory\n");
}

#[test]
fn cd_without_operand_or_home_does_nothing() {
    let _guard = lock_env();
    let mut env_state = TestEnv::new();
    let root = env_state.root();
    env_state.remove_var("HOME");
    env_state.set_current_dir(&root);

    let mut captured = Captured::new();
    assert_eq!(invoke(&BuiltinMap::new(), &["cd"], &mut captured), Outcome::Status(0));
    assert_paths_equal(&env::current_dir().unwrap(), &root);
    assert!(captured.stderr().is_empty());
}
