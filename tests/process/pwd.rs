use crate::support::{Captured, TestEnv, assert_paths_equal, invoke, lock_env};
use flint::process::builtin::Outcome;
use flint::process::builtin::map::BuiltinMap;
use std::fs;
use std::path::Path;

#[test]
fn pwd_prints_current_directory() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    env_state.set_current_dir(&root);

    let mut captured = Captured::new();
    assert_eq!(invoke(&BuiltinMap::new(), &["pwd"], &mut captured), Outcome::Status(0));
    let output = captured.stdout();
    assert!(output.ends_with('\n'));
    assert_paths_equal(Path::new(output.trim_end()), &root);
}

#[test]
fn pwd_reflects_cd() {
    let _guard = lock_env();
    let env_state = TestEnv::new();
    let root = env_state.root();
    fs::create_dir_all(root.join("inner")).unwrap();
    env_state.set_current_dir(&root);

    let map = BuiltinMap::new();
    let mut captured = Captured::new();
    invoke(&map, &["cd", "inner"], &mut captured);
    invoke(&map, &["pwd"], &mut captured);
    assert_paths_equal(Path::new(captured.stdout().trim_end()), &root.join("inner"));
}
