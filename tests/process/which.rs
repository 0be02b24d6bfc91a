use crate::support::{TestEnv, lock_env, touch};
use flint::process::which;
use std::fs;

#[test]
fn empty_or_unset_path_rejects_absolute_names() {
    let _guard = lock_env();
    let mut env_state = TestEnv::new();

    env_state.set_var("PATH", "");
    assert_eq!(which::resolve("/bin/sh"), None);

    env_state.remove_var("PATH");
    assert_eq!(which::resolve("/bin/sh"), None);
}

#[test]
fn relative_names_resolve_under_path_directories() {
    let _guard = lock_env();
    let mut env_state = TestEnv::new();
    let root = env_state.root();
    let bin = root.join("bin");
    fs::create_dir_all(bin.join("sub")).unwrap();
    let tool = touch(&bin.join("sub"), "tool");
    env_state.set_var("PATH", bin.to_str().unwrap());
    env_state.set_current_dir(&root);

    assert_eq!(which::resolve("sub/tool"), Some(tool));
}
