//! CONTRACT: configuration problems are reported, never silently applied.

use crate::common::*;

#[test]
fn contract_unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);
    env.write("tagtree.toml", "[forest]\nstrict_level = true\n");

    let result = env.run(&["check", "-t", "tags.json"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'strict_level'"));
    assert!(result.stderr.contains("tagtree.toml:2"));
    assert!(result.stderr.contains("Did you mean 'strict_levels'?"));
}

#[test]
fn contract_invalid_config_fails() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);
    env.write("tagtree.toml", "[forest]\norphans = \"drop\"\n");

    let result = env.run(&["check", "-t", "tags.json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"), "{}", result.stderr);
}

#[test]
fn contract_explicit_config_path_wins() {
    let env = TestEnv::with_tags(ORPHAN_TAGS);
    env.write("strict.toml", "[forest]\norphans = \"reject\"\n");

    let result = env.run(&["--config", "strict.toml", "check", "-t", "tags.json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("missing parent 'ghost'"));
}

#[cfg(target_os = "linux")]
#[test]
fn contract_user_config_applies_without_project_file() {
    let env = TestEnv::with_tags(ORPHAN_TAGS);
    let user_dir = env.home.path().join(".config").join("tagtree");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[forest]\norphans = \"reject\"\n").unwrap();

    let result = env.run(&["check", "-t", "tags.json"]);
    assert!(!result.success, "{}", result.combined_output());
    assert!(result.stderr.contains("missing parent 'ghost'"));
}
