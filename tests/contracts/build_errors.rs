//! CONTRACT: malformed tag data fails loudly, with a non-zero exit code
//! and the offending id in the message. No command prints a partial tree.

use crate::common::*;

fn assert_fails_with(env: &TestEnv, args: &[&str], needle: &str) {
    let result = env.run(args);
    assert!(!result.success, "expected failure:\n{}", result.combined_output());
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains(needle),
        "expected '{}' in stderr:\n{}",
        needle,
        result.stderr
    );
    assert!(result.stdout.is_empty(), "stdout should be empty:\n{}", result.stdout);
}

#[test]
fn contract_cycle_is_an_error() {
    let env = TestEnv::with_tags(CYCLE_TAGS);
    assert_fails_with(&env, &["tree", "-t", "tags.json"], "parent cycle");
}

#[test]
fn contract_duplicate_id_is_an_error() {
    let env = TestEnv::with_tags(
        r#"[
          {"id": "x", "name": "X", "dimension": "INDUSTRY", "level": 1, "sortOrder": 1},
          {"id": "x", "name": "X again", "dimension": "POSITION", "level": 1, "sortOrder": 1}
        ]"#,
    );
    assert_fails_with(&env, &["check", "-t", "tags.json"], "duplicate tag id 'x'");
}

#[test]
fn contract_cross_dimension_parent_is_an_error() {
    let env = TestEnv::with_tags(
        r#"[
          {"id": "p", "name": "P", "dimension": "INDUSTRY", "level": 1, "sortOrder": 1},
          {"id": "c", "name": "C", "dimension": "POSITION", "level": 2, "parentId": "p", "sortOrder": 1}
        ]"#,
    );
    assert_fails_with(&env, &["check", "-t", "tags.json"], "different dimensions");
}

#[test]
fn contract_strict_levels_reject_wrong_level() {
    let env = TestEnv::with_tags(
        r#"[
          {"id": "p", "name": "P", "dimension": "SITUATION", "level": 1, "sortOrder": 1},
          {"id": "c", "name": "C", "dimension": "SITUATION", "level": 3, "parentId": "p", "sortOrder": 1}
        ]"#,
    );

    // Lenient by default: a warning, not a failure.
    let result = env.run(&["check", "-t", "tags.json"]);
    assert!(result.success, "{}", result.combined_output());

    env.write("tagtree.toml", "[forest]\nstrict_levels = true\n");
    assert_fails_with(&env, &["check", "-t", "tags.json"], "declares level 3");
}

#[test]
fn contract_runaway_parent_chain_is_an_error() {
    let records: Vec<String> = (0..50_000)
        .map(|i| {
            let parent = if i == 0 {
                "null".to_string()
            } else {
                format!("\"n{}\"", i - 1)
            };
            format!(
                r#"{{"id": "n{i}", "name": "N{i}", "dimension": "SKILL_KNOWLEDGE", "level": {}, "parentId": {parent}, "sortOrder": 1}}"#,
                i + 1
            )
        })
        .collect();
    let env = TestEnv::with_tags(&format!("[{}]", records.join(",")));

    assert_fails_with(&env, &["check", "-t", "tags.json"], "nested deeper than the limit");

    env.write("tagtree.toml", "[forest]\nmax_depth = 2\n");
    env.write("tags.json", r#"[
      {"id": "a", "name": "A", "dimension": "SKILL_KNOWLEDGE", "level": 1, "sortOrder": 1},
      {"id": "b", "name": "B", "dimension": "SKILL_KNOWLEDGE", "level": 2, "parentId": "a", "sortOrder": 1},
      {"id": "c", "name": "C", "dimension": "SKILL_KNOWLEDGE", "level": 3, "parentId": "b", "sortOrder": 1}
    ]"#);
    assert_fails_with(
        &env,
        &["check", "-t", "tags.json"],
        "tag 'c' is nested deeper than the limit of 2",
    );
}

#[test]
fn contract_unreadable_tag_file_is_an_error() {
    let env = TestEnv::with_tags("{ not json");
    assert_fails_with(&env, &["tree", "-t", "tags.json"], "invalid tag data");

    let env = TestEnv::new();
    assert_fails_with(&env, &["tree", "-t", "missing.json"], "missing.json");
}

#[test]
fn contract_unknown_persisted_id_is_an_error() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);
    env.write("sel.json", r#"["retired-tag"]"#);

    assert_fails_with(
        &env,
        &["chips", "-t", "tags.json", "-s", "sel.json"],
        "unknown tag 'retired-tag'",
    );
}
