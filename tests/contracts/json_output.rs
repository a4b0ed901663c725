//! CONTRACT: with --json every command prints exactly one JSON object on
//! stdout, tagged with an `event` field, and nothing else.

use crate::common::*;

#[test]
fn contract_tree_json_shape() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);
    env.write("sel.json", r#"["recruitment-newgrad-mid"]"#);

    let result = env.run(&["tree", "-t", "tags.json", "-s", "sel.json", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let json = result.json();

    assert_eq!(json["event"], "tree");
    assert_eq!(json["selected"], 1);
    assert_eq!(json["total"], 5);

    let dimensions = json["dimensions"].as_array().unwrap();
    assert_eq!(dimensions.len(), 2);
    assert_eq!(dimensions[0]["dimension"], "INDUSTRY");
    assert_eq!(dimensions[1]["dimension"], "JOB_CATEGORY");
    assert_eq!(dimensions[1]["label"], "職種");
    assert_eq!(dimensions[1]["state"], "indeterminate");

    let root = &dimensions[1]["roots"][0];
    assert_eq!(root["id"], "corporate-admin");
    assert_eq!(root["state"], "indeterminate");
    assert_eq!(root["description"], "バックオフィス全般");
    let hr = &root["children"][0];
    assert_eq!(hr["id"], "hr-recruitment");
    assert_eq!(hr["children"][0]["state"], "checked");
    assert_eq!(hr["children"][0]["articleCount"], 12);
    assert_eq!(hr["children"][1]["state"], "unchecked");
}

#[test]
fn contract_tree_json_single_dimension_includes_empty() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);

    let result = env.run(&["tree", "-t", "tags.json", "-d", "position", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let json = result.json();

    let dimensions = json["dimensions"].as_array().unwrap();
    assert_eq!(dimensions.len(), 1);
    assert_eq!(dimensions[0]["dimension"], "POSITION");
    assert_eq!(dimensions[0]["roots"].as_array().unwrap().len(), 0);
}

#[test]
fn contract_toggle_json_shape() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);

    let result = env.run(&["toggle", "-t", "tags.json", "hr-recruitment", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let json = result.json();

    assert_eq!(json["event"], "toggle");
    assert_eq!(json["toggled"], serde_json::json!(["hr-recruitment"]));
    assert_eq!(
        json["selection"],
        serde_json::json!(["hr-development-training", "recruitment-newgrad-mid"])
    );
    assert_eq!(json["chips"][0]["id"], "hr-recruitment");
    assert_eq!(json["chips"][0]["name"], "人事・採用");
    assert_eq!(json["chips"][0]["dimension"], "JOB_CATEGORY");
    assert_eq!(json["written"], false);
}

#[test]
fn contract_chips_json_shape() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);
    env.write(
        "sel.json",
        r#"["hr-development-training", "recruitment-newgrad-mid", "legal-ip", "finance-accounting"]"#,
    );

    let result = env.run(&["chips", "-t", "tags.json", "-s", "sel.json", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let json = result.json();

    assert_eq!(json["event"], "chips");
    let chips = json["chips"].as_array().unwrap();
    assert_eq!(chips.len(), 1);
    assert_eq!(chips[0]["id"], "corporate-admin");
}

#[test]
fn contract_check_json_shape() {
    let env = TestEnv::with_tags(ORPHAN_TAGS);

    let result = env.run(&["check", "-t", "tags.json", "--json"]);
    assert!(result.success, "{}", result.combined_output());
    let json = result.json();

    assert_eq!(json["event"], "check");
    assert_eq!(json["ok"], true);
    assert_eq!(json["total"], 2);
    assert_eq!(json["orphanPolicy"], "promote");
    assert_eq!(json["dimensions"].as_array().unwrap().len(), 5);
    assert_eq!(json["promotedOrphans"][0]["id"], "lost");
    assert_eq!(json["promotedOrphans"][0]["missingParentId"], "ghost");
}

#[test]
fn contract_errors_are_json_in_json_mode() {
    let env = TestEnv::with_tags(JOB_CATEGORY_TAGS);

    let result = env.run(&["toggle", "-t", "tags.json", "nope", "--json"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    let json = result.json();

    assert_eq!(json["event"], "error");
    assert_eq!(json["ok"], false);
    assert!(json["message"].as_str().unwrap().contains("unknown tag 'nope'"));
}
