//! JSON document contracts

use crate::common::*;

fn node<'a>(doc: &'a serde_json::Value, path: &str) -> &'a serde_json::Value {
    doc["nodes"]
        .as_array()
        .and_then(|nodes| nodes.iter().find(|n| n["path"] == path))
        .unwrap_or_else(|| panic!("node {path} missing from {doc}"))
}

#[test]
fn contract_json_document_shape() {
    let env = reference_env();

    let result = env.compare(&["--json"]);
    assert!(result.success, "{}", result.combined_output());

    let doc: serde_json::Value = serde_json::from_str(&result.stdout).expect("valid JSON");
    assert_eq!(doc["mode"], "content");
    assert_eq!(doc["summary"]["identical"], 2);
    assert_eq!(doc["summary"]["modified"], 1);
    assert_eq!(doc["summary"]["new"], 1);
    assert_eq!(doc["summary"]["deleted"], 1);
    assert_eq!(doc["nodes"].as_array().map(Vec::len), Some(5));
}

#[test]
fn contract_json_node_statuses_and_digests() {
    let env = reference_env();

    let result = env.compare(&["--json"]);
    let doc: serde_json::Value = serde_json::from_str(&result.stdout).expect("valid JSON");

    assert_eq!(node(&doc, "dir")["is_dir"], true);
    assert_eq!(node(&doc, "dir/c.txt")["status"], "deleted");
    assert!(node(&doc, "dir/c.txt")["target_digest"].is_null());
    assert_eq!(node(&doc, "d.txt")["status"], "new");
    assert!(node(&doc, "d.txt")["source_digest"].is_null());

    let b = node(&doc, "b.txt");
    assert_eq!(b["status"], "modified");
    assert_ne!(b["source_digest"], b["target_digest"]);

    let a = node(&doc, "a.txt");
    assert_eq!(a["status"], "identical");
    assert_eq!(a["source_digest"], a["target_digest"]);
    assert!(a["source_digest"]
        .as_str()
        .is_some_and(|d| d.starts_with("sha256:")));
}

#[test]
fn contract_json_lists_collapsed_directories_fully() {
    let env = reference_env();
    let config = env.write_config("[ui]\nstart_expanded = false\n");
    let config = config.to_string_lossy().to_string();

    let result = env.compare(&["--json", "--config", &config]);
    let doc: serde_json::Value = serde_json::from_str(&result.stdout).expect("valid JSON");

    assert_eq!(node(&doc, "dir/c.txt")["status"], "deleted");
}
