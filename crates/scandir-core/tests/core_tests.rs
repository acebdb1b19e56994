use scandir_core::{
    ContentHash, DirInfo, FileInfo, HashAlgorithm, OutputConfig, ScanConfig, ScanError,
    extension_of, parse_extensions,
};
use std::fs;
use tempfile::TempDir;

fn sample_entry(dir: &TempDir, name: &str, content: &str) -> FileInfo {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    let metadata = fs::symlink_metadata(&path).unwrap();
    FileInfo::from_metadata(&path, name, &metadata)
}

#[test]
fn test_file_info_wire_format_without_hash() {
    let temp = TempDir::new().unwrap();
    let entry = sample_entry(&temp, "b.json", "");

    let value = serde_json::to_value(&entry).unwrap();
    let object = value.as_object().unwrap();

    for key in ["path", "name", "size", "is_dir", "mode", "mod_time", "ext"] {
        assert!(object.contains_key(key), "missing key {key}");
    }
    assert!(!object.contains_key("hash"));
    assert_eq!(object["size"], 0);
    assert_eq!(object["ext"], ".json");
}

#[test]
fn test_file_info_wire_format_with_hash() {
    let temp = TempDir::new().unwrap();
    let entry = sample_entry(&temp, "a.TXT", "0123456789").with_hash(ContentHash::new([0xcd; 32]));

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["hash"], "cd".repeat(32));
    assert_eq!(value["ext"], ".TXT");
    assert_eq!(value["is_dir"], false);
}

#[test]
fn test_mod_time_is_rfc3339() {
    let temp = TempDir::new().unwrap();
    let entry = sample_entry(&temp, "a.txt", "x");

    let value = serde_json::to_value(&entry).unwrap();
    let raw = value["mod_time"].as_str().unwrap();
    let parsed = chrono_parse(raw);
    assert_eq!(parsed, entry.mod_time);
}

fn chrono_parse(raw: &str) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .unwrap()
        .with_timezone(&chrono::Utc)
}

#[test]
fn test_dir_info_wire_format() {
    let mut stats = DirInfo::new();
    stats.record_file("main.rs");
    stats.record_file("lib.RS");
    stats.record_file("README");
    stats.materialize_keys();

    let value = serde_json::to_value(&stats).unwrap();
    assert_eq!(value["total_files"], 3);
    assert_eq!(value["extensions"][".rs"], 2);
    assert_eq!(value["extensions"][""], 1);
    assert_eq!(value["extension_keys"].as_array().unwrap().len(), 2);
}

#[test]
fn test_dir_info_invariants_hold_after_recording() {
    let mut stats = DirInfo::new();
    for name in ["a.txt", "b.TXT", "c.json", "d", ".env", "e.tar.gz"] {
        stats.record_file(name);
    }
    stats.materialize_keys();

    assert_eq!(stats.total_files, 6);
    assert_eq!(stats.total_files, stats.extensions.values().sum::<u64>());
    assert!(stats.is_consistent());
    assert_eq!(stats.count(".env"), 1);
    assert_eq!(stats.count(".gz"), 1);
}

#[test]
fn test_extension_rules() {
    assert_eq!(extension_of("photo.JPG"), ".JPG");
    assert_eq!(extension_of("abtxt"), "");
    assert_eq!(extension_of("noext"), "");
}

#[test]
fn test_scan_config_new() {
    let config = ScanConfig::new("/data", [".txt", "md"]);
    assert_eq!(config.extensions, vec![".txt".to_string(), "md".to_string()]);
    assert_eq!(config.algorithm, HashAlgorithm::Sha256);
    assert!(config.buffer_size > 0);
}

#[test]
fn test_scan_config_serde_defaults() {
    let config: ScanConfig = serde_json::from_str(r#"{ "root": "/data" }"#).unwrap();
    assert!(config.extensions.is_empty());
    assert_eq!(config.algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.buffer_size, ScanConfig::default().buffer_size);

    let config: ScanConfig =
        serde_json::from_str(r#"{ "root": "/data", "algorithm": "blake3" }"#).unwrap();
    assert_eq!(config.algorithm, HashAlgorithm::Blake3);
}

#[test]
fn test_output_config_with_indent() {
    assert_eq!(OutputConfig::with_indent(1).indent, 1);
}

#[test]
fn test_parse_extensions_from_prompt_input() {
    assert_eq!(
        parse_extensions("txt, .go,RS"),
        vec!["txt".to_string(), ".go".to_string(), "RS".to_string()]
    );
}

#[test]
fn test_scan_error_display_includes_path() {
    let err = ScanError::io(
        "/missing/root",
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    );
    assert!(err.to_string().contains("/missing/root"));
}
