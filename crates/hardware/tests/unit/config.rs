//! # Configuration Tests
//!
//! Tests for the `--cache` argument form, JSON configuration, and validation.

use std::io::Write;

use e20sim_core::common::{ConfigError, MEM_SIZE};
use e20sim_core::config::*;
use rstest::rstest;

#[test]
fn test_config_default_has_no_cache() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert!(config.cache.is_empty());
    assert!(config.validate().is_ok());
}

#[rstest]
#[case(8, 2, 2, 2)]
#[case(16, 4, 2, 2)]
#[case(2, 1, 1, 2)]
#[case(1, 1, 1, 1)]
#[case(64, 1, 4, 16)]
fn test_rows_from_geometry(
    #[case] size: usize,
    #[case] assoc: usize,
    #[case] bs: usize,
    #[case] rows: usize,
) {
    assert_eq!(CacheConfig::new(size, assoc, bs).rows(), rows);
}

#[test]
fn test_from_arg_single_level() {
    let cache = CacheHierarchyConfig::from_arg("8,2,2").expect("valid");
    assert_eq!(cache.l1, Some(CacheConfig::new(8, 2, 2)));
    assert_eq!(cache.l2, None);
    assert_eq!(cache.levels().len(), 1);
}

#[test]
fn test_from_arg_two_levels() {
    let cache = CacheHierarchyConfig::from_arg("8,2,2,16,4,2").expect("valid");
    assert_eq!(cache.l1, Some(CacheConfig::new(8, 2, 2)));
    assert_eq!(cache.l2, Some(CacheConfig::new(16, 4, 2)));
}

#[test]
fn test_from_arg_tolerates_spaces() {
    let cache = CacheHierarchyConfig::from_arg(" 4, 1 ,2").expect("valid");
    assert_eq!(cache.l1, Some(CacheConfig::new(4, 1, 2)));
}

#[rstest]
#[case("8", 1)]
#[case("8,2", 2)]
#[case("8,2,2,16", 4)]
#[case("1,1,1,1,1", 5)]
#[case("1,1,1,1,1,1,1", 7)]
fn test_from_arg_wrong_field_count(#[case] arg: &str, #[case] count: usize) {
    match CacheHierarchyConfig::from_arg(arg) {
        Err(ConfigError::WrongFieldCount(n)) => assert_eq!(n, count),
        other => panic!("expected WrongFieldCount, got {other:?}"),
    }
}

#[rstest]
#[case("a,2,2")]
#[case("8,-1,2")]
#[case("8,,2")]
fn test_from_arg_invalid_number(#[case] arg: &str) {
    assert!(matches!(
        CacheHierarchyConfig::from_arg(arg),
        Err(ConfigError::InvalidNumber(_))
    ));
}

#[test]
fn test_validate_rejects_zero_parameter() {
    let cache = CacheHierarchyConfig::from_arg("8,0,2").expect("parses");
    match cache.validate() {
        Err(ConfigError::ZeroParameter { level, field }) => {
            assert_eq!(level, "L1");
            assert_eq!(field, "associativity");
        }
        other => panic!("expected ZeroParameter, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_geometry_without_rows() {
    let cache = CacheHierarchyConfig::from_arg("8,2,2,2,2,2").expect("parses");
    assert!(matches!(
        cache.validate(),
        Err(ConfigError::NoRows { level: "L2", .. })
    ));
}

#[rstest]
#[case("1099511627776,1099511627776,1", "associativity")]
#[case("1099511627776,1,1", "rows")]
#[case("16384,1,16384", "blocksize")]
fn test_validate_rejects_geometry_beyond_memory(#[case] arg: &str, #[case] expected: &str) {
    let cache = CacheHierarchyConfig::from_arg(arg).expect("parses");
    match cache.validate() {
        Err(ConfigError::TooLarge { level, field, limit, .. }) => {
            assert_eq!(level, "L1");
            assert_eq!(field, expected);
            assert_eq!(limit, MEM_SIZE);
        }
        other => panic!("expected TooLarge, got {other:?}"),
    }
}

#[test]
fn test_validate_accepts_cache_as_large_as_memory() {
    let cache = CacheHierarchyConfig::from_arg("8192,8192,1,8192,1,1").expect("parses");
    assert!(cache.validate().is_ok());
}

#[test]
fn test_validate_rejects_l2_without_l1() {
    let cache = CacheHierarchyConfig {
        l1: None,
        l2: Some(CacheConfig::new(8, 1, 1)),
    };
    assert!(matches!(cache.validate(), Err(ConfigError::L2WithoutL1)));
}

#[test]
fn test_from_json_partial_document() {
    let config = Config::from_json(r#"{ "general": { "trace_instructions": true } }"#)
        .expect("valid json");
    assert!(config.general.trace_instructions);
    assert!(config.cache.is_empty());
}

#[test]
fn test_from_json_two_levels() {
    let config = Config::from_json(
        r#"{ "cache": {
            "l1": { "size": 4, "associativity": 1, "blocksize": 1 },
            "l2": { "size": 16, "associativity": 2, "blocksize": 2 } } }"#,
    )
    .expect("valid json");
    assert_eq!(config.cache.l2.map(|c| c.rows()), Some(4));
}

#[test]
fn test_from_json_validates() {
    let err = Config::from_json(r#"{ "cache": { "l2": { "size": 4, "associativity": 1, "blocksize": 1 } } }"#)
        .expect_err("l2 alone is invalid");
    assert!(matches!(err, ConfigError::L2WithoutL1));
}

#[test]
fn test_from_json_malformed() {
    assert!(matches!(
        Config::from_json("{ not json"),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_from_file_reads_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{ "cache": {{ "l1": {{ "size": 8, "associativity": 2, "blocksize": 2 }} }} }}"#
    )
    .expect("write");
    let config = Config::from_file(file.path()).expect("valid file");
    assert_eq!(config.cache.l1, Some(CacheConfig::new(8, 2, 2)));
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    assert!(matches!(
        Config::from_file(&path),
        Err(ConfigError::Io { .. })
    ));
}
