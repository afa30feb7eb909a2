//! Integration tests for project layout probing

use rebelgen::capability::{CapabilityProbe, LayoutProbe};
use rebelgen::error::ProbeError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_gradle_layout_detected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/main/java")).unwrap();

    let capabilities = LayoutProbe::new(root).probe().unwrap();

    assert!(capabilities.has_compilation_support);
    assert!(!capabilities.has_war_packaging);
    assert!(capabilities
        .default_classes_dir
        .ends_with("build/classes/java/main"));
    assert!(capabilities
        .default_resources_dir
        .ends_with("build/resources/main"));
}

#[test]
fn test_maven_layout_detected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/main/java")).unwrap();
    fs::write(root.join("pom.xml"), "<project/>").unwrap();

    let capabilities = LayoutProbe::new(root).probe().unwrap();

    assert!(capabilities.default_classes_dir.ends_with("target/classes"));
    assert_eq!(
        capabilities.default_classes_dir,
        capabilities.default_resources_dir
    );
}

#[test]
fn test_webapp_directory_enables_war_packaging() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/main/kotlin")).unwrap();
    fs::create_dir_all(root.join("src/main/webapp")).unwrap();

    let capabilities = LayoutProbe::new(root).probe().unwrap();

    assert!(capabilities.has_compilation_support);
    assert!(capabilities.has_war_packaging);
    assert!(capabilities
        .default_war_source_dir
        .ends_with("src/main/webapp"));
}

#[test]
fn test_container_plugin_flag_carried_through() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/main/java")).unwrap();

    let capabilities = LayoutProbe::new(root)
        .with_container_plugin(true)
        .probe()
        .unwrap();

    assert!(capabilities.has_container_plugin);
}

#[test]
fn test_probe_reports_absolute_directories() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/main/java")).unwrap();

    let capabilities = LayoutProbe::new(root).probe().unwrap();

    assert!(capabilities.base_dir.is_absolute());
    assert!(capabilities.default_classes_dir.is_absolute());
    assert!(capabilities.default_resources_dir.is_absolute());
    assert!(capabilities.default_war_source_dir.is_absolute());
}

#[test]
fn test_missing_base_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("gone");

    let err = LayoutProbe::new(&missing).probe().unwrap_err();
    assert!(matches!(err, ProbeError::BaseDirNotFound(_)));
}
