//! Integration tests for the full generation pass: probe, resolve, render,
//! write

use rebelgen::capability::{CapabilityProbe, LayoutProbe};
use rebelgen::config::{ConfigLoader, RebelConfig};
use rebelgen::generate::{GenerateOutcome, Generator};
use rebelgen::model::Packaging;
use std::fs;
use tempfile::TempDir;

/// Lay out a minimal Gradle-style project with compilable sources
fn scaffold_jar_project(root: &std::path::Path) {
    fs::create_dir_all(root.join("src/main/java")).unwrap();
}

/// Lay out a war project: compilable sources plus a webapp directory
fn scaffold_war_project(root: &std::path::Path) {
    fs::create_dir_all(root.join("src/main/java")).unwrap();
    fs::create_dir_all(root.join("src/main/webapp")).unwrap();
}

#[test]
fn test_jar_project_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    scaffold_jar_project(root);

    let capabilities = LayoutProbe::new(root).probe().unwrap();
    let generator = Generator::new(RebelConfig::default(), capabilities);
    let output = root.join("rebel.xml");

    let outcome = generator.generate_to(&output).unwrap();
    assert_eq!(outcome, GenerateOutcome::Written(output.clone()));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("xmlns=\"http://www.zeroturnaround.com\""));
    assert!(text.contains("build/classes/java/main"));
    assert!(text.contains("build/resources/main"));
    assert!(!text.contains("<war"));
    assert!(!text.contains("<web>"));
}

#[test]
fn test_war_project_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    scaffold_war_project(root);

    let capabilities = LayoutProbe::new(root).probe().unwrap();
    let model = Generator::new(RebelConfig::default(), capabilities.clone())
        .model()
        .unwrap();
    assert_eq!(model.packaging, Packaging::War);

    let generator = Generator::new(RebelConfig::default(), capabilities);
    let output = root.join("rebel.xml");
    generator.generate_to(&output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("<war dir="));
    assert!(text.contains("src/main/webapp"));
}

#[test]
fn test_rerun_leaves_descriptor_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    scaffold_jar_project(root);

    let capabilities = LayoutProbe::new(root).probe().unwrap();
    let generator = Generator::new(RebelConfig::default(), capabilities);
    let output = root.join("rebel.xml");

    assert_eq!(
        generator.generate_to(&output).unwrap(),
        GenerateOutcome::Written(output.clone())
    );
    let first_text = fs::read_to_string(&output).unwrap();

    assert_eq!(
        generator.generate_to(&output).unwrap(),
        GenerateOutcome::Unchanged
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), first_text);
}

#[test]
fn test_always_generate_rewrites_every_run() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    scaffold_jar_project(root);

    let capabilities = LayoutProbe::new(root).probe().unwrap();
    let config = RebelConfig {
        always_generate: true,
        ..RebelConfig::default()
    };
    let generator = Generator::new(config, capabilities);
    let output = root.join("rebel.xml");

    generator.generate_to(&output).unwrap();
    assert_eq!(
        generator.generate_to(&output).unwrap(),
        GenerateOutcome::Written(output)
    );
}

#[test]
fn test_workspace_config_shapes_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    scaffold_war_project(&root);

    fs::write(
        root.join("rebel.toml"),
        r#"
[war]
path = "/opt/deploy/exploded"

[[web.resources]]
target = "/"
directory = "src/main/webapp"
includes = ["*.xml"]
excludes = ["*.java"]

[[web.resources]]
target = "/WEB-INF/"
directory = "src/extra/webinf"
"#,
    )
    .unwrap();

    let config = crate::integration::test_utils::with_isolated_env(&temp_dir, || {
        ConfigLoader::load(&root).unwrap()
    });
    let capabilities = LayoutProbe::new(&root).probe().unwrap();
    let generator = Generator::new(config, capabilities);
    let output = root.join("rebel.xml");
    generator.generate_to(&output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("<war dir=\"/opt/deploy/exploded\"/>"));
    assert!(text.contains("<include name=\"*.xml\"/>"));
    assert!(text.contains("<exclude name=\"*.java\"/>"));

    // Declaration order survives into the document
    let first = text.find("target=\"/\"").unwrap();
    let second = text.find("target=\"/WEB-INF\"").unwrap();
    assert!(first < second);
}

#[test]
fn test_probe_failure_surfaces_before_any_write() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no-such-project");

    assert!(LayoutProbe::new(&missing).probe().is_err());
}

#[test]
fn test_project_without_sources_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    // Directory exists but holds nothing compilable
    fs::create_dir_all(root.join("docs")).unwrap();

    let capabilities = LayoutProbe::new(root).probe().unwrap();
    let generator = Generator::new(RebelConfig::default(), capabilities);
    let output = root.join("rebel.xml");

    assert!(generator.generate_to(&output).is_err());
    assert!(!output.exists());
}
