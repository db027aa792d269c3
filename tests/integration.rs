use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_docbind")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Run in a scratch directory and return (bindings, tests).
fn generate(input: &str) -> (String, String) {
    let dir = TempDir::new().unwrap();
    cmd().current_dir(dir.path()).arg(input).assert().success();
    read_outputs(dir.path())
}

fn read_outputs(dir: &Path) -> (String, String) {
    (
        fs::read_to_string(dir.join("wrapping.txt")).unwrap(),
        fs::read_to_string(dir.join("tests.txt")).unwrap(),
    )
}

// -- minimal class --

#[test]
fn minimal_class_bindings() {
    let (bindings, _) = generate(&fixture_path("minimal"));
    let expected = fs::read_to_string(fixture_path("minimal.wrapping.txt")).unwrap();
    assert_eq!(bindings, expected);
}

#[test]
fn minimal_class_tests() {
    let (_, tests) = generate(&fixture_path("minimal"));
    let expected = fs::read_to_string(fixture_path("minimal.tests.txt")).unwrap();
    assert_eq!(tests, expected);
}

// -- libcellml records --

#[test]
fn classes_are_emitted_in_file_name_order() {
    let (bindings, tests) = generate(&fixture_path("libcellml"));
    let model = bindings.find("class_<libcellml::Model>(\"Model\")").unwrap();
    let units = bindings.find("class_<libcellml::Units>(\"Units\")").unwrap();
    assert!(model < units);

    assert_eq!(tests.matches("describe(").count(), 2);
    assert!(tests.find("describe(\"Model tests\"").unwrap() < tests.find("describe(\"Units tests\"").unwrap());
}

#[test]
fn non_class_records_are_ignored() {
    let (bindings, tests) = generate(&fixture_path("libcellml"));
    assert!(!bindings.contains("Detail"));
    assert!(!bindings.contains("EMSCRIPTEN_BINDINGS(libcellml)"));
    assert!(!tests.contains("Detail"));
}

#[test]
fn overloads_are_bound_individually_and_qualified() {
    let (bindings, _) = generate(&fixture_path("libcellml"));
    for line in [
        ".function(\"componentByIndex\", select_overload<libcellml::ComponentPtr(size_t) const>(&libcellml::Model::component))",
        ".function(\"componentByName\", select_overload<libcellml::ComponentPtr(const std::string &, bool) const>(&libcellml::Model::component))",
        ".function(\"hasUnitsByUnits\", select_overload<bool(const libcellml::UnitsPtr &) const>(&libcellml::Model::hasUnits))",
        ".function(\"addUnitByReference\", select_overload<void(const std::string &, libcellml::Units::Prefix)>(&libcellml::Units::addUnit))",
        ".function(\"addUnitByStandardUnit\", select_overload<void(libcellml::Units::StandardUnit)>(&libcellml::Units::addUnit))",
    ] {
        assert!(bindings.contains(line), "missing {}", line);
    }
}

#[test]
fn enum_registrations_keep_js_names() {
    let (bindings, _) = generate(&fixture_path("libcellml"));
    assert!(bindings.contains("    enum_<libcellml::Units::Prefix>(\"Prefix\")\n"));
    assert!(bindings.contains("        .value(\"ATTO\", libcellml::Units::Prefix::ATTO)\n"));
    assert!(bindings.contains("    enum_<libcellml::Units::StandardUnit>(\"StandardUnit\")\n"));
}

#[test]
fn special_members_are_reported_not_bound() {
    let (bindings, tests) = generate(&fixture_path("libcellml"));
    assert!(bindings.contains(
        "// Warnings: Model\n//  - Function not marked with Doxygen directive @private: libcellml::Model::~Model\n//  - Non standard brief description!!! void libcellml::Model::clean\n"
    ));
    assert!(bindings.contains(
        "// Warnings: Units\n//  - Function not marked with Doxygen directive @private: libcellml::Units::Units\n"
    ));
    assert!(!bindings.contains(".function(\"~Model\""));
    assert!(!bindings.contains(".function(\"clean\""));
    assert!(!tests.contains("clean"));
}

#[test]
fn accessor_pair_gets_single_round_trip() {
    let (_, tests) = generate(&fixture_path("libcellml"));
    assert_eq!(tests.matches("Checking Model.name.").count(), 1);
    assert!(!tests.contains("Checking Model.setName."));
    assert!(tests.contains("    x.setName(\"something\")\n    expect(x.name()).toBe(\"something\")\n"));
}

#[test]
fn model_tests_cover_every_member() {
    let (_, tests) = generate(&fixture_path("libcellml"));
    let model = &tests[tests.find("describe(\"Model tests\"").unwrap()..tests.find("describe(\"Units tests\"").unwrap()];
    // create, name/setName, 2x component, 2x hasUnits
    assert_eq!(model.matches("  test(").count(), 6);
    assert!(model.contains("    expect(x.create()).toBe(null)\n"));
    assert!(model.contains("    expect(x.hasUnitsByName()).toBe(false)\n"));
}

#[test]
fn repeated_runs_are_identical() {
    let first = generate(&fixture_path("libcellml"));
    let second = generate(&fixture_path("libcellml"));
    assert_eq!(first, second);
}

// -- CLI surface --

#[test]
fn custom_output_paths() {
    let dir = TempDir::new().unwrap();
    let bindings = dir.path().join("bindings.cpp");
    let tests = dir.path().join("model.test.js");

    cmd()
        .arg(fixture_path("minimal"))
        .args(["-b", bindings.to_str().unwrap()])
        .args(["-t", tests.to_str().unwrap()])
        .assert()
        .success();

    assert!(fs::read_to_string(&bindings).unwrap().contains("EMSCRIPTEN_BINDINGS(libcellml_minimal)"));
    assert!(fs::read_to_string(&tests).unwrap().contains("describe(\"Minimal tests\""));
}

#[test]
fn outputs_are_truncated_each_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("wrapping.txt"), "stale").unwrap();
    fs::write(dir.path().join("tests.txt"), "stale").unwrap();

    cmd().current_dir(dir.path()).arg(fixture_path("minimal")).assert().success();

    let (bindings, tests) = read_outputs(dir.path());
    assert!(!bindings.contains("stale"));
    assert!(!tests.contains("stale"));
}

#[test]
fn missing_input_directory_does_nothing() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg(dir.path().join("does-not-exist"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!dir.path().join("wrapping.txt").exists());
    assert!(!dir.path().join("tests.txt").exists());
}

#[test]
fn input_file_instead_of_directory_does_nothing() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg(fixture_path("minimal.wrapping.txt"))
        .assert()
        .success();
    assert!(!dir.path().join("wrapping.txt").exists());
}

#[test]
fn malformed_record_aborts() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg(fixture_path("broken"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing <definition>"));
}

#[test]
fn input_directory_is_required() {
    cmd().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn namespace_option_changes_js_module() {
    let dir = TempDir::new().unwrap();
    cmd()
        .current_dir(dir.path())
        .arg(fixture_path("minimal"))
        .args(["--namespace", "cellml"])
        .assert()
        .success();
    let (_, tests) = read_outputs(dir.path());
    assert!(tests.contains("    const x = new cellml.Minimal()\n"));
}
