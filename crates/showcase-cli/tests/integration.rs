#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const OPERATOR: &str = "42";

fn showcase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("showcase").unwrap();
    cmd.current_dir(dir.path())
        .env("SHOWCASE_DATA_DIR", dir.path())
        .env("SHOWCASE_OPERATOR_ID", OPERATOR)
        .env_remove("SHOWCASE_USER_ID")
        .env_remove("SHOWCASE_USER_NAME")
        .env_remove("SHOWCASE_CONFIG");
    cmd
}

fn add_widget(dir: &TempDir) {
    showcase(dir)
        .args([
            "product", "add", "Widget", "--link", "http://a", "--video", "http://b",
            "--user-id", OPERATOR, "--user-name", "qustreso",
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// showcase init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_empty_documents() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("products.json"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join("products.json")).unwrap(),
        "[]"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("past_work.json")).unwrap(),
        "[]"
    );
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    showcase(&dir).arg("init").assert().success();
    add_widget(&dir);
    showcase(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("exists"));

    let content = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    assert!(content.contains("Widget"));
}

// ---------------------------------------------------------------------------
// showcase product
// ---------------------------------------------------------------------------

#[test]
fn product_add_and_list() {
    let dir = TempDir::new().unwrap();
    add_widget(&dir);

    showcase(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 product(s):"))
        .stdout(predicate::str::contains("1. Widget"))
        .stdout(predicate::str::contains("Added by: qustreso"));
}

#[test]
fn empty_list_says_so() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found in the shop."));
    showcase(&dir)
        .args(["past-work", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No past work projects found."));
}

#[test]
fn non_operator_is_denied() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args([
            "product", "add", "Widget", "--link", "http://a", "--video", "http://b",
            "--user-id", "7",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You don't have permission"));

    let content = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    assert_eq!(content, "[]");
}

#[test]
fn add_requires_identity() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["product", "add", "Widget", "--link", "http://a", "--video", "http://b"])
        .assert()
        .failure();
}

#[test]
fn duplicate_product_fails() {
    let dir = TempDir::new().unwrap();
    add_widget(&dir);
    showcase(&dir)
        .args([
            "product", "add", "widget", "--link", "http://c", "--video", "http://d",
            "--user-id", OPERATOR,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A product with the name 'widget' already exists!",
        ));
}

#[test]
fn product_remove_any_casing() {
    let dir = TempDir::new().unwrap();
    add_widget(&dir);

    showcase(&dir)
        .args(["product", "remove", "WIDGET", "--user-id", OPERATOR])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Removed Successfully"));

    showcase(&dir)
        .args(["product", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found"));
}

#[test]
fn remove_missing_product_fails() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args(["product", "remove", "Gadget", "--user-id", OPERATOR])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product 'Gadget' not found!"));
}

// ---------------------------------------------------------------------------
// showcase past-work
// ---------------------------------------------------------------------------

#[test]
fn past_work_round_trip() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .args([
            "past-work", "add", "Launch Reel", "--video", "http://v", "--user-id", OPERATOR,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been added to past work."));

    showcase(&dir)
        .args(["past-work", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Launch Reel"));

    showcase(&dir)
        .args(["past-work", "remove", "launch reel", "--user-id", OPERATOR])
        .assert()
        .success();

    showcase(&dir)
        .args(["past-work", "remove", "launch reel", "--user-id", OPERATOR])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Past work project 'launch reel' not found!"));
}

#[test]
fn user_name_falls_back_to_login_then_operator() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .env("USER", "mira")
        .args([
            "past-work", "add", "Reel", "--video", "http://v", "--user-id", OPERATOR,
        ])
        .assert()
        .success();
    showcase(&dir)
        .env_remove("USER")
        .args([
            "past-work", "add", "Trailer", "--video", "http://t", "--user-id", OPERATOR,
        ])
        .assert()
        .success();

    showcase(&dir)
        .args(["past-work", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added by: mira"))
        .stdout(predicate::str::contains("Added by: operator"));
}

// ---------------------------------------------------------------------------
// --json / config
// ---------------------------------------------------------------------------

#[test]
fn json_output_is_tagged_payload() {
    let dir = TempDir::new().unwrap();
    add_widget(&dir);

    let output = showcase(&dir)
        .args(["--json", "product", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "success");
    assert_eq!(json["embed"]["fields"][0]["name"], "1. Widget");
}

#[test]
fn operator_can_come_from_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("showcase.yaml"), "operator_id: 99\n").unwrap();

    let mut cmd = Command::cargo_bin("showcase").unwrap();
    cmd.current_dir(dir.path())
        .env("SHOWCASE_DATA_DIR", dir.path())
        .env_remove("SHOWCASE_OPERATOR_ID")
        .env_remove("SHOWCASE_USER_ID")
        .env_remove("SHOWCASE_CONFIG")
        .args([
            "past-work", "add", "Reel", "--video", "http://v", "--user-id", "99",
        ])
        .assert()
        .success();
}

#[test]
fn config_shows_effective_settings() {
    let dir = TempDir::new().unwrap();
    showcase(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("operator_id: 42"))
        .stdout(predicate::str::contains("read_policy: lenient"));
}
