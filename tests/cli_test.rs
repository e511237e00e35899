//! CLI integration tests for the wc-schema binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("wc-schema"))
}

// Helper to create a temp body file
fn write_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod resolve_command {
    use super::*;

    #[test]
    fn basic_resolve() {
        cmd()
            .args(["resolve", "/wp-json/wc/v3/orders/727"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ShopOrder (single)"));
    }

    #[test]
    fn resolve_collection() {
        cmd()
            .args(["resolve", "https://shop.example.com/wp-json/wc/v3/orders"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ShopOrder (collection)"));
    }

    #[test]
    fn resolve_json_output() {
        cmd()
            .args(["resolve", "/wp-json/wc/v3/data/currencies/current", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""schema":"DataCurrency""#))
            .stdout(predicate::str::contains(r#""kind":"single""#));
    }

    #[test]
    fn unknown_endpoint_exits_2() {
        cmd()
            .args(["resolve", "/wp-json/wc/v3/not-a-thing"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("no known endpoint"));
    }

    #[test]
    fn malformed_path_exits_2() {
        cmd()
            .args(["resolve", "orders/727"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("malformed path"));
    }
}

mod decode_command {
    use super::*;

    #[test]
    fn decode_collection_body() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(
            &dir,
            "orders.json",
            r#"[{"id": 727, "status": "processing"}, {"id": 728, "status": "completed"}]"#,
        );

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Valid: 2 ShopOrder record(s) (collection)"));
    }

    #[test]
    fn decode_single_body_json_output() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(&dir, "order.json", r#"{"id": 727, "status": "processing"}"#);

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders/727",
                "--json",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""valid":true"#))
            .stdout(predicate::str::contains(r#""count":1"#));
    }

    #[test]
    fn shape_mismatch_exits_1() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(&dir, "order.json", r#"[{"id": 727}]"#);

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders/727",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("expected a JSON object"));
    }

    #[test]
    fn invalid_enum_value_exits_1() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(&dir, "order.json", r#"{"id": 727, "status": "shipped"}"#);

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders/727",
            ])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid ShopOrder"));
    }

    #[test]
    fn missing_body_file_exits_3() {
        cmd()
            .args([
                "decode",
                "/no/such/file.json",
                "--path",
                "/wp-json/wc/v3/orders",
            ])
            .assert()
            .failure()
            .code(3)
            .stderr(predicate::str::contains("file not found"));
    }

    #[test]
    fn invalid_json_body_exits_2() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(&dir, "broken.json", "{not json");

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders",
            ])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("invalid JSON"));
    }

    #[test]
    fn unresolved_path_fails_before_reading_the_body() {
        cmd()
            .args([
                "decode",
                "/no/such/file.json",
                "--path",
                "/wp-json/wc/v3/not-a-thing",
            ])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("no known endpoint"));
    }

    #[test]
    fn json_error_output() {
        let dir = TempDir::new().unwrap();
        let body = write_temp_file(&dir, "order.json", r#"[{"id": 727}]"#);

        cmd()
            .args([
                "decode",
                body.to_str().unwrap(),
                "--path",
                "/wp-json/wc/v3/orders/727",
                "--json",
            ])
            .assert()
            .failure()
            .stdout(predicate::str::contains(r#""valid":false"#));
    }
}

mod routes_command {
    use super::*;

    #[test]
    fn lists_every_template() {
        let assert = cmd().arg("routes").assert().success();
        let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

        assert!(output.contains("/orders/{id}"));
        assert!(output.contains("/data/currencies/current"));
        assert_eq!(output.lines().count(), 61);
    }

    #[test]
    fn json_output_parses() {
        let assert = cmd().args(["routes", "--json"]).assert().success();
        let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

        let routes: serde_json::Value = serde_json::from_str(&output).unwrap();
        let routes = routes.as_array().unwrap();
        assert_eq!(routes.len(), 61);
        assert!(routes
            .iter()
            .any(|r| r["template"] == "/orders/{order_id}/notes/{id}"));
    }
}
