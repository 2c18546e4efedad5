use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_http2curl");

/// Run the binary with `args`, feeding `stdin` to it
fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start http2curl");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for http2curl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Write `blocks` to numbered files in a fresh directory under the target tmp dir
fn write_blocks(test: &str, blocks: &[&str]) -> Vec<PathBuf> {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(test);
    std::fs::create_dir_all(&dir).expect("Failed to create block dir");
    blocks
        .iter()
        .enumerate()
        .map(|(i, block)| {
            let path = dir.join(format!("{i}.txt"));
            std::fs::write(&path, block).expect("Failed to write block");
            path
        })
        .collect()
}

#[test]
fn test_curl_from_stdin() {
    let output = run(
        &["curl"],
        "GET /v1/users HTTP/1.1\nHost: api.example.com\nAuthorization: Bearer xyz\n\n",
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "curl -X GET 'https://api.example.com/v1/users' \\\n  -H 'Authorization: Bearer xyz'\n"
    );
}

#[test]
fn test_curl_without_host_fails() {
    let output = run(&["curl"], "GET /v1/users HTTP/1.1\nAccept: */*\n\n");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No usable HTTP request found"));
}

#[test]
fn test_custom_methods() {
    let request = "OPTIONS /cors HTTP/1.1\nHost: example.com\n\n";

    assert!(!run(&["curl"], request).status.success());

    let output = run(&["--methods", "OPTIONS", "curl"], request);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "curl -X OPTIONS 'https://example.com/cors'\n"
    );
}

#[test]
fn test_bodies_from_files() {
    let paths = write_blocks(
        "bodies_from_files",
        &[
            "Request details",
            "POST /orders HTTP/1.1\nHost: shop.example\n\n{\"id\":7}",
            "HTTP/1.1 201 Created\nContent-Type: application/json\n\n{\"ok\":true}",
        ],
    );
    let files: Vec<&str> = paths.iter().map(|p| p.to_str().unwrap()).collect();
    let with_files = |command: &'static str| {
        let mut args = vec![command];
        args.extend(&files);
        args
    };

    let request = run(&with_files("request-body"), "");
    assert!(request.status.success());
    assert_eq!(stdout(&request), "{\"id\":7}\n");

    let response = run(&with_files("response-body"), "");
    assert!(response.status.success());
    assert_eq!(stdout(&response), "{\"ok\":true}\n");
}

#[test]
fn test_empty_request_body_fails() {
    let output = run(&["request-body"], "GET / HTTP/1.1\nHost: example.com");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Request body is empty"));
}

#[test]
fn test_parse_prints_json() {
    let output = run(
        &["parse"],
        "POST /notes HTTP/1.1\nHost: example.com\nno colon here\n\n{\"a\":\"it's\"}",
    );
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{
            "request_line": { "method": "POST", "path": "/notes" },
            "headers": { "Host": "example.com" },
            "body": "{\"a\":\"it's\"}",
            "body_start_line": 4
        }])
    );
}

#[test]
fn test_parse_reports_malformed_request_line_as_null() {
    let output = run(&["parse"], "garbage");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["request_line"], serde_json::Value::Null);
    assert_eq!(parsed[0]["body_start_line"], serde_json::Value::Null);
}
