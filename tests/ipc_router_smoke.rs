use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_gradingd");
    let mut child = Command::new(exe)
        .env_remove("GRADINGD_WORKSPACE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn gradingd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn read_line_json(reader: &mut BufReader<ChildStdout>) -> serde_json::Value {
    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    serde_json::from_str(line.trim()).expect("parse response json")
}

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let workspace = temp_dir("gradingd-router-smoke");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    writeln!(stdin, "{{not json").expect("write garbage");
    stdin.flush().expect("flush garbage");
    let bad = read_line_json(&mut reader);
    assert_eq!(bad.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        bad.pointer("/error/code").and_then(|v| v.as_str()),
        Some("bad_json")
    );

    let health = request(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(health.get("ok").and_then(|v| v.as_bool()), Some(true));
    assert!(health
        .pointer("/result/workspacePath")
        .map(|v| v.is_null())
        .unwrap_or(false));

    let unknown = request(&mut stdin, &mut reader, "2", "grid.bulkUpdate", json!({}));
    assert_eq!(
        unknown.pointer("/error/code").and_then(|v| v.as_str()),
        Some("not_implemented")
    );

    let no_table = request(&mut stdin, &mut reader, "3", "table.get", json!({}));
    assert_eq!(
        no_table.pointer("/error/code").and_then(|v| v.as_str()),
        Some("no_table")
    );

    let columns = request(&mut stdin, &mut reader, "4", "table.columns", json!({}));
    assert_eq!(
        columns
            .pointer("/result/columns")
            .and_then(|v| v.as_array())
            .map(|a| a.len()),
        Some(5)
    );

    let no_path = request(&mut stdin, &mut reader, "5", "workspace.select", json!({}));
    assert_eq!(
        no_path.pointer("/error/code").and_then(|v| v.as_str()),
        Some("bad_params")
    );

    let selected = request(
        &mut stdin,
        &mut reader,
        "6",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    assert_eq!(selected.get("ok").and_then(|v| v.as_bool()), Some(true));

    let _ = request(&mut stdin, &mut reader, "7", "table.open", json!({ "trainingId": "T" }));
    let health = request(&mut stdin, &mut reader, "8", "health", json!({}));
    assert_eq!(
        health.pointer("/result/trainingId").and_then(|v| v.as_str()),
        Some("T")
    );

    let closed = request(&mut stdin, &mut reader, "9", "table.close", json!({}));
    assert_eq!(
        closed.pointer("/result/closed").and_then(|v| v.as_bool()),
        Some(true)
    );
    let closed_again = request(&mut stdin, &mut reader, "10", "table.close", json!({}));
    assert_eq!(
        closed_again.pointer("/result/closed").and_then(|v| v.as_bool()),
        Some(false)
    );

    let _ = child.kill();
}
