use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn x12_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_x12"))
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn demo(name: &str) -> String {
    repo_root()
        .join("demos")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

fn run_x12(args: &[&str]) -> Output {
    Command::new(x12_bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run x12")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success; stdout: {}; stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn lookup_resolves_alias() {
    let output = run_x12(&["lookup", "Acknowledgment Requested", "ta1"]);
    assert_success(&output);
    assert!(stdout(&output).starts_with("1\t"));
}

#[test]
fn lookup_json_output() {
    let output = run_x12(&["lookup", "insurance line code", "dental", "--json"]);
    assert_success(&output);

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout should contain valid JSON");
    assert_eq!(value["code"], "DEN");
    assert_eq!(value["name"], "DENTAL");
}

#[test]
fn lookup_failure_names_set_and_input() {
    let output = run_x12(&["lookup", "Acknowledgment Requested", "invalid"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Acknowledgment Requested"), "stderr: {stderr}");
    assert!(stderr.contains("invalid"), "stderr: {stderr}");
}

#[test]
fn sets_lists_every_code_set() {
    let output = run_x12(&["sets", "--json"]);
    assert_success(&output);

    let names: Vec<String> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(names.len(), 25);
    assert!(names.iter().any(|n| n == "Maintenance Type Code"));
}

#[test]
fn codes_lists_entries_and_aliases() {
    let output = run_x12(&["codes", "maintenance type code"]);
    assert_success(&output);

    let text = stdout(&output);
    assert!(text.contains("021"));
    assert!(text.contains("ADDITION"));
    assert!(text.contains("terminate"));
}

#[test]
fn segment_renders_with_default_delimiters() {
    let output = run_x12(&["segment", "N1", "01", "Test Name", "PB", "123456"]);
    assert_success(&output);
    assert_eq!(stdout(&output), "N1*01*Test Name*PB*123456~\n");

    let output = run_x12(&["segment", "HD", "030", "", "HLT", "", ""]);
    assert_success(&output);
    assert_eq!(stdout(&output), "HD*030**HLT~\n");
}

#[test]
fn segment_uses_configured_delimiters() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("x12.yaml");
    fs::write(&config, "delimiters:\n  element: \"|\"\n  segment_terminator: \"'\"\n").unwrap();

    let output = run_x12(&[
        "--config",
        config.to_string_lossy().as_ref(),
        "segment",
        "REF",
        "0F",
        "SUB001",
    ]);
    assert_success(&output);
    assert_eq!(stdout(&output), "REF|0F|SUB001'\n");
}

#[test]
fn invalid_config_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "colour: neon\n").unwrap();

    let output = run_x12(&["--config", config.to_string_lossy().as_ref(), "sets"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid config"));
}

#[test]
fn encode_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("enrollment.x12");

    let output = run_x12(&[
        "--config",
        &demo("x12.yaml"),
        "encode",
        &demo("enrollment.yaml"),
        "--roster",
        &demo("roster.csv"),
        "--timestamp",
        "2024-01-20T16:05:00",
        "--output",
        out.to_string_lossy().as_ref(),
    ]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());

    let document = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = document.lines().collect();
    assert_eq!(lines.len(), 46);
    assert!(lines[0].starts_with("ISA*00*"));
    assert!(lines[0].contains("*240120*1605*^*00501*000000101*0*T*:~"));
    assert_eq!(lines[1], "GS*BE*123456789*54321*20240120*1605*101*X*005010X220A1~");
    assert_eq!(lines[43], "SE*42*0001~");
    assert_eq!(lines[44], "GE*1*101~");
    assert_eq!(lines[45], "IEA*1*000000101~");
}

#[test]
fn encode_to_stdout_is_deterministic_with_timestamp() {
    let input = demo("enrollment.yaml");
    let args = ["encode", input.as_str(), "--timestamp", "2024-01-20T16:05:00"];
    let first = run_x12(&args);
    let second = run_x12(&args);
    assert_success(&first);
    assert_eq!(stdout(&first), stdout(&second));
    assert!(stdout(&first).contains("~SE*24*0001~GE*1*101~IEA*1*000000101~"));
}

#[test]
fn encode_reports_member_errors() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.yaml");
    let yaml = fs::read_to_string(demo("enrollment.yaml"))
        .unwrap()
        .replace("relationship: spouse", "relationship: neighbour");
    fs::write(&input, yaml).unwrap();

    let output = run_x12(&["encode", input.to_string_lossy().as_ref()]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SUB001 (Mary Doe)"), "stderr: {stderr}");
    assert!(stderr.contains("neighbour"), "stderr: {stderr}");
}
