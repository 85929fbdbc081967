use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_server_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pagesplice"))
        .current_dir(dir)
        .env("PORT", "0")
        .env_remove("SERVER_CONTENT__DIR")
        .output()
        .expect("failed to launch server binary")
}

#[test]
fn missing_transclusion_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("static");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("index.html"), "<h1>hi</h1>\n!missing-partial.html\n").unwrap();

    let output = run_server_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Startup failed"), "stderr: {stderr}");
    assert!(stderr.contains("missing-partial.html"), "stderr: {stderr}");
}

#[test]
fn missing_content_directory_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_server_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("content directory static"), "stderr: {stderr}");
}

#[test]
fn transclusion_cycle_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let content = dir.path().join("static");
    fs::create_dir(&content).unwrap();
    fs::write(content.join("a.html"), "!b.html\n").unwrap();
    fs::write(content.join("b.html"), "!a.html\n").unwrap();

    let output = run_server_in(dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("transclusion cycle"), "stderr: {stderr}");
}
