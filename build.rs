use std::env;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let hash = command_stdout("git", &["rev-parse", "--short", "HEAD"])
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());
    emit("HASH", &hash);

    let status = match command_stdout("git", &["status", "--porcelain"]) {
        Some(output) if output.is_empty() => "clean",
        Some(_) => "dirty",
        None => UNKNOWN,
    };
    emit("STATUS", status);

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    emit("TIMESTAMP", &timestamp);

    emit("TARGET", &env::var("TARGET").unwrap_or_else(|_| UNKNOWN.to_string()));
    emit("PROFILE", &env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string()));

    let rustc = command_stdout("rustc", &["--version"]).unwrap_or_else(|| UNKNOWN.to_string());
    emit("RUSTC", &rustc);
}

fn emit(key: &str, value: &str) {
    println!("cargo:rustc-env=MFUKO_BUILD_{key}={value}");
}

/// Runs `program` and returns its trimmed stdout when it exits successfully.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
