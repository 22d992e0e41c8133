use std::process::Command;

/// Run a command and return its trimmed stdout, or "unknown" on any failure
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    // Same abbreviated hash the injector writes into pages
    let commit_hash = capture("git", &["log", "--pretty=format:%h", "-1"]);
    let build_timestamp = capture("date", &["+%Y-%m-%d %H:%M:%S"]);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rustc-env=GIT_COMMIT_HASH={}", commit_hash);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", build_timestamp);
}
