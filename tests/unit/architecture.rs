//! Source-level checks on the layering rules.
//!
//! Dependencies must point inward: `commands`/`output` → `infra` →
//! `application` → `domain`. Each check scans a layer's sources for imports
//! it must not have, reporting every offending line.

use std::path::{Path, PathBuf};

fn layer(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(name)
}

fn rust_sources(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_sources(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// Lines of a source file with comment lines removed, keyed by their
/// original 1-based line number so reports point at the real location.
fn source_lines(file: &Path) -> Vec<(usize, String)> {
    std::fs::read_to_string(file)
        .unwrap_or_default()
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let t = line.trim_start();
            !t.starts_with("//") && !t.starts_with("/*") && !t.starts_with('*')
        })
        .map(|(idx, line)| (idx + 1, line.to_owned()))
        .collect()
}

fn violations(dir: &Path, forbidden: &[&str]) -> Vec<String> {
    let mut files = Vec::new();
    rust_sources(dir, &mut files);

    let mut found = Vec::new();
    for file in files {
        let shown = file
            .strip_prefix(env!("CARGO_MANIFEST_DIR"))
            .unwrap_or(&file)
            .display()
            .to_string();
        for (number, line) in source_lines(&file) {
            for needle in forbidden {
                if line.contains(needle) {
                    found.push(format!("{shown}:{number} uses `{needle}`: {}", line.trim()));
                }
            }
        }
    }
    found
}

#[test]
fn domain_stays_pure() {
    let found = violations(
        &layer("domain"),
        &[
            "crate::application",
            "crate::infra",
            "crate::commands",
            "crate::output",
            "tokio::",
            "std::fs",
            "std::process",
            "std::net",
            "reqwest",
        ],
    );
    assert!(
        found.is_empty(),
        "domain/ performs no I/O and sees no other layer:\n{}",
        found.join("\n")
    );
}

#[test]
fn application_reaches_io_only_through_ports() {
    let found = violations(
        &layer("application"),
        &[
            "crate::infra",
            "crate::commands",
            "crate::output",
            "std::process",
            "reqwest",
        ],
    );
    assert!(
        found.is_empty(),
        "application/ talks to the outside world via port traits only:\n{}",
        found.join("\n")
    );
}

#[test]
fn infra_never_imports_presentation() {
    let found = violations(&layer("infra"), &["crate::commands", "crate::output"]);
    assert!(
        found.is_empty(),
        "infra/ sits below commands/ and output/:\n{}",
        found.join("\n")
    );
}

#[test]
fn infra_logs_instead_of_printing() {
    let found = violations(&layer("infra"), &["println!", "eprintln!"]);
    assert!(
        found.is_empty(),
        "infra/ narrates through tracing, not the terminal:\n{}",
        found.join("\n")
    );
}

#[test]
fn services_narrate_through_the_reporter_port() {
    let found = violations(
        &layer("application"),
        &["println!", "eprintln!", "indicatif", "owo_colors"],
    );
    assert!(
        found.is_empty(),
        "application/ emits progress via ProgressReporter, never directly:\n{}",
        found.join("\n")
    );
}
