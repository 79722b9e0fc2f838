//! `<stem>.provenance.json` next to every file the CLI writes.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an output file.
pub struct Payload {
    pub command: &'static str,
    pub args: Value,
}

impl Payload {
    pub fn new(command: &'static str, args: Value) -> Self {
        Self { command, args }
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    isohedral_version: &'static str,
    callsite: Callsite,
    command: &'static str,
    args: &'a Value,
    outputs: Vec<String>,
}

/// Record `payload` beside `artifact`; returns the sidecar path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let doc = Sidecar {
        code_rev: code_rev(),
        isohedral_version: isohedral::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        command: payload.command,
        args: &payload.args,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    let sidecar = provenance_path(artifact);
    std::fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` at build time or run time, else the checkout's `HEAD`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(head_rev)
        .unwrap_or_else(|| "unknown".to_string())
}

fn head_rev() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    out.status
        .success()
        .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_output() {
        let derived = provenance_path(Path::new("/tmp/fills/type12.json"));
        assert_eq!(derived, Path::new("/tmp/fills/type12.provenance.json"));
    }

    #[test]
    fn sidecar_records_command_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("fill.json");
        std::fs::write(&artifact, "{}").unwrap();
        let payload = Payload::new("fill", json!({"type": 3, "box": [0.0, 0.0, 1.0, 1.0]}));
        let sidecar = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(sidecar).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "fill");
        assert_eq!(parsed["args"]["type"], 3);
        assert_eq!(parsed["isohedral_version"], isohedral::VERSION);
        assert!(parsed["callsite"]["file"].as_str().unwrap().ends_with("provenance.rs"));
        assert!(!parsed["code_rev"].as_str().unwrap().is_empty());
    }
}
