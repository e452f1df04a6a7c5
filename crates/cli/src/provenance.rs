//! Provenance sidecars: `<stem>.provenance.json` next to every CLI output.
//!
//! A sidecar records which command produced the artifact, from which candidate
//! file, how many candidates were read, and whether selection succeeded.

use anyhow::{Context, Result};
use cornerquad::SelectError;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
pub struct Sidecar {
    pub command: &'static str,
    pub code_rev: String,
    pub lib_version: &'static str,
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<usize>,
    /// `"ok"`, or the selector error that stopped the run.
    pub outcome: String,
    pub params: Value,
}

impl Sidecar {
    pub fn new(command: &'static str, tag: Option<String>, params: Value) -> Self {
        Self {
            command,
            code_rev: code_rev(),
            lib_version: cornerquad::VERSION,
            tag,
            input: None,
            candidates: None,
            outcome: "ok".to_string(),
            params,
        }
    }

    pub fn with_input(mut self, input: &Path, candidates: usize) -> Self {
        self.input = Some(input.to_string_lossy().into_owned());
        self.candidates = Some(candidates);
        self
    }

    pub fn with_outcome<T>(mut self, res: &Result<T, SelectError>) -> Self {
        if let Err(err) = res {
            self.outcome = err.to_string();
        }
        self
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display())),
        _ => Ok(()),
    }
}

/// `quad.json` → `quad.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Write the sidecar for `artifact`; returns its path.
pub fn write_sidecar(artifact: &Path, sidecar: &Sidecar) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    ensure_parent(&path)?;
    fs::write(&path, serde_json::to_vec_pretty(sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// Build revision from `GIT_COMMIT` (runtime, then compile time), else `"unknown"`.
pub fn code_rev() -> String {
    std::env::var("GIT_COMMIT")
        .ok()
        .or_else(|| option_env!("GIT_COMMIT").map(str::to_string))
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/quad.json")),
            Path::new("/tmp/output/quad.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("cloud.csv")),
            Path::new("cloud.provenance.json")
        );
    }

    #[test]
    fn failed_selection_is_recorded() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested/quad.json");
        let res: Result<(), SelectError> =
            Err(SelectError::InsufficientPoints { got: 3, need: 5 });
        let sidecar = Sidecar::new("select", Some("bench-a".to_string()), json!({"k": 4}))
            .with_input(Path::new("few.json"), 3)
            .with_outcome(&res);
        let path = write_sidecar(&artifact, &sidecar).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "select");
        assert_eq!(parsed["tag"], "bench-a");
        assert_eq!(parsed["input"], "few.json");
        assert_eq!(parsed["candidates"], 3);
        assert_eq!(parsed["params"]["k"], 4);
        assert!(parsed["outcome"]
            .as_str()
            .unwrap()
            .contains("got 3, need at least 5"));
    }

    #[test]
    fn synth_sidecar_omits_input_fields() {
        let sidecar = Sidecar::new("synth", None, json!({"seed": 7}));
        let v = serde_json::to_value(&sidecar).unwrap();
        assert!(v.get("input").is_none());
        assert_eq!(v["outcome"], "ok");
    }
}
