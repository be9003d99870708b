use std::fs;
use std::path::{Path, PathBuf};

use jsonpatch::{Operation, Patch};
use serde::Deserialize;
use serde_json::Value;

/// One conformance case: `patch` applied to `doc` either yields `expected`
/// or fails. `error` is a free-form note; `kind` pins the failure class.
#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub comment: String,
    pub doc: Value,
    pub patch: Vec<Operation>,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Case {
    pub fn patch_engine(&self) -> Patch {
        self.options
            .iter()
            .fold(Patch::new(), |patch, option| match option.as_str() {
                "NoStrictPathExists" => patch.strict_path_exists(false),
                "SupportNegativeArrayIndex" => patch.support_negative_array_index(true),
                other => panic!("{}: unknown option {other:?}", self.comment),
            })
    }
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

pub fn load_cases(name: &str) -> Vec<Case> {
    let path = fixtures_dir().join(name);
    let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {:?}: {e}", path));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("failed to parse {:?}: {e}", path))
}
