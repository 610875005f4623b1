//! Golden equivalence-class fixtures and loaders shared by the workspace tests.
//!
//! Fixture JSON deserializes into [`EquivalenceCase`]; adjacency matrices are
//! whitespace-separated text.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// A DAG as listed in a fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct DagSpec {
    #[serde(default)]
    pub nodes: Vec<usize>,
    pub arcs: Vec<(usize, usize)>,
}

/// A PDAG as listed in a fixture. Edges are unordered pairs.
#[derive(Debug, Clone, Deserialize)]
pub struct PdagSpec {
    pub arcs: Vec<(usize, usize)>,
    pub edges: Vec<(usize, usize)>,
}

/// Expected interventional CPDAG for one target set.
#[derive(Debug, Clone, Deserialize)]
pub struct InterventionCase {
    pub targets: Vec<usize>,
    pub arcs: Vec<(usize, usize)>,
    pub edges: Vec<(usize, usize)>,
}

/// One golden equivalence-class scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct EquivalenceCase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub dag: DagSpec,
    pub cpdag: PdagSpec,
    /// Every member of the class, each as an arc list.
    pub extensions: Vec<Vec<(usize, usize)>>,
    /// Extension produced by the lowest-id sink order.
    pub to_dag: Vec<(usize, usize)>,
    #[serde(default)]
    pub interventions: Vec<InterventionCase>,
    pub optimal_intervention: Option<usize>,
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Load every golden equivalence case.
pub fn equivalence_cases() -> Vec<EquivalenceCase> {
    let root = fixtures_root();
    list_fixtures("golden/equivalence")
        .iter()
        .map(|path| {
            let relative = path.strip_prefix(&root).unwrap_or(path);
            load_fixture::<EquivalenceCase>(&relative.to_string_lossy())
        })
        .collect()
}

/// Parse a whitespace-separated 0/1 adjacency matrix. Blank lines and lines
/// starting with `#` are skipped.
pub fn parse_amat(text: &str) -> Vec<Vec<u8>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split_whitespace()
                .map(|cell| {
                    cell.parse::<u8>()
                        .unwrap_or_else(|e| panic!("Bad matrix cell {:?}: {}", cell, e))
                })
                .collect()
        })
        .collect()
}

/// Load an adjacency-matrix text fixture.
pub fn load_amat(relative_path: &str) -> Vec<Vec<u8>> {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read matrix {}: {}", path.display(), e));
    parse_amat(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_golden_equivalence_files_exist() {
        let files = [
            "golden/equivalence/triangle.json",
            "golden/equivalence/collider.json",
            "golden/equivalence/chain.json",
            "golden/equivalence/sprinkler.json",
            "golden/equivalence/meek_r3.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn golden_cases_deserialize() {
        let cases = equivalence_cases();
        assert_eq!(cases.len(), 5);
        for case in &cases {
            assert!(!case.extensions.is_empty(), "{} lists no extensions", case.name);
        }
    }

    #[test]
    fn golden_files_parse_as_json() {
        for file in list_fixtures("golden/equivalence") {
            let name = file.file_name().unwrap().to_string_lossy();
            let value: serde_json::Value = load_fixture(&format!("golden/equivalence/{name}"));
            assert!(value.get("name").is_some(), "{} has no name", file.display());
        }
    }

    #[test]
    fn single_case_loads_by_relative_path() {
        let case: EquivalenceCase = load_fixture("golden/equivalence/chain.json");
        assert_eq!(case.name, "chain");
    }

    #[test]
    fn parse_amat_skips_comments() {
        let matrix = parse_amat("# header\n0 1\n\n0 0\n");
        assert_eq!(matrix, vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn sprinkler_matrix_is_square() {
        let matrix = load_amat("golden/amat/sprinkler.txt");
        assert_eq!(matrix.len(), 5);
        assert!(matrix.iter().all(|row| row.len() == 5));
    }
}
