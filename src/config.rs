// Configuration for both tools. Everything that used to be a tweak-and-rerun
// constant lives here as a plain struct, so each component receives its
// settings at construction instead of reading globals. The `Default` impls
// carry the values the tools actually run with day to day.

use std::path::PathBuf;

/// Settings for the code extractor: which directory trees to scan, which
/// file suffixes count as source code, and where the concatenated output
/// lands. The output file is overwritten on every run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directories walked in order. A missing root is logged and skipped.
    pub roots: Vec<PathBuf>,
    /// Accepted file-name suffixes, dot included. Matching is a
    /// case-sensitive `ends_with` on the file name.
    pub extensions: Vec<String>,
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            roots: vec![
                ["exe-backend", "src", "main", "java"].iter().collect(),
                ["exe-frontend", "src"].iter().collect(),
            ],
            extensions: vec![".java".into(), ".ts".into(), ".vue".into()],
            output: PathBuf::from("source_code_for_copyright.txt"),
        }
    }
}

/// Settings for the data seeder: where the backend lives, which admin
/// account to log in with, and how many students to generate.
#[derive(Debug, Clone)]
pub struct SeederConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Number of creation requests to issue.
    pub student_count: usize,
    /// Initial password assigned to every generated student.
    pub student_password: String,
    /// Grade labels the backend expects, picked uniformly at random.
    pub grades: Vec<String>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        SeederConfig {
            base_url: "http://localhost:8080/api/v1".into(),
            username: "admin".into(),
            password: "password".into(),
            student_count: 100,
            student_password: "123".into(),
            grades: ["七年级", "八年级", "九年级", "高一", "高二", "高三"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }
}
