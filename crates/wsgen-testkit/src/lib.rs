//! Test utilities for wsgen
//!
//! This crate provides shared testing utilities used across the wsgen workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the crate root, so test output lands in
/// `<crate>/.tmp/<random-name>` and is removed when the `TempDir` drops.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or the directories
/// cannot be created.
///
/// # Examples
///
/// ```rust
/// use wsgen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `contents` to `dir/relative`, creating parent directories
///
/// Returns the full path of the written file.
pub fn write_file(dir: &Path, relative: impl AsRef<Path>, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Problem template text using the LaTeX block delimiters
pub fn latex_problem_template(problem: &str, solution: &str) -> String {
    format!(
        "\\jcomm{{fixture\\}}\n\\jblock{{block problem}}\n{}\n\\jblock{{endblock}}\n\n\\jblock{{block solution}}\n{}\n\\jblock{{endblock}}\n",
        problem, solution
    )
}

/// Problem template text using the `{{ }}` block delimiters
pub fn braces_problem_template(problem: &str, solution: &str) -> String {
    format!(
        "{{{{block problem}}}}\n{}\n{{{{endblock}}}}\n{{{{block solution}}}}\n{}\n{{{{endblock}}}}\n",
        problem, solution
    )
}
