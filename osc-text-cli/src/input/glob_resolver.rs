//! File pattern resolution using glob

use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

use super::InputSource;
use crate::error::CliError;

/// Pattern meaning standard input
pub const STDIN_MARKER: &str = "-";

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::FileNotFound(e.path().display().to_string()))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve command-line inputs; none, or a lone `-`, means stdin
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.is_empty() || (patterns.len() == 1 && patterns[0] == STDIN_MARKER) {
        return Ok(vec![InputSource::Stdin]);
    }
    let files = resolve_patterns(patterns)?;
    log::debug!("Resolved {} input files", files.len());
    Ok(files.into_iter().map(InputSource::File).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("c.md"), "c").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_no_match_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.txt", dir.path().display());
        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_stdin_inputs() {
        assert_eq!(resolve_inputs(&[]).unwrap(), vec![InputSource::Stdin]);
        assert_eq!(
            resolve_inputs(&["-".to_string()]).unwrap(),
            vec![InputSource::Stdin]
        );
    }
}
