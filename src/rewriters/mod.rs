use crate::error::Result;
use crate::version::Versions;
use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};

pub mod csproj;
pub mod packages_config;

/// A single pattern/template pair applied with `Regex::replace_all`.
/// Replacement templates use `${n}` group references.
pub struct Substitution {
    pub pattern: Regex,
    pub replacement: String,
}

pub trait Rewriter {
    /// Recursively collects every file under `root` whose path matches the
    /// rewriter's filename pattern, in directory-enumeration order.
    fn find_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        debug!("Scanning for matching files");
        let mut files: Vec<PathBuf> = vec![];
        let root = root.as_ref();
        let filename_regex = Self::filename_match_regex()?;

        for item in walkdir::WalkDir::new(root) {
            let item = item?;
            let path = item.path();
            if filename_regex.is_match(path.to_string_lossy().as_ref()) {
                files.push(path.to_path_buf());
            }
        }

        debug!("Found files: {:?}", files);
        Ok(files)
    }

    /// Applies the substitutions in order to one in-memory text buffer and
    /// writes the buffer back over the file, whether or not anything matched.
    fn rewrite_file(path: &Path, substitutions: &[Substitution]) -> Result<()> {
        debug!("Rewriting file: '{}'", path.display());
        let mut contents = std::fs::read_to_string(path)?;
        for sub in substitutions {
            contents = sub
                .pattern
                .replace_all(&contents, sub.replacement.as_str())
                .into_owned();
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn filename_match_regex() -> Result<Regex>;
    fn substitutions(versions: &Versions) -> Result<Vec<Substitution>>;
}
