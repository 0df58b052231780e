use std::path::PathBuf;
use thiserror::Error;

/// Errors from a single update run. Each pre-flight failure carries a
/// dedicated process exit code; mid-batch I/O faults do not.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Version string has no digits-and-dots prefix of at least 5 characters.
    #[error("'{0}' is an invalid version. There must be at least three parts to the version number.")]
    InvalidVersion(String),

    /// Root folder missing or not a directory.
    #[error("Folder '{}' does not exist.", .0.display())]
    FolderNotFound(PathBuf),

    /// No dependency-manifest files anywhere under the root.
    #[error("No packages.config files found in '{}' or sub folders.", .0.display())]
    NoPackagesConfig(PathBuf),

    /// No project-descriptor files anywhere under the root.
    #[error("No *.csproj files found in '{}' or sub folders.", .0.display())]
    NoProjectFiles(PathBuf),

    /// File read or write failed mid-batch. Already-rewritten files stay
    /// modified; there is no rollback.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    /// Regex compilation failed.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl UpdateError {
    /// Process exit code for this error. Faults without a dedicated code
    /// share the generic failure code.
    pub fn exit_code(&self) -> i32 {
        match self {
            UpdateError::FolderNotFound(_) => 2,
            UpdateError::InvalidVersion(_) => 3,
            UpdateError::NoPackagesConfig(_) => 4,
            UpdateError::NoProjectFiles(_) => 5,
            UpdateError::Io(_) | UpdateError::Walk(_) | UpdateError::Regex(_) => 1,
        }
    }
}

/// Result type alias for update operations.
pub type Result<T> = std::result::Result<T, UpdateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(UpdateError::FolderNotFound(PathBuf::from("x")).exit_code(), 2);
        assert_eq!(UpdateError::InvalidVersion("x".into()).exit_code(), 3);
        assert_eq!(UpdateError::NoPackagesConfig(PathBuf::from("x")).exit_code(), 4);
        assert_eq!(UpdateError::NoProjectFiles(PathBuf::from("x")).exit_code(), 5);
    }

    #[test]
    fn test_invalid_version_message() {
        let err = UpdateError::InvalidVersion("10.2".to_string());
        assert_eq!(
            err.to_string(),
            "'10.2' is an invalid version. There must be at least three parts to the version number."
        );
    }

    #[test]
    fn test_no_files_messages_name_the_folder() {
        let err = UpdateError::NoPackagesConfig(PathBuf::from("/repos/sln"));
        assert!(err.to_string().contains("/repos/sln"));
        let err = UpdateError::NoProjectFiles(PathBuf::from("/repos/sln"));
        assert!(err.to_string().contains("*.csproj"));
    }
}
