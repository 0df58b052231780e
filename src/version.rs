use crate::error::{Result, UpdateError};
use regex::Regex;

/// The version pair threaded through every substitution: the caller's
/// version string used verbatim in manifests and hint paths, plus the
/// normalized 4-part numeric form used in assembly references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    pub target: String,
    pub numeric: String,
}

impl Versions {
    pub fn parse(target: &str) -> Result<Self> {
        let numeric = numeric_version(target)?;
        Ok(Self {
            target: target.to_string(),
            numeric,
        })
    }
}

/// Derives the 4-part numeric version from a target version string,
/// e.g. "6.2.0-beta0001" becomes "6.2.0.0".
///
/// The leading digits-and-dots prefix must be at least 5 characters long
/// (three version parts minimum). A literal ".0" is appended before taking
/// the first four dot-separated segments, so 3-part inputs pad to four and
/// longer inputs truncate.
pub fn numeric_version(target: &str) -> Result<String> {
    let prefix_regex = Regex::new(r"^[0-9.]{5,}")?;
    let prefix = prefix_regex
        .find(target)
        .ok_or_else(|| UpdateError::InvalidVersion(target.to_string()))?;

    let padded = format!("{}.0", prefix.as_str());
    Ok(padded.split('.').take(4).collect::<Vec<_>>().join("."))
}
