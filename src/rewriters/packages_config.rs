use crate::error::Result;
use crate::rewriters::{Rewriter, Substitution};
use crate::version::Versions;
use regex::Regex;

/// Rewrites the pinned `version` attribute of every Harcourts.Core package
/// entry in a packages.config file. The target version is inserted verbatim.
pub struct PackagesConfigRewriter;

impl Rewriter for PackagesConfigRewriter {
    fn filename_match_regex() -> Result<Regex> {
        Ok(Regex::new(r#"(?i)[/\\]packages\.config$"#)?)
    }

    fn substitutions(versions: &Versions) -> Result<Vec<Substitution>> {
        Ok(vec![Substitution {
            pattern: Regex::new(r#"id="(Harcourts\.Core.*?)" version="(.*?)""#)?,
            replacement: format!(r#"id="${{1}}" version="{}""#, versions.target),
        }])
    }
}
