use crate::error::Result;
use crate::rewriters::{Rewriter, Substitution};
use crate::version::Versions;
use regex::Regex;

/// Rewrites Harcourts.Core references in *.csproj files: the assembly
/// reference gets the 4-part numeric version and hint-path fragments get
/// the target version verbatim. Both substitutions run over the same
/// buffer, in that order.
pub struct CsprojRewriter;

impl Rewriter for CsprojRewriter {
    fn filename_match_regex() -> Result<Regex> {
        Ok(Regex::new(r#"(?i)\.csproj$"#)?)
    }

    fn substitutions(versions: &Versions) -> Result<Vec<Substitution>> {
        Ok(vec![
            Substitution {
                pattern: Regex::new(r#"Include="(Harcourts\.Core.*?), Version=(.*?),"#)?,
                replacement: format!(r#"Include="${{1}}, Version={},"#, versions.numeric),
            },
            Substitution {
                pattern: Regex::new(r#"\\(Harcourts\.Core.*?)\.(\d.*?)\\"#)?,
                replacement: format!(r#"\${{1}}.{}\"#, versions.target),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions() -> Versions {
        Versions::parse("6.2.0-beta0001").unwrap()
    }

    fn apply(subs: &[Substitution], content: &str) -> String {
        let mut text = content.to_string();
        for sub in subs {
            text = sub.pattern.replace_all(&text, sub.replacement.as_str()).into_owned();
        }
        text
    }

    #[test]
    fn test_reference_gets_numeric_version() {
        let subs = CsprojRewriter::substitutions(&versions()).unwrap();
        let content = r#"<Reference Include="Harcourts.Core.Api, Version=6.1.0.0, Culture=neutral">"#;
        assert_eq!(
            apply(&subs, content),
            r#"<Reference Include="Harcourts.Core.Api, Version=6.2.0.0, Culture=neutral">"#
        );
    }

    #[test]
    fn test_hint_path_gets_target_version() {
        let subs = CsprojRewriter::substitutions(&versions()).unwrap();
        let content = r"<HintPath>..\packages\Harcourts.Core.Api.6.1.0\lib\net45\Harcourts.Core.Api.dll</HintPath>";
        assert_eq!(
            apply(&subs, content),
            r"<HintPath>..\packages\Harcourts.Core.Api.6.2.0-beta0001\lib\net45\Harcourts.Core.Api.dll</HintPath>"
        );
    }

    #[test]
    fn test_hint_path_with_prerelease_version() {
        let subs = CsprojRewriter::substitutions(&versions()).unwrap();
        let content = r"<HintPath>..\packages\Harcourts.Core.6.1.0-beta0weird\lib\Harcourts.Core.dll</HintPath>";
        assert_eq!(
            apply(&subs, content),
            r"<HintPath>..\packages\Harcourts.Core.6.2.0-beta0001\lib\Harcourts.Core.dll</HintPath>"
        );
    }

    #[test]
    fn test_other_references_untouched() {
        let subs = CsprojRewriter::substitutions(&versions()).unwrap();
        let content = r#"<Reference Include="Newtonsoft.Json, Version=9.0.0.0, Culture=neutral">
<HintPath>..\packages\Newtonsoft.Json.9.0.1\lib\net45\Newtonsoft.Json.dll</HintPath>"#;
        assert_eq!(apply(&subs, content), content);
    }

    #[test]
    fn test_filename_regex_matches_csproj() {
        let regex = CsprojRewriter::filename_match_regex().unwrap();
        assert!(regex.is_match("/path/to/Harcourts.Listings.Web.csproj"));
        assert!(regex.is_match("\\path\\to\\Project.CSPROJ"));
    }

    #[test]
    fn test_filename_regex_no_false_positives() {
        let regex = CsprojRewriter::filename_match_regex().unwrap();
        assert!(!regex.is_match("/path/to/project.csproj.user"));
        assert!(!regex.is_match("/path/to/project.vbproj"));
    }
}
