// SPDX-License-Identifier: Apache-2.0

//! Wildcard game-version aliases.
//!
//! Metadata may list `"1.19.*"` instead of enumerating every patch release; the
//! table below is the single source of truth for what each alias expands to.

use crate::server::ValidationError;

#[must_use]
pub fn is_wildcard(version: &str) -> bool {
    version.ends_with(".*")
}

/// Exact subversion list for a wildcard alias, or `None` for unknown aliases.
#[must_use]
pub fn subversions(alias: &str) -> Option<&'static [&'static str]> {
    let list: &'static [&'static str] = match alias {
        "1.7.*" => &[
            "1.7.2", "1.7.4", "1.7.5", "1.7.6", "1.7.7", "1.7.8", "1.7.9", "1.7.10",
        ],
        "1.8.*" => &[
            "1.8", "1.8.1", "1.8.2", "1.8.3", "1.8.4", "1.8.5", "1.8.6", "1.8.7", "1.8.8", "1.8.9",
        ],
        "1.9.*" => &["1.9", "1.9.1", "1.9.2", "1.9.3", "1.9.4"],
        "1.10.*" => &["1.10", "1.10.1", "1.10.2"],
        "1.11.*" => &["1.11", "1.11.1", "1.11.2"],
        "1.12.*" => &["1.12", "1.12.1", "1.12.2"],
        "1.13.*" => &["1.13", "1.13.1", "1.13.2"],
        "1.14.*" => &["1.14", "1.14.1", "1.14.2", "1.14.3", "1.14.4"],
        "1.15.*" => &["1.15", "1.15.1", "1.15.2"],
        "1.16.*" => &["1.16", "1.16.1", "1.16.2", "1.16.3", "1.16.4", "1.16.5"],
        "1.17.*" => &["1.17", "1.17.1"],
        "1.18.*" => &["1.18", "1.18.1", "1.18.2"],
        "1.19.*" => &["1.19", "1.19.1", "1.19.2", "1.19.3", "1.19.4"],
        "1.20.*" => &[
            "1.20", "1.20.1", "1.20.2", "1.20.3", "1.20.4", "1.20.5", "1.20.6",
        ],
        "1.21.*" => &["1.21", "1.21.1", "1.21.2", "1.21.3", "1.21.4"],
        _ => return None,
    };
    Some(list)
}

/// Expands wildcard aliases, passes plain versions through, deduplicates while
/// keeping first-seen order. An alias missing from the table is an error: a
/// typo'd wildcard silently expanding to nothing must fail CI instead.
pub fn expand_versions(versions: &[String]) -> Result<Vec<String>, ValidationError> {
    let mut out: Vec<String> = Vec::new();
    for version in versions {
        if is_wildcard(version) {
            let subs = subversions(version).ok_or_else(|| {
                ValidationError(format!("unknown wildcard version alias {version:?}"))
            })?;
            for sub in subs {
                if !out.iter().any(|v| v == sub) {
                    out.push((*sub).to_string());
                }
            }
        } else if !out.iter().any(|v| v == version) {
            out.push(version.clone());
        }
    }
    Ok(out)
}
