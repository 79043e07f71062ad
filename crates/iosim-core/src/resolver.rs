//! Generic prefix-abbreviation resolver.
//!
//! IOS-style CLIs accept any unambiguous prefix of a command name. The same
//! matching rules apply at every level -- top-level commands, `no` targets,
//! `show` targets -- so the resolver is a free function over a
//! name-to-identifier mapping rather than something wired to the registry.

use iosim_types::{CliError, Result};

/// Resolve `token` against a mapping of candidate names to identifiers.
///
/// Matching is case-insensitive. Zero prefix matches is invalid input; a
/// unique match wins; among multiple matches, a name equal to the token
/// resolves the ambiguity, otherwise the token is ambiguous.
pub fn resolve<'a, T: Copy>(token: &str, candidates: &'a [(&'a str, T)]) -> Result<T> {
    let lower = token.to_ascii_lowercase();

    let matches: Vec<&(&str, T)> = candidates
        .iter()
        .filter(|(name, _)| name.to_ascii_lowercase().starts_with(&lower))
        .collect();

    match matches.len() {
        0 => Err(CliError::InvalidInput(token.to_string())),
        1 => Ok(matches[0].1),
        _ => matches
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&&(_, id)| id)
            .ok_or_else(|| CliError::Ambiguous(token.to_string())),
    }
}

/// True when `token` is a non-empty case-insensitive prefix of `full`.
///
/// Used for fixed single-keyword sub-phrases (`configure terminal`,
/// `ip address`, `show ip interface brief`) where a resolver over a
/// one-entry candidate set would be overkill.
pub fn is_abbrev(token: &str, full: &str) -> bool {
    !token.is_empty() && full.to_ascii_lowercase().starts_with(&token.to_ascii_lowercase())
}
