//! Region selection against a live region list.

use crate::error::Result;
use regex::Regex;
use std::collections::HashSet;

/// Source of live region names.
///
/// The production implementation wraps a cloud describe-regions call; tests
/// supply a fixed list.
pub trait RegionSource {
    fn region_names(&self) -> Result<Vec<String>>;
}

/// Return the region names matched by any of the patterns.
///
/// Patterns use search semantics: `us-` matches `us-east-1` unless the
/// pattern anchors itself with `^`/`$`. Duplicates collapse; order is not
/// guaranteed. An empty pattern list selects nothing.
pub fn select_regions<P, I, S>(patterns: &[P], region_names: I) -> Result<HashSet<String>>
where
    P: AsRef<str>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let compiled = patterns
        .iter()
        .map(|p| Regex::new(p.as_ref()))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(region_names
        .into_iter()
        .map(Into::into)
        .filter(|name| compiled.iter().any(|re| re.is_match(name)))
        .collect())
}
