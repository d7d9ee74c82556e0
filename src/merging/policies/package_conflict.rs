use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// PackageConflictPolicy decides what happens when two analyzer results
/// contribute a package with the same identifier but different metadata.
///
/// Identical duplicates are never a conflict; they are simply merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageConflictPolicy {
    /// Keep the first package registered for an identifier and drop later ones
    #[default]
    KeepFirst,
    /// Fail the merge on the first conflicting package
    Reject,
}

impl PackageConflictPolicy {
    /// Returns true if `incoming` may be merged into a batch that already holds `existing`
    pub fn accepts<T: PartialEq>(&self, existing: &T, incoming: &T) -> bool {
        match self {
            PackageConflictPolicy::KeepFirst => true,
            PackageConflictPolicy::Reject => existing == incoming,
        }
    }
}

impl FromStr for PackageConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "keep_first" => Ok(PackageConflictPolicy::KeepFirst),
            "reject" => Ok(PackageConflictPolicy::Reject),
            _ => Err(format!(
                "Invalid package conflict policy: {}. Please specify 'keep_first' or 'reject'",
                s
            )),
        }
    }
}

impl fmt::Display for PackageConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageConflictPolicy::KeepFirst => write!(f, "keep_first"),
            PackageConflictPolicy::Reject => write!(f, "reject"),
        }
    }
}
