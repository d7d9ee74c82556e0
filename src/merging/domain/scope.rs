use super::{Identifier, PackageReference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Named grouping of a project's direct dependencies, e.g. "compile" or "test"
///
/// Scopes order by name first. `delivered` tells whether the packages of the
/// scope ship with the final artifact of the project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Scope {
    pub name: String,
    pub delivered: bool,
    #[serde(default)]
    pub dependencies: BTreeSet<PackageReference>,
}

impl Scope {
    pub fn new(
        name: impl Into<String>,
        delivered: bool,
        dependencies: BTreeSet<PackageReference>,
    ) -> Self {
        Self {
            name: name.into(),
            delivered,
            dependencies,
        }
    }

    /// Returns true if the identifier appears anywhere in this scope's dependency trees
    pub fn contains(&self, id: &Identifier) -> bool {
        self.dependencies
            .iter()
            .flat_map(|root| root.iter())
            .any(|node| &node.id == id)
    }
}
