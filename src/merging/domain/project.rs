use super::{Identifier, Scope, VcsInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Project - the unit under analysis, one per analyzed module or build file
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Project {
    pub id: Identifier,
    /// Path of the build file relative to the repository root
    #[serde(default)]
    pub definition_file_path: String,
    #[serde(default)]
    pub declared_licenses: BTreeSet<String>,
    #[serde(default)]
    pub vcs: VcsInfo,
    #[serde(default)]
    pub homepage_url: String,
    #[serde(default)]
    pub scopes: BTreeSet<Scope>,
}

impl Project {
    /// Project with an empty identifier, no metadata and no scopes
    pub const EMPTY: Project = Project {
        id: Identifier::EMPTY,
        definition_file_path: String::new(),
        declared_licenses: BTreeSet::new(),
        vcs: VcsInfo::EMPTY,
        homepage_url: String::new(),
        scopes: BTreeSet::new(),
    };

    pub fn new(id: Identifier, scopes: BTreeSet<Scope>) -> Self {
        Self {
            id,
            scopes,
            ..Self::EMPTY
        }
    }

    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|scope| scope.name == name)
    }

    /// Collects the identifiers of every package referenced by any scope,
    /// directly or transitively
    pub fn collect_referenced_ids(&self) -> BTreeSet<Identifier> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.dependencies.iter())
            .flat_map(|root| root.iter())
            .map(|node| node.id.clone())
            .collect()
    }
}
