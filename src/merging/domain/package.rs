use super::{Identifier, RemoteArtifact, VcsInfo};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Package value object representing a resolved package
///
/// Packages order by their identifier first, so an ordered set of packages
/// with distinct identifiers is sorted by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Package {
    pub id: Identifier,
    #[serde(default)]
    pub declared_licenses: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub homepage_url: String,
    #[serde(default)]
    pub binary_artifact: RemoteArtifact,
    #[serde(default)]
    pub source_artifact: RemoteArtifact,
    #[serde(default)]
    pub vcs: VcsInfo,
}

impl Package {
    /// Package with an empty identifier and no metadata
    pub const EMPTY: Package = Package {
        id: Identifier::EMPTY,
        declared_licenses: BTreeSet::new(),
        description: String::new(),
        homepage_url: String::new(),
        binary_artifact: RemoteArtifact::EMPTY,
        source_artifact: RemoteArtifact::EMPTY,
        vcs: VcsInfo::EMPTY,
    };

    /// Creates a package with the given identifier and empty metadata
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            ..Self::EMPTY
        }
    }

    /// Creates a dependency tree node for this package without children
    pub fn to_reference(&self) -> PackageReference {
        PackageReference::new(self.id.clone(), BTreeSet::new())
    }

    /// Creates a dependency tree node for this package with the given direct dependencies
    pub fn to_reference_with(&self, dependencies: BTreeSet<PackageReference>) -> PackageReference {
        PackageReference::new(self.id.clone(), dependencies)
    }
}

/// PackageReference - node of a per-scope dependency tree
///
/// Each node owns its children, so every scope owns an independent tree even
/// when several trees mention the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageReference {
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub dependencies: BTreeSet<PackageReference>,
}

impl PackageReference {
    pub fn new(id: Identifier, dependencies: BTreeSet<PackageReference>) -> Self {
        Self { id, dependencies }
    }

    /// Returns an iterator over this node and all of its transitive dependencies
    pub fn iter(&self) -> PackageReferenceIter<'_> {
        PackageReferenceIter { stack: vec![self] }
    }
}

/// Depth-first iterator over a PackageReference tree, parents before children
pub struct PackageReferenceIter<'a> {
    stack: Vec<&'a PackageReference>,
}

impl<'a> Iterator for PackageReferenceIter<'a> {
    type Item = &'a PackageReference;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.dependencies.iter().rev());
        Some(node)
    }
}
