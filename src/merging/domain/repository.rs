use super::VcsInfo;
use crate::shared::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Static description of the repository a merge batch belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub normalized_path: String,
    pub vcs: VcsInfo,
}

impl Repository {
    pub fn new(name: impl Into<String>, normalized_path: impl Into<String>, vcs: VcsInfo) -> Self {
        Self {
            name: name.into(),
            normalized_path: normalized_path.into(),
            vcs,
        }
    }

    /// Describes the repository rooted at `path`
    ///
    /// Relative paths are resolved against the current working directory.
    /// The name is the last component of the normalized path.
    pub fn from_path(path: &Path, vcs: VcsInfo) -> Result<Self> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to determine the current working directory")?
                .join(path)
        };

        let normalized_path = normalize_path(&absolute);
        let name = normalized_path
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        Ok(Self::new(name, normalized_path, vcs))
    }
}

/// Lexically resolves `.` and `..` and joins components with `/`
pub fn normalize_path(path: &Path) -> String {
    let mut prefix = String::new();
    let mut rooted = false;
    let mut parts: Vec<String> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => prefix = p.as_os_str().to_string_lossy().into_owned(),
            Component::RootDir => rooted = true,
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop();
            }
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
        }
    }

    let mut normalized = prefix;
    if rooted {
        normalized.push('/');
    }
    normalized.push_str(&parts.join("/"));
    normalized
}
