use serde::{Deserialize, Serialize};

/// Version control metadata of a project, package or repository
///
/// The merge engine treats this as opaque data and only copies it around.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VcsInfo {
    #[serde(rename = "type")]
    pub vcs_type: String,
    pub url: String,
    pub revision: String,
    pub path: String,
}

impl VcsInfo {
    /// VcsInfo with all fields empty
    pub const EMPTY: VcsInfo = VcsInfo {
        vcs_type: String::new(),
        url: String::new(),
        revision: String::new(),
        path: String::new(),
    };

    pub fn new(
        vcs_type: impl Into<String>,
        url: impl Into<String>,
        revision: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            vcs_type: vcs_type.into(),
            url: url.into(),
            revision: revision.into(),
            path: path.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::EMPTY
    }
}

/// Location of a downloadable artifact together with its hash
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RemoteArtifact {
    pub url: String,
    pub hash: String,
}

impl RemoteArtifact {
    pub const EMPTY: RemoteArtifact = RemoteArtifact {
        url: String::new(),
        hash: String::new(),
    };

    pub fn new(url: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            hash: hash.into(),
        }
    }
}
