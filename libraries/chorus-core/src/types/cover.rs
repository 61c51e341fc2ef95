//! Cover art URIs

use serde::{Deserialize, Serialize};

/// Prefix marking a filename entry that refers to artwork embedded in a music file
/// rather than a separate image on disk.
pub const EMBEDDED_PREFIX: &str = "::::::::::";

/// URI through which cover art can be fetched.
///
/// Some players expose a direct URL per album, others only expose a directory
/// that may contain one of several conventionally-named image files. The
/// `FilenameOptions` variant carries the candidates so a client can probe them
/// in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CoverUri {
    /// A complete URI pointing directly at an image.
    FullPath(String),
    /// A base URI plus a path and a list of candidate filenames to probe.
    FilenameOptions {
        /// Base URI, e.g. `http://host:80/music`
        base_uri: String,
        /// The path underneath the base URI where to look
        path: String,
        /// Possible filenames to check for within the path
        possible_filenames: Vec<String>,
    },
}

impl Default for CoverUri {
    fn default() -> Self {
        CoverUri::FullPath(String::new())
    }
}

impl CoverUri {
    /// The base URI of the cover location.
    pub fn base_uri(&self) -> &str {
        match self {
            CoverUri::FullPath(uri) => uri,
            CoverUri::FilenameOptions { base_uri, .. } => base_uri,
        }
    }

    /// The path below the base URI, empty for a full-path URI.
    pub fn path(&self) -> &str {
        match self {
            CoverUri::FullPath(_) => "",
            CoverUri::FilenameOptions { path, .. } => path,
        }
    }

    /// All URIs worth probing for an image, embedded-artwork entries excluded.
    pub fn possible_uris(&self) -> Vec<String> {
        match self {
            CoverUri::FullPath(uri) => vec![uri.clone()],
            CoverUri::FilenameOptions {
                base_uri,
                possible_filenames,
                ..
            } => possible_filenames
                .iter()
                .filter(|filename| !filename.starts_with(EMBEDDED_PREFIX))
                .map(|filename| format!("{base_uri}{filename}"))
                .collect(),
        }
    }

    /// The source file to extract embedded artwork from, if any candidate
    /// carries the embedded prefix.
    pub fn embedded_uri(&self) -> Option<&str> {
        match self {
            CoverUri::FullPath(_) => None,
            CoverUri::FilenameOptions {
                possible_filenames, ..
            } => possible_filenames
                .iter()
                .find(|filename| filename.starts_with(EMBEDDED_PREFIX))
                .map(|filename| &filename[EMBEDDED_PREFIX.len()..]),
        }
    }
}

impl PartialEq for CoverUri {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CoverUri::FullPath(lhs), CoverUri::FullPath(rhs)) => lhs == rhs,
            (
                CoverUri::FilenameOptions {
                    base_uri: lhs_base,
                    possible_filenames: lhs_names,
                    ..
                },
                CoverUri::FilenameOptions {
                    base_uri: rhs_base,
                    possible_filenames: rhs_names,
                    ..
                },
            ) => lhs_base == rhs_base && lhs_names == rhs_names,
            _ => false,
        }
    }
}

impl Eq for CoverUri {}

impl std::hash::Hash for CoverUri {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.base_uri().hash(state);
    }
}
