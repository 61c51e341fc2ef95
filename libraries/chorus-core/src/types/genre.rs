//! Genre types

use crate::types::SourceType;
use serde::{Deserialize, Serialize};

/// A music genre as reported by a library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    /// A unique id for the genre. Usage depends on library implementation.
    pub id: String,
    /// The source of this genre.
    pub source: SourceType,
    /// The name of the genre.
    pub name: String,
}

impl Genre {
    pub fn new(id: impl Into<String>, source: SourceType, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source,
            name: name.into(),
        }
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.source == other.source
    }
}

impl Eq for Genre {}

impl std::hash::Hash for Genre {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
