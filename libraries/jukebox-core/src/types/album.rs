//! Album types

use super::ids::AlbumId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An album
///
/// Belongs to exactly one artist; the association lives in the catalog
/// indices, not on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Unique album identifier
    pub id: AlbumId,

    /// Album title
    pub title: String,

    /// Registration timestamp
    pub created_at: DateTime<Utc>,
}

impl Album {
    /// Create a new album record
    pub fn new(id: AlbumId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}
