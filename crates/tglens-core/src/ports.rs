use async_trait::async_trait;

use crate::Result;

/// Raw record returned by a directory lookup.
///
/// Carries every field either entity variant may use; everything but the id
/// is optional so that absence stays a first-class state. Which fields are
/// meaningful is decided by the resolver branch that produced the record.
#[derive(Clone, Debug, Default)]
pub struct EntityRecord {
    pub id: i64,
    pub dc_id: Option<i32>,
    pub is_verified: bool,
    pub is_scam: bool,
    pub is_fake: bool,

    // Account fields
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub is_premium: bool,
    pub is_bot: bool,
    pub status: Option<String>,

    // Chat fields
    pub chat_type: Option<String>,
    pub title: Option<String>,
    pub members_count: Option<i64>,
    pub description: Option<String>,

    /// Reference to the big profile/chat photo, resolvable via `file_url`.
    pub photo_file_id: Option<String>,
}

/// Hexagonal port for the messaging-platform directory.
///
/// The core treats the platform as an opaque dependency: one lookup attempt
/// per call (fallback policy lives in the resolver), and a file-reference to
/// downloadable-URL resolution for photos.
#[async_trait]
pub trait Directory: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<EntityRecord>;
    async fn file_url(&self, file_id: &str) -> Result<String>;
}
