use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Applied when a request omits `image`, both on create and on update.
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/150";

/// Opaque story identifier. Wraps the storage key so handlers and clients
/// never depend on a particular backend's native id format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct StoryId(Uuid);

impl StoryId {
    /// Parses a raw path segment; `None` means the caller should answer 400.
    pub fn parse(raw: &str) -> Option<StoryId> {
        Uuid::from_str(raw).ok().map(StoryId)
    }

    #[cfg(test)]
    pub fn random() -> StoryId {
        StoryId(Uuid::new_v4())
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Serialize, Deserialize, Debug, FromRow)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub content: Option<String>,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StoryCreate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Update is a full-field replacement: omitted `content` clears to null and
/// omitted `image` falls back to [`DEFAULT_IMAGE_URL`]; nothing is preserved
/// from the stored row except the id.
#[derive(Serialize, Deserialize, Debug)]
pub struct StoryUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_uuid() {
        let id = StoryId::parse("67f7e6a4-8a6b-4bfb-9e2f-0b1f6f2d3c4a");
        assert!(id.is_some());
        assert_eq!(id.unwrap().to_string(), "67f7e6a4-8a6b-4bfb-9e2f-0b1f6f2d3c4a");
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(StoryId::parse("123").is_none());
        assert!(StoryId::parse("").is_none());
        assert!(StoryId::parse("not-a-uuid-at-all").is_none());
    }

    #[test]
    fn id_serializes_transparently() {
        let id = StoryId::parse("67f7e6a4-8a6b-4bfb-9e2f-0b1f6f2d3c4a").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"67f7e6a4-8a6b-4bfb-9e2f-0b1f6f2d3c4a\"");
    }
}
