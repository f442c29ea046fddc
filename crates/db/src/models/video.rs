//! Video entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use streambox_core::tags::{decode_tags, Tags};
use streambox_core::types::{DbId, Timestamp};

/// A video row as returned by the `sp_get_video*` procedures.
///
/// `tags` holds the raw column text; use [`VideoResponse`] to decode it.
#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub youtube_link: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    pub video_type: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub tags: Option<String>,
    pub created_at: Timestamp,
}

impl Video {
    /// Decode the stored tag column.
    ///
    /// A value that is not a JSON array of strings is logged and passed
    /// through unchanged as [`Tags::Raw`].
    pub fn decoded_tags(&self) -> Option<Tags> {
        let raw = self.tags.as_deref()?;
        match decode_tags(raw) {
            Ok(labels) => Some(Tags::Labels(labels)),
            Err(e) => {
                tracing::warn!(video_id = self.id, error = %e, "Stored tags are not a JSON array, returning raw value");
                Some(Tags::Raw(raw.to_string()))
            }
        }
    }
}

/// Video representation for API responses, with decoded tags.
#[derive(Debug, Clone, Serialize)]
pub struct VideoResponse {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub youtube_link: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub video_type: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub tags: Option<Tags>,
    pub created_at: Timestamp,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        let tags = video.decoded_tags();
        Self {
            id: video.id,
            user_id: video.user_id,
            title: video.title,
            youtube_link: video.youtube_link,
            description: video.description,
            video_type: video.video_type,
            status: video.status,
            thumbnail: video.thumbnail,
            tags,
            created_at: video.created_at,
        }
    }
}

/// One distinct label from `sp_get_video_tags`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VideoTag {
    pub tag: String,
}

/// DTO for `sp_create_video`. `tags` is the encoded JSON array.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub user_id: DbId,
    pub title: String,
    pub youtube_link: String,
    pub description: Option<String>,
    pub video_type: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub tags: String,
}

/// DTO for `sp_update_video`. Every field is written, so callers merge the
/// current row with the requested changes first.
#[derive(Debug, Clone)]
pub struct UpdateVideo {
    pub title: String,
    pub youtube_link: String,
    pub description: Option<String>,
    pub video_type: String,
    pub status: String,
    pub thumbnail: Option<String>,
    pub tags: String,
}
