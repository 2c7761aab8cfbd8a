//! The song library: a seeded, append-only track list with derived filtering,
//! stats, and a tag summary. Remote records fetched from the API are mapped
//! into [`LibraryTrack`]s and merged here.

use serde::{Deserialize, Serialize};

use crate::api::{FetchError, RemotePost};

/// Offset added to remote record ids when mapping them into the library.
/// Repeat fetches request the same page, so merged ids can collide; the
/// library does not deduplicate.
pub const REMOTE_ID_OFFSET: i64 = 200;

const REMOTE_ARTIST: &str = "API Artist";
const REMOTE_TITLE_MAX_CHARS: usize = 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryTrack {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub length: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl LibraryTrack {
    fn seed(id: i64, title: &str, artist: &str, length: u32, tags: &[&str]) -> Self {
        Self {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            length,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: None,
        }
    }

    /// Map a remote record into the track shape: offset id, truncated title,
    /// placeholder artist, synthetic length, body carried through.
    fn from_remote(post: RemotePost) -> Self {
        // Remote ids are attacker-controlled; saturate and clamp instead of
        // letting the arithmetic overflow or wrap on the cast.
        let length = post.id.saturating_mul(5).saturating_add(180);
        Self {
            id: REMOTE_ID_OFFSET.saturating_add(post.id),
            title: post.title.chars().take(REMOTE_TITLE_MAX_CHARS).collect(),
            artist: REMOTE_ARTIST.to_string(),
            length: length.clamp(0, i64::from(u32::MAX)) as u32,
            tags: Vec::new(),
            body: Some(post.body),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryStats {
    pub count: usize,
    pub average_length_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSummary {
    pub total_songs: usize,
    pub calm_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    tracks: Vec<LibraryTrack>,
}

impl Library {
    pub fn new(tracks: Vec<LibraryTrack>) -> Self {
        Self { tracks }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            LibraryTrack::seed(101, "Morning Breeze", "Indie Folk", 150, &["calm"]),
            LibraryTrack::seed(102, "Electric Night", "Synthwave", 220, &["energetic"]),
            LibraryTrack::seed(103, "Calm River", "Piano One", 200, &["calm"]),
        ])
    }

    pub fn tracks(&self) -> &[LibraryTrack] {
        &self.tracks
    }

    pub fn find(&self, id: i64) -> Option<&LibraryTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Case-insensitive substring match of the query against track titles.
    /// Returns a derived list and never mutates the library; an empty query
    /// matches everything.
    pub fn filter(&self, query: &str) -> Vec<LibraryTrack> {
        let q = query.trim().to_lowercase();
        self.tracks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&q))
            .cloned()
            .collect()
    }

    /// Recomputed from scratch on every call.
    pub fn stats(&self) -> LibraryStats {
        let count = self.tracks.len();
        let total: u64 = self.tracks.iter().map(|t| u64::from(t.length)).sum();
        let average_length_secs = if count > 0 {
            (total as f64 / count as f64).round() as u32
        } else {
            0
        };
        LibraryStats {
            count,
            average_length_secs,
        }
    }

    /// Flatten all tags and count how many are `"calm"`.
    pub fn tag_summary(&self) -> TagSummary {
        let calm_count = self
            .tracks
            .iter()
            .flat_map(|t| t.tags.iter())
            .filter(|tag| *tag == "calm")
            .count();
        TagSummary {
            total_songs: self.tracks.len(),
            calm_count,
        }
    }

    /// Append the mapped remote records to the library, preserving existing
    /// entries. Returns how many tracks were added.
    pub fn merge_remote(&mut self, posts: Vec<RemotePost>) -> usize {
        let before = self.tracks.len();
        self.tracks
            .extend(posts.into_iter().map(LibraryTrack::from_remote));
        self.tracks.len() - before
    }

    /// Apply the outcome of a remote fetch: merge the records on success,
    /// leave the library untouched on failure. The error is handed back for
    /// reporting.
    pub fn apply_fetch_result(
        &mut self,
        result: Result<Vec<RemotePost>, FetchError>,
    ) -> Result<usize, FetchError> {
        result.map(|posts| self.merge_remote(posts))
    }
}
