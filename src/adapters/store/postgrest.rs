//! PostgREST adapter (Supabase REST API). Implements DataStore over reqwest.
//!
//! Every call is a single GET against `/rest/v1/<table>` authenticated with the
//! service key; filtering, ordering and the profiles join happen server-side.

use crate::domain::{DomainError, Post, PostStatus, Profile};
use crate::ports::DataStore;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const POSTS_TABLE: &str = "posts";
const PROFILES_TABLE: &str = "profiles";

/// Read-only client for the posts/profiles tables.
pub struct PostgrestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PostgrestStore {
    /// # Arguments
    /// * `base_url` - Project URL (e.g. "https://xyz.supabase.co"), without `/rest/v1`
    /// * `api_key` - Service role key; sent as both `apikey` and bearer token
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, DomainError> {
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::Store(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(table, status = %status, body = %text, "store returned error");
            return Err(DomainError::Store(format!(
                "{} query failed with {}: {}",
                table,
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| DomainError::Store(format!("Failed to parse {} rows: {}", table, e)))?;
        debug!(table, rows = rows.len(), "store query complete");
        Ok(rows)
    }
}

#[derive(Deserialize)]
struct ProfileRow {
    id: String,
    #[serde(default)]
    telegram_id: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct PostRow {
    id: String,
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    likes_count: Option<i64>,
    status: PostStatus,
    created_at: DateTime<Utc>,
    user_id: String,
    /// Embedded resource from `select=*,profiles(username)`; null when the join misses.
    #[serde(default)]
    profiles: Option<AuthorRow>,
}

#[derive(Deserialize)]
struct AuthorRow {
    #[serde(default)]
    username: Option<String>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            telegram_id: row.telegram_id,
            username: row.username.unwrap_or_default(),
            full_name: row.full_name,
            created_at: row.created_at,
        }
    }
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content.unwrap_or_default(),
            likes_count: row.likes_count.unwrap_or(0),
            status: row.status,
            created_at: row.created_at,
            author_id: row.user_id,
            author_username: row.profiles.and_then(|a| a.username),
        }
    }
}

#[async_trait::async_trait]
impl DataStore for PostgrestStore {
    async fn recent_published_posts(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        let rows: Vec<PostRow> = self
            .select(
                POSTS_TABLE,
                &[
                    ("select", "*,profiles(username)".to_string()),
                    ("status", "eq.published".to_string()),
                    ("order", "created_at.desc".to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_profile_by_telegram_id(
        &self,
        telegram_id: &str,
    ) -> Result<Option<Profile>, DomainError> {
        let rows: Vec<ProfileRow> = self
            .select(
                PROFILES_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("telegram_id", format!("eq.{}", telegram_id)),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(rows.into_iter().next().map(Profile::from))
    }

    async fn posts_by_author(&self, profile_id: &str) -> Result<Vec<Post>, DomainError> {
        let rows: Vec<PostRow> = self
            .select(
                POSTS_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("user_id", format!("eq.{}", profile_id)),
                ],
            )
            .await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }
}
