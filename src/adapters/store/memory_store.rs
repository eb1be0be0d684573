//! In-memory DataStore for tests.
//!
//! Applies the same filtering, ordering and join rules as the PostgREST queries.

use crate::domain::{DomainError, Post, PostStatus, Profile};
use crate::ports::DataStore;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct InMemoryStore {
    profiles: Vec<Profile>,
    posts: Vec<Post>,
    fail: bool,
    queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn with_post(mut self, post: Post) -> Self {
        self.posts.push(post);
        self
    }

    /// Every query returns `DomainError::Store`.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of queries issued so far, failed ones included.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin_query(&self) -> Result<(), DomainError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DomainError::Store("in-memory store set to fail".into()));
        }
        Ok(())
    }

    fn username_of(&self, profile_id: &str) -> Option<String> {
        self.profiles
            .iter()
            .find(|p| p.id == profile_id)
            .map(|p| p.username.clone())
    }
}

#[async_trait::async_trait]
impl DataStore for InMemoryStore {
    async fn recent_published_posts(&self, limit: usize) -> Result<Vec<Post>, DomainError> {
        self.begin_query()?;
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts.truncate(limit);
        for post in &mut posts {
            post.author_username = self.username_of(&post.author_id);
        }
        Ok(posts)
    }

    async fn find_profile_by_telegram_id(
        &self,
        telegram_id: &str,
    ) -> Result<Option<Profile>, DomainError> {
        self.begin_query()?;
        Ok(self
            .profiles
            .iter()
            .find(|p| p.telegram_id.as_deref() == Some(telegram_id))
            .cloned())
    }

    async fn posts_by_author(&self, profile_id: &str) -> Result<Vec<Post>, DomainError> {
        self.begin_query()?;
        Ok(self
            .posts
            .iter()
            .filter(|p| p.author_id == profile_id)
            .cloned()
            .collect())
    }
}
