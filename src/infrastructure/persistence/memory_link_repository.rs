//! Process-local implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// Stored link plus its insertion sequence, used to order links created
/// within the same clock tick.
#[derive(Debug, Clone)]
struct StoredLink {
    seq: u64,
    link: Link,
}

/// In-memory link repository backed by a [`DashMap`].
///
/// The map's entry API gives an atomic check-and-insert for codes, and the
/// per-shard write guard held by `get_mut` makes each click increment a
/// single read-modify-write. Data lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    storage: DashMap<String, StoredLink>,
    next_seq: AtomicU64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if no links are stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, StoreError> {
        match self.storage.entry(new_link.code) {
            Entry::Occupied(occupied) => Err(StoreError::DuplicateCode(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                let link = Link::new(
                    vacant.key().clone(),
                    new_link.target_url,
                    0,
                    None,
                    Utc::now(),
                );
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                vacant.insert(StoredLink {
                    seq,
                    link: link.clone(),
                });
                Ok(link)
            }
        }
    }

    async fn list(&self) -> Result<Vec<Link>, StoreError> {
        let mut stored: Vec<StoredLink> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();

        stored.sort_by(|a, b| {
            (b.link.created_at, b.seq).cmp(&(a.link.created_at, a.seq))
        });

        Ok(stored.into_iter().map(|s| s.link).collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.storage.get(code).map(|entry| entry.link.clone()))
    }

    async fn delete_by_code(&self, code: &str) -> Result<Option<Link>, StoreError> {
        Ok(self.storage.remove(code).map(|(_, stored)| stored.link))
    }

    async fn increment_click(&self, code: &str) -> Result<Option<String>, StoreError> {
        let Some(mut entry) = self.storage.get_mut(code) else {
            return Ok(None);
        };

        entry.link.total_clicks += 1;
        entry.link.last_clicked = Some(Utc::now());

        Ok(Some(entry.link.target_url.clone()))
    }
}
