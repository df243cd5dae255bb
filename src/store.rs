//! Durable, insertion-ordered review collection kept under a single storage key.
use leptos::logging::{log, warn};
use thiserror::Error;

use crate::models::review::Review;
use crate::storage::{KeyValueStorage, StorageError};

pub const DEFAULT_STORAGE_KEY: &str = "snowDesignReviews";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to serialize reviews: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct ReviewStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ReviewStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        ReviewStore {
            storage,
            key: key.into(),
        }
    }

    /// All stored reviews in insertion order.
    ///
    /// Missing, unreadable or malformed data reads as an empty collection.
    pub fn list(&self) -> Vec<Review> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("[STORE] Could not read '{}': {}", self.key, err);
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Review>>(&raw) {
            Ok(reviews) => reviews,
            Err(err) => {
                warn!("[STORE] Ignoring malformed reviews under '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    /// Appends `review` and rewrites the collection.
    pub fn save(&self, review: &Review) -> Result<(), StoreError> {
        let mut reviews = self.list();
        reviews.push(review.clone());
        self.write(&reviews)?;
        log!("[STORE] Saved review, {} stored", reviews.len());
        Ok(())
    }

    /// Removes every entry matching `review`; returns how many were removed.
    pub fn delete(&self, review: &Review) -> Result<usize, StoreError> {
        let mut reviews = self.list();
        let before = reviews.len();
        reviews.retain(|stored| !stored.matches(review));
        let removed = before - reviews.len();
        if removed > 0 {
            self.write(&reviews)?;
        }
        log!("[STORE] Deleted {} review(s), {} remain", removed, reviews.len());
        Ok(removed)
    }

    fn write(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(reviews)?;
        self.storage.set_item(&self.key, &raw)?;
        Ok(())
    }
}
