//! Boxflow Store
//!
//! This crate provides persistence for the boxflow canvas. The editor saves
//! boxes and arrows through the [`Store`] trait after every mutation;
//! backends decide where the two collections live.
//!
//! The stored layout mirrors the editor's two storage keys:
//! - `boxes`: JSON object mapping box id → box
//! - `arrows`: JSON array of arrows
//!
//! A key is only present while its collection is non-empty; [`Store::clear`]
//! removes both. On load, a missing key is an empty collection, not an
//! error.

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use std::collections::HashMap;

use async_trait::async_trait;
use boxflow_canvas::{Arrow, BoxNode};
use serde::{Deserialize, Serialize};

/// Storage key for the box collection.
pub const BOXES_KEY: &str = "boxes";

/// Storage key for the arrow collection.
pub const ARROWS_KEY: &str = "arrows";

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// Stored state could not be serialized or deserialized.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  /// The backing medium failed.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Canvas state as loaded from a store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedCanvas {
  pub boxes: HashMap<String, BoxNode>,
  pub arrows: Vec<Arrow>,
}

/// Storage trait for canvas state.
#[async_trait]
pub trait Store: Send + Sync {
  /// Load both collections. Missing keys load as empty collections.
  async fn load(&self) -> Result<PersistedCanvas, StoreError>;

  /// Persist the box collection.
  async fn save_boxes(&self, boxes: &HashMap<String, BoxNode>) -> Result<(), StoreError>;

  /// Persist the arrow collection.
  async fn save_arrows(&self, arrows: &[Arrow]) -> Result<(), StoreError>;

  /// Remove both stored collections.
  async fn clear(&self) -> Result<(), StoreError>;
}
