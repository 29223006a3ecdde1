use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use boxflow_canvas::{Arrow, BoxNode};

use crate::{ARROWS_KEY, BOXES_KEY, PersistedCanvas, Store, StoreError};

/// In-memory store holding each collection as a serialized JSON string
/// under its storage key, the way browser local storage would.
///
/// Suitable for tests and for embedders that persist elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Raw view of a stored key, mainly for assertions in tests.
  pub fn raw(&self, key: &str) -> Option<String> {
    self.entries.lock().unwrap().get(key).cloned()
  }
}

#[async_trait]
impl Store for MemoryStore {
  async fn load(&self) -> Result<PersistedCanvas, StoreError> {
    let entries = self.entries.lock().unwrap();

    let boxes = match entries.get(BOXES_KEY) {
      Some(raw) => serde_json::from_str(raw)?,
      None => HashMap::new(),
    };
    let arrows = match entries.get(ARROWS_KEY) {
      Some(raw) => serde_json::from_str(raw)?,
      None => Vec::new(),
    };

    Ok(PersistedCanvas { boxes, arrows })
  }

  async fn save_boxes(&self, boxes: &HashMap<String, BoxNode>) -> Result<(), StoreError> {
    let raw = serde_json::to_string(boxes)?;
    self
      .entries
      .lock()
      .unwrap()
      .insert(BOXES_KEY.to_string(), raw);
    Ok(())
  }

  async fn save_arrows(&self, arrows: &[Arrow]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(arrows)?;
    self
      .entries
      .lock()
      .unwrap()
      .insert(ARROWS_KEY.to_string(), raw);
    Ok(())
  }

  async fn clear(&self) -> Result<(), StoreError> {
    let mut entries = self.entries.lock().unwrap();
    entries.remove(BOXES_KEY);
    entries.remove(ARROWS_KEY);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use boxflow_canvas::Position;

  fn sample_boxes() -> HashMap<String, BoxNode> {
    let node = BoxNode {
      id: "print0".to_string(),
      template_id: "print".to_string(),
      title: "Print \"Hello\"".to_string(),
      position: Position::new(15, 40),
    };
    HashMap::from([(node.id.clone(), node)])
  }

  #[tokio::test]
  async fn empty_store_loads_empty_collections() {
    let store = MemoryStore::new();

    let loaded = store.load().await.unwrap();
    assert!(loaded.boxes.is_empty());
    assert!(loaded.arrows.is_empty());
  }

  #[tokio::test]
  async fn saved_state_round_trips() {
    let store = MemoryStore::new();
    let boxes = sample_boxes();
    let arrows = vec![Arrow::between("print0", "request1")];

    store.save_boxes(&boxes).await.unwrap();
    store.save_arrows(&arrows).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.boxes, boxes);
    assert_eq!(loaded.arrows, arrows);
  }

  #[tokio::test]
  async fn clear_removes_both_keys() {
    let store = MemoryStore::new();
    store.save_boxes(&sample_boxes()).await.unwrap();
    store
      .save_arrows(&[Arrow::between("print0", "request1")])
      .await
      .unwrap();

    store.clear().await.unwrap();

    assert_eq!(store.raw(BOXES_KEY), None);
    assert_eq!(store.raw(ARROWS_KEY), None);

    // Clearing an already-empty store is fine.
    store.clear().await.unwrap();
    assert!(store.load().await.unwrap().boxes.is_empty());
  }
}
