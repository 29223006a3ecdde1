use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use boxflow_canvas::{Arrow, BoxNode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;

use crate::{PersistedCanvas, Store, StoreError};

const BOXES_FILE: &str = "boxes.json";
const ARROWS_FILE: &str = "arrows.json";

/// Filesystem-backed store, one JSON file per storage key:
///
/// ```text
/// {root}/
/// ├── boxes.json
/// └── arrows.json
/// ```
///
/// The root directory is created on the first write. A missing file loads
/// as an empty collection; clear deletes both files.
pub struct FsStore {
  root: PathBuf,
}

impl FsStore {
  /// Create a store rooted at the given directory.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Get the root directory of the store.
  pub fn root(&self) -> &Path {
    &self.root
  }

  async fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>, StoreError> {
    match fs::read_to_string(self.root.join(file)).await {
      Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(e.into()),
    }
  }

  async fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
    fs::create_dir_all(&self.root).await?;
    let content = serde_json::to_string(value)?;
    fs::write(self.root.join(file), content).await?;
    Ok(())
  }

  async fn remove_if_present(&self, file: &str) -> Result<(), StoreError> {
    match fs::remove_file(self.root.join(file)).await {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

#[async_trait]
impl Store for FsStore {
  async fn load(&self) -> Result<PersistedCanvas, StoreError> {
    let boxes = self.read_json(BOXES_FILE).await?.unwrap_or_default();
    let arrows = self.read_json(ARROWS_FILE).await?.unwrap_or_default();
    Ok(PersistedCanvas { boxes, arrows })
  }

  async fn save_boxes(&self, boxes: &HashMap<String, BoxNode>) -> Result<(), StoreError> {
    self.write_json(BOXES_FILE, &boxes).await
  }

  async fn save_arrows(&self, arrows: &[Arrow]) -> Result<(), StoreError> {
    self.write_json(ARROWS_FILE, &arrows).await
  }

  async fn clear(&self) -> Result<(), StoreError> {
    self.remove_if_present(BOXES_FILE).await?;
    self.remove_if_present(ARROWS_FILE).await?;
    Ok(())
  }
}
