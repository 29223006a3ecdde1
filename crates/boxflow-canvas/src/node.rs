use serde::{Deserialize, Serialize};

/// Canvas-relative coordinates of a placed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
  pub left: i32,
  pub top: i32,
}

impl Position {
  pub fn new(left: i32, top: i32) -> Self {
    Self { left, top }
  }
}

/// Offset reported by a drag within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delta {
  pub dx: i32,
  pub dy: i32,
}

impl Delta {
  pub fn new(dx: i32, dy: i32) -> Self {
    Self { dx, dy }
  }
}

/// A box placed on the canvas.
///
/// The id is allocated at placement and is distinct from the palette
/// template id the box was created from. The position is flattened in the
/// serialized form, so a stored box reads
/// `{"id", "template_id", "title", "left", "top"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxNode {
  pub id: String,
  pub template_id: String,
  pub title: String,
  #[serde(flatten)]
  pub position: Position,
}
