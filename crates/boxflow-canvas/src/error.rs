use thiserror::Error;

/// Errors produced by canvas mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
  /// Placement would exceed the box cap. The canvas is left unchanged.
  #[error("max {max} boxes on layer")]
  CapacityExceeded { max: usize },

  /// An operation referenced a box id that is not on the canvas. Gestures
  /// only carry ids of rendered boxes, so this is an internal consistency
  /// violation; callers should surface it rather than swallow it.
  #[error("unknown box: {0}")]
  UnknownBox(String),
}
