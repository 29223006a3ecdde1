use boxflow_canvas::CanvasError;
use thiserror::Error;

/// Errors surfaced by editor entry points.
#[derive(Debug, Error)]
pub enum EditorError {
  /// A canvas mutation was rejected.
  #[error(transparent)]
  Canvas(#[from] CanvasError),

  /// A drop referenced a template that is not in the palette.
  #[error("unknown template: {0}")]
  UnknownTemplate(String),
}
