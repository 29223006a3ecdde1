use std::collections::HashMap;
use std::sync::Arc;

use boxflow_canvas::{Arrow, BoxNode, Canvas, Delta, LinkOutcome, Position, builtin_template};
use boxflow_runtime::{ActionExecutor, RuntimeError};
use boxflow_store::{Store, StoreError};
use tracing::{info, warn};

use crate::error::EditorError;

/// The editor: canvas state plus its persistence and execution
/// collaborators.
///
/// Mutating entry points save the affected collection before returning.
/// Saves are fire-and-forget: a failed write is logged and never rolls
/// back the in-memory mutation.
pub struct Editor {
  canvas: Canvas,
  store: Arc<dyn Store>,
  executor: ActionExecutor,
}

impl Editor {
  /// Restore an editor from persisted state.
  ///
  /// Missing stored keys restore as empty collections. The active selection
  /// is not persisted and starts cleared.
  pub async fn load(store: Arc<dyn Store>, executor: ActionExecutor) -> Result<Self, StoreError> {
    let persisted = store.load().await?;

    info!(
      boxes = persisted.boxes.len(),
      arrows = persisted.arrows.len(),
      "editor_loaded"
    );

    Ok(Self {
      canvas: Canvas::from_parts(persisted.boxes, persisted.arrows),
      store,
      executor,
    })
  }

  pub fn boxes(&self) -> &HashMap<String, BoxNode> {
    self.canvas.boxes()
  }

  pub fn arrows(&self) -> &[Arrow] {
    self.canvas.arrows()
  }

  pub fn active_box(&self) -> Option<&str> {
    self.canvas.active_box()
  }

  /// The action sequence the current arrows derive.
  pub fn actions(&self) -> Vec<String> {
    self.canvas.action_sequence()
  }

  /// Handle a palette drop: place a new box at the drop position.
  pub async fn on_drop(
    &mut self,
    template_id: &str,
    position: Position,
  ) -> Result<String, EditorError> {
    let template = builtin_template(template_id)
      .ok_or_else(|| EditorError::UnknownTemplate(template_id.to_string()))?;

    let box_id = self.canvas.place_box(&template.id, &template.title, position)?;

    info!(box_id = %box_id, template_id = %template_id, "box_placed");
    self.save_boxes().await;
    Ok(box_id)
  }

  /// Handle a drag within the canvas: move an existing box by a delta.
  pub async fn on_move(&mut self, box_id: &str, delta: Delta) -> Result<(), EditorError> {
    self.canvas.move_box(box_id, delta)?;
    self.save_boxes().await;
    Ok(())
  }

  /// Handle a single click on a box: attempt to close an arrow from the
  /// active box to it. Selection is not touched here; that is the
  /// double-click gesture.
  pub async fn on_click(&mut self, box_id: &str) -> LinkOutcome {
    let outcome = self.canvas.link_active_to(box_id);

    if let LinkOutcome::Linked(arrow) = &outcome {
      info!(arrow_id = %arrow.id, "arrow_linked");
      self.save_arrows().await;
    }

    outcome
  }

  /// Handle a double click on a box: toggle the active selection.
  pub fn on_double_click(&mut self, box_id: &str) {
    self.canvas.toggle_active(Some(box_id));
  }

  /// Handle the process request: run the derived sequence to completion or
  /// first failure. Returns one output per executed action.
  pub async fn on_process(&self) -> Result<Vec<String>, RuntimeError> {
    self.executor.run(&self.canvas.action_sequence()).await
  }

  /// Handle clear-all: empty the canvas and erase stored state.
  pub async fn on_clear_all(&mut self) {
    self.canvas.clear();

    if let Err(e) = self.store.clear().await {
      warn!(error = %e, "store_clear_failed");
    }
    info!("canvas_cleared");
  }

  /// Persist the box collection. A key is only written while its
  /// collection is non-empty.
  async fn save_boxes(&self) {
    if self.canvas.boxes().is_empty() {
      return;
    }
    if let Err(e) = self.store.save_boxes(self.canvas.boxes()).await {
      warn!(error = %e, "save_boxes_failed");
    }
  }

  async fn save_arrows(&self) {
    if self.canvas.arrows().is_empty() {
      return;
    }
    if let Err(e) = self.store.save_arrows(self.canvas.arrows()).await {
      warn!(error = %e, "save_arrows_failed");
    }
  }
}
