use std::collections::HashMap;

use crate::edge::Arrow;
use crate::error::CanvasError;
use crate::node::{BoxNode, Delta, Position};
use crate::sequence;

/// Maximum number of boxes on the canvas at once.
pub const MAX_BOXES: usize = 5;

/// Outcome of a link attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
  /// An arrow was appended and the active selection cleared.
  Linked(Arrow),
  /// Nothing changed: no active box, a self-link, or the active box already
  /// starts an arrow.
  NoOp,
}

/// The canvas graph: placed boxes, arrows between them, and the pending
/// arrow source.
///
/// All mutation goes through `&mut self` on a single logical thread; the
/// collaborators (renderer, store, runtime) never mutate the graph
/// concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
  boxes: HashMap<String, BoxNode>,
  arrows: Vec<Arrow>,
  active_box: Option<String>,
}

impl Canvas {
  pub fn new() -> Self {
    Self::default()
  }

  /// Rebuild a canvas from persisted collections. The active selection is
  /// not persisted and always starts cleared.
  pub fn from_parts(boxes: HashMap<String, BoxNode>, arrows: Vec<Arrow>) -> Self {
    Self {
      boxes,
      arrows,
      active_box: None,
    }
  }

  pub fn boxes(&self) -> &HashMap<String, BoxNode> {
    &self.boxes
  }

  pub fn arrows(&self) -> &[Arrow] {
    &self.arrows
  }

  pub fn active_box(&self) -> Option<&str> {
    self.active_box.as_deref()
  }

  /// Place a new box dropped from the palette; returns its allocated id.
  pub fn place_box(
    &mut self,
    template_id: &str,
    title: &str,
    position: Position,
  ) -> Result<String, CanvasError> {
    if self.boxes.len() == MAX_BOXES {
      return Err(CanvasError::CapacityExceeded { max: MAX_BOXES });
    }

    let id = allocate_id(template_id, self.boxes.len());
    self.boxes.insert(
      id.clone(),
      BoxNode {
        id: id.clone(),
        template_id: template_id.to_string(),
        title: title.to_string(),
        position,
      },
    );

    Ok(id)
  }

  /// Move a placed box by a drag delta. Positions are not clamped.
  pub fn move_box(&mut self, box_id: &str, delta: Delta) -> Result<(), CanvasError> {
    let node = self
      .boxes
      .get_mut(box_id)
      .ok_or_else(|| CanvasError::UnknownBox(box_id.to_string()))?;

    node.position.left += delta.dx;
    node.position.top += delta.dy;
    Ok(())
  }

  /// Whether a box already starts an arrow.
  pub fn is_blocked(&self, box_id: &str) -> bool {
    self.arrows.iter().any(|arrow| arrow.from == box_id)
  }

  /// Select or deselect the pending arrow source.
  ///
  /// A blocked box can never become active: passing one always clears the
  /// selection, whatever was active before. Passing `None` clears
  /// unconditionally. Otherwise this toggles: select when nothing is
  /// active, clear when something is (selecting a second box deactivates
  /// rather than switching).
  pub fn toggle_active(&mut self, box_id: Option<&str>) {
    if let Some(id) = box_id {
      if self.is_blocked(id) {
        self.active_box = None;
        return;
      }
    }

    self.active_box = match (&self.active_box, box_id) {
      (None, Some(id)) => Some(id.to_string()),
      _ => None,
    };
  }

  /// Attempt to close an arrow from the active box to `target`.
  ///
  /// A no-op when nothing is active, when the target is the active box
  /// itself, or when the active box already starts an arrow. On success the
  /// arrow is appended and the active selection cleared.
  pub fn link_active_to(&mut self, target: &str) -> LinkOutcome {
    let Some(active) = self.active_box.clone() else {
      return LinkOutcome::NoOp;
    };
    if active == target || self.is_blocked(&active) {
      return LinkOutcome::NoOp;
    }

    let arrow = Arrow::between(active, target);
    self.arrows.push(arrow.clone());
    self.active_box = None;
    LinkOutcome::Linked(arrow)
  }

  /// Derive the executable action sequence from the arrow list.
  ///
  /// This is derived state, recomputed on every call; the arrow list is
  /// the single source of truth.
  pub fn action_sequence(&self) -> Vec<String> {
    sequence::derive(&self.arrows)
  }

  /// Remove every box, arrow, and the active selection.
  pub fn clear(&mut self) {
    self.boxes.clear();
    self.arrows.clear();
    self.active_box = None;
  }
}

/// Allocate a box id in the palette scheme: template id plus the current
/// box count. Ids are unique within a session (the count never decreases
/// between clears) but not across clears. Swapping this for a monotonic
/// counter or a generated id must not touch the graph logic above.
fn allocate_id(template_id: &str, count: usize) -> String {
  format!("{}{}", template_id, count)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn place(canvas: &mut Canvas, template_id: &str) -> String {
    canvas
      .place_box(template_id, "title", Position::new(0, 0))
      .unwrap()
  }

  #[test]
  fn placement_allocates_template_plus_count_ids() {
    let mut canvas = Canvas::new();

    assert_eq!(place(&mut canvas, "print"), "print0");
    assert_eq!(place(&mut canvas, "request"), "request1");
    assert_eq!(place(&mut canvas, "print"), "print2");
  }

  #[test]
  fn sixth_placement_is_rejected_and_leaves_state_unchanged() {
    let mut canvas = Canvas::new();
    for _ in 0..MAX_BOXES {
      place(&mut canvas, "print");
    }

    let result = canvas.place_box("print", "title", Position::new(10, 10));
    assert_eq!(result, Err(CanvasError::CapacityExceeded { max: 5 }));
    assert_eq!(canvas.boxes().len(), MAX_BOXES);
  }

  #[test]
  fn move_applies_delta_without_clamping() {
    let mut canvas = Canvas::new();
    let id = canvas
      .place_box("print", "title", Position::new(10, 20))
      .unwrap();

    canvas.move_box(&id, Delta::new(-40, 5)).unwrap();

    let position = canvas.boxes()[&id].position;
    assert_eq!(position, Position::new(-30, 25));
  }

  #[test]
  fn move_of_unknown_box_errors() {
    let mut canvas = Canvas::new();
    assert_eq!(
      canvas.move_box("ghost", Delta::new(1, 1)),
      Err(CanvasError::UnknownBox("ghost".to_string()))
    );
  }

  #[test]
  fn double_toggle_clears_the_selection() {
    let mut canvas = Canvas::new();
    let id = place(&mut canvas, "print");

    canvas.toggle_active(Some(&id));
    assert_eq!(canvas.active_box(), Some(id.as_str()));

    canvas.toggle_active(Some(&id));
    assert_eq!(canvas.active_box(), None);
  }

  #[test]
  fn toggling_a_second_box_deactivates_instead_of_switching() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");

    canvas.toggle_active(Some(&a));
    canvas.toggle_active(Some(&b));
    assert_eq!(canvas.active_box(), None);
  }

  #[test]
  fn toggle_none_clears_unconditionally() {
    let mut canvas = Canvas::new();
    let id = place(&mut canvas, "print");

    canvas.toggle_active(Some(&id));
    canvas.toggle_active(None);
    assert_eq!(canvas.active_box(), None);
  }

  #[test]
  fn toggling_a_blocked_box_always_clears() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");

    canvas.toggle_active(Some(&a));
    canvas.link_active_to(&b);
    assert!(canvas.is_blocked(&a));

    // Regardless of what is active at the time.
    canvas.toggle_active(Some(&a));
    assert_eq!(canvas.active_box(), None);

    canvas.toggle_active(Some(&b));
    assert_eq!(canvas.active_box(), Some(b.as_str()));
    canvas.toggle_active(Some(&a));
    assert_eq!(canvas.active_box(), None);
  }

  #[test]
  fn link_appends_arrow_and_clears_selection() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");

    canvas.toggle_active(Some(&a));
    let outcome = canvas.link_active_to(&b);

    assert_eq!(
      outcome,
      LinkOutcome::Linked(Arrow::between("print0", "request1"))
    );
    assert_eq!(canvas.arrows().len(), 1);
    assert_eq!(canvas.active_box(), None);
  }

  #[test]
  fn link_without_active_box_is_a_noop() {
    let mut canvas = Canvas::new();
    let b = place(&mut canvas, "request");

    assert_eq!(canvas.link_active_to(&b), LinkOutcome::NoOp);
    assert!(canvas.arrows().is_empty());
  }

  #[test]
  fn self_link_is_a_noop_and_keeps_the_selection() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");

    canvas.toggle_active(Some(&a));
    assert_eq!(canvas.link_active_to(&a), LinkOutcome::NoOp);
    assert_eq!(canvas.active_box(), Some(a.as_str()));
  }

  #[test]
  fn a_box_never_starts_two_arrows() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");
    let c = place(&mut canvas, "print");

    canvas.toggle_active(Some(&a));
    canvas.link_active_to(&b);

    // A blocked source cannot be re-activated, so no second arrow can start.
    canvas.toggle_active(Some(&a));
    assert_eq!(canvas.link_active_to(&c), LinkOutcome::NoOp);

    let from_a = canvas.arrows().iter().filter(|x| x.from == a).count();
    assert_eq!(from_a, 1);
  }

  #[test]
  fn clear_empties_everything_and_is_idempotent() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");
    canvas.toggle_active(Some(&a));
    canvas.link_active_to(&b);
    canvas.toggle_active(Some(&b));

    canvas.clear();
    canvas.clear();

    assert!(canvas.boxes().is_empty());
    assert!(canvas.arrows().is_empty());
    assert_eq!(canvas.active_box(), None);
    assert!(canvas.action_sequence().is_empty());
  }

  #[test]
  fn action_sequence_tracks_the_arrow_list() {
    let mut canvas = Canvas::new();
    let a = place(&mut canvas, "print");
    let b = place(&mut canvas, "request");
    let c = place(&mut canvas, "print");

    assert!(canvas.action_sequence().is_empty());

    canvas.toggle_active(Some(&a));
    canvas.link_active_to(&b);
    assert_eq!(canvas.action_sequence(), vec!["print", "request"]);

    canvas.toggle_active(Some(&b));
    canvas.link_active_to(&c);
    assert_eq!(canvas.action_sequence(), vec!["print", "request", "print"]);
  }
}
