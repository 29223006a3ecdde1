//! Action-sequence derivation.
//!
//! The executable sequence comes from the arrow list alone: each arrow in
//! insertion order contributes its `from` box's template id, and the final
//! arrow additionally contributes its `to`. Box positions play no part.
//!
//! Cycles are not rejected by the model. Derivation walks the arrow *list*,
//! never the graph, so a cyclic arrow set still derives a finite sequence in
//! insertion order.

use crate::edge::Arrow;

/// Derive the template-id sequence for execution.
pub fn derive(arrows: &[Arrow]) -> Vec<String> {
  let mut actions = Vec::with_capacity(arrows.len() + 1);

  for arrow in arrows {
    actions.push(template_of(&arrow.from));
  }
  if let Some(last) = arrows.last() {
    actions.push(template_of(&last.to));
  }

  actions
}

/// Recover a template id from a box id by stripping the trailing count
/// digit appended at allocation. Counts stay single-digit while the box cap
/// holds, so dropping one character is exact.
pub fn template_of(box_id: &str) -> String {
  let mut template_id = box_id.to_string();
  template_id.pop();
  template_id
}
