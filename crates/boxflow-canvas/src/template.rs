use serde::{Deserialize, Serialize};

/// A palette entry the renderer offers for dragging onto the canvas.
///
/// The template id determines the action a placed box performs when the
/// canvas is processed; the title is copied onto the box at placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxTemplate {
  pub id: String,
  pub title: String,
}

impl BoxTemplate {
  fn new(id: &str, title: &str) -> Self {
    Self {
      id: id.to_string(),
      title: title.to_string(),
    }
  }
}

/// The built-in palette.
pub fn builtin_templates() -> Vec<BoxTemplate> {
  vec![
    BoxTemplate::new("print", "Print \"Hello\""),
    BoxTemplate::new("request", "Request exchange rate and print"),
  ]
}

/// Look up a built-in template by id.
pub fn builtin_template(id: &str) -> Option<BoxTemplate> {
  builtin_templates().into_iter().find(|t| t.id == id)
}
