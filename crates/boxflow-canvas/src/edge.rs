use serde::{Deserialize, Serialize};

/// A directional arrow between two placed boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrow {
  pub id: String,
  pub from: String,
  pub to: String,
}

impl Arrow {
  /// Build an arrow between two box ids. The id is always `"<from>-<to>"`.
  pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
    let from = from.into();
    let to = to.into();
    Self {
      id: format!("{}-{}", from, to),
      from,
      to,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn arrow_id_is_deterministic() {
    let arrow = Arrow::between("print0", "request1");
    assert_eq!(arrow.id, "print0-request1");
    assert_eq!(arrow, Arrow::between("print0", "request1"));
  }
}
