//! Boxflow Editor
//!
//! The event-driven controller of the boxflow editor. [`Editor`] owns the
//! canvas graph and glues it to its collaborators:
//!
//! - the renderer calls one entry point per gesture (`on_drop`, `on_move`,
//!   `on_click`, `on_double_click`, `on_process`, `on_clear_all`) and reads
//!   state back through the accessors
//! - the store receives the affected collection after every mutation
//! - the action executor consumes the derived sequence on process
//!
//! All state lives in the editor and is passed in explicitly; there are no
//! ambient globals, and persistence is an explicit save-on-mutation call.

mod editor;
mod error;

pub use editor::Editor;
pub use error::EditorError;
