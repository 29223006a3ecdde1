//! Runtime error types.

/// Errors that can occur while executing an action sequence.
///
/// Any of these aborts the remaining actions of the run; effects that
/// already completed are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
  /// The rate request failed (connection or non-2xx status).
  #[error("rate request failed: {0}")]
  Request(#[from] reqwest::Error),

  /// The rate endpoint answered with a body the executor cannot use
  /// (malformed JSON, or no rows to read `cc`/`rate` from).
  #[error("invalid rate response: {message}")]
  InvalidResponse { message: String },
}
