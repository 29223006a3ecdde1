//! Boxflow Runtime
//!
//! Sequential execution of derived action sequences. The canvas derives an
//! ordered list of template ids from its arrows; this crate maps each id
//! onto an [`Action`] and performs its effect, awaiting one action to
//! completion before starting the next.
//!
//! Failure semantics: the first failed action aborts the remainder of the
//! sequence. No retries, no rollback of completed effects, no cancellation.

mod action;
mod error;
mod executor;
mod rate;

pub use action::Action;
pub use error::RuntimeError;
pub use executor::ActionExecutor;
pub use rate::{NBU_RATE_URL, NbuRateClient, Rate, RateSource};
