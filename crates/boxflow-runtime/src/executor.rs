//! Sequential action execution.
//!
//! [`ActionExecutor::run`] walks a derived template-id sequence and performs
//! each action's effect, awaiting one to completion before starting the
//! next. There is no fan-out and no cancellation: a run finishes, or stops
//! at its first failure with the remaining actions dropped.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::action::Action;
use crate::error::RuntimeError;
use crate::rate::{NbuRateClient, RateSource};

/// Fixed output of the print action.
const PRINT_OUTPUT: &str = "Hello";

/// Executes derived action sequences.
pub struct ActionExecutor {
  rates: Arc<dyn RateSource>,
}

impl ActionExecutor {
  /// Create an executor backed by the NBU rate endpoint.
  pub fn new() -> Self {
    Self::with_rate_source(Arc::new(NbuRateClient::new()))
  }

  /// Create an executor with a custom rate source.
  pub fn with_rate_source(rates: Arc<dyn RateSource>) -> Self {
    Self { rates }
  }

  /// Run a template-id sequence to completion or first failure.
  ///
  /// Returns one output string per executed action, in sequence order.
  #[instrument(name = "executor_run", skip_all, fields(actions = actions.len()))]
  pub async fn run(&self, actions: &[String]) -> Result<Vec<String>, RuntimeError> {
    let run_id = uuid::Uuid::new_v4().to_string();

    info!(run_id = %run_id, actions = actions.len(), "process_started");

    let mut outputs = Vec::with_capacity(actions.len());
    for template_id in actions {
      let output = self.execute(template_id).await.map_err(|e| {
        error!(run_id = %run_id, template_id = %template_id, error = %e, "process_failed");
        e
      })?;

      info!(run_id = %run_id, template_id = %template_id, output = %output, "action_completed");
      outputs.push(output);
    }

    info!(run_id = %run_id, "process_completed");
    Ok(outputs)
  }

  /// Perform a single action's effect.
  async fn execute(&self, template_id: &str) -> Result<String, RuntimeError> {
    match Action::from_template(template_id) {
      Action::Print => Ok(PRINT_OUTPUT.to_string()),
      Action::RateLookup => {
        let rate = self.rates.dollar_rate().await?;
        Ok(format!("1 {} = {} UAH", rate.cc, rate.rate))
      }
    }
  }
}

impl Default for ActionExecutor {
  fn default() -> Self {
    Self::new()
  }
}
