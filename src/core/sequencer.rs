// src/core/sequencer.rs — Runs the optimization passes in order
//
// Pass i is bounded by the cut record pass i-1 produced for working point
// i-1, so passes cannot be reordered or skipped. The first optimizer error
// ends the campaign.

use std::sync::Arc;

use crate::core::naming::NamingScheme;
use crate::core::types::{PassDescriptor, ProgressEvent};
use crate::infra::errors::CutChainError;
use crate::optimizer::Optimizer;

pub struct PassSequencer {
    naming: NamingScheme,
    optimizer: Arc<dyn Optimizer>,
    on_progress: Option<Box<dyn Fn(ProgressEvent) + Send>>,
}

impl PassSequencer {
    pub fn new(naming: NamingScheme, optimizer: Arc<dyn Optimizer>) -> Self {
        Self {
            naming,
            optimizer,
            on_progress: None,
        }
    }

    pub fn with_progress(mut self, cb: impl Fn(ProgressEvent) + Send + 'static) -> Self {
        self.on_progress = Some(Box::new(cb));
        self
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(ref cb) = self.on_progress {
            cb(event);
        }
    }

    /// Run every pass. Returns the descriptors of the completed passes.
    pub async fn run(&self) -> Result<Vec<PassDescriptor>, CutChainError> {
        let region = self.naming.region();
        let total = self.naming.pass_count();
        let mut completed = Vec::with_capacity(total);

        for pass in self.naming.pass_descriptors() {
            tracing::info!(
                pass = pass.index + 1,
                total,
                limits = %pass.input_limits_file,
                table = %pass.limits_table,
                "Starting optimization pass"
            );
            self.emit(ProgressEvent::PassStart { pass: pass.clone() });

            if let Err(e) = self.optimizer.optimize(&pass, region).await {
                tracing::error!(pass = pass.index + 1, "Optimization pass failed: {}", e);
                return Err(e);
            }

            completed.push(pass);
        }

        Ok(completed)
    }
}
