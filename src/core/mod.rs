// src/core/mod.rs — Campaign workflow: naming, passes, finalization

pub mod campaign;
pub mod finalizer;
pub mod naming;
pub mod report;
pub mod retry;
pub mod sequencer;
pub mod types;
