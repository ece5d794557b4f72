// src/optimizer/mod.rs — The cut optimizer seam
//
// The optimizer trains on the pass's input range and writes one cut file per
// working point, named from the pass's output base. It is always external.

pub mod command;

use async_trait::async_trait;

use crate::core::types::{PassDescriptor, Region};
use crate::infra::errors::CutChainError;

pub use command::CommandOptimizer;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Optimizer: Send + Sync {
    /// Run one pass to completion. Any error ends the campaign.
    async fn optimize(&self, pass: &PassDescriptor, region: Region) -> Result<(), CutChainError>;
}
