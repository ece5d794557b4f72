// src/lib.rs — Library root for cutchain

pub mod cli;
pub mod core;
pub mod cuts;
pub mod infra;
pub mod optimizer;
