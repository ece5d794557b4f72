// src/cuts/mod.rs — Cut records and the files that hold them

pub mod archive;

use serde::{Deserialize, Serialize};

pub use archive::{CutArchive, JsonCutArchive};

/// Upper threshold on one selection variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutValue {
    pub name: String,
    pub max: f64,
}

/// A full selection: one threshold per variable, in variable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarCut {
    pub variables: Vec<CutValue>,
}

impl VarCut {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cut(mut self, name: impl Into<String>, max: f64) -> Self {
        self.variables.push(CutValue {
            name: name.into(),
            max,
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.iter().find(|c| c.name == name).map(|c| c.max)
    }

    /// Human-readable dump of all thresholds.
    pub fn print_cuts(&self) -> String {
        let width = self
            .variables
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);

        let mut out = String::from("Cut values:\n");
        for cut in &self.variables {
            out.push_str(&format!("  {:<width$} < {:.6}\n", cut.name, cut.max, width = width));
        }
        out
    }
}
