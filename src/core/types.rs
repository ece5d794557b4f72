// src/core/types.rs — Core domain types

use serde::{Deserialize, Serialize};

/// Detector region an optimization campaign runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Barrel,
    Endcap,
}

impl Region {
    pub fn from_barrel_flag(use_barrel: bool) -> Self {
        if use_barrel {
            Region::Barrel
        } else {
            Region::Endcap
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Barrel => "barrel",
            Region::Endcap => "endcap",
        }
    }

    pub fn is_barrel(&self) -> bool {
        matches!(self, Region::Barrel)
    }

    /// Prefix shared by every cut file of this region.
    pub fn file_prefix(&self) -> String {
        format!("cuts_{}_", self.as_str())
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Variable-limit table handed to the optimizer. The tables themselves live
/// with the optimizer; only the selection is made here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitsTable {
    NoRestrictions,
    WpAnyV1,
}

impl LimitsTable {
    /// The first pass explores the unrestricted range; later passes are
    /// bounded by the working-point table.
    pub fn for_pass(pass: usize) -> Self {
        if pass == 0 {
            LimitsTable::NoRestrictions
        } else {
            LimitsTable::WpAnyV1
        }
    }

    /// Symbol name of the table on the optimizer side.
    pub fn symbol(&self) -> &'static str {
        match self {
            LimitsTable::NoRestrictions => "limitsNoRestrictions",
            LimitsTable::WpAnyV1 => "limitsWPAnyV1",
        }
    }
}

impl std::fmt::Display for LimitsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Everything one optimization pass needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassDescriptor {
    pub index: usize,
    pub label: String,
    /// Cut file whose record bounds the cut variation of this pass.
    pub input_limits_file: String,
    /// Base name for the cut files this pass writes.
    pub output_base: String,
    /// Base name for training weights and diagnostics.
    pub training_base: String,
    pub limits_table: LimitsTable,
}

/// Workflow milestones, rendered by the CLI as console banners.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    PassStart {
        pass: PassDescriptor,
    },
    FinalizeStart,
    /// Heading printed before a diagnostic shell listing.
    Diagnostic {
        heading: String,
    },
    CopyFailed {
        command: String,
        attempt: u32,
        max_attempts: u32,
    },
    WorkingPointFinal {
        name: String,
        file: String,
    },
    CutsFound {
        printout: String,
    },
    CutsNotFound {
        file: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_flag() {
        assert_eq!(Region::from_barrel_flag(true), Region::Barrel);
        assert_eq!(Region::from_barrel_flag(false), Region::Endcap);
    }

    #[test]
    fn test_region_prefix() {
        assert_eq!(Region::Barrel.file_prefix(), "cuts_barrel_");
        assert_eq!(Region::Endcap.file_prefix(), "cuts_endcap_");
        assert!(Region::Barrel.is_barrel());
        assert!(!Region::Endcap.is_barrel());
    }

    #[test]
    fn test_limits_table_selection() {
        assert_eq!(LimitsTable::for_pass(0), LimitsTable::NoRestrictions);
        for pass in 1..4 {
            assert_eq!(LimitsTable::for_pass(pass), LimitsTable::WpAnyV1);
        }
    }

    #[test]
    fn test_limits_table_symbol() {
        assert_eq!(LimitsTable::NoRestrictions.to_string(), "limitsNoRestrictions");
        assert_eq!(LimitsTable::WpAnyV1.to_string(), "limitsWPAnyV1");
    }

    #[test]
    fn test_region_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Region::Endcap).unwrap(), "\"endcap\"");
    }
}
