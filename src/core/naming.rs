// src/core/naming.rs — File names of every pass and working point
//
// Pass i reads the cut record written by pass i-1 for working point i-1,
// so chaining is positional. Pass 0 reads the bootstrap range file instead.

use std::path::PathBuf;

use chrono::Local;

use crate::core::types::{LimitsTable, PassDescriptor, Region};
use crate::infra::config::NamingConfig;

/// Extension of every cut file.
pub const CUT_FILE_EXT: &str = ".root";

/// Date tag value resolved to the current local date.
pub const TODAY_TAG: &str = "today";

/// Resolve the `today` keyword, pass anything else through.
pub fn resolve_date_tag(tag: &str) -> String {
    if tag.eq_ignore_ascii_case(TODAY_TAG) {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        tag.to_string()
    }
}

/// Naming conventions of one optimization campaign.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    region: Region,
    date_tag: String,
    repository_dir: PathBuf,
    working_points: Vec<String>,
    bootstrap_tag: String,
}

impl NamingScheme {
    pub fn new(region: Region, config: &NamingConfig) -> Self {
        Self {
            region,
            date_tag: resolve_date_tag(&config.date_tag),
            repository_dir: PathBuf::from(&config.repository_dir),
            working_points: config.working_points.clone(),
            bootstrap_tag: config.bootstrap_tag.clone(),
        }
    }

    pub fn with_date_tag(mut self, tag: &str) -> Self {
        self.date_tag = resolve_date_tag(tag);
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn date_tag(&self) -> &str {
        &self.date_tag
    }

    pub fn repository_dir(&self) -> &PathBuf {
        &self.repository_dir
    }

    /// Number of passes, one per working point.
    pub fn pass_count(&self) -> usize {
        self.working_points.len()
    }

    pub fn working_point(&self, index: usize) -> &str {
        &self.working_points[index]
    }

    pub fn pass_label(pass: usize) -> String {
        format!("pass{}_", pass + 1)
    }

    /// Range file that seeds the first pass.
    pub fn bootstrap_file(&self) -> String {
        format!(
            "cuts_{}_{}_{}{}",
            self.region, self.bootstrap_tag, self.date_tag, CUT_FILE_EXT
        )
    }

    pub fn output_base(&self, pass: usize) -> String {
        format!(
            "{}{}{}",
            self.region.file_prefix(),
            Self::pass_label(pass),
            self.date_tag
        )
    }

    pub fn training_base(&self, pass: usize) -> String {
        format!(
            "training_results_{}_{}{}",
            self.region,
            Self::pass_label(pass),
            self.date_tag
        )
    }

    /// Cut file written by `pass` for working point `wp`, without directory.
    pub fn pass_output_file(&self, pass: usize, wp: usize) -> String {
        format!(
            "{}_{}{}",
            self.output_base(pass),
            self.working_point(wp),
            CUT_FILE_EXT
        )
    }

    pub fn input_limits_file(&self, pass: usize) -> String {
        if pass == 0 {
            self.bootstrap_file()
        } else {
            self.pass_output_file(pass - 1, pass - 1)
        }
    }

    pub fn pass_descriptor(&self, pass: usize) -> PassDescriptor {
        PassDescriptor {
            index: pass,
            label: Self::pass_label(pass),
            input_limits_file: self.input_limits_file(pass),
            output_base: self.output_base(pass),
            training_base: self.training_base(pass),
            limits_table: LimitsTable::for_pass(pass),
        }
    }

    pub fn pass_descriptors(&self) -> Vec<PassDescriptor> {
        (0..self.pass_count())
            .map(|p| self.pass_descriptor(p))
            .collect()
    }

    /// The pass file that defines working point `wp`: pass `wp`'s output for it.
    pub fn pass_file_path(&self, wp: usize) -> PathBuf {
        self.repository_dir.join(self.pass_output_file(wp, wp))
    }

    pub fn final_file_name(&self, wp: usize) -> String {
        format!(
            "{}{}_{}{}",
            self.region.file_prefix(),
            self.date_tag,
            self.working_point(wp),
            CUT_FILE_EXT
        )
    }

    pub fn final_file_path(&self, wp: usize) -> PathBuf {
        self.repository_dir.join(self.final_file_name(wp))
    }
}
