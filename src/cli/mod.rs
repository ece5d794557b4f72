// src/cli/mod.rs — CLI definition (clap derive)

pub mod plan;
pub mod progress;
pub mod run;
pub mod show;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::types::Region;

#[derive(Parser)]
#[command(
    name = "cutchain",
    about = "Multi-pass cut optimization driver",
    version
)]
pub struct Cli {
    /// Process the endcap region (default: barrel)
    #[arg(long, global = true)]
    pub endcap: bool,

    /// Campaign date tag used in every file name ("today" for the current date)
    #[arg(long, global = true)]
    pub date_tag: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn region(&self) -> Region {
        Region::from_barrel_flag(!self.endcap)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run every optimization pass, then finalize the working points (default)
    Run {
        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Show the passes and file names without running anything
    Plan {
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Copy finished pass files into their final names and print the cuts
    Finalize {
        /// Write a JSON run report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the cut record stored in a cut file
    Show {
        /// Cut file to read
        file: PathBuf,
        /// Record key inside the file
        #[arg(long, default_value = "cuts")]
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_barrel_run() {
        let cli = Cli::parse_from(["cutchain"]);
        assert_eq!(cli.region(), Region::Barrel);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_endcap_flag() {
        let cli = Cli::parse_from(["cutchain", "--endcap", "run"]);
        assert_eq!(cli.region(), Region::Endcap);
        assert!(matches!(cli.command, Some(Commands::Run { report: None })));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cutchain", "plan", "--json", "--date-tag", "today", "--endcap"]);
        assert_eq!(cli.date_tag.as_deref(), Some("today"));
        assert_eq!(cli.region(), Region::Endcap);
        assert!(matches!(cli.command, Some(Commands::Plan { json: true })));
    }

    #[test]
    fn test_show_default_key() {
        let cli = Cli::parse_from(["cutchain", "show", "cut_repository/x.root"]);
        match cli.command {
            Some(Commands::Show { file, key }) => {
                assert_eq!(file, PathBuf::from("cut_repository/x.root"));
                assert_eq!(key, "cuts");
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
