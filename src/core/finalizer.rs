// src/core/finalizer.rs — Publishes the working points under their final names
//
// Working point i is defined by pass i. Its pass file is copied to the
// canonical name (no pass label) and the stored cut record is printed back.
// A copy that keeps failing is reported and skipped over, never fatal.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;

use crate::core::naming::NamingScheme;
use crate::core::retry::{run_with_retry, RetryPolicy};
use crate::core::types::ProgressEvent;
use crate::cuts::{CutArchive, VarCut};
use crate::infra::config::FinalizeConfig;
use crate::infra::shell::{quote, ShellRunner};

/// What happened to one working point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkingPointOutcome {
    pub name: String,
    pub pass_file: PathBuf,
    pub final_file: PathBuf,
    pub copy_attempts: u32,
    pub copied: bool,
    pub cuts: Option<VarCut>,
}

pub struct Finalizer {
    naming: NamingScheme,
    shell: Arc<dyn ShellRunner>,
    archive: Arc<dyn CutArchive>,
    policy: RetryPolicy,
    record_key: String,
    diagnostics: bool,
    on_progress: Option<Box<dyn Fn(ProgressEvent) + Send>>,
}

impl Finalizer {
    pub fn new(
        naming: NamingScheme,
        shell: Arc<dyn ShellRunner>,
        archive: Arc<dyn CutArchive>,
        config: &FinalizeConfig,
    ) -> Self {
        Self {
            naming,
            shell,
            archive,
            policy: RetryPolicy::from(config),
            record_key: config.record_key.clone(),
            diagnostics: true,
            on_progress: None,
        }
    }

    /// Toggle the `pwd` / `ls` listings printed before copying.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
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

    pub async fn run(&self) -> Vec<WorkingPointOutcome> {
        self.emit(ProgressEvent::FinalizeStart);

        if self.diagnostics {
            self.print_diagnostics().await;
        }

        let mut outcomes = Vec::with_capacity(self.naming.pass_count());
        for wp in 0..self.naming.pass_count() {
            outcomes.push(self.finalize_working_point(wp).await);
        }

        let failed = outcomes.iter().filter(|o| !o.copied).count();
        if failed > 0 {
            tracing::warn!(
                failed,
                total = outcomes.len(),
                "Some working points could not be copied into place"
            );
        }
        outcomes
    }

    async fn print_diagnostics(&self) {
        let repo = self.naming.repository_dir().display().to_string();
        let listings = [
            ("Current path:".to_string(), "pwd".to_string()),
            ("Content of this dir:".to_string(), "ls -rtl".to_string()),
            (
                format!("Content of {repo} subdir"),
                format!("ls -rtl {}", quote(&format!("{repo}/"))),
            ),
        ];

        for (heading, command) in listings {
            self.emit(ProgressEvent::Diagnostic { heading });
            // Listings are informational only.
            if let Err(e) = self.shell.run(&command).await {
                tracing::debug!("Diagnostic `{}` did not run: {}", command, e);
            }
        }
    }

    async fn finalize_working_point(&self, wp: usize) -> WorkingPointOutcome {
        let name = self.naming.working_point(wp).to_string();
        let pass_file = self.naming.pass_file_path(wp);
        let final_file = self.naming.final_file_path(wp);
        let command = format!(
            "cp {} {}",
            quote(&pass_file.display().to_string()),
            quote(&final_file.display().to_string())
        );

        let max_attempts = self.policy.max_attempts;
        let outcome = run_with_retry(self.shell.as_ref(), &command, &self.policy, |attempt| {
            self.emit(ProgressEvent::CopyFailed {
                command: command.clone(),
                attempt,
                max_attempts,
            });
        })
        .await;

        self.emit(ProgressEvent::WorkingPointFinal {
            name: name.clone(),
            file: final_file.display().to_string(),
        });

        let cuts = match self.archive.read_record(&final_file, &self.record_key) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(working_point = %name, "{}", e);
                None
            }
        };

        match &cuts {
            Some(cut) => self.emit(ProgressEvent::CutsFound {
                printout: cut.print_cuts(),
            }),
            None => self.emit(ProgressEvent::CutsNotFound {
                file: final_file.display().to_string(),
            }),
        }

        WorkingPointOutcome {
            name,
            pass_file,
            final_file,
            copy_attempts: outcome.attempts,
            copied: outcome.succeeded,
            cuts,
        }
    }
}
