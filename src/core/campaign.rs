// src/core/campaign.rs — The two-phase batch: all passes, then finalization
//
// Finalization only starts once every pass has completed. An optimizer
// failure ends the campaign before anything is copied.

use std::sync::Arc;

use chrono::Utc;

use crate::core::finalizer::Finalizer;
use crate::core::naming::NamingScheme;
use crate::core::report::RunReport;
use crate::core::sequencer::PassSequencer;
use crate::core::types::ProgressEvent;
use crate::cuts::CutArchive;
use crate::infra::config::Config;
use crate::infra::errors::CutChainError;
use crate::infra::shell::ShellRunner;
use crate::optimizer::Optimizer;

pub type ProgressFn = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

pub struct Campaign {
    naming: NamingScheme,
    optimizer: Arc<dyn Optimizer>,
    shell: Arc<dyn ShellRunner>,
    archive: Arc<dyn CutArchive>,
    config: Config,
    progress: Option<ProgressFn>,
}

impl Campaign {
    pub fn new(
        naming: NamingScheme,
        optimizer: Arc<dyn Optimizer>,
        shell: Arc<dyn ShellRunner>,
        archive: Arc<dyn CutArchive>,
        config: Config,
    ) -> Self {
        Self {
            naming,
            optimizer,
            shell,
            archive,
            config,
            progress: None,
        }
    }

    pub fn with_progress(mut self, cb: ProgressFn) -> Self {
        self.progress = Some(cb);
        self
    }

    fn finalizer(&self) -> Finalizer {
        let finalizer = Finalizer::new(
            self.naming.clone(),
            self.shell.clone(),
            self.archive.clone(),
            &self.config.finalize,
        )
        .with_diagnostics(self.config.diagnostics.enabled);

        match &self.progress {
            Some(cb) => {
                let cb = cb.clone();
                finalizer.with_progress(move |e| cb(e))
            }
            None => finalizer,
        }
    }

    /// Run every optimization pass, then finalize the working points.
    pub async fn run(&self) -> Result<RunReport, CutChainError> {
        let started_at = Utc::now();

        let mut sequencer = PassSequencer::new(self.naming.clone(), self.optimizer.clone());
        if let Some(cb) = &self.progress {
            let cb = cb.clone();
            sequencer = sequencer.with_progress(move |e| cb(e));
        }
        let passes = sequencer.run().await?;

        let working_points = self.finalizer().run().await;

        Ok(RunReport {
            region: self.naming.region(),
            date_tag: self.naming.date_tag().to_string(),
            started_at,
            finished_at: Utc::now(),
            passes,
            working_points,
        })
    }

    /// Only the finalization phase, for passes that already ran.
    pub async fn finalize(&self) -> RunReport {
        let started_at = Utc::now();
        let working_points = self.finalizer().run().await;

        RunReport {
            region: self.naming.region(),
            date_tag: self.naming.date_tag().to_string(),
            started_at,
            finished_at: Utc::now(),
            passes: Vec::new(),
            working_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Region;
    use crate::cuts::archive::MockCutArchive;
    use crate::infra::shell::MockShellRunner;
    use crate::optimizer::MockOptimizer;

    fn naming() -> NamingScheme {
        NamingScheme::new(Region::Barrel, &Config::default().naming)
    }

    #[tokio::test]
    async fn test_optimizer_failure_skips_finalization() {
        let mut optimizer = MockOptimizer::new();
        optimizer.expect_optimize().times(1).returning(|pass, _| {
            Err(CutChainError::Optimizer {
                pass: pass.label.clone(),
                command: "optimize".into(),
                message: "exit status 134".into(),
            })
        });
        let mut shell = MockShellRunner::new();
        shell.expect_run().never();
        let mut archive = MockCutArchive::new();
        archive.expect_read_record().never();

        let campaign = Campaign::new(
            naming(),
            Arc::new(optimizer),
            Arc::new(shell),
            Arc::new(archive),
            Config::default(),
        );
        assert!(campaign.run().await.is_err());
    }

    #[tokio::test]
    async fn test_full_run_reports_every_pass() {
        let mut optimizer = MockOptimizer::new();
        optimizer.expect_optimize().times(4).returning(|_, _| Ok(()));
        let mut shell = MockShellRunner::new();
        shell.expect_run().returning(|_| Ok(0));
        let mut archive = MockCutArchive::new();
        archive.expect_read_record().times(4).returning(|_, _| Ok(None));

        let report = Campaign::new(
            naming(),
            Arc::new(optimizer),
            Arc::new(shell),
            Arc::new(archive),
            Config::default(),
        )
        .run()
        .await
        .unwrap();

        assert_eq!(report.passes.len(), 4);
        assert_eq!(report.working_points.len(), 4);
        assert!(report.all_copied());
        assert_eq!(report.missing_cuts().len(), 4);
    }

    #[tokio::test]
    async fn test_finalize_only_never_optimizes() {
        let mut optimizer = MockOptimizer::new();
        optimizer.expect_optimize().never();
        let mut shell = MockShellRunner::new();
        shell.expect_run().returning(|_| Ok(0));
        let mut archive = MockCutArchive::new();
        archive.expect_read_record().returning(|_, _| Ok(None));

        let report = Campaign::new(
            naming(),
            Arc::new(optimizer),
            Arc::new(shell),
            Arc::new(archive),
            Config::default(),
        )
        .finalize()
        .await;

        assert!(report.passes.is_empty());
        assert_eq!(report.working_points.len(), 4);
    }
}
