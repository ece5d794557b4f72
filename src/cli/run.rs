// src/cli/run.rs — Default command: run the campaign, or only finalize it

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::cli::progress::terminal_progress;
use crate::core::campaign::Campaign;
use crate::core::naming::NamingScheme;
use crate::core::report::RunReport;
use crate::cuts::JsonCutArchive;
use crate::infra::config::Config;
use crate::infra::shell::SystemShell;
use crate::optimizer::CommandOptimizer;

fn build_campaign(config: &Config, naming: NamingScheme) -> anyhow::Result<Campaign> {
    let optimizer = CommandOptimizer::from_config(&config.optimizer);
    let program = optimizer.preflight()?;
    tracing::debug!("Optimizer resolved to {}", program.display());

    Ok(Campaign::new(
        naming,
        Arc::new(optimizer),
        Arc::new(SystemShell::new()),
        Arc::new(JsonCutArchive::new()),
        config.clone(),
    )
    .with_progress(Arc::new(terminal_progress())))
}

/// Run every pass and finalize. Only an optimizer failure is an error.
pub async fn run_campaign(
    config: &Config,
    naming: NamingScheme,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    tracing::info!(
        region = %naming.region(),
        date_tag = naming.date_tag(),
        passes = naming.pass_count(),
        "Starting cut optimization campaign"
    );

    let campaign = build_campaign(config, naming)?;
    let report = campaign
        .run()
        .await
        .context("optimization campaign aborted")?;

    finish(&report, report_path)
}

/// Finalize passes that already ran. Never needs the optimizer program.
pub async fn run_finalize(
    config: &Config,
    naming: NamingScheme,
    report_path: Option<&Path>,
) -> anyhow::Result<()> {
    let campaign = Campaign::new(
        naming,
        Arc::new(CommandOptimizer::from_config(&config.optimizer)),
        Arc::new(SystemShell::new()),
        Arc::new(JsonCutArchive::new()),
        config.clone(),
    )
    .with_progress(Arc::new(terminal_progress()));

    let report = campaign.finalize().await;
    finish(&report, report_path)
}

fn finish(report: &RunReport, report_path: Option<&Path>) -> anyhow::Result<()> {
    if !report.all_copied() {
        tracing::warn!("Final files may be missing or stale; see messages above");
    }
    let missing = report.missing_cuts();
    if !missing.is_empty() {
        tracing::info!("No cut record for: {}", missing.join(", "));
    }

    if let Some(path) = report_path {
        report
            .write_json(path)
            .with_context(|| format!("writing run report to {}", path.display()))?;
        tracing::info!("Run report written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Region;

    #[tokio::test]
    async fn test_missing_optimizer_aborts_before_any_pass() {
        let mut config = Config::default();
        config.optimizer.program = "cutchain-no-such-optimizer".into();
        let naming = NamingScheme::new(Region::Barrel, &config.naming);

        let err = run_campaign(&config, naming, None).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_finalize_writes_report_even_when_copies_fail() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.naming.repository_dir = dir.path().join("missing_repo").display().to_string();
        config.finalize.max_copy_attempts = 2;
        config.diagnostics.enabled = false;
        let naming = NamingScheme::new(Region::Endcap, &config.naming);
        let report_path = dir.path().join("report.json");

        run_finalize(&config, naming, Some(report_path.as_path())).await.unwrap();

        let v: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
        assert_eq!(v["region"], "endcap");
        let wps = v["working_points"].as_array().unwrap();
        assert_eq!(wps.len(), 4);
        assert!(wps.iter().all(|w| w["copied"] == false && w["copy_attempts"] == 2));
    }
}
