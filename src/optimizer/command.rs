// src/optimizer/command.rs — Optimizer backed by an external command
//
// Arguments are minijinja templates rendered against the pass descriptor,
// so the same driver can call a ROOT macro, a Python trainer or a wrapper
// script.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use minijinja::{context, Environment, UndefinedBehavior};
use tokio::process::Command;

use super::Optimizer;
use crate::core::types::{PassDescriptor, Region};
use crate::infra::config::OptimizerConfig;
use crate::infra::errors::CutChainError;

pub struct CommandOptimizer {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    env: Environment<'static>,
}

impl CommandOptimizer {
    pub fn from_config(config: &OptimizerConfig) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            working_dir: config.working_dir.as_ref().map(PathBuf::from),
            env,
        }
    }

    /// Make sure the program can be started before the first pass runs.
    pub fn preflight(&self) -> Result<PathBuf, CutChainError> {
        let not_found = || CutChainError::OptimizerNotFound {
            program: self.program.clone(),
        };

        if Path::new(&self.program).components().count() > 1 {
            let path = match &self.working_dir {
                Some(dir) if Path::new(&self.program).is_relative() => dir.join(&self.program),
                _ => PathBuf::from(&self.program),
            };
            return if path.is_file() {
                Ok(path)
            } else {
                Err(not_found())
            };
        }

        which::which(&self.program).map_err(|_| not_found())
    }

    /// Render every argument template for `pass`.
    pub fn render_args(
        &self,
        pass: &PassDescriptor,
        region: Region,
    ) -> Result<Vec<String>, CutChainError> {
        let ctx = context! {
            limits_file => &pass.input_limits_file,
            output_base => &pass.output_base,
            training_base => &pass.training_base,
            limits_table => pass.limits_table.symbol(),
            region => region.as_str(),
            use_barrel => if region.is_barrel() { "true" } else { "false" },
            pass => pass.index + 1,
        };

        self.args
            .iter()
            .map(|template| {
                self.env
                    .render_str(template, &ctx)
                    .map_err(|e| CutChainError::Template {
                        template: template.clone(),
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}

#[async_trait]
impl Optimizer for CommandOptimizer {
    async fn optimize(&self, pass: &PassDescriptor, region: Region) -> Result<(), CutChainError> {
        let args = self.render_args(pass, region)?;
        let shown = std::iter::once(self.program.as_str())
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        tracing::info!(pass = %pass.label, "Running optimizer: {}", shown);

        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| CutChainError::Optimizer {
            pass: pass.label.clone(),
            command: shown.clone(),
            message: e.to_string(),
        })?;

        if !status.success() {
            return Err(CutChainError::Optimizer {
                pass: pass.label.clone(),
                command: shown,
                message: match status.code() {
                    Some(code) => format!("exit status {code}"),
                    None => "terminated by signal".into(),
                },
            });
        }

        tracing::debug!(pass = %pass.label, "Optimizer finished");
        Ok(())
    }
}
