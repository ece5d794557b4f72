// src/cli/plan.rs — Print the pass plan without running it

use serde::Serialize;

use crate::core::naming::NamingScheme;
use crate::core::types::{PassDescriptor, Region};

#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub working_point: String,
    #[serde(flatten)]
    pub pass: PassDescriptor,
    pub pass_file: String,
    pub final_file: String,
}

#[derive(Debug, Serialize)]
pub struct Plan {
    pub region: Region,
    pub date_tag: String,
    pub repository_dir: String,
    pub passes: Vec<PlanEntry>,
}

pub fn build_plan(naming: &NamingScheme) -> Plan {
    let passes = naming
        .pass_descriptors()
        .into_iter()
        .map(|pass| {
            let wp = pass.index;
            PlanEntry {
                working_point: naming.working_point(wp).to_string(),
                pass_file: naming.pass_file_path(wp).display().to_string(),
                final_file: naming.final_file_path(wp).display().to_string(),
                pass,
            }
        })
        .collect();

    Plan {
        region: naming.region(),
        date_tag: naming.date_tag().to_string(),
        repository_dir: naming.repository_dir().display().to_string(),
        passes,
    }
}

pub fn render_plan(plan: &Plan) -> String {
    let mut out = format!(
        "Region: {}  date tag: {}  repository: {}\n",
        plan.region, plan.date_tag, plan.repository_dir
    );
    for entry in &plan.passes {
        out.push_str(&format!(
            "\n[{}] {}\n  limits:   {}\n  table:    {}\n  output:   {}\n  training: {}\n  final:    {} <- {}\n",
            entry.pass.label.trim_end_matches('_'),
            entry.working_point,
            entry.pass.input_limits_file,
            entry.pass.limits_table,
            entry.pass.output_base,
            entry.pass.training_base,
            entry.final_file,
            entry.pass_file,
        ));
    }
    out
}

pub fn show_plan(naming: &NamingScheme, json: bool) -> anyhow::Result<()> {
    let plan = build_plan(naming);
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render_plan(&plan));
    }
    Ok(())
}
