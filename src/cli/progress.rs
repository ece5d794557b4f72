// src/cli/progress.rs — Console banners for campaign progress
//
// Banners go to stdout next to the optimizer's own output; tracing logs go
// to stderr.

use crate::core::types::ProgressEvent;

const PASS_RULE: &str = "-----------------------------------------------------------------";
const FINAL_RULE: &str = "====================================================";

/// Text printed for one event.
pub fn render(event: &ProgressEvent) -> String {
    match event {
        ProgressEvent::PassStart { pass } => format!(
            "\n{PASS_RULE}\n\n    Run new optimization pass {}\n\n \
             Input file that defines cut optimization limits: {}\n \
             Base for the file name of output cuts          : {}\n{PASS_RULE}\n",
            pass.index + 1,
            pass.input_limits_file,
            pass.output_base,
        ),
        ProgressEvent::FinalizeStart => format!(
            "\n{FINAL_RULE}\nFinal definition of working points\n{FINAL_RULE}\n\
             Copy files with working points info into the final locations"
        ),
        ProgressEvent::Diagnostic { heading } => heading.clone(),
        ProgressEvent::CopyFailed {
            command,
            attempt,
            max_attempts,
        } => format!(
            "Copy command failed!!! The command: {} (attempt {}/{})",
            command, attempt, max_attempts
        ),
        ProgressEvent::WorkingPointFinal { name, file } => format!(
            "\nFinal definition for working point {}\n file name:   {}",
            name, file
        ),
        ProgressEvent::CutsFound { printout } => printout.trim_end().to_string(),
        ProgressEvent::CutsNotFound { .. } => "???? not found????".to_string(),
    }
}

/// Progress callback that prints every event to stdout.
pub fn terminal_progress() -> impl Fn(ProgressEvent) + Send + Sync + 'static {
    move |event| println!("{}", render(&event))
}
