//! Placeholder projects that only report their pipeline steps.

use crate::{Console, LauncherError};
use std::io::{BufRead, Write};

/// Prints the report generator steps.
pub fn run_report_generator<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), LauncherError> {
    console.say("Generating reports...")?;
    console.say("- Aggregating metrics")?;
    console.say("- Exporting PDF and CSV outputs\n")
}

/// Prints the dashboard builder steps.
pub fn run_dashboard_builder<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), LauncherError> {
    console.say("Building dashboard...")?;
    console.say("- Fetching analytics data")?;
    console.say("- Rendering charts and tables\n")
}

/// Prints the model training steps.
pub fn run_model_training<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(), LauncherError> {
    console.say("Training model...")?;
    console.say("- Splitting dataset")?;
    console.say("- Fitting and evaluating model\n")
}
