use std::{fmt::Write as _, io::Write as _, path::PathBuf};

use anyhow::Context;
use statkit_stats::{DescriptiveStats, NegativeValues};

use crate::{
    schema::dataset::Dataset,
    util::{Output, read_json_file},
};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// One labeled line per statistic
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// Values to summarize, appended after any values read from `--input`
    #[arg(allow_negative_numbers = true)]
    pub(crate) values: Vec<f64>,
    /// JSON file holding an array of numbers or an object with a `values` array
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Leave negative values out of the sum and average
    #[arg(long)]
    pub(crate) exclude_negative: bool,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg {
        values,
        input,
        exclude_negative,
        format,
        output,
    } = arg;

    let mut all_values = match input {
        Some(path) => read_json_file::<Dataset, _>("dataset", path)?.into_values(),
        None => vec![],
    };
    all_values.extend_from_slice(values);
    tracing::debug!(count = all_values.len(), "collected values");

    let negatives = NegativeValues::from(!exclude_negative);
    let stats = DescriptiveStats::new(&all_values, negatives)
        .with_context(|| format!("Failed to summarize {} values", all_values.len()))?;

    match format {
        OutputFormat::Json => Output::save_json(&stats, output.clone())?,
        OutputFormat::Text => {
            let mut output = Output::from_output_path(output.clone())?;
            output
                .write_all(render_text(&stats).as_bytes())
                .with_context(|| format!("Failed to write summary to {}", output.display_path()))?;
            output
                .flush()
                .with_context(|| format!("Failed to flush output to {}", output.display_path()))?;
            tracing::info!(output = %output.display_path(), "wrote summary");
        }
    }
    Ok(())
}

fn render_text(stats: &DescriptiveStats) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "count              = {}", stats.count);
    let _ = writeln!(text, "included           = {}", stats.included);
    let _ = writeln!(text, "sum                = {}", stats.sum);
    let _ = writeln!(text, "average            = {}", stats.average);
    let _ = writeln!(text, "median             = {}", stats.median);
    match stats.std_dev {
        Some(std_dev) => {
            let _ = writeln!(text, "standard deviation = {std_dev}");
        }
        None => {
            let _ = writeln!(text, "standard deviation = n/a (needs at least 2 values)");
        }
    }
    text
}
