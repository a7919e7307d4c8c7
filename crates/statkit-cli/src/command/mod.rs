use clap::{Parser, Subcommand};

use self::summarize::SummarizeArg;

mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Compute sum, average, median and sample standard deviation
    Summarize(#[clap(flatten)] SummarizeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summarize(arg) => summarize::run(&arg)?,
    }
    Ok(())
}
