use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "schemaql",
    version,
    about = "Check and inspect GraphQL SDL documents.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Log level (error, warn, info, debug, trace). Takes precedence \
             over --verbose and the LOG_LEVEL environment variable.",
        long,
    )]
    pub log_level: Option<tracing::Level>,

    #[arg(
        global=true,
        help="Enable debug logging.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to do but explain the CLI.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
