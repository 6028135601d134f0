mod check;
mod describe;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use describe::DescribeCmd;

#[cfg(test)]
pub(crate) use describe::describe_registry;

#[derive(Debug, clap::Parser)]
#[command(name = "schemaql")]
pub(crate) enum CommandEnum {
    /// Parse and generate SDL files, reporting any errors.
    Check(Box<CheckCmd>),

    /// Print every type an SDL file defines.
    Describe(Box<DescribeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Describe(cmd) => cmd.run(cli).await,
        }
    }
}
