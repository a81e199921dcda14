mod describe;

use crate::Cli;
use crate::CommandResult;
pub(crate) use describe::DescribeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-client")]
pub(crate) enum CommandEnum {
    /// Build an argument descriptor and print its diagnostic summary.
    Describe(Box<DescribeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Describe(cmd) => cmd.run(cli).await
        }
    }
}
