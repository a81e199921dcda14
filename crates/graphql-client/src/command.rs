use crate::Cli;
use crate::CommandResult;

/// A subcommand of the `graphql-client` CLI.
///
/// Implementors report their outcome through a [`CommandResult`] rather than
/// printing directly, so `main` owns stdout/stderr and the exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
