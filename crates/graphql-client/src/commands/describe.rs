use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use libgraphql_client::field_builder::ArgumentDescriptor;

#[derive(Debug, clap::Args)]
pub(crate) struct DescribeCmd {
    #[arg(
        help="Name of the GraphQL argument (e.g. `id`).",
        long="name",
    )]
    pub(crate) argument_name: String,

    #[arg(
        help="GraphQL type of the argument as written in a query \
             (e.g. `ID!` or `[String!]`).",
        long="type",
    )]
    pub(crate) argument_type: String,

    #[arg(
        help="Name of the query variable the argument binds to.",
        long="variable",
    )]
    pub(crate) variable_name: Option<String>,

    #[arg(
        help="Mark the argument as required to execute the query.",
        long,
    )]
    pub(crate) required: bool,

    #[arg(
        help="Whether the argument should be inlined into the query text. \
             Leave unset to defer to the query builder.",
        long,
        value_name="true|false",
    )]
    pub(crate) inline: Option<bool>,
}
impl DescribeCmd {
    pub(crate) fn build_descriptor(&self) -> anyhow::Result<ArgumentDescriptor> {
        log::debug!(
            "Building descriptor for argument `{}`...",
            self.argument_name,
        );
        ArgumentDescriptor::new_with_inline(
            self.argument_name.as_str(),
            self.argument_type.as_str(),
            self.variable_name.as_deref(),
            self.required,
            self.inline,
        ).with_context(|| format!(
            "Unable to describe argument `{}`",
            self.argument_name,
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for DescribeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_outcome(self.build_descriptor())
    }
}
