use crate::field_builder::ArgumentDescriptor;
use crate::field_builder::ArgumentDescriptorBuildError;
use crate::field_builder::ArgumentField;

type Result<T> = std::result::Result<T, ArgumentDescriptorBuildError>;

/// Builds an [`ArgumentDescriptor`].
///
/// Every constructor on [`ArgumentDescriptor`] funnels through
/// [`ArgumentDescriptorBuilder::build`], which is the only place the required
/// text fields are checked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArgumentDescriptorBuilder {
    argument_name: Option<String>,
    argument_type: Option<String>,
    inline_argument: Option<bool>,
    is_required: bool,
    variable_name: Option<String>,
}

impl ArgumentDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn from_parts(
        argument_name: Option<&str>,
        argument_type: Option<&str>,
        variable_name: Option<&str>,
    ) -> Self {
        Self {
            argument_name: argument_name.map(str::to_string),
            argument_type: argument_type.map(str::to_string),
            variable_name: variable_name.map(str::to_string),
            ..Self::default()
        }
    }

    /// Set the name of the GraphQL argument (e.g. `id` in `user(id: $userId)`).
    pub fn argument_name(mut self, argument_name: impl Into<String>) -> Self {
        self.argument_name = Some(argument_name.into());
        self
    }

    /// Set the GraphQL type of the argument as raw type-reference text
    /// (e.g. `ID!` or `[String!]`). The text is not parsed.
    pub fn argument_type(mut self, argument_type: impl Into<String>) -> Self {
        self.argument_type = Some(argument_type.into());
        self
    }

    /// Set whether the argument should be inlined into the query text.
    ///
    /// Passing `None` leaves the decision to the query builder's own policy.
    pub fn inline_argument(mut self, inline_argument: Option<bool>) -> Self {
        self.inline_argument = inline_argument;
        self
    }

    /// Set whether the argument must be supplied for the query to execute.
    pub fn is_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Set the name of the query variable the argument binds to when it is
    /// not inlined.
    pub fn variable_name(mut self, variable_name: impl Into<String>) -> Self {
        self.variable_name = Some(variable_name.into());
        self
    }

    /// Consume this [`ArgumentDescriptorBuilder`] to produce an
    /// [`ArgumentDescriptor`].
    ///
    /// Fails on the first missing field, checked in the order argument name,
    /// argument type, variable name.
    pub fn build(self) -> Result<ArgumentDescriptor> {
        let argument_name = self.argument_name.ok_or_else(|| {
            missing_field(ArgumentField::ArgumentName)
        })?;
        let argument_type = self.argument_type.ok_or_else(|| {
            missing_field(ArgumentField::ArgumentType)
        })?;
        let variable_name = self.variable_name.ok_or_else(|| {
            missing_field(ArgumentField::VariableName)
        })?;

        let descriptor = ArgumentDescriptor {
            argument_name,
            argument_type,
            inline_argument: self.inline_argument,
            is_required: self.is_required,
            variable_name: Some(variable_name),
        };
        log::trace!("Built argument descriptor: {descriptor}");
        Ok(descriptor)
    }
}

fn missing_field(field: ArgumentField) -> ArgumentDescriptorBuildError {
    log::debug!("Argument descriptor is missing its `{field}`.");
    ArgumentDescriptorBuildError::MissingRequiredField { field }
}
