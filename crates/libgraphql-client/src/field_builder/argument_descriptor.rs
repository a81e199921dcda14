use crate::field_builder::ArgumentDescriptorBuildError;
use crate::field_builder::ArgumentDescriptorBuilder;
use crate::field_builder::ArgumentsAnnotation;

type Result<T> = std::result::Result<T, ArgumentDescriptorBuildError>;

/// Metadata describing a single argument on a GraphQL field or operation,
/// used by a query builder to render the argument into query text and its
/// accompanying variables payload.
///
/// The argument name and type are fixed once constructed. The variable name,
/// the required flag, and the inlining preference can be adjusted afterwards
/// (e.g. to de-duplicate variable names across sibling fields).
///
/// Nothing here enforces uniqueness: several descriptors may share an
/// argument name or a variable name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentDescriptor {
    pub(super) argument_name: String,
    pub(super) argument_type: String,
    pub(super) inline_argument: Option<bool>,
    pub(super) is_required: bool,
    pub(super) variable_name: Option<String>,
}

impl ArgumentDescriptor {
    /// Produce an [`ArgumentDescriptorBuilder`] with nothing set.
    pub fn builder() -> ArgumentDescriptorBuilder {
        ArgumentDescriptorBuilder::new()
    }

    /// Construct a non-required [`ArgumentDescriptor`] whose inlining is left
    /// to the query builder.
    pub fn new<'a>(
        argument_name: impl Into<Option<&'a str>>,
        argument_type: impl Into<Option<&'a str>>,
        variable_name: impl Into<Option<&'a str>>,
    ) -> Result<Self> {
        Self::new_with_required(
            argument_name,
            argument_type,
            variable_name,
            /* is_required = */ false,
        )
    }

    /// Construct an [`ArgumentDescriptor`] whose inlining is left to the
    /// query builder.
    pub fn new_with_required<'a>(
        argument_name: impl Into<Option<&'a str>>,
        argument_type: impl Into<Option<&'a str>>,
        variable_name: impl Into<Option<&'a str>>,
        is_required: bool,
    ) -> Result<Self> {
        Self::new_with_inline(
            argument_name,
            argument_type,
            variable_name,
            is_required,
            /* inline_argument = */ None,
        )
    }

    /// Construct an [`ArgumentDescriptor`] with every attribute specified.
    ///
    /// Fails with
    /// [`MissingRequiredField`](ArgumentDescriptorBuildError::MissingRequiredField)
    /// if the argument name, argument type, or variable name is `None`.
    pub fn new_with_inline<'a>(
        argument_name: impl Into<Option<&'a str>>,
        argument_type: impl Into<Option<&'a str>>,
        variable_name: impl Into<Option<&'a str>>,
        is_required: bool,
        inline_argument: Option<bool>,
    ) -> Result<Self> {
        ArgumentDescriptorBuilder::from_parts(
            argument_name.into(),
            argument_type.into(),
            variable_name.into(),
        )
        .is_required(is_required)
        .inline_argument(inline_argument)
        .build()
    }

    /// Construct an [`ArgumentDescriptor`] from metadata discovered upstream.
    /// Inlining is left to the query builder.
    pub fn from_annotation(annotation: &ArgumentsAnnotation) -> Result<Self> {
        Self::new_with_required(
            annotation.argument_name.as_deref(),
            annotation.argument_type.as_deref(),
            annotation.variable_name.as_deref(),
            annotation.is_required,
        )
    }

    /// The name of the GraphQL argument.
    pub fn argument_name(&self) -> &str {
        self.argument_name.as_str()
    }

    /// The GraphQL type of the argument, as raw type-reference text.
    pub fn argument_type(&self) -> &str {
        self.argument_type.as_str()
    }

    /// Whether the argument should be inlined into the query text.
    ///
    /// `None` means the query builder decides according to its own policy.
    pub fn inline_argument(&self) -> Option<bool> {
        self.inline_argument
    }

    /// Whether the argument must be supplied for the query to execute.
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// The query variable this argument binds to when it is not inlined.
    ///
    /// Always `Some` on a freshly constructed descriptor. Only
    /// [`ArgumentDescriptor::clear_variable_name`] makes it `None`.
    pub fn variable_name(&self) -> Option<&str> {
        self.variable_name.as_deref()
    }

    pub fn set_inline_argument(&mut self, inline_argument: Option<bool>) {
        self.inline_argument = inline_argument;
    }

    pub fn set_required(&mut self, is_required: bool) {
        self.is_required = is_required;
    }

    /// Rebind this argument to a different query variable.
    pub fn set_variable_name(&mut self, variable_name: impl Into<String>) {
        let variable_name = variable_name.into();
        log::debug!(
            "Rebinding argument `{}` from variable {:?} to `{variable_name}`.",
            self.argument_name,
            self.variable_name,
        );
        self.variable_name = Some(variable_name);
    }

    /// Unbind this argument from any query variable.
    pub fn clear_variable_name(&mut self) {
        log::debug!(
            "Clearing variable binding of argument `{}`.",
            self.argument_name,
        );
        self.variable_name = None;
    }

    /// Resolve the inlining preference against the query builder's default.
    ///
    /// An explicit preference always wins; an unset preference yields
    /// `builder_default`.
    pub fn should_inline(&self, builder_default: bool) -> bool {
        self.inline_argument.unwrap_or(builder_default)
    }
}
impl std::fmt::Display for ArgumentDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {} Type: {} IsRequired: {} VariableName: {}",
            self.argument_name,
            self.argument_type,
            if self.is_required { "True" } else { "False" },
            self.variable_name.as_deref().unwrap_or("null"),
        )
    }
}
