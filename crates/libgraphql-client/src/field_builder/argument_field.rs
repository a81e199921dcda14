/// Identifies one of the text fields an
/// [`ArgumentDescriptor`](crate::field_builder::ArgumentDescriptor) cannot be
/// constructed without.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArgumentField {
    ArgumentName,
    ArgumentType,
    VariableName,
}
impl ArgumentField {
    /// The parameter name as it appears in the construction API
    /// (e.g. `argumentName`).
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Self::ArgumentName => "argumentName",
            Self::ArgumentType => "argumentType",
            Self::VariableName => "variableName",
        }
    }
}
impl std::fmt::Display for ArgumentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.parameter_name())
    }
}
