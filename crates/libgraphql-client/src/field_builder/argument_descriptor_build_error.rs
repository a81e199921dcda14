use crate::field_builder::ArgumentField;

/// Error returned when an
/// [`ArgumentDescriptor`](crate::field_builder::ArgumentDescriptor) cannot be
/// constructed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ArgumentDescriptorBuildError {
    /// One of the argument name, argument type, or variable name was not
    /// provided.
    #[error("Missing required argument field: `{field}`")]
    MissingRequiredField {
        field: ArgumentField,
    },
}
impl ArgumentDescriptorBuildError {
    /// The [`ArgumentField`] that caused construction to fail.
    pub fn field(&self) -> ArgumentField {
        match self {
            Self::MissingRequiredField { field } => *field,
        }
    }
}
