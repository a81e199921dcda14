use crate::field_builder::ArgumentDescriptor;
use crate::field_builder::ArgumentDescriptorBuildError;

/// Argument metadata as discovered by an upstream source, such as an
/// annotation attached to a parameter of a query-describing type.
///
/// Discovery does not guarantee that every piece of text is present, so each
/// text field is optional here. Converting into an [`ArgumentDescriptor`]
/// (see [`ArgumentDescriptor::from_annotation`]) is where absent fields are
/// reported.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ArgumentsAnnotation {
    pub argument_name: Option<String>,
    pub argument_type: Option<String>,
    #[serde(default)]
    pub is_required: bool,
    pub variable_name: Option<String>,
}
impl ArgumentsAnnotation {
    pub fn new(
        argument_name: impl Into<String>,
        argument_type: impl Into<String>,
        variable_name: impl Into<String>,
    ) -> Self {
        Self {
            argument_name: Some(argument_name.into()),
            argument_type: Some(argument_type.into()),
            is_required: false,
            variable_name: Some(variable_name.into()),
        }
    }

    pub fn required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }
}
impl std::convert::TryFrom<&ArgumentsAnnotation> for ArgumentDescriptor {
    type Error = ArgumentDescriptorBuildError;

    fn try_from(value: &ArgumentsAnnotation) -> Result<Self, Self::Error> {
        ArgumentDescriptor::from_annotation(value)
    }
}
impl std::convert::TryFrom<ArgumentsAnnotation> for ArgumentDescriptor {
    type Error = ArgumentDescriptorBuildError;

    fn try_from(value: ArgumentsAnnotation) -> Result<Self, Self::Error> {
        ArgumentDescriptor::from_annotation(&value)
    }
}
