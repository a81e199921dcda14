//! Types describing the arguments a query builder attaches to GraphQL fields.

mod argument_descriptor;
mod argument_descriptor_build_error;
mod argument_descriptor_builder;
mod argument_field;
mod arguments_annotation;

pub use argument_descriptor::ArgumentDescriptor;
pub use argument_descriptor_build_error::ArgumentDescriptorBuildError;
pub use argument_descriptor_builder::ArgumentDescriptorBuilder;
pub use argument_field::ArgumentField;
pub use arguments_annotation::ArgumentsAnnotation;

#[cfg(test)]
mod tests;
