//! Metadata types consumed by GraphQL client query builders.
//!
//! The central type is [`ArgumentDescriptor`](field_builder::ArgumentDescriptor),
//! which describes a single argument attached to a GraphQL field or operation:
//! its name, its declared GraphQL type, the query variable it binds to, whether
//! it is required, and whether it should be inlined into the query text.

pub mod field_builder;
