use crate::field_builder::ArgumentDescriptor;
use crate::field_builder::ArgumentDescriptorBuildError;

type Result<T> = std::result::Result<T, ArgumentDescriptorBuildError>;

#[test]
fn new_defaults_to_optional_and_builder_decided_inlining() -> Result<()> {
    let descriptor = ArgumentDescriptor::new("id", "ID!", "userId")?;

    assert_eq!(descriptor.argument_name(), "id");
    assert_eq!(descriptor.argument_type(), "ID!");
    assert_eq!(descriptor.variable_name(), Some("userId"));
    assert!(!descriptor.is_required());
    assert_eq!(descriptor.inline_argument(), None);

    Ok(())
}

#[test]
fn new_with_required_keeps_flag_and_leaves_inlining_unset() -> Result<()> {
    let required = ArgumentDescriptor::new_with_required(
        "first",
        "Int",
        "pageSize",
        true,
    )?;
    assert!(required.is_required());
    assert_eq!(required.inline_argument(), None);

    let optional = ArgumentDescriptor::new_with_required(
        "first",
        "Int",
        "pageSize",
        false,
    )?;
    assert!(!optional.is_required());
    assert_eq!(optional.inline_argument(), None);

    Ok(())
}

#[test]
fn new_with_inline_keeps_every_attribute() -> Result<()> {
    for inline_argument in [Some(true), Some(false), None] {
        let descriptor = ArgumentDescriptor::new_with_inline(
            "filter",
            "[String!]",
            "filterValues",
            true,
            inline_argument,
        )?;

        assert_eq!(descriptor.argument_name(), "filter");
        assert_eq!(descriptor.argument_type(), "[String!]");
        assert_eq!(descriptor.variable_name(), Some("filterValues"));
        assert!(descriptor.is_required());
        assert_eq!(descriptor.inline_argument(), inline_argument);
    }

    Ok(())
}

#[test]
fn argument_type_text_is_kept_verbatim() -> Result<()> {
    // Type text is never parsed, so even odd spacing survives untouched.
    let descriptor = ArgumentDescriptor::new("ids", "[ ID! ]!", "ids")?;
    assert_eq!(descriptor.argument_type(), "[ ID! ]!");
    Ok(())
}

#[test]
fn mutations_are_visible_on_later_reads() -> Result<()> {
    let mut descriptor = ArgumentDescriptor::new("id", "ID!", "id")?;

    descriptor.set_variable_name("id_2");
    descriptor.set_required(true);
    descriptor.set_inline_argument(Some(false));

    assert_eq!(descriptor.variable_name(), Some("id_2"));
    assert!(descriptor.is_required());
    assert_eq!(descriptor.inline_argument(), Some(false));

    descriptor.set_required(false);
    descriptor.set_inline_argument(None);
    assert!(!descriptor.is_required());
    assert_eq!(descriptor.inline_argument(), None);

    // The identifying attributes stay put through all of the above.
    assert_eq!(descriptor.argument_name(), "id");
    assert_eq!(descriptor.argument_type(), "ID!");

    Ok(())
}

#[test]
fn clear_variable_name_unbinds_the_argument() -> Result<()> {
    let mut descriptor = ArgumentDescriptor::new("id", "ID!", "userId")?;
    descriptor.clear_variable_name();
    assert_eq!(descriptor.variable_name(), None);

    descriptor.set_variable_name(String::from("userId"));
    assert_eq!(descriptor.variable_name(), Some("userId"));

    Ok(())
}

#[test]
fn display_renders_bound_variable() -> Result<()> {
    let descriptor = ArgumentDescriptor::new_with_required(
        "id",
        "ID!",
        "userId",
        true,
    )?;

    let rendered = descriptor.to_string();
    assert!(rendered.ends_with("VariableName: userId"));
    assert_eq!(
        rendered,
        "Name: id Type: ID! IsRequired: True VariableName: userId",
    );

    Ok(())
}

#[test]
fn display_renders_cleared_variable_as_null() -> Result<()> {
    let mut descriptor = ArgumentDescriptor::new_with_required(
        "id",
        "ID!",
        "userId",
        true,
    )?;
    descriptor.clear_variable_name();

    let rendered = descriptor.to_string();
    assert!(rendered.ends_with("VariableName: null"));
    assert_eq!(
        rendered,
        "Name: id Type: ID! IsRequired: True VariableName: null",
    );

    Ok(())
}

#[test]
fn display_renders_optional_flag() -> Result<()> {
    let descriptor = ArgumentDescriptor::new("after", "String", "cursor")?;
    assert_eq!(
        descriptor.to_string(),
        "Name: after Type: String IsRequired: False VariableName: cursor",
    );
    Ok(())
}

#[test]
fn descriptors_built_from_identical_inputs_are_independent() -> Result<()> {
    let mut first = ArgumentDescriptor::new("id", "ID!", "id")?;
    let second = ArgumentDescriptor::new("id", "ID!", "id")?;
    assert_eq!(first, second);

    first.set_variable_name("id_1");

    assert_eq!(first.variable_name(), Some("id_1"));
    assert_eq!(second.variable_name(), Some("id"));
    assert_ne!(first, second);

    Ok(())
}

#[test]
fn clones_are_independent() -> Result<()> {
    let original = ArgumentDescriptor::new("id", "ID!", "id")?;
    let mut copy = original.clone();

    copy.set_variable_name("id_copy");
    copy.set_required(true);
    copy.set_inline_argument(Some(true));

    assert_eq!(original.variable_name(), Some("id"));
    assert!(!original.is_required());
    assert_eq!(original.inline_argument(), None);

    Ok(())
}

#[test]
fn should_inline_defers_to_builder_only_when_unset() -> Result<()> {
    let mut descriptor = ArgumentDescriptor::new("id", "ID!", "id")?;
    assert!(descriptor.should_inline(true));
    assert!(!descriptor.should_inline(false));

    descriptor.set_inline_argument(Some(true));
    assert!(descriptor.should_inline(false));

    descriptor.set_inline_argument(Some(false));
    assert!(!descriptor.should_inline(true));

    Ok(())
}

#[test]
fn descriptor_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArgumentDescriptor>();
}
