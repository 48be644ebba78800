use anyhow::Result;
use pretty_assertions::assert_eq;
use jvm_names::class::ClassName;
use mapping_tree::RemapError;
use mapping_tree::tree::mappings::{ClassMapping, Mappings};
use mapping_tree::tree::names::{Names, Namespace, Namespaces};

#[test]
fn resolve() -> Result<()> {
	let mappings = Mappings::new(Namespaces::try_from(["official", "intermediary", "named"])?);

	assert_eq!(mappings.get_namespace("official")?, Namespace::SOURCE);
	assert_eq!(mappings.get_namespace("named")?.id(), 2);
	assert_eq!(mappings.src_namespace()?, "official");
	assert_eq!(mappings.dst_namespaces(), ["intermediary", "named"]);
	Ok(())
}

#[test]
fn resolve_missing() -> Result<()> {
	let mappings = Mappings::new(Namespaces::try_from(["official", "named"])?);

	let error = mappings.get_namespace("srg").expect_err("srg isn't present");

	assert_eq!(
		error.to_string(),
		r#"namespace "srg" not present in mapping tree, available: src: Some("official"), dst: ["named"]"#
	);
	assert!(matches!(error.downcast_ref::<RemapError>(), Some(RemapError::NamespaceNotFound { .. })));
	Ok(())
}

#[test]
fn empty() {
	let mappings = Mappings::empty();

	let error = mappings.src_namespace().expect_err("there are no namespaces");
	assert_eq!(error.downcast_ref::<RemapError>(), Some(&RemapError::EmptyMappingSet));
	assert!(mappings.dst_namespaces().is_empty());
}

#[test]
fn namespaces_must_be_unique_and_non_empty() {
	assert!(Namespaces::try_from(["official", "official"]).is_err());
	assert!(Namespaces::try_from(["official", ""]).is_err());
}

#[test]
fn class_name_fallback() -> Result<()> {
	let mut mappings = Mappings::new(Namespaces::try_from(["official", "intermediary", "named"])?);
	mappings.add_class(ClassMapping { names: Names::from_strs(&["a", "class_1", ""])? })?;

	let official = mappings.get_namespace("official")?;
	let intermediary = mappings.get_namespace("intermediary")?;
	let named = mappings.get_namespace("named")?;

	let a = ClassName::try_from("a")?;
	let class_1 = ClassName::try_from("class_1")?;
	let unknown = ClassName::try_from("java/lang/Object")?;

	assert_eq!(mappings.map_class_name(&a, official, intermediary), class_1);
	assert_eq!(mappings.map_class_name(&class_1, intermediary, official), a);
	// no name in "named": the name asked about, not the one in the source namespace
	assert_eq!(mappings.map_class_name(&class_1, intermediary, named), class_1);
	assert_eq!(mappings.map_class_name(&unknown, official, named), unknown);
	Ok(())
}
