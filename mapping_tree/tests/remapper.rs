use anyhow::Result;
use pretty_assertions::assert_eq;
use jvm_names::class::ClassName;
use jvm_names::field::{FieldDescriptor, FieldName};
use jvm_names::method::{MethodDescriptor, MethodName};
use mapping_tree::RemapError;
use mapping_tree::remapper::{ClassRemapper, MappingTreeRemapper, Remapper};
use mapping_tree::tree::mappings::{ClassMapping, FieldMapping, Mappings, MethodMapping};
use mapping_tree::tree::names::{Names, Namespaces};

fn class(s: &str) -> Result<ClassName> {
	ClassName::try_from(s)
}

fn tree() -> Result<Mappings> {
	let mut tree = Mappings::new(Namespaces::try_from(["official", "intermediary", "named"])?);

	let a = tree.add_class(ClassMapping { names: Names::from_strs(&["a", "class_1", "net/Apple"])? })?;
	a.add_field(FieldMapping {
		desc: FieldDescriptor::try_from("La;")?,
		names: Names::from_strs(&["b", "field_1", "color"])?,
	})?;
	a.add_method(MethodMapping {
		desc: MethodDescriptor::try_from("(La;)V")?,
		names: Names::from_strs(&["c", "method_1", "eat"])?,
	})?;
	a.add_method(MethodMapping {
		desc: MethodDescriptor::try_from("()V")?,
		names: Names::from_strs(&["d", "method_2", ""])?,
	})?;

	let b = tree.add_class(ClassMapping { names: Names::from_strs(&["b", "class_2", ""])? })?;
	b.add_field(FieldMapping {
		desc: FieldDescriptor::try_from("I")?,
		names: Names::from_strs(&["e", "field_2", ""])?,
	})?;

	Ok(tree)
}

#[test]
fn classes() -> Result<()> {
	let tree = tree()?;
	let remapper = tree.remapper("official", "named")?;

	assert_eq!(remapper.map_class(&class("a")?)?, class("net/Apple")?);
	// known, but without a name in "named": the name asked about is returned
	assert_eq!(remapper.map_class(&class("b")?)?, class("b")?);
	// not known at all
	assert_eq!(remapper.map_class(&class("java/lang/Object")?)?, class("java/lang/Object")?);
	assert_eq!(remapper.map_class(&class("[[La;")?)?, class("[[Lnet/Apple;")?);

	assert_eq!(remapper.map_class_fail(&class("b")?)?, None);
	Ok(())
}

#[test]
fn descriptors() -> Result<()> {
	let tree = tree()?;
	let remapper = tree.remapper("official", "intermediary")?;

	assert_eq!(
		remapper.map_method_desc(&MethodDescriptor::try_from("(La;[Lb;Ljava/lang/String;)La;")?)?,
		MethodDescriptor::try_from("(Lclass_1;[Lclass_2;Ljava/lang/String;)Lclass_1;")?
	);
	assert_eq!(remapper.map_field_desc(&FieldDescriptor::try_from("J")?)?, FieldDescriptor::try_from("J")?);
	Ok(())
}

#[test]
fn members() -> Result<()> {
	let tree = tree()?;
	let remapper = tree.remapper("official", "named")?;

	let a = class("a")?;
	assert_eq!(
		remapper.map_field_name(&a, &FieldName::try_from("b")?, &FieldDescriptor::try_from("La;")?)?,
		FieldName::try_from("color")?
	);
	assert_eq!(
		remapper.map_record_component_name(&a, &FieldName::try_from("b")?, &FieldDescriptor::try_from("La;")?)?,
		FieldName::try_from("color")?
	);
	assert_eq!(
		remapper.map_method_name(&a, &MethodName::try_from("c")?, &MethodDescriptor::try_from("(La;)V")?)?,
		MethodName::try_from("eat")?
	);
	// no name in "named"
	assert_eq!(
		remapper.map_method_name(&a, &MethodName::try_from("d")?, &MethodDescriptor::try_from("()V")?)?,
		MethodName::try_from("d")?
	);
	// the descriptor must match exactly
	assert_eq!(
		remapper.map_method_name(&a, &MethodName::try_from("c")?, &MethodDescriptor::try_from("()V")?)?,
		MethodName::try_from("c")?
	);
	// unknown owner
	assert_eq!(
		remapper.map_field_name(&class("x")?, &FieldName::try_from("b")?, &FieldDescriptor::try_from("La;")?)?,
		FieldName::try_from("b")?
	);

	assert_eq!(remapper.map_package_name("net/minecraft")?, "net/minecraft");
	Ok(())
}

#[test]
fn members_from_destination_namespace() -> Result<()> {
	let tree = tree()?;
	let remapper = tree.remapper("intermediary", "named")?;

	// owner and descriptor are given in the namespace remapped from
	assert_eq!(
		remapper.map_field_name(&class("class_1")?, &FieldName::try_from("field_1")?, &FieldDescriptor::try_from("Lclass_1;")?)?,
		FieldName::try_from("color")?
	);
	assert_eq!(
		remapper.map_field_name(&class("class_1")?, &FieldName::try_from("field_1")?, &FieldDescriptor::try_from("La;")?)?,
		FieldName::try_from("field_1")?
	);
	Ok(())
}

#[test]
fn same_namespace_is_identity() -> Result<()> {
	let tree = tree()?;
	let remapper = tree.remapper("intermediary", "intermediary")?;

	assert_eq!(remapper.map_class(&class("class_2")?)?, class("class_2")?);
	assert_eq!(
		remapper.map_method_name(&class("class_1")?, &MethodName::try_from("method_1")?, &MethodDescriptor::try_from("(Lclass_1;)V")?)?,
		MethodName::try_from("method_1")?
	);
	Ok(())
}

#[test]
fn completion() -> Result<()> {
	let tree = tree()?;

	let remapper = tree.remapper("named", "intermediary")?;
	assert_eq!(remapper.map_class(&class("b")?)?, class("b")?);

	let remapper = MappingTreeRemapper::builder(&tree)
		.namespaces("named", "intermediary")
		.complete_namespaces()
		.build()?;
	assert_eq!(remapper.map_class(&class("b")?)?, class("class_2")?);
	assert_eq!(remapper.map_class(&class("net/Apple")?)?, class("class_1")?);
	assert_eq!(
		remapper.map_field_name(&class("b")?, &FieldName::try_from("e")?, &FieldDescriptor::try_from("I")?)?,
		FieldName::try_from("field_2")?
	);

	// the tree isn't changed by completing
	assert_eq!(tree, self::tree()?);
	Ok(())
}

#[test]
fn completion_from_other_namespace() -> Result<()> {
	let tree = tree()?;

	let remapper = MappingTreeRemapper::builder(&tree)
		.namespaces("named", "official")
		.complete_namespaces_from("intermediary")
		.build()?;

	assert_eq!(remapper.map_class(&class("class_2")?)?, class("b")?);
	assert_eq!(remapper.map_class(&class("b")?)?, class("b")?);
	Ok(())
}

#[test]
fn missing_namespace() -> Result<()> {
	let tree = tree()?;

	let error = tree.remapper("official", "srg").expect_err("there's no namespace srg");

	assert_eq!(error.downcast_ref::<RemapError>(), Some(&RemapError::NamespaceNotFound {
		namespace: "srg".to_owned(),
		source_namespace: Some("official".to_owned()),
		destination_namespaces: vec!["intermediary".to_owned(), "named".to_owned()],
	}));
	let message = error.to_string();
	assert!(message.contains("official") && message.contains("intermediary") && message.contains("named"), "{message}");
	Ok(())
}

#[test]
fn builder_needs_namespaces() -> Result<()> {
	let tree = tree()?;

	assert!(MappingTreeRemapper::builder(&tree).build().is_err());
	Ok(())
}

#[test]
fn empty_tree() {
	let error = Mappings::empty().remapper("official", "named").expect_err("empty mappings have no namespaces");

	assert_eq!(error.downcast_ref::<RemapError>(), Some(&RemapError::EmptyMappingSet));
}

#[test]
fn constructors_keep_their_names() -> Result<()> {
	let mut tree = Mappings::new(Namespaces::try_from(["official", "named"])?);
	let a = tree.add_class(ClassMapping { names: Names::from_strs(&["a", "net/Apple"])? })?;
	a.add_method(MethodMapping {
		desc: MethodDescriptor::try_from("(I)V")?,
		names: Names::from_strs(&["<init>", "create"])?,
	})?;

	let remapper = tree.remapper("official", "named")?;
	let init = MethodName::try_from("<init>")?;
	let desc = MethodDescriptor::try_from("(I)V")?;
	assert_eq!(remapper.map_method_name_fail(&class("a")?, &init, &desc)?, None);
	assert_eq!(remapper.map_method_name(&class("a")?, &init, &desc)?, init);
	Ok(())
}
