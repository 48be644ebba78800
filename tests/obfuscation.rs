use anyhow::Result;
use pretty_assertions::assert_eq;
use jvm_names::class::ClassName;
use jvm_names::field::{FieldDescriptor, FieldName};
use jvm_names::method::{MethodDescriptor, MethodName};
use mapping_tree::tree::mappings::{ClassMapping, FieldMapping, Mappings, MethodMapping};
use mapping_tree::tree::names::{Names, Namespaces};
use refmap::entry::{FieldEntry, MethodEntry};
use remap_tools::obfuscation::{obfuscation_types, MappingTreeMappingProvider, ObfuscationType};

fn tree() -> Result<Mappings> {
	let mut tree = Mappings::new(Namespaces::try_from(["named", "srg", "official"])?);

	let class = tree.add_class(ClassMapping { names: Names::from_strs(&["net/example/Apple", "net/minecraft/C_1_", "a"])? })?;
	class.add_field(FieldMapping {
		desc: FieldDescriptor::try_from("Lnet/example/Apple;")?,
		names: Names::from_strs(&["next", "f_1_", "b"])?,
	})?;
	class.add_method(MethodMapping {
		desc: MethodDescriptor::try_from("()V")?,
		names: Names::from_strs(&["eat", "m_1_", "c"])?,
	})?;
	// not obfuscated
	class.add_method(MethodMapping {
		desc: MethodDescriptor::try_from("()Ljava/lang/String;")?,
		names: Names::from_strs(&["toString", "", ""])?,
	})?;

	Ok(tree)
}

fn method(owner: &str, name: &str, desc: &str) -> Result<MethodEntry> {
	Ok(MethodEntry {
		owner: Some(ClassName::try_from(owner)?),
		name: MethodName::try_from(name)?,
		desc: MethodDescriptor::try_from(desc)?,
	})
}

#[test]
fn types() -> Result<()> {
	let types: Vec<_> = obfuscation_types(&tree()?).into_iter().map(|x| x.key).collect();

	assert_eq!(types, [
		"named:srg",
		"searge",
		"named:official",
		"srg:named",
		"srg:official",
		"official:named",
		"official:srg",
	]);
	Ok(())
}

#[test]
fn types_single_namespace() -> Result<()> {
	let tree = Mappings::new(Namespaces::try_from(["named"])?);

	assert!(obfuscation_types(&tree).is_empty());
	Ok(())
}

#[test]
fn searge() -> Result<()> {
	let mut provider = ObfuscationType::new("searge").mapping_provider()?;
	provider.read(&tree()?)?;

	assert_eq!(
		provider.get_class_mapping(&ClassName::try_from("net/example/Apple")?)?,
		Some(ClassName::try_from("net/minecraft/C_1_")?)
	);
	Ok(())
}

#[test]
fn lookups() -> Result<()> {
	let mut provider = MappingTreeMappingProvider::new("named", "official");
	provider.read(&tree()?)?;

	assert_eq!(provider.get_class_mapping(&ClassName::try_from("net/example/Apple")?)?, Some(ClassName::try_from("a")?));
	assert_eq!(provider.get_class_mapping(&ClassName::try_from("java/lang/Object")?)?, None);

	assert_eq!(
		provider.get_method_mapping(&method("net/example/Apple", "eat", "()V")?)?,
		Some(method("a", "c", "()V")?)
	);
	assert_eq!(provider.get_method_mapping(&method("java/lang/Object", "hashCode", "()I")?)?, None);

	// the name doesn't change, but the owner does
	assert_eq!(
		provider.get_method_mapping(&method("net/example/Apple", "toString", "()Ljava/lang/String;")?)?,
		Some(method("a", "toString", "()Ljava/lang/String;")?)
	);

	let field = FieldEntry {
		owner: Some(ClassName::try_from("net/example/Apple")?),
		name: FieldName::try_from("next")?,
		desc: FieldDescriptor::try_from("Lnet/example/Apple;")?,
	};
	let expected = FieldEntry {
		owner: Some(ClassName::try_from("a")?),
		name: FieldName::try_from("b")?,
		desc: FieldDescriptor::try_from("La;")?,
	};
	assert_eq!(provider.get_field_mapping(&field)?, Some(expected));

	assert_eq!(provider.get_package_mapping("net/example")?, None);
	Ok(())
}

#[test]
fn empty_and_clear() -> Result<()> {
	let mut provider = MappingTreeMappingProvider::new("named", "official");
	assert!(provider.is_empty());
	assert!(provider.get_class_mapping(&ClassName::try_from("net/example/Apple")?).is_err());

	provider.read(&tree()?)?;
	assert!(!provider.is_empty());

	provider.clear();
	assert!(provider.is_empty());

	provider.read(&Mappings::new(Namespaces::try_from(["named", "official"])?))?;
	assert!(provider.is_empty());
	Ok(())
}

#[test]
fn missing_namespace() -> Result<()> {
	let mut provider = MappingTreeMappingProvider::new("named", "intermediary");

	assert!(provider.read(&tree()?).is_err());
	assert!(provider.is_empty());
	Ok(())
}
