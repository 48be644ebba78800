use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use indexmap::map::Entry;
use jvm_names::class::{ClassName, ClassNameSlice};
use jvm_names::field::{FieldDescriptor, FieldDescriptorSlice, FieldName, FieldNameSlice};
use jvm_names::method::{MethodDescriptor, MethodDescriptorSlice, MethodName, MethodNameSlice};
use crate::remapper::ClassRemapper;
use crate::tree::names::{Names, Namespace, Namespaces};
use crate::tree::ToKey;

/// A mapping tree: classes with their fields and methods, each with a name in every namespace.
///
/// Classes are keyed by their name in the source namespace, fields and methods by their name and descriptor in the
/// source namespace. Descriptors are always stored in the source namespace.
#[derive(Debug, Clone, PartialEq)]
pub struct Mappings {
	pub(crate) info: MappingInfo,
	pub(crate) classes: IndexMap<ClassName, ClassNowodeMapping>,
}

impl Mappings {
	pub fn new(namespaces: Namespaces) -> Mappings {
		Mappings {
			info: MappingInfo { namespaces },
			classes: IndexMap::new(),
		}
	}

	/// Creates a mapping tree without any namespaces.
	///
	/// Such a tree has no source namespace, asking it for one gives a [`RemapError::EmptyMappingSet`][crate::RemapError::EmptyMappingSet].
	pub fn empty() -> Mappings {
		Mappings::new(Namespaces::default())
	}

	pub fn namespaces(&self) -> &Namespaces {
		&self.info.namespaces
	}

	pub fn src_namespace(&self) -> Result<&str> {
		self.info.namespaces.src()
	}

	pub fn dst_namespaces(&self) -> &[String] {
		self.info.namespaces.dst()
	}

	pub fn get_namespace(&self, name: &str) -> Result<Namespace> {
		self.info.namespaces.get_namespace(name)
	}

	/// Adds a new namespace, with no names in it.
	pub fn add_namespace(&mut self, name: &str) -> Result<Namespace> {
		let namespace = self.info.namespaces.push(name)?;

		for class in self.classes.values_mut() {
			class.info.names.push_none();
			for field in class.fields.values_mut() {
				field.names.push_none();
			}
			for method in class.methods.values_mut() {
				method.names.push_none();
			}
		}

		Ok(namespace)
	}

	/// Returns `true` if there are no classes in this tree.
	pub fn is_empty(&self) -> bool {
		self.classes.is_empty()
	}

	pub fn classes(&self) -> impl Iterator<Item=&ClassNowodeMapping> {
		self.classes.values()
	}

	pub fn add_class(&mut self, info: ClassMapping) -> Result<&mut ClassNowodeMapping> {
		if info.names.len() != self.info.namespaces.len() {
			bail!("cannot add class {info:?} with {} names to mappings with namespaces {:?}", info.names.len(), self.info.namespaces);
		}

		match self.classes.entry(info.get_key()?) {
			Entry::Occupied(e) => {
				bail!("cannot add class {info:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				Ok(e.insert(ClassNowodeMapping::new(info)))
			},
		}
	}

	/// Returns the class mapping for the class with the given source namespace name, creating it if it's not
	/// already present.
	pub(crate) fn class_entry(&mut self, src: ClassName) -> &mut ClassNowodeMapping {
		let len = self.info.namespaces.len();
		self.classes.entry(src)
			.or_insert_with_key(|src| ClassNowodeMapping::new(ClassMapping {
				names: Names::from_first_name(src.clone(), len),
			}))
	}

	/// Looks up a class by its name in the given namespace.
	///
	/// For the source namespace this is a lookup by key, for all other namespaces it has to look at every class.
	/// Repeated lookups should use a [`MappingTreeRemapper`][crate::remapper::MappingTreeRemapper] instead.
	pub fn get_class(&self, name: &ClassNameSlice, namespace: Namespace) -> Option<&ClassNowodeMapping> {
		if namespace == Namespace::SOURCE {
			self.classes.get(name)
		} else {
			self.classes.values()
				.find(|class| class.info.names.get(namespace).is_some_and(|x| x.as_slice() == name))
		}
	}

	pub fn get_class_mut(&mut self, src: &ClassNameSlice) -> Option<&mut ClassNowodeMapping> {
		self.classes.get_mut(src)
	}

	/// Maps a class name from one namespace to another.
	///
	/// If the class isn't known in the namespace `from`, or if it has no name in the namespace `to`, the queried name
	/// is returned.
	pub fn map_class_name(&self, name: &ClassNameSlice, from: Namespace, to: Namespace) -> ClassName {
		self.get_class(name, from)
			.and_then(|class| class.info.names.get(to))
			.cloned()
			.unwrap_or_else(|| name.to_owned())
	}

	/// Looks up a field by its owner, name and descriptor in the given namespace.
	pub fn get_field(&self, owner: &ClassNameSlice, name: &FieldNameSlice, desc: &FieldDescriptorSlice, namespace: Namespace)
			-> Result<Option<&FieldMapping>> {
		let Some(class) = self.get_class(owner, namespace) else {
			return Ok(None);
		};

		if namespace == Namespace::SOURCE {
			return Ok(class.get_field(name, desc));
		}

		let descs = self.class_table(Namespace::SOURCE, namespace);
		for field in class.fields.values() {
			if field.names.get(namespace).is_some_and(|x| x.as_slice() == name) &&
				descs.map_field_desc(&field.desc)?.as_slice() == desc {
				return Ok(Some(field));
			}
		}
		Ok(None)
	}

	/// Looks up a method by its owner, name and descriptor in the given namespace.
	pub fn get_method(&self, owner: &ClassNameSlice, name: &MethodNameSlice, desc: &MethodDescriptorSlice, namespace: Namespace)
			-> Result<Option<&MethodMapping>> {
		let Some(class) = self.get_class(owner, namespace) else {
			return Ok(None);
		};

		if namespace == Namespace::SOURCE {
			return Ok(class.get_method(name, desc));
		}

		let descs = self.class_table(Namespace::SOURCE, namespace);
		for method in class.methods.values() {
			if method.names.get(namespace).is_some_and(|x| x.as_slice() == name) &&
				descs.map_method_desc(&method.desc)?.as_slice() == desc {
				return Ok(Some(method));
			}
		}
		Ok(None)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassNowodeMapping {
	pub(crate) info: ClassMapping,
	pub(crate) fields: IndexMap<FieldKey, FieldMapping>,
	pub(crate) methods: IndexMap<MethodKey, MethodMapping>,
}

impl ClassNowodeMapping {
	fn new(info: ClassMapping) -> Self {
		ClassNowodeMapping {
			info,
			fields: IndexMap::new(),
			methods: IndexMap::new(),
		}
	}

	pub fn names(&self) -> &Names<ClassName> {
		&self.info.names
	}

	/// Returns the name of this class in the source namespace.
	pub fn src(&self) -> Result<&ClassName> {
		self.info.names.first_name()
	}

	pub fn fields(&self) -> impl Iterator<Item=&FieldMapping> {
		self.fields.values()
	}

	pub fn methods(&self) -> impl Iterator<Item=&MethodMapping> {
		self.methods.values()
	}

	/// Looks up a field by its name and descriptor in the source namespace.
	pub fn get_field(&self, name: &FieldNameSlice, desc: &FieldDescriptorSlice) -> Option<&FieldMapping> {
		self.fields.get(&MemberKeyReq(name, desc))
	}

	/// Looks up a method by its name and descriptor in the source namespace.
	pub fn get_method(&self, name: &MethodNameSlice, desc: &MethodDescriptorSlice) -> Option<&MethodMapping> {
		self.methods.get(&MemberKeyReq(name, desc))
	}

	pub fn add_field(&mut self, child: FieldMapping) -> Result<()> {
		if child.names.len() != self.info.names.len() {
			bail!("cannot add field {child:?} to class {:?}: the number of names doesn't match", self.info.names);
		}
		match self.fields.entry(child.get_key()?) {
			Entry::Occupied(e) => {
				bail!("cannot add child {child:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				e.insert(child);
			},
		}

		Ok(())
	}

	pub fn add_method(&mut self, child: MethodMapping) -> Result<()> {
		if child.names.len() != self.info.names.len() {
			bail!("cannot add method {child:?} to class {:?}: the number of names doesn't match", self.info.names);
		}
		match self.methods.entry(child.get_key()?) {
			Entry::Occupied(e) => {
				bail!("cannot add child {child:?} for key {:?}, as there's already one: {:?}", e.key(), e.get());
			},
			Entry::Vacant(e) => {
				e.insert(child);
			},
		}

		Ok(())
	}

	pub(crate) fn field_entry(&mut self, key: FieldKey) -> &mut FieldMapping {
		let len = self.info.names.len();
		self.fields.entry(key)
			.or_insert_with_key(|key| FieldMapping {
				desc: key.desc.clone(),
				names: Names::from_first_name(key.name.clone(), len),
			})
	}

	pub(crate) fn method_entry(&mut self, key: MethodKey) -> &mut MethodMapping {
		let len = self.info.names.len();
		self.methods.entry(key)
			.or_insert_with_key(|key| MethodMapping {
				desc: key.desc.clone(),
				names: Names::from_first_name(key.name.clone(), len),
			})
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct MappingInfo {
	pub namespaces: Namespaces,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct ClassMapping {
	pub names: Names<ClassName>,
}

impl ToKey<ClassName> for ClassMapping {
	fn get_key(&self) -> Result<ClassName> {
		self.names.first_name().cloned()
	}
}

/// The key of a field: its name and descriptor in the source namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
	pub name: FieldName,
	pub desc: FieldDescriptor,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct FieldMapping {
	pub desc: FieldDescriptor,
	pub names: Names<FieldName>,
}

impl ToKey<FieldKey> for FieldMapping {
	fn get_key(&self) -> Result<FieldKey> {
		Ok(FieldKey {
			name: self.names.first_name()
				.with_context(|| anyhow!("field with descriptor {:?} has no source name", self.desc))?
				.clone(),
			desc: self.desc.clone(),
		})
	}
}

/// The key of a method: its name and descriptor in the source namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
	pub name: MethodName,
	pub desc: MethodDescriptor,
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord)]
pub struct MethodMapping {
	pub desc: MethodDescriptor,
	pub names: Names<MethodName>,
}

impl ToKey<MethodKey> for MethodMapping {
	fn get_key(&self) -> Result<MethodKey> {
		Ok(MethodKey {
			name: self.names.first_name()
				.with_context(|| anyhow!("method with descriptor {:?} has no source name", self.desc))?
				.clone(),
			desc: self.desc.clone(),
		})
	}
}

/// Allows looking up [`FieldKey`]s and [`MethodKey`]s in maps without allocating owned names.
///
/// The [`Hash`] implementation must match the derived one of the keys: first the name, then the descriptor.
#[derive(Debug, Hash)]
pub(crate) struct MemberKeyReq<'a, Name: ?Sized, Desc: ?Sized>(pub(crate) &'a Name, pub(crate) &'a Desc);

impl indexmap::Equivalent<FieldKey> for MemberKeyReq<'_, FieldNameSlice, FieldDescriptorSlice> {
	fn equivalent(&self, key: &FieldKey) -> bool {
		self.0 == key.name.as_slice() && self.1 == key.desc.as_slice()
	}
}

impl indexmap::Equivalent<MethodKey> for MemberKeyReq<'_, MethodNameSlice, MethodDescriptorSlice> {
	fn equivalent(&self, key: &MethodKey) -> bool {
		self.0 == key.name.as_slice() && self.1 == key.desc.as_slice()
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use jvm_names::class::ClassName;
	use jvm_names::field::{FieldDescriptor, FieldName};
	use crate::tree::mappings::{ClassMapping, FieldMapping, Mappings};
	use crate::tree::names::{Names, Namespace, Namespaces};

	#[test]
	fn add_namespace_extends_names() -> Result<()> {
		let mut mappings = Mappings::new(Namespaces::try_from(["official"])?);
		let class = mappings.add_class(ClassMapping { names: Names::from_strs(&["a"])? })?;
		class.add_field(FieldMapping {
			desc: FieldDescriptor::try_from("I")?,
			names: Names::from_strs(&["b"])?,
		})?;

		let named = mappings.add_namespace("named")?;
		assert_eq!(named, Namespace(1));

		let class = mappings.get_class(&ClassName::try_from("a")?, Namespace::SOURCE).expect("class a was added");
		assert_eq!(class.names().len(), 2);
		assert_eq!(class.names().get(named), None);
		let field = class.get_field(&FieldName::try_from("b")?, &FieldDescriptor::try_from("I")?).expect("field b was added");
		assert_eq!(field.names.len(), 2);

		Ok(())
	}

	#[test]
	fn add_class_twice_fails() -> Result<()> {
		let mut mappings = Mappings::new(Namespaces::try_from(["official", "named"])?);
		mappings.add_class(ClassMapping { names: Names::from_strs(&["a", "A"])? })?;

		assert!(mappings.add_class(ClassMapping { names: Names::from_strs(&["a", "B"])? }).is_err());
		assert!(mappings.add_class(ClassMapping { names: Names::from_strs(&["b"])? }).is_err());

		Ok(())
	}
}
