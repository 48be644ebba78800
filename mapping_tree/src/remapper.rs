//! Remappers for remapping class names, descriptors, fields and methods.
//!
//! For remapping just classes and descriptors, you're interested in [`ClassRemapper`].
//! If you also want to remap field names, method names and the like, use the [`Remapper`].
//!
//! Implementors of these traits can be created by [`Mappings::class_table`] and [`Mappings::remapper`] for
//! remapping between given namespaces. For more control over how the remapper is built, use
//! [`MappingTreeRemapper::builder`].
//!
//! In case you want to implement a remapper yourself, you only need to define the trait methods that don't have
//! a default implementation.
//!
//! # What is a "remapper"?
//! A remapper answers the question for you "what is the name of X in namespace Y?"
//!
//! If it doesn't know, it answers with the name it was asked about. Mapping sets usually only cover the classes of
//! a project, not the ones of libraries, so an unknown class is never an error.

use anyhow::{anyhow, bail, Context, Result};
use indexmap::IndexMap;
use log::debug;
use jvm_names::class::{ClassName, ClassNameSlice};
use jvm_names::field::{FieldDescriptor, FieldDescriptorSlice, FieldName, FieldNameSlice};
use jvm_names::method::{MethodDescriptor, MethodDescriptorSlice, MethodName, MethodNameSlice};
use crate::tree::mappings::{FieldKey, Mappings, MemberKeyReq, MethodKey};
use crate::tree::names::Namespace;

/// A remapper supporting remapping of class names and descriptors.
pub trait ClassRemapper {
	/// Maps a class name to a new one, if the mapping exists.
	///
	/// If the mapping doesn't exist, returns `Ok(None)`.
	fn map_class_fail(&self, class: &ClassNameSlice) -> Result<Option<ClassName>>;

	/// Maps a class name to a new one, if the mapping doesn't exist, return the old one.
	///
	/// Array class names have the class names in them mapped.
	///
	/// Do not implement this yourself.
	fn map_class(&self, class: &ClassNameSlice) -> Result<ClassName> {
		if class.is_array() {
			let desc: &FieldDescriptorSlice = class.as_inner().try_into()?;
			return self.map_field_desc(desc)?.into_inner().try_into();
		}
		Ok(self.map_class_fail(class)?.unwrap_or_else(|| class.to_owned()))
	}

	/// Maps a field descriptor to a new one.
	///
	/// Note that this relies on the fact that for non-existing class mappings class names are just copied over.
	///
	/// Do not implement this yourself.
	fn map_field_desc(&self, desc: &FieldDescriptorSlice) -> Result<FieldDescriptor> {
		desc.map_class_names(|class| self.map_class(class))
	}

	/// Maps a method descriptor to a new one.
	///
	/// Note that this relies on the fact that for non-existing class mappings class names are just copied over.
	///
	/// Do not implement this yourself.
	fn map_method_desc(&self, desc: &MethodDescriptorSlice) -> Result<MethodDescriptor> {
		desc.map_class_names(|class| self.map_class(class))
	}
}

/// A remapper supporting remapping fields, methods and packages, as well as class names and descriptors.
///
/// This is the callback a bytecode rewriter needs. If you only want to remap class names and descriptors, consider
/// using [`ClassRemapper`] instead.
///
/// Owners and descriptors given to the methods of this trait are in the namespace remapped from.
pub trait Remapper: ClassRemapper {
	/// Maps a field name to a new one, if the mapping exists.
	///
	/// If the mapping doesn't exist, returns `Ok(None)`.
	fn map_field_name_fail(&self, owner: &ClassNameSlice, name: &FieldNameSlice, desc: &FieldDescriptorSlice) -> Result<Option<FieldName>>;

	/// Maps a field name to a new one, if the mapping doesn't exist returns the old name.
	///
	/// Do not implement this yourself.
	fn map_field_name(&self, owner: &ClassNameSlice, name: &FieldNameSlice, desc: &FieldDescriptorSlice) -> Result<FieldName> {
		Ok(self.map_field_name_fail(owner, name, desc)?.unwrap_or_else(|| name.to_owned()))
	}

	/// Maps a method name to a new one, if the mapping exists.
	///
	/// If the mapping doesn't exist, returns `Ok(None)`.
	fn map_method_name_fail(&self, owner: &ClassNameSlice, name: &MethodNameSlice, desc: &MethodDescriptorSlice) -> Result<Option<MethodName>>;

	/// Maps a method name to a new one, if the mapping doesn't exist returns the old name.
	///
	/// Do not implement this yourself.
	fn map_method_name(&self, owner: &ClassNameSlice, name: &MethodNameSlice, desc: &MethodDescriptorSlice) -> Result<MethodName> {
		Ok(self.map_method_name_fail(owner, name, desc)?.unwrap_or_else(|| name.to_owned()))
	}

	/// Maps the name of a record component.
	///
	/// Record components are backed by fields of the same name and descriptor, so this maps like the field does.
	fn map_record_component_name(&self, owner: &ClassNameSlice, name: &FieldNameSlice, desc: &FieldDescriptorSlice) -> Result<FieldName> {
		self.map_field_name(owner, name, desc)
	}

	/// Maps a package name, in internal form (`java/lang`).
	///
	/// Mapping trees don't rename packages, so by default this returns the name given.
	fn map_package_name(&self, name: &str) -> Result<String> {
		Ok(name.to_owned())
	}
}

/// A remapper that doesn't know any mapping, and therefore gives back every name it's asked about.
#[derive(Debug, Copy, Clone, Default)]
pub struct IdentityRemapper;

impl ClassRemapper for IdentityRemapper {
	fn map_class_fail(&self, _class: &ClassNameSlice) -> Result<Option<ClassName>> {
		Ok(None)
	}
}

impl Remapper for IdentityRemapper {
	fn map_field_name_fail(&self, _owner: &ClassNameSlice, _name: &FieldNameSlice, _desc: &FieldDescriptorSlice) -> Result<Option<FieldName>> {
		Ok(None)
	}

	fn map_method_name_fail(&self, _owner: &ClassNameSlice, _name: &MethodNameSlice, _desc: &MethodDescriptorSlice) -> Result<Option<MethodName>> {
		Ok(None)
	}
}

/// A [`ClassRemapper`] borrowing the class names of a mapping tree.
#[derive(Debug)]
pub struct ClassTable<'a> {
	classes: IndexMap<&'a ClassNameSlice, &'a ClassNameSlice>,
}

impl ClassRemapper for ClassTable<'_> {
	fn map_class_fail(&self, class: &ClassNameSlice) -> Result<Option<ClassName>> {
		match self.classes.get(class) {
			None => Ok(None),
			Some(&class) => Ok(Some(class.to_owned())),
		}
	}
}

impl Mappings {
	/// Creates a remapper for class names and descriptors from the namespace `from` to the namespace `to`.
	///
	/// Classes missing a name in either of the namespaces are left out, so they are mapped to the name queried.
	pub fn class_table(&self, from: Namespace, to: Namespace) -> ClassTable<'_> {
		let mut classes = IndexMap::new();
		for class in self.classes.values() {
			if let (Some(from), Some(to)) = (class.info.names.get(from), class.info.names.get(to)) {
				classes.insert(from.as_slice(), to.as_slice());
			}
		}
		ClassTable { classes }
	}

	/// Creates a remapper from the namespace `from` to the namespace `to`, without namespace completion.
	///
	/// This is a shortcut for `MappingTreeRemapper::builder(self).namespaces(from, to).build()`.
	pub fn remapper(&self, from: &str, to: &str) -> Result<MappingTreeRemapper> {
		MappingTreeRemapper::builder(self)
			.namespaces(from, to)
			.build()
	}
}

#[derive(Debug, Clone)]
struct RemapperClass {
	name: Option<ClassName>,
	fields: IndexMap<FieldKey, Option<FieldName>>,
	methods: IndexMap<MethodKey, Option<MethodName>>,
}

/// The remapper between two namespaces of a mapping tree.
///
/// It doesn't borrow the mapping tree: all names needed are collected when building it, keyed by their names and
/// descriptors in the namespace remapped from. Lookups therefore don't depend on the source namespace of the tree.
///
/// If a class or member is found, but has no name in the namespace remapped to, the name queried is returned.
#[derive(Debug, Clone)]
pub struct MappingTreeRemapper {
	from: String,
	to: String,
	classes: IndexMap<ClassName, RemapperClass>,
}

impl MappingTreeRemapper {
	pub fn builder(tree: &Mappings) -> MappingTreeRemapperBuilder<'_> {
		MappingTreeRemapperBuilder {
			tree,
			namespaces: None,
			completion: None,
		}
	}

	/// The name of the namespace this remaps from.
	pub fn from(&self) -> &str {
		&self.from
	}

	/// The name of the namespace this remaps to.
	pub fn to(&self) -> &str {
		&self.to
	}

	fn new(tree: &Mappings, from: &str, to: &str) -> Result<MappingTreeRemapper> {
		let from_namespace = tree.get_namespace(from)?;
		let to_namespace = tree.get_namespace(to)?;

		debug!("building remapper from {from:?} ({from_namespace:?}) to {to:?} ({to_namespace:?})");

		let descs = tree.class_table(Namespace::SOURCE, from_namespace);

		let mut classes = IndexMap::new();
		for class in tree.classes.values() {
			let Some(class_from) = class.info.names.get(from_namespace) else {
				continue;
			};

			let mut fields = IndexMap::new();
			for field in class.fields.values() {
				if let Some(name_from) = field.names.get(from_namespace) {
					let key = FieldKey {
						name: name_from.clone(),
						desc: descs.map_field_desc(&field.desc)
							.with_context(|| anyhow!("in field {:?} of class {class_from:?}", field.names))?,
					};
					fields.insert(key, field.names.get(to_namespace).cloned());
				}
			}

			let mut methods = IndexMap::new();
			for method in class.methods.values() {
				if let Some(name_from) = method.names.get(from_namespace) {
					let key = MethodKey {
						name: name_from.clone(),
						desc: descs.map_method_desc(&method.desc)
							.with_context(|| anyhow!("in method {:?} of class {class_from:?}", method.names))?,
					};
					methods.insert(key, method.names.get(to_namespace).cloned());
				}
			}

			classes.insert(class_from.clone(), RemapperClass {
				name: class.info.names.get(to_namespace).cloned(),
				fields,
				methods,
			});
		}

		Ok(MappingTreeRemapper {
			from: from.to_owned(),
			to: to.to_owned(),
			classes,
		})
	}
}

impl ClassRemapper for MappingTreeRemapper {
	fn map_class_fail(&self, class: &ClassNameSlice) -> Result<Option<ClassName>> {
		Ok(self.classes.get(class).and_then(|class| class.name.clone()))
	}
}

impl Remapper for MappingTreeRemapper {
	fn map_field_name_fail(&self, owner: &ClassNameSlice, name: &FieldNameSlice, desc: &FieldDescriptorSlice) -> Result<Option<FieldName>> {
		Ok(self.classes.get(owner)
			.and_then(|class| class.fields.get(&MemberKeyReq(name, desc)))
			.and_then(Option::clone))
	}

	fn map_method_name_fail(&self, owner: &ClassNameSlice, name: &MethodNameSlice, desc: &MethodDescriptorSlice) -> Result<Option<MethodName>> {
		// constructors and static initializers keep their names in every namespace
		if name.is_special() {
			return Ok(None);
		}
		Ok(self.classes.get(owner)
			.and_then(|class| class.methods.get(&MemberKeyReq(name, desc)))
			.and_then(Option::clone))
	}
}

/// Configures a [`MappingTreeRemapper`] before building it.
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use jvm_names::class::ClassName;
/// use mapping_tree::remapper::{ClassRemapper, MappingTreeRemapper};
/// use mapping_tree::tree::mappings::{ClassMapping, Mappings};
/// use mapping_tree::tree::names::{Names, Namespaces};
///
/// let mut tree = Mappings::new(Namespaces::try_from(["official", "intermediary", "named"])?);
/// tree.add_class(ClassMapping { names: Names::from_strs(&["a", "class_1", ""])? })?;
///
/// // "a" has no name in "named", completion gives it the one from "official"
/// let remapper = MappingTreeRemapper::builder(&tree)
/// 	.namespaces("named", "intermediary")
/// 	.complete_namespaces()
/// 	.build()?;
///
/// assert_eq!(remapper.map_class(&ClassName::try_from("a")?)?, ClassName::try_from("class_1")?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MappingTreeRemapperBuilder<'a> {
	tree: &'a Mappings,
	namespaces: Option<(String, String)>,
	/// `Some(None)` completes from the source namespace.
	completion: Option<Option<String>>,
}

impl MappingTreeRemapperBuilder<'_> {
	/// Sets the namespaces to remap between.
	pub fn namespaces(mut self, from: &str, to: &str) -> Self {
		self.namespaces = Some((from.to_owned(), to.to_owned()));
		self
	}

	/// Fills in the names missing in the namespace remapped from with the names of the source namespace.
	pub fn complete_namespaces(mut self) -> Self {
		self.completion = Some(None);
		self
	}

	/// Fills in the names missing in the namespace remapped from with the names of the given namespace.
	pub fn complete_namespaces_from(mut self, namespace: &str) -> Self {
		self.completion = Some(Some(namespace.to_owned()));
		self
	}

	pub fn build(self) -> Result<MappingTreeRemapper> {
		let Some((from, to)) = self.namespaces else {
			bail!("the namespaces to remap between must be set before building a remapper");
		};

		let src = self.tree.src_namespace()?;

		match self.completion {
			// lookups are keyed by the source namespace, there's nothing to complete there
			Some(fill_from) if from != src => {
				let fill_from = fill_from.as_deref().unwrap_or(src);
				debug!("completing namespace {from:?} from {fill_from:?} before building remapper");

				let target = self.tree.get_namespace(&from)?;
				let fill_from = self.tree.get_namespace(fill_from)?;
				let completed = self.tree.complete_namespace(target, fill_from)?;

				MappingTreeRemapper::new(&completed, &from, &to)
			},
			_ => MappingTreeRemapper::new(self.tree, &from, &to),
		}
	}
}
