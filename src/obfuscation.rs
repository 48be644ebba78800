//! Obfuscation types and mapping lookups for an annotation processor generating refmaps.
//!
//! Every ordered pair of namespaces of a mapping tree is an obfuscation type, with the key `from:to`. Some pairs are
//! also known under another name, see [`SPECIAL_NAMES`].

use std::borrow::Cow;
use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use jvm_names::class::{ClassName, ClassNameSlice};
use mapping_tree::remapper::{MappingTreeRemapper, Remapper};
use mapping_tree::tree::mappings::Mappings;
use refmap::entry::{ClassEntry, FieldEntry, MethodEntry};
use crate::fragment::{SOURCE_PLACEHOLDER, TARGET_PLACEHOLDER};

/// Obfuscation type keys that are also available under a second name, as `(key, name)`.
pub const SPECIAL_NAMES: &[(&str, &str)] = &[
	("named:srg", "searge"),
];

/// The namespaces to use for a mapping file without namespaces, as given by the options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FragmentNamespaceOptions {
	#[serde(rename = "mappingNamespaces.defaultSource", default)]
	pub default_source: Option<String>,
	#[serde(rename = "mappingNamespaces.defaultTarget", default)]
	pub default_target: Option<String>,
}

impl FragmentNamespaceOptions {
	/// Renames the placeholder namespaces of the mappings to the namespaces given.
	///
	/// Placeholders without a namespace given stay as they are.
	pub fn apply(&self, mappings: Mappings) -> Result<Mappings> {
		let mut renames = Vec::new();
		if let Some(source) = &self.default_source {
			renames.push((SOURCE_PLACEHOLDER, source.as_str()));
		}
		if let Some(target) = &self.default_target {
			renames.push((TARGET_PLACEHOLDER, target.as_str()));
		}

		if renames.is_empty() {
			return Ok(mappings);
		}
		mappings.rename_namespaces(&renames)
	}
}

/// An obfuscation type, identified by its key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObfuscationType {
	pub key: String,
}

impl ObfuscationType {
	pub fn new(key: impl Into<String>) -> ObfuscationType {
		ObfuscationType { key: key.into() }
	}

	/// The namespaces remapped between, as `(from, to)`.
	pub fn namespaces(&self) -> Result<(&str, &str)> {
		let key = SPECIAL_NAMES.iter()
			.find(|(_, name)| *name == self.key)
			.map_or(self.key.as_str(), |&(key, _)| key);

		key.split_once(':')
			.with_context(|| anyhow!("obfuscation type {:?} isn't of the form `from:to`", self.key))
	}

	/// Creates the mapping provider for this obfuscation type.
	pub fn mapping_provider(&self) -> Result<MappingTreeMappingProvider> {
		let (from, to) = self.namespaces()?;
		Ok(MappingTreeMappingProvider::new(from, to))
	}
}

/// All obfuscation types for the namespaces of the mapping tree.
///
/// Types come in the order of the namespaces, a special name right after the key it stands for.
pub fn obfuscation_types(tree: &Mappings) -> Vec<ObfuscationType> {
	let namespaces = tree.namespaces().names();

	let mut types = Vec::new();
	for from in namespaces {
		for to in namespaces {
			if from == to {
				continue;
			}

			let key = format!("{from}:{to}");
			let special = SPECIAL_NAMES.iter()
				.find(|(special, _)| *special == key)
				.map(|(_, name)| ObfuscationType::new(*name));

			types.push(ObfuscationType::new(key));
			types.extend(special);
		}
	}
	types
}

/// Looks up how classes, fields, methods and packages are called in another namespace.
///
/// The lookups give `None` for anything that stays the same.
#[derive(Debug, Clone)]
pub struct MappingTreeMappingProvider {
	from: String,
	to: String,
	empty: bool,
	remapper: Option<MappingTreeRemapper>,
}

impl MappingTreeMappingProvider {
	pub fn new(from: &str, to: &str) -> MappingTreeMappingProvider {
		MappingTreeMappingProvider {
			from: from.to_owned(),
			to: to.to_owned(),
			empty: true,
			remapper: None,
		}
	}

	/// Reads the mappings to look things up in.
	///
	/// Names missing in the namespace remapped from are filled in from the source namespace of the mappings.
	pub fn read(&mut self, tree: &Mappings) -> Result<()> {
		let remapper = MappingTreeRemapper::builder(tree)
			.namespaces(&self.from, &self.to)
			.complete_namespaces()
			.build()?;

		self.empty = tree.is_empty();
		self.remapper = Some(remapper);
		debug!("read mappings for {:?} to {:?}, empty: {}", self.from, self.to, self.empty);
		Ok(())
	}

	pub fn clear(&mut self) {
		self.remapper = None;
	}

	/// Whether there are no mappings to look things up in.
	pub fn is_empty(&self) -> bool {
		self.remapper.is_none() || self.empty
	}

	fn remapper(&self) -> Result<&MappingTreeRemapper> {
		match &self.remapper {
			Some(remapper) => Ok(remapper),
			None => bail!("no mappings read for {:?} to {:?}", self.from, self.to),
		}
	}

	pub fn get_class_mapping(&self, class: &ClassNameSlice) -> Result<Option<ClassName>> {
		let entry = ClassEntry { name: class.as_inner().to_owned() };
		Ok(match entry.remap(self.remapper()?)? {
			Cow::Borrowed(_) => None,
			Cow::Owned(entry) => Some(ClassName::try_from(entry.name)?),
		})
	}

	pub fn get_method_mapping(&self, method: &MethodEntry) -> Result<Option<MethodEntry>> {
		Ok(match method.remap(self.remapper()?)? {
			Cow::Borrowed(_) => None,
			Cow::Owned(method) => Some(method),
		})
	}

	pub fn get_field_mapping(&self, field: &FieldEntry) -> Result<Option<FieldEntry>> {
		Ok(match field.remap(self.remapper()?)? {
			Cow::Borrowed(_) => None,
			Cow::Owned(field) => Some(field),
		})
	}

	pub fn get_package_mapping(&self, package: &str) -> Result<Option<String>> {
		let name = self.remapper()?.map_package_name(package)?;
		Ok((name != package).then_some(name))
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use mapping_tree::tree::mappings::Mappings;
	use mapping_tree::tree::names::Namespaces;
	use crate::obfuscation::{FragmentNamespaceOptions, ObfuscationType};

	#[test]
	fn namespaces() -> Result<()> {
		assert_eq!(ObfuscationType::new("official:named").namespaces()?, ("official", "named"));
		assert_eq!(ObfuscationType::new("searge").namespaces()?, ("named", "srg"));
		assert_eq!(ObfuscationType::new("a:b:c").namespaces()?, ("a", "b:c"));
		assert!(ObfuscationType::new("named").namespaces().is_err());
		Ok(())
	}

	#[test]
	fn fragment_namespace_options() -> Result<()> {
		let mappings = Mappings::new(Namespaces::try_from(["source", "target"])?);

		let options: FragmentNamespaceOptions = serde_json::from_str(r#"{
			"mappingNamespaces.defaultSource": "named",
			"mappingNamespaces.defaultTarget": "official"
		}"#)?;
		options.apply(mappings.clone())?.namespaces().check_that(&["named", "official"])?;

		// the target doesn't get the name of the source
		let options = FragmentNamespaceOptions { default_source: None, default_target: Some("official".to_owned()) };
		options.apply(mappings.clone())?.namespaces().check_that(&["source", "official"])?;

		FragmentNamespaceOptions::default().apply(mappings)?.namespaces().check_that(&["source", "target"])?;
		Ok(())
	}
}
