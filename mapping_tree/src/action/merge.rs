use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use log::{debug, warn};
use jvm_names::class::{ClassName, ClassNameSlice};
use crate::remapper::ClassRemapper;
use crate::tree::mappings::{FieldKey, Mappings, MethodKey};
use crate::tree::names::{Namespace, Namespaces};

/// Maps the class names of the source namespace of the merged mappings to the keys of the classes they were merged
/// into.
struct ClassKeys(IndexMap<ClassName, ClassName>);

impl ClassRemapper for ClassKeys {
	fn map_class_fail(&self, class: &ClassNameSlice) -> Result<Option<ClassName>> {
		Ok(self.0.get(class).cloned())
	}
}

impl Mappings {
	/// Merges the mappings `other` into these.
	///
	/// Namespaces of `other` that these mappings don't have are added. Classes, fields and methods of `other` are
	/// matched by their names in the source namespace of these mappings, so `other` should have that namespace,
	/// otherwise they are matched by the source namespace of `other`. New ones are added. For ones already present, the
	/// names of `other` replace the existing ones in the same namespace, so with repeated merges the last one wins.
	///
	/// Ones that have no name in the source namespace of these mappings and can't be matched otherwise are left out,
	/// as there's nothing to key them by.
	///
	/// If these mappings don't have any namespace, they take the source namespace of `other`.
	pub fn merge(mut self, other: &Mappings) -> Result<Mappings> {
		if other.info.namespaces.is_empty() {
			return Ok(self);
		}
		if self.info.namespaces.is_empty() {
			self = Mappings::new(Namespaces::try_from(vec![other.src_namespace()?.to_owned()])?);
		}

		debug!("merging mappings with namespaces {:?} into mappings with namespaces {:?}", other.info.namespaces, self.info.namespaces);

		// the namespace of `self` each namespace of `other` goes to
		let mut columns = Vec::with_capacity(other.info.namespaces.len());
		for name in other.info.namespaces.names() {
			let namespace = if self.info.namespaces.contains(name) {
				self.get_namespace(name)?
			} else {
				self.add_namespace(name)?
			};
			columns.push(namespace);
		}
		// and the namespace of `other` each namespace of `self` gets its names from
		let mut table = vec![None; self.info.namespaces.len()];
		for (namespace, column) in other.info.namespaces.iter().zip(&columns) {
			table[column.0] = Some(namespace);
		}
		let other_source = columns.first().copied().unwrap_or(Namespace::SOURCE);

		let namespaces = self.info.namespaces.clone();

		// for matching classes of `other` that have no name in the source namespace of `self`
		let lookup: IndexMap<ClassName, ClassName> = if other_source == Namespace::SOURCE {
			IndexMap::new()
		} else {
			self.classes.iter()
				.filter_map(|(key, class)| Some((class.info.names.get(other_source)?.clone(), key.clone())))
				.collect()
		};

		let mut keys = IndexMap::new();
		for class in other.classes.values() {
			let other_name = class.src()?;
			let names = class.info.names.reorder(&table);

			let key = match &names[0] {
				Some(name) => name.clone(),
				None => match lookup.get(other_name) {
					Some(key) => key.clone(),
					None => {
						warn!("class {other_name} has no name in namespace {:?}, leaving it out", namespaces[Namespace::SOURCE]);
						continue;
					},
				},
			};

			let into = self.class_entry(key.clone());
			for namespace in into.info.names.overwrite(&names) {
				warn!("class {key}: name in namespace {:?} replaced by later mappings", namespaces[namespace]);
			}

			keys.insert(other_name.clone(), key);
		}

		let descs = ClassKeys(keys);

		for class in other.classes.values() {
			let other_name = class.src()?;
			let Some(key) = descs.0.get(other_name).cloned() else {
				continue;
			};
			let into = self.get_class_mut(&key)
				.with_context(|| anyhow!("class {key:?} was merged, but isn't present"))?;

			for field in class.fields.values() {
				let desc = descs.map_field_desc(&field.desc)
					.with_context(|| anyhow!("in field {:?} of class {key:?}", field.names))?;
				let other_name = field.names.first_name()?;
				let names = field.names.reorder(&table);

				let name = match &names[0] {
					Some(name) => name.clone(),
					None => {
						let existing = into.fields.values()
							.find(|x| x.desc == desc && x.names.get(other_source) == Some(other_name))
							.map(|x| x.names.first_name().cloned())
							.transpose()?;
						match existing {
							Some(name) => name,
							None => {
								warn!("member {other_name} of class {key} has no name in namespace {:?}, leaving it out",
									namespaces[Namespace::SOURCE]);
								continue;
							},
						}
					},
				};

				let field_key = FieldKey { name, desc };
				let entry = into.field_entry(field_key.clone());
				for namespace in entry.names.overwrite(&names) {
					warn!("field {key}.{}:{}: name in namespace {:?} replaced by later mappings",
						field_key.name, field_key.desc, namespaces[namespace]);
				}
			}

			for method in class.methods.values() {
				let desc = descs.map_method_desc(&method.desc)
					.with_context(|| anyhow!("in method {:?} of class {key:?}", method.names))?;
				let other_name = method.names.first_name()?;
				let names = method.names.reorder(&table);

				let name = match &names[0] {
					Some(name) => name.clone(),
					None => {
						let existing = into.methods.values()
							.find(|x| x.desc == desc && x.names.get(other_source) == Some(other_name))
							.map(|x| x.names.first_name().cloned())
							.transpose()?;
						match existing {
							Some(name) => name,
							None => {
								warn!("member {other_name} of class {key} has no name in namespace {:?}, leaving it out",
									namespaces[Namespace::SOURCE]);
								continue;
							},
						}
					},
				};

				let method_key = MethodKey { name, desc };
				let entry = into.method_entry(method_key.clone());
				for namespace in entry.names.overwrite(&names) {
					warn!("method {key}.{}{}: name in namespace {:?} replaced by later mappings",
						method_key.name, method_key.desc, namespaces[namespace]);
				}
			}
		}

		Ok(self)
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use crate::tree::mappings::Mappings;
	use crate::tree::names::Namespaces;

	#[test]
	fn merge_into_empty_takes_source() -> Result<()> {
		let other = Mappings::new(Namespaces::try_from(["official", "intermediary"])?);

		let merged = Mappings::empty().merge(&other)?;

		merged.namespaces().check_that(&["official", "intermediary"])?;
		Ok(())
	}

	#[test]
	fn merge_empty_keeps_namespaces() -> Result<()> {
		let mappings = Mappings::new(Namespaces::try_from(["official", "named"])?);

		assert_eq!(mappings.clone().merge(&Mappings::empty())?, mappings);
		Ok(())
	}
}
