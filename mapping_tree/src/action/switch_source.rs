use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use crate::remapper::ClassRemapper;
use crate::tree::mappings::{FieldKey, Mappings, MethodKey};
use crate::tree::names::{Names, Namespace, Namespaces};

impl Mappings {
	/// Creates new mappings with the namespace `new_source` as the source namespace.
	///
	/// The new source namespace gets the id `0`, and the old source namespace takes the id the new one had. All other
	/// namespaces keep their id. Classes, fields and methods are then keyed by their names in the new source
	/// namespace. The ones without a name there keep their old source name, so that no names get lost. Descriptors
	/// are translated to the class names of the new source namespace.
	///
	/// Switching to the current source namespace gives back the same mappings. Mappings without any namespace give
	/// empty mappings with just the namespace `new_source`.
	pub fn switch_source(&self, new_source: &str) -> Result<Mappings> {
		if self.info.namespaces.is_empty() {
			return Ok(Mappings::new(Namespaces::try_from(vec![new_source.to_owned()])?));
		}

		let new = self.get_namespace(new_source)?;
		if new == Namespace::SOURCE {
			return Ok(self.clone());
		}

		debug!("switching source namespace of mappings with namespaces {:?} to {new_source:?}", self.info.namespaces);

		let table: Vec<Namespace> = self.info.namespaces.iter()
			.map(|namespace| match namespace {
				Namespace::SOURCE => new,
				namespace if namespace == new => Namespace::SOURCE,
				namespace => namespace,
			})
			.collect();
		let names_table: Vec<_> = table.iter().copied().map(Some).collect();

		// since the old and the new source namespace swap their positions, `new` is now where the old source is
		fn switch<T: Clone + std::fmt::Debug>(names: &Names<T>, table: &[Option<Namespace>], old_source: Namespace) -> Result<Names<T>> {
			let mut names = names.reorder(table);
			if names[0].is_none() {
				names[0] = names[old_source.0].clone();
			}
			names.try_into()
		}

		let descs = self.class_table(Namespace::SOURCE, new);

		let namespaces = self.info.namespaces.reorder(&table);
		let mut switched = Mappings::new(namespaces.clone());

		for class in self.classes.values() {
			let names = switch(&class.info.names, &names_table, new)?;
			let key = names.first_name()?.clone();

			let into = switched.class_entry(key.clone());
			for namespace in into.info.names.overwrite(names.names()) {
				warn!("class {key} has two names in namespace {:?} after switching source namespace", namespaces[namespace]);
			}

			for field in class.fields.values() {
				let names = switch(&field.names, &names_table, new)?;
				let field_key = FieldKey {
					name: names.first_name()?.clone(),
					desc: descs.map_field_desc(&field.desc)
						.with_context(|| anyhow!("in field {:?} of class {key:?}", field.names))?,
				};

				let entry = into.field_entry(field_key.clone());
				for namespace in entry.names.overwrite(names.names()) {
					warn!("field {key}.{}:{} has two names in namespace {:?} after switching source namespace",
						field_key.name, field_key.desc, namespaces[namespace]);
				}
			}

			for method in class.methods.values() {
				let names = switch(&method.names, &names_table, new)?;
				let method_key = MethodKey {
					name: names.first_name()?.clone(),
					desc: descs.map_method_desc(&method.desc)
						.with_context(|| anyhow!("in method {:?} of class {key:?}", method.names))?,
				};

				let entry = into.method_entry(method_key.clone());
				for namespace in entry.names.overwrite(names.names()) {
					warn!("method {key}.{}{} has two names in namespace {:?} after switching source namespace",
						method_key.name, method_key.desc, namespaces[namespace]);
				}
			}
		}

		Ok(switched)
	}
}
