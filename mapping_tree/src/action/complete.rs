use anyhow::{bail, Result};
use log::debug;
use crate::tree::mappings::Mappings;
use crate::tree::names::Namespace;

impl Mappings {
	/// Creates new mappings where every class, field and method missing a name in the namespace `target` gets the
	/// name it has in the namespace `fill_from`.
	///
	/// The source namespace always has all names, so completing it returns the mappings unchanged.
	pub fn complete_namespace(&self, target: Namespace, fill_from: Namespace) -> Result<Mappings> {
		let len = self.info.namespaces.len();
		if target.0 >= len || fill_from.0 >= len {
			bail!("cannot complete namespace {target:?} from {fill_from:?}: there are only {len} namespaces: {:?}", self.info.namespaces);
		}

		let mut completed = self.clone();
		if target == Namespace::SOURCE {
			return Ok(completed);
		}

		let mut count = 0usize;
		for class in completed.classes.values_mut() {
			count += usize::from(class.info.names.complete(target, fill_from));

			for field in class.fields.values_mut() {
				count += usize::from(field.names.complete(target, fill_from));
			}
			for method in class.methods.values_mut() {
				count += usize::from(method.names.complete(target, fill_from));
			}
		}

		debug!("completed {count} names of namespace {:?} from namespace {:?}",
			self.info.namespaces[target], self.info.namespaces[fill_from]);

		Ok(completed)
	}
}
