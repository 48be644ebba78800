pub(crate) mod complete;
pub(crate) mod merge;
pub(crate) mod switch_source;

use anyhow::{anyhow, Context, Result};
use crate::tree::mappings::Mappings;
use crate::tree::names::Namespaces;

impl Mappings {
	/// Renames namespaces, given as pairs of old and new name.
	///
	/// Pairs naming a namespace these mappings don't have are ignored. All renames happen at once, so two namespaces
	/// can swap their names. Fails if the new names aren't unique.
	pub fn rename_namespaces(mut self, renames: &[(&str, &str)]) -> Result<Mappings> {
		let old: Vec<String> = self.info.namespaces.clone().into();

		let new: Vec<String> = old.iter()
			.map(|name| {
				renames.iter()
					.find(|(from, _)| from == name)
					.map_or_else(|| name.clone(), |(_, to)| (*to).to_owned())
			})
			.collect();

		self.info.namespaces = Namespaces::try_from(new)
			.with_context(|| anyhow!("failed to rename namespaces {old:?} with {renames:?}"))?;

		Ok(self)
	}
}
