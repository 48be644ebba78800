use std::borrow::Cow;
use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use mapping_tree::remapper::Remapper;
use crate::{MixinReferences, Refmap};

fn remap_references(mixins: &mut MixinReferences, remapper: &(impl Remapper + ?Sized)) -> Result<usize> {
	let mut changed = 0;

	for (mixin, references) in mixins.iter_mut() {
		for (key, entry) in references.iter_mut() {
			let remapped = match entry.remap(remapper).with_context(|| anyhow!("failed to remap reference {key:?} of {mixin:?}"))? {
				Cow::Borrowed(_) => None,
				Cow::Owned(remapped) => Some(remapped),
			};

			if let Some(remapped) = remapped {
				trace!("{mixin}: {key}: {entry} -> {remapped}");
				*entry = remapped;
				changed += 1;
			}
		}
	}

	Ok(changed)
}

impl Refmap {
	/// Remaps all references of the given environment.
	///
	/// The default references and the ones of other environments stay as they are. If there's no such environment,
	/// nothing is changed.
	pub fn remap(mut self, environment: &str, remapper: &(impl Remapper + ?Sized)) -> Result<Refmap> {
		if let Some(references) = self.data.get_mut(environment) {
			let changed = remap_references(references, remapper)
				.with_context(|| anyhow!("in environment {environment:?}"))?;
			debug!("remapped {changed} references of environment {environment:?}");
		}
		Ok(self)
	}

	/// Remaps all default references.
	///
	/// The references of the environments stay as they are.
	pub fn remap_default(mut self, remapper: &(impl Remapper + ?Sized)) -> Result<Refmap> {
		let changed = remap_references(&mut self.mappings, remapper)
			.context("in the default references")?;
		debug!("remapped {changed} default references");
		Ok(self)
	}

	/// Moves the references of the environment `from` to the environment `to`, replacing any there.
	///
	/// If there's no environment `from`, nothing is changed. The environment `to` keeps its position if it was
	/// present, otherwise it's added at the end.
	pub fn rename_environment(mut self, from: &str, to: &str) -> Refmap {
		if let Some(references) = self.data.shift_remove(from) {
			self.data.insert(to.to_owned(), references);
		}
		self
	}
}
