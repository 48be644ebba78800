use std::borrow::Cow;
use anyhow::{anyhow, Context, Result};
use mapping_tree::tree::mappings::Mappings;
use crate::config::MappingFileConfig;

/// The name of the source namespace of mappings read from a format without namespaces.
pub const SOURCE_PLACEHOLDER: &str = "source";
/// The name of the target namespace of mappings read from a format without namespaces.
pub const TARGET_PLACEHOLDER: &str = "target";

/// One mapping file, read into a mapping tree, together with its settings.
#[derive(Debug, Clone)]
pub struct MappingFragment {
	pub mappings: Mappings,
	/// Whether the format the mappings were read from has namespaces. If not, the namespaces of the mappings are
	/// [`SOURCE_PLACEHOLDER`] and [`TARGET_PLACEHOLDER`].
	pub has_namespaces: bool,
	pub config: MappingFileConfig,
}

impl MappingFragment {
	/// Mappings read from a format with namespaces.
	pub fn new(mappings: Mappings, config: MappingFileConfig) -> MappingFragment {
		MappingFragment { mappings, has_namespaces: true, config }
	}

	/// Mappings read from a format without namespaces, so with the placeholder namespaces.
	pub fn without_namespaces(mappings: Mappings, config: MappingFileConfig) -> MappingFragment {
		MappingFragment { mappings, has_namespaces: false, config }
	}

	/// Gives the mappings with their real namespaces.
	///
	/// For formats without namespaces, the placeholders are renamed to the default source and target namespace.
	pub fn resolve_namespaces(&self) -> Result<Cow<'_, Mappings>> {
		if self.has_namespaces {
			return Ok(Cow::Borrowed(&self.mappings));
		}

		self.mappings.clone()
			.rename_namespaces(&[
				(SOURCE_PLACEHOLDER, &self.config.default_source_namespace),
				(TARGET_PLACEHOLDER, &self.config.default_target_namespace),
			])
			.map(Cow::Owned)
			.with_context(|| anyhow!("failed to apply default namespaces of {:?}", self.config))
	}
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use mapping_tree::tree::mappings::Mappings;
	use mapping_tree::tree::names::Namespaces;
	use crate::config::MappingFileConfig;
	use crate::fragment::MappingFragment;

	#[test]
	fn placeholders() -> Result<()> {
		let mappings = Mappings::new(Namespaces::try_from(["source", "target"])?);

		let fragment = MappingFragment::without_namespaces(mappings.clone(), MappingFileConfig::default());
		fragment.resolve_namespaces()?.namespaces().check_that(&["named", "official"])?;

		// with namespaces, even ones called like the placeholders stay
		let fragment = MappingFragment::new(mappings, MappingFileConfig::default());
		fragment.resolve_namespaces()?.namespaces().check_that(&["source", "target"])?;
		Ok(())
	}
}
