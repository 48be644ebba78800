use anyhow::{anyhow, Context, Result};
use log::debug;
use mapping_tree::remapper::MappingTreeRemapper;
use mapping_tree::tree::mappings::Mappings;
use refmap::Refmap;
use crate::config::RemapConfig;
use crate::fragment::MappingFragment;
use crate::pipeline::read_mappings;

/// The merged mappings of a configuration, together with a remapper from its source to its target namespace.
#[derive(Debug)]
pub struct RemapSession {
	tree: Mappings,
	remapper: MappingTreeRemapper,
}

impl RemapSession {
	pub fn new(config: &RemapConfig, fragments: &[MappingFragment]) -> Result<RemapSession> {
		let tree = read_mappings(fragments, &config.source_namespace)?;

		let mut builder = MappingTreeRemapper::builder(&tree)
			.namespaces(&config.source_namespace, &config.target_namespace);
		if config.complete_namespaces {
			builder = match &config.completion_namespace {
				Some(namespace) => builder.complete_namespaces_from(namespace),
				None => builder.complete_namespaces(),
			};
		}
		let remapper = builder.build()
			.with_context(|| anyhow!("failed to create remapper from {:?} to {:?}", config.source_namespace, config.target_namespace))?;

		debug!("remap session from {:?} to {:?} with {} mapping files", config.source_namespace, config.target_namespace, fragments.len());
		Ok(RemapSession { tree, remapper })
	}

	/// The merged mappings, with the source namespace of the remapper as source namespace.
	pub fn tree(&self) -> &Mappings {
		&self.tree
	}

	pub fn remapper(&self) -> &MappingTreeRemapper {
		&self.remapper
	}

	/// Remaps the default references of the refmap, and the ones of the environment, if given.
	pub fn remap_refmap(&self, refmap: Refmap, environment: Option<&str>) -> Result<Refmap> {
		let refmap = refmap.remap_default(&self.remapper)?;
		match environment {
			Some(environment) => refmap.remap(environment, &self.remapper),
			None => Ok(refmap),
		}
	}
}
