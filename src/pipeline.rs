//! Merging the mapping files of a configuration into one mapping tree.
//!
//! Mapping files are merged in order. Each one is matched on its merge namespace: before merging it, the tree
//! built so far is switched to have the merge namespace as its source namespace, so that classes and members of
//! both are matched up by their names in that namespace.

use anyhow::{anyhow, Context, Result};
use log::debug;
use mapping_tree::RemapError;
use mapping_tree::tree::mappings::Mappings;
use crate::fragment::MappingFragment;

/// Merges the mapping files into one mapping tree, in order.
///
/// Names given by a later mapping file replace the ones of earlier files. Every mapping file must have its merge
/// namespace, otherwise this fails with [`RemapError::NamespaceNotFound`].
///
/// The source namespace of the result is the merge namespace of the last mapping file. Gives a tree without
/// namespaces if there are no mapping files.
pub fn merge_fragments(fragments: &[MappingFragment]) -> Result<Mappings> {
	let mut tree = Mappings::empty();
	let mut current_namespace: Option<&str> = None;

	for (index, fragment) in fragments.iter().enumerate() {
		let merge_namespace = fragment.config.merge_namespace.as_str();

		if current_namespace != Some(merge_namespace) {
			debug!("switching source namespace of merged mappings to {merge_namespace:?}");
			tree = tree.switch_source(merge_namespace)
				.with_context(|| anyhow!("failed to match up mapping file {index} on namespace {merge_namespace:?}"))?;
			current_namespace = Some(merge_namespace);
		}

		let mappings = fragment.resolve_namespaces()?;
		// entries are keyed by their names in the merge namespace, so the mapping file needs to have it
		if !mappings.namespaces().is_empty() {
			mappings.get_namespace(merge_namespace)
				.with_context(|| anyhow!("mapping file {index} can't be matched up on namespace {merge_namespace:?}"))?;
		}
		debug!("merging mapping file {index} with namespaces {:?}", mappings.namespaces());
		tree = tree.merge(&mappings)
			.with_context(|| anyhow!("failed to merge mapping file {index}"))?;
	}

	Ok(tree)
}

/// Merges the mapping files into one mapping tree, with the given source namespace.
///
/// Fails with [`RemapError::EmptyMappingSet`] if there are no mapping files.
pub fn read_mappings(fragments: &[MappingFragment], source_namespace: &str) -> Result<Mappings> {
	if fragments.is_empty() {
		return Err(RemapError::EmptyMappingSet.into());
	}

	let tree = merge_fragments(fragments)?;

	if tree.src_namespace()? != source_namespace {
		debug!("switching source namespace of merged mappings to {source_namespace:?}");
		return tree.switch_source(source_namespace)
			.with_context(|| anyhow!("failed to switch merged mappings to source namespace {source_namespace:?}"));
	}

	Ok(tree)
}
