use thiserror::Error;

/// The errors callers might want to tell apart.
///
/// These are always returned wrapped in an [`anyhow::Error`], use [`anyhow::Error::downcast_ref`] to get them out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemapError {
	/// A namespace was requested that the mapping tree doesn't have.
	#[error("namespace {namespace:?} not present in mapping tree, available: src: {source_namespace:?}, dst: {destination_namespaces:?}")]
	NamespaceNotFound {
		namespace: String,
		source_namespace: Option<String>,
		destination_namespaces: Vec<String>,
	},
	/// There is no source namespace, because no mappings were given at all.
	#[error("the mapping set is empty, there is no source namespace")]
	EmptyMappingSet,
	/// A reference in a refmap is neither a class, nor a method, nor a field reference.
	#[error("malformed reference {reference:?}: {reason}")]
	MalformedReference {
		reference: String,
		reason: String,
	},
}
