use serde::{Deserialize, Serialize};

/// Settings of one mapping file.
///
/// Deserializing fills in the defaults for missing values. These match the usual setup for Proguard files:
/// `named` to `official`, merged on `official`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingFileConfig {
	/// The namespace to use for the source of mapping files without namespaces.
	#[serde(rename = "defaultSourceNamespace")]
	pub default_source_namespace: String,
	/// The namespace to use for the target of mapping files without namespaces.
	#[serde(rename = "defaultTargetNamespace")]
	pub default_target_namespace: String,
	/// The namespace classes, fields and methods of this mapping file are matched on when merging.
	#[serde(rename = "mergeNamespace")]
	pub merge_namespace: String,
}

impl Default for MappingFileConfig {
	fn default() -> Self {
		MappingFileConfig {
			default_source_namespace: "named".to_owned(),
			default_target_namespace: "official".to_owned(),
			merge_namespace: "official".to_owned(),
		}
	}
}

fn default_complete_namespaces() -> bool {
	true
}

/// Settings for remapping between two namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemapConfig {
	#[serde(rename = "sourceNamespace")]
	pub source_namespace: String,
	#[serde(rename = "targetNamespace")]
	pub target_namespace: String,
	/// Whether to fill in missing names of the source namespace before remapping.
	#[serde(rename = "completeNamespaces", default = "default_complete_namespaces")]
	pub complete_namespaces: bool,
	/// The namespace to take missing names from, the source namespace of the mappings if not given.
	#[serde(rename = "completionNamespace", default, skip_serializing_if = "Option::is_none")]
	pub completion_namespace: Option<String>,
}

impl RemapConfig {
	pub fn new(source_namespace: &str, target_namespace: &str) -> RemapConfig {
		RemapConfig {
			source_namespace: source_namespace.to_owned(),
			target_namespace: target_namespace.to_owned(),
			complete_namespaces: default_complete_namespaces(),
			completion_namespace: None,
		}
	}
}
