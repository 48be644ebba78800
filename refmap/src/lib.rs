//! Mixin reference maps ("refmaps"), and remapping them.
//!
//! A refmap is a JSON document like this:
//! ```json
//! {
//!   "mappings": {
//!     "net/example/mixin/AppleMixin": {
//!       "eat": "Lnet/minecraft/class_1;method_1(I)V"
//!     }
//!   },
//!   "data": {
//!     "named:intermediary": {
//!       "net/example/mixin/AppleMixin": {
//!         "eat": "Lnet/minecraft/class_1;method_1(I)V"
//!       }
//!     }
//!   }
//! }
//! ```
//! The `mappings` are the default references, the `data` holds the references for specific environments. Each
//! reference has a key chosen by whoever wrote the refmap, which is kept as is, and a value that's a
//! [`RefmapEntry`][entry::RefmapEntry].

use std::io::{Read, Write};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use crate::entry::RefmapEntry;

pub mod entry;
mod transform;

/// The references of one mixin class, by their keys.
pub type References = IndexMap<String, RefmapEntry>;

/// The references of each mixin class, by the name of the mixin class.
pub type MixinReferences = IndexMap<String, References>;

/// A refmap.
///
/// The order of all maps is kept when reading and writing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Refmap {
	/// The default references.
	#[serde(default)]
	pub mappings: MixinReferences,
	/// The references for each environment, by the name of the environment.
	#[serde(default)]
	pub data: IndexMap<String, MixinReferences>,
}

impl Refmap {
	/// Reads a refmap from JSON.
	pub fn read(reader: impl Read) -> Result<Refmap> {
		serde_json::from_reader(reader)
			.context("failed to read refmap")
	}

	pub fn from_json_str(s: &str) -> Result<Refmap> {
		serde_json::from_str(s)
			.context("failed to parse refmap")
	}

	/// Writes this refmap as pretty printed JSON.
	pub fn write(&self, writer: impl Write) -> Result<()> {
		serde_json::to_writer_pretty(writer, self)
			.context("failed to write refmap")
	}

	pub fn to_json_string(&self) -> Result<String> {
		serde_json::to_string_pretty(self)
			.context("failed to write refmap")
	}
}
