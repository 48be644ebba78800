//! Remapping of mixin refmaps between the namespaces of merged mapping files.
//!
//! The pieces:
//! - [`config`]: the settings of mapping files and of remapping,
//! - [`fragment`] and [`pipeline`]: merging mapping files into one mapping tree,
//! - [`remap`]: remapping refmaps with the merged mappings,
//! - [`obfuscation`]: the lookups an annotation processor needs when generating refmaps.
//!
//! The mapping tree and remappers are in [`mapping_tree`], refmaps are in [`refmap`].

pub mod config;
pub mod fragment;
pub mod obfuscation;
pub mod pipeline;
pub mod remap;

pub use jvm_names;
pub use mapping_tree;
pub use refmap;
