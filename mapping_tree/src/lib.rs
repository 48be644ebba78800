//! Crate for holding mappings between several namespaces, and for remapping names with them.
//!
//! The mapping tree, [`tree::mappings::Mappings`], stores for each class, field and method a name in each of its
//! namespaces. The first namespace is the source namespace: the classes and members are keyed by their names (and
//! descriptors) in it. A name may be missing in every other namespace.
//!
//! On the tree, some actions are available:
//! - [`complete_namespace`][tree::mappings::Mappings::complete_namespace] fills in missing names of one namespace,
//! - [`switch_source`][tree::mappings::Mappings::switch_source] makes another namespace the source namespace,
//! - [`rename_namespaces`][tree::mappings::Mappings::rename_namespaces] renames namespaces,
//! - [`merge`][tree::mappings::Mappings::merge] adds the contents of another tree.
//!
//! To remap names, see the [`remapper`] module.

mod error;
mod action;

pub mod tree;
pub mod remapper;

pub use error::RemapError;
