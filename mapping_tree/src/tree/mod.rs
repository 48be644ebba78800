use anyhow::Result;

pub mod mappings;

pub trait ToKey<K> {
	fn get_key(&self) -> Result<K>;
}

pub mod names {
	use std::fmt::{Debug, Formatter};
	use std::ops::{Index, IndexMut};
	use anyhow::{anyhow, bail, Context, Error, Result};
	use crate::RemapError;

	/// Describes a given namespace of a mapping tree.
	///
	/// Namespace ids are dense: a tree with `n` namespaces uses the ids `0` to `n - 1`. The id `0` is always the
	/// source namespace, see [`Namespace::SOURCE`]. If this object was obtained from a given mapping tree (via
	/// [`Namespaces::get_namespace`]), it's in bounds for that tree.
	#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
	pub struct Namespace(pub(crate) usize);

	impl Namespace {
		/// The source namespace. Every non-empty mapping tree has it.
		pub const SOURCE: Namespace = Namespace(0);

		pub fn id(self) -> usize {
			self.0
		}
	}

	/// A struct storing the names of the namespaces.
	///
	/// The names are non-empty and pairwise distinct. The first one is the name of the source namespace, all others
	/// are names of destination namespaces.
	///
	/// Implements the [Index] and [IndexMut] traits for [Namespace].
	#[derive(Clone, PartialEq, Default)]
	pub struct Namespaces {
		names: Vec<String>,
	}

	impl Index<Namespace> for Namespaces {
		type Output = String;

		fn index(&self, index: Namespace) -> &Self::Output {
			&self.names[index.0]
		}
	}

	impl IndexMut<Namespace> for Namespaces {
		fn index_mut(&mut self, index: Namespace) -> &mut Self::Output {
			&mut self.names[index.0]
		}
	}

	impl Namespaces {
		pub fn names(&self) -> &[String] {
			&self.names
		}

		pub fn len(&self) -> usize {
			self.names.len()
		}

		pub fn is_empty(&self) -> bool {
			self.names.is_empty()
		}

		/// Iterates over all namespaces, starting with the source namespace.
		pub fn iter(&self) -> impl Iterator<Item=Namespace> {
			(0..self.names.len()).map(Namespace)
		}

		/// Returns the name of the source namespace.
		///
		/// Fails with [`RemapError::EmptyMappingSet`] if there are no namespaces at all.
		pub fn src(&self) -> Result<&str> {
			self.names.first()
				.map(String::as_str)
				.ok_or_else(|| RemapError::EmptyMappingSet.into())
		}

		/// Returns the names of the destination namespaces, which are all namespaces except the source namespace.
		pub fn dst(&self) -> &[String] {
			self.names.get(1..).unwrap_or(&[])
		}

		pub fn contains(&self, name: &str) -> bool {
			self.names.iter().any(|namespace| namespace == name)
		}

		/// Resolves the name of a namespace to its id.
		///
		/// Fails with [`RemapError::NamespaceNotFound`], listing the available namespaces, if there's no namespace with
		/// the given name.
		pub fn get_namespace(&self, name: &str) -> Result<Namespace> {
			for (id, namespace) in self.names.iter().enumerate() {
				if namespace == name {
					return Ok(Namespace(id))
				}
			}
			Err(RemapError::NamespaceNotFound {
				namespace: name.to_owned(),
				source_namespace: self.names.first().cloned(),
				destination_namespaces: self.dst().to_vec(),
			}.into())
		}

		/// Returns an error if the names of `self` aren't the names given in the argument.
		/// This can be used to check that after reading mappings, you have the correct namespaces in them.
		pub fn check_that(&self, names: &[&str]) -> Result<()> {
			if self.names != names {
				bail!("expected namespaces {names:?}, got {self:?}");
			}
			Ok(())
		}

		pub(crate) fn push(&mut self, name: &str) -> Result<Namespace> {
			if name.is_empty() {
				bail!("cannot add a namespace with an empty name to {self:?}");
			}
			if self.contains(name) {
				bail!("cannot add namespace {name:?} to {self:?}: it's already present");
			}
			self.names.push(name.to_owned());
			Ok(Namespace(self.names.len() - 1))
		}

		/// Returns namespaces where at position `i` the namespace `table[i]` of `self` is.
		pub(crate) fn reorder(&self, table: &[Namespace]) -> Namespaces {
			Namespaces {
				names: table.iter().map(|&namespace| self[namespace].clone()).collect(),
			}
		}

	}

	impl Debug for Namespaces {
		fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
			f.debug_list()
				.entries(&self.names)
				.finish()
		}
	}

	impl TryFrom<Vec<String>> for Namespaces {
		type Error = Error;

		fn try_from(value: Vec<String>) -> Result<Self> {
			let mut namespaces = Namespaces::default();
			for name in &value {
				namespaces.push(name)
					.with_context(|| anyhow!("invalid namespaces {value:?}: every namespace name must be non-empty and unique"))?;
			}
			Ok(namespaces)
		}
	}

	impl<const N: usize> TryFrom<[&str; N]> for Namespaces {
		type Error = Error;

		fn try_from(value: [&str; N]) -> Result<Self> {
			value.map(String::from).to_vec().try_into()
		}
	}

	impl From<Namespaces> for Vec<String> {
		fn from(value: Namespaces) -> Self {
			value.names
		}
	}

	/// A struct storing names for namespaces.
	///
	/// Invariants:
	/// the length is the number of namespaces of the mapping tree this is part of, and the first name (the one of the
	/// source namespace) is present
	///
	/// Implements the [Index] and [IndexMut] traits for [Namespace].
	#[derive(Clone, PartialEq, PartialOrd, Eq, Ord)]
	pub struct Names<T> {
		names: Vec<Option<T>>,
	}

	impl<T> Index<Namespace> for Names<T> {
		type Output = Option<T>;

		fn index(&self, index: Namespace) -> &Self::Output {
			&self.names[index.0]
		}
	}

	impl<T> IndexMut<Namespace> for Names<T> {
		fn index_mut(&mut self, index: Namespace) -> &mut Self::Output {
			&mut self.names[index.0]
		}
	}

	impl<T> Names<T> {
		pub(crate) fn from_first_name(src: T, len: usize) -> Names<T> {
			let mut names: Vec<Option<T>> = std::iter::repeat_with(|| None).take(len.max(1)).collect();
			names[0] = Some(src);
			Names { names }
		}

		/// Creates names from strings, where empty strings stand for no name.
		///
		/// ```
		/// # use anyhow::Result;
		/// # fn main() -> Result<()> {
		/// use jvm_names::class::ClassName;
		/// use mapping_tree::tree::names::{Names, Namespace};
		///
		/// let names: Names<ClassName> = Names::from_strs(&["net/a", "", "net/minecraft/A"])?;
		/// assert_eq!(names.len(), 3);
		/// assert_eq!(names.get(Namespace::SOURCE).map(|x| x.as_inner()), Some("net/a"));
		/// # Ok(())
		/// # }
		/// ```
		pub fn from_strs(names: &[&str]) -> Result<Names<T>>
		where
			T: Debug + for<'a> TryFrom<&'a str, Error = Error>,
		{
			names.iter()
				.map(|&name| if name.is_empty() { Ok(None) } else { T::try_from(name).map(Some) })
				.collect::<Result<Vec<_>>>()?
				.try_into()
		}

		pub fn len(&self) -> usize {
			self.names.len()
		}

		pub fn is_empty(&self) -> bool {
			self.names.is_empty()
		}

		/// Returns the name in the given namespace, or `None` if there's no name in that namespace, or if the namespace
		/// is out of bounds.
		pub fn get(&self, namespace: Namespace) -> Option<&T> {
			self.names.get(namespace.0).and_then(Option::as_ref)
		}

		pub fn first_name(&self) -> Result<&T> where T: Debug {
			self.names.first().context("no namespaces, so no name in the first namespace")?
				.as_ref().with_context(|| anyhow!("no name for the first namespace: {self:?}"))
		}

		pub fn names(&self) -> &[Option<T>] {
			&self.names
		}

		pub(crate) fn push_none(&mut self) {
			self.names.push(None);
		}

		/// Returns the names where at position `i` the name in namespace `table[i]` is.
		///
		/// The first name may be missing in the result, so it's not a [`Names`] object.
		pub(crate) fn reorder(&self, table: &[Option<Namespace>]) -> Vec<Option<T>> where T: Clone {
			table.iter()
				.map(|&namespace| namespace.and_then(|namespace| self.get(namespace)).cloned())
				.collect()
		}

		/// Sets the name in `namespace` to the one in `from`, unless there's already a name.
		///
		/// Returns `true` if a name was filled in.
		pub(crate) fn complete(&mut self, namespace: Namespace, from: Namespace) -> bool where T: Clone {
			if self[namespace].is_none() && self[from].is_some() {
				self[namespace] = self[from].clone();
				true
			} else {
				false
			}
		}

		/// Sets all names present in `names`, keeping the other ones.
		///
		/// Returns the namespaces where a different name got replaced.
		pub(crate) fn overwrite(&mut self, names: &[Option<T>]) -> Vec<Namespace> where T: Clone + PartialEq {
			let mut replaced = Vec::new();
			for (id, (old, new)) in self.names.iter_mut().zip(names).enumerate() {
				if let Some(new) = new {
					if old.as_ref().is_some_and(|old| old != new) {
						replaced.push(Namespace(id));
					}
					*old = Some(new.clone());
				}
			}
			replaced
		}
	}

	impl<T: Debug> Debug for Names<T> {
		fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
			f.debug_list()
				.entries(&self.names)
				.finish()
		}
	}

	impl<T: Debug> TryFrom<Vec<Option<T>>> for Names<T> {
		type Error = Error;

		fn try_from(value: Vec<Option<T>>) -> Result<Self> {
			if value.first().map_or(true, Option::is_none) {
				bail!("cannot create names without a name in the first namespace: {value:?}");
			}

			Ok(Names { names: value })
		}
	}

	impl<T> From<Names<T>> for Vec<Option<T>> {
		fn from(value: Names<T>) -> Self {
			value.names
		}
	}
}
