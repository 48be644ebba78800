//! A single reference of a refmap, and the string form it's stored in.
//!
//! The string form is one of:
//! - `Lowner;name:desc` for a field, where `Lowner;` is optional,
//! - `Lowner;name(params)return` for a method, where `Lowner;` is optional,
//! - `name` for a class.
//!
//! When decoding, these are tried in that order. Anything without `:` and `(` is taken as a class, without checking
//! that it's a valid class name.

use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use anyhow::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use jvm_names::class::{ClassName, ClassNameSlice};
use jvm_names::field::{FieldDescriptor, FieldName};
use jvm_names::method::{MethodDescriptor, MethodName};
use mapping_tree::RemapError;
use mapping_tree::remapper::Remapper;

/// A reference to a class, a method or a field, as stored in a refmap.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RefmapEntry {
	Class(ClassEntry),
	Method(MethodEntry),
	Field(FieldEntry),
}

/// A class reference. The name is kept as written, it's not necessarily a valid class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassEntry {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodEntry {
	pub owner: Option<ClassName>,
	pub name: MethodName,
	pub desc: MethodDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldEntry {
	pub owner: Option<ClassName>,
	pub name: FieldName,
	pub desc: FieldDescriptor,
}

impl RefmapEntry {
	/// Remaps this reference.
	///
	/// Gives back [`Cow::Borrowed`] with `self` if nothing changed, so that callers can tell.
	pub fn remap(&self, remapper: &(impl Remapper + ?Sized)) -> Result<Cow<'_, RefmapEntry>> {
		Ok(match self {
			RefmapEntry::Class(entry) => lift(self, entry.remap(remapper)?, RefmapEntry::Class),
			RefmapEntry::Method(entry) => lift(self, entry.remap(remapper)?, RefmapEntry::Method),
			RefmapEntry::Field(entry) => lift(self, entry.remap(remapper)?, RefmapEntry::Field),
		})
	}
}

fn lift<'a, T: Clone>(this: &'a RefmapEntry, entry: Cow<'_, T>, f: impl FnOnce(T) -> RefmapEntry) -> Cow<'a, RefmapEntry> {
	match entry {
		Cow::Borrowed(_) => Cow::Borrowed(this),
		Cow::Owned(entry) => Cow::Owned(f(entry)),
	}
}

impl ClassEntry {
	/// Remaps the class name, giving back [`Cow::Borrowed`] with `self` if it didn't change.
	///
	/// Names that aren't valid class names can't be in any mappings, so they stay as they are.
	pub fn remap(&self, remapper: &(impl Remapper + ?Sized)) -> Result<Cow<'_, ClassEntry>> {
		let Ok(class) = <&ClassNameSlice>::try_from(self.name.as_str()) else {
			return Ok(Cow::Borrowed(self));
		};
		let name = remapper.map_class(class)?;

		Ok(if name == *class {
			Cow::Borrowed(self)
		} else {
			Cow::Owned(ClassEntry { name: name.into_inner() })
		})
	}
}

impl MethodEntry {
	/// Remaps owner, name and descriptor, giving back [`Cow::Borrowed`] with `self` if none of them changed.
	///
	/// Without an owner, the method can't be looked up, so only the descriptor is remapped.
	pub fn remap(&self, remapper: &(impl Remapper + ?Sized)) -> Result<Cow<'_, MethodEntry>> {
		let (owner, name) = match &self.owner {
			Some(owner) => (
				Some(remapper.map_class(owner)?),
				remapper.map_method_name(owner, &self.name, &self.desc)?,
			),
			None => (None, self.name.clone()),
		};
		let desc = remapper.map_method_desc(&self.desc)?;

		Ok(if owner == self.owner && name == self.name && desc == self.desc {
			Cow::Borrowed(self)
		} else {
			Cow::Owned(MethodEntry { owner, name, desc })
		})
	}
}

impl FieldEntry {
	/// Remaps owner, name and descriptor, giving back [`Cow::Borrowed`] with `self` if none of them changed.
	///
	/// Without an owner, the field can't be looked up, so only the descriptor is remapped.
	pub fn remap(&self, remapper: &(impl Remapper + ?Sized)) -> Result<Cow<'_, FieldEntry>> {
		let (owner, name) = match &self.owner {
			Some(owner) => (
				Some(remapper.map_class(owner)?),
				remapper.map_field_name(owner, &self.name, &self.desc)?,
			),
			None => (None, self.name.clone()),
		};
		let desc = remapper.map_field_desc(&self.desc)?;

		Ok(if owner == self.owner && name == self.name && desc == self.desc {
			Cow::Borrowed(self)
		} else {
			Cow::Owned(FieldEntry { owner, name, desc })
		})
	}
}

fn write_owner(f: &mut Formatter<'_>, owner: &Option<ClassName>) -> std::fmt::Result {
	match owner {
		Some(owner) => write!(f, "L{owner};"),
		None => Ok(()),
	}
}

impl Display for RefmapEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			RefmapEntry::Class(entry) => Display::fmt(entry, f),
			RefmapEntry::Method(entry) => Display::fmt(entry, f),
			RefmapEntry::Field(entry) => Display::fmt(entry, f),
		}
	}
}

impl Display for ClassEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name)
	}
}

impl Display for MethodEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write_owner(f, &self.owner)?;
		write!(f, "{}{}", self.name, self.desc)
	}
}

impl Display for FieldEntry {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write_owner(f, &self.owner)?;
		write!(f, "{}:{}", self.name, self.desc)
	}
}

/// Splits off an owner of the form `L...;` at the start, if there's one followed by something.
fn split_owner(s: &str) -> Option<(&str, &str)> {
	s.strip_prefix('L')
		.and_then(|x| x.split_once(';'))
		.filter(|(owner, rest)| !owner.is_empty() && !rest.is_empty())
}

/// The ways to read `s` as an optional owner followed by the rest, with the owner tried first.
fn owner_splits(s: &str) -> impl Iterator<Item=(Option<&str>, &str)> {
	split_owner(s)
		.map(|(owner, rest)| (Some(owner), rest))
		.into_iter()
		.chain(std::iter::once((None, s)))
}

fn parse_owner(owner: Option<&str>) -> Option<Option<ClassName>> {
	match owner {
		Some(owner) => ClassName::try_from(owner).ok().map(Some),
		None => Some(None),
	}
}

fn parse_field(s: &str) -> Option<FieldEntry> {
	owner_splits(s).find_map(|(owner, rest)| {
		let owner = parse_owner(owner)?;

		// the name takes as much as possible, so start with the last `:`
		rest.rmatch_indices(':')
			.filter(|&(index, _)| index > 0)
			.find_map(|(index, _)| {
				let name = FieldName::try_from(&rest[..index]).ok()?;
				let desc = FieldDescriptor::try_from(&rest[index + 1..]).ok()?;
				Some(FieldEntry { owner: owner.clone(), name, desc })
			})
	})
}

fn parse_method(s: &str) -> Option<MethodEntry> {
	owner_splits(s).find_map(|(owner, rest)| {
		let owner = parse_owner(owner)?;

		// the name takes as much as possible, so start with the last `(`
		rest.rmatch_indices('(')
			.filter(|&(index, _)| index > 0)
			.find_map(|(index, _)| {
				let name = MethodName::try_from(&rest[..index]).ok()?;
				let desc = MethodDescriptor::try_from(&rest[index..]).ok()?;
				Some(MethodEntry { owner: owner.clone(), name, desc })
			})
	})
}

impl FromStr for RefmapEntry {
	type Err = Error;

	/// Fails with [`RemapError::MalformedReference`] if it has a `:` or `(`, but is neither a field nor a method.
	fn from_str(s: &str) -> Result<RefmapEntry> {
		if s.contains(':') {
			if let Some(field) = parse_field(s) {
				return Ok(RefmapEntry::Field(field));
			}
		}
		if s.contains('(') {
			if let Some(method) = parse_method(s) {
				return Ok(RefmapEntry::Method(method));
			}
		}

		if s.contains([':', '(']) {
			return Err(RemapError::MalformedReference {
				reference: s.to_owned(),
				reason: "neither a field nor a method reference".to_owned(),
			}.into());
		}

		Ok(RefmapEntry::Class(ClassEntry { name: s.to_owned() }))
	}
}

impl Serialize for RefmapEntry {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for RefmapEntry {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(|e: Error| de::Error::custom(format!("{e:#}")))
	}
}
