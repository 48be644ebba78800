use std::iter::Peekable;
use std::str::Chars;
use anyhow::{anyhow, bail, Context, Result};
use crate::class::{ClassName, ClassNameSlice};

// The grammar for descriptors is:
//   FieldDescriptor:
//     FieldType
//
//   MethodDescriptor:
//     "(" FieldType* ")" ReturnDescriptor
//
//   ReturnDescriptor:
//     FieldType | "V"
//
//   FieldType:
//     "B" | "C" | "D" | "F" | "I" | "J" | "S" | "Z" |
//     "L" ClassName ";" |
//     "[" FieldType
fn read_field_type(chars: &mut Peekable<Chars>) -> Result<()> {
	let mut array_dimension = 0usize;
	while chars.next_if_eq(&'[').is_some() {
		array_dimension += 1;
	}
	if array_dimension > 255 {
		bail!("array dimension {array_dimension} is larger than the maximum of 255");
	}

	match chars.next().ok_or_else(|| anyhow!("unexpected abrupt ending of descriptor"))? {
		'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' => Ok(()),
		'L' => {
			let mut s = String::new();
			loop {
				match chars.next() {
					Some(';') => break,
					Some(char) => s.push(char),
					None => bail!("unexpected abrupt ending of descriptor: missing `;` after class name {s:?}"),
				}
			}

			if !crate::names::is_valid_obj_class_name(&s) {
				bail!("invalid class name {s:?} in descriptor");
			}
			Ok(())
		},
		x => bail!("unexpected char {x:?} in descriptor"),
	}
}

pub(crate) fn check_field_descriptor(desc: &str) -> Result<()> {
	let mut chars = desc.chars().peekable();

	read_field_type(&mut chars)?;

	if let Some(x) = chars.next() {
		bail!("unexpected char {x:?} after the end of a field descriptor");
	}
	Ok(())
}

pub(crate) fn is_valid_field_descriptor(desc: &str) -> bool {
	check_field_descriptor(desc).is_ok()
}

pub(crate) fn check_method_descriptor(desc: &str) -> Result<()> {
	let mut chars = desc.chars().peekable();

	if chars.next_if_eq(&'(').is_none() {
		bail!("a method descriptor must start with `(`");
	}
	while chars.next_if_eq(&')').is_none() {
		if chars.peek().is_none() {
			bail!("unexpected abrupt ending of descriptor: missing `)`");
		}
		read_field_type(&mut chars).context("in parameter descriptor")?;
	}
	if chars.next_if_eq(&'V').is_none() {
		read_field_type(&mut chars).context("in return descriptor")?;
	}

	if let Some(x) = chars.next() {
		bail!("unexpected char {x:?} after the end of a method descriptor");
	}
	Ok(())
}

/// Replaces every class name in a descriptor with the one returned by `f`.
///
/// Works for field, method and return descriptors. Everything outside of `L...;` is copied over as is. The result
/// is not checked for validity, use the `map_class_names` methods of the descriptor types for that.
pub fn map_class_names(desc: &str, mut f: impl FnMut(&ClassNameSlice) -> Result<ClassName>) -> Result<String> {
	let mut s = String::with_capacity(desc.len());

	let mut iter = desc.chars();

	while let Some(ch) = iter.next() {
		s.push(ch);

		if ch == 'L' {
			let mut class_name = String::new();
			for ch in iter.by_ref() {
				class_name.push(ch);
				if ch == ';' {
					break;
				}
			}
			if class_name.pop() != Some(';') {
				bail!("descriptor {desc:?} has a missing semicolon somewhere");
			}

			let old_class_name: &ClassNameSlice = class_name.as_str().try_into()
				.with_context(|| anyhow!("in descriptor {desc:?}"))?;
			let new_class_name = f(old_class_name)?;

			s.push_str(new_class_name.as_inner());
			s.push(';');
		}
	}

	Ok(s)
}

#[cfg(test)]
mod testing {
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use crate::class::ClassName;
	use crate::descriptor::map_class_names;

	#[test]
	fn map_class_names_keeps_primitives() -> Result<()> {
		let mapped = map_class_names("([[IJLa;)[Lb/C;", |class| {
			Ok(match class.as_inner() {
				"a" => ClassName::try_from("net/A")?,
				other => ClassName::try_from(other)?,
			})
		})?;

		assert_eq!(mapped, "([[IJLnet/A;)[Lb/C;");
		Ok(())
	}

	#[test]
	fn map_class_names_class_containing_l() -> Result<()> {
		let mapped = map_class_names("(LLol;)LL;", |class| ClassName::try_from(format!("x/{class}")))?;

		assert_eq!(mapped, "(Lx/Lol;)Lx/L;");
		Ok(())
	}

	#[test]
	fn map_class_names_missing_semicolon() {
		assert!(map_class_names("(La)V", |class| Ok(class.to_owned())).is_err());
	}
}
