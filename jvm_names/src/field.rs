use anyhow::{bail, Result};
use crate::class::{ClassName, ClassNameSlice};
use crate::macros::{make_display, make_string_str_like};

make_string_str_like!(
	/// Represents a field name.
	///
	/// A field name is an unqualified name as described in JVMS 4.2.2.
	pub FieldName;
	/// A [`FieldName`] slice.
	pub FieldNameSlice;
	is_valid(s) = if crate::names::is_valid_unqualified_name(s) {
		Ok(())
	} else {
		bail!("invalid field name: must be non-empty and not contain any of `.`, `;`, `[` and `/`");
	};
);
make_display!(FieldName, FieldNameSlice);

make_string_str_like!(
	/// Represents a field descriptor, like `I` or `[Ljava/lang/Object;`.
	pub FieldDescriptor;
	/// A [`FieldDescriptor`] slice.
	pub FieldDescriptorSlice;
	is_valid(s) = crate::descriptor::check_field_descriptor(s);
);
make_display!(FieldDescriptor, FieldDescriptorSlice);

impl FieldDescriptorSlice {
	/// Replaces every class name in this descriptor with the one given by `f`.
	pub fn map_class_names(&self, f: impl FnMut(&ClassNameSlice) -> Result<ClassName>) -> Result<FieldDescriptor> {
		crate::descriptor::map_class_names(self.as_inner(), f)?.try_into()
	}
}
