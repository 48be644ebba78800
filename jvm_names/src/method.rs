use anyhow::{bail, Result};
use crate::class::{ClassName, ClassNameSlice};
use crate::macros::{make_display, make_string_str_like};

make_string_str_like!(
	/// Represents a method name.
	///
	/// Apart from the special names `<init>` and `<clinit>`, a method name is an unqualified name that may not
	/// contain `<` or `>`.
	pub MethodName;
	/// A [`MethodName`] slice.
	pub MethodNameSlice;
	is_valid(s) = if crate::names::is_valid_method_name(s) {
		Ok(())
	} else {
		bail!("invalid method name: must be either `<init>`, `<clinit>` or non-empty and not contain any of `.`, `;`, `[`, `/`, `<` and `>`");
	};
);
make_display!(MethodName, MethodNameSlice);

impl MethodNameSlice {
	/// Returns whether this is the name of a constructor or of a static initializer.
	pub fn is_special(&self) -> bool {
		matches!(self.as_inner(), "<init>" | "<clinit>")
	}
}

make_string_str_like!(
	/// Represents a method descriptor, like `(I[Ljava/lang/String;)V`.
	pub MethodDescriptor;
	/// A [`MethodDescriptor`] slice.
	pub MethodDescriptorSlice;
	is_valid(s) = crate::descriptor::check_method_descriptor(s);
);
make_display!(MethodDescriptor, MethodDescriptorSlice);

impl MethodDescriptorSlice {
	/// Replaces every class name in this descriptor with the one given by `f`.
	pub fn map_class_names(&self, f: impl FnMut(&ClassNameSlice) -> Result<ClassName>) -> Result<MethodDescriptor> {
		crate::descriptor::map_class_names(self.as_inner(), f)?.try_into()
	}
}
