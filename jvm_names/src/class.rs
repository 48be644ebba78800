use anyhow::bail;
use crate::macros::{make_display, make_string_str_like};

make_string_str_like!(
	/// Represents a class name, in its internal form (`java/lang/Object`).
	///
	/// The class name can both be an array class name, which is just a field descriptor starting with `[`, or an
	/// object class name, which is a list of unqualified names separated by `/`.
	///
	/// # Examples
	/// The java class `java.lang.Thread` would get:
	/// ```
	/// use jvm_names::class::ClassName;
	/// let java_lang_thread = ClassName::try_from("java/lang/Thread").unwrap();
	/// assert_eq!(java_lang_thread.to_string(), "java/lang/Thread");
	/// ```
	pub ClassName;
	/// A [`ClassName`] slice.
	pub ClassNameSlice;
	is_valid(s) = if crate::names::is_valid_class_name(s) {
		Ok(())
	} else {
		bail!("invalid class name: must be either array field descriptor; or must consist out of `/` separated non-empty parts, and not contain any of `.`, `;`, `[`")
	};
);
make_display!(ClassName, ClassNameSlice);

impl ClassNameSlice {
	/// Checks if this is an array class.
	///
	/// Array class names start with `[`.
	///
	/// ```
	/// use jvm_names::class::ClassName;
	///
	/// let array = ClassName::try_from("[Ljava/lang/Object;").unwrap();
	/// assert!(array.is_array());
	///
	/// let object = ClassName::try_from("java/lang/Object").unwrap();
	/// assert!(!object.is_array());
	/// ```
	pub fn is_array(&self) -> bool {
		self.as_inner().starts_with('[')
	}

	/// Returns the package part of this class name, or `None` for a class in the default package or an array class.
	///
	/// ```
	/// use jvm_names::class::ClassName;
	///
	/// let class = ClassName::try_from("java/lang/Object").unwrap();
	/// assert_eq!(class.package(), Some("java/lang"));
	/// assert_eq!(ClassName::try_from("Main").unwrap().package(), None);
	/// ```
	pub fn package(&self) -> Option<&str> {
		if self.is_array() {
			return None;
		}
		self.as_inner().rsplit_once('/').map(|(package, _)| package)
	}
}
