/// Checks if a class name is valid according to JVMS 4.2.1 (also accepting array class names).
pub(crate) fn is_valid_class_name(x: &str) -> bool {
	if x.starts_with('[') {
		crate::descriptor::is_valid_field_descriptor(x)
	} else {
		is_valid_obj_class_name(x)
	}
}

/// Checks if a class name is a valid non-array class name: a list of unqualified names split by `/`.
pub(crate) fn is_valid_obj_class_name(x: &str) -> bool {
	// "".split('/') yields one empty part, so an empty class name isn't valid
	x.split('/').all(is_valid_unqualified_name)
}

/// Checks if a name is an unqualified name according to JVMS 4.2.2
///
/// This is used for field names, formal parameter names, local variable names.
pub(crate) fn is_valid_unqualified_name(x: &str) -> bool {
	// must contain at least one unicode codepoint
	!x.is_empty() &&
		// must not contain any of . ; [ /
		x.chars().all(|c| !matches!(c, '.' | ';' | '[' | '/'))
}

/// Checks if a method name is valid according to JVMS 4.2.2
pub(crate) fn is_valid_method_name(x: &str) -> bool {
	// either one of the special names or an unqualified name with special < > restriction
	x == "<init>" || x == "<clinit>" || (
		is_valid_unqualified_name(x) &&
			x.chars().all(|c| !matches!(c, '<' | '>'))
	)
}
