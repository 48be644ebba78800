use anyhow::Result;
use pretty_assertions::assert_eq;
use jvm_names::class::ClassName;
use jvm_names::field::FieldDescriptor;
use jvm_names::method::MethodDescriptor;

#[test]
fn valid_field_descriptors() {
	let valid_field_descriptors = [
		"B",
		"C",
		"D",
		"F",
		"I",
		"J",
		"Ljava/lang/Object;",
		"Lorg/example/MyClassName;",
		"S",
		"Z",
		"[[[D",
		"[Lorg/example/MyClassName$Inner;",
	];

	for i in valid_field_descriptors {
		assert!(FieldDescriptor::is_valid(i), "{:?} is a valid field desc", i);
	}
}

#[test]
fn invalid_field_descriptors() {
	let invalid_field_descriptors = [
		"",
		"V",
		"(",
		")",
		"()",
		"[V",
		"L;",
		"()V",
		"foo",
		"(D)I",
		"L;DV",
		"II",
		"La.b;",
		"Ljava/lang/Object",
	];

	for i in invalid_field_descriptors {
		assert!(!FieldDescriptor::is_valid(i), "{:?} is an invalid field desc", i);
	}
}

#[test]
fn valid_method_descriptors() {
	let valid_method_descriptors = [
		"()V",
		"(I)V",
		"(IJ)D",
		"([[Ljava/lang/String;)V",
		"(Ljava/lang/Object;Lorg/example/Foo;)Lorg/example/Bar;",
		"(BCDFIJSZ)[Z",
	];

	for i in valid_method_descriptors {
		assert!(MethodDescriptor::is_valid(i), "{:?} is a valid method desc", i);
	}
}

#[test]
fn invalid_method_descriptors() {
	let invalid_method_descriptors = [
		"",
		"V",
		"I",
		"(",
		"()",
		"(V)V",
		"(I",
		"()VV",
		"(L;)V",
		"(Ljava/lang/Object)V",
		"foo()V",
	];

	for i in invalid_method_descriptors {
		assert!(!MethodDescriptor::is_valid(i), "{:?} is an invalid method desc", i);
	}
}

#[test]
fn map_method_descriptor() -> Result<()> {
	let desc = MethodDescriptor::try_from("(La;[[Lb;I)Lc;")?;

	let mapped = desc.map_class_names(|class| ClassName::try_from(class.as_inner().to_uppercase()))?;

	assert_eq!(mapped, MethodDescriptor::try_from("(LA;[[LB;I)LC;")?);
	Ok(())
}

#[test]
fn map_field_descriptor_identity() -> Result<()> {
	let desc = FieldDescriptor::try_from("[Ljava/lang/Object;")?;

	let mapped = desc.map_class_names(|class| Ok(class.to_owned()))?;

	assert_eq!(mapped, desc);
	Ok(())
}
