//! Validated names and descriptors of the Java Virtual Machine.
//!
//! Every kind of name comes as a pair of an owned type (like [`class::ClassName`]) and a borrowed slice type (like
//! [`class::ClassNameSlice`]), in the same way that [`String`] and [`str`] relate. Constructing one checks the
//! contents according to the rules of the Java Virtual Machine Specification, chapter 4.2 and 4.3.

mod macros;
mod names;

pub mod class;
pub mod descriptor;
pub mod field;
pub mod method;
