//! Small standalone integer algorithms: in-place bubble sort with a
//! caller-supplied ordering, and decimal-digit reversal.

pub mod digits;
pub mod sorting;
