//! Runtime values and their methods.

pub mod date;
mod file;
mod image;
mod method;
mod number;
mod raw;
mod size;
mod string;
mod value;

pub use file::{FileMetadata, format_file};
pub use image::{ImageInfo, format_image};
pub use method::Method;
pub use number::format_number;
pub use raw::RawValue;
pub use size::format_size;
pub use string::slice_chars;
pub use value::{IndexValue, Value};

#[cfg(test)]
mod date_test;
#[cfg(test)]
mod display_test;
