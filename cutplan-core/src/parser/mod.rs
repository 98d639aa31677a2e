//! Job file parser module.

mod input;

pub use input::{parse_input_file, parse_input_str, Job};
