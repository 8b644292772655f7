//! Terminal move input: line reading with a timeout and move parsing.

mod input;

pub use input::{read_line, InputError, MoveInput};
