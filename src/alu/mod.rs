mod alu_output;
mod alu_trait;

pub use alu_output::AluOutput;
pub use alu_trait::{Alu, accumulate};
