pub mod asm_ast;
mod generate;

pub use generate::{AsmCodeGenerator, CodegenError};
