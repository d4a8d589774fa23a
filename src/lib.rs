#![allow(rustdoc::private_intra_doc_links)]

pub mod compile;
pub mod driver;
pub mod stage1_lex;
pub mod stage2_parse;
pub mod stage3_asm_gen;
pub mod stage4_asm_emit;


pub use compile::{CompileError, compile};
