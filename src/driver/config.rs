use crate::compile::CompilerUntil;
use clap::Parser as ClapParser;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
pub struct CliArgs {
    src_filepaths: Vec<PathBuf>,

    #[clap(long = "lex")]
    until_lexer: bool,

    #[clap(long = "parse")]
    until_parser: bool,

    #[clap(long = "codegen")]
    until_asm_codegen: bool,

    #[clap(short = 'S')]
    until_asm_emission: bool,
}

#[derive(Debug)]
pub struct Args {
    pub src_filepaths: Vec<PathBuf>,

    pub until: DriverUntil,
}
impl From<CliArgs> for Args {
    fn from(cli_args: CliArgs) -> Self {
        let until = if cli_args.until_lexer {
            DriverUntil::Compiler(CompilerUntil::Lexer)
        } else if cli_args.until_parser {
            DriverUntil::Compiler(CompilerUntil::Parser)
        } else if cli_args.until_asm_codegen {
            DriverUntil::Compiler(CompilerUntil::AsmGen)
        } else if cli_args.until_asm_emission {
            DriverUntil::Compiler(CompilerUntil::AsmEmit)
        } else {
            DriverUntil::Linker
        };

        Self {
            src_filepaths: cli_args.src_filepaths,
            until,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DriverUntil {
    Compiler(CompilerUntil),
    Linker,
}
impl DriverUntil {
    pub fn compiler_until(&self) -> CompilerUntil {
        match self {
            Self::Compiler(until) => *until,
            Self::Linker => CompilerUntil::AsmEmit,
        }
    }
}
