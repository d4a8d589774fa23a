pub mod config;
pub mod files;

use crate::compile::{CompilationResult, CompileError, CompilerUntil, compile_until};
use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use config::{Args, CliArgs, DriverUntil};
use files::{AsmFilepath, ProgramFilepath, SrcFilepath};
use std::{fs, path::PathBuf};

pub fn driver_main() -> Result<()> {
    env_logger::init();

    let cli_args = CliArgs::parse();
    log::info!("{cli_args:?}");
    let args = Args::from(cli_args);

    for src_filepath in args.src_filepaths {
        let src_filepath = SrcFilepath::try_from(src_filepath)?;

        let asm_filepath = compile_file(&src_filepath, args.until)?;
        log::info!("Compiler done -> {asm_filepath:?}");

        if let Some(asm_filepath) = asm_filepath {
            let prog_filepath = assemble_and_link(asm_filepath)?;
            log::info!("Assembler and linker done -> {prog_filepath}");
        }
    }

    Ok(())
}

/// Returns the asm file only if it's to be assembled and linked.
fn compile_file(src_filepath: &SrcFilepath, until: DriverUntil) -> Result<Option<AsmFilepath>> {
    let src = fs::read(src_filepath as &PathBuf)
        .with_context(|| format!("Failed to read {src_filepath}"))?;

    let compil_res = compile_until(&src, until.compiler_until())
        .with_context(|| format!("Failed to compile {src_filepath}"))?;

    match compil_res {
        CompilationResult::Lexed(tokens) => {
            println!("tokens: {tokens:#?}");
            Ok(None)
        }
        CompilationResult::Parsed(c_fun) => {
            println!("c_fun: {c_fun}");
            println!("{c_fun:#?}");
            Ok(None)
        }
        CompilationResult::AsmCode(asm_fun) => {
            println!("asm_fun: {asm_fun:#?}");
            Ok(None)
        }
        CompilationResult::AsmText(asm_text) => {
            let asm_filepath = src_filepath.asm_filepath();
            fs::write(&asm_filepath as &PathBuf, asm_text)
                .with_context(|| format!("Failed to write {asm_filepath}"))?;

            if until == DriverUntil::Compiler(CompilerUntil::AsmEmit) {
                println!("asm file: {asm_filepath}");
                return Ok(None);
            }
            Ok(Some(asm_filepath))
        }
    }
}

fn assemble_and_link(asm_filepath: AsmFilepath) -> Result<ProgramFilepath> {
    let prog_filepath = asm_filepath.program_filepath();

    let cmd = duct::cmd!(
        "gcc",
        asm_filepath.as_os_str(),
        "-o",
        prog_filepath.as_os_str()
    );
    log::info!("Assembler and linker command: {cmd:?}");
    cmd.run()
        .with_context(|| format!("The assembler and linker failed on {asm_filepath}"))?;

    fs::remove_file(&asm_filepath as &PathBuf)
        .with_context(|| format!("Failed to remove {asm_filepath}"))?;

    Ok(prog_filepath)
}

/// Distinguishes, by process exit code, which compiler stage rejected the source.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CompileError>() {
        Some(CompileError::Lex(_)) => 2,
        Some(CompileError::Parse(_)) => 3,
        Some(CompileError::Codegen(_)) => 4,
        None => 1,
    }
}
