use crate::{
    stage1_lex::{
        lexer::{self, LexError},
        token_stream::TokenStream,
        tokens::Token,
    },
    stage2_parse::{
        c_ast,
        parser::{ParseError, Parser},
    },
    stage3_asm_gen::{AsmCodeGenerator, CodegenError, asm_ast},
    stage4_asm_emit::AsmCodeEmitter,
};
use derive_more::{Display, Error, From};
use std::str;

/// Wraps the failing stage's error unchanged.
#[derive(Display, Error, From, PartialEq, Eq, Debug)]
pub enum CompileError {
    #[display("Lex error: {_0}")]
    Lex(LexError),
    #[display("Parse error: {_0}")]
    Parse(ParseError),
    #[display("Codegen error: {_0}")]
    Codegen(CodegenError),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CompilerUntil {
    Lexer,
    Parser,
    AsmGen,
    AsmEmit,
}

#[derive(Debug)]
pub enum CompilationResult<'a> {
    Lexed(Vec<Token<'a>>),
    Parsed(c_ast::Function),
    AsmCode(asm_ast::Function),
    AsmText(String),
}

pub fn compile(src: &[u8]) -> Result<String, CompileError> {
    let src = decode_src(src)?;
    let tokens = lexer::scan(src)?;
    let c_fun = parse(tokens)?;
    let asm_text = generate(c_fun)?;
    Ok(asm_text)
}

pub fn compile_until(src: &[u8], until: CompilerUntil) -> Result<CompilationResult<'_>, CompileError> {
    let src = decode_src(src)?;

    let tokens = lexer::scan(src)?;
    if until == CompilerUntil::Lexer {
        return Ok(CompilationResult::Lexed(tokens));
    }

    let c_fun = parse(tokens)?;
    if until == CompilerUntil::Parser {
        return Ok(CompilationResult::Parsed(c_fun));
    }

    let asm_fun = AsmCodeGenerator::gen_fun(c_fun)?;
    if until == CompilerUntil::AsmGen {
        return Ok(CompilationResult::AsmCode(asm_fun));
    }

    let asm_text = AsmCodeEmitter::new(String::new())
        .emit_program(asm_fun)
        .map_err(CodegenError::from)?;
    Ok(CompilationResult::AsmText(asm_text))
}

/// The code generator: lowering followed by emission.
pub fn generate(c_fun: c_ast::Function) -> Result<String, CodegenError> {
    let asm_fun = AsmCodeGenerator::gen_fun(c_fun)?;
    let asm_text = AsmCodeEmitter::new(String::new()).emit_program(asm_fun)?;
    Ok(asm_text)
}

fn parse(tokens: Vec<Token<'_>>) -> Result<c_ast::Function, ParseError> {
    Parser::new(TokenStream::from(tokens)).parse_program()
}

fn decode_src(src: &[u8]) -> Result<&str, LexError> {
    str::from_utf8(src).map_err(|e| {
        let position = e.valid_up_to();
        let bad_len = e.error_len().unwrap_or(src.len() - position);
        LexError::NoMatch {
            position,
            text: String::from_utf8_lossy(&src[position..position + bad_len]).into_owned(),
        }
    })
}
