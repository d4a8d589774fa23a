pub mod lexer;
pub mod token_stream;
pub mod tokens;
