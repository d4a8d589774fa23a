use crate::{
    stage1_lex::tokens::TokenKind as K,
    stage2_parse::{
        c_ast::{BinaryOperator as B, Expression, Function, Statement},
        parser::{Expected, MAX_HEIGHT, MAX_NESTING, ParseError},
    },
    test::utils::*,
};
use anyhow::Result;

fn parse_fun_err(src: &str) -> ParseError {
    match parse_fun(src) {
        Ok(fun) => fail!("{fun:?}"),
        Err(e) => match e.downcast::<ParseError>() {
            Ok(e) => e,
            Err(e) => fail!("{e:?}"),
        },
    }
}

#[test]
fn return_const() -> Result<()> {
    let fun = parse_fun("int main(){return 2;}")?;
    assert_eq!(
        fun,
        Function {
            ident: String::from("main"),
            body: Statement::Return(konst(2)),
        }
    );
    assert_eq!(fun.to_string(), "int main () { return 2 }");
    Ok(())
}

#[test]
fn any_function_name() -> Result<()> {
    let fun = parse_fun("int  foo ( ) {\n  return 0 ;\n}\n")?;
    assert_eq!(fun.ident, "foo");
    Ok(())
}

#[test]
fn precedence() -> Result<()> {
    assert_eq!(
        parse_exp("1+2*3")?,
        bin(B::Add, konst(1), bin(B::Mul, konst(2), konst(3)))
    );
    assert_eq!(
        parse_exp("(1+2)*3")?,
        bin(B::Mul, bin(B::Add, konst(1), konst(2)), konst(3))
    );
    assert_eq!(
        parse_exp("1*2-6/3")?,
        bin(
            B::Sub,
            bin(B::Mul, konst(1), konst(2)),
            bin(B::Div, konst(6), konst(3))
        )
    );
    Ok(())
}

#[test]
fn left_associativity() -> Result<()> {
    assert_eq!(
        parse_exp("8-3-2")?,
        bin(B::Sub, bin(B::Sub, konst(8), konst(3)), konst(2))
    );
    assert_eq!(
        parse_exp("8/4/2")?,
        bin(B::Div, bin(B::Div, konst(8), konst(4)), konst(2))
    );
    Ok(())
}

#[test]
fn unary_binds_tightest() -> Result<()> {
    let exp = parse_exp("-~4+1")?;
    assert_eq!(exp, bin(B::Add, neg(compl(konst(4))), konst(1)));
    assert_eq!(exp.to_string(), "((- (~ 4)) + 1)");

    assert_eq!(
        parse_exp("!-(2*3)")?,
        not(neg(bin(B::Mul, konst(2), konst(3))))
    );
    Ok(())
}

#[test]
fn rendering_reparses() -> Result<()> {
    for src in [
        "2*3+(~7-34)",
        "-~4+1",
        "8-3-2",
        "1-(2-3)",
        "!!(1/2)*-3",
        "((((5))))",
    ] {
        let exp = parse_exp(src)?;
        let rendered = exp.to_string();
        let reparsed = parse_exp(&rendered)?;
        assert_eq!(reparsed, exp, "{src} -> {rendered}");
        assert_eq!(reparsed.to_string(), rendered);
    }

    let fun = parse_fun("int main() { return 1 + -2 * 3; }")?;
    let Statement::Return(exp) = &fun.body;
    let reparsed = parse_exp(&exp.to_string())?;
    assert_eq!(&reparsed, exp);
    Ok(())
}

#[test]
fn missing_close_paren() {
    let err = parse_fun_err("int main( { return 1; }");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Token(K::ParenClose),
            got: K::BraceOpen,
            position: 10,
        }
    );
}

#[test]
fn not_enough_tokens() {
    assert_eq!(
        parse_fun_err("int main() { return 1"),
        ParseError::NotEnoughTokens
    );
    assert_eq!(parse_fun_err(""), ParseError::NotEnoughTokens);
    assert_eq!(
        parse_fun_err("int main() { return 1; "),
        ParseError::NotEnoughTokens
    );
}

#[test]
fn bad_factor() {
    let err = parse_fun_err("int main() { return ; }");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Factor,
            got: K::Semicolon,
            position: 20,
        }
    );

    let err = parse_fun_err("int main() { return +1; }");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::Factor,
            got: K::Plus,
            ..
        }
    ));
}

#[test]
fn trailing_tokens() {
    let err = parse_fun_err("int main() { return 1; } int");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::EndOfInput,
            got: K::KwInt,
            position: 25,
        }
    );
}

#[test]
fn int_literal_range() -> Result<()> {
    let fun = parse_fun("int main() { return 2147483647; }")?;
    assert_eq!(fun.body, Statement::Return(Expression::Const(i32::MAX)));

    let err = parse_fun_err("int main() { return 2147483648; }");
    assert_eq!(
        err,
        ParseError::InvalidIntegerLiteral {
            text: String::from("2147483648"),
            position: 20,
        }
    );
    Ok(())
}

#[test]
fn int_min_via_subtraction() -> Result<()> {
    let err = parse_fun_err("int main() { return -2147483648; }");
    assert_eq!(
        err,
        ParseError::InvalidIntegerLiteral {
            text: String::from("2147483648"),
            position: 21,
        }
    );

    let fun = parse_fun("int main() { return 0-2147483647-1; }")?;
    assert_eq!(
        fun.body,
        Statement::Return(bin(B::Sub, bin(B::Sub, konst(0), konst(i32::MAX)), konst(1)))
    );
    Ok(())
}

#[test]
fn nesting_at_limit() -> Result<()> {
    let src = format!(
        "int main() {{ return {}1{}; }}",
        "(".repeat(MAX_NESTING),
        ")".repeat(MAX_NESTING)
    );
    let fun = parse_fun(&src)?;
    assert_eq!(fun.body, Statement::Return(konst(1)));

    let src = format!("int main() {{ return {}1; }}", "-".repeat(MAX_NESTING));
    parse_fun(&src)?;
    Ok(())
}

#[test]
fn nested_parens_too_deep() {
    let n = 10_000;
    let src = format!("int main() {{ return {}1{}; }}", "(".repeat(n), ")".repeat(n));
    let err = parse_fun_err(&src);
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            position: 20 + MAX_NESTING
        }
    );
}

#[test]
fn unary_chain_too_deep() {
    let src = format!("int main() {{ return {}1; }}", "~".repeat(10_000));
    let err = parse_fun_err(&src);
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            position: 20 + MAX_NESTING
        }
    );
}

#[test]
fn operator_chain_too_tall() {
    let terms = vec!["1"; 2 * MAX_HEIGHT];
    let src = format!("int main() {{ return {}; }}", terms.join("+"));
    let err = parse_fun_err(&src);

    // The operator that would make the tree one node too tall.
    let op_index = MAX_HEIGHT;
    assert_eq!(
        err,
        ParseError::NestingTooDeep {
            position: 20 + 2 * op_index - 1
        }
    );

    let terms = vec!["1"; MAX_HEIGHT];
    let src = format!("int main() {{ return {}; }}", terms.join("+"));
    assert!(parse_fun(&src).is_ok());
}
