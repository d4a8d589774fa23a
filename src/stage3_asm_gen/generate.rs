use crate::{stage2_parse::c_ast as c, stage3_asm_gen::asm_ast::*};
use derive_more::{Display, Error, From};
use std::fmt;

#[derive(Display, Error, From, PartialEq, Eq, Debug)]
pub enum CodegenError {
    /// Only a literal `0` divisor is caught here. Any other zero divisor faults at run time.
    #[display("Division by the constant zero")]
    DivisionByZero,

    #[display("Failed to write assembly text")]
    #[from]
    Format(fmt::Error),
}

/// Lowers each expression into `%eax`. A binary expression's LHS waits on the stack while its RHS is evaluated.
pub struct AsmCodeGenerator {
    instrs: Vec<Instruction>,
}
impl AsmCodeGenerator {
    pub fn gen_fun(c::Function { ident, body }: c::Function) -> Result<Function, CodegenError> {
        let mut generator = Self { instrs: vec![] };
        generator.gen_stmt(body)?;

        let Self { instrs } = generator;
        log::debug!("Generated {} instructions for {ident}", instrs.len());
        Ok(Function { ident, instrs })
    }

    fn gen_stmt(&mut self, c_stmt: c::Statement) -> Result<(), CodegenError> {
        let c::Statement::Return(exp) = c_stmt;
        self.gen_exp(exp)?;
        self.instrs.push(Instruction::Ret);
        Ok(())
    }

    fn gen_exp(&mut self, c_exp: c::Expression) -> Result<(), CodegenError> {
        match c_exp {
            c::Expression::Const(val) => {
                self.instrs.push(Instruction::Mov {
                    src: Operand::ImmediateValue(val),
                    dst: Register::AX.into(),
                });
            }
            c::Expression::Unary(c::Unary { op, sub_exp }) => {
                self.gen_exp(*sub_exp)?;
                self.gen_unary_op(op);
            }
            c::Expression::Binary(c::Binary { op, lhs, rhs }) => {
                if op == c::BinaryOperator::Div && *rhs == c::Expression::Const(0) {
                    return Err(CodegenError::DivisionByZero);
                }

                self.gen_exp(*lhs)?;
                self.instrs.push(Instruction::Push(Register::AX));
                self.gen_exp(*rhs)?;
                self.instrs.push(Instruction::Mov {
                    src: Register::AX.into(),
                    dst: Register::CX.into(),
                });
                self.instrs.push(Instruction::Pop(Register::AX));

                self.gen_binary_op(op);
            }
        }
        Ok(())
    }

    /// The operand is in `%eax`.
    fn gen_unary_op(&mut self, op: c::UnaryOperator) {
        use c::UnaryOperator as CUO;
        match op {
            CUO::Complement => {
                self.instrs.push(Instruction::Unary(
                    UnaryOperator::BitwiseComplement,
                    Register::AX.into(),
                ));
            }
            CUO::Negate => {
                self.instrs.push(Instruction::Unary(
                    UnaryOperator::TwosComplement,
                    Register::AX.into(),
                ));
            }
            CUO::Not => {
                /* `mov` leaves the flags set by `cmp` intact. */
                self.instrs.extend([
                    Instruction::Cmp {
                        arg: Operand::ImmediateValue(0),
                        tgt: Register::AX.into(),
                    },
                    Instruction::Mov {
                        src: Operand::ImmediateValue(0),
                        dst: Register::AX.into(),
                    },
                    Instruction::SetCC(ConditionCode::E, Register::AX.into()),
                ]);
            }
        }
    }

    /// The LHS is in `%eax` and the RHS is in `%ecx`.
    fn gen_binary_op(&mut self, op: c::BinaryOperator) {
        use c::BinaryOperator as CBO;
        let asm_op = match op {
            CBO::Add => BinaryOperator::Add,
            CBO::Sub => BinaryOperator::Sub,
            CBO::Mul => BinaryOperator::Mul,
            CBO::Div => {
                self.instrs.extend([Instruction::Cdq, Instruction::Idiv(Register::CX.into())]);
                return;
            }
        };
        self.instrs.push(Instruction::Binary {
            op: asm_op,
            arg: Register::CX.into(),
            tgt: Register::AX.into(),
        });
    }
}
