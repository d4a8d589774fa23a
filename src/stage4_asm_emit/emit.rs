use crate::stage3_asm_gen::asm_ast::{
    BinaryOperator, ConditionCode, Function, Instruction, Operand, Register, UnaryOperator,
};
use std::fmt::{self, Write};

const TAB: &str = "\t";

enum OperandByteLen {
    B8,
    B4,
    B1,
}

/// Writes GNU assembler text in AT&T syntax.
pub struct AsmCodeEmitter<W: Write> {
    out: W,
}
impl<W: Write> AsmCodeEmitter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn emit_program(mut self, fun: Function) -> Result<W, fmt::Error> {
        self.write_fun(fun)?;

        if cfg!(target_os = "linux") {
            writeln!(&mut self.out, "{TAB}.section{TAB}.note.GNU-stack,\"\",@progbits")?;
        }

        Ok(self.out)
    }
    fn write_fun(&mut self, Function { ident, instrs }: Function) -> fmt::Result {
        const IDENT_PFX: &str = if cfg!(target_os = "macos") { "_" } else { "" };

        writeln!(&mut self.out, "{TAB}.globl{TAB}{IDENT_PFX}{ident}")?;
        writeln!(&mut self.out, "{IDENT_PFX}{ident}:")?;
        writeln!(&mut self.out, "{TAB}pushq{TAB}%rbp")?;
        writeln!(&mut self.out, "{TAB}movq{TAB}%rsp, %rbp")?;
        for instr in instrs {
            self.write_instr(instr)?;
        }
        Ok(())
    }
    fn write_instr(&mut self, instr: Instruction) -> fmt::Result {
        match instr {
            Instruction::Mov { src, dst } => {
                write!(&mut self.out, "{TAB}movl{TAB}")?;
                self.write_operand(src, OperandByteLen::B4)?;
                write!(&mut self.out, ", ")?;
                self.write_operand(dst, OperandByteLen::B4)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Unary(op, operand) => {
                let op = match op {
                    UnaryOperator::BitwiseComplement => "notl",
                    UnaryOperator::TwosComplement => "negl",
                };
                write!(&mut self.out, "{TAB}{op}{TAB}")?;
                self.write_operand(operand, OperandByteLen::B4)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Binary { op, arg, tgt } => {
                let op = match op {
                    BinaryOperator::Add => "addl",
                    BinaryOperator::Sub => "subl",
                    BinaryOperator::Mul => "imull",
                };
                write!(&mut self.out, "{TAB}{op}{TAB}")?;
                self.write_operand(arg, OperandByteLen::B4)?;
                write!(&mut self.out, ", ")?;
                self.write_operand(tgt, OperandByteLen::B4)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Cmp { arg, tgt } => {
                write!(&mut self.out, "{TAB}cmpl{TAB}")?;
                self.write_operand(arg, OperandByteLen::B4)?;
                write!(&mut self.out, ", ")?;
                self.write_operand(tgt, OperandByteLen::B4)?;
                writeln!(&mut self.out)?;
            }
            Instruction::SetCC(cc, operand) => {
                let cmd_sfx = match cc {
                    ConditionCode::E => "e",
                };
                write!(&mut self.out, "{TAB}set{cmd_sfx}{TAB}")?;
                self.write_operand(operand, OperandByteLen::B1)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Cdq => {
                writeln!(&mut self.out, "{TAB}cdq")?;
            }
            Instruction::Idiv(operand) => {
                write!(&mut self.out, "{TAB}idivl{TAB}")?;
                self.write_operand(operand, OperandByteLen::B4)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Push(reg) => {
                write!(&mut self.out, "{TAB}pushq{TAB}")?;
                self.write_operand(reg.into(), OperandByteLen::B8)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Pop(reg) => {
                write!(&mut self.out, "{TAB}popq{TAB}")?;
                self.write_operand(reg.into(), OperandByteLen::B8)?;
                writeln!(&mut self.out)?;
            }
            Instruction::Ret => {
                writeln!(&mut self.out, "{TAB}movq{TAB}%rbp, %rsp")?;
                writeln!(&mut self.out, "{TAB}popq{TAB}%rbp")?;
                writeln!(&mut self.out, "{TAB}ret")?;
            }
        }
        Ok(())
    }
    fn write_operand(&mut self, operand: Operand, obl: OperandByteLen) -> fmt::Result {
        use OperandByteLen as OBL;
        match operand {
            Operand::ImmediateValue(val) => {
                write!(&mut self.out, "${val}")?;
            }
            Operand::Register(reg) => {
                let reg_str = match (reg, obl) {
                    (Register::AX, OBL::B8) => "%rax",
                    (Register::AX, OBL::B4) => "%eax",
                    (Register::AX, OBL::B1) => "%al",
                    (Register::CX, OBL::B8) => "%rcx",
                    (Register::CX, OBL::B4) => "%ecx",
                    (Register::CX, OBL::B1) => "%cl",
                };
                write!(&mut self.out, "{reg_str}")?;
            }
        }
        Ok(())
    }
}
