use derive_more::From;

#[derive(Debug)]
pub struct Function {
    pub ident: String,
    pub instrs: Vec<Instruction>,
}

/// All arithmetic is on 32-bit values, held in the lower half of each register.
#[derive(PartialEq, Eq, Debug)]
pub enum Instruction {
    Mov {
        src: Operand,
        dst: Operand,
    },
    Unary(UnaryOperator, Operand),
    Binary {
        op: BinaryOperator,
        arg: Operand, // Semantic RHS. Asm operand #1.
        tgt: Operand, // Semantic LHS, as well as output. Asm operand #2.
    },
    Cmp {
        arg: Operand, // Semantic RHS. Asm operand #1.
        tgt: Operand, // Semantic LHS, non-modified. Asm operand #2.
    },
    /// Writes the lowest byte of the operand.
    SetCC(ConditionCode, Operand),
    Cdq,
    Idiv(Operand),
    /// Quadword push of the whole register.
    Push(Register),
    /// Quadword pop into the whole register.
    Pop(Register),
    Ret,
}

#[derive(PartialEq, Eq, Debug)]
pub enum UnaryOperator {
    BitwiseComplement,
    TwosComplement,
}

#[derive(PartialEq, Eq, Debug)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
}

#[derive(From, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operand {
    ImmediateValue(i32),
    Register(Register),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Register {
    AX,
    CX,
}

#[derive(PartialEq, Eq, Debug)]
pub enum ConditionCode {
    E,
}
