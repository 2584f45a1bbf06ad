//! LS-8 Instruction Set
//!
//! Variable-length instructions: one opcode byte followed by zero, one or two
//! operand bytes.
//!
//! ## Instruction Formats
//! - N-type:  [opcode]
//! - R-type:  [opcode][reg]
//! - RR-type: [opcode][reg_a][reg_b]
//! - RI-type: [opcode][reg][imm8]

use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};

/// LS-8 Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    // ========== Data ==========
    /// LDI: reg = imm
    Ldi { reg: Register, imm: u8 },

    /// PRN: print reg as decimal
    Prn { reg: Register },

    // ========== ALU ==========
    /// ADD: a = a + b (wrapping)
    Add { a: Register, b: Register },

    /// MUL: a = a * b (wrapping)
    Mul { a: Register, b: Register },

    /// CMP: FL = a <=> b
    Cmp { a: Register, b: Register },

    // ========== Stack ==========
    /// PUSH: SP -= 1; mem[SP] = reg
    Push { reg: Register },

    /// POP: reg = mem[SP]; SP += 1
    Pop { reg: Register },

    // ========== Control flow ==========
    /// CALL: push return address; PC = reg
    Call { reg: Register },

    /// RET: PC = pop()
    Ret,

    /// JMP: PC = reg
    Jmp { reg: Register },

    /// JEQ: if FL.E, PC = reg
    Jeq { reg: Register },

    /// JNE: if !FL.E, PC = reg
    Jne { reg: Register },

    // ========== System ==========
    /// HLT: stop execution
    Hlt,
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Ldi { .. } => Opcode::Ldi,
            Instruction::Prn { .. } => Opcode::Prn,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Cmp { .. } => Opcode::Cmp,
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Ret => Opcode::Ret,
            Instruction::Jmp { .. } => Opcode::Jmp,
            Instruction::Jeq { .. } => Opcode::Jeq,
            Instruction::Jne { .. } => Opcode::Jne,
            Instruction::Hlt => Opcode::Hlt,
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Encoded size in bytes
    pub fn size(&self) -> usize {
        self.opcode().size()
    }

    /// Operand bytes in encoding order
    pub fn operands(&self) -> Vec<u8> {
        match *self {
            Instruction::Ldi { reg, imm } => vec![reg as u8, imm],
            Instruction::Add { a, b } | Instruction::Mul { a, b } | Instruction::Cmp { a, b } => {
                vec![a as u8, b as u8]
            }
            Instruction::Prn { reg }
            | Instruction::Push { reg }
            | Instruction::Pop { reg }
            | Instruction::Call { reg }
            | Instruction::Jmp { reg }
            | Instruction::Jeq { reg }
            | Instruction::Jne { reg } => vec![reg as u8],
            Instruction::Ret | Instruction::Hlt => vec![],
        }
    }

    /// Check if this instruction may redirect the program counter
    pub fn is_control_flow(&self) -> bool {
        self.opcode().sets_pc()
    }

    pub fn is_alu(&self) -> bool {
        self.opcode().is_alu()
    }

    pub fn is_stack(&self) -> bool {
        matches!(
            self,
            Instruction::Push { .. } | Instruction::Pop { .. } | Instruction::Call { .. } | Instruction::Ret
        )
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Instruction::Ldi { reg, imm } => write!(f, "LDI {},{}", reg, imm),
            Instruction::Add { a, b } => write!(f, "ADD {},{}", a, b),
            Instruction::Mul { a, b } => write!(f, "MUL {},{}", a, b),
            Instruction::Cmp { a, b } => write!(f, "CMP {},{}", a, b),
            Instruction::Prn { reg }
            | Instruction::Push { reg }
            | Instruction::Pop { reg }
            | Instruction::Call { reg }
            | Instruction::Jmp { reg }
            | Instruction::Jeq { reg }
            | Instruction::Jne { reg } => write!(f, "{} {}", self.mnemonic(), reg),
            Instruction::Ret | Instruction::Hlt => f.write_str(self.mnemonic()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_opcode() {
        assert_eq!(Instruction::Hlt.size(), 1);
        assert_eq!(Instruction::Prn { reg: Register::R0 }.size(), 2);
        assert_eq!(
            Instruction::Ldi {
                reg: Register::R0,
                imm: 8
            }
            .size(),
            3
        );
    }

    #[test]
    fn test_operands_len_matches_size() {
        let instrs = [
            Instruction::Ldi { reg: Register::R1, imm: 42 },
            Instruction::Mul { a: Register::R0, b: Register::R1 },
            Instruction::Push { reg: Register::R2 },
            Instruction::Ret,
            Instruction::Hlt,
        ];
        for instr in instrs {
            assert_eq!(instr.operands().len() + 1, instr.size());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Instruction::Ldi { reg: Register::R0, imm: 8 }.to_string(),
            "LDI R0,8"
        );
        assert_eq!(
            Instruction::Cmp { a: Register::R1, b: Register::R2 }.to_string(),
            "CMP R1,R2"
        );
        assert_eq!(Instruction::Prn { reg: Register::R0 }.to_string(), "PRN R0");
        assert_eq!(Instruction::Ret.to_string(), "RET");
    }

    #[test]
    fn test_classification() {
        assert!(Instruction::Call { reg: Register::R1 }.is_control_flow());
        assert!(Instruction::Ret.is_control_flow());
        assert!(!Instruction::Hlt.is_control_flow());
        assert!(Instruction::Add { a: Register::R0, b: Register::R1 }.is_alu());
        assert!(Instruction::Call { reg: Register::R1 }.is_stack());
        assert!(!Instruction::Jmp { reg: Register::R1 }.is_stack());
    }
}
