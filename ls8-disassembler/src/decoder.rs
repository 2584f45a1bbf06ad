//! Instruction decoder
//!
//! The instruction length comes from the top two bits of the opcode byte, so
//! the decoder never consults a per-opcode length table.

use ls8_spec::{operand_count, Instruction, Opcode, Register};
use crate::error::{DisassemblerError, Result};

/// Decode the instruction at the start of `bytes`.
///
/// Bytes past the instruction's length are ignored.
pub fn decode(bytes: &[u8]) -> Result<Instruction> {
    let (&byte, rest) = bytes.split_first().ok_or(DisassemblerError::Empty)?;
    let opcode = Opcode::from_u8(byte).ok_or(DisassemblerError::UnknownOpcode(byte))?;

    let count = operand_count(byte) as usize;
    if rest.len() < count {
        return Err(DisassemblerError::Truncated {
            opcode: byte,
            expected: 1 + count,
            found: bytes.len(),
        });
    }

    decode_operands(opcode, &rest[..count])
}

/// Build an instruction from a known opcode and exactly its operand bytes
pub fn decode_operands(opcode: Opcode, operands: &[u8]) -> Result<Instruction> {
    let op = |i: usize| -> Result<u8> {
        operands.get(i).copied().ok_or(DisassemblerError::Truncated {
            opcode: opcode.to_u8(),
            expected: opcode.size(),
            found: 1 + operands.len(),
        })
    };
    let reg = |i: usize| -> Result<Register> { decode_register(op(i)?) };

    let instr = match opcode {
        Opcode::Hlt => Instruction::Hlt,
        Opcode::Ret => Instruction::Ret,
        Opcode::Push => Instruction::Push { reg: reg(0)? },
        Opcode::Pop => Instruction::Pop { reg: reg(0)? },
        Opcode::Prn => Instruction::Prn { reg: reg(0)? },
        Opcode::Call => Instruction::Call { reg: reg(0)? },
        Opcode::Jmp => Instruction::Jmp { reg: reg(0)? },
        Opcode::Jeq => Instruction::Jeq { reg: reg(0)? },
        Opcode::Jne => Instruction::Jne { reg: reg(0)? },
        Opcode::Ldi => Instruction::Ldi {
            reg: reg(0)?,
            imm: op(1)?,
        },
        Opcode::Add => Instruction::Add { a: reg(0)?, b: reg(1)? },
        Opcode::Mul => Instruction::Mul { a: reg(0)?, b: reg(1)? },
        Opcode::Cmp => Instruction::Cmp { a: reg(0)?, b: reg(1)? },
    };

    Ok(instr)
}

fn decode_register(byte: u8) -> Result<Register> {
    Register::from_index(byte as usize).ok_or(DisassemblerError::InvalidRegister(byte))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ldi() {
        let instr = decode(&[0b1000_0010, 0, 8]).unwrap();
        assert_eq!(instr, Instruction::Ldi { reg: Register::R0, imm: 8 });
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let instr = decode(&[0b0000_0001, 0xFF, 0xFF]).unwrap();
        assert_eq!(instr, Instruction::Hlt);
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(decode(&[0xFF]), Err(DisassemblerError::UnknownOpcode(0xFF)));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(&[]), Err(DisassemblerError::Empty));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(
            decode(&[0b1000_0010, 0]),
            Err(DisassemblerError::Truncated {
                opcode: 0b1000_0010,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_decode_invalid_register() {
        assert_eq!(
            decode(&[0b0100_0111, 8]),
            Err(DisassemblerError::InvalidRegister(8))
        );
    }

    #[test]
    fn test_ldi_immediate_is_not_a_register() {
        let instr = decode(&[0b1000_0010, 1, 200]).unwrap();
        assert_eq!(instr, Instruction::Ldi { reg: Register::R1, imm: 200 });
    }
}
