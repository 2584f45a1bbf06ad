//! Instruction encoder

use ls8_spec::{Instruction, Program};

/// Encode a single instruction into its opcode and operand bytes
pub fn encode(instr: &Instruction) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(instr.size());
    bytes.push(instr.opcode().to_u8());
    bytes.extend(instr.operands());
    bytes
}

/// Encode a straight-line sequence of instructions into a program image
pub fn encode_program(instrs: &[Instruction]) -> Program {
    Program::new(instrs.iter().flat_map(encode).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::Register;

    #[test]
    fn test_encode_ldi() {
        let bytes = encode(&Instruction::Ldi { reg: Register::R0, imm: 8 });
        assert_eq!(bytes, vec![0b1000_0010, 0b0000_0000, 0b0000_1000]);
    }

    #[test]
    fn test_encode_single_register() {
        assert_eq!(encode(&Instruction::Prn { reg: Register::R0 }), vec![0b0100_0111, 0]);
        assert_eq!(encode(&Instruction::Push { reg: Register::R1 }), vec![0b0100_0101, 1]);
        assert_eq!(encode(&Instruction::Call { reg: Register::R1 }), vec![0b0101_0000, 1]);
    }

    #[test]
    fn test_encode_no_operands() {
        assert_eq!(encode(&Instruction::Hlt), vec![0b0000_0001]);
        assert_eq!(encode(&Instruction::Ret), vec![0b0001_0001]);
    }

    #[test]
    fn test_encode_program_print8() {
        let program = encode_program(&[
            Instruction::Ldi { reg: Register::R0, imm: 8 },
            Instruction::Prn { reg: Register::R0 },
            Instruction::Hlt,
        ]);
        assert_eq!(
            program.code,
            vec![0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]
        );
    }
}
