//! Instruction formatting to assembly text and program image text

use ls8_spec::{Instruction, Program};
use crate::decoder::decode;

/// Format instruction as assembly text accepted by the assembler
pub fn format(instr: &Instruction) -> String {
    match *instr {
        Instruction::Ldi { reg, imm } => format!("LDI {}, {}", reg, imm),
        Instruction::Add { a, b } => format!("ADD {}, {}", a, b),
        Instruction::Mul { a, b } => format!("MUL {}, {}", a, b),
        Instruction::Cmp { a, b } => format!("CMP {}, {}", a, b),
        Instruction::Prn { reg }
        | Instruction::Push { reg }
        | Instruction::Pop { reg }
        | Instruction::Call { reg }
        | Instruction::Jmp { reg }
        | Instruction::Jeq { reg }
        | Instruction::Jne { reg } => format!("{} {}", instr.mnemonic(), reg),
        Instruction::Ret | Instruction::Hlt => instr.mnemonic().to_string(),
    }
}

/// Eight-digit binary literal, as used by the image format
pub fn format_byte(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Render a program in the binary-literal image format.
///
/// One byte per line; the first byte of every decoded instruction carries a
/// `#` comment with its disassembly, so the output loads back unchanged.
pub fn format_image(program: &Program) -> String {
    let mut output = String::new();
    let code = &program.code;
    let mut addr = 0;

    while addr < code.len() {
        match decode(&code[addr..]) {
            Ok(instr) => {
                output.push_str(&format!("{} # {}\n", format_byte(code[addr]), format(&instr)));
                for &byte in &code[addr + 1..addr + instr.size()] {
                    output.push_str(&format_byte(byte));
                    output.push('\n');
                }
                addr += instr.size();
            }
            Err(_) => {
                output.push_str(&format!("{}\n", format_byte(code[addr])));
                addr += 1;
            }
        }
    }

    output
}
