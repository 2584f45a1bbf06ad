//! Main disassembler logic

use ls8_spec::{Program, MEMORY_SIZE};
use crate::decoder::decode;
use crate::error::DisassemblerError;
use crate::formatter::format;

/// Disassemble a program into an annotated listing.
///
/// Bytes that do not decode are emitted as `DB` lines and the walk resumes
/// at the next byte.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();
    let code = &program.code;

    output.push_str("; LS-8 Disassembly\n");
    output.push_str(&format!("; Image size: {} / {} bytes\n", code.len(), MEMORY_SIZE));
    output.push('\n');

    let mut addr = 0;
    while addr < code.len() {
        match decode(&code[addr..]) {
            Ok(instr) => {
                let bytes = &code[addr..addr + instr.size()];
                output.push_str(&format!(
                    "{:02X}:  {:<9} {}\n",
                    addr,
                    hex_bytes(bytes),
                    format(&instr)
                ));
                addr += instr.size();
            }
            Err(e) => {
                let comment = match e {
                    DisassemblerError::UnknownOpcode(_) => String::new(),
                    other => format!(" ; {}", other),
                };
                output.push_str(&format!(
                    "{:02X}:  {:<9} DB 0x{:02X}{}\n",
                    addr,
                    hex_bytes(&code[addr..addr + 1]),
                    code[addr],
                    comment
                ));
                addr += 1;
            }
        }
    }

    output
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
