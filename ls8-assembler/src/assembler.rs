//! Main assembler logic

use std::collections::HashMap;

use ls8_spec::{Program, MEMORY_SIZE};
use crate::encoder::encode;
use crate::error::{AssemblerError, Result};
use crate::parser::{build_instruction, parse_line, Operand, Statement};

/// Assemble source code into a program.
///
/// Two passes: the first assigns an address to every label, the second
/// encodes statements with label references resolved to those addresses.
pub fn assemble(source: &str) -> Result<Program> {
    let mut statements = Vec::new();
    let mut labels: HashMap<String, u8> = HashMap::new();
    let mut addr = 0usize;

    for (index, text) in source.lines().enumerate() {
        let line_num = index + 1;
        let line = parse_line(line_num, text)?;

        if let Some(label) = line.label {
            if labels.contains_key(&label) {
                return Err(AssemblerError::DuplicateLabel(label).at_line(line_num));
            }
            let value = u8::try_from(addr).map_err(|_| {
                AssemblerError::InvalidImmediate(format!("{} = {}", label, addr)).at_line(line_num)
            })?;
            labels.insert(label, value);
        }

        if let Some(statement) = line.statement {
            addr += statement.size();
            statements.push((line_num, statement));
        }
    }

    let resolve = |name: &str| -> Result<u8> {
        labels
            .get(name)
            .copied()
            .ok_or_else(|| AssemblerError::UndefinedLabel(name.to_string()))
    };

    let mut code = Vec::with_capacity(addr);
    for (line_num, statement) in statements {
        let bytes = match statement {
            Statement::Instruction { opcode, operands } => {
                encode(&build_instruction(opcode, &operands, resolve).map_err(|e| e.at_line(line_num))?)
            }
            Statement::Data(values) => values
                .iter()
                .map(|value| data_byte(value, resolve))
                .collect::<Result<Vec<u8>>>()
                .map_err(|e| e.at_line(line_num))?,
        };
        code.extend(bytes);
    }

    if code.len() > MEMORY_SIZE {
        return Err(ls8_spec::SpecError::ProgramTooLarge {
            size: code.len(),
            capacity: MEMORY_SIZE,
        }
        .into());
    }

    Ok(Program::new(code))
}

fn data_byte<F>(value: &Operand, resolve: F) -> Result<u8>
where
    F: Fn(&str) -> Result<u8>,
{
    match value {
        Operand::Immediate(v) => {
            u8::try_from(*v).map_err(|_| AssemblerError::InvalidImmediate(v.to_string()))
        }
        Operand::Label(name) => resolve(name),
        Operand::Register(r) => Err(AssemblerError::InvalidImmediate(r.to_string())),
    }
}
