//! Assembly parser
//!
//! Turns one source line into a [`Line`]: an optional label definition
//! followed by an optional instruction or `DB` data statement. Label
//! references stay unresolved until the assembler's second pass.

use logos::Logos;
use ls8_spec::{Instruction, Opcode, Register};
use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Instruction or data operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Immediate(u64),
    Label(String),
}

/// Statement body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Instruction { opcode: Opcode, operands: Vec<Operand> },
    /// `DB v1, v2, ...`: raw bytes
    Data(Vec<Operand>),
}

impl Statement {
    /// Bytes this statement occupies in the image
    pub fn size(&self) -> usize {
        match self {
            Statement::Instruction { opcode, .. } => opcode.size(),
            Statement::Data(values) => values.len(),
        }
    }
}

/// One parsed source line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub label: Option<String>,
    pub statement: Option<Statement>,
}

/// Parse one source line. `line_num` is 1-based and only used for errors.
pub fn parse_line(line_num: usize, text: &str) -> Result<Line> {
    let mut tokens = Vec::new();
    let mut lex = Token::lexer(text);
    while let Some(token) = lex.next() {
        match token {
            Ok(Token::Newline) => break,
            Ok(token) => tokens.push((token, lex.span().start)),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    line: line_num,
                    column: lex.span().start + 1,
                    message: format!("Unexpected input {:?}", lex.slice()),
                })
            }
        }
    }

    let mut line = Line::default();
    let mut rest = tokens.as_slice();

    if let [(Token::Identifier(name), _), (Token::Colon, _), tail @ ..] = rest {
        line.label = Some(name.clone());
        rest = tail;
    }

    let Some(((head, column), operand_tokens)) = rest.split_first() else {
        return Ok(line);
    };

    let Token::Identifier(mnemonic) = head else {
        return Err(AssemblerError::SyntaxError {
            line: line_num,
            column: column + 1,
            message: format!("Expected mnemonic, found {:?}", head),
        });
    };

    let operands = parse_operands(line_num, operand_tokens)?;

    line.statement = Some(if mnemonic.eq_ignore_ascii_case("DB") {
        Statement::Data(operands)
    } else {
        let opcode = Opcode::from_mnemonic(mnemonic)
            .ok_or_else(|| AssemblerError::UnknownInstruction(mnemonic.clone()).at_line(line_num))?;
        if operands.len() != opcode.operand_count() as usize {
            return Err(AssemblerError::OperandCount {
                mnemonic: opcode.mnemonic().to_string(),
                expected: opcode.operand_count() as usize,
                found: operands.len(),
            }
            .at_line(line_num));
        }
        Statement::Instruction { opcode, operands }
    });

    Ok(line)
}

/// Comma separated operand list
fn parse_operands(line_num: usize, tokens: &[(Token, usize)]) -> Result<Vec<Operand>> {
    let mut operands = Vec::new();
    let mut expect_operand = true;

    for (token, column) in tokens {
        let syntax = |message: &str| AssemblerError::SyntaxError {
            line: line_num,
            column: column + 1,
            message: message.to_string(),
        };

        match (token, expect_operand) {
            (Token::Comma, false) => expect_operand = true,
            (Token::Comma, true) => return Err(syntax("Unexpected ','")),
            (_, false) => return Err(syntax("Expected ',' between operands")),
            (Token::Register(index), true) => {
                let reg = Register::from_index(*index as usize)
                    .ok_or_else(|| AssemblerError::InvalidRegister(format!("R{}", index)))?;
                operands.push(Operand::Register(reg));
                expect_operand = false;
            }
            (Token::Identifier(name), true) => {
                operands.push(Operand::Label(name.clone()));
                expect_operand = false;
            }
            (literal, true) => match literal.value() {
                Some(value) => {
                    operands.push(Operand::Immediate(value));
                    expect_operand = false;
                }
                None => return Err(syntax("Expected operand")),
            },
        }
    }

    if expect_operand && !operands.is_empty() {
        return Err(AssemblerError::SyntaxError {
            line: line_num,
            column: 0,
            message: "Trailing ','".to_string(),
        });
    }

    Ok(operands)
}

/// Parse register name
pub fn parse_register(name: &str) -> Result<Register> {
    let name = name.trim();
    name.strip_prefix(['R', 'r'])
        .and_then(|digits| digits.parse::<usize>().ok())
        .and_then(Register::from_index)
        .ok_or_else(|| AssemblerError::InvalidRegister(name.to_string()))
}

/// Parse a single instruction with literal operands only (no labels)
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    let line = parse_line(1, text)?;
    match line.statement {
        Some(Statement::Instruction { opcode, operands }) => {
            build_instruction(opcode, &operands, |name| {
                Err(AssemblerError::UndefinedLabel(name.to_string()))
            })
        }
        _ => Err(AssemblerError::SyntaxError {
            line: 1,
            column: 0,
            message: "Expected instruction".to_string(),
        }),
    }
}

/// Build an [`Instruction`] from parsed operands, resolving label references
/// through `resolve`.
pub fn build_instruction<F>(opcode: Opcode, operands: &[Operand], resolve: F) -> Result<Instruction>
where
    F: Fn(&str) -> Result<u8>,
{
    let reg = |i: usize| -> Result<Register> {
        match &operands[i] {
            Operand::Register(r) => Ok(*r),
            Operand::Immediate(v) => Err(AssemblerError::InvalidRegister(v.to_string())),
            Operand::Label(name) => Err(AssemblerError::InvalidRegister(name.clone())),
        }
    };
    let imm = |i: usize| -> Result<u8> {
        match &operands[i] {
            Operand::Immediate(v) => u8::try_from(*v).map_err(|_| AssemblerError::InvalidImmediate(v.to_string())),
            Operand::Label(name) => resolve(name),
            Operand::Register(r) => Err(AssemblerError::InvalidImmediate(r.to_string())),
        }
    };

    if operands.len() != opcode.operand_count() as usize {
        return Err(AssemblerError::OperandCount {
            mnemonic: opcode.mnemonic().to_string(),
            expected: opcode.operand_count() as usize,
            found: operands.len(),
        });
    }

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
            imm: imm(1)?,
        },
        Opcode::Add => Instruction::Add { a: reg(0)?, b: reg(1)? },
        Opcode::Mul => Instruction::Mul { a: reg(0)?, b: reg(1)? },
        Opcode::Cmp => Instruction::Cmp { a: reg(0)?, b: reg(1)? },
    };

    Ok(instr)
}
