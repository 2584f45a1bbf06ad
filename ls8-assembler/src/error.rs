//! Assembler and loader errors

use ls8_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<AssemblerError>,
    },

    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("Invalid register: {0}")]
    InvalidRegister(String),

    #[error("Invalid immediate value: {0}")]
    InvalidImmediate(String),

    #[error("Wrong operand count for {mnemonic}: expected {expected}, found {found}")]
    OperandCount {
        mnemonic: String,
        expected: usize,
        found: usize,
    },

    #[error("Undefined label: {0}")]
    UndefinedLabel(String),

    #[error("Duplicate label: {0}")]
    DuplicateLabel(String),

    #[error("Invalid binary literal at line {line}: {literal:?}")]
    InvalidLiteral { line: usize, literal: String },

    #[error("Binary literal wider than 8 bits at line {line}: {literal:?}")]
    LiteralTooWide { line: usize, literal: String },

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AssemblerError {
    /// Attach a source line number
    pub fn at_line(self, line: usize) -> Self {
        match self {
            AssemblerError::SyntaxError { .. }
            | AssemblerError::AtLine { .. }
            | AssemblerError::InvalidLiteral { .. }
            | AssemblerError::LiteralTooWide { .. } => self,
            other => AssemblerError::AtLine {
                line,
                source: Box::new(other),
            },
        }
    }

    /// 1-based source line, when known
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::SyntaxError { line, .. }
            | AssemblerError::AtLine { line, .. }
            | AssemblerError::InvalidLiteral { line, .. }
            | AssemblerError::LiteralTooWide { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
