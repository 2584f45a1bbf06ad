//! Program image loader
//!
//! The image format is line oriented. Each line is blank, a comment (text
//! after `#`, possibly the whole line), or a binary literal of up to 8 bits
//! giving one byte. Bytes are placed densely from address 0.

use std::fs;
use std::path::Path;

use ls8_spec::Program;
use crate::error::{AssemblerError, Result};

/// Parse image text into a program
pub fn load_image(source: &str) -> Result<Program> {
    let mut code = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line_num = index + 1;
        let literal = line.split('#').next().unwrap_or_default().trim();
        if literal.is_empty() {
            continue;
        }
        code.push(parse_literal(line_num, literal)?);
    }

    let program = Program::new(code);
    program.validate()?;
    Ok(program)
}

/// Read and parse an image file
pub fn load_image_file(path: impl AsRef<Path>) -> Result<Program> {
    let source = fs::read_to_string(path)?;
    load_image(&source)
}

fn parse_literal(line: usize, literal: &str) -> Result<u8> {
    if !literal.chars().all(|c| c == '0' || c == '1') {
        return Err(AssemblerError::InvalidLiteral {
            line,
            literal: literal.to_string(),
        });
    }
    if literal.len() > 8 {
        return Err(AssemblerError::LiteralTooWide {
            line,
            literal: literal.to_string(),
        });
    }
    u8::from_str_radix(literal, 2).map_err(|_| AssemblerError::InvalidLiteral {
        line,
        literal: literal.to_string(),
    })
}
