//! Instruction execution for LS-8
//!
//! By the time an instruction reaches [`execute`] the program counter already
//! points past it. Control-flow instructions simply overwrite it.

use ls8_spec::Instruction;
use tracing::debug;
use crate::alu::{self, AluOp};
use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::VMState;

/// Execute single instruction
pub fn execute(
    instr: &Instruction,
    state: &mut VMState,
    memory: &mut Memory,
    io: &mut IOHandler,
) -> Result<()> {
    match *instr {
        // ========== Data ==========
        Instruction::Ldi { reg, imm } => {
            state.write_reg(reg, imm);
        }

        Instruction::Prn { reg } => {
            io.write(state.read_reg(reg))?;
        }

        // ========== ALU ==========
        Instruction::Add { a, b } => alu::execute(AluOp::Add, a, b, state)?,
        Instruction::Mul { a, b } => alu::execute(AluOp::Mul, a, b, state)?,
        Instruction::Cmp { a, b } => alu::execute(AluOp::Cmp, a, b, state)?,

        // ========== Stack ==========
        Instruction::Push { reg } => state.push_reg(memory, reg)?,
        Instruction::Pop { reg } => state.pop_reg(memory, reg)?,

        // ========== Control flow ==========
        // Target is read after the push; `CALL R7` jumps to the new SP
        Instruction::Call { reg } => {
            let return_addr = u8::try_from(state.pc)
                .map_err(|_| RuntimeError::OutOfBounds { address: state.pc })?;
            state.push(memory, return_addr)?;
            state.pc = state.read_reg(reg) as usize;
        }

        Instruction::Ret => {
            state.pc = state.pop(memory)? as usize;
        }

        Instruction::Jmp { reg } => {
            state.pc = state.read_reg(reg) as usize;
        }

        Instruction::Jeq { reg } => {
            if state.flags.is_equal() {
                state.pc = state.read_reg(reg) as usize;
            }
        }

        Instruction::Jne { reg } => {
            if !state.flags.is_equal() {
                state.pc = state.read_reg(reg) as usize;
            }
        }

        // ========== System ==========
        Instruction::Hlt => {
            debug!(pc = state.pc.saturating_sub(1), "HLT");
            state.halt();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8_spec::{Flags, Register};

    fn setup() -> (VMState, Memory, IOHandler) {
        (VMState::default(), Memory::new(), IOHandler::new())
    }

    #[test]
    fn test_ldi_and_prn() {
        let (mut state, mut mem, mut io) = setup();
        execute(&Instruction::Ldi { reg: Register::R3, imm: 99 }, &mut state, &mut mem, &mut io).unwrap();
        execute(&Instruction::Prn { reg: Register::R3 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(io.outputs(), &[99]);
    }

    #[test]
    fn test_call_pushes_return_address() {
        let (mut state, mut mem, mut io) = setup();
        state.write_reg(Register::R1, 0x40);
        state.pc = 0x0A; // already advanced past CALL at 0x08

        execute(&Instruction::Call { reg: Register::R1 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0x40);
        assert_eq!(state.sp(), 0xFE);
        assert_eq!(mem.read(0xFE).unwrap(), 0x0A);

        execute(&Instruction::Ret, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0x0A);
        assert_eq!(state.sp(), 0xFF);
    }

    #[test]
    fn test_call_through_stack_pointer_uses_pushed_value() {
        let (mut state, mut mem, mut io) = setup();
        state.pc = 2;
        execute(&Instruction::Call { reg: Register::R7 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0xFE);
        assert_eq!(mem.read(0xFE).unwrap(), 2);
    }

    #[test]
    fn test_conditional_jumps() {
        let (mut state, mut mem, mut io) = setup();
        state.write_reg(Register::R2, 0x20);
        state.pc = 5;

        state.flags = Flags::compare(1, 2);
        execute(&Instruction::Jeq { reg: Register::R2 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 5);
        execute(&Instruction::Jne { reg: Register::R2 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0x20);

        state.pc = 5;
        state.flags = Flags::compare(2, 2);
        execute(&Instruction::Jne { reg: Register::R2 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 5);
        execute(&Instruction::Jeq { reg: Register::R2 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0x20);
    }

    #[test]
    fn test_jne_before_any_compare() {
        let (mut state, mut mem, mut io) = setup();
        state.write_reg(Register::R0, 0x30);
        state.pc = 2;
        execute(&Instruction::Jne { reg: Register::R0 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.pc, 0x30);
    }

    #[test]
    fn test_call_return_address_must_fit_in_memory() {
        let (mut state, mut mem, mut io) = setup();
        state.pc = 256;
        let err = execute(&Instruction::Call { reg: Register::R0 }, &mut state, &mut mem, &mut io).unwrap_err();
        assert!(matches!(err, RuntimeError::OutOfBounds { address: 256 }));
        assert_eq!(state.sp(), 0xFF);
    }

    #[test]
    fn test_hlt_stops() {
        let (mut state, mut mem, mut io) = setup();
        state.pc = 1;
        execute(&Instruction::Hlt, &mut state, &mut mem, &mut io).unwrap();
        assert!(!state.running);
    }

    #[test]
    fn test_pop_into_stack_pointer_increments_popped_value() {
        let (mut state, mut mem, mut io) = setup();
        state.push(&mut mem, 0x80).unwrap();
        execute(&Instruction::Pop { reg: Register::R7 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.sp(), 0x81);
    }

    #[test]
    fn test_push_stack_pointer_stores_decremented_value() {
        let (mut state, mut mem, mut io) = setup();
        execute(&Instruction::Push { reg: Register::R7 }, &mut state, &mut mem, &mut io).unwrap();
        assert_eq!(state.sp(), 0xFE);
        assert_eq!(mem.read(0xFE).unwrap(), 0xFE);
    }
}
