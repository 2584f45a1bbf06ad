//! Virtual Machine for LS-8

use ls8_disassembler::decode_operands;
use ls8_spec::{operand_count, Flags, Instruction, Opcode, Program, NUM_REGISTERS};
use serde::Serialize;
use tracing::{debug, info, trace};
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::state::{StackMode, VMState};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VMConfig {
    /// Stop with [`RuntimeError::CycleLimitExceeded`] after this many
    /// instructions. `None` runs until `HLT`.
    pub max_cycles: Option<u64>,

    /// Emit a `TRACE:` line before every instruction
    pub trace: bool,

    /// Stack pointer arithmetic
    pub stack_mode: StackMode,
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    /// Number of instructions executed, including `HLT`
    pub cycles: u64,

    /// Values printed by `PRN`, in order
    pub outputs: Vec<u8>,

    /// Final register file
    pub registers: [u8; NUM_REGISTERS],

    /// Final program counter
    pub pc: usize,

    /// Final condition flags
    pub flags: Flags,
}

/// LS-8 Virtual Machine
pub struct VM {
    /// Registers, PC, flags
    state: VMState,

    /// Memory subsystem
    memory: Memory,

    /// Output channel
    io: IOHandler,

    config: VMConfig,
}

impl VM {
    /// Create a VM with `program` loaded at address 0, recording output
    pub fn new(program: &Program, config: VMConfig) -> Result<Self> {
        Self::with_io(program, config, IOHandler::new())
    }

    /// Create a VM writing `PRN` output through `io`
    pub fn with_io(program: &Program, config: VMConfig, io: IOHandler) -> Result<Self> {
        let mut memory = Memory::new();
        memory.load_program(program)?;
        debug!(size = program.len(), "program loaded");

        Ok(Self {
            state: VMState::new(config.stack_mode),
            memory,
            io,
            config,
        })
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult> {
        while self.state.running {
            if let Some(limit) = self.config.max_cycles {
                if self.state.cycles >= limit {
                    return Err(RuntimeError::CycleLimitExceeded { limit });
                }
            }

            if let Err(err) = self.step() {
                debug!(pc = self.state.pc, error = %err, "execution stopped");
                return Err(err);
            }
        }

        debug!(cycles = self.state.cycles, "halted");

        Ok(ExecutionResult {
            cycles: self.state.cycles,
            outputs: self.io.take_outputs(),
            registers: self.state.registers,
            pc: self.state.pc,
            flags: self.state.flags,
        })
    }

    /// Fetch, decode and execute one instruction
    pub fn step(&mut self) -> Result<Instruction> {
        let pc = self.state.pc;
        let inst = self.fetch_and_decode()?;

        if self.config.trace {
            info!("{}", self.state.trace_line(&self.memory));
        }
        trace!(pc, %inst, "execute");

        // Default advance; control-flow instructions overwrite it
        self.state.pc = pc + inst.size();

        execute(&inst, &mut self.state, &mut self.memory, &mut self.io).map_err(|e| e.at_pc(pc))?;
        self.state.cycles += 1;

        Ok(inst)
    }

    /// Fetch and decode the instruction at PC
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.pc;
        let ir = self.memory.read(pc)?;
        let opcode = Opcode::from_u8(ir).ok_or(RuntimeError::UnknownInstruction { opcode: ir, pc })?;

        let operands = self.memory.read_range(pc + 1, operand_count(ir) as usize)?;
        decode_operands(opcode, operands).map_err(|e| RuntimeError::from_decode(e, pc))
    }

    /// False once HLT has executed
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Get memory (for debugging)
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Values printed so far
    pub fn outputs(&self) -> &[u8] {
        self.io.outputs()
    }
}
