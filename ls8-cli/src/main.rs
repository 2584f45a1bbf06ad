//! `ls8`: run, assemble and disassemble LS-8 programs

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ls8_assembler::{assemble, load_image_file};
use ls8_disassembler::{disassemble, format_image};
use ls8_runtime::{IOHandler, RuntimeError, StackMode, VMConfig, VM};
use ls8_spec::Program;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ls8", version, about = "LS-8 emulator and toolchain")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a program, printing each PRN value on its own line
    Run {
        /// Program image (`.ls8`) or assembly source (`.asm`)
        file: PathBuf,

        /// Print a TRACE line before every instruction
        #[arg(long)]
        trace: bool,

        /// Give up after this many instructions
        #[arg(long, value_name = "N")]
        max_cycles: Option<u64>,

        /// Let the stack pointer wrap around instead of failing
        #[arg(long)]
        wrapping_stack: bool,

        /// Treat FILE as assembly source regardless of extension
        #[arg(long)]
        asm: bool,
    },

    /// Assemble source into the binary-literal image format
    Asm {
        file: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Print an annotated listing of a program
    Disasm {
        /// Program image (`.ls8`) or assembly source (`.asm`)
        file: PathBuf,
    },
}

fn init_logging(trace: bool) {
    let default = if trace { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn is_assembly(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("asm"))
}

fn load_program(path: &Path, force_asm: bool) -> Result<Program> {
    if force_asm || is_assembly(path) {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        assemble(&source).with_context(|| format!("failed to assemble {}", path.display()))
    } else {
        load_image_file(path).with_context(|| format!("failed to load {}", path.display()))
    }
}

fn run(file: &Path, config: VMConfig, force_asm: bool) -> Result<()> {
    let program = load_program(file, force_asm)?;
    debug!(path = %file.display(), size = program.len(), "loaded");

    let vm = VM::with_io(&program, config, IOHandler::stdout())?;
    match vm.run() {
        Ok(result) => {
            debug!(cycles = result.cycles, "finished");
            Ok(())
        }
        Err(err) => exit_with(err),
    }
}

fn exit_with(err: RuntimeError) -> ! {
    eprintln!("{}", err);
    process::exit(err.exit_code());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            file,
            trace,
            max_cycles,
            wrapping_stack,
            asm,
        } => {
            init_logging(trace);
            let config = VMConfig {
                max_cycles,
                trace,
                stack_mode: if wrapping_stack {
                    StackMode::Wrapping
                } else {
                    StackMode::Checked
                },
            };
            run(&file, config, asm)
        }

        Command::Asm { file, output } => {
            init_logging(false);
            let program = load_program(&file, true)?;
            let image = format_image(&program);
            match output {
                Some(path) => fs::write(&path, image)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{}", image),
            }
            Ok(())
        }

        Command::Disasm { file } => {
            init_logging(false);
            let program = load_program(&file, false)?;
            print!("{}", disassemble(&program));
            Ok(())
        }
    }
}
