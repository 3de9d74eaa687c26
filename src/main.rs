//! RV32 Control Unit CLI.
//!
//! Runs a raw firmware image on the cycle-stepped core, or disassembles one.
//!
//! # Usage
//!
//! * `run <image> [--config FILE] [--cycles N] [--trace] [--stats-json]`
//! * `disasm <image>`

use std::process;

use clap::{Parser, Subcommand};
use log::{error, info, LevelFilter};

use rv32_control::common::ConfigError;
use rv32_control::config::Config;
use rv32_control::core::Cpu;
use rv32_control::isa::disassemble;
use rv32_control::sim::loader;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV32I decode and trap control unit simulator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a firmware image.
    Run {
        /// Raw image copied into the ROM at address 0.
        image: String,

        /// TOML configuration file; defaults apply when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of clock cycles to simulate.
        #[arg(long, default_value_t = 10_000)]
        cycles: u64,

        /// Log every stage of every instruction.
        #[arg(long)]
        trace: bool,

        /// Print statistics as JSON instead of text.
        #[arg(long)]
        stats_json: bool,
    },

    /// Disassemble a firmware image.
    Disasm {
        image: String,
    },
}

fn init_logging(trace: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if trace {
        builder.filter_level(LevelFilter::Trace);
    }
    builder.init();
}

/// Whether stage tracing is on, from the flag or a successfully loaded
/// config. A config error still gets a logger so it can be reported.
fn trace_requested(flag: bool, loaded: &Result<Config, ConfigError>) -> bool {
    flag || loaded
        .as_ref()
        .map_or(false, |config| config.general.trace_instructions)
}

fn run(
    image: &str,
    config: Option<&str>,
    cycles: u64,
    trace: bool,
    stats_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = match config {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    };
    init_logging(trace_requested(trace, &loaded));
    let config = loaded?;

    let mut cpu = Cpu::new(&config);
    cpu.trace |= trace;
    let size = cpu.load_firmware(image)?;
    info!("loaded {} bytes, start pc {:#x}", size, cpu.pc());

    cpu.run(cycles);

    cpu.dump_state();
    if stats_json {
        println!("{}", cpu.stats.to_json()?);
    } else {
        cpu.stats.print();
    }
    Ok(())
}

fn disasm(image: &str) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(false);
    let bytes = loader::load_binary(image)?;
    for (i, word) in loader::image_words(&bytes).into_iter().enumerate() {
        println!("{:08x}:  {:08x}  {}", i * 4, word, disassemble(word));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Command::Run {
            image,
            config,
            cycles,
            trace,
            stats_json,
        } => run(&image, config.as_deref(), cycles, trace, stats_json),
        Command::Disasm { image } => disasm(&image),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    }
}
