use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use utpu_rs::{assemble, disasm, output, AsmConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble uTPU programs to .mem (hex text) and .bin (little-endian) images"
)]
struct Opts {
    /// Input assembly file (one instruction per line)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Output base path; defaults to the input path minus its extension
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Reject malformed or out-of-range numerals instead of masking them
    #[arg(long)]
    strict: bool,
    /// Print a disassembly listing of the encoded words
    #[arg(short, long)]
    listing: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let src = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("could not open '{}'", opts.input.display()))?;

    let cfg = AsmConfig {
        strict_numerals: opts.strict,
    };
    let prog = match assemble(&src, &cfg) {
        Ok(prog) => prog,
        Err(errors) => {
            for err in &errors {
                eprintln!("error: {err}");
            }
            bail!("{} line(s) failed to encode", errors.len());
        }
    };

    let base = opts
        .output
        .unwrap_or_else(|| opts.input.with_extension(""));
    let mem_path = base.with_extension("mem");
    let bin_path = base.with_extension("bin");
    output::write_mem(&mem_path, &prog.words)?;
    output::write_bin(&bin_path, &prog.words)?;

    if opts.listing {
        for line in disasm::disassemble(&prog.words) {
            println!("{line}");
        }
    }

    println!(
        "Assembled {} words to {} and {}",
        prog.len(),
        mem_path.display(),
        bin_path.display()
    );
    Ok(())
}
