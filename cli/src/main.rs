// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    fs::{self, File},
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use byteorder::{LittleEndian, WriteBytesExt};
use clap::{ArgAction, Parser, ValueEnum};
use nucsort::{Algorithm, SortConfig, SuffixArray};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Magic number at the start of a binary suffix array file ("NSAF" read as little-endian)
const MAGIC: u32 = 0x4641_534e;
/// Version of the binary suffix array format
const VERSION: u32 = 1;

/// Computes the suffix array of a nucleotide string
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// File containing the string to sort, or `-` for standard input
    input: PathBuf,
    /// Construction algorithm
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Doubling)]
    algorithm: AlgorithmArg,
    /// Append the terminator `$` to the input before sorting
    #[arg(long)]
    append_terminator: bool,
    /// Also build the suffix array with the other algorithm and fail if the results differ
    #[arg(long)]
    check: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// File to write the suffix array to instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Log more details to standard error (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum AlgorithmArg {
    Naive,
    Doubling,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Naive => Algorithm::Naive,
            AlgorithmArg::Doubling => Algorithm::Doubling,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum Format {
    /// One offset per line
    Text,
    /// A little-endian header followed by 32-bit little-endian offsets
    Binary,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let mut data = read_input(&args.input)?;
    if args.append_terminator {
        data.push(nucsort::TERMINATOR);
    }
    info!(len = data.len(), "read input");

    let algorithm = Algorithm::from(args.algorithm);
    let sa = SuffixArray::with_config(&data, SortConfig::new().algorithm(algorithm))
        .context("Failed to construct suffix array")?;
    debug!(?algorithm, "constructed suffix array");

    if args.check {
        let other = match algorithm {
            Algorithm::Naive => Algorithm::Doubling,
            Algorithm::Doubling => Algorithm::Naive,
        };
        let check = SuffixArray::with_config(&data, SortConfig::new().algorithm(other))
            .context("Failed to construct suffix array for checking")?;
        if check != sa {
            bail!("{algorithm:?} and {other:?} suffix arrays differ");
        }
        info!(?other, "suffix arrays agree");
    }

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            write_suffix_array(sa.as_slice(), args.format, BufWriter::new(file))
        }
        None => write_suffix_array(sa.as_slice(), args.format, io::stdout().lock()),
    };
    written.context("I/O error occurred while writing suffix array")?;

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG takes precedence over the verbosity flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut data = if path == Path::new("-") {
        let mut data = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut data)
            .context("Failed to read standard input")?;
        data
    } else {
        fs::read(path)
            .with_context(|| format!("Failed to read input file '{}'", path.display()))?
    };

    // Files usually end with a newline, which is not part of the string
    let len = data.trim_ascii_end().len();
    data.truncate(len);

    Ok(data)
}

fn write_suffix_array<W>(sa: &[u32], format: Format, mut out: W) -> io::Result<()>
where
    W: Write,
{
    match format {
        Format::Text => {
            for offset in sa {
                writeln!(out, "{offset}")?;
            }
        }
        Format::Binary => {
            out.write_u32::<LittleEndian>(MAGIC)?;
            out.write_u32::<LittleEndian>(VERSION)?;
            out.write_u64::<LittleEndian>(sa.len() as u64)?;
            for &offset in sa {
                out.write_u32::<LittleEndian>(offset)?;
            }
        }
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn default_args() {
        let args = Args::try_parse_from(["nucsort", "input.txt"]).unwrap();

        assert_eq!(args.algorithm, AlgorithmArg::Doubling);
        assert_eq!(args.format, Format::Text);
        assert!(!args.append_terminator);
        assert!(!args.check);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn parse_all_args() {
        let args = Args::try_parse_from([
            "nucsort",
            "-",
            "--algorithm",
            "naive",
            "--append-terminator",
            "--check",
            "--format",
            "binary",
            "-o",
            "out.sa",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.input, Path::new("-"));
        assert_eq!(args.algorithm, AlgorithmArg::Naive);
        assert_eq!(args.format, Format::Binary);
        assert_eq!(args.output.as_deref(), Some(Path::new("out.sa")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn text_output() {
        let mut out = Vec::new();
        write_suffix_array(&[5, 4, 0], Format::Text, &mut out).unwrap();

        assert_eq!(out, b"5\n4\n0\n");
    }

    #[test]
    fn binary_output() {
        let mut out = Vec::new();
        write_suffix_array(&[4, 3, 2, 1, 0], Format::Binary, &mut out).unwrap();

        assert_eq!(out.len(), 16 + 5 * 4);
        assert_eq!(&out[..4], b"NSAF");
        assert_eq!(&out[4..8], &VERSION.to_le_bytes());
        assert_eq!(&out[8..16], &5u64.to_le_bytes());
        assert_eq!(&out[16..20], &4u32.to_le_bytes());
        assert_eq!(&out[32..], &0u32.to_le_bytes());
    }

    #[test]
    fn read_input_strips_trailing_newline() {
        let path = std::env::temp_dir().join(format!("nucsort-cli-{}.txt", std::process::id()));
        fs::write(&path, b"acata$\n").unwrap();

        let data = read_input(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(data.unwrap(), b"acata$");
    }
}
