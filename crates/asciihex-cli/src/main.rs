//! asciihex CLI: binary <-> caret/tilde escaped text.

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asciihex", version, about = "Binary <-> printable ASCII escaping")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Escape arbitrary bytes as printable ASCII
    Encode(EncodeArgs),
    /// Turn escaped text back into the original bytes
    Decode(DecodeArgs),
}

#[derive(Args)]
struct IoArgs {
    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct EncodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Do not terminate the output with a newline
    #[arg(short = 'n', long)]
    no_newline: bool,
}

#[derive(Args)]
struct DecodeArgs {
    #[command(flatten)]
    io: IoArgs,

    /// Reject a trailing line ending instead of ignoring it
    #[arg(long)]
    strict: bool,
}

impl IoArgs {
    fn input_name(&self) -> String {
        self.input
            .as_ref()
            .map_or_else(|| "<stdin>".to_owned(), |p| p.display().to_string())
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Some(path) => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
            None => {
                let mut buf = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    fn write_output(&self, data: &[u8]) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
            }
            None => {
                let mut out = io::stdout().lock();
                out.write_all(data).context("failed to write stdout")?;
                out.flush().context("failed to flush stdout")
            }
        }
    }
}

/// Drops one trailing `\n` or `\r\n`, as left by editors and `echo`.
fn trim_line_ending(text: &[u8]) -> &[u8] {
    match text.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => text,
    }
}

fn run_encode(args: &EncodeArgs) -> Result<()> {
    let data = args.io.read_input()?;
    let mut text = asciihex::encode(&data);
    if !args.no_newline {
        text.push('\n');
    }
    log::debug!(
        "encoded {} bytes from {} into {} bytes",
        data.len(),
        args.io.input_name(),
        text.len()
    );
    args.io.write_output(text.as_bytes())
}

fn run_decode(args: &DecodeArgs) -> Result<()> {
    let raw = args.io.read_input()?;
    let text = if args.strict {
        raw.as_slice()
    } else {
        trim_line_ending(&raw)
    };
    let data = asciihex::decode(text)
        .with_context(|| format!("failed to decode {}", args.io.input_name()))?;
    log::debug!(
        "decoded {} bytes from {} into {} bytes",
        text.len(),
        args.io.input_name(),
        data.len()
    );
    args.io.write_output(&data)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match &cli.command {
        Command::Encode(args) => run_encode(args),
        Command::Decode(args) => run_decode(args),
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf, process};

    use clap::CommandFactory;

    use super::{Cli, DecodeArgs, IoArgs, run_decode, trim_line_ending};

    /// Input and output paths unique to this test process and `name`.
    fn scratch_paths(name: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir();
        let stem = format!("asciihex-cli-{}-{name}", process::id());
        (dir.join(format!("{stem}.in")), dir.join(format!("{stem}.out")))
    }

    fn decode_file(name: &str, text: &[u8], strict: bool) -> (anyhow::Result<()>, Option<Vec<u8>>) {
        let (input, output) = scratch_paths(name);
        fs::write(&input, text).unwrap();
        let _ = fs::remove_file(&output);

        let args = DecodeArgs {
            io: IoArgs {
                input: Some(input.clone()),
                output: Some(output.clone()),
            },
            strict,
        };
        let result = run_decode(&args);
        let written = fs::read(&output).ok();

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
        (result, written)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trims_one_line_ending() {
        assert_eq!(trim_line_ending(b"abc\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r\n"), b"abc");
        assert_eq!(trim_line_ending(b"abc\n\n"), b"abc\n");
        assert_eq!(trim_line_ending(b"abc"), b"abc");
        assert_eq!(trim_line_ending(b"abc\r"), b"abc\r");
    }

    #[test]
    fn decode_ignores_trailing_newline_by_default() {
        let (result, written) = decode_file("lenient", b"Hi^J~FF\n", false);
        result.unwrap();
        assert_eq!(written.as_deref(), Some(&b"Hi\n\xFF"[..]));
    }

    #[test]
    fn strict_decode_rejects_trailing_newline() {
        let (result, written) = decode_file("strict", b"Hi^J~FF\n", true);
        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("failed to decode "), "{err:#}");
        let cause = err.downcast_ref::<asciihex::DecodeError>().unwrap();
        assert_eq!(cause.position(), 8);
        assert_eq!(cause.kind(), &asciihex::SyntaxError::UnexpectedCharacter('\n'));
        assert_eq!(written, None);
    }
}
