use anyhow::Context;
use clap::{Parser, ValueEnum};
use owo_colors::{OwoColorize, Stream};
use rdcalc::{evaluate, lex::Lexer, parse, value::Number, SyntaxError};
use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};
use tracing_subscriber::EnvFilter;

/// Evaluate arithmetic expressions, one per line.
///
/// Reads standard input unless expressions are given on the command line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expressions to evaluate instead of reading standard input.
    exprs: Vec<String>,

    /// Number of fractional digits to print.
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Print the parsed tree before each result.
    #[arg(short, long)]
    tree: bool,

    /// Print the token stream before each result.
    #[arg(long)]
    tokens: bool,

    /// Stop at the first syntax error and exit with a failure status.
    #[arg(long)]
    fail_fast: bool,

    /// When to color the prompt and diagnostics.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

struct Session<'a, O, E> {
    args: &'a Args,
    out: O,
    err: E,
}

impl<'a, O: Write, E: Write> Session<'a, O, E> {
    fn new(args: &'a Args, out: O, err: E) -> Self {
        Self { args, out, err }
    }

    ///
    /// Evaluate every line of `input`. Returns `false` if it stopped early
    /// on a syntax error.
    ///
    fn run(
        &mut self,
        input: impl BufRead,
        interactive: bool,
    ) -> anyhow::Result<bool> {
        let mut lines = input.lines();

        loop {
            if interactive {
                write!(
                    self.out,
                    "{} ",
                    ">".if_supports_color(Stream::Stdout, |s| s.green())
                )?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("failed to read input")?;

            if !self.calc(&line)? && self.args.fail_fast {
                return Ok(false);
            }
        }

        if interactive {
            writeln!(
                self.out,
                "{}",
                "exiting...".if_supports_color(Stream::Stdout, |s| s.yellow())
            )?;
        }

        Ok(true)
    }

    fn run_exprs<'s>(
        &mut self,
        exprs: impl IntoIterator<Item = &'s str>,
    ) -> anyhow::Result<bool> {
        for expr in exprs {
            if !self.calc(expr)? && self.args.fail_fast {
                return Ok(false);
            }
        }

        Ok(true)
    }

    ///
    /// Evaluate one line and print its value, or report why it couldn't be
    /// parsed. Blank lines are skipped.
    ///
    fn calc(&mut self, line: &str) -> io::Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }

        if self.args.tokens {
            for token in Lexer::new(line).map_while(Result::ok) {
                write!(self.out, "{token:?} ")?;
            }
            writeln!(self.out)?;
        }

        match parse(line) {
            Ok(expr) => {
                if self.args.tree {
                    writeln!(self.out, "{expr}")?;
                }

                let value = Number::from(evaluate(&expr));
                writeln!(
                    self.out,
                    "{value:.prec$}",
                    prec = self.args.precision
                )?;
                Ok(true)
            }
            Err(err) => {
                self.report(line, &err)?;
                Ok(false)
            }
        }
    }

    fn report(&mut self, line: &str, err: &SyntaxError) -> io::Result<()> {
        writeln!(
            self.err,
            "{}: {err}",
            "error".if_supports_color(Stream::Stderr, |s| s.red())
        )?;
        writeln!(self.err, "  {line}")?;
        writeln!(
            self.err,
            "  {}{}",
            caret_padding(line, err.position),
            "^".if_supports_color(Stream::Stderr, |s| s.red())
        )
    }
}

///
/// Blanks that line up under `line[..position]`, keeping its tabs.
///
fn caret_padding(line: &str, position: usize) -> String {
    line.get(..position)
        .unwrap_or(line)
        .chars()
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RDCALC_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match args.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    tracing::debug!(?args, "starting");

    let mut session = Session::new(&args, io::stdout(), io::stderr());
    let completed = if args.exprs.is_empty() {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        session.run(stdin.lock(), interactive)?
    } else {
        session.run_exprs(args.exprs.iter().map(String::as_str))?
    };

    Ok(if completed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
