mod error;
mod session;

use exparse_parser::parser::fmt::{Chains, FormatOptions, Grouping, Notation};
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};

/// Command-line options.
#[derive(Debug, Default)]
struct Args {
    /// Notation used to print trees.
    notation: Notation,

    /// Options used to print trees.
    options: FormatOptions,

    /// A single line to run instead of starting a session.
    expr: Option<String>,
}

impl Args {
    /// Reads the options from the process arguments.
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--infix" => parsed.notation = Notation::Infix,
                "--prefix" => parsed.notation = Notation::Prefix,
                "--postfix" => parsed.notation = Notation::Postfix,
                "--grouped" => parsed.options = Grouping::Precedence.inside(parsed.options),
                "--elide" => parsed.options = Chains::Elide.inside(parsed.options),
                "-e" => match args.next() {
                    Some(expr) => parsed.expr = Some(expr),
                    None => return Err("`-e` requires an expression".to_string()),
                },
                other => return Err(format!("unknown argument `{}`", other)),
            }
        }
        Ok(parsed)
    }
}

/// Runs a line in the session, printing the output or the error report. Returns false if the line
/// failed.
fn run_line(session: &mut Session, input: &str) -> bool {
    match session.execute(input) {
        Ok(Some(output)) => {
            println!("{}", output);
            true
        },
        Ok(None) => true,
        Err(err) => {
            err.report_to_stderr("input", input);
            false
        },
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!("usage: exparse [--infix | --prefix | --postfix] [--grouped] [--elide] [-e <expr>]");
            return ExitCode::from(2);
        },
    };
    let mut session = Session::new(args.notation, args.options);

    if let Some(expr) = args.expr {
        return if run_line(&mut session, &expr) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    if !io::stdin().is_terminal() {
        // every line is run, even after one fails
        let mut ok = true;
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => ok &= run_line(&mut session, &line),
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            }
        }
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
        let input = rl.readline("> ")?;
        if input.trim().is_empty() {
            return Ok(());
        }

        rl.add_history_entry(&input)?;

        run_line(session, &input);
        Ok(())
    }

    loop {
        if let Err(err) = process_line(&mut rl, &mut session) {
            match err {
                ReadlineError::Eof | ReadlineError::Interrupted => (),
                _ => eprintln!("{}", err),
            }
            break;
        }
    }

    ExitCode::SUCCESS
}
