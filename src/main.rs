// lispc: Lisp-style prefix calls to C-style call expressions

use std::fmt;
use std::fs;
use std::io::{self, Read, Stdout, Write};
use std::path::PathBuf;

use crossterm::{
    cursor::Show,
    execute,
    style::Stylize,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lispc::compiler::{codegen, CompileError, Compiler};
use lispc::ui::App;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for lex/parse failures
const EXIT_COMPILE_ERROR: i32 = 1;
/// Exit status for bad arguments, unreadable input and terminal failures
const EXIT_USAGE: i32 = 2;

/// Where the source text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    File(PathBuf),
    Stdin,
    Expr(String),
}

/// What to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compile,
    Tokens,
    Ast,
    Tui,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Input,
    mode: Mode,
    stats: bool,
    verbose: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(CliOptions),
    Help,
    Version,
}

fn print_usage(program_name: &str) {
    eprintln!("lispc {} - Lisp-style calls to C-style calls", VERSION);
    eprintln!();
    eprintln!("Usage: {} [OPTIONS] [FILE]", program_name);
    eprintln!();
    eprintln!("Reads FILE, or standard input when FILE is '-' or omitted.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -e, --expr <SOURCE>  Compile SOURCE instead of reading input");
    eprintln!("      --tokens         Print tokens and exit");
    eprintln!("      --ast            Print AST and exit");
    eprintln!("      --stats          Print program statistics after the output");
    eprintln!("      --tui            Open the interactive inspector");
    eprintln!("  -v, --verbose        Report progress on stderr");
    eprintln!("  -h, --help           Show this help");
    eprintln!("  -V, --version        Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} -e '(add (subtract 5 1) 2)'   # add(subtract(5, 1), 2)", program_name);
    eprintln!("  {} --tui program.lisp", program_name);
}

fn set_input(new: Input, input: &mut Option<Input>) -> Result<(), String> {
    if input.is_some() {
        return Err("more than one input given".to_string());
    }
    *input = Some(new);
    Ok(())
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut input: Option<Input> = None;
    let mut mode = Mode::Compile;
    let mut stats = false;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-e" | "--expr" => {
                let source = iter
                    .next()
                    .ok_or_else(|| format!("'{}' requires an argument", arg))?;
                set_input(Input::Expr(source.clone()), &mut input)?;
            }
            "--tokens" => mode = Mode::Tokens,
            "--ast" => mode = Mode::Ast,
            "--tui" => mode = Mode::Tui,
            "--stats" => stats = true,
            "-v" | "--verbose" => verbose = true,
            "-" => set_input(Input::Stdin, &mut input)?,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option '{}'", flag));
            }
            path => set_input(Input::File(PathBuf::from(path)), &mut input)?,
        }
    }

    Ok(Command::Run(CliOptions {
        input: input.unwrap_or(Input::Stdin),
        mode,
        stats,
        verbose,
    }))
}

fn read_source(input: &Input) -> io::Result<String> {
    match input {
        Input::File(path) => fs::read_to_string(path),
        Input::Expr(source) => Ok(source.clone()),
        Input::Stdin => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn describe(input: &Input) -> String {
    match input {
        Input::File(path) => path.display().to_string(),
        Input::Stdin => "<stdin>".to_string(),
        Input::Expr(_) => "<expr>".to_string(),
    }
}

/// Write `error: msg`, with a coloured prefix when `color` is set.
fn write_error(out: &mut impl Write, msg: impl fmt::Display, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{} {}", "error:".red().bold(), msg)
    } else {
        writeln!(out, "error: {}", msg)
    }
}

/// Print `error: msg` on stderr, coloured when stderr is a terminal.
fn report_error(msg: impl fmt::Display) {
    let mut stderr = io::stderr();
    let color = stderr.is_tty();
    let _ = write_error(&mut stderr, msg, color);
}

/// Write a compile error followed by the offending source line and a caret.
fn write_compile_error(
    out: &mut impl Write,
    err: &CompileError,
    source: &str,
    origin: &str,
    color: bool,
) -> io::Result<()> {
    write_error(out, err, color)?;

    let Some(loc) = err.location() else {
        return Ok(());
    };
    let Some(line) = source.lines().nth(loc.line.saturating_sub(1)) else {
        return Ok(());
    };

    let gutter = loc.line.to_string().len();
    writeln!(out, "{:>w$}--> {}:{}:{}", "", origin, loc.line, loc.column, w = gutter)?;
    writeln!(out, "{:>w$} |", "", w = gutter)?;
    writeln!(out, "{} | {}", loc.line, line)?;
    writeln!(
        out,
        "{:>w$} | {}^",
        "",
        caret_padding(line, loc.column),
        w = gutter
    )
}

/// Blanks covering the characters before `column` (1-based). Tabs stay tabs
/// so the caret lines up under the echoed line.
fn caret_padding(line: &str, column: usize) -> String {
    line.chars()
        .take(column.saturating_sub(1))
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect()
}

fn report_compile_error(err: &CompileError, source: &str, origin: &str) {
    let mut stderr = io::stderr();
    let color = stderr.is_tty();
    let _ = write_compile_error(&mut stderr, err, source, origin, color);
}

/// Raw mode plus alternate screen. Raw mode is undone if the rest of the
/// setup fails.
fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let setup = execute!(io::stdout(), EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if setup.is_err() {
        let _ = restore_terminal();
    }
    setup
}

/// Leave the alternate screen and raw mode, attempting both steps even if
/// one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    raw
}

/// Exit status once the inspector has closed.
fn tui_exit_status(error: Option<&CompileError>, run: &io::Result<()>) -> i32 {
    match (run, error) {
        (Err(_), _) => EXIT_USAGE,
        (Ok(()), Some(_)) => EXIT_COMPILE_ERROR,
        (Ok(()), None) => 0,
    }
}

fn run_tui(source: String, origin: &str) -> io::Result<i32> {
    let mut terminal = enter_terminal()?;

    let mut app = App::new(source);
    let res = app.run(&mut terminal);

    restore_terminal()?;

    if let Err(err) = &res {
        report_error(format!("inspector failed: {}", err));
    }
    if let Some(err) = &app.inspection.error {
        report_compile_error(err, &app.source_code, origin);
    }

    Ok(tui_exit_status(app.inspection.error.as_ref(), &res))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("lispc");

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage(program_name);
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("lispc {}", VERSION);
            return Ok(());
        }
        Err(msg) => {
            report_error(msg);
            eprintln!();
            print_usage(program_name);
            std::process::exit(EXIT_USAGE);
        }
    };

    let origin = describe(&options.input);
    let source = match read_source(&options.input) {
        Ok(source) => source,
        Err(err) => {
            report_error(format!("failed to read {}: {}", origin, err));
            std::process::exit(EXIT_USAGE);
        }
    };

    if options.mode == Mode::Tui {
        let status = match run_tui(source, &origin) {
            Ok(status) => status,
            Err(err) => {
                report_error(format!("terminal error: {}", err));
                EXIT_USAGE
            }
        };
        std::process::exit(status);
    }

    if options.verbose {
        eprintln!("Compiling {}...", origin);
    }

    let compilation = match Compiler::new().compile(&source) {
        Ok(compilation) => compilation,
        Err(err) => {
            report_compile_error(&err, &source, &origin);
            std::process::exit(EXIT_COMPILE_ERROR);
        }
    };

    if options.verbose {
        eprintln!(
            "Compiled successfully. {} tokens, {} top-level forms.",
            compilation.tokens.len(),
            compilation.program.len()
        );
    }

    match options.mode {
        Mode::Tokens => {
            for token in &compilation.tokens {
                println!("{} {}", token.kind, token.value);
            }
        }
        Mode::Ast => {
            for line in codegen::dump_tree(&compilation.program) {
                println!("{}", line);
            }
        }
        Mode::Compile | Mode::Tui => {
            for line in codegen::render_lines(&compilation.program) {
                println!("{}", line);
            }
        }
    }

    if options.stats {
        println!("{}", compilation.stats());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lispc::parser::parser::ParseError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_to_stdin() {
        let command = parse_args(&[]).unwrap();
        assert_eq!(
            command,
            Command::Run(CliOptions {
                input: Input::Stdin,
                mode: Mode::Compile,
                stats: false,
                verbose: false,
            })
        );
    }

    #[test]
    fn test_expr_and_flags() {
        let command = parse_args(&args(&["-e", "(add 1 2)", "--ast", "--stats", "-v"])).unwrap();
        match command {
            Command::Run(options) => {
                assert_eq!(options.input, Input::Expr("(add 1 2)".to_string()));
                assert_eq!(options.mode, Mode::Ast);
                assert!(options.stats);
                assert!(options.verbose);
            }
            other => panic!("Expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_file_input() {
        let command = parse_args(&args(&["--tui", "prog.lisp"])).unwrap();
        assert!(matches!(
            command,
            Command::Run(CliOptions { input: Input::File(ref p), mode: Mode::Tui, .. })
                if p == &PathBuf::from("prog.lisp")
        ));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["-e"])).is_err());
        assert!(parse_args(&args(&["a.lisp", "b.lisp"])).is_err());
        assert!(parse_args(&args(&["-e", "1", "-"])).is_err());
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Command::Help);
        assert_eq!(parse_args(&args(&["-V"])).unwrap(), Command::Version);
    }

    fn compile_error_text(source: &str) -> String {
        let err = Compiler::new().compile(source).unwrap_err();
        let mut out = Vec::new();
        write_compile_error(&mut out, &err, source, "<expr>", false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compile_error_caret() {
        let text = compile_error_text("(add\n  $)");
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with("error: Lexer error at line 2, column 3"));
        assert_eq!(
            &lines[1..],
            &[" --> <expr>:2:3", "  |", "2 |   $)", "  |   ^"]
        );
    }

    #[test]
    fn test_compile_error_caret_after_tabs() {
        let text = compile_error_text("(add\n\t\t$)");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[3], "2 | \t\t$)");
        assert_eq!(lines[4], "  | \t\t^");
    }

    #[test]
    fn test_compile_error_without_location() {
        let err = CompileError::Parse(ParseError::OutOfTokens {
            expected: "a number or '('",
            after: None,
        });
        let mut out = Vec::new();
        write_compile_error(&mut out, &err, "", "<stdin>", false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: Parse error: ran out of tokens, expected a number or '('\n"
        );
    }

    #[test]
    fn test_tui_exit_status() {
        let broken = App::new("(add 1".to_string());
        let fine = App::new("(add 1 2)".to_string());
        let failed: io::Result<()> = Err(io::Error::other("closed"));

        assert_eq!(tui_exit_status(broken.inspection.error.as_ref(), &Ok(())), EXIT_COMPILE_ERROR);
        assert_eq!(tui_exit_status(fine.inspection.error.as_ref(), &Ok(())), 0);
        assert_eq!(tui_exit_status(fine.inspection.error.as_ref(), &failed), EXIT_USAGE);
        assert_eq!(tui_exit_status(broken.inspection.error.as_ref(), &failed), EXIT_USAGE);
    }
}
