use clap::Parser;
use lispy_core::{eval, parser, read};
use miette::Result;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal,
};
use std::io::BufRead;
use std::io::BufReader;
use tracing::debug;

/// Lispy - a minimal S-expression arithmetic language
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(about = "Evaluate Lispy expressions", long_about = None)]
struct Args {
    /// Print the concrete syntax tree (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut line_editor = Reedline::create();

    // Persist input history under the user data dir; fall back to a
    // session-only editor when that is unavailable.
    if let Some(data_dir) = dirs::data_dir() {
        let history_dir = data_dir.join("lispy");
        let _ = std::fs::create_dir_all(&history_dir);
        let history_path = history_dir.join("history.txt");
        debug!(path = %history_path.display(), "using history file");
        if let Ok(history) = FileBackedHistory::with_file(1000, history_path) {
            line_editor = line_editor.with_history(Box::new(history));
        }
    }

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("lispy".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

fn interpret_input(input: &str, debug_parse: bool) {
    if input.trim().is_empty() {
        return;
    }

    // Parse
    let root = match parser::parse(input) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    if debug_parse {
        println!("=== Syntax tree ===");
        println!("{root:#?}");
        println!();
    }

    // Build and evaluate; all evaluation failures come back as in-band
    // error values and are printed like any other result.
    let result = eval(read(root));
    println!("{result}");
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level.
    // Default to WARN if not set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&expr, args.debug_parse);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let (mut line_editor, prompt) = setup_reedline();

        println!("Lispy Version 0.0.1");
        println!("Press Ctrl+D to Exit\n");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    interpret_input(buffer.as_ref(), args.debug_parse);
                }
                // Ctrl+C abandons the current line and keeps the loop going.
                Signal::CtrlC => continue,
                Signal::CtrlD => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {e}");
                    return Ok(());
                }
            };

            interpret_input(&line, args.debug_parse);
        }
    }

    Ok(())
}
