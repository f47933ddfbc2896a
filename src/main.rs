mod display;
mod matcher;
mod scanner;
mod session;
mod types;

use clap::Parser;
use colored::Colorize;
use session::Session;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Free-text query to match against filenames
    query: Option<String>,

    /// Data root to scan (defaults to ./dummy_data, then ./sample_data)
    #[arg(long, short = 'b')]
    root: Option<PathBuf>,

    /// Maximum number of results per query
    #[arg(long, short = 'k', default_value_t = 5)]
    limit: usize,

    /// List all scanned files instead of searching
    #[arg(long, short = 'l')]
    list: bool,

    /// Read queries line-by-line from stdin
    #[arg(long, short = 'i')]
    interactive: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let root = args.root.unwrap_or_else(scanner::default_root);
    let session = Session::open(&root);

    println!(
        "{}",
        format!(
            "Scanned {} files under {}",
            session.records().len(),
            session.root().display()
        )
        .green()
    );

    if args.list {
        display::print_records(session.records());
        return;
    }

    if args.interactive {
        run_interactive(&session, args.limit);
        return;
    }

    match args.query {
        Some(query) => display::print_results(&session.search(&query, args.limit)),
        None => {
            println!("Pass a query, or use --list / --interactive.");
        }
    }
}

/// Chat-style loop: one query per stdin line, gated by the trigger-keyword
/// heuristic before any retrieval is attempted.
fn run_interactive(session: &Session, limit: usize) {
    println!("{}", "Enter queries (Ctrl-D to exit):".cyan());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        if matcher::looks_like_search(query) {
            display::print_results(&session.search(query, limit));
        } else {
            println!(
                "{}",
                "Doesn't look like a document request; try words like 'find' or 'report'."
                    .yellow()
            );
        }
    }
}
