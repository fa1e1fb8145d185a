//! Aggregate-search CLI - privacy-engine web search aggregator.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use aggregate_search::{
    engines::{DuckDuckGo, MetaGer, Mojeek, Startpage},
    Reporter, Search, SearchQuery,
};

const USE_SYNTAX_PATH: &str = "resources/use_syntax.txt";

/// Aggregate search - non-redundant results from privacy-oriented engines
#[derive(Parser)]
#[command(name = "aggregate-search")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print program description, version, and license
    #[arg(long)]
    about: bool,

    /// Print usage and search term syntax examples
    #[arg(long = "use")]
    show_use: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    if cli.about {
        print_about();
        return Ok(());
    }

    if cli.show_use {
        print_usage();
        return Ok(());
    }

    let Some(term) = prompt_for_term()? else {
        println!(" *** User has quit the program ***\n");
        return Ok(());
    };

    // In the unlikely event the user seeks assistance at the prompt.
    if matches!(term.as_str(), "-h" | "-help" | "--help") {
        print_usage();
        return Ok(());
    }

    if term.is_empty() {
        println!("No search term entered.");
        return Ok(());
    }

    run_search(&term).await
}

/// Reads the search term from stdin; `None` when input is cancelled (EOF).
fn prompt_for_term() -> Result<Option<String>> {
    print!("\nEnter search term: ");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    println!();

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_about() {
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!(
        "Non-redundant aggregated results from privacy-oriented search engines\n\
         are returned as URLs, page titles, and page descriptions printed to\n\
         the terminal and to an auto-named text file. User agents for HTTP\n\
         requests are randomized for each engine within optimized sets."
    );
    println!();
    println!("{:<10}{}", "Program:", env!("CARGO_PKG_NAME"));
    println!("{:<10}{}", "Version:", env!("CARGO_PKG_VERSION"));
    println!("{:<10}{}", "License:", env!("CARGO_PKG_LICENSE"));
}

fn print_usage() {
    println!(
        "USAGE: Run {} without arguments, then enter your search term at the prompt.\n",
        env!("CARGO_PKG_NAME")
    );

    let path = Path::new(USE_SYNTAX_PATH);
    match std::fs::read_to_string(path) {
        Ok(syntax) => println!("{syntax}"),
        Err(_) => println!("Sorry, but could not find file: {}", path.display()),
    }
}

async fn run_search(term: &str) -> Result<()> {
    let query = SearchQuery::new(term);
    let sanitized = query.sanitized_term();

    let mut reporter = Reporter::new(&sanitized)?;
    reporter.header(&sanitized)?;

    // Engine order matters: a duplicated URL keeps the content of the
    // engine queried last, so the most trusted engine goes last.
    let mut search = Search::new();
    search.add_engine(DuckDuckGo::new());
    search.add_engine(MetaGer::new());
    search.add_engine(Startpage::new());
    search.add_engine(Mojeek::new());

    reporter.agents(&search.agents())?;

    let report = search.search(&query).await?;

    for tally in &report.tallies {
        reporter.engine_kept(tally.kept, &tally.name, &tally.tag)?;
    }
    reporter.totals(report.combined_total(), report.unique_count())?;

    for tally in &report.tallies {
        let count = report.merged.unique().count_for_tag(&tally.tag);
        reporter.tag_count(count, &tally.name, &tally.tag)?;
    }

    // Brief delay before the terminal scrolls to the last line of results
    // so the user can glimpse the final unique count.
    tokio::time::sleep(Duration::from_secs(2)).await;

    for result in report.merged.unique().items() {
        reporter.result_block(result)?;
    }

    println!("\nResults were written or appended to {}", reporter.file_name());
    reporter.banner(report.unique_count())?;

    Ok(())
}
