use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info, Level};

use booktest::config::{Overrides, Settings, TokenAlphabet};
use booktest::library::{build_library, build_randomized_library, parse_library};
use booktest::selection::CombinationRanker;
use booktest::types::RankingParams;

/// Find the best books to perform an amazing magic trick.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// How many books to choose
    #[arg(short, long, value_name = "NUM")]
    books: Option<usize>,

    /// How many chapters per book
    #[arg(short, long, value_name = "NUM")]
    chapters: Option<usize>,

    /// List the best NUM combinations
    #[arg(short, long, value_name = "NUM")]
    list: Option<usize>,

    /// Randomize book data
    #[arg(short, long)]
    randomize: bool,

    /// Chapter tokens
    #[arg(short, long, num_args = 2, value_names = ["LEFT", "RIGHT"])]
    tokens: Option<Vec<String>>,

    /// Settings file (JSON); created with the defaults when missing
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the ranked result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Suppress informative messages
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode, output extra info
    #[arg(short, long)]
    verbose: bool,

    /// Library file to read books info from ('-' or absent reads stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.quiet {
        Level::WARN
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let mut settings = Settings::default();
    if let Some(path) = &args.config {
        settings = Settings::load_or_init(path)?;
        debug!("using config file: {}", path.display());
    }
    settings.apply(&Overrides {
        books: args.books,
        chapters: args.chapters,
        list: args.list,
        randomize: args.randomize,
        tokens: args.tokens.clone(),
        file: args.file.clone(),
    });
    debug!(?settings);

    let alphabet = TokenAlphabet::parse(&settings.tokens)?;

    let text = match settings.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            debug!("reading from '{}'", path.display());
            fs::read_to_string(path)?
        }
        _ => {
            debug!("reading from <stdin>");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let records = parse_library(&text);
    let books = if settings.randomize {
        build_randomized_library(&records, settings.chapters, &alphabet, &mut rand::thread_rng())
    } else {
        build_library(&records, settings.chapters)?
    };

    for book in &books {
        info!("Book {:>2}: {}, '{}'", book.id, book.chapters, book.title);
    }

    let params = RankingParams {
        subset_size: settings.books,
        chapter_count: settings.chapters,
        list_size: settings.list,
    };
    let result = CombinationRanker::default().rank(&books, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    info!(
        "Best {} out of {} combinations of {} books in {} with {} chapters:",
        result.ranking.list_size,
        result.ranking.combinations_considered,
        result.ranking.subset_size,
        result.ranking.books_considered,
        result.ranking.chapter_count,
    );

    for combination in &result.combinations {
        if combination.score == 0 {
            info!("Dupes: none (Total 0) NO DUPLICATES, hooray! :D");
        } else {
            info!(
                "Dupes: {:?} at chapters {:?} (Total {})",
                combination.why.reps, combination.why.chapters, combination.score,
            );
        }
        for book in &combination.books {
            info!("    {:>2} - {}", book.id, book.title);
        }
    }

    match result.ranking.best_score {
        Some(0) => info!("You've found the perfect books, CONGRATULATIONS!"),
        Some(1) => info!("Almost there!"),
        Some(_) => info!("Meh, keep searching..."),
        None => {}
    }

    Ok(())
}
