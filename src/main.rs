//! Word Bag - CLI
//!
//! Dictionary-backed word puzzle helper. `get` finds words coverable by a
//! bag of letters, `query` and `filter` find words fitting a positional
//! pattern, `add` grows the dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use wordbag::{
    commands::{run_add, run_filter, run_get, run_query},
    core::Word,
    output::{print_scored_words, print_usage_hint, print_words},
    wordlists::load_dir,
};

#[derive(Parser)]
#[command(
    name = "wordbag",
    about = "Word puzzle helper: match letter bags and positional patterns against a dictionary",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of word list files, one word per line
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "WORDBAG_DIR",
        default_value = "words"
    )]
    words_dir: PathBuf,

    /// Shortest word kept in the candidate pool
    #[arg(long, global = true, env = "WORDBAG_MIN_LEN", default_value_t = 3)]
    min_len: usize,

    /// Longest word kept in the candidate pool
    #[arg(long, global = true, env = "WORDBAG_MAX_LEN", default_value_t = 12)]
    max_len: usize,

    /// Show difficulty scores alongside each word
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Append words to the ad-hoc dictionary file
    Add {
        /// Words to append verbatim
        words: Vec<String>,
    },

    /// List words coverable by a bag of letters, hardest first
    Get {
        /// Letter bag, optionally with a wildcard budget: `2/aeprst`
        letters: Vec<String>,
    },

    /// List words fitting a positional pattern, `.` marks unknowns
    Query {
        /// Pattern of literals and `.` placeholders; a leading `/` is ignored
        pattern: String,

        /// Extra letters ruled out at placeholder positions
        excluded: Option<String>,
    },

    /// Like `query`, but candidates come from standard input
    Filter {
        /// Pattern of literals and `.` placeholders; a leading `/` is ignored
        pattern: String,

        /// Extra letters ruled out at placeholder positions
        excluded: Option<String>,
    },

    /// Bare invocation, dispatched by the first token's shape
    #[command(external_subcommand)]
    Bare(Vec<String>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Every command loads the pool up front: a bad word directory should
    // fail fast, even for `add` and `filter`.
    let pool = load_dir(&cli.words_dir, cli.min_len, cli.max_len).with_context(|| {
        format!(
            "could not read word lists from '{}'",
            cli.words_dir.display()
        )
    })?;

    if cli.verbose {
        eprintln!("loaded {} candidate words", pool.len());
    }

    match cli.command {
        None => emit(&pool, cli.verbose),
        Some(Commands::Add { words }) => run_add_command(&cli.words_dir, &words)?,
        Some(Commands::Get { letters }) => run_get_command(&pool, &letters, cli.verbose),
        Some(Commands::Query { pattern, excluded }) => {
            emit(run_query(&pool, &pattern, excluded.as_deref()), cli.verbose);
        }
        Some(Commands::Filter { pattern, excluded }) => {
            filter_stdin(
                &pattern,
                excluded.as_deref(),
                cli.min_len,
                cli.max_len,
                cli.verbose,
            )?;
        }
        Some(Commands::Bare(tokens)) => {
            run_bare_command(
                &pool,
                &tokens,
                &cli.words_dir,
                cli.min_len,
                cli.max_len,
                cli.verbose,
            )?;
        }
    }

    Ok(())
}

/// Dispatch invocations whose first token is not an exact subcommand
/// name. Command keywords spelled in other cases re-run the named
/// command. Otherwise a leading `/` means a pattern query and anything
/// else is a letter bag.
fn run_bare_command(
    pool: &[Word],
    tokens: &[String],
    words_dir: &Path,
    min_len: usize,
    max_len: usize,
    verbose: bool,
) -> Result<()> {
    // All-blank arguments mean "show me everything", same as no arguments.
    if tokens.iter().all(|token| token.trim().is_empty()) {
        emit(pool, verbose);
        return Ok(());
    }

    // Clap matches subcommand names exactly, so spellings like `Add` or
    // `QUERY` land here and must behave like their lowercase forms.
    match tokens[0].to_lowercase().as_str() {
        "add" => run_add_command(words_dir, &tokens[1..])?,
        "get" => run_get_command(pool, &tokens[1..], verbose),
        "query" => run_query_command(pool, &tokens[1..], verbose),
        "filter" => run_filter_command(&tokens[1..], min_len, max_len, verbose)?,
        _ if tokens[0].starts_with('/') => {
            let excluded = tokens.get(1).map(String::as_str);
            emit(run_query(pool, &tokens[0], excluded), verbose);
        }
        _ => run_get_command(pool, tokens, verbose),
    }

    Ok(())
}

fn run_add_command(words_dir: &Path, words: &[String]) -> Result<()> {
    run_add(words_dir, words)
        .with_context(|| format!("could not append to '{}'", words_dir.display()))
}

fn run_get_command(pool: &[Word], tokens: &[String], verbose: bool) {
    let [spec] = tokens else {
        print_usage_hint("just one letter bag per query: `get [<wildcards>/]<letters>`");
        return;
    };

    match run_get(pool, spec) {
        Ok(matches) => emit(matches, verbose),
        Err(hint) => print_usage_hint(&hint),
    }
}

fn run_query_command(pool: &[Word], tokens: &[String], verbose: bool) {
    let [pattern, rest @ ..] = tokens else {
        print_usage_hint("query needs a pattern: `query <pattern> [<excluded>]`");
        return;
    };

    emit(run_query(pool, pattern, rest.first().map(String::as_str)), verbose);
}

fn run_filter_command(
    tokens: &[String],
    min_len: usize,
    max_len: usize,
    verbose: bool,
) -> Result<()> {
    let [pattern, rest @ ..] = tokens else {
        print_usage_hint("filter needs a pattern: `filter <pattern> [<excluded>]`");
        return Ok(());
    };

    filter_stdin(
        pattern,
        rest.first().map(String::as_str),
        min_len,
        max_len,
        verbose,
    )
}

fn filter_stdin(
    pattern: &str,
    excluded: Option<&str>,
    min_len: usize,
    max_len: usize,
    verbose: bool,
) -> Result<()> {
    let matches = run_filter(io::stdin().lock(), pattern, excluded, min_len, max_len)
        .context("could not read candidates from standard input")?;
    emit(&matches, verbose);
    Ok(())
}

fn emit<'a, I>(words: I, verbose: bool)
where
    I: IntoIterator<Item = &'a Word>,
{
    if verbose {
        print_scored_words(words);
    } else {
        print_words(words);
    }
}
