use std::env;
use std::path::PathBuf;

use guidesearch_core::config::{expand_path, Config};
use guidesearch_core::error::Error;
use guidesearch_core::traits::GuideSource;
use guidesearch_core::types::Query;
use guidesearch_local::{DirSource, JsonFileSource, LocalSearch};
use tracing_subscriber::EnvFilter;

fn parse_args() -> (String, Vec<String>) {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    if args.is_empty() {
        eprintln!("Usage: {} <list|search> [args...]", prog);
        eprintln!("  {} list [corpus]", prog);
        eprintln!("  {} search \"<query>\" [--category <c>]... [corpus]", prog);
        std::process::exit(1);
    }
    let cmd = args.remove(0);
    (cmd, args)
}

// Positional args plus repeated --category flags; first positional is the
// query, second (if any) overrides the corpus path.
fn split_search_args(args: Vec<String>) -> (Option<String>, Vec<String>, Option<String>) {
    let mut positionals = Vec::new();
    let mut categories = Vec::new();
    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        if arg == "--category" {
            match it.next() {
                Some(c) => categories.push(c),
                None => {
                    eprintln!("--category needs a value");
                    std::process::exit(1);
                }
            }
        } else {
            positionals.push(arg);
        }
    }
    let mut positionals = positionals.into_iter();
    (positionals.next(), categories, positionals.next())
}

fn open_corpus(config: &Config, positional: Option<String>) -> (PathBuf, Box<dyn GuideSource>) {
    let path = positional.unwrap_or_else(|| {
        config
            .get("corpus.path")
            .unwrap_or_else(|_| "corpus.json".to_string())
    });
    let path = expand_path(&path);
    let source: Box<dyn GuideSource> = if path.is_dir() {
        Box::new(DirSource::new(path.clone()))
    } else {
        Box::new(JsonFileSource::new(path.clone()))
    };
    (path, source)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let (cmd, args) = parse_args();
    match cmd.as_str() {
        "list" => {
            let (path, source) = open_corpus(&config, args.into_iter().next());
            let mut local = LocalSearch::new();
            local.activate(source.as_ref());
            match local.guides() {
                None => {
                    return Err(Error::SourceUnavailable(path.display().to_string()).into());
                }
                Some(guides) => {
                    println!("📚 {} guides collected from {}", guides.len(), path.display());
                    for g in guides {
                        println!("  - [{}] {}  {}", g.kind, g.title, g.url);
                    }
                }
            }
        }
        "search" => {
            let (query_text, categories, corpus_arg) = split_search_args(args);
            let query_text = query_text.unwrap_or_else(|| {
                eprintln!("Usage: guidesearch search \"<query>\" [--category <c>]... [corpus]");
                std::process::exit(1)
            });
            let (path, source) = open_corpus(&config, corpus_arg);
            let mut local = LocalSearch::new();
            local.activate(source.as_ref());
            let query = Query::new(query_text.as_str()).with_categories(categories);
            match local.search_result(&query) {
                None => {
                    // Unavailable is not "zero hits": a real form controller
                    // would fall through to the backend search here.
                    eprintln!(
                        "Local search unavailable (no corpus at {})",
                        path.display()
                    );
                    std::process::exit(2);
                }
                Some(result) => {
                    println!(
                        "🔍 Found {} hits for \"{}\"",
                        result.total, query_text
                    );
                    for (i, g) in result.hits.iter().enumerate() {
                        println!("\n  {}. {}  {}", i + 1, g.title, g.url);
                        if !g.summary.is_empty() {
                            println!("     📝 {}", g.summary);
                        }
                        println!("     categories: {}  origin: {}", g.categories, g.origin);
                    }
                }
            }
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            std::process::exit(1);
        }
    }
    Ok(())
}
