use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use enquiry_cli::answer::{Answer, entry_response};
use enquiry_cli::interactive::Conversation;
use enquiry_directory::{configured_path, load_directory_file};
use enquiry_map::{Matcher, Responder};
use enquiry_model::Directory;

use crate::cli::{AskArgs, DirectoryArgs, InteractiveArgs, OutputFormatArg, SuggestArgs};
use crate::render::{directory_table, suggestion_table};

/// Directory chosen for this run: the built-in one or a loaded file.
pub enum LoadedDirectory {
    Reference(&'static Directory),
    File(Directory),
}

impl LoadedDirectory {
    pub fn directory(&self) -> &Directory {
        match self {
            Self::Reference(directory) => directory,
            Self::File(directory) => directory,
        }
    }
}

pub fn load_configured_directory(explicit: Option<&Path>) -> Result<LoadedDirectory> {
    match configured_path(explicit) {
        Some(path) => {
            let directory = load_directory_file(&path)
                .with_context(|| format!("load directory {}", path.display()))?;
            Ok(LoadedDirectory::File(directory))
        }
        None => {
            let directory = enquiry_directory::load();
            info!(entries = directory.len(), "using built-in directory");
            Ok(LoadedDirectory::Reference(directory))
        }
    }
}

fn responder(seed: Option<u64>) -> Responder {
    match seed {
        Some(seed) => Responder::seeded(seed),
        None => Responder::from_entropy(),
    }
}

/// Answers one question; returns whether an entry matched.
pub fn run_ask(args: &AskArgs, directory: &Directory) -> Result<bool> {
    let query = args.query.join(" ");
    let span = info_span!("ask", query = %query);
    let _guard = span.enter();

    let answer = Answer::new(
        query,
        directory,
        &Matcher::default(),
        &mut responder(args.seed),
    );
    match args.format {
        OutputFormatArg::Text => {
            println!("{}", answer.response);
            if let Some(summary) = answer.match_summary() {
                println!("{summary}");
            }
            if answer.outcome.has_suggestions() {
                println!();
                println!("Suggestions:");
                println!("{}", suggestion_table(&answer.scored_suggestions()));
            }
        }
        OutputFormatArg::Json => {
            let json =
                serde_json::to_string_pretty(&answer.report()).context("serialize answer")?;
            println!("{json}");
        }
    }
    Ok(answer.found())
}

pub fn run_suggest(args: &SuggestArgs, directory: &Directory) -> Result<()> {
    let query = args.query.join(" ");
    let scored = Matcher::default().suggest_scored(&query, directory, args.limit);
    info!(query = %query, count = scored.len(), "suggestions ranked");
    if scored.is_empty() {
        println!("No suggestions.");
    } else {
        println!("{}", suggestion_table(&scored));
    }
    Ok(())
}

pub fn run_directory(args: &DirectoryArgs, directory: &Directory) -> Result<()> {
    match &args.entry {
        Some(name) => println!(
            "{}",
            entry_response(directory, name, &mut responder(args.seed))?
        ),
        None => println!("{}", directory_table(directory)),
    }
    Ok(())
}

pub fn run_interactive(args: &InteractiveArgs, directory: &Directory) -> Result<()> {
    let mut conversation = Conversation::new(directory, responder(args.seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    conversation
        .run(stdin.lock(), &mut stdout)
        .context("interactive session")?;
    Ok(())
}
