//! Note CRUD command handlers.

use anyhow::{Context, Result};
use std::io::{self, Read};

use super::{StoreLocation, close_store, truncate_str};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{GetArgs, ListArgs, RemoveArgs, SaveArgs, TitlesArgs};
use crate::domain::sanitize;
use crate::store::{NoteStore, SaveOutcome};

pub fn handle_save(args: &SaveArgs, location: &StoreLocation) -> Result<()> {
    let content = match &args.content {
        Some(content) => content.clone(),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read note content from stdin")?;
            buf
        }
    };

    let mut store = location.open()?;
    let outcome = store
        .save(&args.title, &content)
        .with_context(|| format!("failed to save note '{}'", args.title))?;
    close_store(store)?;

    match outcome {
        SaveOutcome::Created => println!("Saved: {}", sanitize(&args.title)),
        SaveOutcome::Updated => println!("Updated: {}", sanitize(&args.title)),
    }
    Ok(())
}

pub fn handle_get(args: &GetArgs, location: &StoreLocation) -> Result<()> {
    let store = location.open()?;
    let note = store
        .get(&args.title)
        .with_context(|| format!("failed to get note '{}'", args.title))?;
    close_store(store)?;

    match args.format {
        OutputFormat::Human => {
            if note.content().ends_with('\n') {
                print!("{}", note.content());
            } else {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_titles(args: &TitlesArgs, location: &StoreLocation) -> Result<()> {
    let store = location.open()?;
    let titles = store.list_titles().context("failed to list note titles")?;
    close_store(store)?;

    match args.format {
        OutputFormat::Human => {
            if titles.is_empty() {
                println!("No notes found.");
            }
            for title in &titles {
                println!("{}", title);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(titles))?);
        }
    }
    Ok(())
}

pub fn handle_list(args: &ListArgs, location: &StoreLocation) -> Result<()> {
    let store = location.open()?;
    let notes = store.list_all().context("failed to list notes")?;
    close_store(store)?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
                return Ok(());
            }

            println!("{:<40}  {:<40}  {:>16}", "Title", "Content", "Modified");
            println!("{:<40}  {:<40}  {:>16}", "-".repeat(40), "-".repeat(40), "-".repeat(16));
            for note in &notes {
                let preview = note.content().lines().next().unwrap_or("");
                println!(
                    "{:<40}  {:<40}  {:>16}",
                    truncate_str(note.title(), 40),
                    truncate_str(preview, 40),
                    note.modified().format("%Y-%m-%d %H:%M").to_string()
                );
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.into_iter().map(NoteListing::from).collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

pub fn handle_remove(args: &RemoveArgs, location: &StoreLocation) -> Result<()> {
    let mut store = location.open()?;
    store
        .delete(&args.title)
        .with_context(|| format!("failed to delete note '{}'", args.title))?;
    close_store(store)?;

    println!("Deleted: {}", sanitize(&args.title));
    Ok(())
}
