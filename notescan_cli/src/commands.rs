use anyhow::{anyhow, Result};

use notescan_core::ai::gate::BackendGate;
use notescan_core::notes::dto::Note;
use notescan_core::notes::handler::NoteService;
use notescan_core::notes::helpers::{format_list_entry, format_share_message};
use notescan_core::notes::storage::NoteStorage;
use notescan_core::summary::dto::{LengthTier, SummaryResult};

use crate::input::read_input;

/// Print title and summary for `source` without touching the note database.
pub async fn preview(gate: &BackendGate, source: &str, tier: LengthTier) -> Result<SummaryResult> {
    let text = read_input(source).await?;
    let result = gate.summarize_document(&text, tier).await?;
    println!("{}\n\n{}", result.title, result.summary);
    Ok(result)
}

pub async fn scan(service: &NoteService, source: &str, tier: LengthTier) -> Result<Note> {
    let text = read_input(source).await?;
    let note = service.scan(&text, tier).await?;
    println!("✅ Saved note {}\n", note.id);
    println!("{}", format_share_message(&note));
    Ok(note)
}

pub fn list(storage: &NoteStorage) -> Result<usize> {
    let notes = storage.list()?;
    if notes.is_empty() {
        println!("No notes yet. Use --scan to summarize a document.");
        return Ok(0);
    }

    println!("📒 {} note(s):\n", notes.len());
    for note in &notes {
        println!("{}", format_list_entry(note));
    }
    Ok(notes.len())
}

pub fn show(storage: &NoteStorage, id: &str) -> Result<()> {
    let note = storage
        .get(id)?
        .ok_or_else(|| anyhow!("No note with id {}", id))?;
    println!("{}", format_share_message(&note));
    Ok(())
}

pub fn delete(storage: &NoteStorage, id: &str) -> Result<()> {
    if !storage.remove(id)? {
        return Err(anyhow!("No note with id {}", id));
    }
    println!("🗑️ Deleted note {}", id);
    Ok(())
}
