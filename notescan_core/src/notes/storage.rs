use anyhow::Result;
use chrono::Utc;
use sled::{Db, Tree};
use uuid::Uuid;

use super::dto::{NewNote, Note};

const TREE_NAME: &str = "notes";

/// Note persistence on a sled tree, one JSON document per note id.
#[derive(Clone)]
pub struct NoteStorage {
    tree: Tree,
}

impl NoteStorage {
    pub fn new(db: &Db) -> sled::Result<Self> {
        let tree = db.open_tree(TREE_NAME)?;
        Ok(Self { tree })
    }

    /// Store a new note, assigning its id and creation time.
    pub fn save(&self, new_note: NewNote) -> Result<Note> {
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: new_note.title,
            summary: new_note.summary,
            full_text: new_note.full_text,
            created_at: Utc::now(),
        };

        let note_json = serde_json::to_vec(&note)?;
        self.tree.insert(note.id.as_bytes(), note_json)?;
        self.tree.flush()?;

        log::info!("Stored note {} ({})", note.id, note.title);
        Ok(note)
    }

    pub fn get(&self, id: &str) -> Result<Option<Note>> {
        if let Some(note_bytes) = self.tree.get(id.as_bytes())? {
            let note: Note = serde_json::from_slice(&note_bytes)?;
            Ok(Some(note))
        } else {
            Ok(None)
        }
    }

    /// All notes, newest first. Entries that fail to decode are logged and skipped.
    pub fn list(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        for entry in self.tree.iter() {
            let (key, value) = entry?;
            match serde_json::from_slice::<Note>(&value) {
                Ok(note) => notes.push(note),
                Err(e) => log::error!(
                    "Failed to deserialize note {}: {}",
                    String::from_utf8_lossy(&key),
                    e
                ),
            }
        }

        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    /// Returns whether a note with `id` existed.
    pub fn remove(&self, id: &str) -> Result<bool> {
        let removed = self.tree.remove(id.as_bytes())?.is_some();
        if removed {
            self.tree.flush()?;
            log::info!("Removed note {}", id);
        }
        Ok(removed)
    }
}
