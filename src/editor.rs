//! Generic collection editor state
//!
//! One `CollectionEditor<T>` backs each management panel: an ordered list of
//! entries, a draft record for the creation dialog, and the dialog visibility
//! flag. All transitions are synchronous and infallible; the type is plain data
//! and gets wrapped in a signal by the owning view.

/// Identifier assigned to an entry when it enters the collection.
/// Issued by a per-editor monotonic counter, never reused.
pub type EntryId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub id: EntryId,
    pub record: T,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEditor<T> {
    entries: Vec<Entry<T>>,
    draft: T,
    form_open: bool,
    editing: Option<EntryId>,
    next_id: EntryId,
}

impl<T: Clone + Default> Default for CollectionEditor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> CollectionEditor<T> {
    pub fn new() -> Self {
        CollectionEditor {
            entries: Vec::new(),
            draft: T::default(),
            form_open: false,
            editing: None,
            next_id: 1,
        }
    }

    /// Editor pre-populated with example records. Seeds draw ids from the
    /// same counter as later submissions.
    pub fn seeded(records: Vec<T>) -> Self {
        let mut editor = Self::new();
        for record in records {
            let id = editor.issue_id();
            editor.entries.push(Entry { id, record });
        }
        editor
    }

    fn issue_id(&mut self) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn editing(&self) -> Option<EntryId> {
        self.editing
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Show the creation dialog. The draft keeps whatever was left in it;
    /// it is only reset by a successful submit.
    pub fn open(&mut self) {
        self.form_open = true;
    }

    /// Hide the dialog without touching the collection. Partial draft input
    /// is kept so reopening resumes where the user left off.
    pub fn cancel(&mut self) {
        self.form_open = false;
        self.editing = None;
    }

    /// Mutate the draft in place, one field (possibly nested) at a time.
    pub fn update_draft(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.draft);
    }

    /// Commit the draft. Appends a new entry with a fresh id, or replaces the
    /// record of the entry under edit (id and position kept). Closes the
    /// dialog and resets the draft to its default shape.
    pub fn submit(&mut self) -> EntryId {
        let record = std::mem::take(&mut self.draft);
        let id = match self.editing.take() {
            Some(id) if self.contains(id) => {
                if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
                    entry.record = record;
                }
                id
            }
            // Entry vanished mid-edit (or plain creation): append.
            _ => {
                let id = self.issue_id();
                self.entries.push(Entry { id, record });
                id
            }
        };
        self.form_open = false;
        id
    }

    /// Load an existing entry into the draft and open the dialog for it.
    /// Returns false (no state change) for unknown ids.
    pub fn start_edit(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.entries.iter().find(|e| e.id == id) else {
            return false;
        };
        self.draft = entry.record.clone();
        self.editing = Some(id);
        self.form_open = true;
        true
    }

    /// Delete the entry with the given id, keeping the order of the rest.
    /// Returns false for unknown ids.
    pub fn remove(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        if self.editing == Some(id) {
            // The row under edit is gone; the open dialog now submits as new.
            self.editing = None;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdminUser, LinkField, Resource};

    #[test]
    fn test_submit_appends_exactly_one_per_call() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        for i in 0..5 {
            assert_eq!(editor.len(), i);
            editor.submit();
        }
        assert_eq!(editor.len(), 5);
    }

    #[test]
    fn test_submitted_ids_are_pairwise_distinct() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        let mut ids: Vec<EntryId> = (0..20).map(|_| editor.submit()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_submit_closes_form_and_resets_draft() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        editor.open();
        editor.update_draft(|d| d.name = "Someone".to_string());
        editor.submit();
        assert!(!editor.form_open());
        assert_eq!(*editor.draft(), AdminUser::default());
    }

    #[test]
    fn test_cancel_keeps_collection_and_partial_draft() {
        let mut editor = CollectionEditor::seeded(crate::models::seed_admins());
        let before = editor.len();
        editor.open();
        editor.update_draft(|d| d.email = "half@done.example".to_string());
        editor.cancel();
        assert_eq!(editor.len(), before);
        assert!(!editor.form_open());
        assert_eq!(editor.draft().email, "half@done.example");
    }

    #[test]
    fn test_update_draft_is_idempotent_for_same_assignment() {
        let mut once = CollectionEditor::<Resource>::new();
        once.update_draft(|d| d.logo = "logo.png".to_string());
        let mut twice = CollectionEditor::<Resource>::new();
        twice.update_draft(|d| d.logo = "logo.png".to_string());
        twice.update_draft(|d| d.logo = "logo.png".to_string());
        assert_eq!(once.draft(), twice.draft());
    }

    #[test]
    fn test_single_submit_scenario() {
        let mut editor = CollectionEditor::<Resource>::new();
        assert!(editor.is_empty());
        editor.update_draft(|d| d.name = "Alpha".to_string());
        let id = editor.submit();
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.entries()[0].id, id);
        assert_eq!(editor.entries()[0].record.name, "Alpha");
        assert!(editor.draft().name.is_empty());
    }

    #[test]
    fn test_nested_draft_fields_survive_submit() {
        let mut editor = CollectionEditor::<Resource>::new();
        editor.open();
        editor.update_draft(|d| d.documents.checked = true);
        editor.update_draft(|d| d.documents.url = "http://x".to_string());
        editor.submit();
        assert_eq!(
            editor.entries()[0].record.documents,
            LinkField { checked: true, url: "http://x".to_string() }
        );
    }

    #[test]
    fn test_seeded_editor_issues_fresh_ids() {
        let mut editor = CollectionEditor::seeded(crate::models::seed_admins());
        let seed_ids: Vec<EntryId> = editor.entries().iter().map(|e| e.id).collect();
        let new_id = editor.submit();
        assert!(!seed_ids.contains(&new_id));
        assert!(seed_ids.iter().all(|&id| new_id > id));
    }

    #[test]
    fn test_remove_drops_only_the_given_id() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        editor.update_draft(|d| d.name = "a".to_string());
        let a = editor.submit();
        editor.update_draft(|d| d.name = "b".to_string());
        let b = editor.submit();
        editor.update_draft(|d| d.name = "c".to_string());
        let c = editor.submit();

        assert!(editor.remove(b));
        let names: Vec<&str> =
            editor.entries().iter().map(|e| e.record.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
        assert!(editor.contains(a));
        assert!(editor.contains(c));
        assert!(!editor.remove(b));
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut editor = CollectionEditor::seeded(crate::models::seed_admins());
        let before = editor.clone();
        assert!(!editor.remove(999));
        assert_eq!(editor, before);
    }

    #[test]
    fn test_edit_replaces_in_place() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        editor.update_draft(|d| d.name = "first".to_string());
        let first = editor.submit();
        editor.update_draft(|d| d.name = "second".to_string());
        editor.submit();

        assert!(editor.start_edit(first));
        assert!(editor.form_open());
        assert_eq!(editor.draft().name, "first");
        editor.update_draft(|d| d.name = "renamed".to_string());
        let id = editor.submit();

        assert_eq!(id, first);
        assert_eq!(editor.len(), 2);
        // Position and id kept.
        assert_eq!(editor.entries()[0].id, first);
        assert_eq!(editor.entries()[0].record.name, "renamed");
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn test_start_edit_unknown_id_changes_nothing() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        let before = editor.clone();
        assert!(!editor.start_edit(7));
        assert_eq!(editor, before);
    }

    #[test]
    fn test_removing_entry_under_edit_falls_back_to_append() {
        let mut editor = CollectionEditor::<AdminUser>::new();
        editor.update_draft(|d| d.name = "victim".to_string());
        let id = editor.submit();
        editor.start_edit(id);
        editor.remove(id);
        assert_eq!(editor.editing(), None);

        editor.update_draft(|d| d.name = "survivor".to_string());
        let new_id = editor.submit();
        assert_ne!(new_id, id);
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.entries()[0].record.name, "survivor");
    }

    #[test]
    fn test_cancel_after_start_edit_clears_edit_marker() {
        let mut editor = CollectionEditor::seeded(crate::models::seed_admins());
        let id = editor.entries()[0].id;
        editor.start_edit(id);
        editor.cancel();
        assert_eq!(editor.editing(), None);
        // A later submit is a plain append, not a replace.
        editor.submit();
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_open_does_not_reset_draft() {
        let mut editor = CollectionEditor::<Resource>::new();
        editor.open();
        editor.update_draft(|d| d.name = "leftover".to_string());
        editor.cancel();
        editor.open();
        assert_eq!(editor.draft().name, "leftover");
    }
}
