//! Dropdown controller
//!
//! A two-state machine, `Hidden` and `Visible`, with the selection as a
//! sub-state of `Visible`. The controller owns the rendered suggestion list
//! and the selection index. It never changes the query; committing an entry
//! hands it back to the coordinator, which re-applies it as typed text.
//!
//! ```text
//!            show(non-empty, active query)
//!   Hidden ─────────────────────────────────► Visible { selection: None }
//!     ▲                                          │  move_selection(±1)
//!     │   dismiss() / commit(i) / show(empty)    │  (clamped to -1..=len-1)
//!     └──────────────────────────────────────────┘
//! ```

use super::intent::Intent;
use super::suggest::SuggestionEntry;

/// Dropdown state
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    entries: Vec<SuggestionEntry>,
    visible: bool,
    selection: Option<usize>,
    revision: u64,
}

impl Dropdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list for the query of `revision`
    ///
    /// A list computed for an older revision than the one last shown is
    /// dropped, so a stale list can never overwrite a newer one. The selection
    /// always resets. The dropdown becomes visible only for a non-empty list
    /// and an active query.
    pub fn show(
        &mut self,
        revision: u64,
        query_active: bool,
        entries: Vec<SuggestionEntry>,
    ) -> Vec<Intent> {
        if revision < self.revision {
            log::trace!(
                "dropping stale suggestions for revision {revision} (current {})",
                self.revision
            );
            return Vec::new();
        }

        self.revision = revision;
        self.selection = None;
        self.visible = query_active && !entries.is_empty();
        self.entries = entries;

        vec![
            Intent::RenderDropdown(self.entries.clone()),
            Intent::DropdownVisible(self.visible),
        ]
    }

    /// Move the selection by `delta`, clamped to `-1..=len-1`
    ///
    /// There is no wraparound: moving past either end leaves the selection
    /// where it is. Hidden or empty dropdowns ignore the call.
    pub fn move_selection(&mut self, delta: isize) -> Option<Intent> {
        if !self.visible || self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() as isize - 1;
        let current = self.selection.map_or(-1, |index| index as isize);
        let next = current.saturating_add(delta).clamp(-1, last);

        self.selection = usize::try_from(next).ok();
        log::trace!("dropdown selection {current} -> {next}");
        Some(Intent::Highlight(self.selection))
    }

    /// Take the entry at `index` and hide the dropdown
    ///
    /// Returns `None`, changing nothing, when the dropdown is hidden or the
    /// index does not point into the rendered list.
    pub fn commit(&mut self, index: usize) -> Option<SuggestionEntry> {
        if !self.visible {
            return None;
        }
        let entry = self.entries.get(index)?.clone();
        self.visible = false;
        self.selection = None;
        Some(entry)
    }

    /// Commit the currently selected entry, if any
    pub fn commit_selected(&mut self) -> Option<SuggestionEntry> {
        self.selection.and_then(|index| self.commit(index))
    }

    /// Hide the dropdown unconditionally
    pub fn dismiss(&mut self) -> Vec<Intent> {
        let was_selected = self.selection.take().is_some();
        self.visible = false;

        let mut intents = Vec::new();
        if was_selected {
            intents.push(Intent::Highlight(None));
        }
        intents.push(Intent::DropdownVisible(false));
        intents
    }

    /// Show the last rendered list again (input regained focus)
    pub fn reopen(&mut self, query_active: bool) -> Vec<Intent> {
        if self.visible || !query_active || self.entries.is_empty() {
            return Vec::new();
        }
        self.visible = true;
        self.selection = None;
        vec![Intent::Highlight(None), Intent::DropdownVisible(true)]
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Selected position, `None` when nothing is selected
    #[must_use]
    pub const fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// Rendered entries (kept while hidden so focus can reopen them)
    #[must_use]
    pub fn entries(&self) -> &[SuggestionEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemId;

    fn entries(names: &[&str]) -> Vec<SuggestionEntry> {
        names
            .iter()
            .enumerate()
            .map(|(position, name)| SuggestionEntry {
                position,
                item: ItemId(position),
                name: (*name).to_string(),
                price: String::new(),
            })
            .collect()
    }

    fn visible_dropdown(names: &[&str]) -> Dropdown {
        let mut dropdown = Dropdown::new();
        dropdown.show(1, true, entries(names));
        dropdown
    }

    #[test]
    fn test_show_non_empty_becomes_visible() {
        let mut dropdown = Dropdown::new();
        let intents = dropdown.show(1, true, entries(&["A", "B"]));

        assert!(dropdown.is_visible());
        assert_eq!(dropdown.selection(), None);
        assert_eq!(intents.last(), Some(&Intent::DropdownVisible(true)));
    }

    #[test]
    fn test_show_empty_list_hides() {
        let mut dropdown = visible_dropdown(&["A"]);
        let intents = dropdown.show(2, true, Vec::new());

        assert!(!dropdown.is_visible());
        assert_eq!(intents.last(), Some(&Intent::DropdownVisible(false)));
    }

    #[test]
    fn test_show_inactive_query_hides_regardless_of_entries() {
        let mut dropdown = Dropdown::new();
        dropdown.show(1, false, entries(&["A", "B"]));
        assert!(!dropdown.is_visible());
    }

    #[test]
    fn test_selection_sequence_clamps_at_end() {
        let mut dropdown = visible_dropdown(&["A", "B", "C"]);

        let mut seen = vec![dropdown.selection()];
        for _ in 0..4 {
            dropdown.move_selection(1);
            seen.push(dropdown.selection());
        }

        assert_eq!(seen, vec![None, Some(0), Some(1), Some(2), Some(2)]);
    }

    #[test]
    fn test_selection_never_below_none() {
        let mut dropdown = visible_dropdown(&["A", "B"]);
        dropdown.move_selection(1);

        for _ in 0..5 {
            dropdown.move_selection(-1);
            assert!(dropdown.selection().is_none() || dropdown.selection() == Some(0));
        }
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_large_delta_is_clamped() {
        let mut dropdown = visible_dropdown(&["A", "B", "C"]);
        dropdown.move_selection(isize::MAX);
        assert_eq!(dropdown.selection(), Some(2));
        dropdown.move_selection(isize::MIN);
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_move_on_hidden_is_noop() {
        let mut dropdown = Dropdown::new();
        assert_eq!(dropdown.move_selection(1), None);
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_replacing_list_resets_selection() {
        let mut dropdown = visible_dropdown(&["A", "B", "C"]);
        dropdown.move_selection(1);
        dropdown.move_selection(1);

        dropdown.show(2, true, entries(&["X"]));
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_commit_returns_entry_and_hides() {
        let mut dropdown = visible_dropdown(&["A", "B"]);
        let entry = dropdown.commit(1).unwrap();

        assert_eq!(entry.name, "B");
        assert!(!dropdown.is_visible());
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_commit_out_of_range_is_noop() {
        let mut dropdown = visible_dropdown(&["A"]);
        assert!(dropdown.commit(3).is_none());
        assert!(dropdown.is_visible());
    }

    #[test]
    fn test_commit_on_hidden_is_noop() {
        let mut dropdown = visible_dropdown(&["A"]);
        dropdown.dismiss();
        assert!(dropdown.commit(0).is_none());
    }

    #[test]
    fn test_commit_selected_without_selection() {
        let mut dropdown = visible_dropdown(&["A"]);
        assert!(dropdown.commit_selected().is_none());
        assert!(dropdown.is_visible());
    }

    #[test]
    fn test_stale_revision_is_dropped() {
        let mut dropdown = Dropdown::new();
        dropdown.show(5, true, entries(&["new"]));

        let intents = dropdown.show(4, true, entries(&["old", "older"]));
        assert!(intents.is_empty());
        assert_eq!(dropdown.entries()[0].name, "new");
        assert_eq!(dropdown.revision(), 5);
    }

    #[test]
    fn test_dismiss_resets_selection() {
        let mut dropdown = visible_dropdown(&["A", "B"]);
        dropdown.move_selection(1);

        let intents = dropdown.dismiss();
        assert_eq!(
            intents,
            vec![Intent::Highlight(None), Intent::DropdownVisible(false)]
        );
        assert_eq!(dropdown.selection(), None);
    }

    #[test]
    fn test_reopen_after_dismiss() {
        let mut dropdown = visible_dropdown(&["A"]);
        dropdown.dismiss();

        assert!(dropdown.reopen(false).is_empty());
        assert!(!dropdown.is_visible());

        dropdown.reopen(true);
        assert!(dropdown.is_visible());
        assert_eq!(dropdown.selection(), None);
    }
}
