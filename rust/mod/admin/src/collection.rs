//! Generic list/detail/filter page state.
//!
//! Every list page (approvals, employees, guests, users, vehicles) is a
//! `CollectionState<T>` stored at `{page}/page`. Load, filter and selection
//! rules live here once; pages differ only in their [`Record`] impl and
//! [`SelectionPolicy`].

use std::collections::BTreeSet;

use crate::page::Page;

/// An entity shown on a collection page.
pub trait Record: Clone + Send + Sync + 'static {
    /// Page this record type is listed on.
    const PAGE: Page;

    /// Display flags this page supports.
    const FLAGS: &'static [FlagFilter] = &[];

    fn record_id(&self) -> &str;

    /// Fields the text search looks at. Missing optional fields are skipped.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record passes `flag`. Only called for flags in `FLAGS`.
    fn passes(&self, _flag: FlagFilter) -> bool {
        true
    }
}

/// Boolean display filter ANDed with the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlagFilter {
    /// Guests whose visit is confirmed complete.
    VerifiedOnly,
}

impl FlagFilter {
    pub fn key(&self) -> &'static str {
        match self {
            FlagFilter::VerifiedOnly => "verified-only",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "verified-only" => Some(FlagFilter::VerifiedOnly),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlagFilter::VerifiedOnly => "Show verified guests only",
        }
    }
}

/// What a page selects when nothing (or nothing valid) is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    AutoSelectFirst,
    /// The user must pick an item.
    Manual,
}

/// Why a list or detail pane has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// There is nothing to show at all.
    NoItems,
    /// Items exist but the query or flags hide all of them.
    NoMatches,
    /// Items are listed but none is selected.
    NothingSelected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T: Record> {
    /// Source collection, exactly as last fetched.
    pub items: Vec<T>,
    pub query: String,
    pub flags: BTreeSet<FlagFilter>,
    /// Indices into `items` passing the query and flags, in source order.
    visible: Vec<usize>,
    pub selected: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub policy: SelectionPolicy,
    /// Identifies one mount of the page; a load started under another
    /// mount must not land here.
    pub mount: u64,
}

impl<T: Record> CollectionState<T> {
    /// Fresh state for a page that has just been mounted and is loading.
    pub fn mounted(mount: u64) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            flags: BTreeSet::new(),
            visible: Vec::new(),
            selected: None,
            loading: true,
            error: None,
            policy: T::PAGE.policy(),
            mount,
        }
    }

    /// `{page}/page`
    pub fn path() -> String {
        T::PAGE.state_path()
    }

    // ====================================================================
    // Load lifecycle
    // ====================================================================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the source collection with freshly fetched items.
    ///
    /// The current selection survives if its id is still present; otherwise
    /// the policy default applies.
    pub fn finish_load(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.refilter();
        let keep = self
            .selected
            .as_deref()
            .is_some_and(|id| self.items.iter().any(|i| i.record_id() == id));
        if !keep {
            self.selected = self.default_selection();
        }
    }

    /// Record a failed load. Replaces any earlier error.
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    // ====================================================================
    // Filtering
    // ====================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Turn a flag on or off. Flags the page does not support are ignored
    /// and reported with `false`.
    pub fn set_flag(&mut self, flag: FlagFilter, on: bool) -> bool {
        if !T::FLAGS.contains(&flag) {
            return false;
        }
        if on {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
        self.refilter();
        true
    }

    pub fn flag_on(&self, flag: FlagFilter) -> bool {
        self.flags.contains(&flag)
    }

    /// Items passing the current query and flags, in source order.
    pub fn filtered(&self) -> Vec<&T> {
        self.visible.iter().filter_map(|&i| self.items.get(i)).collect()
    }

    fn refilter(&mut self) {
        let query = self.query.trim().to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.flags.iter().all(|f| item.passes(*f)))
            .filter(|(_, item)| matches_query(*item, &query))
            .map(|(i, _)| i)
            .collect();
    }

    // ====================================================================
    // Selection
    // ====================================================================

    /// Select the item with `id`. Unknown ids are refused with `false`.
    pub fn select(&mut self, id: &str) -> bool {
        if self.items.iter().any(|i| i.record_id() == id) {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_item(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.items.iter().find(|i| i.record_id() == id)
    }

    /// Drop one item locally. A removed selection falls back to the policy.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|i| i.record_id() == id)?;
        let removed = self.items.remove(index);
        self.refilter();
        if self.selected.as_deref() == Some(id) {
            self.selected = self.default_selection();
        }
        Some(removed)
    }

    fn default_selection(&self) -> Option<String> {
        match self.policy {
            SelectionPolicy::AutoSelectFirst => {
                self.items.first().map(|i| i.record_id().to_string())
            }
            SelectionPolicy::Manual => None,
        }
    }

    // ====================================================================
    // Empty states
    // ====================================================================

    /// Why the list pane is empty, if it is.
    pub fn list_empty_state(&self) -> Option<EmptyState> {
        if self.items.is_empty() {
            Some(EmptyState::NoItems)
        } else if self.visible.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        }
    }

    /// Why the detail pane is empty, if it is.
    pub fn detail_empty_state(&self) -> Option<EmptyState> {
        if self.selected_item().is_some() {
            None
        } else if self.visible.is_empty() {
            Some(EmptyState::NoItems)
        } else {
            Some(EmptyState::NothingSelected)
        }
    }
}

/// Case-insensitive substring match; a blank query matches everything.
fn matches_query<T: Record>(item: &T, lowered_query: &str) -> bool {
    lowered_query.is_empty()
        || item
            .search_fields()
            .iter()
            .any(|f| f.to_lowercase().contains(lowered_query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: &'static str,
        name: &'static str,
        tag: Option<&'static str>,
        verified: bool,
    }

    impl Record for Item {
        const PAGE: Page = Page::Guests;
        const FLAGS: &'static [FlagFilter] = &[FlagFilter::VerifiedOnly];

        fn record_id(&self) -> &str {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name];
            fields.extend(self.tag);
            fields
        }

        fn passes(&self, flag: FlagFilter) -> bool {
            match flag {
                FlagFilter::VerifiedOnly => self.verified,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Pending(&'static str);

    impl Record for Pending {
        const PAGE: Page = Page::Approvals;

        fn record_id(&self) -> &str {
            self.0
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.0]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: "1", name: "Ali Raza", tag: Some("Guard"), verified: true },
            Item { id: "2", name: "Sara Malik", tag: None, verified: false },
            Item { id: "3", name: "Bilal Guardezi", tag: Some("Driver"), verified: false },
        ]
    }

    fn loaded() -> CollectionState<Item> {
        let mut state = CollectionState::mounted(1);
        state.finish_load(items());
        state
    }

    fn ids<T: Record>(state: &CollectionState<T>) -> Vec<&str> {
        state.filtered().iter().map(|i| i.record_id()).collect()
    }

    // ========================================================================
    // Load lifecycle
    // ========================================================================

    #[test]
    fn mounted_state_is_loading() {
        let state: CollectionState<Item> = CollectionState::mounted(7);
        assert!(state.loading);
        assert_eq!(state.mount, 7);
        assert_eq!(state.policy, SelectionPolicy::Manual);
        assert_eq!(CollectionState::<Item>::path(), "guests/page");
    }

    #[test]
    fn fail_load_sets_one_error_and_stops_loading() {
        let mut state: CollectionState<Item> = CollectionState::mounted(1);
        state.fail_load("first");
        state.begin_load();
        state.fail_load("second");
        assert_eq!(state.error.as_deref(), Some("second"));
        assert!(!state.loading);
    }

    #[test]
    fn successful_load_clears_error() {
        let mut state: CollectionState<Item> = CollectionState::mounted(1);
        state.fail_load("boom");
        state.finish_load(items());
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    #[test]
    fn empty_query_returns_everything_in_order() {
        let mut state = loaded();
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
        state.set_query("   ");
        assert_eq!(ids(&state), vec!["1", "2", "3"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let mut state = loaded();
        state.set_query("GUARD");
        assert_eq!(ids(&state), vec!["1", "3"]);
        state.set_query("  malik ");
        assert_eq!(ids(&state), vec!["2"]);
        state.set_query("xyz");
        assert!(ids(&state).is_empty());
    }

    #[test]
    fn filtering_is_idempotent_and_non_destructive() {
        let mut state = loaded();
        state.set_query("guard");
        let first = ids(&state).into_iter().map(String::from).collect::<Vec<_>>();
        state.set_query("guard");
        assert_eq!(ids(&state), first);
        assert_eq!(state.items.len(), 3);
    }

    #[test]
    fn flags_and_query_combine_with_and() {
        let mut state = loaded();
        assert!(state.set_flag(FlagFilter::VerifiedOnly, true));
        assert_eq!(ids(&state), vec!["1"]);

        state.set_query("guard");
        assert_eq!(ids(&state), vec!["1"]);

        state.set_query("sara");
        assert!(ids(&state).is_empty());

        state.set_flag(FlagFilter::VerifiedOnly, false);
        assert_eq!(ids(&state), vec!["2"]);
    }

    #[test]
    fn unsupported_flag_is_ignored() {
        let mut state: CollectionState<Pending> = CollectionState::mounted(1);
        state.finish_load(vec![Pending("a")]);
        assert!(!state.set_flag(FlagFilter::VerifiedOnly, true));
        assert!(!state.flag_on(FlagFilter::VerifiedOnly));
        assert_eq!(ids(&state), vec!["a"]);
    }

    #[test]
    fn reload_refilters_with_current_query() {
        let mut state = loaded();
        state.set_query("driver");
        state.finish_load(vec![Item { id: "9", name: "Zed", tag: Some("Driver"), verified: true }]);
        assert_eq!(ids(&state), vec!["9"]);
    }

    // ========================================================================
    // Selection
    // ========================================================================

    #[test]
    fn manual_policy_selects_nothing_on_load() {
        let state = loaded();
        assert_eq!(state.selected, None);
        assert_eq!(state.detail_empty_state(), Some(EmptyState::NothingSelected));
    }

    #[test]
    fn auto_policy_selects_first_on_load() {
        let mut state: CollectionState<Pending> = CollectionState::mounted(1);
        state.finish_load(vec![Pending("a"), Pending("b")]);
        assert_eq!(state.selected.as_deref(), Some("a"));

        state.finish_load(vec![]);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn reload_keeps_selection_still_present() {
        let mut state: CollectionState<Pending> = CollectionState::mounted(1);
        state.finish_load(vec![Pending("a"), Pending("b")]);
        assert!(state.select("b"));
        state.finish_load(vec![Pending("a"), Pending("b"), Pending("c")]);
        assert_eq!(state.selected.as_deref(), Some("b"));

        // Selected item gone: fall back to the new first item.
        state.finish_load(vec![Pending("c"), Pending("a")]);
        assert_eq!(state.selected.as_deref(), Some("c"));
    }

    #[test]
    fn select_only_known_ids() {
        let mut state = loaded();
        assert!(state.select("2"));
        assert_eq!(state.selected_item().map(|i| i.name), Some("Sara Malik"));
        assert!(!state.select("nope"));
        assert_eq!(state.selected.as_deref(), Some("2"));
        state.clear_selection();
        assert_eq!(state.selected_item(), None);
    }

    #[test]
    fn remove_selected_falls_back_per_policy() {
        let mut state: CollectionState<Pending> = CollectionState::mounted(1);
        state.finish_load(vec![Pending("a"), Pending("b")]);
        assert_eq!(state.remove("a"), Some(Pending("a")));
        assert_eq!(state.selected.as_deref(), Some("b"));
        state.remove("b");
        assert_eq!(state.selected, None);
        assert_eq!(state.remove("zzz"), None);

        let mut manual = loaded();
        manual.select("1");
        manual.remove("1");
        assert_eq!(manual.selected, None);
    }

    #[test]
    fn remove_unselected_keeps_selection() {
        let mut state: CollectionState<Pending> = CollectionState::mounted(1);
        state.finish_load(vec![Pending("a"), Pending("b")]);
        state.remove("b");
        assert_eq!(state.selected.as_deref(), Some("a"));
        assert_eq!(ids(&state), vec!["a"]);
    }

    // ========================================================================
    // Empty states
    // ========================================================================

    #[test]
    fn empty_states_distinguish_no_items_from_no_matches() {
        let mut state: CollectionState<Item> = CollectionState::mounted(1);
        state.finish_load(vec![]);
        assert_eq!(state.list_empty_state(), Some(EmptyState::NoItems));
        assert_eq!(state.detail_empty_state(), Some(EmptyState::NoItems));

        let mut state = loaded();
        assert_eq!(state.list_empty_state(), None);
        state.set_query("xyz");
        assert_eq!(state.list_empty_state(), Some(EmptyState::NoMatches));
        assert_eq!(state.detail_empty_state(), Some(EmptyState::NoItems));

        state.set_query("");
        state.select("3");
        assert_eq!(state.detail_empty_state(), None);
    }

    #[test]
    fn flag_keys() {
        assert_eq!(FlagFilter::from_key("verified-only"), Some(FlagFilter::VerifiedOnly));
        assert_eq!(FlagFilter::VerifiedOnly.key(), "verified-only");
        assert_eq!(FlagFilter::from_key("other"), None);
    }
}
