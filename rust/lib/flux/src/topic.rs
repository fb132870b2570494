use std::sync::{PoisonError, RwLock};

/// Check whether a concrete topic matches a subscription/handler pattern.
///
/// - `+` matches exactly one level
/// - `#` matches every remaining level, including none; only valid last
///
/// ```ignore
/// assert!(matches("employees/+", "employees/load"));
/// assert!(matches("employees/#", "employees/form/submit"));
/// assert!(!matches("employees/+", "employees/form/submit"));
/// ```
pub fn matches(pattern: &str, topic: &str) -> bool {
    let mut pattern_levels = pattern.split('/');
    let mut topic_levels = topic.split('/');
    loop {
        match (pattern_levels.next(), topic_levels.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => {}
            (Some(p), Some(t)) if p == t => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// A pattern is valid when `#` only appears as the final level.
pub fn is_valid_pattern(pattern: &str) -> bool {
    let levels: Vec<&str> = pattern.split('/').collect();
    levels
        .iter()
        .enumerate()
        .all(|(i, level)| *level != "#" || i == levels.len() - 1)
}

/// Ordered table of `(pattern, value)` entries.
///
/// Registration order is dispatch order. Tables in the dashboard hold a few
/// dozen handlers, so a linear scan is all the structure this needs.
pub struct PatternTable<T> {
    entries: RwLock<Vec<(String, T)>>,
}

impl<T: Clone> PatternTable<T> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a value under a pattern. Invalid patterns are ignored.
    pub fn insert(&self, pattern: &str, value: T) -> bool {
        if !is_valid_pattern(pattern) {
            tracing::warn!(pattern, "ignoring pattern with non-trailing '#'");
            return false;
        }
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.push((pattern.to_string(), value));
        true
    }

    /// All values whose pattern matches `topic`, in registration order.
    pub fn matching(&self, topic: &str) -> Vec<T> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .filter(|(pattern, _)| matches(pattern, topic))
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Remove values registered under exactly `pattern` that satisfy `predicate`.
    pub fn remove<F>(&self, pattern: &str, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(p, value)| !(p == pattern && predicate(value)));
        entries.len() < before
    }

    /// Check if anything is registered under the exact pattern string.
    pub fn has_pattern(&self, pattern: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.iter().any(|(p, _)| p == pattern)
    }
}

impl<T: Clone> Default for PatternTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // matches
    // ========================================================================

    #[test]
    fn exact_match() {
        assert!(matches("auth/state", "auth/state"));
        assert!(!matches("auth/state", "auth/status"));
        assert!(!matches("auth/state", "auth"));
        assert!(!matches("auth", "auth/state"));
    }

    #[test]
    fn single_level_wildcard() {
        assert!(matches("+/page", "employees/page"));
        assert!(matches("employees/+", "employees/load"));
        assert!(!matches("employees/+", "employees/form/submit"));
        assert!(!matches("employees/+", "employees"));
    }

    #[test]
    fn multi_level_wildcard() {
        assert!(matches("employees/#", "employees/form/submit"));
        assert!(matches("employees/#", "employees/load"));
        assert!(matches("employees/#", "employees"));
        assert!(matches("#", "anything/at/all"));
        assert!(!matches("employees/#", "guests/load"));
    }

    #[test]
    fn pattern_validity() {
        assert!(is_valid_pattern("a/b/#"));
        assert!(is_valid_pattern("#"));
        assert!(is_valid_pattern("+/b"));
        assert!(!is_valid_pattern("a/#/b"));
    }

    // ========================================================================
    // PatternTable
    // ========================================================================

    #[test]
    fn table_returns_matches_in_registration_order() {
        let table = PatternTable::new();
        table.insert("#", 1);
        table.insert("auth/state", 2);
        table.insert("auth/+", 3);
        table.insert("app/route", 4);

        assert_eq!(table.matching("auth/state"), vec![1, 2, 3]);
        assert_eq!(table.matching("app/route"), vec![1, 4]);
    }

    #[test]
    fn table_rejects_invalid_pattern() {
        let table = PatternTable::new();
        assert!(!table.insert("a/#/b", 1));
        assert!(table.matching("a/x/b").is_empty());
    }

    #[test]
    fn table_remove_by_predicate() {
        let table = PatternTable::new();
        table.insert("auth/state", 1);
        table.insert("auth/state", 2);
        table.insert("auth/+", 1);

        assert!(table.remove("auth/state", |v| *v == 1));
        assert_eq!(table.matching("auth/state"), vec![2, 1]);
        assert!(!table.remove("auth/state", |v| *v == 9));
    }

    #[test]
    fn table_has_pattern_is_exact() {
        let table = PatternTable::new();
        table.insert("auth/#", ());
        assert!(table.has_pattern("auth/#"));
        assert!(!table.has_pattern("auth/login"));
    }
}
