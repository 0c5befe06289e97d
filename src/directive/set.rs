//! Directive Set Module
//!
//! Insertion-ordered storage of the directives accumulated for one response.

use indexmap::IndexMap;

use crate::directive::{Directive, DirectiveKind, DirectiveValue};

// == Directive Set ==
/// Directives accumulated for a single outbound response.
///
/// Order is first-touch order: updating an entry keeps its position,
/// removing it and setting it again moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveSet {
    entries: IndexMap<Directive, DirectiveValue>,
}

impl DirectiveSet {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Set Flag ==
    /// Marks a boolean directive as present.
    ///
    /// Returns `false` and leaves the set untouched for valued directives.
    pub fn set_flag(&mut self, directive: Directive) -> bool {
        if directive.kind() != DirectiveKind::Boolean {
            return false;
        }
        self.entries.insert(directive, DirectiveValue::Present);
        true
    }

    // == Set Seconds ==
    /// Stores whole seconds for a valued directive.
    ///
    /// Returns `false` and leaves the set untouched for boolean directives.
    pub fn set_seconds(&mut self, directive: Directive, seconds: u64) -> bool {
        if directive.kind() != DirectiveKind::Seconds {
            return false;
        }
        self.entries.insert(directive, DirectiveValue::Seconds(seconds));
        true
    }

    // == Remove ==
    /// Removes a directive, returning its previous value if any.
    pub fn remove(&mut self, directive: Directive) -> Option<DirectiveValue> {
        self.entries.shift_remove(&directive)
    }

    // == Get ==
    pub fn get(&self, directive: Directive) -> Option<DirectiveValue> {
        self.entries.get(&directive).copied()
    }

    pub fn contains(&self, directive: Directive) -> bool {
        self.entries.contains_key(&directive)
    }

    /// Seconds stored for a valued directive.
    pub fn seconds(&self, directive: Directive) -> Option<u64> {
        match self.get(directive) {
            Some(DirectiveValue::Seconds(seconds)) => Some(seconds),
            _ => None,
        }
    }

    // == Iteration ==
    /// Entries in render order.
    pub fn iter(&self) -> impl Iterator<Item = (Directive, DirectiveValue)> + '_ {
        self.entries.iter().map(|(d, v)| (*d, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Clear ==
    /// Drops every entry so the set can be reused for another response.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = DirectiveSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_set_flag_rejects_valued_directive() {
        let mut set = DirectiveSet::new();
        assert!(!set.set_flag(Directive::MaxAge));
        assert!(set.is_empty());
    }

    #[test]
    fn test_set_seconds_rejects_boolean_directive() {
        let mut set = DirectiveSet::new();
        assert!(!set.set_seconds(Directive::Public, 60));
        assert!(set.is_empty());
    }

    #[test]
    fn test_update_keeps_position() {
        let mut set = DirectiveSet::new();
        set.set_seconds(Directive::MaxAge, 60);
        set.set_flag(Directive::Public);
        set.set_seconds(Directive::MaxAge, 30);

        let order: Vec<_> = set.iter().collect();
        assert_eq!(
            order,
            vec![
                (Directive::MaxAge, DirectiveValue::Seconds(30)),
                (Directive::Public, DirectiveValue::Present),
            ]
        );
    }

    #[test]
    fn test_remove_then_set_moves_to_end() {
        let mut set = DirectiveSet::new();
        set.set_flag(Directive::NoCache);
        set.set_flag(Directive::Public);
        assert_eq!(set.remove(Directive::NoCache), Some(DirectiveValue::Present));
        set.set_flag(Directive::NoCache);

        let order: Vec<_> = set.iter().map(|(d, _)| d).collect();
        assert_eq!(order, vec![Directive::Public, Directive::NoCache]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set = DirectiveSet::new();
        set.set_flag(Directive::Public);
        assert_eq!(set.remove(Directive::Private), None);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_seconds_accessor() {
        let mut set = DirectiveSet::new();
        set.set_seconds(Directive::SMaxAge, 30);
        set.set_flag(Directive::Public);
        assert_eq!(set.seconds(Directive::SMaxAge), Some(30));
        assert_eq!(set.seconds(Directive::Public), None);
        assert_eq!(set.seconds(Directive::MaxAge), None);
    }

    #[test]
    fn test_clear() {
        let mut set = DirectiveSet::new();
        set.set_flag(Directive::Public);
        set.set_seconds(Directive::MaxAge, 1);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set, DirectiveSet::new());
    }
}
