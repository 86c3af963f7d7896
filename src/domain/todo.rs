use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoItem {
    pub id: u32,
    pub text: String,
    pub completed: bool,
}

/// Per-session to-do list shown on the dashboard. Items keep insertion
/// order; ids are unique within the list's lifetime.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(texts: &[(&str, bool)]) -> Self {
        let mut list = Self::new();
        for (text, completed) in texts {
            if let Some(id) = list.add(text) {
                if *completed {
                    list.toggle(id);
                }
            }
        }
        list
    }

    /// Appends a new item and returns its id. Whitespace-only input is
    /// rejected, matching the entry field's guard.
    pub fn add(&mut self, text: &str) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flips the completed flag of the matching item. Returns false and
    /// leaves the list untouched when the id is absent.
    pub fn toggle(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_unique_ascending_ids() {
        let mut list = TodoList::new();
        let a = list.add("Appeler le laboratoire").unwrap();
        let b = list.add("Vérifier les stocks").unwrap();

        assert!(b > a);
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.items()[0].text, "Appeler le laboratoire");
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TodoList::new();
        assert!(list.add("   ").is_none());
        assert!(list.add("").is_none());
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut list = TodoList::new();
        list.add("  Préparer le dossier  ").unwrap();
        assert_eq!(list.items()[0].text, "Préparer le dossier");
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut list = TodoList::new();
        let id = list.add("Vérifier les stocks de matériel").unwrap();

        assert!(list.toggle(id));
        assert!(list.items()[0].completed);
        assert!(list.toggle(id));
        assert!(!list.items()[0].completed);
    }

    #[test]
    fn test_toggle_absent_id_is_a_noop() {
        let mut list = TodoList::new();
        list.add("Une tâche").unwrap();
        let before = list.items().to_vec();

        assert!(!list.toggle(999));
        assert_eq!(list.items(), &before[..]);
    }

    #[test]
    fn test_remaining_counts_open_items() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        list.add("b").unwrap();
        list.add("c").unwrap();
        list.toggle(a);

        assert_eq!(list.remaining(), 2);
    }
}
