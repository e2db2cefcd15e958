//! Session history

use std::collections::VecDeque;

/// Navigation history
#[derive(Debug)]
pub struct History {
    /// Back stack
    back: VecDeque<String>,
    /// Forward stack
    forward: Vec<String>,
    /// Current path
    current: Option<String>,
    /// Max back-stack size
    max_size: usize,
}

impl History {
    /// Create new history
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Create history keeping at most `max_size` back entries
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            back: VecDeque::new(),
            forward: Vec::new(),
            current: None,
            max_size,
        }
    }

    /// Push a new entry
    pub fn push(&mut self, path: &str) {
        if let Some(current) = self.current.take() {
            self.back.push_back(current);

            while self.back.len() > self.max_size {
                self.back.pop_front();
            }
        }

        self.forward.clear();
        self.current = Some(path.to_string());
    }

    /// Replace the current entry without touching the stacks
    pub fn replace(&mut self, path: &str) {
        self.current = Some(path.to_string());
    }

    /// Go back
    pub fn go_back(&mut self) -> Option<&str> {
        let prev = self.back.pop_back()?;

        if let Some(current) = self.current.take() {
            self.forward.push(current);
        }

        self.current = Some(prev);
        self.current.as_deref()
    }

    /// Go forward
    pub fn go_forward(&mut self) -> Option<&str> {
        let next = self.forward.pop()?;

        if let Some(current) = self.current.take() {
            self.back.push_back(current);
        }

        self.current = Some(next);
        self.current.as_deref()
    }

    /// Can go back
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Can go forward
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Current path
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_forward() {
        let mut history = History::new();
        history.push("/managescreens");
        history.push("/datasources");
        history.push("/downloadcode");

        assert_eq!(history.go_back(), Some("/datasources"));
        assert_eq!(history.go_back(), Some("/managescreens"));
        assert!(!history.can_go_back());
        assert_eq!(history.go_forward(), Some("/datasources"));
        assert!(history.can_go_forward());
    }

    #[test]
    fn test_push_clears_forward() {
        let mut history = History::new();
        history.push("/a");
        history.push("/b");
        history.go_back();
        history.push("/c");

        assert!(!history.can_go_forward());
        assert_eq!(history.current(), Some("/c"));
    }

    #[test]
    fn test_capacity() {
        let mut history = History::with_capacity(2);
        for path in ["/1", "/2", "/3", "/4"] {
            history.push(path);
        }
        assert_eq!(history.go_back(), Some("/3"));
        assert_eq!(history.go_back(), Some("/2"));
        assert_eq!(history.go_back(), None);
    }

    #[test]
    fn test_replace() {
        let mut history = History::new();
        history.push("/");
        history.replace("/managescreens");
        assert_eq!(history.current(), Some("/managescreens"));
        assert!(!history.can_go_back());
    }
}
