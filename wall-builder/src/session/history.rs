use std::collections::VecDeque;
use wallfit::entities::LayoutSnapshot;

/// Undo/redo stacks of layout snapshots.
#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<LayoutSnapshot>,
    redo: Vec<LayoutSnapshot>,
    depth: usize,
}

impl History {
    pub fn new(depth: usize) -> Self {
        History {
            undo: VecDeque::new(),
            redo: vec![],
            depth,
        }
    }

    /// Records the state before a mutation. Invalidates everything that could be redone.
    pub fn record(&mut self, before: LayoutSnapshot) {
        if self.depth == 0 {
            return;
        }
        if self.undo.len() == self.depth {
            self.undo.pop_front();
        }
        self.undo.push_back(before);
        self.redo.clear();
    }

    /// Returns the state to go back to, `current` becomes redoable.
    pub fn undo(&mut self, current: LayoutSnapshot) -> Option<LayoutSnapshot> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Returns the state to go forward to, `current` becomes undoable.
    pub fn redo(&mut self, current: LayoutSnapshot) -> Option<LayoutSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallfit::entities::{Layout, Module, ModuleCategory, Wall};

    #[test]
    fn bounded_depth() {
        let module = Module::new(0, "panel", ModuleCategory::Panel, 400, 2000, 1_000);
        let mut layout = Layout::new(Wall::new(0, "hall", 4000, 2600));
        let mut history = History::new(2);
        for _ in 0..3 {
            history.record(layout.save());
            layout.push_module(&module).unwrap();
        }
        let s1 = history.undo(layout.save()).unwrap();
        let s2 = history.undo(s1.clone()).unwrap();
        assert_eq!((s1.order.len(), s2.order.len()), (2, 1));
        assert!(history.undo(s2.clone()).is_none());
        assert!(history.can_redo());

        let r = history.redo(s2).unwrap();
        assert_eq!(r.order.len(), 2);
        history.record(r);
        assert!(!history.can_redo());
    }
}
