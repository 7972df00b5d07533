//! Drag gesture tracking
//!
//! A drag starts on one list item, passes over others, and ends either on a
//! list position (reorder) or on the delete zone (remove). Indices come from
//! the rendered list, so they are in range by construction.

use formwork_field::{FieldDescriptor, FieldId};

use crate::list::OrderedFieldList;

/// In-flight drag gesture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    dragged: Option<usize>,
    over: Option<usize>,
}

impl DragSession {
    /// Create idle session
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drag started on the item at `index`
    pub fn start(&mut self, index: usize) {
        self.dragged = Some(index);
        self.over = None;
    }

    /// Pointer entered the item at `index`
    pub fn enter(&mut self, index: usize) {
        if self.dragged.is_some() {
            self.over = Some(index);
        }
    }

    /// A drag is in progress; the delete zone is shown while this holds
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Index of the dragged item
    #[inline]
    #[must_use]
    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    /// Index of the item last entered
    #[inline]
    #[must_use]
    pub fn over(&self) -> Option<usize> {
        self.over
    }

    /// Drag ended over the list
    ///
    /// Moves the dragged item to the last entered position. Returns `true` if
    /// the list was reordered; a drop that never entered a target is a no-op.
    /// The session is idle afterwards either way.
    pub fn drop_on(&mut self, list: &mut OrderedFieldList) -> bool {
        let session = std::mem::take(self);
        match (session.dragged, session.over) {
            (Some(from), Some(to)) => list.reorder(from, to),
            _ => false,
        }
    }

    /// Drag ended on the delete zone
    ///
    /// Removes the dragged item, identified by `id` as carried in the drag
    /// payload. The session is idle afterwards.
    pub fn drop_on_delete_zone(
        &mut self,
        list: &mut OrderedFieldList,
        id: &FieldId,
    ) -> Option<FieldDescriptor> {
        *self = Self::default();
        list.remove_by_id(id)
    }

    /// Abandon the gesture without touching the list
    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork_field::HeadingElement;
    use pretty_assertions::assert_eq;

    fn list_of(ids: &[&str]) -> OrderedFieldList {
        let mut list = OrderedFieldList::new();
        for id in ids {
            list.append(FieldDescriptor::Heading(HeadingElement {
                id: FieldId::new(*id).unwrap(),
                text: String::new(),
            }))
            .unwrap();
        }
        list
    }

    fn order(list: &OrderedFieldList) -> Vec<String> {
        list.ids().map(ToString::to_string).collect()
    }

    #[test]
    fn drag_first_onto_last() {
        let mut list = list_of(&["a", "b", "c"]);
        let mut drag = DragSession::new();

        drag.start(0);
        drag.enter(0);
        drag.enter(1);
        drag.enter(2);
        assert!(drag.is_dragging());

        assert!(drag.drop_on(&mut list));
        assert_eq!(order(&list), vec!["b", "c", "a"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn drop_without_target_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let mut drag = DragSession::new();

        drag.start(1);
        assert!(!drag.drop_on(&mut list));
        assert_eq!(order(&list), vec!["a", "b"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn enter_without_start_is_ignored() {
        let mut drag = DragSession::new();
        drag.enter(3);
        assert_eq!(drag.over(), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn delete_zone_removes_dragged_item() {
        let mut list = list_of(&["a", "b", "c"]);
        let mut drag = DragSession::new();

        drag.start(1);
        let removed = drag
            .drop_on_delete_zone(&mut list, &FieldId::new("b").unwrap())
            .unwrap();

        assert_eq!(removed.id().as_str(), "b");
        assert_eq!(order(&list), vec!["a", "c"]);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_leaves_list_alone() {
        let mut list = list_of(&["a", "b"]);
        let mut drag = DragSession::new();
        drag.start(0);
        drag.enter(1);
        drag.cancel();

        assert!(!drag.drop_on(&mut list));
        assert_eq!(order(&list), vec!["a", "b"]);
    }
}
