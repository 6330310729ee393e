use leptos::prelude::*;
use std::collections::BTreeSet;

/// Row ids selected in the register.
///
/// Written by the register's own selection handling; the balance summary
/// only reads it through [`use_selected_items`].
#[derive(Clone, Copy)]
pub struct SelectionContext {
    items: RwSignal<BTreeSet<String>>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(BTreeSet::new()),
        }
    }

    pub fn selected(&self) -> Signal<BTreeSet<String>> {
        self.items.read_only().into()
    }

    pub fn toggle(&self, id: &str) {
        self.items.update(|items| {
            if !items.remove(id) {
                items.insert(id.to_string());
            }
        });
    }

    pub fn set<I, S>(&self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.set(ids.into_iter().map(Into::into).collect());
    }

    pub fn clear(&self) {
        self.items.update(BTreeSet::clear);
    }
}

impl Default for SelectionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_selected_items() -> Signal<BTreeSet<String>> {
    use_context::<SelectionContext>()
        .expect("SelectionContext not found. Wrap the view with AccountViewProvider.")
        .selected()
}
