//! Row selection bookkeeping.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Selected flag per row id. Absent ids are unselected.
pub type RowSelectionState = BTreeMap<String, bool>;

/// Either a replacement value or a function deriving the next value from
/// the previous one.
pub enum Updater<S> {
    Value(S),
    Fn(Box<dyn FnOnce(&S) -> S + Send>),
}

impl<S> Updater<S> {
    pub fn with(f: impl FnOnce(&S) -> S + Send + 'static) -> Self {
        Updater::Fn(Box::new(f))
    }

    /// Resolve against the previous value.
    pub fn apply(self, previous: &S) -> S {
        match self {
            Updater::Value(value) => value,
            Updater::Fn(f) => f(previous),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Updater<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Updater::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Updater::Fn(_) => write!(f, "Fn(..)"),
        }
    }
}

/// Receives state updates emitted by the table.
pub type OnChange<S> = Arc<dyn Fn(Updater<S>) + Send + Sync>;

pub fn is_selected(state: &RowSelectionState, id: &str) -> bool {
    state.get(id).copied().unwrap_or(false)
}

/// Updater toggling one row. `value` of `None` flips the current flag.
///
/// Without multi-row selection, selecting a row clears every other entry.
pub(crate) fn toggle_row(id: String, value: Option<bool>, multi: bool) -> Updater<RowSelectionState> {
    Updater::with(move |previous: &RowSelectionState| {
        let current = is_selected(previous, &id);
        let value = value.unwrap_or(!current);
        if current == value {
            return previous.clone();
        }

        let mut next = previous.clone();
        if value {
            if !multi {
                next.clear();
            }
            next.insert(id, true);
        } else {
            next.remove(&id);
        }
        next
    })
}

/// Updater selecting or clearing every row in `ids`.
pub(crate) fn toggle_all(ids: Vec<String>, value: bool) -> Updater<RowSelectionState> {
    Updater::with(move |previous: &RowSelectionState| set_all(previous, &ids, value))
}

/// Updater flipping the all-selected state of `ids`, judged against the
/// selection it is applied to: clears every row when all are selected,
/// selects every row otherwise. Selecting is a no-op without `multi`.
pub(crate) fn flip_all(ids: Vec<String>, multi: bool) -> Updater<RowSelectionState> {
    Updater::with(move |previous: &RowSelectionState| {
        let all = !ids.is_empty() && ids.iter().all(|id| is_selected(previous, id));
        if !all && !multi {
            return previous.clone();
        }
        set_all(previous, &ids, !all)
    })
}

fn set_all(previous: &RowSelectionState, ids: &[String], value: bool) -> RowSelectionState {
    let mut next = previous.clone();
    for id in ids {
        if value {
            next.insert(id.clone(), true);
        } else {
            next.remove(id);
        }
    }
    next
}
