//! Schedules cache as seen by the account view.
//!
//! The cache is filled by whoever owns schedule data; the balance components
//! only read it and wait while it is loading.

use contracts::domain::a002_schedule::Schedule;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchedulesState {
    pub is_loading: bool,
    pub schedules: Vec<Schedule>,
}

impl SchedulesState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            schedules: Vec::new(),
        }
    }

    pub fn loaded(schedules: Vec<Schedule>) -> Self {
        Self {
            is_loading: false,
            schedules,
        }
    }
}

#[derive(Clone, Copy)]
pub struct SchedulesContext {
    pub state: RwSignal<SchedulesState>,
}

impl SchedulesContext {
    /// Starts out loading until the owner delivers the first snapshot.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SchedulesState::loading()),
        }
    }

    pub fn set_loading(&self) {
        self.state.update(|s| s.is_loading = true);
    }

    pub fn set_schedules(&self, schedules: Vec<Schedule>) {
        log::debug!("schedules cache loaded with {} schedule(s)", schedules.len());
        self.state.set(SchedulesState::loaded(schedules));
    }
}

impl Default for SchedulesContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cached_schedules() -> SchedulesContext {
    use_context::<SchedulesContext>()
        .expect("SchedulesContext not found. Wrap the view with AccountViewProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_constructors() {
        assert!(SchedulesState::loading().is_loading);

        let loaded = SchedulesState::loaded(vec![]);
        assert!(!loaded.is_loading);
        assert!(loaded.schedules.is_empty());
        assert_eq!(SchedulesState::default(), loaded);
    }
}
