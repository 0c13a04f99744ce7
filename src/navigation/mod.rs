//! Navigation intents, directions and the events they produce

mod keyboard;

pub use keyboard::{resolve_key, Control, Key, KEY_CODE_ENTER, KEY_CODE_TAB};

use serde::Serialize;
use std::cmp::Ordering;

/// A navigation request from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationIntent {
    Next,
    Previous,
    First,
    Last,
    /// Jump to a page id, taken verbatim
    GoTo(usize),
}

impl NavigationIntent {
    /// Direction of travel when leaving `from_id`.
    ///
    /// `GoTo` compares the target with the page being left; a jump to the
    /// same page has no direction.
    pub fn direction(&self, from_id: usize) -> Direction {
        match *self {
            NavigationIntent::Next | NavigationIntent::Last => Direction::Forward,
            NavigationIntent::Previous | NavigationIntent::First => Direction::Backward,
            NavigationIntent::GoTo(target) => Direction::between(target, from_id),
        }
    }
}

/// Which way the selection moved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    /// No ordering between old and new selection; never slides the window
    Undefined,
}

impl Direction {
    /// Direction from `previous_id` to `new_id`
    pub fn between(new_id: usize, previous_id: usize) -> Self {
        match new_id.cmp(&previous_id) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => Direction::Undefined,
        }
    }
}

/// Emitted once per permitted navigation, after state is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    pub page_id: usize,
    pub intent: NavigationIntent,
}
