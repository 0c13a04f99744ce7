//! Key press to navigation intent mapping
//!
//! The host resolves which control has focus; this module only decides
//! what a key does on that control.

use super::NavigationIntent;

pub const KEY_CODE_ENTER: u32 = 13;
pub const KEY_CODE_TAB: u32 = 9;

/// Keys the paginator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
}

impl Key {
    /// Map a legacy DOM `keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_CODE_ENTER => Some(Key::Enter),
            KEY_CODE_TAB => Some(Key::Tab),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Key::Enter),
            "Tab" => Some(Key::Tab),
            _ => None,
        }
    }
}

/// The focused paginator control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    First,
    Previous,
    Next,
    Last,
    Page(usize),
}

impl Control {
    /// Resolve a control name; `"page"` needs the page id it shows.
    pub fn from_name(name: &str, page_id: Option<usize>) -> Option<Self> {
        match name {
            "first" => Some(Control::First),
            "previous" => Some(Control::Previous),
            "next" => Some(Control::Next),
            "last" => Some(Control::Last),
            "page" => page_id.map(Control::Page),
            _ => None,
        }
    }
}

/// Translate a key press on a control into an intent, if the key is consumed
pub fn resolve_key(key: Key, control: Control) -> Option<NavigationIntent> {
    match (key, control) {
        (Key::Enter, Control::First) => Some(NavigationIntent::First),
        (Key::Enter, Control::Previous) => Some(NavigationIntent::Previous),
        (Key::Enter, Control::Next) => Some(NavigationIntent::Next),
        (Key::Enter, Control::Last) => Some(NavigationIntent::Last),
        (Key::Enter, Control::Page(id)) => Some(NavigationIntent::GoTo(id)),
        (Key::Tab, Control::Next | Control::Last) => Some(NavigationIntent::Next),
        (Key::Tab, _) => None,
    }
}
