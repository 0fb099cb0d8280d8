use serde::Deserialize;
use strum::Display;

/// Everything the runtime and the component tree can be asked to do.
///
/// Keybindings in the config file name these variants directly, e.g.
/// `"<+>": "Increment"`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Action {
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    ClearScreen,
    Error(String),
    Increment,
    Decrement,
}

impl Action {
    /// Actions the runtime consumes itself; everything else is forwarded to components.
    pub fn is_lifecycle(&self) -> bool {
        matches!(
            self,
            Action::Render
                | Action::Resize(..)
                | Action::Suspend
                | Action::Resume
                | Action::Quit
                | Action::ClearScreen
        )
    }
}
