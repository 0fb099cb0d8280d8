use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    Frame,
    layout::{Rect, Size},
};

use super::{action::Action, updater::Updater};
use crate::{config::Config, tui::Event};

/// `Component` is a trait that represents a visual and interactive element of the user interface.
///
/// Implementors of this trait can be mounted by the [`Runtime`](super::Runtime) and will be able to
/// receive events, update state, and be rendered on the screen.
///
/// This trait follows React-like lifecycle methods for predictable component behavior.
pub trait Component {
    /// Called once when the component is first created, before mounting.
    /// Similar to React's constructor. Use this to read configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration settings.
    fn component_will_mount(&mut self, config: Config) -> color_eyre::Result<()> {
        let _ = config; // to appease clippy
        Ok(())
    }

    /// Called once the terminal is up and the tree is about to be drawn for the first time.
    /// Similar to React's componentDidMount.
    ///
    /// # Arguments
    ///
    /// * `area` - Size of the terminal the component is mounted within.
    /// * `updater` - Handle used to schedule re-renders after a state change.
    fn component_did_mount(&mut self, area: Size, updater: Updater) -> color_eyre::Result<()> {
        let _ = (area, updater); // to appease clippy
        Ok(())
    }

    /// Called immediately before the component is unmounted and destroyed.
    /// Similar to React's componentWillUnmount. Use this for cleanup.
    fn component_will_unmount(&mut self) -> color_eyre::Result<()> {
        Ok(())
    }

    /// Handle incoming events and produce actions if necessary.
    ///
    /// # Arguments
    ///
    /// * `event` - An optional event to be processed.
    ///
    /// # Returns
    ///
    /// * `Result<Option<Action>>` - An action to be processed or none.
    fn handle_events(&mut self, event: Option<Event>) -> color_eyre::Result<Option<Action>> {
        let action = match event {
            Some(Event::Key(key_event)) => self.handle_key_event(key_event)?,
            Some(Event::Mouse(mouse_event)) => self.handle_mouse_event(mouse_event)?,
            _ => None,
        };
        Ok(action)
    }

    /// Handle key events and produce actions if necessary.
    fn handle_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<Option<Action>> {
        let _ = key; // to appease clippy
        Ok(None)
    }

    /// Handle mouse events and produce actions if necessary.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> color_eyre::Result<Option<Action>> {
        let _ = mouse; // to appease clippy
        Ok(None)
    }

    /// React to an action dispatched by the runtime, e.g. one produced by a keybinding.
    /// Similar to a Redux reducer.
    ///
    /// # Returns
    ///
    /// * `Result<Option<Action>>` - A follow-up action to be processed or none.
    fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
        let _ = action; // to appease clippy
        Ok(None)
    }

    /// Render the component on the screen. (REQUIRED)
    /// Similar to React's render method.
    ///
    /// # Arguments
    ///
    /// * `frame` - A frame used for rendering.
    /// * `area` - The area in which the component should be drawn.
    fn render(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()>;
}
