use ratatui::layout::Size;

use super::{action::Action, components::Component};
use crate::{config::Config, framework::Updater, tui::Event};

/// `Children` trait provides React-like children functionality for components.
///
/// This trait allows components to contain and manage child components,
/// similar to how React components can have children through props.children.
/// Implement `children` and call the helpers from the matching lifecycle methods.
pub trait Children {
    /// Mutable references to child components, in render order.
    fn children(&mut self) -> Vec<&mut Box<dyn Component>> {
        Vec::new()
    }

    /// Propagate the constructor phase to all children.
    fn children_will_mount(&mut self, config: Config) -> color_eyre::Result<()> {
        for child in self.children() {
            child.component_will_mount(config.clone())?;
        }
        Ok(())
    }

    /// Propagate the mount phase to all children. They all share the parent's updater.
    fn children_did_mount(&mut self, area: Size, updater: Updater) -> color_eyre::Result<()> {
        for child in self.children() {
            child.component_did_mount(area, updater.clone())?;
        }
        Ok(())
    }

    /// Unmount children in reverse order.
    fn children_will_unmount(&mut self) -> color_eyre::Result<()> {
        for child in self.children().into_iter().rev() {
            child.component_will_unmount()?;
        }
        Ok(())
    }

    /// Propagate an event to all children, collecting the actions they emit.
    fn propagate_events(&mut self, event: Option<Event>) -> color_eyre::Result<Vec<Action>> {
        let mut actions = Vec::new();
        for child in self.children() {
            if let Some(action) = child.handle_events(event.clone())? {
                actions.push(action);
            }
        }
        Ok(actions)
    }

    /// Propagate an action to all children, collecting their follow-ups.
    fn propagate_update(&mut self, action: Action) -> color_eyre::Result<Vec<Action>> {
        let mut actions = Vec::new();
        for child in self.children() {
            if let Some(next) = child.update(action.clone())? {
                actions.push(next);
            }
        }
        Ok(actions)
    }
}
