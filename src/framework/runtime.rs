use crossterm::event::KeyEvent;
use ratatui::prelude::{Rect, Size};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::{action::Action, components::Component, updater::Updater};
use crate::{
    app::Mode,
    config::Config,
    tui::{Event, Tui},
};

/// Runtime manages the execution of components and handles the application lifecycle.
///
/// This is similar to the React runtime that manages the component tree and handles
/// the lifecycle events, event processing, and rendering.
pub struct Runtime {
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    config: Config,
    mode: Mode,
    mouse: bool,
}

impl Runtime {
    /// Create a new Runtime with the given components and configuration.
    pub fn new(components: Vec<Box<dyn Component>>, config: Config, mode: Mode) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            components,
            should_quit: false,
            should_suspend: false,
            action_tx,
            action_rx,
            config,
            mode,
            mouse: true,
        }
    }

    /// Capture mouse events (on by default).
    pub fn mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    /// Run the runtime loop.
    ///
    /// This method handles the full lifecycle:
    /// 1. Initialize TUI
    /// 2. Mount components (component_will_mount, component_did_mount)
    /// 3. Run event loop (handle events, process actions, render)
    /// 4. Unmount components (component_will_unmount)
    /// 5. Cleanup TUI
    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?.mouse(self.mouse);
        tui.enter()?;

        self.mount(tui.size()?)?;

        // Initial render
        self.action_tx.send(Action::Render)?;

        let action_tx = self.action_tx.clone();
        loop {
            self.handle_events(&mut tui).await?;
            self.handle_lifecycle(&mut tui)?;

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.resume()?;
                // Trigger render after resume
                action_tx.send(Action::Render)?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }

        self.unmount()?;

        tui.exit()?;
        Ok(())
    }

    /// Constructor and componentDidMount phases for every root component.
    pub fn mount(&mut self, size: Size) -> color_eyre::Result<()> {
        // React-like lifecycle: constructor phase
        info!("Initializing components (constructor phase)");
        for component in self.components.iter_mut() {
            component.component_will_mount(self.config.clone())?;
        }

        // React-like lifecycle: componentDidMount phase
        info!("Mounting components (componentDidMount phase)");
        let updater = Updater::new(self.action_tx.clone());
        for component in self.components.iter_mut() {
            component.component_did_mount(size, updater.clone())?;
        }
        Ok(())
    }

    /// componentWillUnmount phase for every root component.
    pub fn unmount(&mut self) -> color_eyre::Result<()> {
        info!("Unmounting components (componentWillUnmount phase)");
        for component in self.components.iter_mut() {
            component.component_will_unmount()?;
        }
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        let action_tx = self.action_tx.clone();
        match event {
            Event::Closed => action_tx.send(Action::Quit)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Key(key) => self.handle_key_event(key)?,
            _ => {}
        }
        for component in self.components.iter_mut() {
            if let Some(action) = component.handle_events(Some(event.clone()))? {
                action_tx.send(action)?;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        if let Some(action) = self.config.keybindings.action_for(self.mode, key) {
            info!("Got action: {action:?}");
            self.action_tx.send(action.clone())?;
        }
        Ok(())
    }

    fn handle_lifecycle(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            match action {
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Resize(w, h) => self.handle_resize(tui, w, h)?,
                Action::Render => self.render(tui)?,
                other => self.dispatch(other)?,
            }
        }
        Ok(())
    }

    /// Apply an action that does not need the terminal: runtime flags, errors,
    /// or anything the component tree reacts to.
    pub fn dispatch(&mut self, action: Action) -> color_eyre::Result<()> {
        debug!("{action:?}");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Error(ref msg) => error!("{msg}"),
            ref other if other.is_lifecycle() => {}
            other => {
                for component in self.components.iter_mut() {
                    if let Some(next) = component.update(other.clone())? {
                        self.action_tx.send(next)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> color_eyre::Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> color_eyre::Result<()> {
        tui.draw(|frame| {
            for component in self.components.iter_mut() {
                // React-like lifecycle: render method
                if let Err(err) = component.render(frame, frame.area()) {
                    let _ = self
                        .action_tx
                        .send(Action::Error(format!("Failed to render: {:?}", err)));
                }
            }
        })?;
        Ok(())
    }
}
