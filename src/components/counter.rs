use std::sync::Arc;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::{Color, Style, Stylize},
    widgets::Paragraph,
};
use tracing::{debug, info};

use crate::{
    components::Component,
    config::Config,
    framework::{Action, Updater},
    store::CounterStore,
};

const INCREMENT_LABEL: &str = " Increment ";
const DECREMENT_LABEL: &str = " Decrement ";

/// Increment button, current count, decrement button, stacked and centred.
/// The count lives in the store; this component only reads and mutates it.
pub struct CounterControls {
    store: Arc<dyn CounterStore>,
    updater: Option<Updater>,
    increment_button: Rect,
    decrement_button: Rect,
}

impl CounterControls {
    pub const HEIGHT: u16 = 3;

    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        Self {
            store,
            updater: None,
            increment_button: Rect::default(),
            decrement_button: Rect::default(),
        }
    }

    fn increment(&mut self) {
        self.store.increment();
        self.request_render();
    }

    fn decrement(&mut self) {
        self.store.decrement();
        self.request_render();
    }

    /// setState-like: the store changed, ask the runtime for a new frame.
    fn request_render(&self) {
        match &self.updater {
            Some(updater) => updater.update(),
            None => debug!("CounterControls not mounted yet, skipping re-render"),
        }
    }
}

/// One-row rect of `width` centred horizontally in `row`.
fn centered(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect {
        x: row.x + (row.width - width) / 2,
        y: row.y,
        width,
        height: row.height.min(1),
    }
}

impl Component for CounterControls {
    fn component_will_mount(&mut self, _config: Config) -> color_eyre::Result<()> {
        info!("CounterControls::component_will_mount - count is {}", self.store.count());
        Ok(())
    }

    fn component_did_mount(&mut self, area: Size, updater: Updater) -> color_eyre::Result<()> {
        info!("CounterControls::componentDidMount - Component mounted with area: {:?}", area);
        self.updater = Some(updater);
        Ok(())
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> color_eyre::Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.increment_button.contains(position) {
            self.increment();
        } else if self.decrement_button.contains(position) {
            self.decrement();
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
        match action {
            Action::Increment => self.increment(),
            Action::Decrement => self.decrement(),
            _ => {}
        }
        Ok(None)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()> {
        let [increment_row, count_row, decrement_row] =
            Layout::vertical([Constraint::Length(1); 3]).areas(area);

        self.increment_button = centered(increment_row, INCREMENT_LABEL.len() as u16);
        self.decrement_button = centered(decrement_row, DECREMENT_LABEL.len() as u16);

        let increment = Paragraph::new(INCREMENT_LABEL).style(Style::new().bg(Color::Blue).fg(Color::White));
        let count = Paragraph::new(format!("Counter: {}", self.store.count()))
            .bold()
            .centered();
        let decrement = Paragraph::new(DECREMENT_LABEL).style(Style::new().bg(Color::DarkGray).fg(Color::White));

        frame.render_widget(increment, self.increment_button);
        frame.render_widget(count, count_row);
        frame.render_widget(decrement, self.decrement_button);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    use super::*;
    use crate::store::{LowerBound, SharedCounter};

    fn mounted(initial: i64) -> (CounterControls, SharedCounter, UnboundedReceiver<Action>) {
        let store = SharedCounter::new(initial, LowerBound::Unbounded);
        let (tx, rx) = mpsc::unbounded_channel();
        let mut controls = CounterControls::new(Arc::new(store.clone()));
        controls
            .component_did_mount(Size::new(40, CounterControls::HEIGHT), Updater::new(tx))
            .unwrap();
        (controls, store, rx)
    }

    fn draw(controls: &mut CounterControls) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, CounterControls::HEIGHT)).unwrap();
        terminal
            .draw(|frame| controls.render(frame, frame.area()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .collect()
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn renders_buttons_around_the_count() {
        let (mut controls, _, _) = mounted(0);
        assert_eq!(draw(&mut controls), vec!["Increment", "Counter: 0", "Decrement"]);
    }

    #[test]
    fn buttons_keep_their_fill_colours() {
        let (mut controls, _, _) = mounted(0);
        let mut terminal = Terminal::new(TestBackend::new(40, CounterControls::HEIGHT)).unwrap();
        terminal
            .draw(|frame| controls.render(frame, frame.area()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();

        // 40 columns, 11-wide labels: buttons start at x = 14
        assert_eq!(buffer[(14, 0)].bg, Color::Blue);
        assert_eq!(buffer[(14, 2)].bg, Color::DarkGray);
        assert_eq!(buffer[(0, 2)].bg, Color::Reset);
    }

    #[test]
    fn increments_then_decrements() {
        let (mut controls, _, _) = mounted(0);

        controls.update(Action::Increment).unwrap();
        assert_eq!(draw(&mut controls)[1], "Counter: 1");
        controls.update(Action::Increment).unwrap();
        assert_eq!(draw(&mut controls)[1], "Counter: 2");
        controls.update(Action::Decrement).unwrap();
        assert_eq!(draw(&mut controls)[1], "Counter: 1");
    }

    #[test]
    fn three_decrements_from_five() {
        let (mut controls, store, _) = mounted(5);
        for _ in 0..3 {
            controls.update(Action::Decrement).unwrap();
        }
        assert_eq!(store.count(), 2);
        assert_eq!(draw(&mut controls)[1], "Counter: 2");
    }

    #[test]
    fn each_mutation_requests_one_render() {
        let (mut controls, _, mut rx) = mounted(0);

        controls.update(Action::Increment).unwrap();
        controls.update(Action::Decrement).unwrap();
        controls.update(Action::Quit).unwrap();

        assert_eq!(rx.try_recv().ok(), Some(Action::Render));
        assert_eq!(rx.try_recv().ok(), Some(Action::Render));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clicking_buttons_mutates_the_store() {
        let (mut controls, store, _) = mounted(0);
        draw(&mut controls);

        // 40 columns, 11-wide labels: buttons span x = 14..25
        controls.handle_mouse_event(left_click(20, 0)).unwrap();
        controls.handle_mouse_event(left_click(20, 0)).unwrap();
        assert_eq!(store.count(), 2);

        controls.handle_mouse_event(left_click(14, 2)).unwrap();
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn clicks_outside_buttons_are_ignored() {
        let (mut controls, store, mut rx) = mounted(0);
        draw(&mut controls);

        controls.handle_mouse_event(left_click(20, 1)).unwrap();
        controls.handle_mouse_event(left_click(0, 0)).unwrap();
        controls.handle_mouse_event(left_click(25, 2)).unwrap();
        let mut right = left_click(20, 0);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        controls.handle_mouse_event(right).unwrap();

        assert_eq!(store.count(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clicks_before_first_render_do_nothing() {
        let (mut controls, store, _) = mounted(0);
        controls.handle_mouse_event(left_click(20, 0)).unwrap();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn mutates_without_updater_before_mount() {
        let store = SharedCounter::default();
        let mut controls = CounterControls::new(Arc::new(store.clone()));
        controls.update(Action::Increment).unwrap();
        assert_eq!(store.count(), 1);
    }
}
