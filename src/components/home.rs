use std::sync::Arc;

use ratatui::prelude::*;
use tracing::{debug, info};

use super::{
    Children, Component,
    counter::CounterControls,
    section::{Section, SectionKind},
};
use crate::{
    config::Config,
    framework::{Action, Updater},
    store::CounterStore,
    tui::Event,
};

/// One position in the home page's vertical layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Section(SectionKind),
    CounterControls,
}

/// Top to bottom. The counter block sits between the hero and the rest.
pub const LAYOUT: [Slot; 9] = [
    Slot::Section(SectionKind::Hero),
    Slot::CounterControls,
    Slot::Section(SectionKind::Categories),
    Slot::Section(SectionKind::NewArrival),
    Slot::Section(SectionKind::PromoBanner),
    Slot::Section(SectionKind::BestSeller),
    Slot::Section(SectionKind::CountDown),
    Slot::Section(SectionKind::Testimonials),
    Slot::Section(SectionKind::Newsletter),
];

impl Slot {
    fn constraint(self) -> Constraint {
        match self {
            Slot::CounterControls => Constraint::Length(CounterControls::HEIGHT),
            Slot::Section(_) => Constraint::Fill(1),
        }
    }
}

/// The storefront home page: every section in [`LAYOUT`] order, with the
/// counter controls bound to the injected store.
pub struct HomePage {
    children: Vec<Box<dyn Component>>,
    updater: Option<Updater>,
}

impl HomePage {
    pub fn new(store: Arc<dyn CounterStore>) -> Self {
        let children = LAYOUT
            .iter()
            .map(|slot| -> Box<dyn Component> {
                match slot {
                    Slot::Section(kind) => Box::new(Section::new(*kind)),
                    Slot::CounterControls => Box::new(CounterControls::new(store.clone())),
                }
            })
            .collect();
        Self {
            children,
            updater: None,
        }
    }

    /// Hand the first child action back to the caller and queue the rest on
    /// the runtime, so no child's follow-up is lost.
    fn first_and_forward(&self, actions: Vec<Action>) -> Option<Action> {
        let mut actions = actions.into_iter();
        let first = actions.next();
        for action in actions {
            match &self.updater {
                Some(updater) => updater.dispatch(action),
                None => debug!("HomePage not mounted yet, dropping {action:?}"),
            }
        }
        first
    }
}

impl Children for HomePage {
    fn children(&mut self) -> Vec<&mut Box<dyn Component>> {
        self.children.iter_mut().collect()
    }
}

impl Component for HomePage {
    fn component_will_mount(&mut self, config: Config) -> color_eyre::Result<()> {
        info!("HomePage::component_will_mount - Initializing {} children", self.children.len());
        self.children_will_mount(config)
    }

    fn component_did_mount(&mut self, area: Size, updater: Updater) -> color_eyre::Result<()> {
        info!("HomePage::componentDidMount - mounted with area: {:?}", area);
        self.updater = Some(updater.clone());
        self.children_did_mount(area, updater)
    }

    fn component_will_unmount(&mut self) -> color_eyre::Result<()> {
        info!("HomePage::componentWillUnmount - Cleaning up");
        self.children_will_unmount()
    }

    fn handle_events(&mut self, event: Option<Event>) -> color_eyre::Result<Option<Action>> {
        let actions = self.propagate_events(event)?;
        Ok(self.first_and_forward(actions))
    }

    fn update(&mut self, action: Action) -> color_eyre::Result<Option<Action>> {
        let actions = self.propagate_update(action)?;
        Ok(self.first_and_forward(actions))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()> {
        let areas = Layout::vertical(LAYOUT.map(Slot::constraint)).split(area);
        for (child, child_area) in self.children.iter_mut().zip(areas.iter()) {
            child.render(frame, *child_area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};
    use strum::IntoEnumIterator;
    use tokio::sync::mpsc;

    use super::*;
    use crate::store::{LowerBound, SharedCounter};

    const WIDTH: u16 = 60;
    const HEIGHT: u16 = 43;

    fn mounted(initial: i64) -> (HomePage, SharedCounter) {
        let store = SharedCounter::new(initial, LowerBound::Unbounded);
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut home = HomePage::new(Arc::new(store.clone()));
        home.component_will_mount(Config::default()).unwrap();
        home.component_did_mount(Size::new(WIDTH, HEIGHT), Updater::new(tx)).unwrap();
        (home, store)
    }

    fn draw(home: &mut HomePage) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
        terminal
            .draw(|frame| home.render(frame, frame.area()).unwrap())
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn row_of(lines: &[String], needle: &str) -> usize {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("`{needle}` not rendered"))
    }

    /// Rows at which each slot's label first appears, in layout order.
    fn slot_rows(lines: &[String], count: i64) -> Vec<usize> {
        LAYOUT
            .iter()
            .map(|slot| match slot {
                Slot::Section(kind) => row_of(lines, &kind.to_string()),
                Slot::CounterControls => row_of(lines, &format!("Counter: {count}")),
            })
            .collect()
    }

    #[test]
    fn layout_lists_every_section_once_in_order() {
        let sections: Vec<SectionKind> = LAYOUT
            .iter()
            .filter_map(|slot| match slot {
                Slot::Section(kind) => Some(*kind),
                Slot::CounterControls => None,
            })
            .collect();
        assert_eq!(sections, SectionKind::iter().collect::<Vec<_>>());
        assert_eq!(LAYOUT[1], Slot::CounterControls);
    }

    #[test]
    fn renders_sections_in_order_around_the_counter() {
        let (mut home, _) = mounted(0);
        let lines = draw(&mut home);

        let rows = slot_rows(&lines, 0);
        assert!(rows.windows(2).all(|w| w[0] < w[1]), "out of order: {rows:?}");
        assert_eq!(rows.len(), LAYOUT.len());
    }

    #[test]
    fn sections_stay_put_for_any_count() {
        for count in [-3, 0, 42, i64::MAX] {
            let (mut home, _) = mounted(count);
            let lines = draw(&mut home);
            let rows = slot_rows(&lines, count);
            assert!(rows.windows(2).all(|w| w[0] < w[1]), "out of order at {count}: {rows:?}");
        }
    }

    #[test]
    fn counter_scenario_from_zero() {
        let (mut home, _) = mounted(0);

        home.update(Action::Increment).unwrap();
        assert!(draw(&mut home).iter().any(|l| l.contains("Counter: 1")));
        home.update(Action::Increment).unwrap();
        assert!(draw(&mut home).iter().any(|l| l.contains("Counter: 2")));
        home.update(Action::Decrement).unwrap();
        assert!(draw(&mut home).iter().any(|l| l.contains("Counter: 1")));
    }

    #[test]
    fn counter_scenario_from_five() {
        let (mut home, store) = mounted(5);
        for _ in 0..3 {
            home.update(Action::Decrement).unwrap();
        }
        assert_eq!(store.count(), 2);
        assert!(draw(&mut home).iter().any(|l| l.contains("Counter: 2")));
    }

    #[test]
    fn mouse_clicks_reach_the_counter_controls() {
        let (mut home, store) = mounted(0);
        let lines = draw(&mut home);

        let row = row_of(&lines, "Increment") as u16;
        let column = lines[row as usize].find("Increment").unwrap_or_default() as u16;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        home.handle_events(Some(Event::Mouse(click))).unwrap();

        assert_eq!(store.count(), 1);
    }

    #[test]
    fn unmounts_cleanly() {
        let (mut home, _) = mounted(0);
        home.component_will_unmount().unwrap();
    }

    /// Answers every action with a fixed follow-up.
    struct Echo(Action);

    impl Component for Echo {
        fn update(&mut self, _action: Action) -> color_eyre::Result<Option<Action>> {
            Ok(Some(self.0.clone()))
        }

        fn render(&mut self, _frame: &mut Frame, _area: Rect) -> color_eyre::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn follow_up_actions_past_the_first_are_queued() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut home = HomePage {
            children: vec![
                Box::new(Echo(Action::ClearScreen)),
                Box::new(Echo(Action::Suspend)),
                Box::new(Echo(Action::Quit)),
            ],
            updater: None,
        };
        home.component_did_mount(Size::new(WIDTH, HEIGHT), Updater::new(tx)).unwrap();

        let first = home.update(Action::Increment).unwrap();

        assert_eq!(first, Some(Action::ClearScreen));
        assert_eq!(rx.try_recv().ok(), Some(Action::Suspend));
        assert_eq!(rx.try_recv().ok(), Some(Action::Quit));
        assert!(rx.try_recv().is_err());
    }
}
