use ratatui::{prelude::*, widgets::*};
use strum::{Display, EnumIter};
use tracing::{debug, info};

use super::Component;
use crate::framework::Updater;

/// The storefront sections drawn around the counter. Their contents come from
/// elsewhere; the home page only decides where they go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SectionKind {
    Hero,
    Categories,
    #[strum(to_string = "New Arrivals")]
    NewArrival,
    #[strum(to_string = "Promo Banner")]
    PromoBanner,
    #[strum(to_string = "Best Sellers")]
    BestSeller,
    #[strum(to_string = "Countdown")]
    CountDown,
    Testimonials,
    Newsletter,
}

/// A titled frame standing in for one storefront section.
/// Similar to a <section> in React that wraps externally owned content.
pub struct Section {
    kind: SectionKind,
    border_style: Style,
}

impl Section {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            border_style: Style::default().fg(Color::Cyan),
        }
    }
}

impl Component for Section {
    fn component_did_mount(&mut self, area: Size, _updater: Updater) -> color_eyre::Result<()> {
        debug!("Section::componentDidMount - '{}' mounted with area: {:?}", self.kind, area);
        Ok(())
    }

    fn component_will_unmount(&mut self) -> color_eyre::Result<()> {
        info!("Section::componentWillUnmount - Cleaning up section '{}'", self.kind);
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) -> color_eyre::Result<()> {
        let block = Block::bordered()
            .border_style(self.border_style)
            .title(self.kind.to_string().bold());
        frame.render_widget(block, area);
        Ok(())
    }
}
