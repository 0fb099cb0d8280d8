use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::action::Action;

/// Handle given to components on mount so they can ask the runtime for work,
/// the way `setState` schedules a re-render.
#[derive(Clone, Debug)]
pub struct Updater {
    tx: UnboundedSender<Action>,
}

impl Updater {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Schedule a re-render of the whole tree.
    pub fn update(&self) {
        self.dispatch(Action::Render);
    }

    pub fn dispatch(&self, action: Action) {
        if self.tx.send(action).is_err() {
            debug!("runtime has shut down, dropping action");
        }
    }
}

impl PartialEq for Updater {
    fn eq(&self, other: &Self) -> bool {
        self.tx.same_channel(&other.tx)
    }
}

impl Eq for Updater {}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn update_requests_a_render() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let updater = Updater::new(tx);

        updater.update();

        assert_eq!(rx.try_recv().ok(), Some(Action::Render));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn clones_share_the_channel() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (other_tx, _other_rx) = mpsc::unbounded_channel();
        let updater = Updater::new(tx);

        assert_eq!(updater.clone(), updater);
        assert_ne!(Updater::new(other_tx), updater);
    }

    #[test]
    fn dispatch_after_shutdown_is_silent() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        Updater::new(tx).dispatch(Action::Quit);
    }
}
