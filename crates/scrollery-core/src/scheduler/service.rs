use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::scroll::{ScrollController, ScrollSource};

/// Drives a [`ScrollController`] with a fixed-rate tick loop.
///
/// The driver sleeps until a scroll wakeup arrives, then ticks every
/// `tick_interval` until the page stops moving. The returned futures are not
/// `Send`; run them on a current-thread runtime.
pub struct ScrollDriver<Src: ScrollSource> {
    controller: ScrollController<Src>,
    tick_interval: Duration,
}

impl<Src: ScrollSource> ScrollDriver<Src> {
    pub fn new(controller: ScrollController<Src>, tick_interval: Duration) -> Self {
        Self {
            controller,
            tick_interval,
        }
    }

    pub fn controller(&self) -> &ScrollController<Src> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollController<Src> {
        &mut self.controller
    }

    /// Treat the current moment as a scroll event and tick until the page settles.
    ///
    /// Returns the number of change events emitted.
    pub async fn drive_until_idle(&mut self) -> u32 {
        if !self.controller.on_scroll() {
            return 0;
        }

        let mut ticker = interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut frames = 0;
        loop {
            ticker.tick().await;
            if !self.controller.animate_frame() {
                break;
            }
            frames += 1;
        }
        frames
    }

    /// Serve scroll wakeups until shutdown is signalled or the wakeup channel closes
    pub async fn run(
        &mut self,
        mut scroll_events: mpsc::UnboundedReceiver<()>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        info!(
            "Scroll driver started: tick={}ms",
            self.tick_interval.as_millis()
        );

        'serve: loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Scroll driver received shutdown signal");
                        break;
                    }
                }

                event = scroll_events.recv() => {
                    if event.is_none() {
                        info!("Scroll event source closed");
                        break;
                    }
                    if !self.controller.on_scroll() {
                        continue;
                    }

                    let mut ticker = interval(self.tick_interval);
                    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

                    loop {
                        tokio::select! {
                            result = shutdown.changed() => {
                                if result.is_err() || *shutdown.borrow() {
                                    info!("Scroll driver received shutdown signal");
                                    break 'serve;
                                }
                            }

                            _ = ticker.tick() => {
                                // Wakeups that arrive while ticking are already covered
                                while scroll_events.try_recv().is_ok() {}

                                if !self.controller.animate_frame() {
                                    debug!("Tick loop cancelled");
                                    break;
                                }
                            }
                        }
                    }
                }
            }
        }

        info!("Scroll driver stopped");
    }
}
