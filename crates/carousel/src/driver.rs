use thiserror::Error;
use tokio::{
    sync::{mpsc, oneshot, watch},
    task::JoinHandle,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

use crate::{controller::Carousel, intent::Intent, surface::CarouselSurface};

#[derive(Debug, Error)]
pub enum CarouselError {
    #[error("carousel '{0}' is no longer running")]
    Stopped(String),
}

enum Command<S> {
    Intent(Intent),
    Destroy(oneshot::Sender<S>),
}

/// Owner-side handle of a running carousel. Dropping it stops the task.
pub struct CarouselHandle<S> {
    name: String,
    commands: mpsc::UnboundedSender<Command<S>>,
    index: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

/// Starts autoplay and moves the carousel onto its own task. Timer ticks and
/// intents are processed one at a time, in arrival order.
pub fn spawn<S>(mut carousel: Carousel<S>) -> CarouselHandle<S>
where
    S: CarouselSurface + Send + 'static,
{
    let name = carousel.name().to_string();
    let (commands, command_rx) = mpsc::unbounded_channel();
    let (index_tx, index) = watch::channel(carousel.current_index());

    carousel.start(Instant::now());
    info!(
        carousel = %name,
        slides = carousel.slide_count(),
        interval_ms = carousel.autoplay_interval().as_millis() as u64,
        "carousel running"
    );
    let task = tokio::spawn(run(carousel, command_rx, index_tx));

    CarouselHandle {
        name,
        commands,
        index,
        task,
    }
}

impl<S> CarouselHandle<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, intent: Intent) -> Result<(), CarouselError> {
        self.commands
            .send(Command::Intent(intent))
            .map_err(|_| CarouselError::Stopped(self.name.clone()))
    }

    pub fn current_index(&self) -> usize {
        *self.index.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the task, cancelling any pending autoplay tick, and returns the
    /// surface.
    pub async fn destroy(self) -> Result<S, CarouselError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.commands.send(Command::Destroy(reply_tx)).is_err() {
            return Err(CarouselError::Stopped(self.name));
        }
        let surface = reply_rx
            .await
            .map_err(|_| CarouselError::Stopped(self.name.clone()))?;
        let _ = self.task.await;
        Ok(surface)
    }
}

async fn run<S: CarouselSurface>(
    mut carousel: Carousel<S>,
    mut commands: mpsc::UnboundedReceiver<Command<S>>,
    index_tx: watch::Sender<usize>,
) {
    loop {
        let deadline = carousel.next_autoplay_at();
        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Intent(intent)) => carousel.handle(intent, Instant::now()),
                Some(Command::Destroy(reply)) => {
                    let _ = reply.send(carousel.destroy());
                    return;
                }
                None => {
                    debug!(carousel = %carousel.name(), "carousel handle dropped");
                    return;
                }
            },
            () = wait_for(deadline) => {
                carousel.poll_autoplay(Instant::now());
            }
        }
        index_tx.send_if_modified(|index| {
            let current = carousel.current_index();
            let changed = *index != current;
            *index = current;
            changed
        });
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
