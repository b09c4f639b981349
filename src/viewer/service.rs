// SPDX-License-Identifier: MPL-2.0
//! Async front-end for the viewer controller.
//!
//! [`ViewerService`] moves a controller into a Tokio task and feeds it
//! commands from an unbounded queue. Each command is handled to completion,
//! including player release and creation, before the next one is dequeued,
//! so producers (gesture stream, tap handler, gallery) can never interleave
//! two player creations.
//!
//! Observers follow the viewer through a `watch` channel of
//! [`ViewerSnapshot`]s published after every command.

use super::controller::ViewerController;
use super::state::{Transition, ViewerCommand, ViewerSnapshot};
use crate::application::port::PlayerBackend;
use crate::error::{Error, Result};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

struct Request {
    command: ViewerCommand,
    /// `None` for fire-and-forget commands.
    reply: Option<oneshot::Sender<Result<Transition>>>,
}

/// Handle to a running viewer task.
pub struct ViewerService {
    commands: mpsc::UnboundedSender<Request>,
    snapshots: watch::Receiver<ViewerSnapshot>,
    task: JoinHandle<()>,
}

impl ViewerService {
    /// Spawns the viewer task on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn spawn<B>(controller: ViewerController<B>) -> Self
    where
        B: PlayerBackend + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

        let task = tokio::spawn(run(controller, command_rx, snapshot_tx));

        Self {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    /// Queues a command and waits for its transition.
    ///
    /// # Errors
    ///
    /// Returns the controller's error for this command, or
    /// [`Error::ServiceStopped`] if the task is gone.
    pub async fn dispatch(&self, command: ViewerCommand) -> Result<Transition> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(Request {
                command,
                reply: Some(reply_tx),
            })
            .map_err(|_| Error::ServiceStopped)?;
        reply_rx.await.map_err(|_| Error::ServiceStopped)?
    }

    /// Queues a command without waiting.
    ///
    /// Failures are logged and published in the next snapshot's `last_error`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServiceStopped`] if the task is gone.
    pub fn post(&self, command: ViewerCommand) -> Result<()> {
        self.commands
            .send(Request {
                command,
                reply: None,
            })
            .map_err(|_| Error::ServiceStopped)
    }

    /// Returns a receiver that sees every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewerSnapshot> {
        self.snapshots.clone()
    }

    /// Returns the most recently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ViewerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Stops accepting commands, drains the queue and waits for the task.
    ///
    /// The controller is dropped at the end of the task, releasing any live
    /// player.
    pub async fn shutdown(self) {
        let Self { commands, task, .. } = self;
        drop(commands);
        if let Err(err) = task.await {
            log::warn!("Viewer task ended abnormally: {}", err);
        }
    }
}

async fn run<B: PlayerBackend>(
    mut controller: ViewerController<B>,
    mut commands: mpsc::UnboundedReceiver<Request>,
    snapshots: watch::Sender<ViewerSnapshot>,
) {
    while let Some(Request { command, reply }) = commands.recv().await {
        log::debug!("Handling {:?}", command);
        let result = controller.handle(command);

        snapshots.send_replace(controller.snapshot());

        match reply {
            Some(reply) => {
                // receiver dropped: caller stopped waiting
                let _ = reply.send(result);
            }
            None => {
                if let Err(err) = result {
                    log::warn!("Viewer command failed: {}", err);
                }
            }
        }
    }
    log::debug!("Viewer command queue closed");
}
