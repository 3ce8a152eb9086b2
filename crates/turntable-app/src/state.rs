//! State shared between the frame loop thread and its callers.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use turntable_core::commands::SceneCommand;
use turntable_core::state::SceneSnapshot;

/// Commands sent to the frame loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// A scene command to forward to the engine.
    Scene(SceneCommand),
    /// Stop the loop after the current frame.
    Shutdown,
}

/// Latest snapshot, written by the loop after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<SceneSnapshot>>>;

/// Handle to a running frame loop.
pub struct LoopHandle {
    pub command_tx: mpsc::Sender<LoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub thread: JoinHandle<()>,
}

impl LoopHandle {
    /// Forward a scene command. Fails once the loop has exited.
    pub fn send(&self, command: SceneCommand) -> anyhow::Result<()> {
        self.command_tx
            .send(LoopCommand::Scene(command))
            .map_err(|e| anyhow::anyhow!("frame loop stopped: {e}"))
    }

    /// Clone of the most recent snapshot, if any frame has run.
    pub fn snapshot(&self) -> Option<SceneSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Ask the loop to stop and wait for the thread to exit.
    pub fn shutdown(self) -> anyhow::Result<Option<SceneSnapshot>> {
        // The loop may already be gone (frame limit reached); that is fine.
        let _ = self.command_tx.send(LoopCommand::Shutdown);
        self.join()
    }

    /// Wait for the loop to exit on its own and return the last snapshot.
    pub fn join(self) -> anyhow::Result<Option<SceneSnapshot>> {
        self.thread
            .join()
            .map_err(|_| anyhow::anyhow!("frame loop thread panicked"))?;
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| anyhow::anyhow!("snapshot lock poisoned: {e}"))?;
        Ok(lock.clone())
    }
}
