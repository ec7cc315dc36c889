//! Deferred form reset after a successful submission

use super::forms::ScheduledReset;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Runs scheduled resets as tokio tasks and hands their generations back
/// to the UI loop once they are due.
pub struct ResetTimer {
    tx: mpsc::UnboundedSender<u64>,
    rx: mpsc::UnboundedReceiver<u64>,
    pending: Vec<JoinHandle<()>>,
}

impl ResetTimer {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: Vec::new(),
        }
    }

    /// Spawn a task that reports `reset.generation` after `reset.delay`
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, reset: ScheduledReset) {
        self.pending.retain(|handle| !handle.is_finished());
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(reset.delay).await;
            // Receiver lives as long as the timer; a closed channel means shutdown
            let _ = tx.send(reset.generation);
        });
        self.pending.push(handle);
        tracing::debug!(
            generation = reset.generation,
            delay_secs = reset.delay.as_secs(),
            "reset scheduled"
        );
    }

    /// Abort every pending reset
    pub fn cancel(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
        // Drop resets that fired but were not collected yet
        while self.rx.try_recv().is_ok() {}
    }

    /// Generations whose delay has elapsed since the last call
    pub fn due(&mut self) -> Vec<u64> {
        let mut due = Vec::new();
        while let Ok(generation) = self.rx.try_recv() {
            due.push(generation);
        }
        due
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|handle| !handle.is_finished())
    }
}

impl Default for ResetTimer {
    fn default() -> Self {
        Self::new()
    }
}
