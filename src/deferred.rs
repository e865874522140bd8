// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Simulated remote save.
//!
//! Finalizing an exercise takes a fixed delay before it lands in the
//! history. The worker thread only hands the draft back; the history
//! write happens on the UI thread once `poll` returns it. Dropping the
//! handle cancels the save: the worker's send fails and nothing is written.

use crate::models::draft::ExerciseDraft;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::time::Duration;

/// Progress of a deferred save.
#[derive(Debug)]
pub enum SaveStatus {
    Pending,
    Ready(ExerciseDraft),
    /// The worker went away without handing the draft back.
    Lost,
}

/// Handle to a save waiting for its delay to elapse.
pub struct DeferredSave {
    receiver: Receiver<ExerciseDraft>,
    exercise_name: String,
}

impl DeferredSave {
    /// Start the delay for `draft`.
    pub fn spawn(draft: ExerciseDraft, delay: Duration) -> Self {
        let (sender, receiver) = channel();
        let exercise_name = draft.exercise_name.clone();

        std::thread::spawn(move || {
            std::thread::sleep(delay);
            if sender.send(draft).is_err() {
                log::debug!("Deferred save dropped before completion");
            }
        });

        Self {
            receiver,
            exercise_name,
        }
    }

    /// Check whether the delay has passed.
    pub fn poll(&self) -> SaveStatus {
        match self.receiver.try_recv() {
            Ok(draft) => SaveStatus::Ready(draft),
            Err(TryRecvError::Empty) => SaveStatus::Pending,
            Err(TryRecvError::Disconnected) => SaveStatus::Lost,
        }
    }

    /// Name of the exercise being saved.
    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn draft(name: &str) -> ExerciseDraft {
        ExerciseDraft {
            brand: String::new(),
            exercise_name: name.to_string(),
            target_reps: String::new(),
            sets: Vec::new(),
            image: None,
            timestamp: None,
        }
    }

    fn wait_for(pending: &DeferredSave) -> Option<ExerciseDraft> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if let SaveStatus::Ready(draft) = pending.poll() {
                return Some(draft);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_delivers_after_delay() {
        let pending = DeferredSave::spawn(draft("Squat"), Duration::from_millis(20));
        assert_eq!(pending.exercise_name(), "Squat");

        let delivered = wait_for(&pending).expect("save should complete");
        assert_eq!(delivered.exercise_name, "Squat");
    }

    #[test]
    fn test_not_ready_before_delay() {
        let pending = DeferredSave::spawn(draft("Row"), Duration::from_secs(2));
        assert!(matches!(pending.poll(), SaveStatus::Pending));
    }

    #[test]
    fn test_worker_gone_is_reported_as_lost() {
        let (sender, receiver) = channel::<ExerciseDraft>();
        drop(sender);
        let pending = DeferredSave {
            receiver,
            exercise_name: "Dips".to_string(),
        };

        assert!(matches!(pending.poll(), SaveStatus::Lost));
    }
}
