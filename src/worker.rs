//! Run a move selection off the calling thread.
//!
//! Higher levels can take a noticeable time to answer, so an interactive
//! caller hands the selector and its rules engine to a worker thread and
//! collects both back together with the answer. Ownership moves with them,
//! so nothing else can touch the position while the search runs.

use std::thread::{self, JoinHandle};

use rand::Rng;

use crate::error::WorkerError;
use crate::rules::Rules;
use crate::selector::MoveSelector;

/// Everything handed back by a finished worker
pub struct Selection<G, R: Rules> {
    pub selector: MoveSelector<G>,
    pub rules: R,
    pub best_move: Option<R::Move>,
}

pub struct PendingSelection<G, R: Rules> {
    handle: JoinHandle<Selection<G, R>>,
}

impl<G, R: Rules> PendingSelection<G, R> {
    /// Non-blocking poll
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the worker is done
    pub fn wait(self) -> Result<Selection<G, R>, WorkerError> {
        self.handle.join().map_err(|_| WorkerError::Panicked)
    }
}

pub fn spawn_selection<G, R>(mut selector: MoveSelector<G>, mut rules: R) -> PendingSelection<G, R>
where
    G: Rng + Send + 'static,
    R: Rules + Send + 'static,
    R::Move: Send + 'static,
{
    let handle = thread::spawn(move || {
        let best_move = selector.select_move(&mut rules);
        Selection {
            selector,
            rules,
            best_move,
        }
    });
    PendingSelection { handle }
}
