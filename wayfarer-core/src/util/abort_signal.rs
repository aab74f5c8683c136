use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

/// cooperative cancellation flag shared between a search and its caller.
/// cloned signals observe the same flag. an optional deadline makes the
/// signal report aborted once it has passed.
#[derive(Debug, Clone, Default)]
pub struct AbortSignal {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl AbortSignal {
    /// a signal that only aborts when [`AbortSignal::abort`] is called.
    pub fn none() -> AbortSignal {
        AbortSignal::default()
    }

    pub fn with_deadline(timeout: Duration) -> AbortSignal {
        AbortSignal {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn abort(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}
