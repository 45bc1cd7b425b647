//! Run progress callbacks.

/// Receives updates while a driver stores a batch.
pub trait ImportProgress {
    /// `current` of `total` accepted records handled (stored or duplicate).
    fn on_record(&self, current: usize, total: usize);

    /// A run is starting, e.g. "Importing 120 room records".
    fn on_phase(&self, message: &str);

    /// Final summary line.
    fn on_complete(&self, message: &str);
}

/// Ignores everything.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_record(&self, _current: usize, _total: usize) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Reports through `log::info!`, one line every `every` records.
pub struct LogProgress {
    pub every: usize,
}

impl Default for LogProgress {
    fn default() -> Self {
        Self { every: 500 }
    }
}

impl ImportProgress for LogProgress {
    fn on_record(&self, current: usize, total: usize) {
        let step = self.every.max(1);
        if current.is_multiple_of(step) || current == total {
            log::info!("  stored {}/{}", current, total);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
