//! Real-time pacing between ticks.
//!
//! The controller never sleeps directly. It asks its `Pacer` to pause after
//! each tick, so production can block the thread while tests run a full cycle
//! instantly.

use std::thread;
use std::time::Duration;

/// Environment capability: wait for a while between ticks.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

/// Blocks the current thread for the requested duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _duration: Duration) {}
}

/// Remembers every requested pause without waiting.
#[derive(Clone, Debug, Default)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    /// Create a pacer with no recorded pauses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, oldest first.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    /// Sum of all requested pauses.
    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn recording_pacer_collects_pauses() {
        let mut pacer = RecordingPacer::new();
        pacer.pause(Duration::from_millis(100));
        pacer.pause(Duration::from_millis(50));

        assert_eq!(pacer.pauses().len(), 2);
        assert_eq!(pacer.total(), Duration::from_millis(150));
    }

    #[test]
    fn borrowed_pacer_forwards_to_owner() {
        fn drive<P: Pacer>(mut pacer: P) {
            pacer.pause(Duration::from_millis(10));
        }

        let mut pacer = RecordingPacer::new();
        drive(&mut pacer);
        assert_eq!(pacer.pauses(), &[Duration::from_millis(10)]);
    }

    #[test]
    fn thread_pacer_waits_at_least_the_duration() {
        let start = Instant::now();
        ThreadPacer.pause(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn boxed_pacer_is_a_pacer() {
        let mut pacer: Box<dyn Pacer> = Box::new(NoPause);
        pacer.pause(Duration::from_secs(60));
    }
}
