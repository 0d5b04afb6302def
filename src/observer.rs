// Hooks called after padding, after each schedule expansion and after each
// block; sha256() passes NoopObserver so the core has no side effects

use crate::consts::SCHEDULE_LEN;
use crate::pad::PaddedMessage;

pub trait Observer {
    fn padded(&mut self, _message: &PaddedMessage) {}

    fn schedule(&mut self, _index: usize, _schedule: &[u32; SCHEDULE_LEN]) {}

    fn block_done(&mut self, _index: usize, _state: &[u32; 8]) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn padded(&mut self, message: &PaddedMessage) {
        (**self).padded(message)
    }

    fn schedule(&mut self, index: usize, schedule: &[u32; SCHEDULE_LEN]) {
        (**self).schedule(index, schedule)
    }

    fn block_done(&mut self, index: usize, state: &[u32; 8]) {
        (**self).block_done(index, state)
    }
}

// Trace-level log output of every pipeline event
#[cfg(feature = "log")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

#[cfg(feature = "log")]
impl Observer for LogObserver {
    fn padded(&mut self, message: &PaddedMessage) {
        log::trace!(
            target: "sha256_rust",
            "padded message: {} bytes, {} blocks, {}",
            message.len(),
            message.num_chunks(),
            hex::encode(message.as_bytes())
        );
    }

    fn schedule(&mut self, index: usize, schedule: &[u32; SCHEDULE_LEN]) {
        if log::log_enabled!(target: "sha256_rust", log::Level::Trace) {
            let words: Vec<String> = schedule.iter().map(|w| format!("{w:08x}")).collect();
            log::trace!(target: "sha256_rust", "block {index} schedule: {}", words.join(" "));
        }
    }

    fn block_done(&mut self, index: usize, state: &[u32; 8]) {
        log::trace!(target: "sha256_rust", "block {index} state: {state:08x?}");
    }
}
