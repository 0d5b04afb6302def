// SHA-256 (FIPS 180-4): pad into 64-byte blocks, then fold each block into
// the eight-word hash state. Every word is read and written big-endian.

pub mod compress;
pub mod consts;
pub mod digest;
pub mod error;
pub mod ffi;
pub mod observer;
pub mod pad;

pub use crate::digest::Digest;
pub use crate::error::{Result, Sha256Error};
#[cfg(feature = "log")]
pub use crate::observer::LogObserver;
pub use crate::observer::{NoopObserver, Observer};

pub fn sha256(input: &[u8]) -> Result<Digest> {
    sha256_with_observer(input, &mut NoopObserver)
}

// Same digest as sha256(), with each pipeline stage reported to `observer`
pub fn sha256_with_observer<O: Observer + ?Sized>(input: &[u8], observer: &mut O) -> Result<Digest> {
    let message = pad::pad(input)?;
    observer.padded(&message);
    Ok(compress::compress(&message, observer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(
            sha256(b"").unwrap().to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn observer_is_called_at_every_stage() {
        #[derive(Default)]
        struct Events(Vec<String>);
        impl Observer for Events {
            fn padded(&mut self, message: &pad::PaddedMessage) {
                self.0.push(format!("padded {}", message.len()));
            }
            fn schedule(&mut self, index: usize, _schedule: &[u32; consts::SCHEDULE_LEN]) {
                self.0.push(format!("schedule {index}"));
            }
            fn block_done(&mut self, index: usize, _state: &[u32; 8]) {
                self.0.push(format!("block {index}"));
            }
        }

        let mut events = Events::default();
        let observed = sha256_with_observer(&[7u8; 56], &mut events).unwrap();
        assert_eq!(observed, sha256(&[7u8; 56]).unwrap());
        assert_eq!(
            events.0,
            ["padded 128", "schedule 0", "block 0", "schedule 1", "block 1"]
        );
    }

    #[cfg(feature = "log")]
    #[test]
    fn log_observer_does_not_change_the_digest() {
        let logged = sha256_with_observer(b"abc", &mut LogObserver).unwrap();
        assert_eq!(logged, sha256(b"abc").unwrap());
    }
}
