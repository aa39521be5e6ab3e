//! Animated "Hello, World" banner for ANSI/VT100 terminals.
//!
//! The library drives the whole demo: it draws a box frame, types the
//! decorated title and author credit character by character, centers the
//! payload, then scrambles it in place for 4096 iterations with random
//! colors and casing before restoring the cursor.
//!
//! Output, randomness, and pacing are all injected capabilities so the
//! complete show can run in tests with a captured byte stream, a seeded
//! generator, and no real sleeping:
//!
//! ```no_run
//! use ansi_hello::{show, sink::StdoutSink, timing::ThreadSleeper};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let mut sink = StdoutSink::new();
//! let mut rng = SmallRng::from_os_rng();
//! show::run(&mut sink, &mut rng, &ThreadSleeper).unwrap();
//! ```

pub mod animation;
pub mod ansi;
pub mod frame;
pub mod show;
pub mod sink;
pub mod timing;
pub mod title;
pub mod typewriter;

pub use sink::{CaptureSink, StdoutSink, TermSink};
pub use timing::{NoSleep, RecordingSleeper, Sleeper, ThreadSleeper};
pub use title::{Title, AUTHOR, PAYLOAD};
