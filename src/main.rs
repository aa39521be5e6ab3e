//! Binary entry point: wire the real stdout, OS-seeded randomness, and
//! blocking sleeps into the show. No arguments, no configuration; an I/O
//! failure on stdout ends the process through the error return.

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use ansi_hello::show;
use ansi_hello::sink::StdoutSink;
use ansi_hello::timing::ThreadSleeper;

fn main() -> Result<()> {
    let mut sink = StdoutSink::new();
    let mut rng = SmallRng::from_os_rng();
    show::run(&mut sink, &mut rng, &ThreadSleeper)
}
