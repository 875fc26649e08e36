//! Terminal host for the bridged engine.
//!
//! Typed lines are handed to the engine through the bridge, and whatever the engine flushes is
//! printed on each poll tick. With `--stdio` the engine talks to the terminal directly instead.

use std::io::{stdin, stdout, BufRead, LineWriter, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use remora_bridge::{launch, Bridge, BridgeConfig, Core, Engine, FramingMode};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod engine;

use engine::Responder;

/// Drive a console engine through the remora bridge
///
/// The bridge holds a single pending input line; a newer line replaces one the engine has not
/// read yet. This host waits for each line to be read before sending the next, so piped input
/// is delivered in full.
#[derive(Parser, Debug)]
#[command(name = "remora")]
#[command(version)]
struct Args {
    /// How engine output is cut into units (whole-buffer, per-line)
    #[arg(long, default_value_t = FramingMode::WholeBuffer)]
    framing: FramingMode,

    /// Milliseconds between polls of the engine's output
    #[arg(long, default_value = "50")]
    poll_interval_ms: u64,

    /// Run the engine directly on stdin/stdout, without the bridge
    #[arg(long)]
    stdio: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    // stdout belongs to the engine
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if args.stdio {
        let mut core = Core::new(stdin().lock(), stdout().lock());
        Responder::default().run(&mut core, &[]);
        return Ok(());
    }

    let config = BridgeConfig::default().with_framing(args.framing);
    let (handle, inbox) = launch(Responder::default(), config)?;

    let bridge = handle.bridge();
    let interval = Duration::from_millis(args.poll_interval_ms);
    thread::Builder::new().name("stdin".to_owned()).spawn(move || {
        forward_input(stdin().lock(), &bridge, interval);
        tracing::debug!("stdin closed");
        bridge.close();
    })?;

    let mut out = LineWriter::new(stdout().lock());

    loop {
        let running = handle.is_running();

        for unit in inbox.poll() {
            out.write_all(unit.as_bytes())?;
        }
        out.flush()?;

        if !running {
            break;
        }

        thread::sleep(interval);
    }

    handle.shutdown()?;
    Ok(())
}

/// Send each line of `input` to the engine once it has read the previous one.
fn forward_input(input: impl BufRead, bridge: &Bridge, interval: Duration) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                tracing::warn!(%error, "stdin read failed");
                break;
            }
        };

        while bridge.has_pending_input() && !bridge.is_closed() {
            thread::sleep(interval);
        }
        bridge.send_to_engine(line);
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn piped_input_is_not_overwritten() {
        let (handle, inbox) = launch(Responder::default(), BridgeConfig::default()).unwrap();
        let bridge = handle.bridge();

        forward_input(
            Cursor::new("uci\nisready\nquit\n"),
            &bridge,
            Duration::from_millis(1),
        );
        handle.shutdown().unwrap();

        let out = inbox.poll().concat();
        assert!(out.starts_with("id name remora"), "{out}");
        assert!(out.ends_with("uciok\nreadyok\n"), "{out}");
    }
}
