//! Starting the engine on its worker thread.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::{Bridge, BridgeConfig, Console, Error, HostInbox};

/// An engine main loop.
///
/// Runs until it decides to stop or until [`Console::read_line`] reports closed input.
pub trait Engine: Send + 'static {
    fn run(self, console: &mut dyn Console, args: &[String]);
}

impl<F> Engine for F
where
    F: FnOnce(&mut dyn Console, &[String]) + Send + 'static,
{
    #[inline]
    fn run(self, console: &mut dyn Console, args: &[String]) {
        self(console, args)
    }
}

/// Owner of the running engine.
///
/// Dropping the handle leaves the worker running.
#[derive(Debug)]
pub struct EngineHandle {
    bridge: Arc<Bridge>,
    worker: JoinHandle<()>,
}

impl EngineHandle {
    /// Hand `text` to the engine, fire and forget.
    #[inline]
    pub fn send_to_engine(&self, text: impl Into<String>) {
        self.bridge.send_to_engine(text);
    }

    /// Shared handle to the bridge, for components that submit input on their own.
    #[inline]
    pub fn bridge(&self) -> Arc<Bridge> {
        Arc::clone(&self.bridge)
    }

    pub fn is_running(&self) -> bool {
        !self.worker.is_finished()
    }

    /// Close the engine's input and wait for its loop to return.
    pub fn shutdown(self) -> Result<(), Error> {
        tracing::info!("shutting down engine");
        self.bridge.close();
        self.worker.join().map_err(|_| Error::WorkerPanicked)
    }
}

/// Start `engine` on a worker thread, delivering its output to the returned [`HostInbox`].
pub fn launch<E: Engine>(engine: E, config: BridgeConfig) -> Result<(EngineHandle, HostInbox), Error> {
    let (dispatch, inbox) = HostInbox::channel();
    let handle = launch_with(engine, config, dispatch)?;

    Ok((handle, inbox))
}

/// Start `engine` on a worker thread, delivering its output through `dispatch`.
///
/// `dispatch` runs on the worker thread; it should only hand the unit to the host's scheduler.
pub fn launch_with<E: Engine>(
    engine: E,
    config: BridgeConfig,
    dispatch: impl Fn(String) + Send + Sync + 'static,
) -> Result<EngineHandle, Error> {
    let BridgeConfig {
        framing,
        worker_name,
        args,
    } = config;

    // the bridge must exist before the worker's first read_line
    let bridge = Arc::new(Bridge::new(framing, dispatch));
    let mut console = Arc::clone(&bridge);

    let worker = thread::Builder::new()
        .name(worker_name.clone())
        .spawn(move || {
            tracing::info!(worker = %worker_name, ?args, %framing, "engine started");
            engine.run(&mut console, &args);
            tracing::info!(worker = %worker_name, "engine exited");
        })
        .map_err(Error::Spawn)?;

    Ok(EngineHandle { bridge, worker })
}
