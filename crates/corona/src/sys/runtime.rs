use crate::events::AppEvent;
use async_channel::Sender;
use std::thread;
use tokio::runtime::Runtime;

/// Hosts the async config watcher off the UI thread.
pub fn start_background_services(tx: Sender<AppEvent>) {
    thread::spawn(move || match Runtime::new() {
        Ok(rt) => rt.block_on(crate::config::run_async_watcher(tx)),
        Err(e) => log::error!("failed to start background runtime: {e}"),
    });
}
