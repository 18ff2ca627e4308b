use std::time::Duration;

use ratatui::DefaultTerminal;

use super::App;
use crate::app::event_handlers::EventHandlers;
use crate::store::SettingsStore;

/// How long to wait for terminal input before checking the bus again
const INPUT_POLL_INTERVAL_MS: u64 = 20;

/// Trait for main application loop
pub trait AppMainLoop {
    async fn run(self, terminal: DefaultTerminal) -> color_eyre::Result<()>
    where
        Self: Sized;
}

#[cfg(unix)]
type TerminateSignal = tokio::signal::unix::Signal;

#[cfg(unix)]
fn terminate_signal() -> color_eyre::Result<TerminateSignal> {
    use tokio::signal::unix::{SignalKind, signal};
    Ok(signal(SignalKind::terminate())?)
}

#[cfg(unix)]
async fn terminated(signal: &mut TerminateSignal) {
    signal.recv().await;
}

#[cfg(not(unix))]
struct TerminateSignal;

#[cfg(not(unix))]
fn terminate_signal() -> color_eyre::Result<TerminateSignal> {
    Ok(TerminateSignal)
}

#[cfg(not(unix))]
async fn terminated(_signal: &mut TerminateSignal) {
    std::future::pending::<()>().await
}

impl AppMainLoop for App {
    /// Run the application's main loop.
    async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let mut sigterm = terminate_signal()?;

        log::info!("Entering event-driven main loop");

        while self.running {
            let stored = self.store.ui_settings();
            let warnings = self
                .show_config_warnings_popup
                .then_some(self.config_warnings.as_slice());
            terminal.draw(|frame| {
                crate::ui::render(
                    frame,
                    &self.panel,
                    &stored,
                    &self.catalog,
                    &self.config,
                    &self.key_binds,
                    warnings,
                )
            })?;

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(INPUT_POLL_INTERVAL_MS)) => {
                    while crossterm::event::poll(Duration::ZERO)? {
                        let event = crossterm::event::read()?;
                        self.handle_crossterm_event(event);
                    }
                }

                Some(notification) = self.notifications.recv() => {
                    self.dispatch(notification);
                    self.dispatch_pending();
                }

                _ = terminated(&mut sigterm) => {
                    log::info!("Received SIGTERM, shutting down gracefully");
                    self.quit();
                }
            }
        }

        log::info!("Main loop finished");
        Ok(())
    }
}
