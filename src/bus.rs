//! Notification bus connecting the UI components.
//!
//! Producers hold something implementing [`EventBus`]; the main loop owns
//! the receiving end and hands each notification to the components one at
//! a time.

use tokio::sync::mpsc;

/// Name under which the settings panel announces itself
pub const UI_SETTINGS_DIALOG: &str = "ui-settings";

/// Notifications exchanged between components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A toolbar entry was triggered
    ToolbarAction(String),
    /// Every open dialog should close
    CloseDialog,
    /// The display language changed
    LangChanged,
    /// A dialog opened or closed
    Dialog { name: String, open: bool },
}

impl Notification {
    pub fn dialog(name: &str, open: bool) -> Self {
        Notification::Dialog {
            name: name.to_string(),
            open,
        }
    }
}

/// Fire-and-forget notification sink
pub trait EventBus {
    fn emit(&self, notification: Notification);
}

/// Sending half of the application bus
#[derive(Debug, Clone)]
pub struct ChannelBus {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelBus {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventBus for ChannelBus {
    fn emit(&self, notification: Notification) {
        log::trace!("bus: {:?}", notification);
        if self.tx.send(notification).is_err() {
            log::debug!("bus receiver dropped, notification discarded");
        }
    }
}
