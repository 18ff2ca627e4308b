use crate::app::cli::Args;
use crate::app::config::Config;
use crate::binds::KeyBinds;
use crate::bus::{ChannelBus, Notification};
use crate::i18n::Catalog;
use crate::panel::{SettingsPanel, TB_UI_SETTINGS};
use crate::store::TomlSettingsStore;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::mpsc::UnboundedReceiver;

// Module declarations
pub mod cli;
pub mod config;
pub mod event_handlers;
pub mod logging;
pub mod main_loop;
pub mod terminal;

pub type SharedStore = Rc<RefCell<TomlSettingsStore>>;
pub type Panel = SettingsPanel<ChannelBus, SharedStore, Rc<Catalog>>;

/// Application state
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: Config,
    pub key_binds: KeyBinds,
    pub bus: ChannelBus,
    notifications: UnboundedReceiver<Notification>,
    pub store: SharedStore,
    pub catalog: Rc<Catalog>,
    pub panel: Panel,
    /// Dialogs currently announced as open, most recent last
    pub open_dialogs: Vec<String>,
    pub config_warnings: Vec<String>,
    pub show_config_warnings_popup: bool,
}

impl App {
    /// Construct a new instance of [`App`] from a loaded config and CLI overrides.
    pub fn new_with_config(mut config: Config, args: &Args) -> color_eyre::Result<Self> {
        if let Some(language) = &args.language {
            config.i18n.language = language.clone();
        }

        let store_path = match args.settings.clone().or_else(|| config.store.path.clone()) {
            Some(path) => path,
            None => TomlSettingsStore::default_path()?,
        };
        let store = Rc::new(RefCell::new(TomlSettingsStore::load(store_path)?));

        let catalog = Rc::new(Catalog::new(config.i18n.resolve()));
        let (bus, notifications) = ChannelBus::new();

        let panel = SettingsPanel::new(
            TB_UI_SETTINGS,
            bus.clone(),
            Rc::clone(&store),
            Rc::clone(&catalog),
        );

        let (global_map, dialog_map) = config.binds.build_key_maps();
        let key_binds = KeyBinds::new(global_map, dialog_map);

        Ok(Self {
            running: false,
            config,
            key_binds,
            bus,
            notifications,
            store,
            catalog,
            panel,
            open_dialogs: Vec::new(),
            config_warnings: Vec::new(),
            show_config_warnings_popup: false,
        })
    }

    pub fn dialog_open(&self) -> bool {
        !self.open_dialogs.is_empty()
    }

    /// Hand one notification to every component
    pub fn dispatch(&mut self, notification: Notification) {
        log::debug!("Dispatching {:?}", notification);
        self.panel.handle(&notification);

        if let Notification::Dialog { name, open } = notification {
            self.open_dialogs.retain(|d| *d != name);
            if open {
                self.open_dialogs.push(name);
            }
        }
    }

    /// Drain queued notifications, including any emitted while handling them
    pub fn dispatch_pending(&mut self) {
        while let Ok(notification) = self.notifications.try_recv() {
            self.dispatch(notification);
        }
    }
}
