pub mod home;
pub mod popup;
pub mod settings_view;
pub mod utils;

use ratatui::{Frame, style::Style, widgets::Block};

use crate::app::config::Config;
use crate::binds::KeyBinds;
use crate::bus::EventBus;
use crate::i18n::{Catalog, Translator};
use crate::panel::SettingsPanel;
use crate::store::{SettingsStore, UiSettings};

/// Draw one frame. The theme follows the committed preference, so edits in
/// the open panel only recolor the screen once they are saved.
#[allow(clippy::too_many_arguments)]
pub fn render<B, S, T>(
    frame: &mut Frame,
    panel: &SettingsPanel<B, S, T>,
    stored: &UiSettings,
    catalog: &Catalog,
    config: &Config,
    key_binds: &KeyBinds,
    config_warnings: Option<&[String]>,
) where
    B: EventBus,
    S: SettingsStore,
    T: Translator,
{
    let area = frame.area();
    let palette = config.colors.palette(stored.dark_ui);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background_color())),
        area,
    );

    if panel.is_visible() {
        settings_view::render_settings(frame, area, panel, palette, key_binds);
    } else {
        home::render_home(frame, area, stored, catalog, palette, key_binds);
    }

    if let Some(warnings) = config_warnings
        && !warnings.is_empty()
    {
        popup::render_config_warnings_popup(frame, warnings, palette);
    }
}
