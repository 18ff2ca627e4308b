//! Full-screen rendering of the settings panel.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::config::colors::PaletteConfig;
use crate::binds::{KeyBinds, UiAction};
use crate::bus::EventBus;
use crate::i18n::Translator;
use crate::panel::{SettingsPanel, SettingsRow};
use crate::store::SettingsStore;
use crate::ui::utils::{spread, truncate_by_width};

/// Text shown for a single control, in its row
fn control_text<B, S, T>(panel: &SettingsPanel<B, S, T>, row: SettingsRow) -> (String, String)
where
    B: EventBus,
    S: SettingsStore,
    T: Translator,
{
    let settings = panel.settings();
    let switch = |on: bool| {
        if on {
            format!("[{}]", panel.i18n("On"))
        } else {
            format!("[{}]", panel.i18n("Off"))
        }
    };
    let select = |key| format!("‹ {} ›", panel.sort_label(key));

    match row {
        SettingsRow::DarkUi => (panel.i18n("Use dark theme"), switch(settings.dark_ui)),
        SettingsRow::ArtistAlbumSort => (
            panel.i18n("Sort albums under artists by"),
            select(settings.artist_album_sort),
        ),
        SettingsRow::AlbumSort => (
            panel.i18n("Sort album list by"),
            select(settings.album_sort),
        ),
        SettingsRow::AutoScrollQueue => (
            panel.i18n("Auto-scroll to current track"),
            switch(settings.auto_scroll_queue),
        ),
    }
}

fn section_for(row: SettingsRow) -> &'static str {
    match row {
        SettingsRow::DarkUi => "General",
        SettingsRow::ArtistAlbumSort | SettingsRow::AlbumSort => "Browse",
        SettingsRow::AutoScrollQueue => "Queue",
    }
}

fn toolbar_line<'a>(title: &str, back_hint: &str, width: usize, palette: &PaletteConfig) -> Line<'a> {
    let left = format!(" ← {}", title);
    let right = format!("{} ", back_hint);
    Line::from(Span::styled(
        spread(&left, &right, width),
        Style::default()
            .fg(palette.toolbar_text_color())
            .bg(palette.toolbar_color())
            .add_modifier(Modifier::BOLD),
    ))
}

/// Build the list lines: section headers followed by their controls
fn list_lines<'a, B, S, T>(
    panel: &SettingsPanel<B, S, T>,
    width: usize,
    palette: &PaletteConfig,
) -> Vec<Line<'a>>
where
    B: EventBus,
    S: SettingsStore,
    T: Translator,
{
    let mut lines = Vec::new();
    let mut current_section = None;

    for row in SettingsRow::ALL {
        let section = section_for(row);
        if current_section != Some(section) {
            if current_section.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                truncate_by_width(&panel.i18n(section), width),
                Style::default()
                    .fg(palette.header_color())
                    .add_modifier(Modifier::BOLD),
            )));
            current_section = Some(section);
        }

        let (label, value) = control_text(panel, row);
        let text = spread(&format!("  {}", label), &value, width);

        let style = if row == panel.cursor() {
            Style::default()
                .fg(palette.highlight_text_color())
                .bg(palette.highlight_color())
        } else {
            let value_on = match row {
                SettingsRow::DarkUi => Some(panel.settings().dark_ui),
                SettingsRow::AutoScrollQueue => Some(panel.settings().auto_scroll_queue),
                _ => None,
            };
            match value_on {
                Some(false) => Style::default().fg(palette.switch_off_color()),
                Some(true) => Style::default().fg(palette.switch_on_color()),
                None => Style::default().fg(palette.text_color()),
            }
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    lines
}

pub fn render_settings<B, S, T>(
    frame: &mut Frame,
    area: Rect,
    panel: &SettingsPanel<B, S, T>,
    palette: &PaletteConfig,
    key_binds: &KeyBinds,
) where
    B: EventBus,
    S: SettingsStore,
    T: Translator,
{
    let [toolbar_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let back_hint = key_binds.describe(UiAction::Back).unwrap_or_default();
    let toolbar = toolbar_line(
        &panel.i18n("Settings"),
        &back_hint,
        toolbar_area.width as usize,
        palette,
    );
    frame.render_widget(Paragraph::new(toolbar), toolbar_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border_color()))
        .style(Style::default().bg(palette.background_color()));
    let inner_width = block.inner(list_area).width.saturating_sub(2) as usize;
    let lines = list_lines(panel, inner_width, palette);

    frame.render_widget(
        Paragraph::new(lines).block(block.padding(ratatui::widgets::Padding::horizontal(1))),
        list_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::binds::BindsConfig;
    use crate::app::config::colors::ColorsConfig;
    use crate::bus::{ChannelBus, Notification};
    use crate::i18n::{Catalog, Language};
    use crate::panel::TB_UI_SETTINGS;
    use crate::panel::sort::SortKey;
    use crate::store::{MemoryStore, UiSettings};
    use crate::ui::utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};
    use std::rc::Rc;

    fn render(panel: &SettingsPanel<ChannelBus, MemoryStore, Rc<Catalog>>) -> String {
        let (global, dialog) = BindsConfig::default().build_key_maps();
        let key_binds = KeyBinds::new(global, dialog);
        let colors = ColorsConfig::default();
        let mut terminal = Terminal::new(TestBackend::new(80, 14)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_settings(frame, area, panel, colors.palette(true), &key_binds)
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn open_panel(catalog: Rc<Catalog>) -> SettingsPanel<ChannelBus, MemoryStore, Rc<Catalog>> {
        let (bus, _rx) = ChannelBus::new();
        let store = MemoryStore::with(UiSettings {
            dark_ui: false,
            artist_album_sort: SortKey::ArtFlow,
            album_sort: SortKey::Album,
            auto_scroll_queue: true,
        });
        let mut panel = SettingsPanel::new(TB_UI_SETTINGS, bus, store, catalog);
        panel.handle(&Notification::ToolbarAction(TB_UI_SETTINGS.to_string()));
        panel
    }

    #[test]
    fn test_renders_sections_and_values() {
        let panel = open_panel(Rc::new(Catalog::default()));
        let text = render(&panel);

        assert!(text.contains("← Settings"));
        assert!(text.contains("Esc"));
        assert!(text.contains("General"));
        assert!(text.contains("Browse"));
        assert!(text.contains("Queue"));
        assert!(text.contains("Use dark theme"));
        assert!(text.contains("[Off]"));
        assert!(text.contains("‹ Artist, Year, Album ›"));
        assert!(text.contains("‹ Album ›"));
        assert!(text.contains("[On]"));
    }

    #[test]
    fn test_renders_translated_labels() {
        let catalog = Rc::new(Catalog::new(Language::German));
        let mut panel = open_panel(Rc::clone(&catalog));
        panel.handle(&Notification::LangChanged);
        let text = render(&panel);

        assert!(text.contains("Einstellungen"));
        assert!(text.contains("Allgemein"));
        assert!(text.contains("Interpret, Jahr, Album"));
        assert!(text.contains("[Aus]"));
    }

    #[test]
    fn test_section_order() {
        let panel = open_panel(Rc::new(Catalog::default()));
        let text = render(&panel);

        let general = text.find("General").unwrap();
        let browse = text.find("Browse").unwrap();
        let queue = text.find("Queue").unwrap();
        assert!(general < browse && browse < queue);
    }
}
