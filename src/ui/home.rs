use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::config::colors::PaletteConfig;
use crate::binds::{KeyBinds, UiAction};
use crate::i18n::{Catalog, Translator};
use crate::store::UiSettings;
use crate::ui::utils::spread;

/// Main screen: the committed preferences and how to change them
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    stored: &UiSettings,
    catalog: &Catalog,
    palette: &PaletteConfig,
    key_binds: &KeyBinds,
) {
    let [toolbar_area, body_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    let title = format!(" uisettings {}", env!("CARGO_PKG_VERSION"));
    let language = format!("{} ", catalog.language().name());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            spread(&title, &language, toolbar_area.width as usize),
            Style::default()
                .fg(palette.toolbar_text_color())
                .bg(palette.toolbar_color())
                .add_modifier(Modifier::BOLD),
        ))),
        toolbar_area,
    );

    let on_off = |on: bool| {
        if on {
            catalog.translate("On")
        } else {
            catalog.translate("Off")
        }
    };
    let rows = [
        (catalog.translate("Use dark theme"), on_off(stored.dark_ui)),
        (
            catalog.translate("Sort albums under artists by"),
            catalog.translate(stored.artist_album_sort.label()),
        ),
        (
            catalog.translate("Sort album list by"),
            catalog.translate(stored.album_sort.label()),
        ),
        (
            catalog.translate("Auto-scroll to current track"),
            on_off(stored.auto_scroll_queue),
        ),
        (
            catalog.translate("Language"),
            catalog.language().name().to_string(),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border_color()))
        .title(Line::from(format!(" {} ", catalog.translate("Settings"))).fg(palette.header_color()))
        .style(Style::default().bg(palette.background_color()));
    let width = block.inner(body_area).width.saturating_sub(2) as usize;

    let lines: Vec<Line> = rows
        .iter()
        .map(|(label, value)| {
            Line::from(Span::styled(
                spread(&format!(" {}", label), value, width),
                Style::default().fg(palette.text_color()),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), body_area);

    if let Some(key) = key_binds.describe(UiAction::OpenSettings) {
        let hint = format!(
            "{} {} {}",
            catalog.translate("Press"),
            key,
            catalog.translate("to open settings")
        );
        frame.render_widget(
            Paragraph::new(Line::from(hint).fg(palette.muted_color())).centered(),
            hint_area,
        );
    }
}
