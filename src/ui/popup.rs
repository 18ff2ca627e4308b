use ratatui::{
    Frame,
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::app::config::colors::PaletteConfig;
use crate::ui::utils::{centered_rect, truncate_by_width};

/// Render config warnings popup centered on screen
pub fn render_config_warnings_popup(frame: &mut Frame, warnings: &[String], palette: &PaletteConfig) {
    let area = frame.area();

    let title = " Config Warnings ";
    let footer = "Press any key to close";

    let max_content_width = warnings
        .iter()
        .map(|w| w.width())
        .max()
        .unwrap_or(20)
        .max(title.width())
        .max(footer.width());

    // Content + padding + borders
    let popup_width = (max_content_width + 6).min(area.width.saturating_sub(4) as usize) as u16;
    let popup_height = (warnings.len() + 5).min(area.height.saturating_sub(4) as usize) as u16;
    let popup_area = centered_rect(area, popup_width, popup_height);
    let text_width = popup_width.saturating_sub(4) as usize;

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![Line::from("")];
    for warning in warnings {
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate_by_width(warning, text_width)),
            Style::default().fg(palette.text_color()),
        )));
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(footer, Style::default().fg(palette.muted_color()))).centered(),
    );

    let popup_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.highlight_color()))
        .title(Line::from(title).fg(palette.header_color()))
        .style(Style::default().bg(palette.background_color()));

    frame.render_widget(
        Paragraph::new(lines)
            .block(popup_block)
            .alignment(Alignment::Left),
        popup_area,
    );
}
