use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Palettes for the two themes, picked by the stored dark-theme preference
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColorsConfig {
    #[serde(default = "PaletteConfig::default_dark")]
    pub dark: PaletteConfig,
    #[serde(default = "PaletteConfig::default_light")]
    pub light: PaletteConfig,
}

impl ColorsConfig {
    pub fn palette(&self, dark_ui: bool) -> &PaletteConfig {
        if dark_ui { &self.dark } else { &self.light }
    }
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            dark: PaletteConfig::default_dark(),
            light: PaletteConfig::default_light(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaletteConfig {
    pub background: String,
    pub text: String,
    pub muted: String,
    pub border: String,
    pub toolbar: String,
    pub toolbar_text: String,
    pub header: String,
    pub highlight: String,
    pub highlight_text: String,
    pub switch_on: String,
    pub switch_off: String,
}

impl PaletteConfig {
    /// Parse a hex color string like "#FF5500" into RGB values
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    fn color(hex: &str, fallback: Color) -> Color {
        Self::parse_hex(hex)
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(fallback)
    }

    pub fn background_color(&self) -> Color {
        Self::color(&self.background, Color::Reset)
    }

    pub fn text_color(&self) -> Color {
        Self::color(&self.text, Color::White)
    }

    pub fn muted_color(&self) -> Color {
        Self::color(&self.muted, Color::Gray)
    }

    pub fn border_color(&self) -> Color {
        Self::color(&self.border, Color::White)
    }

    pub fn toolbar_color(&self) -> Color {
        Self::color(&self.toolbar, Color::Blue)
    }

    pub fn toolbar_text_color(&self) -> Color {
        Self::color(&self.toolbar_text, Color::White)
    }

    pub fn header_color(&self) -> Color {
        Self::color(&self.header, Color::Cyan)
    }

    pub fn highlight_color(&self) -> Color {
        Self::color(&self.highlight, Color::Yellow)
    }

    pub fn highlight_text_color(&self) -> Color {
        Self::color(&self.highlight_text, Color::Black)
    }

    pub fn switch_on_color(&self) -> Color {
        Self::color(&self.switch_on, Color::Green)
    }

    pub fn switch_off_color(&self) -> Color {
        Self::color(&self.switch_off, Color::DarkGray)
    }

    fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            text: "#e0e0e0".to_string(),
            muted: "#8a8a8a".to_string(),
            border: "#fae280".to_string(),
            toolbar: "#2a3f5f".to_string(),
            toolbar_text: "#ffffff".to_string(),
            header: "#82b1ff".to_string(),
            highlight: "#fae280".to_string(),
            highlight_text: "#1e1e1e".to_string(),
            switch_on: "#69f0ae".to_string(),
            switch_off: "#616161".to_string(),
        }
    }

    fn default_light() -> Self {
        Self {
            background: "#fafafa".to_string(),
            text: "#212121".to_string(),
            muted: "#757575".to_string(),
            border: "#1976d2".to_string(),
            toolbar: "#1976d2".to_string(),
            toolbar_text: "#ffffff".to_string(),
            header: "#1565c0".to_string(),
            highlight: "#1976d2".to_string(),
            highlight_text: "#ffffff".to_string(),
            switch_on: "#2e7d32".to_string(),
            switch_off: "#9e9e9e".to_string(),
        }
    }
}
