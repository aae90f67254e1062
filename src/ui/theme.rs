use ratatui::style::Color;

use crate::telemetry::descriptors::Tone;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub status_ok: Color,
    pub status_err: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    pub chart_cpu: Color,
    pub chart_memory: Color,
    pub chart_axis: Color,
    pub tones: [Color; 5],
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolves a descriptor color token against this theme.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Emerald => self.tones[0],
            Tone::Blue => self.tones[1],
            Tone::Purple => self.tones[2],
            Tone::Amber => self.tones[3],
            Tone::Slate => self.tones[4],
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Rgb(16, 185, 129),
            header_accent_fg: Color::Rgb(15, 23, 42),
            status_ok: Color::Rgb(52, 211, 153),
            status_err: Color::Rgb(248, 113, 113),
            statusbar_bg: Color::Rgb(15, 23, 42),
            overlay_border: Color::Rgb(51, 65, 85),
            text_primary: Color::White,
            text_secondary: Color::Rgb(148, 163, 184),
            pill_key_bg: Color::Rgb(52, 211, 153),
            pill_key_fg: Color::Rgb(15, 23, 42),
            pill_desc_fg: Color::Rgb(226, 232, 240),
            surface_bg: Color::Rgb(30, 41, 59),
            chart_cpu: Color::Rgb(16, 185, 129),
            chart_memory: Color::Rgb(59, 130, 246),
            chart_axis: Color::Rgb(100, 116, 139),
            tones: [
                Color::Rgb(52, 211, 153),
                Color::Rgb(96, 165, 250),
                Color::Rgb(192, 132, 252),
                Color::Rgb(251, 191, 36),
                Color::Rgb(148, 163, 184),
            ],
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Rgb(5, 150, 105),
            header_accent_fg: Color::White,
            status_ok: Color::Rgb(0, 120, 0),
            status_err: Color::Red,
            statusbar_bg: Color::Rgb(220, 220, 220),
            overlay_border: Color::Rgb(150, 150, 150),
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            pill_key_bg: Color::Rgb(5, 150, 105),
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::Rgb(200, 200, 200),
            chart_cpu: Color::Rgb(4, 120, 87),
            chart_memory: Color::Rgb(37, 99, 235),
            chart_axis: Color::Rgb(100, 100, 100),
            tones: [
                Color::Rgb(4, 120, 87),
                Color::Rgb(29, 78, 216),
                Color::Rgb(126, 34, 206),
                Color::Rgb(180, 83, 9),
                Color::Rgb(71, 85, 105),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(Theme::from_config("neon").name, "dark");
        assert_eq!(Theme::from_config("LIGHT").name, "light");
    }

    #[test]
    fn next_alternates() {
        let theme = Theme::dark();
        assert_eq!(theme.next().name, "light");
        assert_eq!(theme.next().next().name, "dark");
    }

    #[test]
    fn tones_are_distinct_within_theme() {
        let theme = Theme::dark();
        assert_ne!(theme.tone(Tone::Emerald), theme.tone(Tone::Amber));
        assert_ne!(theme.tone(Tone::Blue), theme.tone(Tone::Purple));
    }
}
