use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use strum::{Display, EnumIter, IntoEnumIterator};
use thong_ratatui_extra::thematize::Thematize;

#[derive(Clone, Copy, Default, Debug, Display, EnumIter, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Dark,
    Monochrome,
}

impl std::str::FromStr for ThemeName {
    type Err = crate::Error;

    fn from_str(theme_name: &str) -> crate::Result<Self> {
        Self::iter()
            .find(|theme| theme.to_string().eq_ignore_ascii_case(theme_name.trim()))
            .ok_or_else(|| crate::Error::UnknownTheme(theme_name.to_string()))
    }
}

impl ThemeName {
    pub fn list() -> Vec<String> {
        Self::iter().map(|theme| theme.to_string()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub text: Option<Color>,
    pub bg: Option<Color>,
    pub dim: Option<Color>,
    pub error: Color,
    pub button_bg: Option<Color>,
    pub border_type: BorderType,
}

impl Theme {
    pub fn new(theme_name: ThemeName) -> Theme {
        match theme_name {
            ThemeName::Dark => Theme {
                text: Some(Color::Rgb(0xf9, 0xfa, 0xfb)),
                bg: Some(Color::Rgb(0x11, 0x18, 0x27)),
                dim: Some(Color::Rgb(0x9c, 0xa3, 0xaf)),
                error: Color::Rgb(0xef, 0x44, 0x44),
                button_bg: Some(Color::Rgb(0x25, 0x63, 0xeb)),
                border_type: BorderType::Rounded,
            },
            ThemeName::Monochrome => Theme {
                text: None,
                bg: None,
                dim: None,
                error: Color::Red,
                button_bg: None,
                border_type: BorderType::Plain,
            },
        }
    }
}

impl Thematize for Theme {
    fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(text) = self.text {
            style = style.fg(text);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        style
    }

    fn style_dim(&self) -> Style {
        match self.dim {
            Some(dim) => self.style().fg(dim),
            None => self.style().add_modifier(Modifier::DIM),
        }
    }

    fn error(&self) -> Style {
        self.style().fg(self.error)
    }

    fn cursor(&self) -> Style {
        self.style().add_modifier(Modifier::REVERSED)
    }

    fn border_type(&self) -> BorderType {
        self.border_type
    }

    fn button_focused(&self) -> Style {
        match self.button_bg {
            Some(bg) => self.style().bg(bg).add_modifier(Modifier::BOLD),
            None => self
                .style()
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        }
    }

    fn button_notfocused(&self) -> Style {
        self.style()
    }

    fn boxed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn theme_names_parse() {
        assert_eq!(ThemeName::from_str("Dark").unwrap(), ThemeName::Dark);
        assert_eq!(ThemeName::from_str("monochrome").unwrap(), ThemeName::Monochrome);
        assert!(matches!(
            ThemeName::from_str("Neon"),
            Err(crate::Error::UnknownTheme(name)) if name == "Neon"
        ));
        assert_eq!(ThemeName::list(), vec!["Dark", "Monochrome"]);
    }

    #[test]
    fn monochrome_focus_is_reversed() {
        let theme = Theme::new(ThemeName::Monochrome);

        assert!(theme
            .button_focused()
            .add_modifier
            .contains(Modifier::REVERSED));
        assert_eq!(theme.style(), Style::default());
    }
}
