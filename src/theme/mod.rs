mod colors;

use ratatui::style::Color;

pub use colors::{dark_colors, light_colors};

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// 从配置名解析（未知名称回落到 Dark）
    pub fn from_name(name: &str) -> Theme {
        match name.to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub bg_secondary: Color,
    pub highlight: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("light"), Theme::Light);
        assert_eq!(Theme::from_name("Dark"), Theme::Dark);
        // 未知名称回落到默认
        assert_eq!(Theme::from_name("Dracula"), Theme::Dark);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Theme::Dark.label(), "Dark");
        assert_eq!(Theme::Light.label(), "Light");
    }
}
