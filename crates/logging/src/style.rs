//! crates/logging/src/style.rs
//! ANSI colouring of category labels.

use anstyle::{AnsiColor, Color, Style};

use super::levels::Category;

/// Terminal style used for a category's label.
#[must_use]
pub const fn category_style(category: Category) -> Style {
    let color = match category {
        Category::Error => AnsiColor::BrightRed,
        Category::Info => AnsiColor::BrightCyan,
        Category::Task => AnsiColor::BrightGreen,
        Category::Alert => AnsiColor::BrightYellow,
        Category::Notice => AnsiColor::BrightBlue,
        Category::Bench => AnsiColor::BrightMagenta,
    };
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// Wraps `text` in the escape sequences for `category`'s colour.
#[must_use]
pub fn paint(text: &str, category: Category) -> String {
    let style = category_style(category);
    format!("{}{text}{}", style.render(), style.render_reset())
}
