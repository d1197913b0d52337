// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Inline form error.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Service reachable.
pub fn success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_500),
    }
}

/// Secondary text (helper lines, placeholders).
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}
