use iced::widget::{button, container, text, text_editor};
use iced::{Border, Color, Theme};

/// Dark background color for the main window
pub const BACKGROUND: Color = Color {
    r: 0.12,
    g: 0.12,
    b: 0.15,
    a: 1.0,
};

/// Slightly lighter surface color for the editor and panels
const SURFACE: Color = Color {
    r: 0.18,
    g: 0.18,
    b: 0.22,
    a: 1.0,
};

/// Accent color for the submit button and active options
const ACCENT: Color = Color {
    r: 0.1,
    g: 0.46,
    b: 0.82,
    a: 1.0,
};

/// Text color
const TEXT_PRIMARY: Color = Color {
    r: 0.9,
    g: 0.9,
    b: 0.92,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.6,
    a: 1.0,
};

const ERROR: Color = Color {
    r: 0.85,
    g: 0.35,
    b: 0.35,
    a: 1.0,
};

const BORDER: Color = Color {
    r: 0.3,
    g: 0.3,
    b: 0.35,
    a: 1.0,
};

/// Style for the container wrapping the whole window
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the bordered box holding the filter control and the lines
pub fn results_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the payload editor
pub fn payload_editor(theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let _ = theme;
    let focused = matches!(status, text_editor::Status::Focused { .. });
    text_editor::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 8.0.into(),
        },
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color {
            r: ACCENT.r,
            g: ACCENT.g,
            b: ACCENT.b,
            a: 0.3,
        },
    }
}

/// Style for the submit button
pub fn submit_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            r: ACCENT.r * 0.8,
            g: ACCENT.g * 0.8,
            b: ACCENT.b * 0.8,
            a: 1.0,
        },
        _ => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the button that opens and closes the options panel
pub fn select_header(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let focused = matches!(status, button::Status::Hovered | button::Status::Pressed);
    button::Style {
        background: Some(SURFACE.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: if focused { ACCENT } else { BORDER },
            width: 1.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

/// Style for the panel listing the selectable options
pub fn options_panel(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: BORDER,
            width: 1.0,
            radius: 6.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for an option row (not selected)
pub fn option_row(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: None,
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for a selected option row
pub fn option_row_active(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(
            Color {
                r: ACCENT.r,
                g: ACCENT.g,
                b: ACCENT.b,
                a: 0.2,
            }
            .into(),
        ),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for one removable filter tag
pub fn filter_tag(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(
            Color {
                r: ACCENT.r,
                g: ACCENT.g,
                b: ACCENT.b,
                a: 0.25,
            }
            .into(),
        ),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 3.0.into(),
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the caption above the payload editor
pub fn caption(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

/// Style for the heading above the rendered lines
pub fn heading(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for the error message
pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style { color: Some(ERROR) }
}

/// Style for one rendered response line
pub fn response_line(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for a tag's remove mark
pub fn tag_remove(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

/// Style for the clear-all control
pub fn clear_all(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}
