use iced::widget::{button, container, mouse_area, row, text, Column, Row};
use iced::{Center, Element, Fill, Padding};

use crate::app::Message;
use crate::filter::{ActiveFilters, FILTER_OPTIONS};
use crate::ui::theme;

/// Build the multi-select control: a header that toggles the options
/// panel, one removable tag per active filter, and a clear-all control.
pub fn view<'a>(filters: &'a ActiveFilters, open: bool) -> Element<'a, Message> {
    let header = button(text("Multi Filter").size(14))
        .on_press(Message::SelectToggled)
        .width(Fill)
        .padding(Padding::from([8, 12]))
        .style(theme::select_header);

    let mut parts: Vec<Element<'a, Message>> = vec![header.into()];

    if open {
        parts.push(options_panel(filters));
    }

    if !filters.is_empty() {
        parts.push(tag_row(filters));
    }

    Column::from_vec(parts).spacing(8).into()
}

fn options_panel<'a>(filters: &'a ActiveFilters) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = FILTER_OPTIONS
        .into_iter()
        .map(|(key, label)| {
            let active = filters.contains(key);
            let style = if active {
                theme::option_row_active as fn(&iced::Theme) -> container::Style
            } else {
                theme::option_row
            };

            let marker = if active { "✓" } else { "" };
            let content = row![
                text(marker).size(14).width(18),
                text(label).size(14),
            ]
            .spacing(4);

            let option = container(content)
                .padding(Padding::from([6, 10]))
                .width(Fill)
                .style(style);

            // The panel emits the whole new selection on every press; the
            // controller closes it afterwards.
            mouse_area(option)
                .on_press(Message::FiltersChanged(filters.toggled(key)))
                .into()
        })
        .collect();

    container(Column::from_vec(rows).spacing(2))
        .padding(4)
        .width(Fill)
        .style(theme::options_panel)
        .into()
}

fn tag_row<'a>(filters: &'a ActiveFilters) -> Element<'a, Message> {
    // Tags show the raw key name; only the rendered lines use labels.
    let mut tags: Vec<Element<'a, Message>> = filters
        .iter()
        .map(|key| {
            let remove = mouse_area(text("\u{00d7}").size(14).style(theme::tag_remove))
                .on_press(Message::FilterRemoved(key.to_string()));
            let content = row![text(key).size(13), remove].spacing(6).align_y(Center);
            container(content)
                .padding(Padding::from([4, 8]))
                .style(theme::filter_tag)
                .into()
        })
        .collect();

    tags.push(
        mouse_area(text("Clear all").size(13).style(theme::clear_all))
            .on_press(Message::FiltersCleared)
            .into(),
    );

    Row::from_vec(tags).spacing(6).align_y(Center).into()
}
