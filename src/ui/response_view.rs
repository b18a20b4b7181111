use iced::widget::{column, text, Column};
use iced::Element;
use serde_json::Value;

use crate::app::Message;
use crate::filter::{self, ActiveFilters};
use crate::ui::theme;

/// Build the filtered response lines, one row per active filter
pub fn view<'a>(response: Option<&'a Value>, filters: &'a ActiveFilters) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = filter::render_lines(response, filters)
        .map(|line| text(line).size(14).style(theme::response_line).into())
        .collect();

    if rows.is_empty() {
        return column![].into();
    }

    Column::from_vec(rows).spacing(4).into()
}
