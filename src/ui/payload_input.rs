use iced::widget::{button, column, text, text_editor};
use iced::{Center, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Example payload shown while the editor is empty
const PLACEHOLDER: &str = r#"{"data":["M","1","334","4","B"]}"#;

/// Build the payload editor with its caption and submit button
pub fn view(input: &text_editor::Content) -> Element<'_, Message> {
    let caption = text("API Input").size(13).style(theme::caption);

    let editor = text_editor(input)
        .placeholder(PLACEHOLDER)
        .on_action(Message::InputEdited)
        .height(140)
        .padding(12)
        .size(15)
        .style(theme::payload_editor);

    let submit = button(text("Submit").size(15).width(Fill).align_x(Center))
        .on_press(Message::Submit)
        .width(Fill)
        .padding(10)
        .style(theme::submit_button);

    column![caption, editor, submit].spacing(8).into()
}
