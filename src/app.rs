use iced::widget::{column, container, scrollable, text, text_editor, Column};
use iced::{Element, Fill, Padding, Task, Theme};
use serde_json::Value;

use crate::api::Api;
use crate::config::Config;
use crate::filter::ActiveFilters;
use crate::ui::{filter_select, payload_input, response_view, theme};

/// The one message shown for both parse and request failures
const GENERIC_ERROR: &str = "Invalid input or server error";

pub struct State {
    api: Api,
    input: text_editor::Content,
    response: Option<Value>,
    filters: ActiveFilters,
    error: Option<String>,
    select_open: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputEdited(text_editor::Action),
    Submit,
    Completed(Result<Value, String>),
    SelectToggled,
    FiltersChanged(Vec<String>),
    FilterRemoved(String),
    FiltersCleared,
}

impl State {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let state = Self {
            api: Api::new(&config.api.base_url),
            input: text_editor::Content::new(),
            response: None,
            filters: ActiveFilters::new(),
            error: None,
            select_open: false,
        };
        (state, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::InputEdited(action) => {
                self.input.perform(action);
                Task::none()
            }
            Message::Submit => {
                // Every attempt starts clean; at most one of response and
                // error is set when it finishes.
                self.error = None;
                self.response = None;

                match serde_json::from_str::<Value>(&self.input.text()) {
                    Ok(payload) => {
                        tracing::info!("Submitting payload to {}", self.api.endpoint());
                        let api = self.api.clone();
                        // A submit while another is in flight is not
                        // blocked; the later completion wins.
                        Task::perform(
                            async move { api.submit(payload).await.map_err(|e| e.to_string()) },
                            Message::Completed,
                        )
                    }
                    Err(e) => {
                        tracing::warn!("Rejected payload: {}", e);
                        self.error = Some(GENERIC_ERROR.to_string());
                        Task::none()
                    }
                }
            }
            Message::Completed(Ok(body)) => {
                self.response = Some(body);
                Task::none()
            }
            Message::Completed(Err(e)) => {
                tracing::error!("Request failed: {}", e);
                self.error = Some(GENERIC_ERROR.to_string());
                Task::none()
            }
            Message::SelectToggled => {
                self.select_open = !self.select_open;
                Task::none()
            }
            Message::FiltersChanged(keys) => {
                self.filters.replace(keys);
                // The options panel does not close on its own, so force it
                // shut after every change.
                self.select_open = false;
                Task::none()
            }
            Message::FilterRemoved(key) => {
                self.filters.remove(&key);
                Task::none()
            }
            Message::FiltersCleared => {
                self.filters.clear();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut content: Vec<Element<'_, Message>> = vec![payload_input::view(&self.input)];

        if let Some(error) = &self.error {
            content.push(text(error.as_str()).size(14).style(theme::error_text).into());
        }

        if let Some(response) = &self.response {
            let results = column![
                filter_select::view(&self.filters, self.select_open),
                text("Filtered Response").size(14).style(theme::heading),
                response_view::view(Some(response), &self.filters),
            ]
            .spacing(8);

            content.push(
                container(results)
                    .padding(Padding::new(12.0))
                    .width(Fill)
                    .style(theme::results_container)
                    .into(),
            );
        }

        let body = Column::from_vec(content)
            .spacing(12)
            .padding(Padding::new(16.0));

        container(scrollable(body))
            .width(Fill)
            .height(Fill)
            .style(theme::main_container)
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> State {
        State::new(&Config::default()).0
    }

    fn set_input(state: &mut State, input: &str) {
        state.input = text_editor::Content::with_text(input);
    }

    #[test]
    fn submit_with_invalid_json_sets_the_generic_error() {
        let mut s = state();
        set_input(&mut s, "not json");
        let _ = s.update(Message::Submit);
        assert_eq!(s.error.as_deref(), Some(GENERIC_ERROR));
        assert!(s.response.is_none());
    }

    #[test]
    fn submit_clears_the_previous_error_and_response() {
        let mut s = state();
        s.error = Some(GENERIC_ERROR.to_string());
        s.response = Some(json!({"numbers": []}));
        set_input(&mut s, r#"{"data":["M","1"]}"#);
        let _ = s.update(Message::Submit);
        assert!(s.error.is_none());
        assert!(s.response.is_none());
    }

    #[test]
    fn successful_completion_sets_the_response_only() {
        let mut s = state();
        let _ = s.update(Message::Completed(Ok(json!({"numbers": ["334"]}))));
        assert!(s.response.is_some());
        assert!(s.error.is_none());
    }

    #[test]
    fn failed_completion_sets_the_error_only() {
        let mut s = state();
        let _ = s.update(Message::Completed(Err("connection refused".to_string())));
        assert_eq!(s.error.as_deref(), Some(GENERIC_ERROR));
        assert!(s.response.is_none());
    }

    #[test]
    fn response_and_error_are_never_both_set() {
        let mut s = state();
        let _ = s.update(Message::Completed(Ok(json!({"alphabets": ["M"]}))));
        set_input(&mut s, r#"{"data":[]}"#);
        let _ = s.update(Message::Submit);
        let _ = s.update(Message::Completed(Err("504".to_string())));
        assert!(s.response.is_none());
        assert_eq!(s.error.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn changing_filters_closes_the_options_panel() {
        let mut s = state();
        s.select_open = true;
        let _ = s.update(Message::FiltersChanged(vec!["numbers".to_string()]));
        assert!(!s.select_open);
        assert!(s.filters.contains("numbers"));
    }

    #[test]
    fn removing_a_filter_leaves_the_panel_state_alone() {
        let mut s = state();
        s.select_open = true;
        let _ = s.update(Message::FiltersChanged(vec![
            "numbers".to_string(),
            "alphabets".to_string(),
        ]));
        let _ = s.update(Message::FilterRemoved("numbers".to_string()));
        assert_eq!(s.filters.iter().collect::<Vec<_>>(), ["alphabets"]);
        assert!(!s.select_open);
    }

    #[test]
    fn clearing_filters_leaves_response_and_error_alone() {
        let mut s = state();
        s.response = Some(json!({"numbers": []}));
        let _ = s.update(Message::FiltersChanged(vec!["numbers".to_string()]));
        let _ = s.update(Message::FiltersCleared);
        assert!(s.filters.is_empty());
        assert!(s.response.is_some());
        assert!(s.error.is_none());
    }

    #[test]
    fn filters_persist_across_submissions() {
        let mut s = state();
        let _ = s.update(Message::FiltersChanged(vec!["numbers".to_string()]));
        set_input(&mut s, r#"{"data":[]}"#);
        let _ = s.update(Message::Submit);
        let _ = s.update(Message::Completed(Ok(json!({"numbers": ["4"]}))));
        assert!(s.filters.contains("numbers"));
    }
}
