use serde_json::Value;

/// The fixed options offered by the filter control: response key and the
/// label shown in the options panel.
pub const FILTER_OPTIONS: [(&str, &str); 3] = [
    ("numbers", "Numbers"),
    ("alphabets", "Alphabets"),
    ("highest_lowercase_alphabet", "Highest Lower Alphabet"),
];

/// Ordered set of the filter keys currently selected for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    keys: Vec<String>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Replace the whole selection. Duplicates keep their first position.
    pub fn replace(&mut self, keys: Vec<String>) {
        self.keys.clear();
        for key in keys {
            if !self.contains(&key) {
                self.keys.push(key);
            }
        }
    }

    /// Remove one key, keeping the order of the remainder.
    pub fn remove(&mut self, key: &str) {
        self.keys.retain(|k| k != key);
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// The selection with `key` toggled, as a new whole set. The select
    /// widget emits the full selection on every change, so toggling is
    /// computed here rather than in the controller.
    pub fn toggled(&self, key: &str) -> Vec<String> {
        if self.contains(key) {
            self.keys.iter().filter(|k| *k != key).cloned().collect()
        } else {
            let mut keys = self.keys.clone();
            keys.push(key.to_string());
            keys
        }
    }
}

/// One display line per active filter, in selection order. A key missing
/// from the response renders with an empty value; an absent response
/// yields no lines at all.
pub fn render_lines<'a>(
    response: Option<&'a Value>,
    filters: &'a ActiveFilters,
) -> impl Iterator<Item = String> + 'a {
    response.into_iter().flat_map(move |body| {
        filters
            .iter()
            .map(move |key| format!("{}: {}", line_label(key), render_value(body.get(key))))
    })
}

/// A key's display label: first character uppercased, the rest untouched.
pub fn line_label(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Text form of a response value: sequences join their elements with ", ",
/// scalars coerce directly, missing values and nulls come out empty.
fn render_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => scalar_text(other),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filters(keys: &[&str]) -> ActiveFilters {
        let mut active = ActiveFilters::new();
        active.replace(keys.iter().map(|k| k.to_string()).collect());
        active
    }

    #[test]
    fn replace_is_idempotent() {
        let mut active = filters(&["numbers", "alphabets"]);
        let once = active.clone();
        active.replace(vec!["numbers".to_string(), "alphabets".to_string()]);
        assert_eq!(active, once);
    }

    #[test]
    fn replace_drops_duplicates() {
        let active = filters(&["numbers", "numbers", "alphabets"]);
        assert_eq!(active.iter().collect::<Vec<_>>(), ["numbers", "alphabets"]);
    }

    #[test]
    fn remove_preserves_the_order_of_the_rest() {
        let mut active = filters(&["numbers", "alphabets", "highest_lowercase_alphabet"]);
        active.remove("alphabets");
        assert_eq!(
            active.iter().collect::<Vec<_>>(),
            ["numbers", "highest_lowercase_alphabet"]
        );
    }

    #[test]
    fn clear_empties_any_selection() {
        let mut active = filters(&["numbers", "alphabets"]);
        active.clear();
        assert!(active.is_empty());
    }

    #[test]
    fn toggled_adds_at_the_end_and_removes_in_place() {
        let active = filters(&["numbers"]);
        assert_eq!(active.toggled("alphabets"), ["numbers", "alphabets"]);
        assert!(active.toggled("numbers").is_empty());
    }

    #[test]
    fn line_labels_uppercase_only_the_first_character() {
        assert_eq!(line_label("numbers"), "Numbers");
        assert_eq!(
            line_label("highest_lowercase_alphabet"),
            "Highest_lowercase_alphabet"
        );
        assert_eq!(line_label(""), "");
    }

    #[test]
    fn renders_selected_fields_in_selection_order() {
        let body = json!({
            "numbers": ["334", "4"],
            "alphabets": ["M", "B"],
            "highest_lowercase_alphabet": [],
        });
        let active = filters(&["numbers", "alphabets"]);
        let lines: Vec<String> = render_lines(Some(&body), &active).collect();
        assert_eq!(lines, ["Numbers: 334, 4", "Alphabets: M, B"]);
    }

    #[test]
    fn missing_key_renders_an_empty_value() {
        let body = json!({ "numbers": ["1"] });
        let active = filters(&["alphabets"]);
        let lines: Vec<String> = render_lines(Some(&body), &active).collect();
        assert_eq!(lines, ["Alphabets: "]);
    }

    #[test]
    fn absent_response_renders_nothing() {
        let active = filters(&["numbers", "alphabets"]);
        assert_eq!(render_lines(None, &active).count(), 0);
    }

    #[test]
    fn removed_key_never_renders() {
        let body = json!({ "numbers": ["1"], "alphabets": ["a"] });
        let mut active = filters(&["numbers", "alphabets"]);
        active.remove("numbers");
        let lines: Vec<String> = render_lines(Some(&body), &active).collect();
        assert_eq!(lines, ["Alphabets: a"]);
    }

    #[test]
    fn scalars_coerce_to_plain_text() {
        let body = json!({
            "numbers": 334,
            "alphabets": "M",
            "highest_lowercase_alphabet": true,
        });
        let active = filters(&["numbers", "alphabets", "highest_lowercase_alphabet"]);
        let lines: Vec<String> = render_lines(Some(&body), &active).collect();
        assert_eq!(
            lines,
            ["Numbers: 334", "Alphabets: M", "Highest_lowercase_alphabet: true"]
        );
    }

    #[test]
    fn empty_sequence_renders_an_empty_value() {
        let body = json!({ "highest_lowercase_alphabet": [] });
        let active = filters(&["highest_lowercase_alphabet"]);
        let lines: Vec<String> = render_lines(Some(&body), &active).collect();
        assert_eq!(lines, ["Highest_lowercase_alphabet: "]);
    }
}
