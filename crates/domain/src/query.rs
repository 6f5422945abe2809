use std::fmt::{self, Display};

use crate::{FilterCategory, SelectionState};

#[derive(strum::AsRefStr, strum::Display, Clone, Copy, Debug, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum QueryParameter {
    Name,
    Type,
    Muscle,
    Difficulty,
}

/// Search request derived from the current search text and filter selection.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub exercise_type: Option<String>,
    pub muscle: Option<String>,
    pub difficulty: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn build(selection: &SelectionState, search_text: &str) -> Self {
        let value = |category| selection.selected(category).map(|o| o.api_value());
        Self {
            text: if search_text.is_empty() {
                None
            } else {
                Some(search_text.to_string())
            },
            exercise_type: value(FilterCategory::Type),
            muscle: value(FilterCategory::Muscle),
            difficulty: value(FilterCategory::Difficulty),
        }
    }

    /// Present fields in transmission order. Absent fields are omitted.
    #[must_use]
    pub fn parameters(&self) -> Vec<(QueryParameter, &str)> {
        [
            (QueryParameter::Name, &self.text),
            (QueryParameter::Type, &self.exercise_type),
            (QueryParameter::Muscle, &self.muscle),
            (QueryParameter::Difficulty, &self.difficulty),
        ]
        .into_iter()
        .filter_map(|(parameter, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (parameter, v))
        })
        .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters().is_empty()
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(
            &url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(
                    self.parameters()
                        .into_iter()
                        .map(|(parameter, value)| (parameter.as_ref().to_owned(), value)),
                )
                .finish(),
        )
    }
}
