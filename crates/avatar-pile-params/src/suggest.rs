//! Completion suggestions for partially typed parameters.
//!
//! Each parameter has its own completion policy:
//!
//! - `shape` and `useFullEndCap` offer their fixed choices.
//! - `size`, `gap` and `instances` offer a range of common values. An empty
//!   query lists the whole range; otherwise the query itself comes first,
//!   followed by every listed value containing it.
//! - `depth` echoes the canonical form of the typed value (`40 %` becomes
//!   `40%`).
//!
//! Invalid input produces [`Suggestions::Error`] with a short user-facing
//! message instead of suggestions.

use avatar_pile_core::shape::ShapeKind;

use crate::{
    key::ParameterKey,
    value::{parse_depth, parse_instances, parse_number, validate_number},
};

/// The answer to a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Values to offer, best match first.
    Values(Vec<String>),
    /// The query cannot become a valid value.
    Error(String),
}

impl Suggestions {
    /// Returns the offered values, or an empty slice for an error.
    pub fn values(&self) -> &[String] {
        match self {
            Suggestions::Values(values) => values,
            Suggestions::Error(_) => &[],
        }
    }
}

/// Generates `start, start + interval, ...` up to and including `end`.
///
/// # Examples
///
/// ```
/// # use avatar_pile_params::suggest::number_range;
/// assert_eq!(number_range(16, 28, 4), ["16", "20", "24", "28"]);
/// assert_eq!(number_range(1, 3, 1), ["1", "2", "3"]);
/// ```
pub fn number_range(start: u32, end: u32, interval: u32) -> Vec<String> {
    if end < start || interval == 0 {
        return Vec::new();
    }
    (0..=(end - start) / interval)
        .map(|step| (start + step * interval).to_string())
        .collect()
}

/// The common values offered for a numeric parameter.
pub fn completions_for(key: ParameterKey) -> Vec<String> {
    match key {
        ParameterKey::Size => number_range(16, 96, 4),
        ParameterKey::Gap => number_range(1, 32, 1),
        ParameterKey::Instances => number_range(2, 48, 1),
        ParameterKey::Shape => ShapeKind::ALL
            .into_iter()
            .map(|kind| kind.name().to_string())
            .collect(),
        ParameterKey::UseFullEndCap => vec!["true".to_string(), "false".to_string()],
        ParameterKey::Depth => Vec::new(),
    }
}

/// Suggestions for a numeric parameter given the typed `query`.
pub fn number_suggestions(key: ParameterKey, query: &str, completions: &[String]) -> Suggestions {
    if query.is_empty() {
        return Suggestions::Values(completions.to_vec());
    }

    let checked = if key == ParameterKey::Instances {
        parse_instances(query).map(|_| ())
    } else {
        parse_number(key, query).and_then(|value| validate_number(key, query, value).map(|_| ()))
    };
    match checked {
        Ok(_) => {
            let mut values = vec![query.to_string()];
            values.extend(
                completions
                    .iter()
                    .filter(|completion| completion.contains(query) && *completion != query)
                    .cloned(),
            );
            Suggestions::Values(values)
        }
        Err(err) => Suggestions::Error(err.user_message()),
    }
}

/// Suggestions for the depth parameter given the typed `query`.
pub fn depth_suggestions(query: &str) -> Suggestions {
    if query.is_empty() {
        return Suggestions::Values(Vec::new());
    }

    let key = ParameterKey::Depth;
    let checked = parse_depth(query)
        .and_then(|depth| validate_number(key, query, depth.value()).map(|_| depth));
    match checked {
        Ok(depth) => Suggestions::Values(vec![depth.to_string()]),
        Err(err) => Suggestions::Error(err.user_message()),
    }
}

/// Suggestions for a fixed set of choices, filtered by prefix.
fn choice_suggestions(query: &str, choices: Vec<String>) -> Suggestions {
    let query = query.trim().to_ascii_lowercase();
    Suggestions::Values(
        choices
            .into_iter()
            .filter(|choice| choice.starts_with(&query))
            .collect(),
    )
}

/// Suggestions for any parameter.
///
/// # Examples
///
/// ```
/// # use avatar_pile_params::{ParameterKey, suggest::{suggestions_for, Suggestions}};
/// assert_eq!(
///     suggestions_for(ParameterKey::Instances, "4"),
///     Suggestions::Values(vec!["4".into(), "14".into(), "24".into(), "34".into(), "40".into(),
///         "41".into(), "42".into(), "43".into(), "44".into(), "45".into(), "46".into(),
///         "47".into(), "48".into()]),
/// );
/// assert_eq!(
///     suggestions_for(ParameterKey::Size, "0"),
///     Suggestions::Error("Must be larger than 0".into()),
/// );
/// ```
pub fn suggestions_for(key: ParameterKey, query: &str) -> Suggestions {
    match key {
        ParameterKey::Shape | ParameterKey::UseFullEndCap => {
            choice_suggestions(query, completions_for(key))
        }
        ParameterKey::Size | ParameterKey::Gap | ParameterKey::Instances => {
            number_suggestions(key, query, &completions_for(key))
        }
        ParameterKey::Depth => depth_suggestions(query),
    }
}
