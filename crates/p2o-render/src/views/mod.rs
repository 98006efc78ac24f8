pub mod endpoints;
pub mod models;
pub mod overview;

use serde::Serialize;

/// A label/count line, with labels padded to a common width.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub label: String,
    pub count: usize,
}

/// Build rows from `(label, count)` pairs, keeping their order.
pub fn rows<'a, I>(pairs: I) -> Vec<Row>
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let pairs: Vec<(&str, usize)> = pairs.into_iter().collect();
    let width = pairs
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    pairs
        .into_iter()
        .map(|(label, count)| Row {
            label: pad(label, width),
            count,
        })
        .collect()
}

/// Left-align `label` in a column of `width` characters.
pub(crate) fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(label.chars().count());
    let mut padded = String::with_capacity(label.len() + fill);
    padded.push_str(label);
    padded.extend(std::iter::repeat_n(' ', fill));
    padded
}
