use serde::Serialize;

/// One `Field: value` row of a node label.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelRow {
    pub name: String,
    pub value: String,
}

/// A titled table of fields, rendered by the sink as the node's text.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Label {
    pub title: String,
    pub rows: Vec<LabelRow>,
}

/// Build a label from a title and `(field_name, value)` pairs.
///
/// Field names are title-cased (`resource_type` becomes `Resource Type`) and
/// rows keep the order they were supplied in.
pub fn label_table<K, V>(title: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Label
where
    K: AsRef<str>,
    V: Into<String>,
{
    Label {
        title: title.into(),
        rows: fields
            .into_iter()
            .map(|(name, value)| LabelRow {
                name: title_case(name.as_ref()),
                value: value.into(),
            })
            .collect(),
    }
}

fn title_case(name: &str) -> String {
    name.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
