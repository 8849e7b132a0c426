use getarg::{ArgumentStore, negated_name};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub flags: Vec<FlagEntry>,
    pub positionals: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct FlagEntry {
    pub name: String,
    pub value: String,
    pub values: Vec<String>,
    /// Set for `no<name>` flags: the flag they negate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negates: Option<String>,
}

pub fn inspect(store: &ArgumentStore) -> InspectReport {
    let flags = store
        .iter()
        .map(|(name, value)| FlagEntry {
            name: name.to_string(),
            value: value.to_string(),
            values: store.get_all(name).to_vec(),
            negates: negated_name(name).map(str::to_string),
        })
        .collect();

    InspectReport {
        flags,
        positionals: store.positionals().to_vec(),
    }
}

/// Human-readable rendering, one flag per line.
pub fn render(report: &InspectReport) -> String {
    let width = report
        .flags
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for flag in &report.flags {
        out.push_str(&format!("{:<width$}  {:?}", flag.name, flag.value));
        if flag.values.len() > 1 {
            out.push_str(&format!("  (all: {:?})", flag.values));
        }
        if let Some(target) = &flag.negates {
            out.push_str(&format!("  [negates {target}]"));
        }
        out.push('\n');
    }
    if !report.positionals.is_empty() {
        out.push_str(&format!("positionals: {:?}\n", report.positionals));
    }
    out
}
