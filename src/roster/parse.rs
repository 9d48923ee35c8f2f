use std::collections::HashMap;

/// Split free-form input into a name list.
///
/// Names are separated by newlines or commas, surrounding whitespace is
/// trimmed, and empty entries are dropped. Duplicates are preserved;
/// flagging them is `duplicates`' job.
pub fn parse(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Names appearing more than once, compared case-insensitively.
///
/// Each repeated name is reported a single time, with the casing of its
/// second occurrence.
pub fn duplicates(names: &[String]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut repeated = Vec::new();

    for name in names {
        let count = seen.entry(name.to_lowercase()).or_insert(0);
        *count += 1;
        if *count == 2 {
            repeated.push(name.clone());
        }
    }

    repeated
}
