//! Friendly type naming and output-name sanitization.

/// Human-readable name of a type: the bare name without module path, with
/// one level of generic arguments rendered as bare names.
///
/// Used for diagnostics and for deriving a default artifact name; never for
/// column names or cell values.
pub fn friendly_type_name<T: ?Sized>() -> String {
    friendly_name_of(std::any::type_name::<T>())
}

fn friendly_name_of(full: &str) -> String {
    match full.split_once('<') {
        None => bare_segment(full).to_string(),
        Some((head, tail)) => {
            let args = tail.strip_suffix('>').unwrap_or(tail);
            let rendered: Vec<&str> = split_top_level(args)
                .into_iter()
                .map(bare_segment)
                .collect();
            format!("{}<{}>", bare_segment(head), rendered.join(","))
        }
    }
}

/// Last path segment of a possibly generic type path, without its own
/// argument list. Arguments of arguments are not resolved further.
fn bare_segment(path: &str) -> &str {
    let path = path.trim();
    let head = path.split('<').next().unwrap_or(path);
    head.rsplit("::").next().unwrap_or(head)
}

/// Split a generic argument list on commas at bracket depth zero.
fn split_top_level(args: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, ch) in args.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&args[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }

    parts.push(&args[start..]);
    parts
}

/// Strip whitespace and the characters unsafe for a worksheet name.
///
/// Runs of unsafe characters collapse to nothing. The mapping is lossy and
/// deliberately performs no collision detection: two raw page names may
/// sanitize to the same sheet name, and rejecting the duplicate is the
/// encoder's concern.
pub fn sanitize_sheet_name(raw: &str) -> String {
    raw.chars().filter(|c| !is_sheet_unsafe(*c)).collect()
}

fn is_sheet_unsafe(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ':' | '?' | '*' | '`' | '<' | '>' | '_' | '[' | ']' | '/' | '\\'
        )
}

/// Remove every occurrence of each delimiter character from a rendered
/// field. A multi-character delimiter is treated as a character set, not a
/// substring, so no field can smuggle in an extra column separator.
pub fn strip_delimiter_chars(value: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return value.to_string();
    }

    value.chars().filter(|c| !delimiter.contains(*c)).collect()
}
