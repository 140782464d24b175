// Terminal rendering: pure functions from JSON payloads to display text.
// Headers get styled; item text is printed exactly as the API returned it.

use crossterm::style::Stylize;
use serde_json::Value;

/// Format one page of movie summaries. The caller extracts the page fields
/// from the payload; the items stay opaque.
pub fn movie_page(page: i64, total_pages: i64, results: &[Value]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format!("Page {page} of {total_pages}").bold()));
    for item in results {
        out.push_str(&format!(
            "{:>10}  {} ({})  {:.1}/10\n",
            int(item, "id"),
            text(item, "title"),
            text(item, "release_date"),
            float(item, "vote_average"),
        ));
    }
    out
}

/// Format a single movie detail record.
pub fn movie_details(payload: &Value) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", text(payload, "title").bold()));
    if let Some(tagline) = nonempty(payload, "tagline") {
        out.push_str(&format!("\"{tagline}\"\n"));
    }
    out.push_str(&format!("{:<15}{}\n", "Id:", int(payload, "id")));
    out.push_str(&format!("{:<15}{}\n", "Release date:", text(payload, "release_date")));
    let runtime = match payload.get("runtime").and_then(Value::as_i64) {
        Some(minutes) if minutes > 0 => format!("{minutes} min"),
        _ => "-".into(),
    };
    out.push_str(&format!("{:<15}{runtime}\n", "Runtime:"));
    out.push_str(&format!(
        "{:<15}{:.1}/10 ({} votes)\n",
        "Rating:",
        float(payload, "vote_average"),
        int(payload, "vote_count"),
    ));
    let genres: Vec<&str> = payload
        .get("genres")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(|genre| genre.get("name").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();
    if !genres.is_empty() {
        out.push_str(&format!("{:<15}{}\n", "Genres:", genres.join(", ")));
    }
    if let Some(overview) = nonempty(payload, "overview") {
        out.push_str(&format!("{}\n{overview}\n", "Overview:".bold()));
    }
    out
}

/// Format the review collection of one movie.
pub fn reviews(payload: &Value) -> String {
    let empty = Vec::new();
    let results = payload.get("results").and_then(Value::as_array).unwrap_or(&empty);
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", format!("Reviews ({})", results.len()).bold()));
    if results.is_empty() {
        out.push_str("No reviews found.\n");
        return out;
    }
    for review in results {
        out.push_str(&format!("\n{:<15}{}\n", "Author:", text(review, "author")));
        out.push_str(&format!("{}\n", text(review, "content")));
    }
    out
}

/// Format one page of person summaries straight from the payload.
pub fn person_page(payload: &Value) -> String {
    let empty = Vec::new();
    let results = payload.get("results").and_then(Value::as_array).unwrap_or(&empty);
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format!("Page {} of {}", int(payload, "page"), int(payload, "total_pages")).bold()
    ));
    for item in results {
        out.push_str(&format!(
            "{:>10}  {} ({})\n",
            int(item, "id"),
            text(item, "name"),
            text(item, "known_for_department"),
        ));
    }
    out
}

/// Format a single person detail record.
pub fn person_details(payload: &Value) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", text(payload, "name").bold()));
    out.push_str(&format!("{:<17}{}\n", "Id:", int(payload, "id")));
    out.push_str(&format!("{:<17}{}\n", "Known for:", text(payload, "known_for_department")));
    out.push_str(&format!("{:<17}{}\n", "Birthday:", text(payload, "birthday")));
    out.push_str(&format!("{:<17}{}\n", "Place of birth:", text(payload, "place_of_birth")));
    out.push_str(&format!("{:<17}{:.1}\n", "Popularity:", float(payload, "popularity")));
    if let Some(biography) = nonempty(payload, "biography") {
        out.push_str(&format!("{}\n{biography}\n", "Biography:".bold()));
    }
    out
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("-")
}

fn nonempty<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn int(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn float(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
