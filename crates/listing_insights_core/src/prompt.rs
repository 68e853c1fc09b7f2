//! crates/listing_insights_core/src/prompt.rs
//!
//! Pure construction of the analysis prompt sent to the text-generation
//! model. No I/O happens here; the web layer supplies the parsed request
//! and the adapter layer ships the resulting string.

use crate::domain::ListingItem;
use serde_json::Value;

/// Renders a listing price for the prompt. Strings pass through unquoted,
/// every other JSON value keeps its literal form.
fn render_price(price: Option<&Value>) -> String {
    match price {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "N/A".to_string(),
    }
}

/// Builds the full prompt text for one analysis request.
///
/// The output is newline-joined:
/// a fixed preamble, the echoed query, a numbered `Listings:` section when
/// any items were supplied (with an indented description line when the
/// description is non-empty after trimming), and a closing instruction.
pub fn build_prompt(query: &str, items: &[ListingItem]) -> String {
    let mut lines = vec![
        "You are assisting with product listing analysis.".to_string(),
        format!("User request: {query}"),
    ];

    if !items.is_empty() {
        lines.push("Listings:".to_string());
        for (idx, item) in items.iter().enumerate() {
            let title = item.title.as_deref().unwrap_or("Untitled");
            let price = render_price(item.price.as_ref());
            lines.push(format!("{}. {} — Price: {}", idx + 1, title, price));

            let desc = item.description.as_deref().unwrap_or("").trim();
            if !desc.is_empty() {
                lines.push(format!("   Description: {desc}"));
            }
        }
    }

    lines.push("Return a concise summary and 2-3 actionable insights.".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(title: &str, price: Value, description: &str) -> ListingItem {
        ListingItem {
            title: Some(title.to_string()),
            price: Some(price),
            description: Some(description.to_string()),
        }
    }

    #[test]
    fn no_items_omits_listings_section() {
        let prompt = build_prompt("summarize the market", &[]);
        assert_eq!(
            prompt,
            "You are assisting with product listing analysis.\n\
             User request: summarize the market\n\
             Return a concise summary and 2-3 actionable insights."
        );
        assert!(!prompt.contains("Listings:"));
    }

    #[test]
    fn items_are_numbered_from_one() {
        let items = vec![
            item("Desk", json!(120), "Solid oak."),
            item("Chair", json!("$45"), ""),
        ];
        let prompt = build_prompt("compare these", &items);
        assert!(prompt.contains("Listings:"));
        assert!(prompt.contains("1. Desk — Price: 120"));
        assert!(prompt.contains("   Description: Solid oak."));
        assert!(prompt.contains("2. Chair — Price: $45"));
    }

    #[test]
    fn blank_description_line_is_skipped() {
        let items = vec![item("Lamp", json!(10), "   ")];
        let prompt = build_prompt("q", &items);
        assert!(!prompt.contains("Description:"));
    }

    #[test]
    fn missing_fields_use_placeholders() {
        let items = vec![ListingItem::default()];
        let prompt = build_prompt("q", &items);
        assert!(prompt.contains("1. Untitled — Price: N/A"));
    }

    #[test]
    fn string_price_is_not_quoted() {
        let items = vec![item("Rug", json!("19.99 EUR"), "")];
        let prompt = build_prompt("q", &items);
        assert!(prompt.contains("Price: 19.99 EUR"));
        assert!(!prompt.contains('"'));
    }

    #[test]
    fn non_object_item_renders_as_placeholder_entry() {
        let raw = json!(["not an object"]);
        let items: Vec<ListingItem> = raw
            .as_array()
            .unwrap()
            .iter()
            .map(ListingItem::from_value)
            .collect();
        let prompt = build_prompt("q", &items);
        assert!(prompt.contains("1. Untitled — Price: N/A"));
    }
}
