// src/services/render.rs
use log::info;
use std::path::Path;

use crate::models::{ReportEntry, ReportRecord};

pub const TITLE: &str = "Lottery Jackpot Estimates";
pub const HEADING: &str = "Current Lottery Jackpot Estimates";

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            margin: 10px;
            background-color: #f0f8ff;
            color: #333;
        }
        .container {
            display: flex;
            flex-direction: column;
            gap: 20px;
            align-items: center;
            margin-top: 20px;
        }
        .jackpot-card {
            background-color: #fff;
            padding: 20px;
            border-radius: 12px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.15);
            width: 95%;
            max-width: 400px;
            text-align: center;
            border: 1px solid #e0e0e0;
        }
        h2 {
            color: #2e8b57;
            margin-top: 0;
            margin-bottom: 15px;
            font-size: 1.8em;
        }
        p {
            color: #555;
            margin-bottom: 10px;
            font-size: 1em;
        }
        .jackpot-amount {
            font-size: 1.6em;
            color: #ff8c00;
            font-weight: bold;
        }
        .after-tax {
            color: #888;
            font-size: 0.8em;
            font-style: italic;
        }
        .error {
            color: #dc143c;
            font-weight: bold;
        }
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS class derived from a label: "Estimated Draws to $1B" -> "estimated-draws-to-1b".
pub fn label_class(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn render_entry(entry: &ReportEntry) -> String {
    let value = escape_html(&entry.value);
    let inner = match entry.kind.css_class() {
        Some(class) => format!("<span class=\"{}\">{}</span>", class, value),
        None => value,
    };
    format!(
        "<p>{}: <span class=\"{}\">{}</span></p>",
        escape_html(&entry.label),
        label_class(&entry.label),
        inner
    )
}

fn render_card(record: &ReportRecord) -> String {
    let rows: Vec<String> = record
        .entries
        .iter()
        .map(|entry| format!("            {}", render_entry(entry)))
        .collect();

    format!(
        "        <div class=\"jackpot-card\">\n            <h2>{}</h2>\n{}\n        </div>",
        escape_html(&record.lottery_name),
        rows.join("\n")
    )
}

/// Self-contained page with one card per lottery.
pub fn render_report(records: &[ReportRecord]) -> String {
    let cards: Vec<String> = records.iter().map(render_card).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}    </style>
</head>
<body>
    <h1>{heading}</h1>
    <div class="container">
{cards}
    </div>
</body>
</html>
"#,
        title = TITLE,
        style = STYLE,
        heading = HEADING,
        cards = cards.join("\n")
    )
}

pub async fn write_report(path: &Path, html: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, html).await?;
    info!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryKind;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn label_class_keeps_words_only() {
        assert_eq!(label_class("Jackpot"), "jackpot");
        assert_eq!(label_class("Estimated Draws to $1B"), "estimated-draws-to-1b");
        assert_eq!(
            label_class("Cash option after taxes (est. 27%)"),
            "cash-option-after-taxes-est-27"
        );
    }

    #[test]
    fn entry_is_wrapped_in_emphasis_span() {
        let entry = ReportEntry {
            label: "Jackpot".to_string(),
            value: "$900,000,000".to_string(),
            kind: EntryKind::Amount,
        };
        assert_eq!(
            render_entry(&entry),
            "<p>Jackpot: <span class=\"jackpot\"><span class=\"jackpot-amount\">$900,000,000</span></span></p>"
        );
    }

    #[test]
    fn document_is_self_contained() {
        let mut record = ReportRecord::new("Powerball");
        record.push("Jackpot", "$1", EntryKind::Amount);
        let html = render_report(&[record]);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
        assert!(html.contains("<h2>Powerball</h2>"));
    }
}
