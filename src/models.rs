// src/models.rs
use chrono::NaiveDate;

/// A lottery whose jackpot is scraped from a single public page.
#[derive(Debug, Clone, PartialEq)]
pub struct Lottery {
    pub id: String,
    pub name: String,
    pub url: String,
    pub selector: String,
}

impl Lottery {
    pub fn new(id: &str, name: &str, url: &str, selector: &str) -> Self {
        Lottery {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            selector: selector.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JackpotReading {
    pub lottery_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EstimationResult {
    pub estimated_draws: Option<u32>,
    pub estimated_date: Option<NaiveDate>,
}

/// Visual emphasis of a report value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Amount,
    AfterTax,
    Plain,
    Error,
}

impl EntryKind {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            EntryKind::Amount => Some("jackpot-amount"),
            EntryKind::AfterTax => Some("after-tax"),
            EntryKind::Plain => None,
            EntryKind::Error => Some("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub label: String,
    pub value: String,
    pub kind: EntryKind,
}

/// Labelled display strings for one lottery, in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    pub lottery_name: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportRecord {
    pub fn new(lottery_name: impl Into<String>) -> Self {
        ReportRecord {
            lottery_name: lottery_name.into(),
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>, kind: EntryKind) {
        self.entries.push(ReportEntry {
            label: label.into(),
            value: value.into(),
            kind,
        });
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    pub fn is_error(&self) -> bool {
        self.entries.len() == 1 && self.entries[0].kind == EntryKind::Error
    }
}
