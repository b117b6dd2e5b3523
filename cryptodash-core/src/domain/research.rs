//! Research side lists: news, social mentions and analyst notes.
//!
//! These are small read-only lists. They implement [`Record`] so the side
//! panel search box can reuse the same filter predicate as the tables.

use serde::{Deserialize, Serialize};

use crate::format::ValueKind;
use crate::record::{Column, Record};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResearchSection {
    #[default]
    News,
    Social,
    Notes,
}

impl ResearchSection {
    pub const ALL: [ResearchSection; 3] = [
        ResearchSection::News,
        ResearchSection::Social,
        ResearchSection::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ResearchSection::News => "News Feed",
            ResearchSection::Social => "Social Mentions",
            ResearchSection::Notes => "Research Notes",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ResearchSection::News => ResearchSection::Social,
            ResearchSection::Social => ResearchSection::Notes,
            ResearchSection::Notes => ResearchSection::News,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Low => "low",
            Impact::Medium => "medium",
            Impact::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub source: String,
    pub sentiment: f64,
    pub time: String,
    pub impact: Impact,
    pub summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsField {
    Title,
    Source,
    Sentiment,
    Time,
    Impact,
    Summary,
}

impl Column for NewsField {
    fn label(self) -> &'static str {
        match self {
            NewsField::Title => "Title",
            NewsField::Source => "Source",
            NewsField::Sentiment => "Sentiment",
            NewsField::Time => "Time",
            NewsField::Impact => "Impact",
            NewsField::Summary => "Summary",
        }
    }

    fn key(self) -> &'static str {
        match self {
            NewsField::Title => "title",
            NewsField::Source => "source",
            NewsField::Sentiment => "sentiment",
            NewsField::Time => "time",
            NewsField::Impact => "impact",
            NewsField::Summary => "summary",
        }
    }

    fn kind(self) -> ValueKind {
        ValueKind::Number { decimals: 0 }
    }
}

impl Record for NewsItem {
    type Field = NewsField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: NewsField) -> Value<'_> {
        match field {
            NewsField::Title => Value::Text(&self.title),
            NewsField::Source => Value::Text(&self.source),
            NewsField::Sentiment => self.sentiment.into(),
            NewsField::Time => Value::Text(&self.time),
            NewsField::Impact => Value::Text(self.impact.as_str()),
            NewsField::Summary => Value::Text(&self.summary),
        }
    }

    fn columns() -> &'static [NewsField] {
        &[
            NewsField::Title,
            NewsField::Source,
            NewsField::Sentiment,
            NewsField::Time,
            NewsField::Impact,
            NewsField::Summary,
        ]
    }

    fn searchable() -> &'static [NewsField] {
        &[NewsField::Title, NewsField::Source, NewsField::Summary]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMention {
    pub id: String,
    pub platform: String,
    pub mentions: u32,
    pub sentiment: f64,
    pub trending: String,
    /// Change versus the previous window, in percent.
    pub change: f64,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialField {
    Platform,
    Mentions,
    Sentiment,
    Trending,
    Change,
}

impl Column for SocialField {
    fn label(self) -> &'static str {
        match self {
            SocialField::Platform => "Platform",
            SocialField::Mentions => "Mentions",
            SocialField::Sentiment => "Sentiment",
            SocialField::Trending => "Trending",
            SocialField::Change => "Change",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SocialField::Platform => "platform",
            SocialField::Mentions => "mentions",
            SocialField::Sentiment => "sentiment",
            SocialField::Trending => "trending",
            SocialField::Change => "change",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            SocialField::Mentions => ValueKind::Quantity,
            SocialField::Change => ValueKind::Percentage { decimals: 0 },
            _ => ValueKind::Number { decimals: 0 },
        }
    }
}

impl Record for SocialMention {
    type Field = SocialField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: SocialField) -> Value<'_> {
        match field {
            SocialField::Platform => Value::Text(&self.platform),
            SocialField::Mentions => Value::Number(f64::from(self.mentions)),
            SocialField::Sentiment => self.sentiment.into(),
            SocialField::Trending => Value::Text(&self.trending),
            SocialField::Change => self.change.into(),
        }
    }

    fn columns() -> &'static [SocialField] {
        &[
            SocialField::Platform,
            SocialField::Mentions,
            SocialField::Sentiment,
            SocialField::Trending,
            SocialField::Change,
        ]
    }

    fn searchable() -> &'static [SocialField] {
        &[SocialField::Platform, SocialField::Trending]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchNote {
    pub id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub last_modified: String,
    pub author: String,
    /// Tags joined with spaces so they can be searched as one text cell.
    #[serde(skip)]
    pub tag_line: String,
}

impl ResearchNote {
    pub fn new(
        id: &str,
        title: &str,
        content: &str,
        tags: &[&str],
        last_modified: &str,
        author: &str,
    ) -> Self {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tag_line: tags.iter().map(|t| format!("#{t}")).collect::<Vec<_>>().join(" "),
            tags,
            last_modified: last_modified.to_string(),
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteField {
    Title,
    Content,
    Tags,
    LastModified,
    Author,
}

impl Column for NoteField {
    fn label(self) -> &'static str {
        match self {
            NoteField::Title => "Title",
            NoteField::Content => "Content",
            NoteField::Tags => "Tags",
            NoteField::LastModified => "Modified",
            NoteField::Author => "Author",
        }
    }

    fn key(self) -> &'static str {
        match self {
            NoteField::Title => "title",
            NoteField::Content => "content",
            NoteField::Tags => "tags",
            NoteField::LastModified => "lastModified",
            NoteField::Author => "author",
        }
    }
}

impl Record for ResearchNote {
    type Field = NoteField;
    type Facet = ();

    fn key(&self) -> &str {
        &self.id
    }

    fn value(&self, field: NoteField) -> Value<'_> {
        match field {
            NoteField::Title => Value::Text(&self.title),
            NoteField::Content => Value::Text(&self.content),
            NoteField::Tags => Value::Text(&self.tag_line),
            NoteField::LastModified => Value::Text(&self.last_modified),
            NoteField::Author => Value::Text(&self.author),
        }
    }

    fn columns() -> &'static [NoteField] {
        &[
            NoteField::Title,
            NoteField::Content,
            NoteField::Tags,
            NoteField::LastModified,
            NoteField::Author,
        ]
    }

    fn searchable() -> &'static [NoteField] {
        &[
            NoteField::Title,
            NoteField::Content,
            NoteField::Tags,
            NoteField::Author,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::filter::filter_rows;

    #[test]
    fn search_reaches_tags() {
        let notes = fixtures::notes();
        let hits: Vec<_> = filter_rows(&notes, "defi", &()).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(hits, vec!["2"]);
        let hits = filter_rows(&notes, "compliance", &());
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn news_search_covers_source() {
        let news = fixtures::news();
        let hits: Vec<_> = filter_rows(&news, "blockchaindaily", &()).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(hits, vec!["2"]);
    }
}
