//! Data models for extracted news articles.
//!
//! This module defines the structures the crawler emits:
//! - [`ArticleRecord`]: one article's extracted fields
//! - [`NewsFeed`]: the full output document, `{"news": [...]}`
//!
//! Every field of an [`ArticleRecord`] is optional: the article host's markup
//! varies, and a missing element is recorded as absence (`null` in the JSON
//! output) rather than treated as an error.

use serde::{Deserialize, Serialize};

/// The fields extracted from a single article page.
///
/// A record is created once per successfully fetched article and never
/// mutated afterwards. Articles whose pages fail to fetch produce no record
/// at all — absence of a record means "fetch failed", absence of a field
/// means "element missing on the page".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article headline, if the title element was present.
    pub title: Option<String>,
    /// The article body text, if the content element was present.
    pub content: Option<String>,
    /// The publish timestamp as the page states it (e.g.
    /// `"2025-03-01 09:30:01"`), if the datestamp element was present.
    pub publish_date: Option<String>,
}

/// The complete output of one crawl: every extracted article, in the order
/// the links were processed.
#[derive(Debug, Deserialize, Serialize)]
pub struct NewsFeed {
    /// Extracted articles, one per successfully fetched link.
    pub news: Vec<ArticleRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_record_serializes_missing_fields_as_null() {
        let record = ArticleRecord {
            title: Some("금리 동결".to_string()),
            content: None,
            publish_date: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""content":null"#));
        assert!(json.contains(r#""publish_date":null"#));
    }

    #[test]
    fn test_article_record_non_ascii_is_literal() {
        let record = ArticleRecord {
            title: Some("코스피 상승 마감".to_string()),
            content: Some("지수가 상승했다.".to_string()),
            publish_date: Some("2025-03-01 09:30:01".to_string()),
        };

        // serde_json emits UTF-8 directly, not \u escapes.
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("코스피 상승 마감"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_news_feed_serialization_shape() {
        let feed = NewsFeed {
            news: vec![ArticleRecord {
                title: Some("title".to_string()),
                content: Some("content".to_string()),
                publish_date: Some("2025-03-01 09:30:01".to_string()),
            }],
        };

        let json = serde_json::to_string(&feed).unwrap();
        assert!(json.starts_with(r#"{"news":["#));
    }

    #[test]
    fn test_news_feed_deserialization() {
        let json = r#"{
            "news": [
                {"title": null, "content": "body", "publish_date": null}
            ]
        }"#;

        let feed: NewsFeed = serde_json::from_str(json).unwrap();
        assert_eq!(feed.news.len(), 1);
        assert_eq!(feed.news[0].title, None);
        assert_eq!(feed.news[0].content.as_deref(), Some("body"));
    }
}
