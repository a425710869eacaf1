//! Decoder for the daily/real-time trends response family.
//!
//! The batchexecute endpoint wraps its payload twice: an anti-scraping
//! `)]}'` prefix in front of a JSON array, whose `[0][2]` element is itself
//! a JSON-encoded string. Inside that, stories are heterogeneous
//! fixed-position arrays; the offsets below name each position.

use serde_json::Value;

use crate::{
    error::ParseError,
    models::{
        DailyTrendingTopics, TrendingArticle, TrendingImage, TrendingStory, TrendingTopic,
    },
};

/// Anti-scraping marker prepended to every trends API response.
const ENVELOPE_PREFIX: &str = ")]}'";

// Story record offsets.
const STORY_TITLE: usize = 0;
const STORY_IMAGE: usize = 1;
const STORY_TRAFFIC: usize = 6;
const STORY_ARTICLES: usize = 9;
const STORY_SHARE_URL: usize = 12;

// Image descriptor offsets.
const IMAGE_NEWS_URL: usize = 0;
const IMAGE_SOURCE: usize = 1;
const IMAGE_URL: usize = 2;

// Article record offsets.
const ARTICLE_TITLE: usize = 0;
const ARTICLE_URL: usize = 1;
const ARTICLE_SOURCE: usize = 2;
const ARTICLE_TIME: usize = 3;
const ARTICLE_SNIPPET: usize = 4;

/// Remove the JSONP-style envelope and surrounding whitespace.
pub(crate) fn strip_envelope(text: &str) -> &str {
    let text = text.trim_start();
    text.strip_prefix(ENVELOPE_PREFIX).unwrap_or(text).trim()
}

/// Parse a raw batchexecute response into [`DailyTrendingTopics`].
///
/// The two output sequences are built in one pass and stay index-aligned.
pub fn parse_trending_response(text: &str) -> Result<DailyTrendingTopics, ParseError> {
    let outer: Value = serde_json::from_str(strip_envelope(text))?;

    let elements = outer
        .as_array()
        .filter(|arr| !arr.is_empty())
        .ok_or_else(|| ParseError::unexpected_structure("response is not a non-empty array"))?;

    let nested = elements[0]
        .get(2)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ParseError::unexpected_structure("missing double-encoded payload at [0][2]")
        })?;

    let inner: Value = serde_json::from_str(nested)?;
    let inner = inner
        .as_array()
        .filter(|arr| arr.len() >= 2)
        .ok_or_else(|| {
            ParseError::unexpected_structure("nested payload is not an array of length >= 2")
        })?;

    let records = inner[1].as_array().ok_or_else(|| {
        ParseError::unexpected_structure("story list at nested [1] is not an array")
    })?;

    let mut all_trending_stories = Vec::with_capacity(records.len());
    let mut summary = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let story = parse_story(record).map_err(|err| {
            ParseError::unexpected_structure(format!("story record {index}: {err}"))
        })?;
        summary.push(TrendingTopic::from(&story));
        all_trending_stories.push(story);
    }

    Ok(DailyTrendingTopics {
        all_trending_stories,
        summary,
    })
}

fn parse_story(record: &Value) -> Result<TrendingStory, ParseError> {
    // Fail closed on malformed records instead of silently dropping them;
    // absent fields inside a well-formed record keep their documented
    // defaults.
    let fields = record
        .as_array()
        .ok_or_else(|| ParseError::unexpected_structure("not an array"))?;

    let image = fields
        .get(STORY_IMAGE)
        .and_then(Value::as_array)
        .map(|descriptor| TrendingImage {
            news_url: coerce_string(descriptor.get(IMAGE_NEWS_URL), ""),
            source: coerce_string(descriptor.get(IMAGE_SOURCE), ""),
            image_url: coerce_string(descriptor.get(IMAGE_URL), ""),
        });

    let articles = match fields.get(STORY_ARTICLES).and_then(Value::as_array) {
        Some(entries) => entries
            .iter()
            .filter_map(Value::as_array)
            .map(|entry| TrendingArticle {
                title: coerce_string(entry.get(ARTICLE_TITLE), ""),
                url: coerce_string(entry.get(ARTICLE_URL), ""),
                source: coerce_string(entry.get(ARTICLE_SOURCE), ""),
                time: coerce_string(entry.get(ARTICLE_TIME), ""),
                snippet: coerce_string(entry.get(ARTICLE_SNIPPET), ""),
            })
            .collect(),
        None => Vec::new(),
    };

    Ok(TrendingStory {
        title: coerce_string(fields.get(STORY_TITLE), ""),
        traffic: coerce_string(fields.get(STORY_TRAFFIC), "0"),
        image,
        articles,
        share_url: coerce_string(fields.get(STORY_SHARE_URL), ""),
    })
}

/// String coercion with a default, matching the wire's loose typing:
/// numbers and booleans render as their display form, null and absent
/// values take the default.
fn coerce_string(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
