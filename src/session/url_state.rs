// file: src/session/url_state.rs
// description: Reads and rewrites the `topic` query parameter of the page url
// reference: https://docs.rs/url

use crate::error::Result;
use crate::matcher::normalize_query;
use url::Url;

pub const TOPIC_PARAM: &str = "topic";

pub fn parse_location(raw: &str) -> Result<Url> {
    Ok(Url::parse(raw)?)
}

/// First `topic` value in the query string, exactly as given.
pub fn initial_topic(location: &Url) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == TOPIC_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// The url after a submission: same origin and path, query replaced by the
/// normalized topic.
pub fn with_topic(location: &Url, topic: &str) -> Url {
    let mut next = location.clone();
    next.set_query(None);
    next.set_fragment(None);
    next.query_pairs_mut()
        .append_pair(TOPIC_PARAM, &normalize_query(topic));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_topic() {
        let url = parse_location("http://localhost:3000/?topic=Love%20Life&x=1").unwrap();
        assert_eq!(initial_topic(&url), Some("Love Life".to_string()));

        let url = parse_location("http://localhost:3000/?x=1").unwrap();
        assert_eq!(initial_topic(&url), None);

        let url = parse_location("http://localhost:3000/?topic=").unwrap();
        assert_eq!(initial_topic(&url), Some(String::new()));
    }

    #[test]
    fn test_with_topic_replaces_query() {
        let url = parse_location("http://localhost:3000/quotes?topic=old&page=2#top").unwrap();
        let next = with_topic(&url, "  Hope ");
        assert_eq!(next.as_str(), "http://localhost:3000/quotes?topic=hope");
    }

    #[test]
    fn test_with_topic_encodes() {
        let url = parse_location("https://quotes.example.com/").unwrap();
        let next = with_topic(&url, "Love & War");
        assert_eq!(next.as_str(), "https://quotes.example.com/?topic=love+%26+war");
        assert_eq!(initial_topic(&next), Some("love & war".to_string()));
    }

    #[test]
    fn test_parse_location_rejects_garbage() {
        assert!(parse_location("not a url").is_err());
    }
}
