//! Streaming extraction for the two page shapes the site serves.
//!
//! Both extractors consume whole documents through `html5gum`'s tokenizer
//! and keep a small amount of state across tag boundaries instead of
//! building a DOM. Field recovery inside the tags is regex-based.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use html5gum::{StartTag, Token, Tokenizer};
use regex::Regex;
use thiserror::Error;

use super::cleaner::{split_venue_city, strip_known_prefix};
use crate::models::ConcertEvent;

/// Class marker on listing-page anchors that point at tour pages.
const TOUR_LINK_CLASS: &str = "list-group-item list-group-item-action";

/// Event-detail hrefs look like `/detail/live/1234/...`.
static EVENT_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^/detail/live/\d+/").unwrap());

/// `31.05.1986 at Wembley Stadium`: day.month.year, then the brief.
static EVENT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<day>\d{2})\.(?P<month>\d{2})\.(?P<year>\d{4})\s+(?P<brief>.*)").unwrap()
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("invalid calendar date {day:02}.{month:02}.{year:04}")]
    InvalidDate { day: u32, month: u32, year: i32 },
}

fn attr<'t>(tag: &'t StartTag, name: &[u8]) -> Option<Cow<'t, str>> {
    tag.attributes
        .iter()
        .find(|(k, _)| k.0 == name)
        .map(|(_, v)| String::from_utf8_lossy(&v.0))
}

// ── Listing page ──────────────────────────────────────────────────────────────

/// Collects tour-page links from the listing page.
#[derive(Debug, Default)]
pub struct ListingExtractor {
    links: Vec<String>,
}

impl ListingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one document; qualifying hrefs append in document order,
    /// duplicates included. Anchors missing `class` or `href` are skipped.
    pub fn feed(&mut self, html: &str) {
        for token in Tokenizer::new(html).flatten() {
            let Token::StartTag(tag) = token else { continue };
            if tag.name.0 != b"a" {
                continue;
            }
            // Exact class string match, case-sensitive.
            let Some(class) = attr(&tag, b"class") else { continue };
            if class != TOUR_LINK_CLASS {
                continue;
            }
            if let Some(href) = attr(&tag, b"href") {
                self.links.push(href.into_owned());
            }
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn into_links(self) -> Vec<String> {
        self.links
    }
}

// ── Tour page ─────────────────────────────────────────────────────────────────

/// Per-anchor state machine over tour pages.
///
/// A single instance is fed every tour page of a run, so the event list
/// spans all of them and the last heading seen carries over to pages that
/// lack their own `h1`.
#[derive(Debug, Default)]
pub struct TourPageExtractor {
    events: Vec<ConcertEvent>,
    current_title: Option<String>,
    in_heading: bool,
    tour_name: Option<String>,
}

impl TourPageExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one document, appending one event per date-qualified text chunk
    /// inside a qualifying anchor. Unrecognized markup is ignored; an
    /// out-of-range calendar date is fatal.
    pub fn feed(&mut self, html: &str) -> Result<(), ExtractError> {
        for token in Tokenizer::new(html).flatten() {
            match token {
                Token::StartTag(tag) => {
                    self.on_start_tag(&tag);
                    if tag.self_closing {
                        self.on_end_tag(&tag.name.0);
                    }
                }
                Token::EndTag(tag) => self.on_end_tag(&tag.name.0),
                Token::String(data) => {
                    self.on_text(&String::from_utf8_lossy(&data.0))?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn events(&self) -> &[ConcertEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ConcertEvent> {
        self.events
    }

    /// Last heading text observed, if any page has supplied one yet.
    pub fn tour_name(&self) -> Option<&str> {
        self.tour_name.as_deref()
    }

    fn on_start_tag(&mut self, tag: &StartTag) {
        if tag.name.0 == b"a" {
            let qualifies = attr(tag, b"href")
                .map(|href| EVENT_URL_RE.is_match(&href))
                .unwrap_or(false);
            if qualifies {
                // An anchor without a usable title cannot yield a record.
                match attr(tag, b"title") {
                    Some(title) if !title.is_empty() => {
                        self.current_title = Some(title.into_owned());
                    }
                    _ => {}
                }
            }
        } else if tag.name.0 == b"h1" {
            self.in_heading = true;
        }
    }

    fn on_end_tag(&mut self, name: &[u8]) {
        if name == b"a" {
            self.current_title = None;
        } else if name == b"h1" {
            self.in_heading = false;
        }
    }

    fn on_text(&mut self, text: &str) -> Result<(), ExtractError> {
        if let Some(title) = &self.current_title {
            let Some(caps) = EVENT_DATE_RE.captures(text) else {
                // Most anchor bodies carry no date-qualified line.
                return Ok(());
            };
            let day: u32 = caps["day"].parse().unwrap_or(0);
            let month: u32 = caps["month"].parse().unwrap_or(0);
            let year: i32 = caps["year"].parse().unwrap_or(0);
            let date = NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(ExtractError::InvalidDate { day, month, year })?;

            let (venue, city) = split_venue_city(title).unwrap_or_default();

            self.events.push(ConcertEvent {
                tour_name: self
                    .tour_name
                    .as_deref()
                    .map(strip_known_prefix)
                    .unwrap_or_default(),
                title: strip_known_prefix(title),
                date,
                brief: caps["brief"].to_string(),
                venue,
                city,
            });
        } else if self.in_heading {
            // Last heading wins.
            self.tour_name = Some(text.to_string());
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
