//! Text cleanup applied to extracted fields.

use std::sync::LazyLock;

use regex::Regex;

/// Site-added prefixes on headings and anchor titles.
static KNOWN_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:queen on tour: |concert: )").unwrap());

/// `... live at the <venue>, <city> (<country>)`: venue stops at the comma,
/// city at an opening parenthesis or the end of the title.
static VENUE_CITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)live at the (?P<venue>[^,]+),\s*(?P<city>[^(]+?)\s*(?:\(|$)").unwrap()
});

/// Strip a single leading known prefix, if present. The rest of the string
/// is left untouched.
pub fn strip_known_prefix(s: &str) -> String {
    KNOWN_PREFIX_RE.replace(s, "").into_owned()
}

/// Pull venue and city out of an event title. `None` when the title does
/// not follow the `live at the …` shape.
pub fn split_venue_city(title: &str) -> Option<(String, String)> {
    let caps = VENUE_CITY_RE.captures(title)?;
    Some((caps["venue"].trim().to_string(), caps["city"].trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_known_prefix() {
        assert_eq!(
            strip_known_prefix("Concert: Queen live at the Forum, Inglewood (USA)"),
            "Queen live at the Forum, Inglewood (USA)"
        );
        assert_eq!(strip_known_prefix("Queen on tour: Magic Tour"), "Magic Tour");
        assert_eq!(strip_known_prefix("queen ON tour: Jazz Tour"), "Jazz Tour");
        assert_eq!(strip_known_prefix("Concert: Concert: twice"), "Concert: twice");
    }

    #[test]
    fn leaves_unprefixed_strings_alone() {
        assert_eq!(strip_known_prefix("News of the World"), "News of the World");
        assert_eq!(strip_known_prefix("A Concert: mid-string"), "A Concert: mid-string");
        assert_eq!(strip_known_prefix(""), "");
    }

    #[test]
    fn venue_city_with_country_suffix() {
        assert_eq!(
            split_venue_city("Queen live at the Forum, Inglewood (USA)"),
            Some(("Forum".to_string(), "Inglewood".to_string()))
        );
    }

    #[test]
    fn venue_city_without_country_runs_to_end() {
        assert_eq!(
            split_venue_city("Queen live at the Apollo, Manchester"),
            Some(("Apollo".to_string(), "Manchester".to_string()))
        );
    }

    #[test]
    fn venue_city_match_is_case_insensitive() {
        assert_eq!(
            split_venue_city("QUEEN LIVE AT THE Rainbow, London"),
            Some(("Rainbow".to_string(), "London".to_string()))
        );
    }

    #[test]
    fn titles_without_the_shape_yield_none() {
        assert_eq!(split_venue_city("Queen at Budokan"), None);
        assert_eq!(split_venue_city("Queen live at the Rainbow"), None);
    }
}
