use regex::Regex;

use super::{Event, FALLBACK_YEAR};

/// Earliest 4-digit "19xx" year found among the event times, or
/// [`FALLBACK_YEAR`] when nothing parses.
///
/// Times are free text and may hold ranges, partial dates, or prose; only
/// the first match per event is considered, and descriptions are never
/// scanned.
pub fn min_year(events: &[Event]) -> i32 {
    let year_regex = Regex::new(r"19\d{2}").expect("Invalid regex pattern");

    events
        .iter()
        .filter_map(|event| year_regex.find(&event.time))
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .min()
        .unwrap_or(FALLBACK_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(time: &str, description: &str) -> Event {
        Event {
            time: time.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_min_year_single() {
        assert_eq!(min_year(&[event("1923", "兄弟破裂")]), 1923);
    }

    #[test]
    fn test_min_year_picks_minimum() {
        let events = vec![
            event("1925", "通信"),
            event("1918", "约稿"),
            event("1921", "合办杂志"),
        ];
        assert_eq!(min_year(&events), 1918);
    }

    #[test]
    fn test_min_year_prose_time() {
        assert_eq!(min_year(&[event("约1924年春", "讲学")]), 1924);
        assert_eq!(min_year(&[event("1920-1926", "任教北大")]), 1920);
    }

    #[test]
    fn test_min_year_no_match_falls_back() {
        assert_eq!(min_year(&[event("民国初年", "相识")]), 1926);
        assert_eq!(min_year(&[]), 1926);
    }

    #[test]
    fn test_min_year_ignores_description() {
        // A year only in the description does not count
        assert_eq!(min_year(&[event("", "1918年发表《狂人日记》")]), 1926);
    }

    #[test]
    fn test_min_year_ignores_other_centuries() {
        assert_eq!(min_year(&[event("2023", "整理出版")]), 1926);
    }
}
