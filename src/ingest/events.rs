use crate::graph::Event;

use super::Row;

/// Column where the (time, description) pairs begin.
pub const EVENT_OFFSET: usize = 3;

/// Extract the ordered event list from a row.
///
/// Fields from [`EVENT_OFFSET`] onward are consumed in consecutive pairs.
/// A missing partner field (odd or short row) reads as empty text, never an
/// error. A pair is kept only when at least one half is non-empty after
/// trimming.
pub fn extract_events(row: &Row) -> Vec<Event> {
    let mut events = Vec::new();

    let mut index = EVENT_OFFSET;
    while index < row.len() {
        let time = row.field(index);
        let description = row.field(index + 1);
        if !time.is_empty() || !description.is_empty() {
            events.push(Event {
                time: time.to_string(),
                description: description.to_string(),
            });
        }
        index += 2;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        Row::new(fields.iter().map(|f| f.to_string()).collect())
    }

    #[test]
    fn test_extract_events_pairs() {
        let r = row(&["", "周作人", "弟弟", "1923", "兄弟破裂", "1924", "搬离八道湾"]);
        let events = extract_events(&r);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].time, "1923");
        assert_eq!(events[0].description, "兄弟破裂");
        assert_eq!(events[1].time, "1924");
        assert_eq!(events[1].description, "搬离八道湾");
    }

    #[test]
    fn test_extract_events_odd_trailing_column() {
        // Trailing time with no description partner
        let r = row(&["", "许广平", "伴侣", "1925", "通信开始", "1927"]);
        let events = extract_events(&r);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].time, "1927");
        assert_eq!(events[1].description, "");
    }

    #[test]
    fn test_extract_events_empty_pair_dropped() {
        let r = row(&["", "钱玄同", "友人", "", "", "1918", "约稿《狂人日记》"]);
        let events = extract_events(&r);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, "1918");
    }

    #[test]
    fn test_extract_events_description_only() {
        let r = row(&["", "名", "友人", "", "仅有描述"]);
        let events = extract_events(&r);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, "");
        assert_eq!(events[0].description, "仅有描述");
    }

    #[test]
    fn test_extract_events_short_row() {
        assert!(extract_events(&row(&["", "胡适", "友人"])).is_empty());
        assert!(extract_events(&row(&[])).is_empty());
    }

    #[test]
    fn test_extract_events_whitespace_trimmed() {
        let r = row(&["", "名", "友人", " 1920 ", "  "]);
        let events = extract_events(&r);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, "1920");
        assert_eq!(events[0].description, "");
    }
}
