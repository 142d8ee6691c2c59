use super::Event;

/// Marker meaning the relationship ruptured.
const RUPTURE_MARKER: &str = "破裂";
/// Marker meaning the two severed ties.
const SEVERED_MARKER: &str = "断交";

/// True when any event description records a rupture or severed ties.
/// Case-sensitive substring containment; only descriptions are checked.
pub fn is_broken(events: &[Event]) -> bool {
    events.iter().any(|event| {
        event.description.contains(RUPTURE_MARKER) || event.description.contains(SEVERED_MARKER)
    })
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
    fn test_is_broken_rupture() {
        assert!(is_broken(&[event("1923", "兄弟破裂")]));
    }

    #[test]
    fn test_is_broken_severed() {
        assert!(is_broken(&[event("1925", "因论战断交")]));
    }

    #[test]
    fn test_is_broken_any_event() {
        let events = vec![event("1918", "相识"), event("1924", "关系破裂")];
        assert!(is_broken(&events));
    }

    #[test]
    fn test_is_broken_false() {
        assert!(!is_broken(&[event("1918", "合办《新青年》")]));
        assert!(!is_broken(&[]));
    }

    #[test]
    fn test_is_broken_ignores_time_field() {
        // Marker in the time field does not count
        assert!(!is_broken(&[event("断交之年", "来往渐少")]));
    }
}
