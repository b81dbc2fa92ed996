//! Text shown by the page

use crate::activity::ActivityRecord;

pub const TITLE: &str = "To-Do List";

/// Format a number the way the page always has: `20` not `20.0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // Also folds -0 into 0
        return "0".to_string();
    }
    value.to_string()
}

/// One list row, e.g. `Hiking - RM20 (Recreational)`
pub fn list_line(record: &ActivityRecord) -> String {
    format!(
        "{} - RM{} ({})",
        record.activity,
        format_number(record.price),
        record.kind
    )
}

pub fn summary(count: usize) -> String {
    format!("Total Activities: {}", count)
}

pub fn accessibility_label(value: f64) -> String {
    format!("Accessibility: {}", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1), "0.1");
    }

    #[test]
    fn test_list_line() {
        let record = ActivityRecord::new("Hiking", 20.0, ActivityType::Recreational);
        assert_eq!(list_line(&record), "Hiking - RM20 (Recreational)");

        let odd = ActivityRecord::new("Origami", 2.5, ActivityType::Other("Paper".into()));
        assert_eq!(list_line(&odd), "Origami - RM2.5 (Paper)");
    }

    #[test]
    fn test_summary_and_label() {
        assert_eq!(summary(0), "Total Activities: 0");
        assert_eq!(summary(3), "Total Activities: 3");
        assert_eq!(accessibility_label(0.0), "Accessibility: 0");
        assert_eq!(accessibility_label(0.7), "Accessibility: 0.7");
    }
}
