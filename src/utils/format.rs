use chrono::{Datelike, NaiveDate};

const WEEKDAYS_FR: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format an ISO date as a long French date: "lundi 20 janvier 2025".
/// Falls back to the raw string when it does not parse.
pub fn format_date_fr(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!(
            "{} {} {} {}",
            WEEKDAYS_FR[d.weekday().num_days_from_monday() as usize],
            d.day(),
            MONTHS_FR[d.month0() as usize],
            d.year()
        ),
        Err(_) => date.to_string(),
    }
}

/// Short French date: "20/01/2025".
pub fn format_date_short(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%d/%m/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Truncate a string to a maximum number of characters, adding an ellipsis
/// if needed. Character-based, so accented text is never split mid-byte.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_fr() {
        assert_eq!(format_date_fr("2025-01-20"), "lundi 20 janvier 2025");
        assert_eq!(format_date_fr("2025-02-15"), "samedi 15 février 2025");
        assert_eq!(format_date_fr("pas une date"), "pas une date");
    }

    #[test]
    fn test_format_date_short() {
        assert_eq!(format_date_short("2024-12-15"), "15/12/2024");
        assert_eq!(format_date_short(""), "");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Événement réservé", 10), "Événeme...");
    }
}
