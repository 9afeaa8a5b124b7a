/// Width of a skill bar, in percent of the track.
pub fn skill_bar_width(level: i32) -> u8 {
    // Endpoints do not validate levels.
    level.clamp(0, 100) as u8
}

/// Human date for a blog post, e.g. `Mar 4, 2024`.
///
/// Accepts `YYYY-MM-DD` as well as full RFC 3339 timestamps, anything else
/// is returned unchanged.
pub fn display_date(iso: &str) -> String {
    let date = chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(iso)
            .ok()
            .map(|datetime| datetime.date_naive())
    });
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => String::from(iso),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_bounds() {
        assert_eq!(skill_bar_width(0), 0);
        assert_eq!(skill_bar_width(45), 45);
        assert_eq!(skill_bar_width(100), 100);
    }

    #[test]
    fn bar_width_clamps_out_of_range_levels() {
        assert_eq!(skill_bar_width(-5), 0);
        assert_eq!(skill_bar_width(140), 100);
        assert_eq!(skill_bar_width(i32::MIN), 0);
    }

    #[test]
    fn bar_width_is_monotonic() {
        let widths: Vec<u8> = (-10..=110).map(skill_bar_width).collect();
        assert!(widths.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn dates() {
        assert_eq!(display_date("2024-03-04"), "Mar 4, 2024");
        assert_eq!(display_date("2023-11-20T08:30:00.000Z"), "Nov 20, 2023");
        assert_eq!(display_date("sometime in 2022"), "sometime in 2022");
    }
}
