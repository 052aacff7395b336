use crate::models::FileSize;

/// "2009-10-25T06:57:33Z" -> "October 25, 2009"
pub fn format_publish_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%B %-d, %Y").to_string()
    } else {
        iso_date.to_string()
    }
}

/// Short compact notation: 950 -> "950", 1234 -> "1.2K", 15300000 -> "15M".
pub fn format_compact(number: u64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    let value = number as f64;
    let Some(idx) = UNITS.iter().position(|(size, _)| value >= *size) else {
        return number.to_string();
    };

    let (size, suffix) = UNITS[idx];
    let scaled = value / size;
    let rounded = if scaled < 10.0 {
        (scaled * 10.0).round() / 10.0
    } else {
        scaled.round()
    };

    // 999_999 rounds up to "1000K"; promote to the next unit instead
    if rounded >= 1000.0 && idx > 0 {
        let (_, bigger) = UNITS[idx - 1];
        return format!("1{bigger}");
    }

    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, suffix)
    } else {
        format!("{:.1}{}", rounded, suffix)
    }
}

/// Counts arrive as numeric strings; anything unparseable shows as "N/A".
pub fn format_count(count: Option<&str>) -> String {
    count
        .and_then(|c| c.trim().parse::<u64>().ok())
        .map(format_compact)
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_timestamp(seconds: f64) -> String {
    let minutes = (seconds as u32) / 60;
    let remaining_seconds = (seconds as u32) % 60;
    format!("{:02}:{:02}", minutes, remaining_seconds)
}

/// "PT1H2M3S" -> "01:02:03", "PT4M13S" -> "04:13"
pub fn format_iso8601_duration(duration: &str) -> String {
    let Some(time) = duration.split('T').nth(1) else {
        return duration.to_string();
    };

    let mut hours = 0;
    let mut minutes = 0;
    let mut seconds = 0;
    let mut digits = String::new();
    for c in time.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let value = digits.parse::<u32>().unwrap_or(0);
        digits.clear();
        match c {
            'H' => hours = value,
            'M' => minutes = value,
            'S' => seconds = value,
            _ => {}
        }
    }

    // "P1DT2H" style day prefixes
    let days = duration
        .strip_prefix('P')
        .and_then(|p| p.split('D').next().filter(|_| p.contains('D')))
        .and_then(|d| d.parse::<u32>().ok())
        .unwrap_or(0);
    hours += days * 24;

    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

pub fn format_filesize(size: Option<&FileSize>) -> String {
    match size {
        Some(FileSize::Bytes(bytes)) if *bytes > 0.0 => {
            format!("{:.1} MB", bytes / 1024.0 / 1024.0)
        }
        Some(FileSize::Label(label)) if !label.trim().is_empty() => label.clone(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_date_is_long_form() {
        assert_eq!(format_publish_date("2009-10-25T06:57:33Z"), "October 25, 2009");
        assert_eq!(format_publish_date("not a date"), "not a date");
    }

    #[test]
    fn compact_notation_matches_short_display() {
        assert_eq!(format_compact(950), "950");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(1_234), "1.2K");
        assert_eq!(format_compact(12_345), "12K");
        assert_eq!(format_compact(123_456), "123K");
        assert_eq!(format_compact(999_999), "1M");
        assert_eq!(format_compact(1_500_000_000), "1.5B");
    }

    #[test]
    fn missing_or_garbage_counts_are_not_available() {
        assert_eq!(format_count(Some("1500")), "1.5K");
        assert_eq!(format_count(None), "N/A");
        assert_eq!(format_count(Some("lots")), "N/A");
    }

    #[test]
    fn durations() {
        assert_eq!(format_iso8601_duration("PT4M13S"), "04:13");
        assert_eq!(format_iso8601_duration("PT1H2M3S"), "01:02:03");
        assert_eq!(format_iso8601_duration("PT45S"), "00:45");
        assert_eq!(format_iso8601_duration("P1DT1M"), "24:01:00");
        assert_eq!(format_iso8601_duration("P0D"), "P0D");
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(75.9), "01:15");
    }

    #[test]
    fn filesize_in_megabytes() {
        assert_eq!(format_filesize(Some(&FileSize::Bytes(5_242_880.0))), "5.0 MB");
        assert_eq!(format_filesize(Some(&FileSize::Bytes(0.0))), "N/A");
        assert_eq!(
            format_filesize(Some(&FileSize::Label("12 MB".into()))),
            "12 MB"
        );
        assert_eq!(format_filesize(None), "N/A");
    }
}
