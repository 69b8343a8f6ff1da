//! Short display of large counts

/// `999` stays `999`, `1500` is `1.5K`, `2_000_000` is `2.0M`, `3_100_000_000` is `3.1B`
pub fn shorten_number(value: u64) -> String {
    match value {
        v if v >= 1_000_000_000 => format!("{:.1}B", v as f64 / 1_000_000_000.0),
        v if v >= 1_000_000 => format!("{:.1}M", v as f64 / 1_000_000.0),
        v if v >= 1_000 => format!("{:.1}K", v as f64 / 1_000.0),
        v => v.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::shorten_number;

    #[test]
    fn suffixes() {
        assert_eq!(shorten_number(0), "0");
        assert_eq!(shorten_number(999), "999");
        assert_eq!(shorten_number(1000), "1.0K");
        assert_eq!(shorten_number(1500), "1.5K");
        assert_eq!(shorten_number(2_000_000), "2.0M");
        assert_eq!(shorten_number(3_100_000_000), "3.1B");
    }
}
