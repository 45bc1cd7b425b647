/// Translate an English city name to the Italian form used by the `Cities` collection.
///
/// Exact, case-sensitive match; anything unknown comes back unchanged.
///
/// ```
/// use ricettiva_core::translate_city;
///
/// assert_eq!(translate_city("Milan"), "Milano");
/// assert_eq!(translate_city("Unknown City"), "Unknown City");
/// ```
pub fn translate_city(name: &str) -> &str {
    match name {
        "Milan" => "Milano",
        "Rome" => "Roma",
        "Florence" => "Firenze",
        "Venice" => "Venezia",
        "Naples" => "Napoli",
        "Turin" => "Torino",
        "Genoa" => "Genova",
        "Bologna" => "Bologna",
        "Palermo" => "Palermo",
        "Bari" => "Bari",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cities_translate() {
        assert_eq!(translate_city("Milan"), "Milano");
        assert_eq!(translate_city("Florence"), "Firenze");
        assert_eq!(translate_city("Turin"), "Torino");
    }

    #[test]
    fn identity_fallback() {
        assert_eq!(translate_city("Unknown City"), "Unknown City");
        assert_eq!(translate_city("Milano"), "Milano");
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(translate_city("milan"), "milan");
        assert_eq!(translate_city("Milan "), "Milan ");
    }
}
