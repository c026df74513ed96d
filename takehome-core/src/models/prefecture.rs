use std::fmt;

use serde::{Deserialize, Serialize};

/// The 47 prefectures of Japan.
///
/// Reference data (premium tables, National Health Insurance parameters) is
/// keyed by prefecture. A prefecture with no data is a normal case handled by
/// the calculators, not a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Prefecture {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kochi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

impl Prefecture {
    /// Every prefecture in the conventional north-to-south (JIS code) order.
    pub const ALL: [Prefecture; 47] = [
        Self::Hokkaido,
        Self::Aomori,
        Self::Iwate,
        Self::Miyagi,
        Self::Akita,
        Self::Yamagata,
        Self::Fukushima,
        Self::Ibaraki,
        Self::Tochigi,
        Self::Gunma,
        Self::Saitama,
        Self::Chiba,
        Self::Tokyo,
        Self::Kanagawa,
        Self::Niigata,
        Self::Toyama,
        Self::Ishikawa,
        Self::Fukui,
        Self::Yamanashi,
        Self::Nagano,
        Self::Gifu,
        Self::Shizuoka,
        Self::Aichi,
        Self::Mie,
        Self::Shiga,
        Self::Kyoto,
        Self::Osaka,
        Self::Hyogo,
        Self::Nara,
        Self::Wakayama,
        Self::Tottori,
        Self::Shimane,
        Self::Okayama,
        Self::Hiroshima,
        Self::Yamaguchi,
        Self::Tokushima,
        Self::Kagawa,
        Self::Ehime,
        Self::Kochi,
        Self::Fukuoka,
        Self::Saga,
        Self::Nagasaki,
        Self::Kumamoto,
        Self::Oita,
        Self::Miyazaki,
        Self::Kagoshima,
        Self::Okinawa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hokkaido => "Hokkaido",
            Self::Aomori => "Aomori",
            Self::Iwate => "Iwate",
            Self::Miyagi => "Miyagi",
            Self::Akita => "Akita",
            Self::Yamagata => "Yamagata",
            Self::Fukushima => "Fukushima",
            Self::Ibaraki => "Ibaraki",
            Self::Tochigi => "Tochigi",
            Self::Gunma => "Gunma",
            Self::Saitama => "Saitama",
            Self::Chiba => "Chiba",
            Self::Tokyo => "Tokyo",
            Self::Kanagawa => "Kanagawa",
            Self::Niigata => "Niigata",
            Self::Toyama => "Toyama",
            Self::Ishikawa => "Ishikawa",
            Self::Fukui => "Fukui",
            Self::Yamanashi => "Yamanashi",
            Self::Nagano => "Nagano",
            Self::Gifu => "Gifu",
            Self::Shizuoka => "Shizuoka",
            Self::Aichi => "Aichi",
            Self::Mie => "Mie",
            Self::Shiga => "Shiga",
            Self::Kyoto => "Kyoto",
            Self::Osaka => "Osaka",
            Self::Hyogo => "Hyogo",
            Self::Nara => "Nara",
            Self::Wakayama => "Wakayama",
            Self::Tottori => "Tottori",
            Self::Shimane => "Shimane",
            Self::Okayama => "Okayama",
            Self::Hiroshima => "Hiroshima",
            Self::Yamaguchi => "Yamaguchi",
            Self::Tokushima => "Tokushima",
            Self::Kagawa => "Kagawa",
            Self::Ehime => "Ehime",
            Self::Kochi => "Kochi",
            Self::Fukuoka => "Fukuoka",
            Self::Saga => "Saga",
            Self::Nagasaki => "Nagasaki",
            Self::Kumamoto => "Kumamoto",
            Self::Oita => "Oita",
            Self::Miyazaki => "Miyazaki",
            Self::Kagoshima => "Kagoshima",
            Self::Okinawa => "Okinawa",
        }
    }

    /// Parses an English prefecture name, ignoring case, surrounding
    /// whitespace and an administrative suffix (`Tokyo-to`, `Osaka-fu`,
    /// `Aichi-ken`, `Kyoto Prefecture`).
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = ["-to", "-fu", "-ken", " prefecture", " metropolis"]
            .iter()
            .find_map(|suffix| lowered.strip_suffix(suffix))
            .unwrap_or(lowered.as_str())
            .trim();

        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Prefecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_prefecture() {
        for prefecture in Prefecture::ALL {
            assert_eq!(Prefecture::parse(prefecture.as_str()), Some(prefecture));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Prefecture::parse("  tokyo "), Some(Prefecture::Tokyo));
        assert_eq!(Prefecture::parse("OSAKA"), Some(Prefecture::Osaka));
    }

    #[test]
    fn parse_strips_administrative_suffix() {
        assert_eq!(Prefecture::parse("Tokyo-to"), Some(Prefecture::Tokyo));
        assert_eq!(Prefecture::parse("Osaka-fu"), Some(Prefecture::Osaka));
        assert_eq!(Prefecture::parse("Aichi-ken"), Some(Prefecture::Aichi));
        assert_eq!(Prefecture::parse("Kyoto Prefecture"), Some(Prefecture::Kyoto));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(Prefecture::parse("Atlantis"), None);
        assert_eq!(Prefecture::parse(""), None);
    }

    #[test]
    fn display_uses_english_name() {
        assert_eq!(Prefecture::Hokkaido.to_string(), "Hokkaido");
    }
}
