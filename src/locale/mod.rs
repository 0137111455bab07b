//! Locale name tables used when rendering and parsing text fields.

mod builtin;

/// Locale settings for formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub identifier: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
    /// Index 0 is the era before year 1, index 1 the common era.
    pub era_names_short: [&'static str; 2],
    pub era_names_full: [&'static str; 2],
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    /// Sunday first.
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// Looks up a built-in locale by identifier.
    ///
    /// Accepts `_` or `-` as separator and matches the language alone when no
    /// region matches (`"fr"` → `fr_FR`). `en_US_POSIX` maps to `en_US`.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let normalized = identifier.replace('-', "_").to_ascii_lowercase();
        let mut pieces = normalized.split('_');
        let language = pieces.next().unwrap_or_default();
        let region = pieces.next().unwrap_or_default();

        match (language, region) {
            ("en", "gb") => Some(Self::en_gb()),
            ("en", _) => Some(Self::en_us()),
            ("fr", _) => Some(Self::fr_fr()),
            ("de", _) => Some(Self::de_de()),
            _ => None,
        }
    }

    /// Single-letter month name, derived from the full name.
    pub fn month_name_narrow(&self, month0: usize) -> String {
        first_char_upper(self.month_names_full[month0])
    }

    /// Single-letter weekday name, derived from the full name.
    pub fn day_name_narrow(&self, weekday0: usize) -> String {
        first_char_upper(self.day_names_full[weekday0])
    }

    /// Single-letter era name, derived from the short name.
    pub fn era_name_narrow(&self, era: usize) -> String {
        first_char_upper(self.era_names_short[era])
    }
}

fn first_char_upper(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
