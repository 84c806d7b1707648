use serde::{Deserialize, Serialize};

/// Currency a directory page quotes budgets in.
///
/// Stored budgets carry no currency; each market multiplies them by a fixed
/// rate before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCurrency {
    #[default]
    Usd,
    Gbp,
    Eur,
    Aud,
    Cad,
    Chf,
    Sgd,
    Aed,
    Dkk,
    Nok,
    Sek,
    Pln,
}

impl DisplayCurrency {
    pub const fn all() -> [Self; 12] {
        [
            Self::Usd,
            Self::Gbp,
            Self::Eur,
            Self::Aud,
            Self::Cad,
            Self::Chf,
            Self::Sgd,
            Self::Aed,
            Self::Dkk,
            Self::Nok,
            Self::Sek,
            Self::Pln,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Gbp => "GBP",
            Self::Eur => "EUR",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
            Self::Chf => "CHF",
            Self::Sgd => "SGD",
            Self::Aed => "AED",
            Self::Dkk => "DKK",
            Self::Nok => "NOK",
            Self::Sek => "SEK",
            Self::Pln => "PLN",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Gbp => "£",
            Self::Eur => "€",
            Self::Aud => "A$",
            Self::Cad => "CA$",
            Self::Chf => "CHF",
            Self::Sgd => "S$",
            Self::Aed => "AED",
            Self::Dkk => "DKK",
            Self::Nok => "NOK",
            Self::Sek => "SEK",
            Self::Pln => "PLN",
        }
    }

    pub const fn rate(self) -> f64 {
        match self {
            Self::Usd | Self::Gbp | Self::Eur | Self::Cad | Self::Chf => 1.0,
            Self::Aud => 1.5,
            Self::Sgd => 1.35,
            Self::Aed => 3.67,
            Self::Dkk => 7.5,
            Self::Nok => 11.0,
            Self::Sek => 10.0,
            Self::Pln => 4.0,
        }
    }

    pub fn convert(self, amount: f64) -> f64 {
        amount * self.rate()
    }

    /// Renders a budget as whole thousands, e.g. `S$14K+`.
    pub fn format_thousands(self, amount: f64) -> String {
        let thousands = (self.convert(amount) / 1000.0).round();
        format!("{}{}K+", self.symbol(), thousands as i64)
    }

    /// Looks up an ISO code such as `gbp` or `GBP`.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::all()
            .into_iter()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }

    /// Currency used by pages for a country or city market.
    pub fn for_market(market: &str) -> Self {
        match market.trim().to_ascii_lowercase().as_str() {
            "uk" | "united kingdom" | "london" | "manchester" => Self::Gbp,
            "europe" | "germany" | "berlin" | "munich" | "france" | "paris" | "spain"
            | "madrid" | "barcelona" | "italy" | "rome" | "milan" | "netherlands"
            | "amsterdam" | "ireland" | "dublin" | "belgium" | "austria" | "finland" => Self::Eur,
            "australia" | "sydney" | "melbourne" => Self::Aud,
            "canada" | "toronto" | "vancouver" => Self::Cad,
            "switzerland" | "zurich" => Self::Chf,
            "singapore" => Self::Sgd,
            "uae" | "dubai" | "abu dhabi" => Self::Aed,
            "denmark" | "copenhagen" => Self::Dkk,
            "norway" | "oslo" => Self::Nok,
            "sweden" | "stockholm" => Self::Sek,
            "poland" | "warsaw" => Self::Pln,
            _ => Self::Usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_converted_thousands() {
        assert_eq!(DisplayCurrency::Sgd.format_thousands(10_000.0), "S$14K+");
        assert_eq!(DisplayCurrency::Aed.format_thousands(15_000.0), "AED55K+");
        assert_eq!(DisplayCurrency::Nok.format_thousands(10_000.0), "NOK110K+");
        assert_eq!(DisplayCurrency::Gbp.format_thousands(12_400.0), "£12K+");
        assert_eq!(DisplayCurrency::Usd.format_thousands(0.0), "$0K+");
    }

    #[test]
    fn markets_map_to_page_currencies() {
        assert_eq!(DisplayCurrency::for_market("London"), DisplayCurrency::Gbp);
        assert_eq!(DisplayCurrency::for_market(" Sydney "), DisplayCurrency::Aud);
        assert_eq!(DisplayCurrency::for_market("UAE"), DisplayCurrency::Aed);
        assert_eq!(DisplayCurrency::for_market("Berlin"), DisplayCurrency::Eur);
        assert_eq!(DisplayCurrency::for_market("New York"), DisplayCurrency::Usd);
    }

    #[test]
    fn codes_round_trip_case_insensitively() {
        assert_eq!(DisplayCurrency::from_code("pln"), Some(DisplayCurrency::Pln));
        assert_eq!(DisplayCurrency::from_code("GBP"), Some(DisplayCurrency::Gbp));
        assert_eq!(DisplayCurrency::from_code("XYZ"), None);
    }
}
