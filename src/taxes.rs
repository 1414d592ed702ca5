/// Regional withholding lookup: 2025 top marginal state income-tax rates
/// for the 50 states plus DC, with display names.
///
/// This table is wiring-layer data. It is handed to whatever resolves a
/// region code into a rate before building an `EvRequest`; the EV engine
/// only ever sees the plain numeric rate.

/// One jurisdiction: postal code, display name, top marginal rate.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Jurisdiction {
    pub code: &'static str,
    pub name: &'static str,
    pub top_rate: f64,
}

const TOP_RATES_2025: [Jurisdiction; 51] = [
    Jurisdiction { code: "AL", name: "Alabama", top_rate: 0.0415 },
    Jurisdiction { code: "AK", name: "Alaska", top_rate: 0.0 },
    Jurisdiction { code: "AZ", name: "Arizona", top_rate: 0.025 },
    Jurisdiction { code: "AR", name: "Arkansas", top_rate: 0.039 },
    Jurisdiction { code: "CA", name: "California", top_rate: 0.144 },
    Jurisdiction { code: "CO", name: "Colorado", top_rate: 0.044 },
    Jurisdiction { code: "CT", name: "Connecticut", top_rate: 0.0699 },
    Jurisdiction { code: "DE", name: "Delaware", top_rate: 0.0785 },
    Jurisdiction { code: "FL", name: "Florida", top_rate: 0.0 },
    Jurisdiction { code: "GA", name: "Georgia", top_rate: 0.0539 },
    Jurisdiction { code: "HI", name: "Hawaii", top_rate: 0.11 },
    Jurisdiction { code: "ID", name: "Idaho", top_rate: 0.057 },
    Jurisdiction { code: "IL", name: "Illinois", top_rate: 0.0495 },
    Jurisdiction { code: "IN", name: "Indiana", top_rate: 0.0502 },
    Jurisdiction { code: "IA", name: "Iowa", top_rate: 0.038 },
    Jurisdiction { code: "KS", name: "Kansas", top_rate: 0.0558 },
    Jurisdiction { code: "KY", name: "Kentucky", top_rate: 0.062 },
    Jurisdiction { code: "LA", name: "Louisiana", top_rate: 0.03 },
    Jurisdiction { code: "ME", name: "Maine", top_rate: 0.0715 },
    Jurisdiction { code: "MD", name: "Maryland", top_rate: 0.0895 },
    Jurisdiction { code: "MA", name: "Massachusetts", top_rate: 0.09 },
    Jurisdiction { code: "MI", name: "Michigan", top_rate: 0.0665 },
    Jurisdiction { code: "MN", name: "Minnesota", top_rate: 0.0985 },
    Jurisdiction { code: "MS", name: "Mississippi", top_rate: 0.044 },
    Jurisdiction { code: "MO", name: "Missouri", top_rate: 0.057 },
    Jurisdiction { code: "MT", name: "Montana", top_rate: 0.059 },
    Jurisdiction { code: "NE", name: "Nebraska", top_rate: 0.052 },
    Jurisdiction { code: "NV", name: "Nevada", top_rate: 0.0 },
    Jurisdiction { code: "NH", name: "New Hampshire", top_rate: 0.0 },
    Jurisdiction { code: "NJ", name: "New Jersey", top_rate: 0.1175 },
    Jurisdiction { code: "NM", name: "New Mexico", top_rate: 0.059 },
    Jurisdiction { code: "NY", name: "New York", top_rate: 0.1478 },
    Jurisdiction { code: "NC", name: "North Carolina", top_rate: 0.0425 },
    Jurisdiction { code: "ND", name: "North Dakota", top_rate: 0.025 },
    Jurisdiction { code: "OH", name: "Ohio", top_rate: 0.06 },
    Jurisdiction { code: "OK", name: "Oklahoma", top_rate: 0.0475 },
    Jurisdiction { code: "OR", name: "Oregon", top_rate: 0.1469 },
    Jurisdiction { code: "PA", name: "Pennsylvania", top_rate: 0.0686 },
    Jurisdiction { code: "RI", name: "Rhode Island", top_rate: 0.0599 },
    Jurisdiction { code: "SC", name: "South Carolina", top_rate: 0.062 },
    Jurisdiction { code: "SD", name: "South Dakota", top_rate: 0.0 },
    Jurisdiction { code: "TN", name: "Tennessee", top_rate: 0.0 },
    Jurisdiction { code: "TX", name: "Texas", top_rate: 0.0 },
    Jurisdiction { code: "UT", name: "Utah", top_rate: 0.0455 },
    Jurisdiction { code: "VT", name: "Vermont", top_rate: 0.0875 },
    Jurisdiction { code: "VA", name: "Virginia", top_rate: 0.0575 },
    Jurisdiction { code: "WA", name: "Washington", top_rate: 0.0 },
    Jurisdiction { code: "WV", name: "West Virginia", top_rate: 0.0482 },
    Jurisdiction { code: "WI", name: "Wisconsin", top_rate: 0.0765 },
    Jurisdiction { code: "WY", name: "Wyoming", top_rate: 0.0 },
    Jurisdiction { code: "DC", name: "District of Columbia", top_rate: 0.1075 },
];

/// Injected rate lookup. Callers construct one and pass it to the wiring
/// layer; nothing global, nothing mutable.
#[derive(Debug, Clone)]
pub struct TaxTable {
    entries: &'static [Jurisdiction],
}

impl TaxTable {
    pub fn top_rates_2025() -> Self {
        Self {
            entries: &TOP_RATES_2025,
        }
    }

    /// Top marginal rate for a postal code, case-insensitive.
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.find(code).map(|j| j.top_rate)
    }

    /// Display name for a postal code, case-insensitive.
    pub fn name(&self, code: &str) -> Option<&'static str> {
        self.find(code).map(|j| j.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.entries.iter()
    }

    fn find(&self, code: &str) -> Option<&Jurisdiction> {
        let code = code.trim();
        self.entries
            .iter()
            .find(|j| j.code.eq_ignore_ascii_case(code))
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        Self::top_rates_2025()
    }
}
