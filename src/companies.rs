//! Read-only company directory consulted by `showCompany`,
//! `addToWatchlist` and the recommendation context.
//!
//! Lookups are case-insensitive on the company name. Names that are not in
//! the directory get a synthetic record from [`CompanyDirectory::synthesize`].

use serde::{Deserialize, Serialize};

use crate::generate::MarketDataGenerator;

/// Analyst rating attached to a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Overweight,
    Neutral,
    Underweight,
}

impl Rating {
    /// Trend implied by the rating when a company carries no explicit trend.
    pub fn trend(self) -> Trend {
        match self {
            Rating::Overweight => Trend::Up,
            Rating::Neutral => Trend::Neutral,
            Rating::Underweight => Trend::Down,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Neutral,
    Down,
}

impl Trend {
    /// Chart stroke colour for this trend.
    pub fn stroke(self) -> &'static str {
        match self {
            Trend::Up => "#22c55e",
            Trend::Down => "#ef4444",
            Trend::Neutral => "#f59e42",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analyst {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partnership {
    pub partner: String,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub analysts: Vec<Analyst>,
    pub rating: Rating,
    /// Display string, e.g. `"$740"`.
    pub target_price: String,
    pub partnerships: Vec<Partnership>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    /// True when the record was generated for an unknown name.
    #[serde(default)]
    pub synthetic: bool,
}

impl Company {
    pub fn trend(&self) -> Trend {
        self.trend.unwrap_or_else(|| self.rating.trend())
    }

    /// Numeric part of the target price, or 0 when it has none.
    pub fn target_price_value(&self) -> f64 {
        let digits: String = self
            .target_price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    companies: Vec<Company>,
}

impl CompanyDirectory {
    pub fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// The companies covered by the research article.
    pub fn builtin() -> Self {
        Self::new(vec![
            company(
                "OpenAI",
                "AI Research & Development",
                Rating::Overweight,
                "$740",
                &[
                    ("NVIDIA", "Strategic partnership for 10GW computing systems deployment", Some("$100bn")),
                    ("Oracle", "Five-year partnership", Some("$300bn")),
                    ("CoreWeave", "Expanded agreement for infrastructure", Some("$22.4bn")),
                    ("Databricks", "Multi-year partnership for enterprise AI", Some("$100mn")),
                ],
            ),
            company(
                "Anthropic",
                "AI Research & Safety",
                Rating::Underweight,
                "$1020",
                &[
                    ("Microsoft", "Models available on Microsoft 365 Copilot", None),
                    ("Databricks", "Five-year strategic partnership", None),
                ],
            ),
            company(
                "NVIDIA",
                "Hardware & Computing",
                Rating::Overweight,
                "$980",
                &[("OpenAI", "Strategic computing systems partnership", Some("$100bn"))],
            ),
            company(
                "Databricks",
                "Data & AI Platform",
                Rating::Underweight,
                "$452",
                &[
                    ("OpenAI", "Multi-year partnership for enterprise AI", Some("$100mn")),
                    ("Anthropic", "Five-year strategic partnership", None),
                ],
            ),
            company(
                "Oracle",
                "Cloud & Infrastructure",
                Rating::Underweight,
                "$115",
                &[("OpenAI", "Five-year partnership", Some("$300bn"))],
            ),
            company(
                "CoreWeave",
                "Cloud Infrastructure",
                Rating::Overweight,
                "$289",
                &[("OpenAI", "Expanded infrastructure agreement", Some("$22.4bn"))],
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Company> {
        self.companies.iter()
    }

    /// Case-insensitive lookup by company name.
    pub fn find(&self, name: &str) -> Option<&Company> {
        let needle = name.to_lowercase();
        self.companies.iter().find(|c| c.name.to_lowercase() == needle)
    }

    /// Companies whose name occurs anywhere in `text`, in directory order.
    pub fn mentioned_in(&self, text: &str) -> Vec<&Company> {
        let haystack = text.to_lowercase();
        self.companies
            .iter()
            .filter(|c| haystack.contains(&c.name.to_lowercase()))
            .collect()
    }

    /// Directory record for `name`, or a plausible synthetic one.
    pub fn find_or_synthesize(&self, name: &str, generator: &mut MarketDataGenerator) -> Company {
        match self.find(name) {
            Some(company) => company.clone(),
            None => Self::synthesize(name, generator),
        }
    }

    pub fn synthesize(name: &str, generator: &mut MarketDataGenerator) -> Company {
        tracing::debug!(company = %name, "Synthesizing company record");
        Company {
            name: name.to_string(),
            kind: "Emerging Technology".to_string(),
            analysts: vec![Analyst {
                name: "John Smith".to_string(),
                title: "Research Analyst".to_string(),
                email: "john.smith@example.com".to_string(),
                phone: "(1-555) 555-0123".to_string(),
            }],
            rating: generator.rating(),
            target_price: generator.target_price(),
            partnerships: vec![Partnership {
                partner: "Industry Leader".to_string(),
                details: "Strategic Partnership".to_string(),
                value: Some(generator.partnership_value()),
            }],
            trend: None,
            synthetic: true,
        }
    }
}

fn company(
    name: &str,
    kind: &str,
    rating: Rating,
    target_price: &str,
    partnerships: &[(&str, &str, Option<&str>)],
) -> Company {
    Company {
        name: name.to_string(),
        kind: kind.to_string(),
        analysts: coverage_team(),
        rating,
        target_price: target_price.to_string(),
        partnerships: partnerships
            .iter()
            .map(|(partner, details, value)| Partnership {
                partner: partner.to_string(),
                details: details.to_string(),
                value: value.map(str::to_string),
            })
            .collect(),
        trend: None,
        synthetic: false,
    }
}

fn coverage_team() -> Vec<Analyst> {
    [
        ("Brenda Duverce", "brenda.duverce", "(1-212) 622-5106"),
        ("Lula Sheena, CFA", "lula.sheena", "(44-20) 7742-1452"),
        ("Aaron Steiker", "aaron.steiker", "(1-212) 270-3679"),
    ]
    .into_iter()
    .map(|(name, mailbox, phone)| Analyst {
        name: name.to_string(),
        title: "Private Company Research".to_string(),
        email: format!("{}@research.example.com", mailbox),
        phone: phone.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_directory() {
        let dir = CompanyDirectory::builtin();
        assert_eq!(dir.iter().count(), 6);
        let names: Vec<_> = dir.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names[..3], ["OpenAI", "Anthropic", "NVIDIA"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let dir = CompanyDirectory::builtin();
        assert_eq!(dir.find("nvidia").unwrap().name, "NVIDIA");
        assert_eq!(dir.find("OPENAI").unwrap().rating, Rating::Overweight);
        assert!(dir.find("Acme").is_none());
    }

    #[test]
    fn test_target_price_value() {
        let dir = CompanyDirectory::builtin();
        assert_eq!(dir.find("Oracle").unwrap().target_price_value(), 115.0);
        assert_eq!(dir.find("Anthropic").unwrap().target_price_value(), 1020.0);
    }

    #[test]
    fn test_trend_falls_back_to_rating() {
        let dir = CompanyDirectory::builtin();
        assert_eq!(dir.find("CoreWeave").unwrap().trend(), Trend::Up);
        assert_eq!(dir.find("Oracle").unwrap().trend(), Trend::Down);

        let mut explicit = dir.find("Oracle").unwrap().clone();
        explicit.trend = Some(Trend::Neutral);
        assert_eq!(explicit.trend(), Trend::Neutral);
    }

    #[test]
    fn test_mentioned_in_keeps_directory_order() {
        let dir = CompanyDirectory::builtin();
        let found: Vec<_> = dir
            .mentioned_in("Deals with oracle and NVIDIA were announced")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(found, vec!["NVIDIA", "Oracle"]);
    }

    #[test]
    fn test_synthesize_unknown_company() {
        let dir = CompanyDirectory::builtin();
        let mut generator = MarketDataGenerator::new(Some(11));
        let acme = dir.find_or_synthesize("Acme Robotics", &mut generator);
        assert!(acme.synthetic);
        assert_eq!(acme.name, "Acme Robotics");
        assert_eq!(acme.kind, "Emerging Technology");
        assert!(acme.target_price.starts_with('$'));
        assert_eq!(acme.analysts.len(), 1);

        let known = dir.find_or_synthesize("databricks", &mut generator);
        assert!(!known.synthetic);
        assert_eq!(known.name, "Databricks");
    }

    #[test]
    fn test_company_serializes_type_field() {
        let dir = CompanyDirectory::builtin();
        let json = serde_json::to_value(dir.find("NVIDIA").unwrap()).unwrap();
        assert_eq!(json["type"], "Hardware & Computing");
        assert_eq!(json["targetPrice"], "$980");
        assert_eq!(json["rating"], "Overweight");
    }
}
