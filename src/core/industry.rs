//! Fixed industry categories used for filtering.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Industry category of a company.
///
/// The backend stores the Japanese label verbatim; [`Industry::parse`] maps
/// that label back to a variant. Each variant also has an ASCII slug so the
/// category can be given on a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "第一次産業（資源・素材）")]
    PrimaryResources,
    #[serde(rename = "製造業")]
    Manufacturing,
    #[serde(rename = "建設・不動産業")]
    ConstructionRealEstate,
    #[serde(rename = "インフラ・運輸業")]
    InfrastructureTransport,
    #[serde(rename = "情報通信業")]
    InformationCommunication,
    #[serde(rename = "商業（卸売・小売業）")]
    Commerce,
    #[serde(rename = "金融・保険業")]
    FinanceInsurance,
    #[serde(rename = "専門サービス業")]
    ProfessionalServices,
    #[serde(rename = "生活・娯楽サービス業")]
    LifestyleEntertainment,
    #[serde(rename = "医療・福祉・教育産業")]
    MedicalWelfareEducation,
}

impl Industry {
    /// All categories in display order.
    pub const ALL: [Industry; 10] = [
        Industry::PrimaryResources,
        Industry::Manufacturing,
        Industry::ConstructionRealEstate,
        Industry::InfrastructureTransport,
        Industry::InformationCommunication,
        Industry::Commerce,
        Industry::FinanceInsurance,
        Industry::ProfessionalServices,
        Industry::LifestyleEntertainment,
        Industry::MedicalWelfareEducation,
    ];

    /// The label stored in company records.
    pub fn label(self) -> &'static str {
        match self {
            Industry::PrimaryResources => "第一次産業（資源・素材）",
            Industry::Manufacturing => "製造業",
            Industry::ConstructionRealEstate => "建設・不動産業",
            Industry::InfrastructureTransport => "インフラ・運輸業",
            Industry::InformationCommunication => "情報通信業",
            Industry::Commerce => "商業（卸売・小売業）",
            Industry::FinanceInsurance => "金融・保険業",
            Industry::ProfessionalServices => "専門サービス業",
            Industry::LifestyleEntertainment => "生活・娯楽サービス業",
            Industry::MedicalWelfareEducation => "医療・福祉・教育産業",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Industry::PrimaryResources => "primary",
            Industry::Manufacturing => "manufacturing",
            Industry::ConstructionRealEstate => "construction",
            Industry::InfrastructureTransport => "infrastructure",
            Industry::InformationCommunication => "it",
            Industry::Commerce => "commerce",
            Industry::FinanceInsurance => "finance",
            Industry::ProfessionalServices => "professional-services",
            Industry::LifestyleEntertainment => "lifestyle",
            Industry::MedicalWelfareEducation => "medical-welfare-education",
        }
    }

    /// Parse a record's industry label. Unknown labels yield `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|industry| industry.label() == label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = super::errors::Error;

    /// Accepts either the Japanese label or the ASCII slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::parse(trimmed)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|industry| industry.slug().eq_ignore_ascii_case(trimmed))
            })
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|i| i.slug()).collect();
                super::errors::Error::Validation(format!(
                    "unknown industry '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_label() {
        assert_eq!(Industry::parse("製造業"), Some(Industry::Manufacturing));
        assert_eq!(
            Industry::parse(" 情報通信業 "),
            Some(Industry::InformationCommunication)
        );
    }

    #[test]
    fn test_parse_unknown_label() {
        assert_eq!(Industry::parse("宇宙産業"), None);
        assert_eq!(Industry::parse(""), None);
    }

    #[test]
    fn test_from_str_accepts_slug_and_label() {
        assert_eq!("finance".parse::<Industry>().unwrap(), Industry::FinanceInsurance);
        assert_eq!(
            "IT".parse::<Industry>().unwrap(),
            Industry::InformationCommunication
        );
        assert_eq!(
            "金融・保険業".parse::<Industry>().unwrap(),
            Industry::FinanceInsurance
        );
        assert!("unknown".parse::<Industry>().is_err());
    }

    #[test]
    fn test_serializes_as_label() {
        for industry in Industry::ALL {
            let json = serde_json::to_string(&industry).unwrap();
            assert_eq!(json, format!("\"{}\"", industry.label()));
        }
    }
}
