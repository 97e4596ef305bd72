use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Purpose of a contact-form inquiry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryCategory {
    #[default]
    Demo,
    Investor,
    Government,
    Careers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Url,
    TextArea { rows: u32 },
    Select {
        prompt: &'static str,
        options: &'static [SelectOption],
    },
}

/// Declared metadata of one input in a category's form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    const fn placeholder(self, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..self
        }
    }

    pub fn options(&self) -> &'static [SelectOption] {
        match self.kind {
            FieldKind::Select { options, .. } => options,
            _ => &[],
        }
    }
}

const SYSTEM_TYPES: &[SelectOption] = &[
    SelectOption { value: "cage", label: "Cage" },
    SelectOption { value: "pond", label: "Pond" },
    SelectOption { value: "ras", label: "RAS" },
    SelectOption { value: "hatchery", label: "Hatchery" },
];

const SPECIES: &[SelectOption] = &[
    SelectOption { value: "shrimp", label: "Shrimp" },
    SelectOption { value: "salmon", label: "Salmon" },
    SelectOption { value: "tilapia", label: "Tilapia" },
];

const INVESTOR_TYPES: &[SelectOption] = &[
    SelectOption { value: "individual", label: "Individual" },
    SelectOption { value: "fund", label: "Fund" },
    SelectOption { value: "institution", label: "Institution" },
];

const EXPERTISE: &[SelectOption] = &[
    SelectOption { value: "ai-ml", label: "AI/ML" },
    SelectOption { value: "aquaculture", label: "Aquaculture" },
    SelectOption { value: "software", label: "Software Engineering" },
];

const FULL_NAME: FieldSpec = FieldSpec::new("full_name", "Full Name", FieldKind::Text).required();
const EMAIL: FieldSpec = FieldSpec::new("email", "Email Address", FieldKind::Email).required();

const DEMO_FIELDS: &[FieldSpec] = &[
    FULL_NAME.placeholder("John Doe"),
    FieldSpec::new("organization", "Organization Name", FieldKind::Text)
        .required()
        .placeholder("Company Name"),
    FieldSpec::new(
        "system_type",
        "Production System Type",
        FieldKind::Select { prompt: "Select system", options: SYSTEM_TYPES },
    )
    .required(),
    FieldSpec::new(
        "species",
        "Primary Species",
        FieldKind::Select { prompt: "Select species", options: SPECIES },
    ),
    EMAIL.placeholder("john@example.com"),
    FieldSpec::new("phone", "Phone Number", FieldKind::Tel).placeholder("+1 234 567 8900"),
    FieldSpec::new(
        "challenges",
        "Current Challenges or Goals (Optional)",
        FieldKind::TextArea { rows: 4 },
    )
    .placeholder("Tell us about your current challenges..."),
];

const INVESTOR_FIELDS: &[FieldSpec] = &[
    FULL_NAME,
    FieldSpec::new("organization", "Organization Name", FieldKind::Text).required(),
    FieldSpec::new(
        "investor_type",
        "Investor Type",
        FieldKind::Select { prompt: "Select type", options: INVESTOR_TYPES },
    )
    .required(),
    EMAIL,
    FieldSpec::new("focus_areas", "Investment Focus Areas", FieldKind::Text)
        .placeholder("e.g., ESG, Blue Economy"),
];

const GOVERNMENT_FIELDS: &[FieldSpec] = &[
    FULL_NAME,
    FieldSpec::new("position", "Title/Position", FieldKind::Text).required(),
    FieldSpec::new("agency", "Organization/Agency", FieldKind::Text).required(),
    FieldSpec::new("region", "Country/Region", FieldKind::Text).required(),
    EMAIL,
    FieldSpec::new(
        "project",
        "Project or Initiative Description",
        FieldKind::TextArea { rows: 4 },
    ),
];

const CAREERS_FIELDS: &[FieldSpec] = &[
    FULL_NAME,
    FieldSpec::new("location", "Current Location", FieldKind::Text).required(),
    FieldSpec::new(
        "expertise",
        "Areas of Expertise",
        FieldKind::Select { prompt: "Select expertise", options: EXPERTISE },
    )
    .required(),
    EMAIL,
    FieldSpec::new("linkedin", "LinkedIn Profile", FieldKind::Url)
        .placeholder("https://linkedin.com/in/yourprofile"),
    FieldSpec::new("motivation", "Why AquaCORTEX?", FieldKind::TextArea { rows: 4 })
        .placeholder("Tell us why you want to join our team..."),
];

impl InquiryCategory {
    pub const ALL: [InquiryCategory; 4] = [
        InquiryCategory::Demo,
        InquiryCategory::Investor,
        InquiryCategory::Government,
        InquiryCategory::Careers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InquiryCategory::Demo => "demo",
            InquiryCategory::Investor => "investor",
            InquiryCategory::Government => "government",
            InquiryCategory::Careers => "careers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            InquiryCategory::Demo => "Request a Demo",
            InquiryCategory::Investor => "Investor Relations",
            InquiryCategory::Government => "Government & Institutional",
            InquiryCategory::Careers => "Careers",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            InquiryCategory::Demo => "For farm operators, hatchery managers, operations directors",
            InquiryCategory::Investor => {
                "For impact investors, venture capital, institutional investors"
            }
            InquiryCategory::Government => {
                "For governments, development agencies, NGOs, international organizations"
            }
            InquiryCategory::Careers => "Join our team in transforming global aquaculture",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            InquiryCategory::Demo => "🎯",
            InquiryCategory::Investor => "💼",
            InquiryCategory::Government => "🏛️",
            InquiryCategory::Careers => "🚀",
        }
    }

    /// CSS modifier used for the tab accent and submit button gradient.
    pub fn accent(&self) -> &'static str {
        match self {
            InquiryCategory::Demo => "accent-cyan",
            InquiryCategory::Investor => "accent-violet",
            InquiryCategory::Government => "accent-emerald",
            InquiryCategory::Careers => "accent-orange",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            InquiryCategory::Demo => DEMO_FIELDS,
            InquiryCategory::Investor => INVESTOR_FIELDS,
            InquiryCategory::Government => GOVERNMENT_FIELDS,
            InquiryCategory::Careers => CAREERS_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Lenient lookup for query strings: unknown text yields `None`.
    pub fn from_query(value: &str) -> Option<Self> {
        value.trim().to_ascii_lowercase().parse().ok()
    }
}

impl fmt::Display for InquiryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown inquiry category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_first() {
        assert_eq!(InquiryCategory::default(), InquiryCategory::ALL[0]);
    }

    #[test]
    fn test_field_names_unique_per_category() {
        for category in InquiryCategory::ALL {
            let names: HashSet<_> = category.fields().iter().map(|f| f.name).collect();
            assert_eq!(names.len(), category.fields().len(), "{}", category);
        }
    }

    #[test]
    fn test_every_category_asks_for_name_and_email() {
        for category in InquiryCategory::ALL {
            assert!(category.field("full_name").is_some_and(|f| f.required));
            assert!(category.field("email").is_some_and(|f| f.required));
        }
    }

    #[test]
    fn test_from_query() {
        assert_eq!(InquiryCategory::from_query("investor"), Some(InquiryCategory::Investor));
        assert_eq!(InquiryCategory::from_query(" Careers "), Some(InquiryCategory::Careers));
        assert_eq!(InquiryCategory::from_query("press"), None);
    }

    #[test]
    fn test_select_options() {
        let system = InquiryCategory::Demo.field("system_type").unwrap();
        let values: Vec<_> = system.options().iter().map(|o| o.value).collect();
        assert_eq!(values, ["cage", "pond", "ras", "hatchery"]);
        assert!(InquiryCategory::Demo.field("email").unwrap().options().is_empty());
    }
}
