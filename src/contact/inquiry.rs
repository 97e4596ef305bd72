use serde::{Deserialize, Serialize};

use super::category::InquiryCategory;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoInquiry {
    pub full_name: String,
    pub organization: String,
    pub system_type: String,
    pub species: String,
    pub email: String,
    pub phone: String,
    pub challenges: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorInquiry {
    pub full_name: String,
    pub organization: String,
    pub investor_type: String,
    pub email: String,
    pub focus_areas: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentInquiry {
    pub full_name: String,
    pub position: String,
    pub agency: String,
    pub region: String,
    pub email: String,
    pub project: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareersInquiry {
    pub full_name: String,
    pub location: String,
    pub expertise: String,
    pub email: String,
    pub linkedin: String,
    pub motivation: String,
}

/// Name-addressed access to a category's own fields.
pub trait FieldSlots {
    fn slot(&self, name: &str) -> Option<&String>;
    fn slot_mut(&mut self, name: &str) -> Option<&mut String>;
}

impl FieldSlots for DemoInquiry {
    fn slot(&self, name: &str) -> Option<&String> {
        Some(match name {
            "full_name" => &self.full_name,
            "organization" => &self.organization,
            "system_type" => &self.system_type,
            "species" => &self.species,
            "email" => &self.email,
            "phone" => &self.phone,
            "challenges" => &self.challenges,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "full_name" => &mut self.full_name,
            "organization" => &mut self.organization,
            "system_type" => &mut self.system_type,
            "species" => &mut self.species,
            "email" => &mut self.email,
            "phone" => &mut self.phone,
            "challenges" => &mut self.challenges,
            _ => return None,
        })
    }
}

impl FieldSlots for InvestorInquiry {
    fn slot(&self, name: &str) -> Option<&String> {
        Some(match name {
            "full_name" => &self.full_name,
            "organization" => &self.organization,
            "investor_type" => &self.investor_type,
            "email" => &self.email,
            "focus_areas" => &self.focus_areas,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "full_name" => &mut self.full_name,
            "organization" => &mut self.organization,
            "investor_type" => &mut self.investor_type,
            "email" => &mut self.email,
            "focus_areas" => &mut self.focus_areas,
            _ => return None,
        })
    }
}

impl FieldSlots for GovernmentInquiry {
    fn slot(&self, name: &str) -> Option<&String> {
        Some(match name {
            "full_name" => &self.full_name,
            "position" => &self.position,
            "agency" => &self.agency,
            "region" => &self.region,
            "email" => &self.email,
            "project" => &self.project,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "full_name" => &mut self.full_name,
            "position" => &mut self.position,
            "agency" => &mut self.agency,
            "region" => &mut self.region,
            "email" => &mut self.email,
            "project" => &mut self.project,
            _ => return None,
        })
    }
}

impl FieldSlots for CareersInquiry {
    fn slot(&self, name: &str) -> Option<&String> {
        Some(match name {
            "full_name" => &self.full_name,
            "location" => &self.location,
            "expertise" => &self.expertise,
            "email" => &self.email,
            "linkedin" => &self.linkedin,
            "motivation" => &self.motivation,
            _ => return None,
        })
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        Some(match name {
            "full_name" => &mut self.full_name,
            "location" => &mut self.location,
            "expertise" => &mut self.expertise,
            "email" => &mut self.email,
            "linkedin" => &mut self.linkedin,
            "motivation" => &mut self.motivation,
            _ => return None,
        })
    }
}

/// A submitted inquiry. Serializes as `{"category": ..., "fields": {...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", content = "fields", rename_all = "lowercase")]
pub enum Inquiry {
    Demo(DemoInquiry),
    Investor(InvestorInquiry),
    Government(GovernmentInquiry),
    Careers(CareersInquiry),
}

impl Inquiry {
    pub fn category(&self) -> InquiryCategory {
        match self {
            Inquiry::Demo(_) => InquiryCategory::Demo,
            Inquiry::Investor(_) => InquiryCategory::Investor,
            Inquiry::Government(_) => InquiryCategory::Government,
            Inquiry::Careers(_) => InquiryCategory::Careers,
        }
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.slots().slot(name).map(String::as_str)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn slots(&self) -> &dyn FieldSlots {
        match self {
            Inquiry::Demo(d) => d,
            Inquiry::Investor(d) => d,
            Inquiry::Government(d) => d,
            Inquiry::Careers(d) => d,
        }
    }
}

/// One draft per category. Switching category never carries values across.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Drafts {
    pub demo: DemoInquiry,
    pub investor: InvestorInquiry,
    pub government: GovernmentInquiry,
    pub careers: CareersInquiry,
}

impl Drafts {
    pub fn get(&self, category: InquiryCategory) -> &dyn FieldSlots {
        match category {
            InquiryCategory::Demo => &self.demo,
            InquiryCategory::Investor => &self.investor,
            InquiryCategory::Government => &self.government,
            InquiryCategory::Careers => &self.careers,
        }
    }

    pub fn get_mut(&mut self, category: InquiryCategory) -> &mut dyn FieldSlots {
        match category {
            InquiryCategory::Demo => &mut self.demo,
            InquiryCategory::Investor => &mut self.investor,
            InquiryCategory::Government => &mut self.government,
            InquiryCategory::Careers => &mut self.careers,
        }
    }

    pub fn snapshot(&self, category: InquiryCategory) -> Inquiry {
        match category {
            InquiryCategory::Demo => Inquiry::Demo(self.demo.clone()),
            InquiryCategory::Investor => Inquiry::Investor(self.investor.clone()),
            InquiryCategory::Government => Inquiry::Government(self.government.clone()),
            InquiryCategory::Careers => Inquiry::Careers(self.careers.clone()),
        }
    }
}
