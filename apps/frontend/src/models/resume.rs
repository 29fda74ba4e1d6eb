use serde::{Deserialize, Serialize};

/// How a contact entry is reached. Unknown kinds are tolerated so that a newer
/// collaborator cannot break rendering by adding one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactMethod {
    Email,
    Phone,
    Linkedin,
    Github,
    Website,
    Address,
    #[serde(other)]
    Other,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
            ContactMethod::Linkedin => "linkedin",
            ContactMethod::Github => "github",
            ContactMethod::Website => "website",
            ContactMethod::Address => "address",
            ContactMethod::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(rename = "type", default = "default_contact_method")]
    pub kind: ContactMethod,
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
}

fn default_contact_method() -> ContactMethod {
    ContactMethod::Other
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<f64>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub company: String,
    pub position: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    pub location: Option<String>,
    pub description: Option<String>,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub technologies: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub category: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub proficiency: Option<String>,
}

/// Parsed resume as returned by the collaborator's `/parse-resume` endpoint.
///
/// Consumed read-only: the renderer walks it once and discards it. Every field
/// is optional on the wire and unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub full_name: Option<String>,
    pub contact_info: Vec<ContactInfo>,

    pub summary: Option<String>,
    pub objective: Option<String>,

    pub education: Vec<Education>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,

    pub awards: Vec<String>,
    pub publications: Vec<String>,
    pub volunteer_experience: Vec<WorkExperience>,
    pub interests: Vec<String>,

    pub parsing_confidence: Option<f64>,
    pub raw_text: Option<String>,
    pub file_name: Option<String>,
    pub parsed_date: Option<String>,
}

/// Envelope of a `/parse-resume` response.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseResumeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resume_data: Option<ResumeData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data: ResumeData = serde_json::from_str(r#"{"full_name": "Ada"}"#).unwrap();
        assert_eq!(data.full_name.as_deref(), Some("Ada"));
        assert!(data.education.is_empty());
        assert!(data.work_experience.is_empty());
        assert!(data.contact_info.is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let data: ResumeData =
            serde_json::from_str(r#"{"summary": "x", "hobby_score": 9, "extra": {"a": 1}}"#)
                .unwrap();
        assert_eq!(data.summary.as_deref(), Some("x"));
    }

    #[test]
    fn test_unknown_contact_type_is_tolerated() {
        let c: ContactInfo =
            serde_json::from_str(r#"{"type": "fax", "value": "555-0100"}"#).unwrap();
        assert_eq!(c.kind, ContactMethod::Other);
        assert_eq!(c.value, "555-0100");
    }

    #[test]
    fn test_work_entry_defaults() {
        let w: WorkExperience =
            serde_json::from_str(r#"{"company": "Acme", "position": "Eng"}"#).unwrap();
        assert!(!w.current);
        assert!(w.achievements.is_empty());
        assert!(w.start_date.is_none());
    }

    #[test]
    fn test_failure_envelope_without_data() {
        let r: ParseResumeResponse =
            serde_json::from_str(r#"{"success": false, "message": "Not a resume"}"#).unwrap();
        assert!(!r.success);
        assert_eq!(r.message.as_deref(), Some("Not a resume"));
        assert!(r.resume_data.is_none());
    }
}
