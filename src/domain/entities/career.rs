use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::{non_blank, not_blank},
    option_fields::{replace_if_some, OptionField, PatchString},
    record::Record,
};

/// A job posting. Only postings with `is_active` are shown publicly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone)]
pub struct CareerInsert {
    pub job_title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: String,
    pub salary: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(skip_serializing_if = "OptionField::is_unchanged")]
    pub salary: PatchString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCareerRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub job_title: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub department: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub location: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub employment_type: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub requirements: Option<String>,

    pub salary: Option<String>,

    pub is_active: Option<bool>,
}

/// Any subset of career fields; `salary: null` removes the salary.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCareerRequest {
    #[validate(custom(function = "not_blank"))]
    pub job_title: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub department: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub location: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub employment_type: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub requirements: Option<String>,

    pub salary: PatchString,

    pub is_active: Option<bool>,
}

impl TryFrom<NewCareerRequest> for CareerInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewCareerRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(CareerInsert {
            job_title: value.job_title.unwrap_or_default(),
            department: value.department.unwrap_or_default(),
            location: value.location.unwrap_or_default(),
            employment_type: value.employment_type.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            requirements: value.requirements.unwrap_or_default(),
            salary: non_blank(value.salary),
            is_active: value.is_active.unwrap_or(true),
        })
    }
}

impl TryFrom<UpdateCareerRequest> for CareerPatch {
    type Error = ValidationErrors;

    fn try_from(value: UpdateCareerRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(CareerPatch {
            job_title: value.job_title,
            department: value.department,
            location: value.location,
            employment_type: value.employment_type,
            description: value.description,
            requirements: value.requirements,
            salary: value.salary,
            is_active: value.is_active,
        })
    }
}

impl Record for Career {
    type New = CareerInsert;
    type Patch = CareerPatch;

    const COLLECTION: &'static str = "careers";
    const LABEL: &'static str = "Career";
    const PLURAL: &'static str = "careers";

    fn from_new(new: CareerInsert, id: String, created_at: DateTime<Utc>) -> Self {
        Career {
            id,
            job_title: new.job_title,
            department: new.department,
            location: new.location,
            employment_type: new.employment_type,
            description: new.description,
            requirements: new.requirements,
            salary: new.salary,
            is_active: new.is_active,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: CareerPatch) {
        replace_if_some(&mut self.job_title, patch.job_title);
        replace_if_some(&mut self.department, patch.department);
        replace_if_some(&mut self.location, patch.location);
        replace_if_some(&mut self.employment_type, patch.employment_type);
        replace_if_some(&mut self.description, patch.description);
        replace_if_some(&mut self.requirements, patch.requirements);
        patch.salary.apply_to(&mut self.salary);
        replace_if_some(&mut self.is_active, patch.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_postings_default_to_active() {
        let request: NewCareerRequest = serde_json::from_value(serde_json::json!({
            "jobTitle": "Field Engineer",
            "department": "Operations",
            "location": "Lagos",
            "employmentType": "Full-time",
            "description": "Site installs",
            "requirements": "3 years experience"
        }))
        .unwrap();

        let insert = CareerInsert::try_from(request).unwrap();
        assert!(insert.is_active);
        assert_eq!(insert.salary, None);
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let request: UpdateCareerRequest =
            serde_json::from_value(serde_json::json!({"isActive": false, "salary": null})).unwrap();
        let patch = CareerPatch::try_from(request).unwrap();

        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"isActive": false, "salary": null})
        );
    }

    #[test]
    fn blank_title_in_patch_is_rejected() {
        let request: UpdateCareerRequest =
            serde_json::from_value(serde_json::json!({"jobTitle": "  "})).unwrap();

        assert!(CareerPatch::try_from(request).is_err());
    }
}
