use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::{non_blank, not_blank, validate_site_count, SiteCount},
    option_fields::{replace_if_some, OptionField, PatchString},
    record::Record,
};

// ───── Stored Model ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub customer: String,
    pub oem: String,
    pub operator: String,
    pub activity: String,
    pub no_of_sites: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ProjectInsert {
    pub project_name: String,
    pub customer: String,
    pub oem: String,
    pub operator: String,
    pub activity: String,
    pub no_of_sites: u32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_sites: Option<u32>,
    #[serde(skip_serializing_if = "OptionField::is_unchanged")]
    pub image: PatchString,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProjectRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub project_name: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub customer: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub oem: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub operator: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub activity: Option<String>,

    #[validate(required, custom(function = "validate_site_count"))]
    pub no_of_sites: Option<SiteCount>,

    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(custom(function = "not_blank"))]
    pub project_name: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub customer: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub oem: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub operator: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub activity: Option<String>,

    #[validate(custom(function = "validate_site_count"))]
    pub no_of_sites: Option<SiteCount>,

    pub image: PatchString,
}

// ───── Conversions ──────────────────────────────────────────────────

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectInsert {
            project_name: value.project_name.unwrap_or_default(),
            customer: value.customer.unwrap_or_default(),
            oem: value.oem.unwrap_or_default(),
            operator: value.operator.unwrap_or_default(),
            activity: value.activity.unwrap_or_default(),
            no_of_sites: value.no_of_sites.and_then(|c| c.value()).unwrap_or_default(),
            image: non_blank(value.image),
        })
    }
}

impl TryFrom<UpdateProjectRequest> for ProjectPatch {
    type Error = ValidationErrors;

    fn try_from(value: UpdateProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(ProjectPatch {
            project_name: value.project_name,
            customer: value.customer,
            oem: value.oem,
            operator: value.operator,
            activity: value.activity,
            no_of_sites: value.no_of_sites.and_then(|c| c.value()),
            image: value.image,
        })
    }
}

impl Record for Project {
    type New = ProjectInsert;
    type Patch = ProjectPatch;

    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const PLURAL: &'static str = "projects";

    fn from_new(new: ProjectInsert, id: String, created_at: DateTime<Utc>) -> Self {
        Project {
            id,
            project_name: new.project_name,
            customer: new.customer,
            oem: new.oem,
            operator: new.operator,
            activity: new.activity,
            no_of_sites: new.no_of_sites,
            image: new.image,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: ProjectPatch) {
        replace_if_some(&mut self.project_name, patch.project_name);
        replace_if_some(&mut self.customer, patch.customer);
        replace_if_some(&mut self.oem, patch.oem);
        replace_if_some(&mut self.operator, patch.operator);
        replace_if_some(&mut self.activity, patch.activity);
        replace_if_some(&mut self.no_of_sites, patch.no_of_sites);
        patch.image.apply_to(&mut self.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{validation_message, INVALID_SITE_COUNT_MESSAGE, MISSING_FIELDS_MESSAGE};

    fn request(json: serde_json::Value) -> NewProjectRequest {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn string_site_count_becomes_integer() {
        let insert = ProjectInsert::try_from(request(serde_json::json!({
            "projectName": "X", "customer": "Y", "oem": "Z",
            "operator": "W", "activity": "Install", "noOfSites": "5"
        })))
        .unwrap();

        assert_eq!(insert.no_of_sites, 5);
        assert_eq!(insert.image, None);
    }

    #[test]
    fn zero_sites_is_allowed() {
        let insert = ProjectInsert::try_from(request(serde_json::json!({
            "projectName": "X", "customer": "Y", "oem": "Z",
            "operator": "W", "activity": "Survey", "noOfSites": 0
        })))
        .unwrap();

        assert_eq!(insert.no_of_sites, 0);
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = ProjectInsert::try_from(request(serde_json::json!({
            "projectName": "X", "noOfSites": 2
        })))
        .unwrap_err();

        assert_eq!(validation_message(&err), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn non_numeric_site_count_is_rejected() {
        let err = ProjectInsert::try_from(request(serde_json::json!({
            "projectName": "X", "customer": "Y", "oem": "Z",
            "operator": "W", "activity": "Install", "noOfSites": "many"
        })))
        .unwrap_err();

        assert_eq!(validation_message(&err), INVALID_SITE_COUNT_MESSAGE);
    }

    #[test]
    fn patch_touches_only_supplied_fields() {
        let mut project = Project::create(ProjectInsert {
            project_name: "Tower".into(),
            customer: "Acme".into(),
            oem: "Nokia".into(),
            operator: "Op".into(),
            activity: "Install".into(),
            no_of_sites: 3,
            image: Some("data:image/png;base64,AAA".into()),
        });
        let before = project.clone();

        project.apply_patch(ProjectPatch {
            activity: Some("Decommission".into()),
            ..Default::default()
        });

        assert_eq!(project.activity, "Decommission");
        assert_eq!(project.id, before.id);
        assert_eq!(project.created_at, before.created_at);
        assert_eq!(project.no_of_sites, before.no_of_sites);
        assert_eq!(project.image, before.image);
    }
}
