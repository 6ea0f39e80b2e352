use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::not_blank,
    option_fields::replace_if_some,
    record::Record,
};

/// A purchase-order record. `po_date` and `project_status` are free text
/// as entered by the admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoProject {
    pub id: String,
    pub po_date: String,
    pub client: String,
    pub product: String,
    pub project_status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PoProjectInsert {
    pub po_date: String,
    pub client: String,
    pub product: String,
    pub project_status: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub po_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_status: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPoProjectRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub po_date: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub client: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub product: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub project_status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdatePoProjectRequest {
    #[validate(custom(function = "not_blank"))]
    pub po_date: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub client: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub product: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub project_status: Option<String>,
}

impl TryFrom<NewPoProjectRequest> for PoProjectInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewPoProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(PoProjectInsert {
            po_date: value.po_date.unwrap_or_default(),
            client: value.client.unwrap_or_default(),
            product: value.product.unwrap_or_default(),
            project_status: value.project_status.unwrap_or_default(),
        })
    }
}

impl TryFrom<UpdatePoProjectRequest> for PoProjectPatch {
    type Error = ValidationErrors;

    fn try_from(value: UpdatePoProjectRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(PoProjectPatch {
            po_date: value.po_date,
            client: value.client,
            product: value.product,
            project_status: value.project_status,
        })
    }
}

impl Record for PoProject {
    type New = PoProjectInsert;
    type Patch = PoProjectPatch;

    const COLLECTION: &'static str = "po_projects";
    const LABEL: &'static str = "PO project";
    const PLURAL: &'static str = "PO projects";

    fn from_new(new: PoProjectInsert, id: String, created_at: DateTime<Utc>) -> Self {
        PoProject {
            id,
            po_date: new.po_date,
            client: new.client,
            product: new.product,
            project_status: new.project_status,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn apply_patch(&mut self, patch: PoProjectPatch) {
        replace_if_some(&mut self.po_date, patch.po_date);
        replace_if_some(&mut self.client, patch.client);
        replace_if_some(&mut self.product, patch.product);
        replace_if_some(&mut self.project_status, patch.project_status);
    }
}
