use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::entities::{
    field_rules::{non_blank, not_blank},
    option_fields::{replace_if_some, OptionField, PatchString},
    record::Record,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct EquipmentInsert {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "OptionField::is_unchanged")]
    pub image: PatchString,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEquipmentRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(required, custom(function = "not_blank"))]
    pub description: Option<String>,

    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateEquipmentRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(custom(function = "not_blank"))]
    pub description: Option<String>,

    pub image: PatchString,
}

impl TryFrom<NewEquipmentRequest> for EquipmentInsert {
    type Error = ValidationErrors;

    fn try_from(value: NewEquipmentRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(EquipmentInsert {
            title: value.title.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            image: non_blank(value.image),
        })
    }
}

impl TryFrom<UpdateEquipmentRequest> for EquipmentPatch {
    type Error = ValidationErrors;

    fn try_from(value: UpdateEquipmentRequest) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(EquipmentPatch {
            title: value.title,
            description: value.description,
            image: value.image,
        })
    }
}

impl Record for Equipment {
    type New = EquipmentInsert;
    type Patch = EquipmentPatch;

    const COLLECTION: &'static str = "equipment";
    const LABEL: &'static str = "Equipment";
    const PLURAL: &'static str = "equipment";

    fn from_new(new: EquipmentInsert, id: String, created_at: DateTime<Utc>) -> Self {
        Equipment {
            id,
            title: new.title,
            description: new.description,
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

    fn apply_patch(&mut self, patch: EquipmentPatch) {
        replace_if_some(&mut self.title, patch.title);
        replace_if_some(&mut self.description, patch.description);
        patch.image.apply_to(&mut self.image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{validation_message, MISSING_FIELDS_MESSAGE};

    #[test]
    fn title_alone_is_not_enough() {
        let request: NewEquipmentRequest =
            serde_json::from_value(serde_json::json!({"title": "Drill"})).unwrap();

        let err = EquipmentInsert::try_from(request).unwrap_err();
        assert_eq!(validation_message(&err), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn image_can_be_cleared() {
        let mut equipment = Equipment::create(EquipmentInsert {
            title: "Drill".into(),
            description: "Rotary".into(),
            image: Some("data:image/jpeg;base64,AAA".into()),
        });

        let request: UpdateEquipmentRequest =
            serde_json::from_value(serde_json::json!({"image": null})).unwrap();
        equipment.apply_patch(EquipmentPatch::try_from(request).unwrap());

        assert_eq!(equipment.image, None);
        assert_eq!(equipment.title, "Drill");
    }
}
