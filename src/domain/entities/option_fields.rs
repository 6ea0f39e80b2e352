use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Represents optional field semantics in update requests.
///
/// - `Unchanged` → field absent from the payload
/// - `SetToNull` → explicitly `null`, clears the stored value
/// - `SetToValue` → set to provided value
///
/// Structs holding these must be `#[serde(default)]` so absent keys
/// deserialize to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

/// `Unchanged` has no wire form; pair with
/// `#[serde(skip_serializing_if = "OptionField::is_unchanged")]`.
impl<T> Serialize for OptionField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => serializer.serialize_some(value),
            _ => serializer.serialize_none(),
        }
    }
}

impl<T> OptionField<T> {
    /// True when `Unchanged`.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Writes the change into `target`, leaving it alone when `Unchanged`.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v),
        }
    }
}

/// Overwrites `target` when the patch carries a value.
pub fn replace_if_some<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

pub type PatchString = OptionField<String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(default)]
    struct Sample {
        #[serde(skip_serializing_if = "OptionField::is_unchanged")]
        salary: PatchString,
    }

    #[test]
    fn absent_key_is_unchanged() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert!(sample.salary.is_unchanged());
    }

    #[test]
    fn null_clears_and_value_sets() {
        let cleared: Sample = serde_json::from_str(r#"{"salary": null}"#).unwrap();
        assert_eq!(cleared.salary, OptionField::SetToNull);

        let set: Sample = serde_json::from_str(r#"{"salary": "50k"}"#).unwrap();
        assert_eq!(set.salary, OptionField::SetToValue("50k".to_string()));
    }

    #[test]
    fn apply_to_respects_each_state() {
        let mut stored = Some("40k".to_string());

        OptionField::Unchanged.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("40k"));

        OptionField::SetToValue("60k".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("60k"));

        OptionField::SetToNull.apply_to(&mut stored);
        assert_eq!(stored, None);
    }

    #[test]
    fn unchanged_fields_are_not_serialized() {
        let untouched = serde_json::to_value(Sample::default()).unwrap();
        assert_eq!(untouched, serde_json::json!({}));

        let cleared = serde_json::to_value(Sample { salary: OptionField::SetToNull }).unwrap();
        assert_eq!(cleared, serde_json::json!({"salary": null}));
    }
}
