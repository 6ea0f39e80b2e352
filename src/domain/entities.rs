pub mod career;
pub mod contact_message;
pub mod equipment;
pub mod field_rules;
pub mod job_application;
pub mod option_fields;
pub mod po_project;
pub mod project;
pub mod record;
