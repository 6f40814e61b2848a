//! Message catalog for user-facing strings.
//!
//! Every string the controller shows goes through [`prop`], keyed the
//! way the host shell keys its catalog. Unknown keys render as `[key]`
//! so a missing translation is visible instead of silent.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CATALOG_EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("sales_app_salesdelivery_edit", "Sales Delivery - Edit"),
        ("shell_data_created_new", "A new record was created."),
        ("shell_data_cloned_new", "The record was cloned to a new one."),
        (
            "shell_data_deleted_and_created",
            "The record was removed; a new one is being created.",
        ),
        ("shell_data_save", "Save record"),
        ("shell_data_delete", "Delete record"),
        ("shell_successful", " - successful."),
        ("shell_saving_data", "Saving record..."),
        ("shell_whether_to_delete", "Delete this record?"),
        (
            "shell_data_not_saved_whether_to_continue",
            "The record has unsaved changes. Continue and discard them?",
        ),
    ])
});

/// Languages the catalog carries.
pub const SUPPORTED_LANGUAGES: &[&str] = &["en"];

/// Whether the given language tag has a catalog.
pub fn supports(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

/// Resolves a catalog key to its message, `[key]` when unknown.
pub fn prop(key: &str) -> String {
    match CATALOG_EN.get(key) {
        Some(message) => (*message).to_string(),
        None => format!("[{}]", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves() {
        assert_eq!(prop("shell_data_save"), "Save record");
    }

    #[test]
    fn unknown_key_is_bracketed() {
        assert_eq!(prop("no_such_key"), "[no_such_key]");
    }

    #[test]
    fn english_is_supported() {
        assert!(supports("en"));
        assert!(!supports("xx"));
    }
}
