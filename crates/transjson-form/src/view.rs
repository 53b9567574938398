//! Presentational projection of the form.
//!
//! Pure derivation from [`TranslateForm`]; renderers never read controller
//! fields directly.

use serde::Serialize;

use crate::controller::TranslateForm;
use crate::model::TranslationScope;

/// Heading shown above the form.
pub const TITLE: &str = "JSON File Translator";
/// File picker label when nothing is selected.
pub const FILE_PLACEHOLDER: &str = "Drag & drop or click to upload";
/// Hint for the target language input.
pub const LANGUAGES_PLACEHOLDER: &str = "e.g., English, Spanish";
/// Hint for the key list input.
pub const KEYS_PLACEHOLDER: &str = "e.g., key1, key2";
/// Submit label while idle.
pub const SUBMIT_LABEL: &str = "Translate";
/// Submit label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Translating...";

/// Everything a renderer needs to draw the form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Heading.
    pub title: &'static str,
    /// Selected filename, or the picker placeholder.
    pub file_label: String,
    /// Accept hint for the file picker.
    pub file_accept: &'static str,
    /// Target language text as entered.
    pub target_languages: String,
    /// Placeholder for the language input.
    pub languages_placeholder: &'static str,
    /// Scope options offered, empty for the basic edition.
    pub scope_options: Vec<ScopeOption>,
    /// Whether the key list input is shown.
    pub show_key_list: bool,
    /// Key list text as entered.
    pub key_list: String,
    /// Placeholder for the key list input.
    pub keys_placeholder: &'static str,
    /// Submit button label.
    pub submit_label: &'static str,
    /// Whether the submit button accepts clicks.
    pub submit_enabled: bool,
    /// Lifecycle state name.
    pub state: &'static str,
    /// Error notice, if shown.
    pub error: Option<String>,
    /// Success notice, if shown.
    pub success: Option<&'static str>,
}

/// One radio option of the scope selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeOption {
    /// Submitted value.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether this option is checked.
    pub checked: bool,
}

impl From<&TranslateForm> for FormView {
    fn from(form: &TranslateForm) -> Self {
        let loading = form.lifecycle().is_loading();
        let scoped = form.edition().supports_scope();
        let scope_options = if scoped {
            [TranslationScope::EntireFile, TranslationScope::SpecificKeys]
                .into_iter()
                .map(|scope| ScopeOption {
                    value: scope.as_value(),
                    label: scope.label(),
                    checked: form.scope() == scope,
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: TITLE,
            file_label: form
                .file()
                .map_or_else(|| FILE_PLACEHOLDER.to_string(), |file| file.name().to_string()),
            file_accept: ".json",
            target_languages: form.target_languages().to_string(),
            languages_placeholder: LANGUAGES_PLACEHOLDER,
            scope_options,
            show_key_list: scoped && form.scope() == TranslationScope::SpecificKeys,
            key_list: form.key_list().to_string(),
            keys_placeholder: KEYS_PLACEHOLDER,
            submit_label: if loading { SUBMITTING_LABEL } else { SUBMIT_LABEL },
            submit_enabled: !loading,
            state: form.lifecycle().as_str(),
            error: form.error_message().map(str::to_string),
            success: form.success_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{SUCCESS_MESSAGE, VALIDATION_MESSAGE};
    use crate::model::{FormEdition, UploadFile};
    use std::path::PathBuf;

    #[test]
    fn empty_form_shows_placeholders() {
        let view = FormView::from(&TranslateForm::new(FormEdition::Scoped));
        assert_eq!(view.file_label, FILE_PLACEHOLDER);
        assert_eq!(view.submit_label, SUBMIT_LABEL);
        assert!(view.submit_enabled);
        assert!(!view.show_key_list);
        assert_eq!(view.scope_options.len(), 2);
        assert!(view.scope_options[0].checked);
        assert_eq!(view.state, "idle");
    }

    #[test]
    fn submitting_disables_button() {
        let mut form = TranslateForm::new(FormEdition::Scoped);
        form.select_file(UploadFile::new("strings.json", Vec::new()));
        form.set_target_languages("Spanish");
        form.begin_submit().expect("valid submit");

        let view = FormView::from(&form);
        assert_eq!(view.file_label, "strings.json");
        assert_eq!(view.submit_label, SUBMITTING_LABEL);
        assert!(!view.submit_enabled);
        assert_eq!(view.state, "submitting");

        form.complete_submit(Ok(PathBuf::from("translated_files.zip")))
            .expect("in flight");
        let view = FormView::from(&form);
        assert!(view.submit_enabled);
        assert_eq!(view.success, Some(SUCCESS_MESSAGE));
        assert_eq!(view.error, None);
    }

    #[test]
    fn specific_scope_shows_key_list() {
        let mut form = TranslateForm::new(FormEdition::Scoped);
        form.set_translation_scope(TranslationScope::SpecificKeys);
        form.set_key_list("title");

        let view = FormView::from(&form);
        assert!(view.show_key_list);
        assert_eq!(view.key_list, "title");
        assert!(view.scope_options[1].checked);
    }

    #[test]
    fn basic_edition_hides_scope() {
        let view = FormView::from(&TranslateForm::new(FormEdition::Basic));
        assert!(view.scope_options.is_empty());
        assert!(!view.show_key_list);
    }

    #[test]
    fn validation_notice_is_rendered() {
        let mut form = TranslateForm::new(FormEdition::Scoped);
        assert!(form.begin_submit().is_err());
        let view = FormView::from(&form);
        assert_eq!(view.error.as_deref(), Some(VALIDATION_MESSAGE));
        assert!(view.submit_enabled);
    }
}
