//! Multipart request sent to the translation service.

use reqwest::multipart::{Form, Part};

use crate::model::{TranslationScope, UploadFile};

/// Multipart field carrying the uploaded document.
pub const FIELD_FILE: &str = "file";
/// Multipart field carrying the comma-separated target languages.
pub const FIELD_TRANSLATE_TO: &str = "translate_to";
/// Multipart field carrying the scope discriminator.
pub const FIELD_TRANSLATION_OPTION: &str = "translation_option";
/// Multipart field carrying the comma-separated key names.
pub const FIELD_KEYS: &str = "keys";

/// One translate submission, built from validated form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslateRequest {
    file: UploadFile,
    translate_to: String,
    scope: Option<ScopeFields>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ScopeFields {
    option: TranslationScope,
    keys: Option<String>,
}

impl TranslateRequest {
    /// Request without scope fields, as the basic edition sends it.
    #[must_use]
    pub fn basic(file: UploadFile, translate_to: impl Into<String>) -> Self {
        Self {
            file,
            translate_to: translate_to.into(),
            scope: None,
        }
    }

    /// Request carrying the scope discriminator. `keys` is only sent for
    /// [`TranslationScope::SpecificKeys`].
    #[must_use]
    pub fn scoped(
        file: UploadFile,
        translate_to: impl Into<String>,
        option: TranslationScope,
        keys: impl Into<String>,
    ) -> Self {
        let keys = match option {
            TranslationScope::EntireFile => None,
            TranslationScope::SpecificKeys => Some(keys.into()),
        };
        Self {
            file,
            translate_to: translate_to.into(),
            scope: Some(ScopeFields { option, keys }),
        }
    }

    /// Uploaded document.
    #[must_use]
    pub const fn file(&self) -> &UploadFile {
        &self.file
    }

    /// Textual multipart fields in wire order, excluding the file part.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![(FIELD_TRANSLATE_TO, self.translate_to.as_str())];
        if let Some(scope) = &self.scope {
            fields.push((FIELD_TRANSLATION_OPTION, scope.option.as_value()));
            if let Some(keys) = &scope.keys {
                fields.push((FIELD_KEYS, keys.as_str()));
            }
        }
        fields
    }

    /// Build the multipart body: the file part first, then the text fields.
    #[must_use]
    pub fn into_multipart(self) -> Form {
        let text_fields: Vec<(&'static str, String)> = self
            .fields()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect();
        let (file_name, bytes) = self.file.into_parts();
        let form = Form::new().part(FIELD_FILE, Part::bytes(bytes).file_name(file_name));
        text_fields
            .into_iter()
            .fold(form, |form, (name, value)| form.text(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> UploadFile {
        UploadFile::new("strings.json", br#"{"greeting":"hello"}"#.to_vec())
    }

    #[test]
    fn entire_scope_omits_keys() {
        let request = TranslateRequest::scoped(
            sample_file(),
            "English, Spanish",
            TranslationScope::EntireFile,
            "ignored",
        );
        assert_eq!(
            request.fields(),
            vec![
                ("translate_to", "English, Spanish"),
                ("translation_option", "entire"),
            ]
        );
    }

    #[test]
    fn specific_scope_sends_keys_even_when_empty() {
        let request =
            TranslateRequest::scoped(sample_file(), "French", TranslationScope::SpecificKeys, "");
        assert_eq!(
            request.fields(),
            vec![
                ("translate_to", "French"),
                ("translation_option", "specific"),
                ("keys", ""),
            ]
        );
    }

    #[test]
    fn basic_request_sends_languages_only() {
        let request = TranslateRequest::basic(sample_file(), "German");
        assert_eq!(request.fields(), vec![("translate_to", "German")]);
        assert_eq!(request.file().name(), "strings.json");
    }

    #[test]
    fn multipart_boundary_is_generated() {
        let form = TranslateRequest::basic(sample_file(), "German").into_multipart();
        assert!(!form.boundary().is_empty());
    }
}
