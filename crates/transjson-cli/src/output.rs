//! Output renderers for CLI commands.

use std::path::Path;

use anyhow::anyhow;
use serde_json::json;
use transjson_form::{DOWNLOAD_FILE_NAME, FormView};

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

pub(crate) fn render_download(view: &FormView, path: &Path, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(&download_summary(view, path))
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
            println!("{text}");
        }
        OutputFormat::Table => {
            if let Some(message) = view.success {
                println!("{message}");
            }
            println!("saved: {}", path.display());
        }
    }
    Ok(())
}

fn download_summary(view: &FormView, path: &Path) -> serde_json::Value {
    json!({
        "status": view.state,
        "message": view.success,
        "file": DOWNLOAD_FILE_NAME,
        "path": path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use transjson_form::{FormEdition, SUCCESS_MESSAGE, TranslateForm, UploadFile};

    fn succeeded_view() -> FormView {
        let mut form = TranslateForm::new(FormEdition::Scoped);
        form.select_file(UploadFile::new("strings.json", Vec::new()));
        form.set_target_languages("Spanish");
        form.begin_submit().expect("valid submit");
        let _ = form.complete_submit(Ok(PathBuf::from("/tmp/translated_files.zip")));
        FormView::from(&form)
    }

    #[test]
    fn download_summary_reports_fixed_name() {
        let summary = download_summary(&succeeded_view(), Path::new("/tmp/translated_files.zip"));
        assert_eq!(summary["status"], "succeeded");
        assert_eq!(summary["message"], SUCCESS_MESSAGE);
        assert_eq!(summary["file"], "translated_files.zip");
        assert_eq!(summary["path"], "/tmp/translated_files.zip");
    }

    #[test]
    fn render_download_supports_both_formats() {
        let view = succeeded_view();
        let path = Path::new("/tmp/translated_files.zip");
        assert!(render_download(&view, path, OutputFormat::Table).is_ok());
        assert!(render_download(&view, path, OutputFormat::Json).is_ok());
    }
}
