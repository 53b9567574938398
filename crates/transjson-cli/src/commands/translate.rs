use std::io::{self, IsTerminal};

use anyhow::{Context, anyhow};
use transjson_form::view::SUBMITTING_LABEL;
use transjson_form::{
    FAILURE_MESSAGE, FormView, SubmitOutcome, TranslateForm, TranslationScope, UploadFile,
};

use crate::cli::{OutputFormat, TranslateArgs};
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_download;

pub(crate) async fn handle_translate(
    ctx: &AppContext,
    args: TranslateArgs,
    format: OutputFormat,
) -> CliResult<()> {
    let file = UploadFile::from_path(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))
        .map_err(CliError::failure)?;

    let mut form = TranslateForm::new(args.edition.into());
    form.select_file(file);
    form.set_target_languages(args.languages);
    if let Some(option) = args.option {
        form.set_translation_scope(option.into());
    }
    if let Some(keys) = args.keys {
        if form.scope() != TranslationScope::SpecificKeys {
            tracing::warn!("--keys is only sent with --option specific");
        }
        form.set_key_list(keys);
    }

    tracing::debug!(endpoint = %ctx.service.endpoint(), "submitting translation");
    if io::stderr().is_terminal() {
        eprintln!("{SUBMITTING_LABEL}");
    }

    match form.submit(&ctx.service, &ctx.sink).await? {
        SubmitOutcome::Downloaded { path } => render_download(&FormView::from(&form), &path, format),
        SubmitOutcome::Failed { .. } => Err(CliError::failure(anyhow!(FAILURE_MESSAGE))),
    }
}
