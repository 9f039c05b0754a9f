//! The `check` command: validate every base file and its translations.

use std::{env, path::Path};

use anyhow::{Context, Result, bail};

use super::super::{args::CheckCommand, exit_status::ExitStatus, report::Printer};
use crate::{
    checks::{Check, CheckKind, build_checks},
    config::{CONFIG_FILE_NAME, Config, load_config},
    document::Document,
    report::ReportGroup,
};

/// Label of the group reporting files that could not be read.
pub const FILE_GROUP_LABEL: &str = "File";

/// Label of the group reporting a translation that failed to parse.
pub const SYNTAX_GROUP_LABEL: &str = "Syntax";

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd, cmd.config.as_deref())?;
    let config = cmd.apply_to(loaded.config);
    config.validate()?;

    if !config.color {
        colored::control::set_override(false);
    }
    if config.files.is_empty() {
        bail!(
            "No base files given. Use --base or set \"files\" in {}",
            CONFIG_FILE_NAME
        );
    }

    let printer = Printer::new(config.quiet, config.verbose);
    match &loaded.source {
        Some(path) => printer.info(&format!("Using config {}", path.display())),
        None => printer.info("Using default config"),
    }

    let checks = build_checks(&config)?;
    let names: Vec<_> = checks.iter().map(|c| c.id().label()).collect();
    printer.info(&format!("Checks: {}", names.join(", ")));

    let mut errors = 0;
    for base in &config.files {
        errors += check_base(Path::new(base), &config, &checks, &printer)?;
    }

    Ok(ExitStatus::from_error_count(errors))
}

/// Check one reference file and all its configured translations.
///
/// Returns the number of errors across all reports, warnings included in
/// fatal mode.
fn check_base(
    base: &Path,
    config: &Config,
    checks: &[CheckKind],
    printer: &Printer,
) -> Result<usize> {
    let mut reference = Document::new();
    reference
        .load(base, config)
        .with_context(|| format!("Failed to load reference file {}", base.display()))?;
    reference.validate(None, checks)?;
    printer.print_document(&reference, config.fatal);
    let mut errors = reference.report.fatal_errors(config.fatal);

    let printer = printer.indented();
    for lang in &config.languages {
        let path = config.language_file(base, lang)?;
        let (mut translation, loaded) =
            open_translation(&path, lang, &reference, config, &printer)?;

        if loaded {
            translation.validate(Some(&reference), checks)?;
            if config.update {
                translation.update(&reference, config)?;
                translation
                    .save(None)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                printer.info(&format!("Updated {}", path.display()));
            }
        }

        printer.print_document(&translation, config.fatal);
        errors += translation.report.fatal_errors(config.fatal);
    }

    Ok(errors)
}

/// Load the `lang` translation at `path`, flagged with whether it can be
/// checked.
///
/// A missing file is created from the reference with `create`. Otherwise a
/// missing or unparsable file yields an unchecked document whose report
/// holds the problem.
fn open_translation(
    path: &Path,
    lang: &str,
    reference: &Document,
    config: &Config,
    printer: &Printer,
) -> Result<(Document, bool)> {
    let mut translation = Document::with_language(lang);

    if !path.exists() {
        if config.create {
            let mut created = Document::create_from(reference, lang, config)?;
            created.file = Some(path.to_path_buf());
            created
                .save(None)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            printer.created(path);
            return Ok((created, true));
        }

        translation.file = Some(path.to_path_buf());
        let mut group = ReportGroup::new(FILE_GROUP_LABEL);
        group.error(None, format!("File not found: {}", path.display()), None);
        translation.report.add(group);
        return Ok((translation, false));
    }

    match translation.load(path, config) {
        Ok(()) => Ok((translation, true)),
        Err(err) if err.is_syntax() => {
            let mut group = ReportGroup::new(SYNTAX_GROUP_LABEL);
            group.error(None, err.to_string(), None);
            translation.report.add(group);
            Ok((translation, false))
        }
        Err(err) => Err(err).with_context(|| format!("Failed to load {}", path.display())),
    }
}
