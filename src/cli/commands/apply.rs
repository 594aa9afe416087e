use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::args::ApplyCommand;
use super::{CommandResult, CommandSummary, MergeSummary, WriteMode};
use crate::{
    bundles::{self, TranslationBundle},
    config::load_config,
    merge::{preview_json, update_json},
};

/// Merge the built-in bundles into `<root>/<localesRoot>/<locale>/<fileName>`.
///
/// Bundles are processed one after another; the first failure aborts the run
/// and leaves files that were already written as they are.
pub fn apply(cmd: ApplyCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let root = args.root.unwrap_or_default();

    let mut config = load_config(&config_search_dir(&root)?)?.config;
    if let Some(locales_root) = args.locales_root {
        config.locales_root = locales_root;
    }

    let bundles = select_bundles(bundles::builtin()?, &args.locales)?;
    let mode = WriteMode::from_flags(args.dry_run, args.check);

    let mut outcomes = Vec::with_capacity(bundles.len());
    for bundle in &bundles {
        let path = config.target_path(&root, &bundle.locale);
        let outcome = if mode.writes() {
            update_json(&path, &bundle.namespaces)?
        } else {
            preview_json(&path, &bundle.namespaces)?
        };
        outcomes.push(outcome);
    }

    Ok(CommandResult {
        summary: CommandSummary::Apply(MergeSummary { mode, outcomes }),
    })
}

fn config_search_dir(root: &Path) -> Result<PathBuf> {
    if root.as_os_str().is_empty() {
        env::current_dir().context("Failed to resolve current directory")
    } else {
        root.canonicalize()
            .with_context(|| format!("Failed to resolve root directory: {}", root.display()))
    }
}

/// Keep the bundles named in `locales`, in application order. Empty means all.
fn select_bundles(
    bundles: Vec<TranslationBundle>,
    locales: &[String],
) -> Result<Vec<TranslationBundle>> {
    if locales.is_empty() {
        return Ok(bundles);
    }

    for locale in locales {
        if bundles::find(&bundles, locale).is_none() {
            let available: Vec<&str> = bundles.iter().map(|b| b.locale.as_str()).collect();
            bail!(
                "Unknown locale '{}' (available: {})",
                locale,
                available.join(", ")
            );
        }
    }

    Ok(bundles
        .into_iter()
        .filter(|b| locales.contains(&b.locale))
        .collect())
}
