use anyhow::Result;
use auto_image_organize::component::SequenceRenamer;
use auto_image_organize::component::sequence_renamer::{RenamePlan, RenameResult};
use auto_image_organize::config::types::Config;
use auto_image_organize::init;
use auto_image_organize::signal::{is_shutdown, setup_shutdown_signal};
use console::{Term, style};
use dialoguer::Confirm;
use dialoguer::theme::ColorfulTheme;
use log::{info, warn};
use rust_i18n::t;
use std::env;
use std::sync::Arc;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal();

    // Load config and set locale
    let config = Config::new()?;
    rust_i18n::set_locale(config.settings.language.as_str());

    println!("{}", style(t!("app.title")).cyan().bold());

    let directory = env::current_dir()?;
    let renamer = SequenceRenamer::new(Arc::clone(&shutdown_signal));

    println!("{}", style(t!("renamer.scanning")).dim());
    let plan = renamer.plan(&directory)?;

    if plan.is_empty() {
        println!("{}", style(t!("renamer.no_files")).yellow());
        return Ok(());
    }

    println!(
        "{}",
        style(t!("renamer.found_files", count => plan.len())).green()
    );
    println!(
        "{}",
        style(t!("renamer.width_info", width => plan.width)).dim()
    );

    display_preview(&plan);

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("renamer.confirm").to_string())
        .default(false)
        .interact_on(&term)?;

    if !confirmed || is_shutdown(&shutdown_signal) {
        println!("{}", style(t!("renamer.cancelled")).yellow());
        return Ok(());
    }

    let result = match renamer.execute(&directory, &plan) {
        Ok(result) => result,
        Err(e) => {
            warn!("Rename failed: {e}");
            eprintln!("{} {}", style(t!("common.error_prefix")).red().bold(), e);
            return Err(e);
        }
    };

    display_summary(&result);
    info!(
        "Renamed {} files in {}",
        result.renamed_count,
        directory.display()
    );

    Ok(())
}

fn display_preview(plan: &RenamePlan) {
    println!();
    println!("{}", style(t!("renamer.preview_title")).cyan());
    println!();

    for (i, step) in plan.steps.iter().enumerate() {
        print!(
            "  {} {} -> {}",
            style(format!("[{}]", i + 1)).dim(),
            step.source_name,
            step.target_name
        );
        if step.is_unchanged() {
            print!(" {}", style(t!("renamer.unchanged")).dim());
        }
        println!();
    }

    println!();
}

fn display_summary(result: &RenameResult) {
    println!();
    println!("{}", style(t!("renamer.summary_title")).cyan().bold());
    println!(
        "  {}",
        style(t!("renamer.summary_renamed", count => result.renamed_count)).green()
    );
    if result.unchanged_count > 0 {
        println!(
            "  {}",
            style(t!("renamer.summary_unchanged", count => result.unchanged_count)).yellow()
        );
    }
}
