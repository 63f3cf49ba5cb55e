// src/gui/actions/outcome.rs
//
// Files a finished request into the view that asked for it. Runs on the UI
// thread at the top of each frame.

use crate::{
    config::options::PageKind,
    gui::{app::App, tasks::TaskOutcome},
    views::{DetailState, ScrapeOutcome},
};

use super::{load, scrape};

pub fn apply(app: &mut App, outcome: TaskOutcome) {
    match outcome {
        /* ----- models page ----- */
        TaskOutcome::Models(t, res) => {
            app.models.apply_models(t, res);
            if !app.models.is_loading() {
                let msg = match &app.models.error {
                    Some(e) => e.clone(),
                    None => format!("Ready ({} models)", app.models.models().len()),
                };
                app.status(msg);
            }
        }
        TaskOutcome::Providers(t, res) => app.models.apply_providers(t, res),
        TaskOutcome::ModelDeleted(id, res) => {
            let ok = res.is_ok();
            app.models.apply_deleted(id, res);
            if ok {
                app.status("Model deleted");
            }
        }

        /* ----- forms ----- */
        TaskOutcome::Choices(res) => match res {
            Ok(models) => app.choices = models,
            Err(e) => {
                loge!("Error fetching models: {e}");
                app.status(format!("Failed to load models: {e}"));
            }
        },
        TaskOutcome::ProviderCreated(res) => {
            if let Some(p) = app.model_form.finish_provider(res) {
                app.models.add_provider(p);
            }
        }
        TaskOutcome::ModelCreated(res) => {
            let mut created = None;
            app.model_form.finish(res, |m| created = Some(m));
            if let Some(m) = created {
                logf!("Create: OK model id={}", m.id);
                app.status(format!("Created model {}", m.name));
                refresh_current(app);
            }
        }
        TaskOutcome::BenchmarkCreated(res) => {
            let mut created = None;
            app.benchmark_form.finish(res, |b| created = Some(b));
            if let Some(b) = created {
                logf!("Create: OK benchmark id={}", b.id);
                app.status(format!("Added {} result", b.benchmark_name));
                refresh_current(app);
            }
        }
        TaskOutcome::PricingCreated(res) => {
            let mut created = None;
            app.pricing_form.finish(res, |p| created = Some(p));
            if let Some(p) = created {
                logf!("Create: OK pricing id={}", p.id);
                app.status("Pricing added");
                refresh_current(app);
            }
        }
        TaskOutcome::ComparisonCreated(res) => {
            let mut created = None;
            app.comparison_form.finish(res, |c| created = Some(c));
            if let Some(c) = created {
                logf!("Create: OK comparison id={}", c.id);
                app.status(format!("Created comparison {}", c.name));
                if app.current_page_kind() == PageKind::Comparisons {
                    load::load_comparisons(app);
                    load::select_comparison(app, c.id);
                }
            }
        }

        /* ----- comparisons page ----- */
        TaskOutcome::Comparisons(t, res) => {
            app.comparisons.apply_tables(t, res);
            if !app.comparisons.is_loading() {
                let msg = match &app.comparisons.error {
                    Some(e) => e.clone(),
                    None => format!("Ready ({} comparisons)", app.comparisons.tables().len()),
                };
                app.status(msg);
            }
        }
        TaskOutcome::Detail(t, res) => {
            app.comparisons.apply_detail(t, res);
            if let DetailState::Failed(msg) = app.comparisons.detail() {
                let msg = msg.clone();
                app.status(msg);
            }
        }
        TaskOutcome::ComparisonDeleted(id, res) => {
            let ok = res.is_ok();
            app.comparisons.apply_deleted(id, res);
            if ok {
                app.status("Comparison deleted");
            }
        }

        /* ----- scraper page ----- */
        TaskOutcome::Scraped(res) => {
            let reached_server = app.scraper.finish_scrape(res);
            let msg = match app.scraper.outcome() {
                Some(ScrapeOutcome::Succeeded(_)) => s!("Scrape finished"),
                Some(ScrapeOutcome::Failed(e)) => format!("Scrape failed: {e}"),
                None => s!("Idle"),
            };
            app.status(msg);
            if reached_server {
                scrape::load_sources(app);
            }
        }
        TaskOutcome::WebSources(t, res) => app.scraper.apply_sources(t, res),
        TaskOutcome::WebSourceAdded(res) => {
            if app.scraper.apply_source_added(res) {
                app.status("Web source added");
                scrape::load_sources(app);
            }
        }
        TaskOutcome::WebSourceDeleted(id, res) => {
            let ok = res.is_ok();
            app.scraper.apply_deleted(id, res);
            if ok {
                app.status("Web source deleted");
            }
        }
    }
}

/// Re-fetch whatever the visible page shows.
fn refresh_current(app: &mut App) {
    match app.current_page_kind() {
        PageKind::Models => load::load_models(app),
        PageKind::Comparisons => {
            if let Some(id) = app.comparisons.selected() {
                load::select_comparison(app, id);
            }
        }
        PageKind::Scraper => scrape::load_sources(app),
    }
}
