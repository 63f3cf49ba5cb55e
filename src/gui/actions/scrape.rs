// src/gui/actions/scrape.rs
use crate::gui::{app::App, tasks::TaskOutcome};

/// Kick off a server-side scrape of the URL in the draft.
pub fn scrape(app: &mut App) {
    let req = match app.scraper.begin_scrape() {
        Ok(r) => r,
        Err(e) => {
            app.scraper.error = Some(e.to_string());
            return;
        }
    };
    logf!("Scrape: Begin url={} type={}", req.url, req.data_type.as_str());
    app.status(format!("Scraping {}…", req.url));
    app.tasks.spawn(move |api| async move { TaskOutcome::Scraped(api.scrape_url(&req).await) });
}

pub fn load_sources(app: &mut App) {
    let t = app.scraper.begin_sources_load();
    app.tasks.spawn(move |api| async move { TaskOutcome::WebSources(t, api.list_web_sources().await) });
}

pub fn add_source(app: &mut App) {
    match app.scraper.new_source() {
        Ok((url, kind)) => {
            logf!("Sources: add url={url} type={kind}");
            app.tasks.spawn(move |api| async move {
                TaskOutcome::WebSourceAdded(api.add_web_source(&url, &kind).await)
            });
        }
        Err(e) => app.scraper.error = Some(e.to_string()),
    }
}

pub fn confirm_delete_source(app: &mut App) {
    let Some(id) = app.scraper.delete.confirm() else { return };
    logf!("Delete: web source id={id}");
    app.tasks.spawn(move |api| async move { TaskOutcome::WebSourceDeleted(id, api.delete_web_source(id).await) });
}
