// src/gui/actions/load.rs
use crate::{
    aggregate,
    client::{ComparisonQuery, ModelQuery},
    gui::{app::App, tasks::TaskOutcome},
    types::Id,
};

/// Models with the current server-side filters, plus the provider list.
pub fn load_models(app: &mut App) {
    let q = app.models.query();
    logf!("Load: models provider={:?} type={:?}", q.provider_id, q.model_type);

    let t = app.models.begin_load();
    app.tasks.spawn(move |api| async move { TaskOutcome::Models(t, api.list_models(&q).await) });

    let t = app.models.begin_providers_load();
    app.tasks.spawn(move |api| async move { TaskOutcome::Providers(t, api.list_providers().await) });

    app.status("Loading models…");
}

/// Unfiltered model list for the form pickers.
pub fn load_choices(app: &mut App) {
    app.tasks.spawn(|api| async move {
        TaskOutcome::Choices(api.list_models(&ModelQuery::default()).await)
    });
}

pub fn load_comparisons(app: &mut App) {
    logf!("Load: comparisons");
    let t = app.comparisons.begin_load();
    app.tasks.spawn(move |api| async move {
        TaskOutcome::Comparisons(t, api.list_comparisons(&ComparisonQuery::default()).await)
    });
    app.status("Loading comparisons…");
}

/// Select a table and fetch everything its pivot needs.
pub fn select_comparison(app: &mut App, id: Id) {
    logf!("Load: comparison detail id={id}");
    let t = app.comparisons.select(id);
    app.tasks.spawn(move |api| async move {
        TaskOutcome::Detail(t, aggregate::aggregate(&api, id).await)
    });
}
