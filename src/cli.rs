// src/cli.rs
//
// Scripting front-end over the same client the GUI uses. One command per
// run; output goes to stdout, logs to stderr.

use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{bail, Result};

use crate::{
    aggregate::{self, ComparisonDetail},
    client::{ApiClient, BenchmarkQuery, ComparisonQuery, ModelQuery, PricingQuery},
    config::{consts::NO_DATA, options::AppOptions},
    forms::{BenchmarkDraft, ComparisonDraft, Draft, ModelDraft, PricingDraft},
    types::{
        display_date, Currency, Id, ModelType, NewProvider, PriceType, PriceUnit,
        ScrapeDataType, ScrapeRequest, SourceType,
    },
};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Browse and edit an LLM catalog backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend origin (default: $LLM_CATALOG_API_URL or http://localhost:8000)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Don't ask before deleting
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Providers
    Providers {
        #[command(subcommand)]
        cmd: ProviderCmd,
    },
    /// Models
    Models {
        #[command(subcommand)]
        cmd: ModelCmd,
    },
    /// Benchmark results
    Benchmarks {
        #[command(subcommand)]
        cmd: BenchmarkCmd,
    },
    /// Pricing rows
    Pricing {
        #[command(subcommand)]
        cmd: PricingCmd,
    },
    /// Comparison tables
    Comparisons {
        #[command(subcommand)]
        cmd: ComparisonCmd,
    },
    /// Ask the backend to scrape a page
    Scrape {
        url: String,
        /// pricing, benchmark or both
        #[arg(long, default_value = "both", value_parser = parse_data_type)]
        data_type: ScrapeDataType,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        provider: Option<String>,
    },
    /// Tracked web sources
    Sources {
        #[command(subcommand)]
        cmd: SourceCmd,
    },
}

#[derive(Subcommand)]
enum ProviderCmd {
    List,
    Add {
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        website: Option<String>,
    },
}

#[derive(Subcommand)]
enum ModelCmd {
    List {
        #[arg(long)]
        provider: Option<Id>,
        #[arg(long = "type")]
        model_type: Option<ModelType>,
        /// Case-insensitive match on model or provider name
        #[arg(long)]
        search: Option<String>,
    },
    Show {
        id: Id,
    },
    Add(ModelArgs),
    Delete {
        id: Id,
    },
}

#[derive(Args)]
struct ModelArgs {
    name: String,
    #[arg(long)]
    provider: Id,
    #[arg(long = "type")]
    model_type: Option<ModelType>,
    #[arg(long)]
    description: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    released: Option<String>,
    #[arg(long)]
    context_window: Option<String>,
}

#[derive(Subcommand)]
enum BenchmarkCmd {
    List {
        #[arg(long)]
        model: Option<Id>,
        #[arg(long)]
        name: Option<String>,
    },
    Add(BenchmarkArgs),
}

#[derive(Args)]
struct BenchmarkArgs {
    #[arg(long)]
    model: Id,
    name: String,
    #[arg(long)]
    score: Option<String>,
    #[arg(long)]
    unit: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    tested: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    notes: Option<String>,
}

#[derive(Subcommand)]
enum PricingCmd {
    List {
        #[arg(long)]
        model: Option<Id>,
        #[arg(long = "type")]
        price_type: Option<PriceType>,
    },
    /// Rows valid today
    Current {
        #[arg(long)]
        model: Option<Id>,
    },
    Add(PricingArgs),
}

#[derive(Args)]
struct PricingArgs {
    #[arg(long)]
    model: Id,
    #[arg(long = "type")]
    price_type: PriceType,
    price: String,
    #[arg(long)]
    unit: PriceUnit,
    #[arg(long)]
    currency: Option<Currency>,
    /// YYYY-MM-DD, default today
    #[arg(long)]
    from: Option<String>,
    #[arg(long)]
    to: Option<String>,
    #[arg(long)]
    source: Option<String>,
}

#[derive(Subcommand)]
enum ComparisonCmd {
    List {
        #[arg(long)]
        public: Option<bool>,
    },
    /// Pivot of benchmark scores plus current pricing
    Show {
        id: Id,
    },
    Create {
        name: String,
        /// At least two model ids
        #[arg(long = "model", required = true)]
        models: Vec<Id>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        public: bool,
    },
    Delete {
        id: Id,
    },
    AddItem {
        table: Id,
        model: Id,
        #[arg(long, default_value_t = 0)]
        order: i32,
    },
    RemoveItem {
        table: Id,
        item: Id,
    },
}

#[derive(Subcommand)]
enum SourceCmd {
    List,
    Add {
        url: String,
        #[arg(long = "type", default_value = "both")]
        source_type: SourceType,
    },
    Delete {
        id: Id,
    },
}

fn parse_data_type(s: &str) -> Result<ScrapeDataType, String> {
    ScrapeDataType::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(s))
        .ok_or_else(|| format!("expected one of: pricing, benchmark, both (got '{s}')"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut options = AppOptions::from_env();
    if let Some(url) = cli.api_url {
        options.api.base_url = url;
    }
    let api = ApiClient::from_options(&options.api)?;
    logf!("CLI: backend={}", api.root());

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    rt.block_on(dispatch(&api, cli.command, cli.yes))
}

async fn dispatch(api: &ApiClient, command: Command, yes: bool) -> Result<()> {
    match command {
        Command::Providers { cmd } => providers(api, cmd).await,
        Command::Models { cmd } => models(api, cmd, yes).await,
        Command::Benchmarks { cmd } => benchmarks(api, cmd).await,
        Command::Pricing { cmd } => pricing(api, cmd).await,
        Command::Comparisons { cmd } => comparisons(api, cmd, yes).await,
        Command::Scrape { url, data_type, model, provider } => {
            let req = ScrapeRequest { url, data_type, model_name: model, provider_name: provider };
            let res = api.scrape_url(&req).await?;
            if !res.success {
                bail!("Scrape failed: {}", res.error.as_deref().unwrap_or("no reason given"));
            }
            println!("Scrape succeeded");
            if let Some(raw) = res.raw_response_text() {
                println!("{raw}");
            }
            Ok(())
        }
        Command::Sources { cmd } => sources(api, cmd, yes).await,
    }
}

async fn providers(api: &ApiClient, cmd: ProviderCmd) -> Result<()> {
    match cmd {
        ProviderCmd::List => {
            let rows = api
                .list_providers()
                .await?
                .into_iter()
                .map(|p| vec![p.id.to_string(), p.name, or_dash(p.website_url)])
                .collect::<Vec<_>>();
            print_table(&["ID", "Name", "Website"], &rows);
        }
        ProviderCmd::Add { name, description, website } => {
            let new = NewProvider { name, description, website_url: website };
            let p = api.create_provider(&new).await?;
            println!("Created provider {} ({})", p.name, p.id);
        }
    }
    Ok(())
}

async fn models(api: &ApiClient, cmd: ModelCmd, yes: bool) -> Result<()> {
    match cmd {
        ModelCmd::List { provider, model_type, search } => {
            let q = ModelQuery { provider_id: provider, model_type, ..ModelQuery::default() };
            let needle = search.unwrap_or_default().to_lowercase();
            let rows = api
                .list_models(&q)
                .await?
                .into_iter()
                .filter(|m| {
                    needle.is_empty()
                        || m.name.to_lowercase().contains(&needle)
                        || m.provider_name().is_some_and(|p| p.to_lowercase().contains(&needle))
                })
                .map(|m| {
                    vec![
                        m.id.to_string(),
                        m.name.clone(),
                        or_dash(m.provider_name().map(str::to_string)),
                        or_dash(m.model_type.as_ref().map(|t| s!(t.label()))),
                        or_dash(m.context_label()),
                    ]
                })
                .collect::<Vec<_>>();
            print_table(&["ID", "Model", "Provider", "Type", "Context"], &rows);
        }
        ModelCmd::Show { id } => {
            let m = api.get_model(id).await?;
            println!("{} ({})", m.name, m.id);
            println!("  provider: {}", m.provider_name().unwrap_or(NO_DATA));
            println!("  type:     {}", m.model_type.as_ref().map(|t| t.label()).unwrap_or(NO_DATA));
            println!("  context:  {}", or_dash(m.context_label()));
            println!("  released: {}", or_dash(m.release_date.map(|d| d.to_string())));
            if let Some(d) = &m.description {
                println!("  {d}");
            }
            if !m.benchmarks.is_empty() {
                println!();
                let rows = m
                    .benchmarks
                    .iter()
                    .map(|b| {
                        vec![
                            b.benchmark_name.clone(),
                            or_dash(b.score.map(crate::types::fmt_number)),
                            or_dash(b.unit.clone()),
                        ]
                    })
                    .collect::<Vec<_>>();
                print_table(&["Benchmark", "Score", "Unit"], &rows);
            }
            if !m.pricing.is_empty() {
                println!();
                let rows = m
                    .pricing
                    .iter()
                    .map(|p| {
                        vec![
                            s!(p.price_type.label()),
                            format!("{} {}", crate::types::fmt_number(p.price), p.currency),
                            s!(p.unit.label()),
                            p.valid_from.to_string(),
                        ]
                    })
                    .collect::<Vec<_>>();
                print_table(&["Type", "Price", "Unit", "From"], &rows);
            }
        }
        ModelCmd::Add(a) => {
            let draft = ModelDraft {
                name: a.name,
                provider_id: Some(a.provider),
                model_type: a.model_type,
                description: a.description.unwrap_or_default(),
                release_date: a.released.unwrap_or_default(),
                context_window: a.context_window.unwrap_or_default(),
                ..ModelDraft::default()
            };
            let m = api.create_model(&draft.validate()?).await?;
            println!("Created model {} ({})", m.name, m.id);
        }
        ModelCmd::Delete { id } => {
            if confirm(yes, &format!("Delete model {id}?"))? {
                api.delete_model(id).await?;
                println!("Deleted model {id}");
            }
        }
    }
    Ok(())
}

async fn benchmarks(api: &ApiClient, cmd: BenchmarkCmd) -> Result<()> {
    match cmd {
        BenchmarkCmd::List { model, name } => {
            let q = BenchmarkQuery { model_id: model, benchmark_name: name, ..BenchmarkQuery::default() };
            let rows = api
                .list_benchmarks(&q)
                .await?
                .into_iter()
                .map(|b| {
                    vec![
                        b.id.to_string(),
                        b.model_id.to_string(),
                        b.benchmark_name.clone(),
                        b.score_label(),
                        or_dash(b.test_date.map(|d| d.to_string())),
                    ]
                })
                .collect::<Vec<_>>();
            print_table(&["ID", "Model", "Benchmark", "Score", "Tested"], &rows);
        }
        BenchmarkCmd::Add(a) => {
            let draft = BenchmarkDraft {
                model_id: Some(a.model),
                benchmark_name: a.name,
                score: a.score.unwrap_or_default(),
                unit: a.unit.unwrap_or_default(),
                test_date: a.tested.unwrap_or_default(),
                source_url: a.source.unwrap_or_default(),
                notes: a.notes.unwrap_or_default(),
            };
            let b = api.create_benchmark(&draft.validate()?).await?;
            println!("Created benchmark {} ({}) for model {}", b.benchmark_name, b.id, b.model_id);
        }
    }
    Ok(())
}

async fn pricing(api: &ApiClient, cmd: PricingCmd) -> Result<()> {
    let rows = match cmd {
        PricingCmd::List { model, price_type } => {
            let q = PricingQuery { model_id: model, price_type, ..PricingQuery::default() };
            api.list_pricing(&q).await?
        }
        PricingCmd::Current { model } => api.current_pricing(model).await?,
        PricingCmd::Add(a) => {
            let mut draft = PricingDraft {
                model_id: Some(a.model),
                price_type: Some(a.price_type),
                price: a.price,
                unit: Some(a.unit),
                valid_to: a.to.unwrap_or_default(),
                source_url: a.source.unwrap_or_default(),
                ..PricingDraft::default()
            };
            if let Some(c) = a.currency {
                draft.currency = c;
            }
            if let Some(f) = a.from {
                draft.valid_from = f;
            }
            let p = api.create_pricing(&draft.validate()?).await?;
            println!("Created pricing {} for model {}: {}", p.id, p.model_id, p.price_label());
            return Ok(());
        }
    };

    let rows = rows
        .into_iter()
        .map(|p| {
            vec![
                p.id.to_string(),
                p.model_id.to_string(),
                s!(p.price_type.label()),
                p.price_label(),
                s!(p.unit.label()),
                p.valid_from.to_string(),
                or_dash(p.valid_to.map(|d| d.to_string())),
            ]
        })
        .collect::<Vec<_>>();
    print_table(&["ID", "Model", "Type", "Price", "Unit", "From", "To"], &rows);
    Ok(())
}

async fn comparisons(api: &ApiClient, cmd: ComparisonCmd, yes: bool) -> Result<()> {
    match cmd {
        ComparisonCmd::List { public } => {
            let q = ComparisonQuery { is_public: public, ..ComparisonQuery::default() };
            let rows = api
                .list_comparisons(&q)
                .await?
                .into_iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.name.clone(),
                        s!(c.visibility_label()),
                        display_date(&c.created_at),
                    ]
                })
                .collect::<Vec<_>>();
            print_table(&["ID", "Name", "Visibility", "Created"], &rows);
        }
        ComparisonCmd::Show { id } => {
            let detail = aggregate::aggregate(api, id).await?;
            print_detail(&detail);
        }
        ComparisonCmd::Create { name, models, description, public } => {
            let mut draft = ComparisonDraft::default();
            draft.name = name;
            draft.description = description.unwrap_or_default();
            draft.is_public = public;
            for m in models {
                draft.stage(m);
            }
            let c = api.create_comparison(&draft.validate()?).await?;
            println!("Created comparison {} ({})", c.name, c.id);
        }
        ComparisonCmd::Delete { id } => {
            if confirm(yes, &format!("Delete comparison {id}?"))? {
                api.delete_comparison(id).await?;
                println!("Deleted comparison {id}");
            }
        }
        ComparisonCmd::AddItem { table, model, order } => {
            let item = api.add_comparison_item(table, model, order).await?;
            println!("Added model {} to comparison {} as item {}", item.model_id, table, item.id);
        }
        ComparisonCmd::RemoveItem { table, item } => {
            if confirm(yes, &format!("Remove item {item} from comparison {table}?"))? {
                api.remove_comparison_item(table, item).await?;
                println!("Removed item {item}");
            }
        }
    }
    Ok(())
}

async fn sources(api: &ApiClient, cmd: SourceCmd, yes: bool) -> Result<()> {
    match cmd {
        SourceCmd::List => {
            let rows = api
                .list_web_sources()
                .await?
                .into_iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.url.clone(),
                        s!(s.source_type.label()),
                        s.last_scraped.as_deref().map(display_date).unwrap_or_else(|| s!("Never")),
                    ]
                })
                .collect::<Vec<_>>();
            print_table(&["ID", "URL", "Type", "Last scraped"], &rows);
        }
        SourceCmd::Add { url, source_type } => {
            let s = api.add_web_source(&url, &source_type).await?;
            println!("Tracking {} ({})", s.url, s.id);
        }
        SourceCmd::Delete { id } => {
            if confirm(yes, &format!("Delete web source {id}?"))? {
                api.delete_web_source(id).await?;
                println!("Deleted web source {id}");
            }
        }
    }
    Ok(())
}

/* ---------- output ---------- */

fn or_dash(v: Option<String>) -> String {
    v.unwrap_or_else(|| s!(NO_DATA))
}

fn print_detail(d: &ComparisonDetail) {
    println!("{}", d.table.name);
    if let Some(desc) = &d.table.description {
        println!("{desc}");
    }
    println!();

    if d.is_empty() {
        println!("This comparison has no models.");
        return;
    }

    let pivot = d.pivot();
    let mut headers = vec![s!("Benchmark")];
    headers.extend(pivot.columns.iter().map(|c| c.model_name.clone()));
    let rows = pivot
        .rows
        .iter()
        .map(|r| {
            let mut line = vec![r.name.clone()];
            line.extend((0..pivot.columns.len()).map(|ci| s!(r.cell_text(ci))));
            line
        })
        .collect::<Vec<_>>();
    let headers = headers.iter().map(String::as_str).collect::<Vec<_>>();
    print_table(&headers, &rows);

    println!();
    println!("Current pricing");
    for m in &d.models {
        let prices = d.pricing_for(m.id);
        if prices.is_empty() {
            println!("  {}: {NO_DATA}", m.name);
            continue;
        }
        for p in prices {
            println!("  {}: {} {} {}", m.name, p.price_type.label(), p.price_label(), p.unit.label());
        }
    }
}

/// Left-aligned columns padded to the widest cell.
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("(none)");
        return;
    }
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for r in rows {
        for (w, cell) in widths.iter_mut().zip(r) {
            *w = (*w).max(cell.chars().count());
        }
    }

    print_row(headers, &widths);
    for r in rows {
        print_row(&r.iter().map(String::as_str).collect::<Vec<_>>(), &widths);
    }
}

fn print_row(cells: &[&str], widths: &[usize]) {
    let parts = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}", w = *w))
        .collect::<Vec<_>>();
    println!("{}", parts.join("  ").trim_end());
}

/// `--yes` skips the prompt.
fn confirm(yes: bool, question: &str) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
