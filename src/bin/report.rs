use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use tabled::{Table, Tabled, settings::Style};

use gencecom::config::DASHBOARD;
use gencecom::models::{DashboardBody, View};
use gencecom::utils::{format_compact, format_currency, format_date};
use gencecom::{ActionId, EventOutcome, ParamName, ParamValue, Session, ViewBody};

/// Runs one dashboard pass without a window and prints what it would show.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct ReportArgs {
    /// Product category, e.g. "Home & Kitchen"
    #[arg(long)]
    category: Option<String>,
    /// Sales region, e.g. "North America"
    #[arg(long)]
    region: Option<String>,
    /// Sales threshold, 0..=10000
    #[arg(long)]
    threshold: Option<i64>,
    /// YYYY-MM-DD
    #[arg(long)]
    start_date: Option<NaiveDate>,
    /// YYYY-MM-DD
    #[arg(long)]
    end_date: Option<NaiveDate>,
    #[arg(long)]
    seed: Option<u64>,
    /// Also run the sales prediction
    #[arg(long, default_value_t = false)]
    predict: bool,
    /// Print the whole view as JSON instead of tables
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl ReportArgs {
    fn edits(&self) -> Vec<(ParamName, ParamValue)> {
        let mut edits = Vec::new();
        if let Some(d) = self.start_date {
            edits.push((ParamName::StartDate, ParamValue::Date(d)));
        }
        if let Some(d) = self.end_date {
            edits.push((ParamName::EndDate, ParamValue::Date(d)));
        }
        if let Some(c) = &self.category {
            edits.push((ParamName::Category, ParamValue::Choice(c.clone())));
        }
        if let Some(r) = &self.region {
            edits.push((ParamName::Region, ParamValue::Choice(r.clone())));
        }
        if let Some(t) = self.threshold {
            edits.push((ParamName::Threshold, ParamValue::Number(t)));
        }
        edits
    }
}

#[derive(Tabled)]
struct KpiRow {
    #[tabled(rename = "Metric")]
    label: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Delta")]
    delta: String,
}

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Order ID")]
    order_id: String,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Order Date")]
    order_date: String,
    #[tabled(rename = "Sales")]
    sales: String,
}

#[derive(Tabled)]
struct MarketCapRow {
    #[tabled(rename = "Field")]
    category: String,
    #[tabled(rename = "Market Cap")]
    market_cap: String,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Predicted Sales")]
    predicted: String,
}

fn print_tables(body: &DashboardBody) {
    let kpis = body.kpis.iter().map(|t| KpiRow {
        label: t.label.clone(),
        value: t.value.clone(),
        delta: t.delta.clone(),
    });
    println!("{}\n", Table::new(kpis).with(Style::rounded()));

    let records = body.records.iter().map(|r| RecordRow {
        order_id: r.order_id.clone(),
        product: r.product.clone(),
        category: r.category.to_string(),
        order_date: format_date(r.order_date),
        sales: format_currency(r.sales_amount as f64),
    });
    println!("{}\n", Table::new(records).with(Style::rounded()));

    let caps = body.aggregate.entries().iter().map(|(c, v)| MarketCapRow {
        category: c.to_string(),
        market_cap: format!("${}", format_compact(*v)),
    });
    println!("{}", Table::new(caps).with(Style::rounded()));

    if let Some(points) = &body.forecast {
        let rows = points.iter().map(|p| ForecastRow {
            month: p.period_label.clone(),
            predicted: format_currency(p.predicted_value as f64),
        });
        println!("\n{}", Table::new(rows).with(Style::rounded()));
    }
}

fn build_view(args: &ReportArgs) -> Result<View> {
    let seed = args.seed.unwrap_or(DASHBOARD.default_seed);
    let mut session = Session::with_seed(seed);
    log::info!("Report session seeded with {}", seed);

    for (name, value) in args.edits() {
        let flag = name.to_string().replace('_', "-");
        if let EventOutcome::Rejected(reason) = session.set_param(name, value).outcome {
            bail!("Invalid --{}: {}", flag, reason);
        }
    }

    if args.predict {
        session.fire(ActionId::MainSalesPrediction);
    }

    Ok(session.view().clone())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = ReportArgs::parse();
    let view = build_view(&args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        println!("{}", json);
    }

    match &view.body {
        ViewBody::Dashboard(body) => {
            if !args.json {
                print_tables(body);
            }
            Ok(())
        }
        ViewBody::Degraded(failure) => {
            bail!("Dashboard degraded: {} ({})", failure.artifact, failure.reason)
        }
        ViewBody::Placeholder(_) => bail!("Report pass did not land on the dashboard"),
    }
}
