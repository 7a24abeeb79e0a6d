//! CLI command implementations
//!
//! Each invocation loads the configuration, rehydrates the store from its
//! slot, runs one command and prints one JSON response. A mutation whose
//! persist failed is reported as an error, since the in-memory change dies
//! with the process.

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{InventoryConfig, DEFAULT_CONFIG_PATH};
use crate::model::{
    validate_draft, validate_patch, PatchDraft, Record, RecordDraft, RecordId, StockFilter,
    StockStatus, Thresholds,
};
use crate::observability::{log_event_with_fields, set_min_severity, Event, Severity};
use crate::report::{ReportEngine, StandardReports};
use crate::slot::{FileSlotStore, SlotStore};
use crate::store::{FilterCriteria, RecordStore, SyncState};

use super::args::{Cli, Command, ReportKind};
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// A record as shown to the user, with its derived values.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordView<'a> {
    #[serde(flatten)]
    record: &'a Record,
    total_value: f64,
    stock_status: StockStatus,
    stock_label: String,
}

impl<'a> RecordView<'a> {
    fn new(record: &'a Record, thresholds: &Thresholds) -> Self {
        Self {
            record,
            total_value: record.total_value(),
            stock_status: record.stock_status(thresholds),
            stock_label: record.stock_level(thresholds).label(record.quantity_on_hand()),
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(&cli.config, cli.command)
}

/// Loads configuration, executes `cmd` and writes its response.
pub fn run_command(config_path: &Path, cmd: Command) -> CliResult<()> {
    set_min_severity(Severity::Warn);

    let config = load_config(config_path)?;
    set_min_severity(config.severity());
    let shown_path = config_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("data_dir", config.data_dir.as_str()), ("path", shown_path.as_str())],
    );

    let data = execute(&config, cmd)?;
    write_response(data)
}

/// The default path may be absent; an explicit one must exist.
fn load_config(path: &Path) -> CliResult<InventoryConfig> {
    let config = if path == Path::new(DEFAULT_CONFIG_PATH) {
        InventoryConfig::load_or_default(path)?
    } else {
        InventoryConfig::load(path)?
    };
    Ok(config)
}

/// Runs one command against the configured store and returns its payload.
pub fn execute(config: &InventoryConfig, cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Init => init(config),
        Command::Add {
            name,
            category,
            price,
            quantity,
        } => add(
            config,
            RecordDraft {
                name,
                category,
                unit_price: price,
                quantity_on_hand: quantity,
            },
        ),
        Command::Update {
            id,
            name,
            category,
            price,
            quantity,
        } => update(
            config,
            id,
            PatchDraft {
                name,
                category,
                unit_price: price,
                quantity_on_hand: quantity,
            },
        ),
        Command::Remove { id } => remove(config, id),
        Command::Get { id } => get(config, id),
        Command::List => list(config),
        Command::Filter {
            search,
            category,
            stock,
        } => filter(config, &search, &category, &stock),
        Command::Categories => categories(config),
        Command::Report { kind } => report(config, kind),
        Command::Clear => clear(config),
    }
}

/// Creates the data directory and writes an empty collection.
///
/// Refuses to touch a slot that already exists, even an empty one.
pub fn init(config: &InventoryConfig) -> CliResult<Value> {
    let slot = FileSlotStore::open(config.data_path())?;
    if slot.load(&config.slot_key)?.is_some() {
        return Err(CliError::already_initialized(&config.slot_key));
    }
    let path = slot.slot_path(&config.slot_key);

    let mut store = RecordStore::new(slot, config.slot_key.as_str(), config.thresholds)?;
    store.initialize();
    store.flush()?;

    Ok(json!({
        "initialized": true,
        "slot": path.to_string_lossy(),
    }))
}

fn add(config: &InventoryConfig, draft: RecordDraft) -> CliResult<Value> {
    let fields = validate_draft(&draft)?;
    let mut store = open_store(config)?;

    let record = store
        .add(fields)
        .ok_or_else(|| CliError::ids_exhausted(store.slot_key()))?;
    ensure_persisted(&store)?;

    view(&record, &config.thresholds)
}

fn update(config: &InventoryConfig, id: RecordId, draft: PatchDraft) -> CliResult<Value> {
    let patch = validate_patch(&draft)?;
    let mut store = open_store(config)?;

    let record = store.update(id, patch).ok_or_else(|| CliError::not_found(id))?;
    ensure_persisted(&store)?;

    view(&record, &config.thresholds)
}

fn remove(config: &InventoryConfig, id: RecordId) -> CliResult<Value> {
    let mut store = open_store(config)?;

    if !store.remove(id) {
        return Err(CliError::not_found(id));
    }
    ensure_persisted(&store)?;

    Ok(json!({ "removed": id }))
}

fn get(config: &InventoryConfig, id: RecordId) -> CliResult<Value> {
    let store = open_store(config)?;
    let record = store.get_by_id(id).ok_or_else(|| CliError::not_found(id))?;
    view(&record, &config.thresholds)
}

fn list(config: &InventoryConfig) -> CliResult<Value> {
    let store = open_store(config)?;
    views(&store.list_all(), &config.thresholds)
}

fn filter(config: &InventoryConfig, search: &str, category: &str, stock: &str) -> CliResult<Value> {
    let store = open_store(config)?;

    let mut criteria = FilterCriteria::new().search(search).category(category);
    if let Some(stock_filter) = StockFilter::parse(stock) {
        criteria = criteria.stock(stock_filter);
    }

    views(&store.filter(&criteria), &config.thresholds)
}

fn categories(config: &InventoryConfig) -> CliResult<Value> {
    let store = open_store(config)?;

    let entries: Vec<Value> = config
        .categories
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "name": c.name,
                "icon": c.icon,
                "displayName": c.display_name(),
                "records": store.by_category(&c.id).len(),
            })
        })
        .collect();

    let uncatalogued = store
        .list_all()
        .iter()
        .filter(|r| !config.is_known_category(r.category()))
        .count();

    Ok(json!({
        "categories": entries,
        "uncataloguedRecords": uncatalogued,
    }))
}

fn report(config: &InventoryConfig, kind: ReportKind) -> CliResult<Value> {
    let store = open_store(config)?;
    let engine = StandardReports::new(config.thresholds);
    let snapshot = store.list_all();

    let (name, data) = match kind {
        ReportKind::Stats => ("stats", serde_json::to_value(engine.aggregate_stats(&snapshot))?),
        ReportKind::LowStock => (
            "low_stock",
            serde_json::to_value(engine.low_stock_records(&snapshot))?,
        ),
        ReportKind::ByCategory => (
            "by_category",
            serde_json::to_value(engine.group_by_category(&snapshot))?,
        ),
        ReportKind::Top { limit } => (
            "top_by_value",
            serde_json::to_value(engine.top_by_value(&snapshot, limit))?,
        ),
        ReportKind::Breakdown => (
            "breakdown",
            serde_json::to_value(engine.category_breakdown(&snapshot))?,
        ),
        ReportKind::All { limit } => (
            "all",
            serde_json::to_value(engine.full_report(&snapshot, limit))?,
        ),
    };

    log_event_with_fields(
        Event::ReportGenerated,
        &[("report", name), ("records", snapshot.len().to_string().as_str())],
    );
    Ok(data)
}

fn clear(config: &InventoryConfig) -> CliResult<Value> {
    let mut store = open_store(config)?;
    let dropped = store.clear();
    ensure_persisted(&store)?;

    Ok(json!({ "cleared": dropped }))
}

fn open_store(config: &InventoryConfig) -> CliResult<RecordStore<FileSlotStore>> {
    let slot = FileSlotStore::open(config.data_path())?;
    let mut store = RecordStore::new(slot, config.slot_key.as_str(), config.thresholds)?;
    store.initialize();
    Ok(store)
}

fn ensure_persisted<S: SlotStore>(store: &RecordStore<S>) -> CliResult<()> {
    match store.sync_state() {
        SyncState::InSync => Ok(()),
        SyncState::Diverged => Err(CliError::persist_failed(store.slot_key())),
    }
}

fn view(record: &Record, thresholds: &Thresholds) -> CliResult<Value> {
    Ok(serde_json::to_value(RecordView::new(record, thresholds))?)
}

fn views(records: &[Record], thresholds: &Thresholds) -> CliResult<Value> {
    let views: Vec<RecordView<'_>> = records
        .iter()
        .map(|r| RecordView::new(r, thresholds))
        .collect();
    Ok(serde_json::to_value(views)?)
}
