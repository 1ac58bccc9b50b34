//! Staff Directory - search, filter, sort and page through the employee list.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use staff_directory as app;
use tracing_appender::non_blocking::WorkerGuard;

use app::client::{BackendClient, load_snapshot};
use app::config::{AppConfig, ConfigLoadResult};
use app::directory::{EmployeeListEngine, EmployeeListView, SortField, SortOrder, ViewMode};
use app::export::{export_employees_to_excel, generate_export_filename};
use app::models::{EmployeeRecord, Role};

/// Search, filter, sort and page through the employee list.
#[derive(Parser)]
#[command(name = "staff-directory")]
struct Cli {
    /// Path to config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Read employees from a JSON snapshot instead of the backend
    #[arg(long)]
    input: Option<PathBuf>,

    /// Free-text search over names, email, department, title and squads
    #[arg(long, short)]
    search: Option<String>,

    /// Only show these roles (repeatable)
    #[arg(long = "role", value_parser = parse_role)]
    roles: Vec<Role>,

    /// Only show these departments (repeatable)
    #[arg(long = "department")]
    departments: Vec<String>,

    /// Only show members of these squads (repeatable)
    #[arg(long = "squad")]
    squads: Vec<String>,

    #[arg(long, value_enum)]
    sort: Option<SortField>,

    #[arg(long, value_enum)]
    order: Option<SortOrder>,

    /// 1-based page number
    #[arg(long, default_value_t = 1, value_parser = parse_positive)]
    page: usize,

    /// Records per page; any positive size, not only the 6/12/24/48 presets
    #[arg(long, value_parser = parse_positive)]
    per_page: Option<usize>,

    /// List the selected filter values next to the available ones
    #[arg(long)]
    show_filters: bool,

    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Write the full sorted result to this .xlsx file
    #[arg(long, conflicts_with = "export_default")]
    export: Option<PathBuf>,

    /// Write the full sorted result to a timestamped .xlsx in the current directory
    #[arg(long)]
    export_default: bool,

    /// Also write daily rolling log files to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn parse_role(s: &str) -> Result<Role, String> {
    s.parse().map_err(|e: app::AppError| e.to_string())
}

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.log_dir.as_ref());

    tracing::info!("Staff Directory starting...");

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => {
            tracing::info!("Dev mode: loading config from current directory");
            PathBuf::from("config.toml")
        }
        (None, false) => AppConfig::default_path(),
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            AppConfig::default()
        }
        ConfigLoadResult::Invalid(e) => {
            bail!("Invalid config {}: {e}", config_path.display());
        }
    };

    let employees = match &cli.input {
        Some(path) => load_snapshot(path).with_context(|| format!("Failed to load {}", path.display()))?,
        None => fetch_from_backend(&config)?,
    };

    let mut engine = EmployeeListEngine::with_state(Some(employees), config.view.initial_state());
    apply_cli(&mut engine, &cli);

    let view = engine.view();
    print_view(&view, engine.employees().len());

    let export_path = match (&cli.export, cli.export_default) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(generate_export_filename("employees"))),
        (None, false) => None,
    };
    if let Some(path) = export_path {
        export_employees_to_excel(&view.sorted, &path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        tracing::info!("Exported {} employees to {}", view.sorted.len(), path.display());
        println!("Exported {} employees to {}", view.sorted.len(), path.display());
    }

    Ok(())
}

/// Console logging plus an optional rolling file. The guard must outlive `main`.
fn init_logging(log_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let console = fmt::layer().with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "staff-directory.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            None
        }
    }
}

fn fetch_from_backend(config: &AppConfig) -> anyhow::Result<Vec<EmployeeRecord>> {
    if !config.backend.is_configured() {
        bail!("No --input given and no backend URL configured");
    }

    // Create tokio runtime for the HTTP request
    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    let client = BackendClient::new(&config.backend)?;

    let employees = rt
        .block_on(client.fetch_employees())
        .with_context(|| format!("Failed to fetch employees from {}", config.backend.url))?;
    Ok(employees)
}

/// Apply command-line view parameters on top of the configured defaults.
fn apply_cli(engine: &mut EmployeeListEngine, cli: &Cli) {
    let state = engine.state_mut();

    if let Some(mode) = cli.view {
        state.set_view_mode(mode);
    }
    if let Some(per_page) = cli.per_page {
        state.set_items_per_page(per_page);
    }
    if let Some(query) = &cli.search {
        state.set_search_query(query.as_str());
    }
    if !cli.roles.is_empty() {
        state.set_role_filters(cli.roles.iter().copied());
    }
    if !cli.departments.is_empty() {
        state.set_department_filters(cli.departments.iter().cloned());
    }
    if !cli.squads.is_empty() {
        state.set_squad_filters(cli.squads.iter().cloned());
    }
    if let Some(field) = cli.sort {
        state.set_sort_field(field);
    }
    if let Some(order) = cli.order {
        state.set_sort_order(order);
    }
    state.set_show_filters(cli.show_filters || state.has_active_filters());

    // Page last: every filter change above resets it.
    state.set_current_page(cli.page);
}

fn print_view(view: &EmployeeListView<'_>, total: usize) {
    let state = view.state;

    for line in filter_lines(view) {
        println!("{line}");
    }
    println!();

    println!(
        "{} | sorted by {} ({:?}) | {} view",
        view.summary(total),
        state.sort_field().name(),
        state.sort_order(),
        state.view_mode().name()
    );

    match view.page_range() {
        Some((first, last)) => println!(
            "Page {} of {} (items {first}-{last})",
            state.current_page(),
            view.total_pages
        ),
        None => {
            println!("Page {} of {} (no items)", state.current_page(), view.total_pages);
            return;
        }
    }
    println!();

    match state.view_mode() {
        ViewMode::List => {
            println!("{:<24} {:<30} {:<16} {:<10}", "Name", "Email", "Department", "Role");
            for emp in &view.paginated {
                println!(
                    "{:<24} {:<30} {:<16} {:<10}",
                    emp.full_name(),
                    emp.email,
                    emp.department.as_deref().unwrap_or("-"),
                    emp.role
                );
            }
        }
        ViewMode::Grid => {
            for emp in &view.paginated {
                print_card(emp);
            }
        }
        ViewMode::Department => {
            for group in view.page_by_department() {
                println!("== {} ({}) ==", group.department, group.employees.len());
                for emp in group.employees {
                    println!("  {} <{}> {}", emp.full_name(), emp.email, emp.role);
                }
            }
        }
    }
}

/// Available departments and squads, plus the selected values when filters are shown.
fn filter_lines(view: &EmployeeListView<'_>) -> Vec<String> {
    let state = view.state;
    let mut lines = vec![
        format!("Departments: {}", view.departments.join(", ")),
        format!("Squads:      {}", view.squads.join(", ")),
    ];

    if state.show_filters() {
        let roles: Vec<_> = state.role_filters().iter().map(Role::as_str).collect();
        let join = |set: &std::collections::BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>().join(", ");
        lines.push(format!("Active filters: {}", state.active_filter_count()));
        if !state.search_query().is_empty() {
            lines.push(format!("  search:      {}", state.search_query()));
        }
        if !roles.is_empty() {
            lines.push(format!("  roles:       {}", roles.join(", ")));
        }
        if !state.department_filters().is_empty() {
            lines.push(format!("  departments: {}", join(state.department_filters())));
        }
        if !state.squad_filters().is_empty() {
            lines.push(format!("  squads:      {}", join(state.squad_filters())));
        }
    }

    lines
}

fn print_card(emp: &EmployeeRecord) {
    println!("+ {}", emp.full_name());
    if let Some(title) = &emp.title {
        println!("| {title}");
    }
    println!("| {} | {}", emp.email, emp.role);
    if let Some(dept) = emp.department_label() {
        println!("| {dept}");
    }
    let squads: Vec<_> = emp.squad_names().collect();
    if !squads.is_empty() {
        println!("| squads: {}", squads.join(", "));
    }
    if let Some(started) = emp.date_started {
        println!("| since {}", started.format("%Y-%m-%d"));
    }
    println!();
}
