//! Gridbase CLI - inspect, render, and export workspace files

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridbase::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridbase")]
#[command(author, version, about = "Table workspace inspection and export tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show information about a workspace file
    Info {
        /// Workspace JSON file
        input: PathBuf,
    },

    /// List all tables in a workspace
    Tables {
        /// Workspace JSON file
        input: PathBuf,
    },

    /// Render a view of a table to stdout
    Render {
        /// Workspace JSON file
        input: PathBuf,

        /// Table name or id (default: the active table)
        #[arg(short, long)]
        table: Option<String>,

        /// View name or id (default: the table's first view)
        #[arg(short, long)]
        view: Option<String>,

        /// Global search text
        #[arg(short, long)]
        search: Option<String>,

        /// Page number (1-indexed)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Rows per page
        #[arg(long, default_value = "100")]
        page_size: usize,

        /// Show all rows, ignoring pagination
        #[arg(short, long)]
        all: bool,
    },

    /// Export a table to CSV or JSON
    Export {
        /// Workspace JSON file
        input: PathBuf,

        /// Table name or id (default: the active table)
        #[arg(short, long)]
        table: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a demo workspace file
    Seed {
        /// Output workspace JSON file
        output: PathBuf,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(&input),
        Commands::Tables { input } => list_tables(&input),
        Commands::Render {
            input,
            table,
            view,
            search,
            page,
            page_size,
            all,
        } => render(
            &input,
            table.as_deref(),
            view.as_deref(),
            search.as_deref(),
            page,
            page_size,
            all,
        ),
        Commands::Export {
            input,
            table,
            format,
            output,
        } => export(&input, table.as_deref(), format, output.as_deref()),
        Commands::Seed { output } => seed(&output),
    }
}

fn load_workspace(input: &PathBuf) -> Result<Workspace> {
    Workspace::load(input).with_context(|| format!("Failed to open '{}'", input.display()))
}

/// Resolve a table by id, by name, or fall back to the active table
fn resolve_table<'a>(workspace: &'a Workspace, selector: Option<&str>) -> Result<&'a Table> {
    match selector {
        Some(s) => workspace
            .tables
            .iter()
            .find(|t| t.id == s || t.name.eq_ignore_ascii_case(s))
            .with_context(|| format!("Table '{}' not found", s)),
        None => workspace
            .active_table_id
            .as_deref()
            .and_then(|id| workspace.table(id))
            .context("No active table; pass --table"),
    }
}

fn resolve_view<'a>(
    workspace: &'a Workspace,
    table: &Table,
    selector: Option<&str>,
) -> Result<&'a View> {
    let views: Vec<&View> = workspace
        .views
        .iter()
        .filter(|v| v.table_id == table.id)
        .collect();
    match selector {
        Some(s) => views
            .into_iter()
            .find(|v| v.id == s || v.name.eq_ignore_ascii_case(s))
            .with_context(|| format!("View '{}' not found on table '{}'", s, table.name)),
        None => views
            .into_iter()
            .next()
            .with_context(|| format!("Table '{}' has no views", table.name)),
    }
}

fn show_info(input: &PathBuf) -> Result<()> {
    let workspace = load_workspace(input)?;

    println!("File: {}", input.display());
    println!("Folders: {}", workspace.folders.len());
    println!("Tables: {}", workspace.tables.len());
    println!("Views: {}", workspace.views.len());

    for folder in &workspace.folders {
        let count = workspace
            .tables
            .iter()
            .filter(|t| t.folder_id.as_deref() == Some(folder.id.as_str()))
            .count();
        println!();
        println!("  Folder \"{}\": {} tables", folder.name, count);
    }

    Ok(())
}

fn list_tables(input: &PathBuf) -> Result<()> {
    let workspace = load_workspace(input)?;

    for table in &workspace.tables {
        let folder = table
            .folder_id
            .as_deref()
            .and_then(|id| workspace.folder(id))
            .map(|f| f.name.as_str())
            .unwrap_or("-");
        println!(
            "{}\t{}\t{} columns\t{} rows\t{}",
            table.id,
            table.name,
            table.columns.len(),
            table.rows.len(),
            folder
        );
    }

    Ok(())
}

fn render(
    input: &PathBuf,
    table_selector: Option<&str>,
    view_selector: Option<&str>,
    search: Option<&str>,
    page: usize,
    page_size: usize,
    all: bool,
) -> Result<()> {
    let workspace = load_workspace(input)?;
    let table = resolve_table(&workspace, table_selector)?;
    let view = resolve_view(&workspace, table, view_selector)?;

    let options = RenderOptions {
        search: search.unwrap_or_default().to_string(),
        page: if all {
            PageRequest::all()
        } else {
            PageRequest::page(page, page_size)
        },
    };
    let output = gridbase::render_view(table, view, &options);
    let columns = gridbase::visible_columns(table, view);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    for group in &output.groups {
        if output.groups.len() > 1 || view.group_by.is_some() {
            writeln!(out, "== {} ({} rows)", group.key, group.total)?;
        }
        let header: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        writeln!(out, "{}", header.join("\t"))?;
        for rendered in &group.rows {
            let cells: Vec<String> = columns
                .iter()
                .map(|c| rendered.row.get(&c.id).to_display_string())
                .collect();
            writeln!(out, "{}", cells.join("\t"))?;
        }
        writeln!(out)?;
    }

    writeln!(
        out,
        "{} rows, page {} of {}",
        output.total_rows,
        if all { 1 } else { page },
        output.total_pages.max(1)
    )?;

    Ok(())
}

fn export(
    input: &PathBuf,
    table_selector: Option<&str>,
    format: ExportFormat,
    output: Option<&std::path::Path>,
) -> Result<()> {
    let workspace = load_workspace(input)?;
    let table = resolve_table(&workspace, table_selector)?;

    let content = match format {
        ExportFormat::Csv => TableExporter::to_csv_string(table)
            .with_context(|| format!("Failed to export '{}'", table.name))?,
        ExportFormat::Json => TableExporter::to_json_string(table)
            .with_context(|| format!("Failed to export '{}'", table.name))?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            eprintln!("Wrote {} rows to '{}'", table.rows.len(), path.display());
        }
        None => {
            io::stdout()
                .write_all(content.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn seed(output: &PathBuf) -> Result<()> {
    if output.exists() {
        bail!("'{}' already exists, refusing to overwrite", output.display());
    }

    let mut workspace = Workspace::new();

    let work = workspace.add_folder("Work Projects", Some("#3b82f6".to_string()))?;

    let clients = workspace.add_table("Client Database", Some(&work))?;
    // add_table seeds the Name column
    let name_col = workspace.table(&clients).unwrap().columns[0].id.clone();
    let contact = workspace.add_column(&clients, ColumnSpec::new("Contact", ColumnType::Text))?;
    let email = workspace.add_column(&clients, ColumnSpec::new("Email", ColumnType::Email))?;
    let status = workspace.add_column(
        &clients,
        ColumnSpec::new("Status", ColumnType::Select)
            .with_options(["Active", "Inactive", "Prospect"]),
    )?;
    let value = workspace.add_column(
        &clients,
        ColumnSpec::new("Contract Value", ColumnType::Number),
    )?;

    let seed_rows = [
        ("Acme Corp", "Alice Williams", "alice@acme.com", "Active", "50000"),
        ("TechStart Inc", "Bob Chen", "bob@techstart.com", "Active", "75000"),
        ("Global Solutions", "Carol Davis", "carol@global.com", "Prospect", "100000"),
    ];
    for (name, who, mail, state, amount) in seed_rows {
        let row = workspace.add_row(&clients)?;
        workspace.update_cell(&clients, &row, &name_col, name)?;
        workspace.update_cell(&clients, &row, &contact, who)?;
        workspace.update_cell(&clients, &row, &email, mail)?;
        workspace.update_cell(&clients, &row, &status, state)?;
        workspace.update_cell(&clients, &row, &value, amount)?;
    }

    let grid = workspace.add_view(&clients, "Grid View", ViewType::Grid)?;
    workspace.add_sort(&grid, &value, SortDirection::Desc)?;
    workspace.add_color_rule(
        &grid,
        ColorRuleSpec::new(
            status.as_str(),
            FilterOperator::Equals,
            Value::text("Prospect"),
            "#fef3c7",
        ),
    )?;

    let tasks = workspace.add_table("Website Redesign", Some(&work))?;
    let task_col = workspace.table(&tasks).unwrap().columns[0].id.clone();
    let state_col = workspace.add_column(
        &tasks,
        ColumnSpec::new("Status", ColumnType::Select)
            .with_options(["Todo", "In Progress", "Done", "Blocked"]),
    )?;
    let due_col = workspace.add_column(&tasks, ColumnSpec::new("Due Date", ColumnType::Date))?;

    let seed_tasks = [
        ("Design mockups", "Done", "2024-11-15"),
        ("Develop frontend", "In Progress", "2024-12-01"),
        ("Backend API", "Todo", "2024-12-10"),
    ];
    for (task, state, due) in seed_tasks {
        let row = workspace.add_row(&tasks)?;
        workspace.update_cell(&tasks, &row, &task_col, task)?;
        workspace.update_cell(&tasks, &row, &state_col, state)?;
        workspace.update_cell(&tasks, &row, &due_col, due)?;
    }

    let board = workspace.add_view(&tasks, "Grid View", ViewType::Grid)?;
    workspace.update_view(
        &board,
        gridbase::ViewPatch {
            group_by: Some(Some(state_col.clone())),
            ..Default::default()
        },
    )?;

    workspace
        .save(output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    eprintln!(
        "Wrote demo workspace with {} tables to '{}'",
        workspace.tables.len(),
        output.display()
    );

    Ok(())
}
