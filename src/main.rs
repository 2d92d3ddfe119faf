use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use jupiter::config::{self, Settings};
use jupiter::error::AppError;
use jupiter::models::{LayoutState, Overlay, RoleFilter, SortColumn, TableQuery, UserRecord};
use jupiter::services::{load_users, query};
use jupiter::templates::render_users_page;
use jupiter::utils::parse_query_string;

#[derive(Parser)]
#[command(
    name = "jupiter",
    author,
    version,
    about = "Jupiter user directory",
    long_about = r#"Jupiter: browse the user directory from the terminal or render it as a page.

Records come from the built-in mock users, or from the JSON array named by
JUPITER_USERS_FILE. Every command runs the same search, role filter and sort.

Examples:
  1) List admins sorted by email, descending:
      jupiter users list --role Admin --sort email --direction desc
  2) Render the page with a query string:
      jupiter render --query 'search=jane&sort=role' --out users.html
"#,
    after_help = "Use `jupiter <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the user directory
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
    /// Render the User Management page to HTML
    #[command(about = "Render the User Management page", long_about = "Render the full page (sidebar, header and users table) to static HTML. Column headings link to the query string that selecting them would produce.")]
    Render {
        /// URL query string, e.g. `search=jane&role=All&sort=email&direction=desc`
        #[arg(long)]
        query: Option<String>,
        #[command(flatten)]
        filters: QueryArgs,
        /// Render in dark mode regardless of JUPITER_DARK_MODE
        #[arg(long)]
        dark: bool,
        /// Render the sidebar collapsed
        #[arg(long)]
        collapsed: bool,
        /// Render with one overlay open
        #[arg(long, value_enum)]
        open: Option<OverlayArg>,
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validate configuration and the record source
    #[command(about = "Validate configuration and the record source.", long_about = "Load environment configuration and the configured record source, checking that it parses and that no two users share an id.")]
    CheckConfig,
}

#[derive(Subcommand)]
enum UserCommands {
    #[command(about = "List users", long_about = "Search, filter and sort the user directory and print the result as a table (or JSON with --json).")]
    List {
        #[command(flatten)]
        filters: QueryArgs,
        /// Select a column as if its heading were clicked (flips direction if already active)
        #[arg(long)]
        toggle: Option<String>,
        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Args, Default)]
struct QueryArgs {
    /// Case-insensitive text matched against every field
    #[arg(long, short = 's')]
    search: Option<String>,
    /// Role to keep (`All` keeps everyone; matching is case-sensitive)
    #[arg(long, short = 'r')]
    role: Option<String>,
    /// Sort column: name, email or role
    #[arg(long)]
    sort: Option<String>,
    /// Sort direction: asc or desc
    #[arg(long)]
    direction: Option<String>,
}

impl QueryArgs {
    /// Overlay the flags that were given on top of `base`.
    fn apply(&self, mut base: TableQuery) -> Result<TableQuery, AppError> {
        if let Some(search) = &self.search {
            base.search = search.clone();
        }
        if let Some(role) = &self.role {
            base.role = RoleFilter::from(role.as_str());
        }
        if let Some(sort) = &self.sort {
            base.sort.column = sort.parse()?;
        }
        if let Some(direction) = &self.direction {
            base.sort.direction = direction.parse()?;
        }
        Ok(base)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OverlayArg {
    Sidebar,
    Workspaces,
    UserMenu,
}

impl From<OverlayArg> for Overlay {
    fn from(arg: OverlayArg) -> Self {
        match arg {
            OverlayArg::Sidebar => Overlay::Sidebar,
            OverlayArg::Workspaces => Overlay::Workspaces,
            OverlayArg::UserMenu => Overlay::UserMenu,
        }
    }
}

fn print_users_table(view: &[&UserRecord], query: &TableQuery, total: usize) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    let mut header = vec!["ID".to_string()];
    for column in SortColumn::all() {
        if query.sort.column == *column {
            header.push(format!("{} {}", column.label(), query.sort.direction.arrow()));
        } else {
            header.push(column.label().to_string());
        }
    }
    table.set_header(header);
    for user in view {
        table.add_row(vec![
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            user.role.to_string(),
        ]);
    }
    println!("\n{table}");
    println!(
        "\n{}\n",
        yansi::Paint::new(format!("Showing {} of {} users", view.len(), total)).cyan()
    );
}

fn users_list(settings: &Settings, filters: &QueryArgs, toggle: Option<&str>, json: bool) -> Result<(), AppError> {
    let users = load_users(settings.users_file.as_deref())?;
    let mut table_query = filters.apply(TableQuery::default())?;
    if let Some(column) = toggle {
        table_query.toggle_sort(column.parse()?);
    }
    let view = query(&users, &table_query);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_users_table(&view, &table_query, users.len());
    }
    Ok(())
}

fn render_page(
    settings: &Settings,
    raw_query: Option<&str>,
    filters: &QueryArgs,
    layout: LayoutState,
    out: Option<&PathBuf>,
) -> Result<(), AppError> {
    let users = load_users(settings.users_file.as_deref())?;
    let base = match raw_query {
        Some(raw) => TableQuery::from_query_pairs(&parse_query_string(raw))?,
        None => TableQuery::default(),
    };
    let table_query = filters.apply(base)?;
    let html = render_users_page(settings, &users, &table_query, layout)?;

    match out {
        Some(path) => {
            std::fs::write(path, html).map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "Rendered users page");
            println!("{} {}", yansi::Paint::new("Wrote").green(), yansi::Paint::new(path.display()).cyan());
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn check_config(settings: &Settings) -> Result<(), AppError> {
    let users = load_users(settings.users_file.as_deref())?;
    let source = match &settings.users_file {
        Some(path) => path.display().to_string(),
        None => "built-in mock users".to_string(),
    };
    println!("{}: {}", yansi::Paint::new("App name").bold(), settings.app_name);
    println!("{}: {}", yansi::Paint::new("Record source").bold(), source);
    println!(
        "{}",
        yansi::Paint::new(format!("Configuration looks valid ({} users, ids unique)", users.len())).green()
    );
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    config::load_env_file(cli.env_file.as_deref());
    let settings = Settings::from_env();
    tracing::debug!(?settings, "Loaded settings");

    // With no subcommand, list users with the default query
    let command = cli.command.unwrap_or(Commands::Users {
        sub: UserCommands::List {
            filters: QueryArgs::default(),
            toggle: None,
            json: false,
        },
    });

    match command {
        Commands::Users { sub } => match sub {
            UserCommands::List { filters, toggle, json } => {
                users_list(&settings, &filters, toggle.as_deref(), json)
            }
        },
        Commands::Render {
            query,
            filters,
            dark,
            collapsed,
            open,
            out,
        } => {
            let mut layout = LayoutState::new(settings.dark_mode || dark);
            if collapsed {
                layout.toggle_collapsed();
            }
            if let Some(overlay) = open {
                layout.open(overlay.into());
            }
            render_page(&settings, query.as_deref(), &filters, layout, out.as_ref())
        }
        Commands::CheckConfig => check_config(&settings),
    }
}

fn main() {
    // Initialize tracing; stdout carries command output
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if let Err(e) = run(cli) {
        tracing::error!(%e, "Command failed");
        eprintln!("{}: {}", yansi::Paint::new("Error").red(), e);
        process::exit(1);
    }
}
