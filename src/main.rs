use clap::{Parser, Subcommand};
use palette_harmony::{
    generate_harmonic_palette, generate_random_color, hex_to_hsl, HarmonyRule, HexColor,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchbook::api;
use swatchbook::api::validate;
use swatchbook::models::{AppConfig, ExportDocument, DEFAULT_CONFIG_YAML};
use swatchbook::server;

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Swatchbook - color-harmony palettes with undo/redo history")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a single palette and print it
    Generate {
        /// Harmony rule: random, complementary, analogous or triadic
        #[arg(short, long)]
        rule: Option<HarmonyRule>,

        /// Seed color as #RRGGBB (random if omitted)
        #[arg(short, long)]
        seed: Option<String>,

        /// Print the palette as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Print the HSL components of a hex color
    Convert {
        /// Color as #RRGGBB
        hex: String,
    },
    /// Write the embedded default config.yaml for customization
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Swatchbook API",
        description = "Color-harmony palettes with undo/redo history",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_get_palette,
        api::handle_generate,
        api::handle_commit,
        api::handle_undo,
        api::handle_redo,
        api::handle_get_rule,
        api::handle_set_rule,
        api::handle_list_saved,
        api::handle_save,
        api::handle_export,
        api::handle_convert,
    ),
    components(schemas(
        api::PaletteResponse,
        api::GenerateRequest,
        api::CommitRequest,
        api::RuleResponse,
        api::RuleRequest,
        api::SavedResponse,
        api::ConvertResponse,
        ExportDocument,
    )),
    tags(
        (name = "Palette", description = "Palette generation and undo/redo history"),
        (name = "Rule", description = "Harmony rule selection"),
        (name = "Saved", description = "Saved palettes and export"),
        (name = "Color", description = "Color conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { rule, seed, json }) => {
            init_cli_logging();
            run_generate_command(rule, seed.as_deref(), json)
        }
        Some(Commands::Convert { hex }) => {
            init_cli_logging();
            run_convert_command(&hex)
        }
        Some(Commands::Init { output, force }) => run_init_command(&output, force),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Generate one palette without touching any session
fn run_generate_command(
    rule: Option<HarmonyRule>,
    seed: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config();
    let rule = rule.unwrap_or(config.default_rule);

    let seed: HexColor = match seed {
        Some(s) => validate::parse_hex_color(s)?,
        None => generate_random_color(),
    };

    let palette = generate_harmonic_palette(seed, rule);

    if json {
        println!("{}", serde_json::to_string(&palette)?);
    } else {
        for color in &palette {
            println!("{color}");
        }
    }

    Ok(())
}

fn run_convert_command(hex: &str) -> anyhow::Result<()> {
    let color = validate::parse_hex_color(hex)?;
    let hsl = hex_to_hsl(color);
    println!("{color}  hsl({:.1}, {:.1}%, {:.1}%)", hsl.h, hsl.s, hsl.l);
    Ok(())
}

/// Write the embedded config.yaml to disk
fn run_init_command(output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        println!(
            "Skipped {} (already exists, use --force to overwrite)",
            output.display()
        );
        return Ok(());
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, DEFAULT_CONFIG_YAML)?;
    println!("Wrote {}", output.display());

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Swatchbook v{VERSION}");
    println!("Color-harmony palettes with undo/redo history\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    println!("\nCommands:");
    println!("  swatchbook serve      Start the HTTP server");
    println!("  swatchbook generate   Print a palette");
    println!("  swatchbook convert    Print the HSL form of a color");
    println!("  swatchbook init       Write the default config.yaml");
    println!("\nRun 'swatchbook --help' for more details.");
}

fn load_config() -> AppConfig {
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AppConfig::load(config_file.as_deref())
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = load_config();

    let state = server::create_app_state(config);

    // Build router: shared API routes plus production-only docs
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchbook server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
