//! CLI entry point for commit-hash-injector
//!
//! Reads a template HTML page, replaces its `xxxxxxxx` placeholder with the
//! current commit hash and writes the result. Can also print the hash or
//! serve it over HTTP.

use clap::Parser;
use commit_hash_injector::{
    load_config_from_path, logging, provider_from_config, save_config_to_path, start_web_server,
    ConfigOverrides, InjectorConfig, InjectorError, Injector, DEFAULT_CONFIG_FILE,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Version constants from build script
const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT_HASH: &str = env!("GIT_COMMIT_HASH");
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP");

/// Get detailed version information
fn print_version() {
    println!("commit-hash-injector {}", VERSION);
    println!("commit: {}", COMMIT_HASH);
    println!("built: {}", BUILD_TIMESTAMP);
}

/// Command-line arguments for commit-hash-injector
#[derive(Parser, Debug)]
#[command(
    name = "commit-hash-injector",
    about = "Inject the current commit hash into a static HTML page",
    version = VERSION,
    long_about = "Replaces the first xxxxxxxx placeholder in a template HTML page with the
current commit hash and writes the result to a new file.

Subcommands:
  inject  - Substitute the placeholder and write the output page (default)
  hash    - Print the version identifier that would be injected
  serve   - Serve the version identifier at GET /getCommitHash
  init    - Write a default configuration file

Settings are read from commit-hash-injector.json in the working directory
(or --config) and may be overridden by flags.
"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print debug output to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands
#[derive(Parser, Debug)]
enum Commands {
    /// Substitute the placeholder and write the output page (default command)
    Inject(InjectArgs),

    /// Print the version identifier
    Hash(ProviderArgs),

    /// Serve the version identifier over HTTP
    Serve(ServeArgs),

    /// Write a default configuration file
    Init(InitArgs),
}

/// Options selecting where the version identifier comes from
#[derive(Parser, Debug, Default, Clone)]
struct ProviderArgs {
    /// Git repository to read the latest commit hash from
    #[arg(long)]
    repo: Option<PathBuf>,

    /// Read the hash from this file instead of running git
    #[arg(long)]
    hash_file: Option<PathBuf>,
}

/// Arguments for the inject command
#[derive(Parser, Debug, Default)]
struct InjectArgs {
    /// Template document containing the placeholder
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output document
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Literal replacement value (skips the version provider)
    #[arg(short, long)]
    replacement: Option<String>,

    /// Replacement template; {{hash}} and {{date}} are substituted
    #[arg(short, long)]
    template: Option<String>,

    /// Write an unchanged copy if the template has no placeholder
    #[arg(long)]
    allow_missing: bool,

    #[command(flatten)]
    provider: ProviderArgs,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
struct ServeArgs {
    /// Port for the web server (default from config: 8081)
    #[arg(short, long)]
    port: Option<u16>,

    /// Interface to bind (default from config: 127.0.0.1)
    #[arg(long)]
    host: Option<String>,

    /// Value of the Access-Control-Allow-Origin header
    #[arg(long)]
    allowed_origin: Option<String>,

    #[command(flatten)]
    provider: ProviderArgs,
}

/// Arguments for the init command
#[derive(Parser, Debug)]
struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

fn main() -> Result<(), InjectorError> {
    // Check for --version or -V flag before parsing
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-V") {
        print_version();
        std::process::exit(0);
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Inject(inject_args)) => inject_command(&cli.config, cli.debug, inject_args),
        Some(Commands::Hash(provider_args)) => hash_command(&cli.config, cli.debug, provider_args),
        Some(Commands::Serve(serve_args)) => serve_command(&cli.config, cli.debug, serve_args),
        Some(Commands::Init(init_args)) => init_command(&cli.config, init_args),
        None => inject_command(&cli.config, cli.debug, InjectArgs::default()),
    }
}

/// Load the config file and apply command-line overrides
fn load_config(path: &Path, overrides: ConfigOverrides) -> Result<InjectorConfig, InjectorError> {
    let config = overrides.apply(load_config_from_path(path)?);
    logging::init_debug(&config);
    commit_hash_injector::debug_log!("Configuration loaded from {}", path.display());
    Ok(config)
}

fn provider_overrides(args: ProviderArgs, debug: bool) -> ConfigOverrides {
    ConfigOverrides {
        repo: args.repo,
        hash_file: args.hash_file,
        debug,
        ..Default::default()
    }
}

/// Handle the inject command - substitute the placeholder and write the page
fn inject_command(config_path: &Path, debug: bool, args: InjectArgs) -> Result<(), InjectorError> {
    let overrides = ConfigOverrides {
        source_path: args.source,
        dest_path: args.dest,
        replacement: args.replacement,
        template: args.template,
        allow_missing: args.allow_missing,
        ..provider_overrides(args.provider, debug)
    };
    let config = load_config(config_path, overrides)?;

    let injector = Injector::from_config(config)?;
    let report = injector.inject_files()?;

    match &report.modified_line {
        Some(line) => println!("{}", line),
        None => println!("No placeholder found; copied template unchanged"),
    }
    println!("Wrote {}", report.destination);

    Ok(())
}

/// Handle the hash command - print the version identifier
fn hash_command(config_path: &Path, debug: bool, args: ProviderArgs) -> Result<(), InjectorError> {
    let config = load_config(config_path, provider_overrides(args, debug))?;
    let provider = provider_from_config(&config.provider)?;

    println!("{}", provider.identifier()?);
    Ok(())
}

/// Handle the serve command - run the commit hash API
fn serve_command(config_path: &Path, debug: bool, args: ServeArgs) -> Result<(), InjectorError> {
    let mut config = load_config(config_path, provider_overrides(args.provider, debug))?;
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(allowed_origin) = args.allowed_origin {
        config.server.allowed_origin = allowed_origin;
    }

    let provider: Arc<dyn commit_hash_injector::VersionProvider> =
        Arc::from(provider_from_config(&config.provider)?);

    println!("Press Ctrl+C to stop the server");

    actix_rt::System::new().block_on(async {
        start_web_server(provider, config.server)
            .await
            .map_err(InjectorError::IoError)
    })
}

/// Handle the init command - write a default configuration file
fn init_command(config_path: &Path, args: InitArgs) -> Result<(), InjectorError> {
    if config_path.exists() && !args.force {
        println!("{} already exists. Use --force to overwrite.", config_path.display());
        return Ok(());
    }

    save_config_to_path(&InjectorConfig::default(), config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["commit-hash-injector"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert!(!cli.debug);
    }

    #[test]
    fn test_inject_with_options() {
        let cli = Cli::try_parse_from([
            "commit-hash-injector",
            "inject",
            "--source",
            "public/indexVanilla.html",
            "--dest",
            "public/index.html",
            "--replacement",
            "v1.0.0",
            "--allow-missing",
            "--config",
            "/tmp/injector.json",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("/tmp/injector.json"));
        match cli.command {
            Some(Commands::Inject(args)) => {
                assert_eq!(args.source, Some(PathBuf::from("public/indexVanilla.html")));
                assert_eq!(args.dest, Some(PathBuf::from("public/index.html")));
                assert_eq!(args.replacement, Some("v1.0.0".to_string()));
                assert!(args.allow_missing);
                assert!(args.provider.repo.is_none());
            }
            _ => panic!("Expected Inject command"),
        }
    }

    #[test]
    fn test_hash_with_file() {
        let cli =
            Cli::try_parse_from(["commit-hash-injector", "hash", "--hash-file", "commitHash"]).unwrap();
        match cli.command {
            Some(Commands::Hash(args)) => {
                assert_eq!(args.hash_file, Some(PathBuf::from("commitHash")));
            }
            _ => panic!("Expected Hash command"),
        }
    }

    #[test]
    fn test_serve_command() {
        let cli = Cli::try_parse_from([
            "commit-hash-injector",
            "serve",
            "--port",
            "9000",
            "--allowed-origin",
            "https://faucet.example",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Serve(args)) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.allowed_origin, Some("https://faucet.example".to_string()));
                assert!(args.host.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_init_force() {
        let cli = Cli::try_parse_from(["commit-hash-injector", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Init(args)) => assert!(args.force),
            _ => panic!("Expected Init command"),
        }
    }
}
