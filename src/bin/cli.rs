use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use hostlint::config::Config;
use hostlint::error::HostlintError;
use hostlint::output::OutputFormat;
use hostlint::suffix::{group_by_root_domain, BundledSuffixes};
use hostlint::{BatchOptions, LineKind, ScopeTarget, ScopeType};

#[derive(Parser)]
#[command(
    name = "hostlint",
    about = "Classify and validate lists of hosts, domains, IPs, CIDR blocks, and URLs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate newline-separated values from a file (or stdin with '-')
    Check {
        /// Input file; '-' reads stdin
        #[arg(default_value = "-")]
        input: String,

        /// Expected kind (any, domain, subdomain, ipv4, ipv6, cidr, url)
        #[arg(long, short = 'k', default_value = "any")]
        kind: String,

        /// Declared scope target name (e.g. example.com)
        #[arg(long, requires = "scope_type")]
        scope: Option<String>,

        /// Scope target type (domain, ip, cidr)
        #[arg(long, requires = "scope")]
        scope_type: Option<String>,

        /// Output format (console, json)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Group hostnames from a file by registrable domain
    RootDomains {
        /// Input file; '-' reads stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Generate a starter .hostlint.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            input,
            kind,
            scope,
            scope_type,
            format,
            config,
            output,
        } => cmd_check(input, kind, scope, scope_type, format, config, output),
        Commands::RootDomains { input } => cmd_root_domains(input),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn read_input(input: &str) -> Result<String, HostlintError> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_check(
    input: String,
    kind_str: String,
    scope: Option<String>,
    scope_type_str: Option<String>,
    format_str: String,
    config_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
) -> Result<i32, HostlintError> {
    let kind = LineKind::from_str_lenient(&kind_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown kind '{}', using any", kind_str);
        LineKind::Any
    });

    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let scope = match (scope, scope_type_str) {
        (Some(name), Some(ty)) => {
            let ty = ScopeType::from_str_lenient(&ty).ok_or_else(|| {
                HostlintError::Config(format!("unknown scope type '{ty}'"))
            })?;
            Some(ScopeTarget::new(name, ty))
        }
        _ => None,
    };

    let config_path = config_path.unwrap_or_else(|| PathBuf::from(".hostlint.toml"));
    let config = Config::load(&config_path)?;

    let text = read_input(&input)?;
    let report = hostlint::validate_batch(&text, &BatchOptions { kind, scope });
    let rendered = hostlint::output::render(&report, format, &config.report)?;

    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = something to submit, 1 = nothing valid
    Ok(if report.has_valid() { 0 } else { 1 })
}

fn cmd_root_domains(input: String) -> Result<i32, HostlintError> {
    let text = read_input(&input)?;
    let hosts: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    let grouped = group_by_root_domain(hosts, &BundledSuffixes);

    for (root, members) in &grouped.groups {
        println!("{}", root);
        for host in members {
            println!("  {}", host);
        }
    }
    if !grouped.ungrouped.is_empty() {
        println!("(no registrable domain)");
        for host in &grouped.ungrouped {
            println!("  {}", host);
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, HostlintError> {
    let path = PathBuf::from(".hostlint.toml");

    if path.exists() && !force {
        eprintln!(".hostlint.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .hostlint.toml");

    Ok(0)
}
