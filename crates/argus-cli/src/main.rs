//! CLI entry point for argus.
//!
//! Argument parsing, I/O and exit codes only. Engine wiring and use cases live in
//! `argus-app`; the HTTP surface lives in `argus-server`.

use anyhow::Context;
use argus_app::{
    Engines, ExplainOutput, VerifyInput, api_key_from_env, load_settings, outcome_exit_code,
    parse_receipt_json, run_explain, run_scan, run_verify, serialize_receipt, write_receipt,
    write_text,
};
use argus_server::AppState;
use argus_settings::{LogLevel, Overrides, ResolvedSettings};
use argus_types::ScreeningReceipt;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::future::Future;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "argus",
    version,
    about = "Trust verdicts for wallet addresses and tokenized real-world assets"
)]
struct Cli {
    /// Path to argus config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "argus.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override the trust registry file (TOML, or JSON by extension).
    #[arg(long, global = true)]
    registry: Option<Utf8PathBuf>,

    /// Override log level (error|warn|info|debug|trace).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API.
    Serve {
        /// Bind host (overrides `HOST` and the config file).
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides `PORT` and the config file).
        #[arg(long)]
        port: Option<u16>,
    },

    /// Screen a wallet address against the reputation provider.
    Scan {
        #[arg(allow_hyphen_values = true)]
        address: String,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Verify an issuer/asset pair against the trust registry.
    VerifyAsset {
        #[arg(long, allow_hyphen_values = true)]
        asset_id: String,
        #[arg(long, allow_hyphen_values = true)]
        issuer: String,
        /// Declared value; recorded in the receipt, never affects the verdict.
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        value: f64,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render Markdown from an existing JSON receipt.
    Md {
        /// Path to the JSON receipt.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a flag or validation rule with remediation guidance.
    Explain {
        /// A flag (e.g. "registry:unverified") or rule code (e.g. "length-out-of-range").
        identifier: String,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print the JSON receipt instead of the text summary.
    #[arg(long)]
    json: bool,

    /// Also write the JSON receipt here.
    #[arg(long)]
    report_out: Option<Utf8PathBuf>,

    /// Also write a Markdown receipt here.
    #[arg(long)]
    markdown_out: Option<Utf8PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = match &cli.cmd {
        Commands::Serve { host, port } => cmd_serve(&cli, host.clone(), *port),
        Commands::Scan { address, output } => cmd_scan(&cli, address, output),
        Commands::VerifyAsset {
            asset_id,
            issuer,
            value,
            output,
        } => cmd_verify(
            &cli,
            VerifyInput {
                asset_id: asset_id.clone(),
                issuer: issuer.clone(),
                declared_value: *value,
            },
            output,
        ),
        Commands::Md { report, output } => cmd_md(report, output.as_ref()),
        Commands::Explain { identifier } => cmd_explain(identifier),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("argus error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Load `--config` (missing file allowed) and resolve it against flags and environment.
fn settings(cli: &Cli, host: Option<String>, port: Option<u16>) -> anyhow::Result<ResolvedSettings> {
    let cfg_text = if cli.config.exists() {
        std::fs::read_to_string(&cli.config).with_context(|| format!("read config {}", cli.config))?
    } else {
        String::new()
    };

    let overrides = Overrides {
        profile: cli.profile.clone(),
        host,
        port,
        registry_path: cli.registry.clone(),
        log_level: cli.log_level.clone(),
        config_dir: cli.config.parent().map(|p| p.to_path_buf()),
    };
    let resolved = load_settings(&cfg_text, overrides)?;
    init_logging(resolved.log_level)?;
    Ok(resolved)
}

fn init_logging(level: LogLevel) -> anyhow::Result<()> {
    let level = match level {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install log subscriber")
}

fn require_api_key(settings: &ResolvedSettings) -> anyhow::Result<String> {
    api_key_from_env(&settings.reputation).with_context(|| {
        format!(
            "reputation API key missing: set {}",
            settings.reputation.api_key_env
        )
    })
}

fn block_on<F: Future>(fut: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;
    Ok(runtime.block_on(fut))
}

/// `HOST` / `PORT` from the environment; CLI flags win over them.
fn env_bind(host: Option<String>, port: Option<u16>) -> anyhow::Result<(Option<String>, Option<u16>)> {
    let host = host.or_else(|| std::env::var("HOST").ok().filter(|h| !h.trim().is_empty()));
    let port = match port {
        Some(port) => Some(port),
        None => match std::env::var("PORT") {
            Ok(raw) if !raw.trim().is_empty() => Some(
                raw.trim()
                    .parse::<u16>()
                    .with_context(|| format!("invalid PORT: {raw}"))?,
            ),
            _ => None,
        },
    };
    Ok((host, port))
}

fn cmd_serve(cli: &Cli, host: Option<String>, port: Option<u16>) -> anyhow::Result<i32> {
    let (host, port) = env_bind(host, port)?;
    let settings = settings(cli, host, port)?;
    let api_key = require_api_key(&settings)?;
    let engines = Engines::from_settings(&settings, Some(api_key))?;
    let addr = settings.server.bind_addr();

    block_on(async move {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("bind {addr}"))?;
        argus_server::serve(listener, Arc::new(AppState { engines }), shutdown_signal()).await
    })??;
    Ok(0)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

fn cmd_scan(cli: &Cli, address: &str, output: &OutputArgs) -> anyhow::Result<i32> {
    let settings = settings(cli, None, None)?;
    // Rejected addresses never reach the provider.
    let api_key = if argus_types::validate(address).is_ok() {
        Some(require_api_key(&settings)?)
    } else {
        api_key_from_env(&settings.reputation)
    };
    let engines = Engines::from_settings(&settings, api_key)?;

    let receipt = block_on(run_scan(&engines, address))?;
    emit(&receipt, output)
}

fn cmd_verify(cli: &Cli, input: VerifyInput, output: &OutputArgs) -> anyhow::Result<i32> {
    let settings = settings(cli, None, None)?;
    // The provider is only contacted for issuer screening of a well-formed request.
    let well_formed =
        !input.asset_id.trim().is_empty() && argus_types::validate(&input.issuer).is_ok();
    let api_key = if settings.policy.issuer_reputation && well_formed {
        Some(require_api_key(&settings)?)
    } else {
        api_key_from_env(&settings.reputation)
    };
    let engines = Engines::from_settings(&settings, api_key)?;

    let receipt = block_on(run_verify(&engines, &input))?;
    emit(&receipt, output)
}

fn emit(receipt: &ScreeningReceipt, output: &OutputArgs) -> anyhow::Result<i32> {
    if let Some(path) = &output.report_out {
        write_receipt(path, receipt).context("write receipt json")?;
    }
    if let Some(path) = &output.markdown_out {
        write_text(path, &argus_render::render_markdown(receipt)).context("write markdown")?;
    }

    if output.json {
        let bytes = serialize_receipt(receipt)?;
        print!("{}", String::from_utf8_lossy(&bytes));
    } else {
        print!("{}", argus_render::render_text(receipt));
    }
    Ok(outcome_exit_code(&receipt.outcome))
}

fn cmd_md(report_path: &Utf8PathBuf, output: Option<&Utf8PathBuf>) -> anyhow::Result<i32> {
    let text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read receipt {report_path}"))?;
    let receipt = parse_receipt_json(&text)?;
    let md = argus_render::render_markdown(&receipt);

    match output {
        Some(path) => write_text(path, &md).context("write markdown output")?,
        None => print!("{md}"),
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", argus_app::format_explanation(identifier, &exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_flags,
            available_rules,
        } => {
            eprint!(
                "{}",
                argus_app::format_not_found(&identifier, available_flags, available_rules)
            );
            Ok(1)
        }
    }
}
