//! rules-resolve: print the asset types a rules editor may offer.
//!
//! Loads the asset catalog and the rules configuration, resolves the
//! requested side and writes the resulting asset type infos to stdout as
//! JSON. With `--watch` the configuration is re-resolved on every change
//! until Ctrl-C.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use ruledesk_core::{AssetTypeInfo, Config};
use ruledesk_rules::loader::{load_catalog, ConfigLoader};
use ruledesk_rules::resolver::{AssetCatalog, ConfigResolver};
use ruledesk_rules::schema::{RulesConfig, Side};
use ruledesk_rules::validation::validate_config;

// ── CLI ─────────────────────────────────────────────────────────────

/// Resolve the effective asset types for one side of a rule.
#[derive(Parser, Debug)]
#[command(name = "rules-resolve", version, about)]
struct Cli {
    /// Asset catalog file (YAML or JSON). Defaults to `RULEDESK_CATALOG`.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Rules configuration file. Defaults to `RULEDESK_RULES_CONFIG`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side to resolve (`when` or `action`). Defaults to `RULEDESK_SIDE`.
    #[arg(long)]
    side: Option<Side>,

    /// Resolve both sides instead of one.
    #[arg(long, conflicts_with = "side")]
    both: bool,

    /// Validate the configuration against the catalog before resolving.
    #[arg(long)]
    validate: bool,

    /// Keep running and re-resolve whenever the configuration changes.
    #[arg(long)]
    watch: bool,
}

/// What to resolve on each pass.
#[derive(Debug, Clone, Copy)]
enum Target {
    One(Side),
    Both,
}

// ── output ──────────────────────────────────────────────────────────

fn infos_json(infos: &[Arc<AssetTypeInfo>]) -> Vec<&AssetTypeInfo> {
    infos.iter().map(Arc::as_ref).collect()
}

async fn print_resolved(
    resolver: &ConfigResolver,
    config: Option<&RulesConfig>,
    target: Target,
) -> anyhow::Result<()> {
    let controls = config.and_then(|c| c.controls.as_ref());
    let output = match target {
        Target::One(side) => {
            let infos = resolver.resolve(config, side).await?;
            serde_json::json!({
                "side": side,
                "controls": controls,
                "assetTypes": infos_json(&infos),
            })
        }
        Target::Both => {
            let sides = resolver.resolve_sides(config).await?;
            serde_json::json!({
                "controls": controls,
                "when": infos_json(&sides.when),
                "action": infos_json(&sides.action),
            })
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ruledesk_core::config::load_dotenv();
    let settings = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    settings.validate()?;
    settings.log_summary();

    let target = if cli.both {
        Target::Both
    } else {
        let side = match cli.side {
            Some(side) => side,
            None => settings
                .default_side
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("invalid RULEDESK_SIDE")?,
        };
        Target::One(side)
    };

    let catalog_path = cli.catalog.unwrap_or_else(|| settings.catalog_path.clone());
    let mut catalog = load_catalog(&catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;
    if let Some(names) = settings.runtime_types.clone() {
        info!(count = names.len(), "using runtime asset types from environment");
        catalog = catalog.with_runtime_types(names);
    }
    let catalog = Arc::new(catalog);
    let resolver = ConfigResolver::new(catalog.clone());

    let config_path = cli.config.unwrap_or_else(|| settings.rules_config_path.clone());
    let mut loader = ConfigLoader::new(config_path);
    let rules_config = if loader.path().exists() {
        Some(
            loader
                .load()
                .with_context(|| format!("failed to load rules config {}", loader.path().display()))?,
        )
    } else {
        warn!(path = %loader.path().display(), "rules config not found, resolving without restrictions");
        None
    };

    if cli.validate {
        if let Some(config) = &rules_config {
            let result = validate_config(config, catalog.asset_descriptors());
            for w in &result.warnings {
                warn!(path = %w.path, "{}", w.message);
            }
            for e in &result.errors {
                match &e.suggestion {
                    Some(hint) => error!(path = %e.path, hint = %hint, "{}", e.message),
                    None => error!(path = %e.path, "{}", e.message),
                }
            }
            if !result.valid {
                bail!("rules config has {} validation error(s)", result.errors.len());
            }
            info!(warnings = result.warnings.len(), "rules config is valid");
        }
    }

    print_resolved(&resolver, rules_config.as_ref(), target).await?;

    if !cli.watch {
        return Ok(());
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    loader.watch_with(move |_| {
        let _ = tx.send(());
    })?;

    loop {
        tokio::select! {
            Some(()) = rx.recv() => {
                let current = loader.current();
                if let Err(e) = print_resolved(&resolver, current.as_ref(), target).await {
                    error!(error = %e, "failed to resolve after config change");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("rules-resolve shutting down");
                break;
            }
        }
    }
    Ok(())
}
