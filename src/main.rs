use anyhow::{bail, Context, Result};
use error_schema_registry::{
    build_catalog, detect_drift, load_catalog, registry, write_catalog, Config,
    ErrorSchemaRegistry,
};
use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn export(config: &Config, registry: &ErrorSchemaRegistry) -> Result<()> {
    let catalog = build_catalog(registry);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_catalog(&catalog, BufWriter::new(file), config.format)?;
            info!(path = %path.display(), "catalog exported");
        }
        None => write_catalog(&catalog, stdout().lock(), config.format)?,
    }

    Ok(())
}

fn check(path: &Path, registry: &ErrorSchemaRegistry) -> Result<()> {
    let documented = load_catalog(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

    let drifts = detect_drift(&documented, registry);
    if !drifts.is_empty() {
        bail!("{} drift(s) found in {}", drifts.len(), path.display());
    }

    info!(path = %path.display(), "catalog matches the registry");
    Ok(())
}

fn main() -> Result<()> {
    // Logs go to stderr so the exported catalog can be piped
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration from environment")?;
    let registry = registry();
    info!(schemas = registry.len(), "error schema registry ready");

    match &config.check {
        Some(path) => check(path, registry),
        None => export(&config, registry),
    }
}
