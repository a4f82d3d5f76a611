use crate::catalog::SchemaCatalog;
use crate::error::RegistryError;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Serialization format of a catalog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFormat {
    #[default]
    Json,
    Yaml,
}

impl CatalogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(RegistryError::CatalogError(format!(
                "Unsupported catalog format: {}",
                other
            ))),
        }
    }
}

/// Parses a catalog from JSON or YAML text
pub fn parse_catalog(contents: &str) -> Result<SchemaCatalog, RegistryError> {
    if contents.trim_start().starts_with('{') {
        serde_json::from_str(contents).map_err(|e| {
            RegistryError::CatalogError(format!("Failed to parse JSON catalog: {}", e))
        })
    } else {
        serde_yaml::from_str(contents).map_err(|e| {
            RegistryError::CatalogError(format!("Failed to parse YAML catalog: {}", e))
        })
    }
}

/// Loads a catalog document from a JSON or YAML file
pub fn load_catalog(path: &Path) -> Result<SchemaCatalog, RegistryError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        RegistryError::CatalogError(format!("Failed to read catalog file: {}", e))
    })?;

    let catalog = parse_catalog(&contents)?;
    info!(path = %path.display(), schemas = catalog.len(), "loaded error schema catalog");
    Ok(catalog)
}

/// Writes a catalog document in the given format
pub fn write_catalog<W: Write>(
    catalog: &SchemaCatalog,
    mut writer: W,
    format: CatalogFormat,
) -> Result<(), RegistryError> {
    match format {
        CatalogFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, catalog).map_err(|e| {
                RegistryError::CatalogError(format!("Failed to write JSON catalog: {}", e))
            })?;
            writeln!(writer).map_err(|e| {
                RegistryError::CatalogError(format!("Failed to write JSON catalog: {}", e))
            })?;
        }
        CatalogFormat::Yaml => {
            serde_yaml::to_writer(&mut writer, catalog).map_err(|e| {
                RegistryError::CatalogError(format!("Failed to write YAML catalog: {}", e))
            })?;
        }
    }

    writer
        .flush()
        .map_err(|e| RegistryError::CatalogError(format!("Failed to flush catalog: {}", e)))?;
    info!(format = format.as_str(), schemas = catalog.len(), "wrote error schema catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!("YAML".parse::<CatalogFormat>().unwrap(), CatalogFormat::Yaml);
        assert_eq!("yml".parse::<CatalogFormat>().unwrap(), CatalogFormat::Yaml);
        assert_eq!("json".parse::<CatalogFormat>().unwrap(), CatalogFormat::Json);
        assert!("toml".parse::<CatalogFormat>().is_err());
    }

    #[test]
    fn malformed_documents_are_catalog_errors() {
        assert!(matches!(
            parse_catalog("{ not json"),
            Err(RegistryError::CatalogError(_))
        ));
        assert!(matches!(
            parse_catalog("errors/400: [1, 2"),
            Err(RegistryError::CatalogError(_))
        ));
    }
}
