use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The catalog snapshot bundled with the binary.
/// Used whenever no override file is present in the data directory.
const EMBEDDED_CATALOG: &str = include_str!("../../data/goats.json");

/// Filename of the optional user-supplied catalog override.
const CATALOG_FILENAME: &str = "goats.json";

/// Sale status of a catalog entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoatStatus {
    Available,
    Sold,
}

impl GoatStatus {
    /// Label shown on status badges
    pub fn label(&self) -> &'static str {
        match self {
            GoatStatus::Available => "Available",
            GoatStatus::Sold => "Sold",
        }
    }
}

/// A single listed goat.
///
/// Field names on the wire match the original catalog JSON (`videoUrl`,
/// `dateListed`), so an exported data file drops in unchanged. All fields
/// except `id`, `videoUrl` and `status` are optional; missing values are
/// handled per-stage by the filter engine and hidden in the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goat {
    /// Unique listing identifier (e.g. "AB-104"), also the display label
    pub id: String,
    /// Playable video of the animal, opened externally
    pub video_url: String,
    /// Preview image path, if one was captured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub status: GoatStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Asking price in rupees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_listed: Option<NaiveDate>,
    /// Approximate live weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// The read-only catalog of listed goats.
///
/// An ordered, immutable snapshot loaded once at startup. The ordering of
/// the source file is the "unsorted" order every filter result is derived
/// from, so it is preserved as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    goats: Vec<Goat>,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let goats: Vec<Goat> = serde_json::from_str(json)?;
        Ok(Catalog { goats })
    }

    /// The catalog snapshot compiled into the binary.
    /// A parse failure here is a packaging defect, so it is fatal.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CATALOG)
            .expect("Bundled catalog data is invalid. Rebuild with a valid data/goats.json.")
    }

    /// Path of the optional catalog override in the user data directory
    pub fn override_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .expect("Could not determine user data directory");

        path.push("goat-gallery");
        path.push(CATALOG_FILENAME);
        path
    }

    pub fn is_empty(&self) -> bool {
        self.goats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.goats.len()
    }

    /// All entries, in catalog order
    pub fn goats(&self) -> &[Goat] {
        &self.goats
    }

    /// Look up one entry by its listing id.
    /// A miss is the Detail screen's "not found" state, not an error.
    pub fn find(&self, id: &str) -> Option<&Goat> {
        self.goats.iter().find(|g| g.id == id)
    }
}

/// Load the catalog at startup.
///
/// Runs on the async runtime so a large override file never blocks the first
/// frame. An absent or unparseable override falls back to the embedded
/// snapshot rather than failing: the app is always usable with its bundled
/// listings.
pub async fn load_catalog() -> Catalog {
    let path = Catalog::override_path();

    match tokio::fs::read_to_string(&path).await {
        Ok(json) => match Catalog::from_json(&json) {
            Ok(catalog) => {
                println!("📁 Loaded catalog override: {}", path.display());
                catalog
            }
            Err(e) => {
                eprintln!("⚠️  Ignoring malformed catalog at {}: {}", path.display(), e);
                Catalog::embedded()
            }
        },
        Err(_) => Catalog::embedded(),
    }
}
