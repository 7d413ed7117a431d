//! brewlog-catalog
//!
//! The static coffee-style pairing catalog. Pure data — no I/O, no state.
//! Defines, for each supported style, the pairing rationale and the
//! intensity-keyed sweet suggestion lists.

pub mod error;
pub mod styles;

use serde::Serialize;
use ts_rs::TS;

use brewlog_core::models::pairing::Intensity;

use error::CatalogError;

/// Trait implemented by each coffee style in the catalog.
pub trait CoffeeStyle: std::fmt::Debug + Send + Sync {
    /// Unique identifier for this style (e.g., "dark_roast", "espresso").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Black: Dark Roast").
    fn name(&self) -> &str;

    /// Why this style pairs the way it does.
    fn reason(&self) -> &str;

    /// Suggested sweets for one intensity preference, in serving order.
    /// Returned as-is: no shuffling, no deduplication.
    fn suggestions(&self, intensity: Intensity) -> &[&str];

    /// All suggestions regardless of intensity, light list first.
    ///
    /// Later data revisions dropped the intensity split; this is that flat
    /// shape, with no preference acting as a single implicit tag.
    fn flat_suggestions(&self) -> Vec<&str> {
        let mut all = self.suggestions(Intensity::Light).to_vec();
        all.extend_from_slice(self.suggestions(Intensity::Rich));
        all
    }

    /// Serializable snapshot for handing to the presentation layer.
    fn info(&self) -> StyleInfo {
        StyleInfo {
            id: self.id().to_string(),
            name: self.name().to_string(),
            reason: self.reason().to_string(),
            light: to_owned(self.suggestions(Intensity::Light)),
            rich: to_owned(self.suggestions(Intensity::Rich)),
        }
    }
}

fn to_owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Plain-data view of one catalog entry.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct StyleInfo {
    pub id: String,
    pub name: String,
    pub reason: String,
    pub light: Vec<String>,
    pub rich: Vec<String>,
}

/// Return all registered styles, in menu order.
pub fn all_styles() -> Vec<Box<dyn CoffeeStyle>> {
    vec![
        Box::new(styles::light_roast::LightRoast),
        Box::new(styles::medium_roast::MediumRoast),
        Box::new(styles::dark_roast::DarkRoast),
        Box::new(styles::latte::Latte),
        Box::new(styles::mocha::Mocha),
        Box::new(styles::espresso::Espresso),
    ]
}

/// Look up a style by ID.
///
/// The presentation layer only ever passes keys drawn from [`all_styles`],
/// so `UnknownStyle` is a defensive case rather than a user-facing flow.
pub fn lookup(id: &str) -> Result<Box<dyn CoffeeStyle>, CatalogError> {
    all_styles()
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| CatalogError::UnknownStyle(id.to_string()))
}
