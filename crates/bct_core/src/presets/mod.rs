//! BAP presets and dropdown vocabularies.
//!
//! - [`PresetCatalog`]: compiled-in table of codec parameters per preset
//! - [`HeaderNames`]: preset/context/location names scraped from the
//!   firmware header for the dropdowns

mod catalog;
mod extract;

pub use catalog::{BapPreset, PresetCatalog};
pub use extract::{
    extract_name, extract_names, HeaderError, HeaderNames, MalformedLinePolicy, NameCategory,
};
