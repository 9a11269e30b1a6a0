/// The fixed catalog of 50 filter descriptors
///
/// Descriptors use the CSS `filter` shorthand syntax and are interpreted by
/// the compositor. The catalog never changes at runtime, so it is built once
/// and shared for the lifetime of the process.

use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// Number of entries in the catalog
pub const CATALOG_SIZE: usize = 50;

/// Entries per parameter sweep (brightness, contrast, saturation, hue)
const SWEEP_STEPS: usize = 10;

/// Fixed composite and special effects, in display order
const SPECIAL_EFFECTS: [&str; 10] = [
    "grayscale(100%)",
    "sepia(100%)",
    "invert(100%)",
    "blur(2px)",
    "opacity(0.7)",
    "brightness(1.2) contrast(0.8)",
    "hue-rotate(90deg) saturate(1.5)",
    "sepia(50%) brightness(1.1) contrast(1.1)",
    "grayscale(50%) contrast(1.2) saturate(0.8)",
    // Black & white with adjusted brightness/contrast
    "saturate(0) brightness(0.8) contrast(1.5)",
];

/// A single textual filter description, e.g. `sepia(50%) brightness(1.1)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterDescriptor(String);

impl FilterDescriptor {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The ordered set of exactly [`CATALOG_SIZE`] descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCatalog {
    entries: Vec<FilterDescriptor>,
}

impl Deref for FilterCatalog {
    type Target = [FilterDescriptor];

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

/// Build the catalog from scratch
///
/// Four sweeps of ten (brightness, contrast, saturation, hue rotation)
/// followed by ten fixed effects.
pub fn generate() -> FilterCatalog {
    let mut entries = Vec::with_capacity(CATALOG_SIZE);

    // 50% to 140%
    for i in 0..SWEEP_STEPS {
        let value = 0.5 + i as f64 * 0.1;
        entries.push(FilterDescriptor(format!("brightness({:.2})", value)));
    }

    for i in 0..SWEEP_STEPS {
        let value = 0.5 + i as f64 * 0.1;
        entries.push(FilterDescriptor(format!("contrast({:.2})", value)));
    }

    // 20% upwards in 18% steps (ends at 182%)
    for i in 0..SWEEP_STEPS {
        let value = 0.2 + i as f64 * 0.18;
        entries.push(FilterDescriptor(format!("saturate({:.2})", value)));
    }

    // 0 to 324 degrees in 36 degree steps
    for i in 0..SWEEP_STEPS {
        entries.push(FilterDescriptor(format!("hue-rotate({}deg)", i * 36)));
    }

    entries.extend(SPECIAL_EFFECTS.iter().map(|s| FilterDescriptor::new(*s)));

    entries.truncate(CATALOG_SIZE);
    debug_assert_eq!(entries.len(), CATALOG_SIZE);

    FilterCatalog { entries }
}

/// The process-wide catalog, generated on first use
pub fn shared() -> &'static FilterCatalog {
    static CATALOG: OnceLock<FilterCatalog> = OnceLock::new();
    CATALOG.get_or_init(generate)
}
