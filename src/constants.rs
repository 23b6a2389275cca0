// ABOUTME: Application constants organized by domain
// ABOUTME: Storage keys, fallback targets, energy densities and environment variable names

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a flat list.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name reported by the logging layer
    pub const KALORICKE_AI: &str = "kaloricke-ai";
}

/// Key layout of the key-value store
pub mod storage_keys {
    /// Singleton profile key
    pub const PROFILE: &str = "profile";
    /// Prefix of per-day ledger keys (`items_YYYY-MM-DD`)
    pub const ITEMS_PREFIX: &str = "items_";
    /// Date format used in ledger keys and weight records
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
    /// File extension used by the file-backed store
    pub const FILE_EXTENSION: &str = "json";
}

/// Energy density of macronutrients in kcal per gram
pub mod energy {
    /// Protein kcal per gram
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
    /// Carbohydrate kcal per gram
    pub const KCAL_PER_G_CARBS: f64 = 4.0;
    /// Fat kcal per gram
    pub const KCAL_PER_G_FAT: f64 = 9.0;
}

/// Targets used when no profile has been configured yet
pub mod fallback_targets {
    /// Daily calories (kcal)
    pub const CALORIES: f64 = 2000.0;
    /// Daily protein (g)
    pub const PROTEIN_G: f64 = 150.0;
    /// Daily carbohydrates (g)
    pub const CARBS_G: f64 = 200.0;
    /// Daily fat (g)
    pub const FAT_G: f64 = 70.0;
    /// Daily fiber (g)
    pub const FIBER_G: f64 = 30.0;
    /// Daily sugar maximum (g)
    pub const SUGAR_G: f64 = 50.0;
    /// Daily saturated fat maximum (g)
    pub const SATURATED_FAT_G: f64 = 20.0;
}

/// Defaults applied to user-facing entries
pub mod entry_defaults {
    /// Name used when a confirmed entry has an empty name
    pub const UNKNOWN_FOOD_NAME: &str = "Unknown food";
    /// Quantity used for manual entries and accepted suggestions
    pub const ONE_PORTION: &str = "1 portion";
    /// Number of meal suggestions requested from the assistant
    pub const SUGGESTION_COUNT: usize = 3;
}

/// Environment variable names
pub mod env_vars {
    /// Directory holding the file-backed store
    pub const DATA_DIR: &str = "KALORICKE_DATA_DIR";
    /// Storage backend selector (`file` or `memory`)
    pub const STORAGE: &str = "KALORICKE_STORAGE";
    /// Language the assistant should use for food names
    pub const ASSISTANT_LANGUAGE: &str = "KALORICKE_ASSISTANT_LANGUAGE";
    /// Gemini API key
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini model override
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
}
