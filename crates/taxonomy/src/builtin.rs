use crate::store::TaxonomyStoreError;
use crate::tree::Taxonomy;

/// The seven-core feelings wheel shipped with the crate.
/// 隨套件附帶的七大核心情緒輪。
pub const BUILTIN_FEELINGS_JSON: &str = include_str!("../assets/feelings.json");

/// Parses the bundled feelings wheel.
pub fn builtin_taxonomy() -> Result<Taxonomy, TaxonomyStoreError> {
    Taxonomy::from_json_str(BUILTIN_FEELINGS_JSON)
}
