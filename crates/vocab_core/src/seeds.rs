//! Default language catalog, inserted once into an empty store.

use crate::ports::{LanguageStore, Result};
use crate::types::NewLanguage;

pub const DEFAULT_LANGUAGES: &[(&str, &str)] = &[
    ("English", "🇬🇧"),
    ("Spanish", "🇪🇸"),
    ("French", "🇫🇷"),
    ("German", "🇩🇪"),
    ("Chinese", "🇨🇳"),
    ("Japanese", "🇯🇵"),
    ("Russian", "🇷🇺"),
    ("Portuguese", "🇵🇹"),
    ("Italian", "🇮🇹"),
];

pub fn default_languages() -> Vec<NewLanguage> {
    DEFAULT_LANGUAGES
        .iter()
        .map(|(name, flag)| NewLanguage {
            name: (*name).to_owned(),
            flag: (*flag).to_owned(),
        })
        .collect()
}

/// Insert the default catalog if the store holds no languages.
/// Returns the number of rows inserted (0 when already seeded).
pub async fn seed_default_languages(store: &dyn LanguageStore) -> Result<usize> {
    if store.count_languages().await? > 0 {
        tracing::debug!("Language catalog already present, skipping seed");
        return Ok(0);
    }
    let catalog = default_languages();
    store.insert_languages(&catalog).await?;
    tracing::info!("Seeded {} default languages", catalog.len());
    Ok(catalog.len())
}
