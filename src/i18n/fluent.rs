// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.
//!
//! Locale resolution order: CLI flag, then the config file, then the OS
//! locale, then `en-US`. Lookups that miss in the current locale fall
//! back to the `en-US` bundle before reporting the key as missing.

use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    fallback_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                eprintln!("Skipping i18n asset with unparsable locale: {filename}");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource =
                FluentResource::try_new(source).expect("embedded FTL file failed to parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Keep interpolated values free of Unicode isolation marks;
            // the UI renders plain strings.
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .expect("embedded FTL file has duplicate messages");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let fallback_locale: LanguageIdentifier = FALLBACK_LOCALE.parse().unwrap();
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| fallback_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            fallback_locale,
        }
    }

    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    /// Looks up a message with no arguments.
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up a message with Fluent arguments.
    pub fn tr_with(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.fallback_locale] {
            if let Some(value) = self.format_in(locale, key, args) {
                return value;
            }
        }
        format!("MISSING: {}", key)
    }

    fn format_in(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];

    for candidate in candidates.into_iter().flatten() {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins_over_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let locale = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli_override() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
            ..Config::default()
        };
        let locale = resolve_locale(None, &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unavailable_language_is_ignored() {
        let config = Config::default();
        let locale = resolve_locale(Some("xx-XX".to_string()), &config, &available());
        // Falls through to the OS locale, which may or may not be
        // available; either way it must be one we actually ship.
        if let Some(locale) = locale {
            assert!(available().contains(&locale));
        }
    }

    #[test]
    fn embedded_bundles_resolve_known_keys() {
        let i18n = I18n::default();
        let title = i18n.tr("window-title");
        assert!(!title.starts_with("MISSING:"), "got: {title}");
    }

    #[test]
    fn missing_keys_are_flagged() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("no-such-key-anywhere"),
            "MISSING: no-such-key-anywhere"
        );
    }

    #[test]
    fn arguments_are_interpolated() {
        let i18n = I18n::default();
        let mut args = FluentArgs::new();
        args.set("count", 3);
        let line = i18n.tr_with("gallery-photo-count", &args);
        assert!(line.contains('3'), "got: {line}");
    }
}
