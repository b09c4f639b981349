// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::domain::error::{CollectionError, PlayerInitError};
use crate::error::Error;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Loads every embedded `.ftl` file and picks the locale.
    ///
    /// Resolution: `lang` argument, then `config.general.language`, then the
    /// OS locale, then `en-US`. Unparseable files are skipped with a warning.
    pub fn new(lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|s| s.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    log::warn!("Skipping {}: {} parse errors", filename, errors.len());
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("Skipping {}: {} duplicate messages", filename, errors.len());
                continue;
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let current_locale = resolve_locale(lang, config, &available_locales)
            .unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.format(key, Some(args))
    }

    /// Returns the user-facing message for an error, in the current locale.
    #[must_use]
    pub fn describe(&self, error: &Error) -> String {
        let mut args = FluentArgs::new();
        match error {
            Error::InvalidCollection(CollectionError::DuplicateId(id))
            | Error::InvalidCollection(CollectionError::EmptySource(id)) => {
                args.set("id", id.value());
            }
            Error::InvalidCollection(CollectionError::Empty) | Error::ServiceStopped => {}
            Error::InvalidSelection { index, len } => {
                args.set("index", *index);
                args.set("count", *len);
            }
            Error::PlayerInit(PlayerInitError::SurfaceNotReady) => {}
            Error::PlayerInit(PlayerInitError::UnsupportedSource(source)) => {
                args.set("source", source.clone());
            }
            Error::PlayerInit(PlayerInitError::Backend(details))
            | Error::Config(details)
            | Error::Io(details) => {
                args.set("details", details.clone());
            }
            Error::Dispose(err) => {
                args.set("details", err.message().to_string());
            }
        }
        self.tr_with_args(error.i18n_key(), &args)
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn parse_available(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    raw.parse::<LanguageIdentifier>()
        .ok()
        .filter(|lang| available.contains(lang))
}

fn resolve_locale(
    lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    lang.as_deref()
        .and_then(|raw| parse_available(raw, available))
        .or_else(|| {
            config
                .general
                .language
                .as_deref()
                .and_then(|raw| parse_available(raw, available))
        })
        .or_else(|| sys_locale::get_locale().and_then(|raw| parse_available(&raw, available)))
        .or_else(|| parse_available(DEFAULT_LOCALE, available))
}
