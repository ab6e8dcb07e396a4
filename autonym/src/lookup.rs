//! Language-code lookups.
//!
//! The probe only needs one thing from a lookup: the autonym of whatever it
//! resolved the code to. [`IsoLookup`] answers that from the ISO 639 tables
//! bundled with `isolang`.

use crate::Error;
use isolang::Language;
use log::trace;
use unic_langid::LanguageIdentifier;

pub trait LanguageInfo {
    /// The name of the language in that language, or the looked-up code when
    /// nothing better is known.
    fn autonym(&self) -> String;
}

pub trait Lookup {
    type Info: LanguageInfo;

    fn lookup(&self, code: &str) -> Result<Self::Info, Error>;
}

/// Deprecated ISO 639-1 codes and their replacements. `sh` is Serbian written
/// in Latin script; ISO 639 has no separate entry for the script.
const DEPRECATED: &[(&str, &str)] =
    &[("in", "id"), ("iw", "he"), ("ji", "yi"), ("jw", "jv"), ("mo", "ro"), ("sh", "sr")];

fn replace_deprecated(subtag: &str) -> &str {
    DEPRECATED.iter().find(|(old, _)| *old == subtag).map_or(subtag, |&(_, new)| new)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsoLookup;

impl IsoLookup {
    pub fn new() -> Self {
        IsoLookup
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoLanguage {
    code: String,
    language: Option<Language>,
}

impl IsoLanguage {
    /// The resolved ISO 639 language, if the code named one.
    pub fn language(&self) -> Option<Language> {
        self.language
    }
}

impl LanguageInfo for IsoLanguage {
    fn autonym(&self) -> String {
        self.language
            .and_then(|language| language.to_autonym())
            .map_or_else(|| self.code.clone(), str::to_string)
    }
}

impl Lookup for IsoLookup {
    type Info = IsoLanguage;

    fn lookup(&self, code: &str) -> Result<IsoLanguage, Error> {
        let langid: LanguageIdentifier = code
            .parse()
            .map_err(|source| Error::InvalidTag { tag: code.to_string(), source })?;

        let subtag = replace_deprecated(langid.language.as_str());
        let language = match subtag.len() {
            2 => Language::from_639_1(subtag),
            3 => Language::from_639_3(subtag),
            _ => None,
        };
        trace!("{code} -> {subtag} -> {language:?}");

        Ok(IsoLanguage { code: code.to_string(), language })
    }
}
