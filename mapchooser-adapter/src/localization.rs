// Chat localization
//
// Renders Message keys through a flat JSON catalog of templates with
// positional `{0}`, `{1}` ... placeholders.

use mapchooser_traits::Message;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AdapterError;

/// Key of the line prefix prepended to chat output
pub const PREFIX_KEY: &str = "mapchooser.prefix";

const ENGLISH: &str = include_str!("../lang/en.json");

/// A loaded translation catalog.
#[derive(Clone, Debug, Default)]
pub struct Localizer {
    templates: HashMap<String, String>,
}

impl Localizer {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, AdapterError> {
        let templates = serde_json::from_str(json)
            .map_err(|e| AdapterError::json("localization catalog", e))?;
        Ok(Self { templates })
    }

    /// The built-in English catalog.
    pub fn english() -> Result<Self, AdapterError> {
        Self::from_json(ENGLISH)
    }

    /// Load `<dir>/<language>.json`, falling back to English for keys the
    /// file does not define.
    pub fn load<P: AsRef<Path>>(dir: P, language: &str) -> Result<Self, AdapterError> {
        let path = dir.as_ref().join(format!("{}.json", language));
        let content = fs::read_to_string(&path).map_err(|e| AdapterError::io(&path, e))?;
        let mut catalog = Self::english()?;
        catalog.templates.extend(Self::from_json(&content)?.templates);
        Ok(catalog)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Render `message` without the prefix. Unknown keys render as the key.
    pub fn render(&self, message: &Message) -> String {
        let key = message.key();
        let template = match self.templates.get(key) {
            Some(template) => template,
            None => {
                log::warn!("Missing translation for {}", key);
                return key.to_string();
            }
        };

        fill(template, &message.args())
    }

    /// Render `message` as a chat line, with the prefix.
    pub fn chat_line(&self, message: &Message) -> String {
        match self.templates.get(PREFIX_KEY) {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, self.render(message)),
            _ => self.render(message),
        }
    }
}

/// Replace every `{N}` in `template` with `args[N]` in a single pass, so text
/// coming from an argument is never substituted again. Tokens without a
/// matching argument are kept as written.
fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index = after[..close].parse::<usize>().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
