//! Rendering of lookup and listing results.

use std::io::Write;

use serde_json::json;

use crate::config::display::OutputFormat;
use crate::data_structures::prefix_index::Entry;
use crate::error::DictResult;

/// Writes found results in the configured format.
///
/// Only results go through here; prompts and status messages are always
/// plain text.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    /// Creates a renderer for the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Writes a single looked-up term and its description.
    pub fn lookup<W: Write>(&self, out: &mut W, term: &str, description: &str) -> DictResult<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out, "Slang word : {term}")?;
                writeln!(out, "Description : {description}")?;
            }
            OutputFormat::Json => {
                let value = json!({ "term": term, "description": description });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            }
        }
        Ok(())
    }

    /// Writes a listing of entries, one per line in text mode.
    pub fn entries<W: Write>(&self, out: &mut W, entries: &[Entry]) -> DictResult<()> {
        match self.format {
            OutputFormat::Text => {
                for entry in entries {
                    writeln!(out, "{entry}")?;
                }
            }
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_entries(format: OutputFormat, entries: &[Entry]) -> String {
        let mut out = Vec::new();
        Renderer::new(format).entries(&mut out, entries).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_entries() {
        let entries = [
            Entry::new("lmao", "laughing my ass off"),
            Entry::new("lol", "laugh out loud"),
        ];
        assert_eq!(
            render_entries(OutputFormat::Text, &entries),
            "lmao (laughing my ass off)\nlol (laugh out loud)\n"
        );
    }

    #[test]
    fn test_json_entries() {
        let entries = [Entry::new("lol", "laugh out loud")];
        let rendered = render_entries(OutputFormat::Json, &entries);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["term"], "lol");
        assert_eq!(parsed[0]["description"], "laugh out loud");
    }

    #[test]
    fn test_text_lookup() {
        let mut out = Vec::new();
        Renderer::new(OutputFormat::Text)
            .lookup(&mut out, "brb", "be right back")
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Slang word : brb\nDescription : be right back\n"
        );
    }
}
