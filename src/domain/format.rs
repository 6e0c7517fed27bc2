use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use super::AppError;

/// Output convention used for the definitions file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// `\newcommand`-style definitions in a `.tex` file.
    #[default]
    Latex,
    /// Definitions in a `.md` file.
    Markdown,
}

impl OutputFormat {
    /// All supported formats.
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Latex, OutputFormat::Markdown];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "latex",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// File extension for the definitions file, without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Latex => "tex",
            OutputFormat::Markdown => "md",
        }
    }

    /// Length in bytes of the longest definitions file extension.
    pub const fn longest_extension_len() -> usize {
        let mut longest = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            let len = Self::ALL[i].extension().len();
            if len > longest {
                longest = len;
            }
            i += 1;
        }
        longest
    }

    /// Render `text` as a single-line comment in this format.
    ///
    /// Control characters become spaces. In Markdown, `--` is broken up so
    /// the text cannot terminate the comment.
    pub fn comment(&self, text: &str) -> String {
        let line: String = text.chars().map(|c| if c.is_control() { ' ' } else { c }).collect();
        match self {
            OutputFormat::Latex => format!("% {}\n", line),
            OutputFormat::Markdown => {
                let mut line = line;
                while line.contains("--") {
                    line = line.replace("--", "- -");
                }
                format!("<!-- {} -->\n", line)
            }
        }
    }

    /// Parse a format from its name or extension.
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.trim().to_lowercase().as_str() {
            "latex" | "tex" => Some(OutputFormat::Latex),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::from_name(s).ok_or_else(|| AppError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for OutputFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
