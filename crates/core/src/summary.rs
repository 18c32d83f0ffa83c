// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job summary document builder
//!
//! A [`Summary`] accumulates raw HTML fragments in call order and flushes
//! them to the runner's summary file. Every builder call except
//! [`Summary::add_raw`] ends its fragment with a newline. Nothing is
//! escaped and nesting is not checked; balancing [`Summary::start_table`]
//! with [`Summary::end_table`] is up to the caller.

use crate::channel::ChannelConfig;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("unable to find environment variable for the job summary: {variable} is not set")]
    MissingSummaryTarget { variable: String },
    #[error("unable to write job summary file {}: {source}", path.display())]
    SummaryFileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("image source must not be empty")]
    EmptyImageSource,
}

/// One cell of a table built with [`Summary::add_table`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableCell {
    pub data: String,
    pub header: bool,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
}

impl TableCell {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    pub fn header(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            header: true,
            ..Self::default()
        }
    }

    pub fn colspan(mut self, n: u32) -> Self {
        self.colspan = Some(n);
        self
    }

    pub fn rowspan(mut self, n: u32) -> Self {
        self.rowspan = Some(n);
        self
    }

    fn render(&self) -> String {
        let tag = if self.header { "th" } else { "td" };
        let colspan = self.colspan.map(|n| n.to_string());
        let rowspan = self.rowspan.map(|n| n.to_string());
        let mut attrs = Vec::new();
        if let Some(n) = &colspan {
            attrs.push(("colspan", n.as_str()));
        }
        if let Some(n) = &rowspan {
            attrs.push(("rowspan", n.as_str()));
        }
        wrap(tag, &self.data, &attrs)
    }
}

impl From<&str> for TableCell {
    fn from(data: &str) -> Self {
        TableCell::new(data)
    }
}

impl From<String> for TableCell {
    fn from(data: String) -> Self {
        TableCell::new(data)
    }
}

/// Optional attributes of an image
#[derive(Debug, Clone, Default)]
pub struct ImageOptions {
    pub alt: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

/// In-memory job summary buffer bound to an optional output file
#[derive(Debug, Clone)]
pub struct Summary {
    buffer: String,
    target: Option<PathBuf>,
    variable: String,
}

impl Summary {
    /// A buffer whose target comes from the resolved channel configuration
    pub fn from_config(config: &ChannelConfig) -> Self {
        Self {
            buffer: String::new(),
            target: config.summary_path().map(Path::to_path_buf),
            variable: config.summary_variable(),
        }
    }

    /// A buffer writing to `path`
    pub fn with_target(path: impl Into<PathBuf>) -> Self {
        Self {
            target: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// Append text as-is, plus a newline if `eol`
    pub fn add_raw(&mut self, text: &str, eol: bool) -> &mut Self {
        self.buffer.push_str(text);
        if eol {
            self.buffer.push('\n');
        }
        self
    }

    pub fn add_eol(&mut self) -> &mut Self {
        self.add_raw("\n", false)
    }

    pub fn add_code_block(&mut self, code: &str, lang: Option<&str>) -> &mut Self {
        let attrs: Vec<(&str, &str)> = lang.map(|l| vec![("lang", l)]).unwrap_or_default();
        let element = wrap("pre", &wrap("code", code, &attrs), &[]);
        self.add_raw(&element, true)
    }

    pub fn add_list<S: AsRef<str>>(&mut self, items: &[S], ordered: bool) -> &mut Self {
        let tag = if ordered { "ol" } else { "ul" };
        let list_items: String = items
            .iter()
            .map(|item| wrap("li", item.as_ref(), &[]))
            .collect();
        self.add_raw(&wrap(tag, &list_items, &[]), true)
    }

    /// Open a table; headers, when given, become a `<thead>` row
    pub fn start_table<S: AsRef<str>>(&mut self, headers: &[S]) -> &mut Self {
        let mut element = String::from("<table>");
        if !headers.is_empty() {
            let cells: String = headers
                .iter()
                .map(|h| wrap("th", h.as_ref(), &[]))
                .collect();
            element.push_str(&wrap("thead", &wrap("tr", &cells, &[]), &[]));
        }
        element.push_str("<tbody>");
        self.add_raw(&element, true)
    }

    pub fn add_table_row<S: AsRef<str>>(&mut self, cells: &[S]) -> &mut Self {
        let cells: String = cells
            .iter()
            .map(|c| wrap("td", c.as_ref(), &[]))
            .collect();
        self.add_raw(&wrap("tr", &cells, &[]), true)
    }

    pub fn end_table(&mut self) -> &mut Self {
        self.add_raw("</tbody></table>", true)
    }

    /// Render a whole table at once from rows of cells
    pub fn add_table(&mut self, rows: &[Vec<TableCell>]) -> &mut Self {
        let body: String = rows
            .iter()
            .map(|row| {
                let cells: String = row.iter().map(TableCell::render).collect();
                wrap("tr", &cells, &[])
            })
            .collect();
        self.add_raw(&wrap("table", &body, &[]), true)
    }

    pub fn add_details(&mut self, label: &str, content: &str) -> &mut Self {
        let element = wrap(
            "details",
            &format!("{}{}", wrap("summary", label, &[]), content),
            &[],
        );
        self.add_raw(&element, true)
    }

    /// Add an `<img>`; fails if `src` is empty
    pub fn add_image(
        &mut self,
        src: &str,
        options: &ImageOptions,
    ) -> Result<&mut Self, SummaryError> {
        if src.is_empty() {
            return Err(SummaryError::EmptyImageSource);
        }
        let mut attrs = vec![("src", src)];
        if let Some(alt) = &options.alt {
            attrs.push(("alt", alt.as_str()));
        }
        if let Some(width) = &options.width {
            attrs.push(("width", width.as_str()));
        }
        if let Some(height) = &options.height {
            attrs.push(("height", height.as_str()));
        }
        Ok(self.add_raw(&void("img", &attrs), true))
    }

    /// Add `<hN>`; `level` is clamped into 1..=6
    pub fn add_heading(&mut self, text: &str, level: i32) -> &mut Self {
        let tag = format!("h{}", level.clamp(1, 6));
        self.add_raw(&wrap(&tag, text, &[]), true)
    }

    pub fn add_separator(&mut self) -> &mut Self {
        self.add_raw(&void("hr", &[]), true)
    }

    pub fn add_break(&mut self) -> &mut Self {
        self.add_raw(&void("br", &[]), true)
    }

    pub fn add_quote(&mut self, text: &str, cite: Option<&str>) -> &mut Self {
        let attrs: Vec<(&str, &str)> = cite.map(|c| vec![("cite", c)]).unwrap_or_default();
        self.add_raw(&wrap("blockquote", text, &attrs), true)
    }

    pub fn add_link(&mut self, text: &str, href: &str) -> &mut Self {
        self.add_raw(&wrap("a", text, &[("href", href)]), true)
    }

    /// Current buffer content
    pub fn stringify(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty_buffer(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop the buffer without touching the file
    pub fn empty_buffer(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    /// Flush the buffer to the summary file, replacing its content when
    /// `overwrite` is set and appending otherwise.
    ///
    /// The buffer is cleared only on success.
    pub fn write(&mut self, overwrite: bool) -> Result<&mut Self, SummaryError> {
        let path = self
            .target
            .as_deref()
            .ok_or_else(|| SummaryError::MissingSummaryTarget {
                variable: self.variable.clone(),
            })?;

        let result = OpenOptions::new()
            .write(true)
            .append(!overwrite)
            .truncate(overwrite)
            .open(path)
            .and_then(|mut file| file.write_all(self.buffer.as_bytes()));

        if let Err(source) = result {
            tracing::error!(path = %path.display(), error = %source, "summary write failed");
            return Err(SummaryError::SummaryFileUnwritable {
                path: path.to_path_buf(),
                source,
            });
        }

        tracing::debug!(
            path = %path.display(),
            bytes = self.buffer.len(),
            overwrite,
            "summary written"
        );
        Ok(self.empty_buffer())
    }

    /// Empty the buffer and truncate the summary file
    pub fn clear(&mut self) -> Result<&mut Self, SummaryError> {
        self.empty_buffer().write(true)
    }
}

impl Default for Summary {
    fn default() -> Self {
        Self::from_config(&ChannelConfig::default())
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.buffer)
    }
}

fn open_tag(tag: &str, attrs: &[(&str, &str)]) -> String {
    let attrs: String = attrs
        .iter()
        .map(|(k, v)| format!(" {}=\"{}\"", k, v))
        .collect();
    format!("<{}{}>", tag, attrs)
}

fn wrap(tag: &str, content: &str, attrs: &[(&str, &str)]) -> String {
    format!("{}{}</{}>", open_tag(tag, attrs), content, tag)
}

fn void(tag: &str, attrs: &[(&str, &str)]) -> String {
    open_tag(tag, attrs)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
