//! Rendering lead rows into export formats

use crate::PipelineError;
use prospector_domain::{JobId, LeadRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MARKDOWN_HEADERS: [&str; 10] = [
    "企業名",
    "設立年",
    "売上",
    "従業員",
    "事業領域",
    "注力ポイント",
    "氏名",
    "役職",
    "Facebook",
    "X/Twitter",
];

const FOCUS_PREVIEW_CHARS: usize = 30;

/// File formats a result set can be exported as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma separated, RFC 4180 quoting
    Csv,
    /// Tab separated, for pasting into spreadsheets
    Tsv,
    /// Pretty-printed array of row objects
    Json,
    /// Markdown table with a reduced column set
    Markdown,
}

impl ExportFormat {
    /// Every format, in display order
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Tsv,
        ExportFormat::Json,
        ExportFormat::Markdown,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "markdown",
        }
    }

    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            other => other.as_str(),
        }
    }

    /// MIME type for HTTP responses
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Tsv => "text/tab-separated-values; charset=utf-8",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
        }
    }

    /// Attachment name for a job's export
    pub fn file_name(&self, id: JobId) -> String {
        format!("sales_leads_{}.{}", id, self.extension())
    }

    /// Render rows in this format
    ///
    /// CSV and TSV always carry the header line, even with no rows.
    pub fn render(&self, rows: &[LeadRow]) -> Result<String, PipelineError> {
        match self {
            ExportFormat::Csv => Ok(to_csv(rows)),
            ExportFormat::Tsv => Ok(to_tsv(rows)),
            ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            ExportFormat::Markdown => Ok(to_markdown(rows)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            other => Err(format!("Unsupported format: {}", other)),
        }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_line<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    values.into_iter().map(csv_field).collect::<Vec<_>>().join(",")
}

fn to_csv(rows: &[LeadRow]) -> String {
    let mut out = csv_line(LeadRow::HEADERS);
    out.push_str("\r\n");
    for row in rows {
        out.push_str(&csv_line(row.values()));
        out.push_str("\r\n");
    }
    out
}

fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}

fn to_tsv(rows: &[LeadRow]) -> String {
    let mut lines = vec![LeadRow::HEADERS.join("\t")];
    lines.extend(rows.iter().map(|row| row.values().map(tsv_field).join("\t")));
    lines.join("\n")
}

fn md_cell(value: &str) -> String {
    if value.is_empty() {
        return "-".to_string();
    }
    value.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn focus_preview(focus: &str) -> String {
    if focus.chars().count() > FOCUS_PREVIEW_CHARS {
        let head: String = focus.chars().take(FOCUS_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        focus.to_string()
    }
}

fn to_markdown(rows: &[LeadRow]) -> String {
    let mut lines = vec![
        format!("| {} |", MARKDOWN_HEADERS.join(" | ")),
        format!("|{}", "---|".repeat(MARKDOWN_HEADERS.len())),
    ];
    for row in rows {
        let focus = focus_preview(&row.focus_points);
        let cells: [&str; 10] = [
            &row.company_name,
            &row.founded_year,
            &row.revenue,
            &row.employees,
            &row.business_domains,
            &focus,
            &row.keyman_name,
            &row.keyman_title,
            &row.facebook_url,
            &row.x_url,
        ];
        let cells: Vec<String> = cells.iter().map(|c| md_cell(c)).collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }
    lines.join("\n")
}
