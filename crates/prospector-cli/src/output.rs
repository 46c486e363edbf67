//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use prospector_domain::{JobStatus, LeadRow, SearchJob};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

const RULE_WIDTH: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format lead rows.
    pub fn format_rows(&self, rows: &[LeadRow]) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_rows_table(rows)),
            OutputFormat::Detail => Ok(self.format_rows_detail(rows)),
            other => match other.export_format() {
                Some(export) => Ok(export.render(rows)?),
                None => Ok(self.format_rows_table(rows)),
            },
        }
    }

    /// Format lead rows as a summary table.
    fn format_rows_table(&self, rows: &[LeadRow]) -> String {
        if rows.is_empty() {
            return self.colorize("結果がありません。", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "企業名", "従業員", "売上", "事業領域", "氏名", "役職"]);

        for (index, row) in rows.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                truncate(&row.company_name, 20),
                or_dash(&row.employees).to_string(),
                truncate(or_dash(&row.revenue), 15),
                truncate(or_dash(&row.business_domains), 25),
                row.keyman_name.clone(),
                truncate(&row.keyman_title, 15),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n\n合計: {} 件", table, rows.len())
    }

    /// Format lead rows grouped by company.
    fn format_rows_detail(&self, rows: &[LeadRow]) -> String {
        if rows.is_empty() {
            return self.colorize("結果がありません。", "yellow");
        }

        let rule = "─".repeat(RULE_WIDTH);
        let mut lines = Vec::new();
        let mut current: Option<&str> = None;
        let mut company_count = 0;

        for (index, row) in rows.iter().enumerate() {
            if current != Some(row.company_url.as_str()) {
                current = Some(row.company_url.as_str());
                company_count += 1;
                lines.push(String::new());
                lines.push(rule.clone());
                let heading = format!("■ 企業 {}: {}", company_count, row.company_name);
                lines.push(self.colorize(&heading, "cyan"));
                lines.push(rule.clone());
                lines.push(format!("  URL          : {}", row.company_url));
                lines.push(format!("  設立年       : {}", or_dash(&row.founded_year)));
                lines.push(format!("  売上         : {}", or_dash(&row.revenue)));
                lines.push(format!("  利益         : {}", or_dash(&row.profit)));
                lines.push(format!("  従業員規模   : {}", or_dash(&row.employees)));
                lines.push(format!("  事業領域     : {}", or_dash(&row.business_domains)));
                lines.push(format!("  注力ポイント : {}", or_dash(&row.focus_points)));
                lines.push(format!("  概要         : {}", truncate(&row.description, 150)));
                lines.push(String::new());
                lines.push("  【役員・責任者一覧】".to_string());
            }

            lines.push(format!("  {}. {} ({})", index + 1, row.keyman_name, row.keyman_title));
            lines.push(format!("     Facebook : {}", row.facebook_url));
            lines.push(format!("     X/Twitter: {}", row.x_url));
        }

        lines.push(String::new());
        lines.push("=".repeat(RULE_WIDTH));
        lines.push(format!("合計: {} 件の役員・責任者情報", rows.len()));
        lines.join("\n")
    }

    /// Format a list of jobs.
    pub fn format_history(&self, jobs: &[SearchJob]) -> Result<String> {
        if self.format == OutputFormat::Json {
            let entries: Vec<serde_json::Value> = jobs
                .iter()
                .map(|job| {
                    serde_json::json!({
                        "search_id": job.id,
                        "conditions": job.conditions,
                        "num_companies": job.requested_count,
                        "status": job.status,
                        "created_at": job.created_at,
                        "result_count": job.result_count(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&entries)?);
        }

        if jobs.is_empty() {
            return Ok(self.colorize("No saved searches.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "条件", "企業数", "状態", "件数", "作成日時"]);

        for job in jobs {
            builder.push_record([
                job.id.to_string(),
                job.conditions.clone(),
                job.requested_count.to_string(),
                self.status(job.status),
                job.result_count().to_string(),
                job.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format one job with its results.
    pub fn format_job(&self, job: &SearchJob) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(job)?);
        }
        let rows = job.results.as_deref().unwrap_or_default();
        if self.format.export_format().is_some() {
            return self.format_rows(rows);
        }

        let mut lines = vec![
            format!("Job {}: {}", job.id, self.status(job.status)),
            format!("条件: {}", job.conditions),
            format!("作成日時: {}", job.created_at.format("%Y-%m-%d %H:%M:%S")),
        ];
        if let Some(message) = &job.error_message {
            lines.push(self.error(message));
        }
        if job.status == JobStatus::Completed {
            lines.push(String::new());
            lines.push(self.format_rows(rows)?);
        }
        Ok(lines.join("\n"))
    }

    /// Format a job status, colored by state.
    pub fn status(&self, status: JobStatus) -> String {
        let color = match status {
            JobStatus::Pending => "yellow",
            JobStatus::Processing => "blue",
            JobStatus::Completed => "green",
            JobStatus::Failed => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
