//! Rendering of listings as text tables, CSV or JSON

use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;

use crate::board::BoardItem;
use crate::domain::Product;
use crate::format::{format_board_date, format_won};
use crate::schedule::EducationSchedule;

/// Widest a table cell may grow before it is cut
const MAX_CELL_WIDTH: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unknown format '{}' (expected table, json or csv)", other)),
        }
    }
}

/// A record that can be laid out as one table row
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Terminal columns taken by `c`; Hangul and other East Asian wide
/// characters take two
fn char_width(c: char) -> usize {
    let cp = c as u32;
    if c.is_control() {
        return 0;
    }
    let wide = matches!(
        cp,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1F64F
            | 0x1F900..=0x1F9FF
            | 0x20000..=0x3FFFD
    );
    if wide {
        2
    } else {
        1
    }
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Cut `s` to at most `max` columns, marking the cut with `...`
fn truncate_to_width(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Fixed-width text table
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let columns = self.headers.len();
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..columns)
                    .map(|i| {
                        row.get(i)
                            .map(|cell| truncate_to_width(cell.trim(), MAX_CELL_WIDTH))
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                cells
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(display_width(&self.headers[i])))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |row: &[String]| {
            row.iter()
                .zip(&widths)
                .map(|(cell, w)| pad(cell, *w))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut out = String::new();
        out.push_str(&line(&self.headers));
        out.push('\n');
        let total = widths.iter().sum::<usize>() + columns.saturating_sub(1) * 3;
        out.push_str(&"-".repeat(total));
        out.push('\n');
        for row in &cells {
            out.push_str(&line(row));
            out.push('\n');
        }
        out
    }
}

/// Render `items` in `format`
pub fn render<T: Tabular + Serialize>(items: &[T], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(T::headers())?;
            for item in items {
                writer.write_record(item.row())?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Table => {
            let mut table = Table::new(T::headers());
            for item in items {
                table.push_row(item.row());
            }
            Ok(table.render())
        }
    }
}

/// Render one record as `field | value` lines, CSV pairs or a JSON object
pub fn render_fields(fields: &[(&str, String)], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => {
            let object: serde_json::Map<String, serde_json::Value> = fields
                .iter()
                .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.clone())))
                .collect();
            Ok(serde_json::to_string_pretty(&object)?)
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["field", "value"])?;
            for (k, v) in fields {
                writer.write_record([*k, v.as_str()])?;
            }
            let bytes = writer.into_inner().map_err(|e| e.into_error())?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Table => {
            let width = fields.iter().map(|(k, _)| display_width(k)).max().unwrap_or(0);
            let mut out = String::new();
            for (k, v) in fields {
                out.push_str(&pad(k, width));
                out.push_str(" | ");
                out.push_str(v);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

impl Tabular for BoardItem {
    fn headers() -> Vec<&'static str> {
        vec!["번호", "제목", "요청자", "분류", "상태", "작성일"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.requester.clone(),
            self.category.clone(),
            self.status.clone().unwrap_or_else(|| "-".into()),
            format_board_date(&self.created_at, &Utc::now()),
        ]
    }
}

impl Tabular for Product {
    fn headers() -> Vec<&'static str> {
        vec!["번호", "상품명", "카테고리", "가격", "상태"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.category.label(),
            format_won(self.price_won()),
            self.status.label().to_string(),
        ]
    }
}

impl Tabular for EducationSchedule {
    fn headers() -> Vec<&'static str> {
        vec!["번호", "과정", "유형", "대상", "일정", "모집", "수강료"]
    }

    fn row(&self) -> Vec<String> {
        let quote = self.quote();
        let mut title = self.title.clone();
        if self.is_bestseller() {
            title.push_str(" [BEST]");
        }
        let seats = if self.is_full() {
            "마감".to_string()
        } else {
            format!("{}/{}", self.current_students, self.max_students)
        };
        let price = if quote.has_discount() {
            format!("{} ({}% 할인)", format_won(quote.discounted_price), quote.rate())
        } else {
            format_won(quote.discounted_price)
        };

        vec![
            self.id.to_string(),
            title,
            self.class_type.label().to_string(),
            self.target_grade.clone(),
            self.schedule.clone(),
            seats,
            price,
        ]
    }
}
