//! Tab-separated text mirror.
//!
//! One header row, then one row per record, CRLF line endings:
//!
//! ```text
//! CofName  FramesPerDirection  AnimationSpeed  FrameData000 .. FrameData143
//! ```
//!
//! Columns are looked up by header name, so they may appear in any order and
//! unknown columns are ignored. Cells use excel-tab quoting: a cell containing
//! a quote, tab or line break is wrapped in `"` with embedded quotes doubled.
//!
//! A blank line is a row with no cells, so it fails as a missing cell and
//! still counts toward the row numbers reported in errors.

use std::collections::{BTreeMap, HashMap};

use animdata_types::{Record, RecordFields, FRAME_MAX};

use crate::error::{TextError, TextResult};

pub const COF_NAME_COLUMN: &str = "CofName";
pub const FRAMES_PER_DIRECTION_COLUMN: &str = "FramesPerDirection";
pub const ANIMATION_SPEED_COLUMN: &str = "AnimationSpeed";

const LINE_END: &str = "\r\n";

/// Header name for a frame's trigger code column.
pub fn frame_column(frame: usize) -> String {
    format!("FrameData{frame:03}")
}

/// Every header name in output order (147 columns).
pub fn header() -> Vec<String> {
    let mut columns = vec![
        COF_NAME_COLUMN.to_string(),
        FRAMES_PER_DIRECTION_COLUMN.to_string(),
        ANIMATION_SPEED_COLUMN.to_string(),
    ];
    columns.extend((0..FRAME_MAX).map(frame_column));
    columns
}

/// Write records as tab-separated text.
pub fn to_string(records: &[Record]) -> String {
    let mut out = String::new();
    push_row(&mut out, header());
    for record in records {
        let mut cells = Vec::with_capacity(3 + FRAME_MAX);
        cells.push(record.cof_name().to_string());
        cells.push(record.frames_per_direction().to_string());
        cells.push(record.animation_speed().to_string());
        cells.extend(record.triggers().to_codes().iter().map(u8::to_string));
        push_row(&mut out, cells);
    }
    out
}

fn push_row(out: &mut String, cells: Vec<String>) {
    let quoted: Vec<String> = cells.into_iter().map(quote_cell).collect();
    out.push_str(&quoted.join("\t"));
    out.push_str(LINE_END);
}

fn quote_cell(cell: String) -> String {
    if cell.contains(['"', '\t', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell
    }
}

/// Split one line into cells, undoing excel-tab quoting.
fn split_row(line: &str, line_number: usize) -> TextResult<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut at_cell_start = true;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }
        match c {
            '"' if at_cell_start => {
                in_quotes = true;
                at_cell_start = false;
            }
            '\t' => {
                cells.push(std::mem::take(&mut cell));
                at_cell_start = true;
            }
            _ => {
                cell.push(c);
                at_cell_start = false;
            }
        }
    }

    if in_quotes {
        return Err(TextError::UnterminatedQuote { line: line_number });
    }
    cells.push(cell);
    Ok(cells)
}

struct Columns {
    names: Vec<String>,
    cof_name: usize,
    frames_per_direction: usize,
    animation_speed: usize,
    frames: Vec<usize>,
}

impl Columns {
    fn from_header(names: Vec<String>) -> TextResult<Self> {
        let (cof_name, frames_per_direction, animation_speed, frames) = {
            let indices: HashMap<&str, usize> = names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.as_str(), i))
                .collect();
            let find = |column_name: &str| {
                indices
                    .get(column_name)
                    .copied()
                    .ok_or_else(|| TextError::MissingColumn {
                        column_name: column_name.to_string(),
                    })
            };
            (
                find(COF_NAME_COLUMN)?,
                find(FRAMES_PER_DIRECTION_COLUMN)?,
                find(ANIMATION_SPEED_COLUMN)?,
                (0..FRAME_MAX)
                    .map(|frame| find(&frame_column(frame)))
                    .collect::<TextResult<Vec<_>>>()?,
            )
        };

        Ok(Self {
            names,
            cof_name,
            frames_per_direction,
            animation_speed,
            frames,
        })
    }

    fn cell<'r>(&self, cells: &'r [String], row: usize, column: usize) -> TextResult<&'r str> {
        cells
            .get(column)
            .map(String::as_str)
            .ok_or_else(|| TextError::MissingCell {
                row,
                column,
                column_name: self.names[column].clone(),
            })
    }

    fn int_cell(&self, cells: &[String], row: usize, column: usize) -> TextResult<i128> {
        let value = self.cell(cells, row, column)?;
        value
            .trim()
            .parse()
            .map_err(|_| TextError::InvalidInteger {
                row,
                column,
                column_name: self.names[column].clone(),
                value: value.to_string(),
            })
    }

    fn record(&self, cells: &[String], row: usize) -> TextResult<Record> {
        let cof_name = self.cell(cells, row, self.cof_name)?.to_string();
        let frames_per_direction = self.int_cell(cells, row, self.frames_per_direction)?;
        let animation_speed = self.int_cell(cells, row, self.animation_speed)?;

        let mut triggers = BTreeMap::new();
        for (frame, &column) in self.frames.iter().enumerate() {
            let code = self.int_cell(cells, row, column)?;
            if code != 0 {
                triggers.insert(frame as i128, code);
            }
        }

        let fields = RecordFields {
            cof_name,
            frames_per_direction,
            animation_speed,
            triggers,
        };
        Record::try_from(fields).map_err(|source| TextError::InvalidRecord { row, source })
    }
}

/// Parse tab-separated text into records.
///
/// An empty input yields no records.
pub fn from_str(s: &str) -> TextResult<Vec<Record>> {
    let mut lines = s.lines().enumerate();

    let Some((header_line, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns = Columns::from_header(split_row(header, header_line)?)?;

    let mut records = Vec::new();
    for (row, (line_number, line)) in lines.enumerate() {
        let cells = split_row(line, line_number)?;
        records.push(columns.record(&cells, row)?);
    }
    Ok(records)
}
