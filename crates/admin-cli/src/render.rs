/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::pin::Pin;

use prettytable::{Cell, Row, Table};
use serde::Serialize;
use serde_json::Value;
use xclarity_shell::Reply;

use crate::cfg::cli_options::OutputFormat;
use crate::errors::CliResult;
use crate::{async_write, async_writeln};

pub async fn write_reply(
    output_file: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
    reply: &Reply,
) -> CliResult<()> {
    match reply {
        Reply::Empty => {}
        Reply::Connection(connection) => match format {
            OutputFormat::AsciiTable => {
                async_writeln!(output_file, "Connected to {connection}")?;
            }
            _ => write_serialized(output_file, format, connection).await?,
        },
        Reply::Data(data) => match format {
            OutputFormat::AsciiTable => {
                async_write!(output_file, "{}", value_table(data))?;
            }
            _ => write_serialized(output_file, format, data).await?,
        },
    }
    Ok(())
}

/// Writes `value` as JSON or YAML. Ascii tables are built by the caller.
pub async fn write_serialized<T: Serialize>(
    output_file: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
    format: OutputFormat,
    value: &T,
) -> CliResult<()> {
    match format {
        OutputFormat::Yaml => {
            async_write!(output_file, "{}", serde_yaml::to_string(value)?)?;
        }
        OutputFormat::Json | OutputFormat::AsciiTable => {
            async_writeln!(output_file, "{}", serde_json::to_string_pretty(value)?)?;
        }
    }
    Ok(())
}

// value_table lays out a reply: objects as key/value rows, lists of
// objects with one column per key, anything else as a single cell.
pub fn value_table(value: &Value) -> Table {
    let mut table = Table::new();
    match value {
        Value::Object(map) => {
            table.set_titles(Row::new(vec![Cell::new("Key"), Cell::new("Value")]));
            for (key, value) in map {
                table.add_row(Row::new(vec![Cell::new(key), Cell::new(&cell_text(value))]));
            }
        }
        Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
            let mut columns: Vec<&str> = Vec::new();
            for item in items.iter().filter_map(Value::as_object) {
                for key in item.keys() {
                    if !columns.contains(&key.as_str()) {
                        columns.push(key);
                    }
                }
            }
            table.set_titles(Row::new(columns.iter().map(|c| Cell::new(c)).collect()));
            for item in items {
                table.add_row(Row::new(
                    columns
                        .iter()
                        .map(|c| Cell::new(&item.get(*c).map(cell_text).unwrap_or_default()))
                        .collect(),
                ));
            }
        }
        Value::Array(items) => {
            for item in items {
                table.add_row(Row::new(vec![Cell::new(&cell_text(item))]));
            }
        }
        scalar => {
            table.add_row(Row::new(vec![Cell::new(&cell_text(scalar))]));
        }
    }
    table
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
