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

use prettytable::{Table, row};
use xclarity_shell::{CommandKind, CommandSchema, ShellError};

use crate::async_write;
use crate::cfg::cli_options::OutputFormat;
use crate::errors::CliResult;
use crate::render;

pub async fn list(
    catalog: &[CommandSchema],
    format: OutputFormat,
    output_file: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
) -> CliResult<()> {
    match format {
        OutputFormat::AsciiTable => {
            async_write!(output_file, "{}", commands_table(catalog))?;
        }
        _ => {
            let names: Vec<&str> = catalog.iter().map(|schema| schema.name).collect();
            render::write_serialized(output_file, format, &names).await?;
        }
    }
    Ok(())
}

pub async fn show(
    catalog: &[CommandSchema],
    command: &str,
    format: OutputFormat,
    output_file: &mut Pin<Box<dyn tokio::io::AsyncWrite>>,
) -> CliResult<()> {
    let schema = catalog
        .iter()
        .find(|schema| schema.name == command)
        .ok_or_else(|| ShellError::UnknownCommand(command.to_string()))?;
    match format {
        OutputFormat::AsciiTable => {
            async_write!(
                output_file,
                "{}: {}\n{}",
                schema.name,
                schema.about,
                params_table(schema)
            )?;
        }
        _ => render::write_serialized(output_file, format, schema).await?,
    }
    Ok(())
}

fn kind_label(schema: &CommandSchema) -> &'static str {
    match schema.kind {
        CommandKind::Validated => "validated",
        CommandKind::Session { .. } => "session",
    }
}

pub(crate) fn commands_table(schemas: &[CommandSchema]) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Command", "Kind", "About"]);
    for schema in schemas {
        table.add_row(row![schema.name, kind_label(schema), schema.about]);
    }
    table
}

pub(crate) fn params_table(schema: &CommandSchema) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Parameter",
        "Alias",
        "Required",
        "Exclusive",
        "Requires",
        "Help"
    ]);
    for param in schema.params {
        let requires = schema
            .requirements(param.name)
            .map(|names| names.join(", "))
            .unwrap_or_default();
        table.add_row(row![
            param.name,
            param.short.unwrap_or_default(),
            if param.optional { "no" } else { "yes" },
            if schema.is_exclusive(param.name) { "yes" } else { "" },
            requires,
            param.help
        ]);
    }
    table
}
