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

// The intent of the tests.rs file is to test the integrity of the
// command, including things like basic structure parsing, enum
// translations, and any external input validators that are
// configured. Specific "categories" are:
//
// Command Structure - Baseline debug_assert() of the entire command.
// Argument Parsing  - Ensure required/optional arg combinations parse correctly.
// Rendering         - Ensure tables reflect the command catalog.
// Execution         - Run describe against the shell's catalog.

use clap::{CommandFactory, Parser};
use xclarity_shell::catalog;

use super::args::*;
use super::cmds;
use crate::cfg::cli_options::OutputFormat;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::CliError;

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing

// parse_no_args ensures describe lists everything by default.
#[test]
fn parse_no_args() {
    let opts = Opts::try_parse_from(["describe"]).expect("should parse with no args");
    assert!(opts.command.is_none());
}

// parse_command ensures a single command can be named.
#[test]
fn parse_command() {
    let opts = Opts::try_parse_from(["describe", "manage"]).expect("should parse command");
    assert_eq!(opts.command.as_deref(), Some("manage"));
}

/////////////////////////////////////////////////////////////////////////////
// Rendering

// commands_table_lists_catalog ensures one row per command.
#[test]
fn commands_table_lists_catalog() {
    let table = cmds::commands_table(catalog::all());
    assert_eq!(table.len(), catalog::all().len());
}

// params_table_shows_rules ensures alias, exclusivity and
// dependency columns are filled in.
#[test]
fn params_table_shows_rules() {
    let schema = catalog::find("manage").expect("manage is in the catalog");
    let table = cmds::params_table(schema);
    assert_eq!(table.len(), schema.params.len());

    let text = table.to_string();
    assert!(text.contains("user, pw"));
    assert!(text.contains("rpw"));
}

/////////////////////////////////////////////////////////////////////////////
// Execution

fn context(format: OutputFormat, output: &std::path::Path) -> RuntimeContext {
    let file = std::fs::File::create(output).expect("should create output file");
    RuntimeContext::new(
        RuntimeConfig {
            format,
            connection: None,
        },
        Box::pin(tokio::fs::File::from_std(file)),
    )
}

// describe_lists_shell_catalog ensures the JSON listing names every
// command the shell accepts.
#[tokio::test]
async fn describe_lists_shell_catalog() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let output = dir.path().join("out.json");
    let ctx = context(OutputFormat::Json, &output);

    Opts { command: None }
        .dispatch(ctx)
        .await
        .expect("describe should succeed");

    let written = std::fs::read_to_string(&output).expect("should read output");
    let names: Vec<String> = serde_json::from_str(&written).expect("output is json");
    assert_eq!(names.len(), catalog::all().len());
    assert!(names.iter().any(|name| name == "configprofiles"));
}

// describe_shows_one_command ensures a named command renders its
// parameter table.
#[tokio::test]
async fn describe_shows_one_command() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let output = dir.path().join("out.txt");
    let ctx = context(OutputFormat::AsciiTable, &output);

    Opts {
        command: Some("manage".to_string()),
    }
    .dispatch(ctx)
    .await
    .expect("describe should succeed");

    let written = std::fs::read_to_string(&output).expect("should read output");
    assert!(written.starts_with("manage: "));
    assert!(written.contains("user, pw"));
}

// describe_unknown_command_fails ensures a name outside the
// catalog is reported.
#[tokio::test]
async fn describe_unknown_command_fails() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let ctx = context(OutputFormat::Json, &dir.path().join("out.json"));

    let err = Opts {
        command: Some("reboot".to_string()),
    }
    .dispatch(ctx)
    .await
    .expect_err("unknown command should fail");
    assert!(matches!(err, CliError::Shell(_)));
}
