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
// Execution         - Run the command against the preview dispatcher.

use clap::{CommandFactory, Parser};
use xclarity_shell::Connection;

use super::args::*;
use super::cmds;
use crate::cfg::cli_options::OutputFormat;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::CliError;

// verify_cmd_structure runs the underlying clap debug_assert()
#[test]
fn verify_cmd_structure() {
    Opts::command().debug_assert();
}

/////////////////////////////////////////////////////////////////////////////
// Argument Parsing
//
// This section contains tests specific to argument parsing,
// including testing required arguments, as well as optional
// flag-specific checking.

// parse_command_only ensures a bare command parses.
#[test]
fn parse_command_only() {
    let opts = Opts::try_parse_from(["call", "nodes"]).expect("should parse command");

    assert_eq!(opts.command, "nodes");
    assert!(opts.args.is_empty());
}

// parse_mixed_args ensures positional, keyword and hyphenated
// values are all collected in order.
#[test]
fn parse_mixed_args() {
    let opts = Opts::try_parse_from(["call", "jobs", "None", "state=Pending", "-1"])
        .expect("should parse mixed args");

    assert_eq!(opts.command, "jobs");
    assert_eq!(opts.args, vec!["None", "state=Pending", "-1"]);
}

// parse_missing_command_fails ensures the command is required.
#[test]
fn parse_missing_command_fails() {
    let result = Opts::try_parse_from(["call"]);
    assert!(result.is_err(), "should fail without command");
}

/////////////////////////////////////////////////////////////////////////////
// Execution

fn context(connection: Option<Connection>, output: &std::path::Path) -> RuntimeContext {
    let file = std::fs::File::create(output).expect("should create output file");
    RuntimeContext::new(
        RuntimeConfig {
            format: OutputFormat::Json,
            connection,
        },
        Box::pin(tokio::fs::File::from_std(file)),
    )
}

// call_renders_request ensures a validated call is previewed
// with the configured connection.
#[tokio::test]
async fn call_renders_request() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let output = dir.path().join("out.json");
    let connection =
        Connection::new("https://10.240.0.10").with_user(Some("USERID".to_string()));
    let mut ctx = context(Some(connection), &output);

    let opts = Opts::try_parse_from(["call", "nodes", "A1B2", "s=managed"])
        .expect("should parse call");
    cmds::call(&opts, &mut ctx).await.expect("call should succeed");

    let written = std::fs::read_to_string(&output).expect("should read output");
    let value: serde_json::Value = serde_json::from_str(&written).expect("output is json");
    assert_eq!(value["command"], "nodes");
    assert_eq!(value["connection"]["user"], "USERID");
    assert_eq!(value["params"]["uuid"], "A1B2");
    assert_eq!(value["params"]["status"], "managed");
}

// call_reports_validation_error ensures invalid combinations
// surface as shell errors.
#[tokio::test]
async fn call_reports_validation_error() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let mut ctx = context(None, &dir.path().join("out.json"));

    let opts = Opts::try_parse_from(["call", "manage", "ip=10.0.0.5"])
        .expect("should parse call");
    let err = cmds::call(&opts, &mut ctx)
        .await
        .expect_err("manage without credentials should fail");
    assert!(matches!(err, CliError::Shell(_)));
}
