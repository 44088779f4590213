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

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::{call, describe, generate_shell_complete, script};

#[derive(Parser, Debug)]
#[clap(name = "xclarity-cli", version)]
#[clap(about = "Validate and run Lenovo XClarity Administrator shell commands")]
pub struct CliOptions {
    #[clap(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        env = "XCLARITY_URL",
        help = "URL of the XClarity Administrator, e.g. https://10.240.0.10"
    )]
    pub url: Option<String>,

    #[clap(long, env = "XCLARITY_USER", help = "User ID to connect with")]
    pub user: Option<String>,

    #[clap(long, help = "Do not verify the server certificate")]
    pub noverify: bool,

    #[clap(
        short,
        long,
        value_enum,
        help = "Output format [default: ascii-table]"
    )]
    pub format: Option<OutputFormat>,

    #[clap(short, long, help = "Write output to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[clap(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Raise log verbosity, repeat for more"
    )]
    pub debug: u8,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Parser, Debug)]
#[clap(rename_all = "kebab_case")]
pub enum CliCommand {
    #[clap(about = "Run a single shell command", visible_alias = "c")]
    Call(call::Opts),
    #[clap(about = "Run a file of shell commands, one per line")]
    Script(script::Opts),
    #[clap(about = "List commands, or show the parameters of one command")]
    Describe(describe::Opts),
    #[clap(
        about = "Generate shell autocomplete. Source the output of this command: \
                 `source <(xclarity-cli generate-shell-complete bash)`"
    )]
    GenerateShellComplete(generate_shell_complete::Cmd),
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[clap(rename_all = "kebab_case")]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    AsciiTable,
    Json,
    Yaml,
}
