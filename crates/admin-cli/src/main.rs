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

use clap::Parser;
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::config_file::Config;
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};

mod async_write;
mod call;
mod cfg;
mod describe;
mod errors;
mod generate_shell_complete;
mod preview;
mod render;
mod script;
mod syntax;

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let options = CliOptions::parse();
    init_logging(options.debug)?;

    let file_config = match &options.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    let config = RuntimeConfig::new(&options, file_config);

    let output_file: Pin<Box<dyn tokio::io::AsyncWrite>> = match &options.output {
        Some(path) => Box::pin(tokio::fs::File::create(path).await?),
        None => Box::pin(tokio::io::stdout()),
    };
    let ctx = RuntimeContext::new(config, output_file);

    match options.commands {
        CliCommand::Call(opts) => opts.dispatch(ctx).await?,
        CliCommand::Script(opts) => opts.dispatch(ctx).await?,
        CliCommand::Describe(opts) => opts.dispatch(ctx).await?,
        CliCommand::GenerateShellComplete(cmd) => cmd.dispatch(ctx).await?,
    }

    Ok(())
}

fn init_logging(debug: u8) -> eyre::Result<()> {
    let level = match debug {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init()?;
    Ok(())
}
