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

use xclarity_shell::{CONNECTION_PARAM, Connection, Invocation, Reply, Shell, catalog};

use crate::cfg::cli_options::{CliOptions, OutputFormat};
use crate::cfg::config_file::Config;
use crate::errors::CliResult;
use crate::preview::PreviewDispatcher;
use crate::render;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub shell: Shell<PreviewDispatcher>,
    pub config: RuntimeConfig,
    pub output_file: Pin<Box<dyn tokio::io::AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters merged
// from CLI options and the config file. The connection is updated
// as `connect` and `disconnect` run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeConfig {
    pub format: OutputFormat,
    pub connection: Option<Connection>,
}

impl RuntimeConfig {
    pub fn new(options: &CliOptions, file: Config) -> Self {
        let url = options.url.clone().or(file.url);
        let user = options.user.clone().or(file.user);
        let verify_tls = file.verify_tls && !options.noverify;

        Self {
            format: options.format.or(file.format).unwrap_or_default(),
            connection: url.map(|url| {
                Connection::new(url)
                    .with_user(user)
                    .with_verify_tls(verify_tls)
            }),
        }
    }
}

impl RuntimeContext {
    pub fn new(config: RuntimeConfig, output_file: Pin<Box<dyn tokio::io::AsyncWrite>>) -> Self {
        Self {
            shell: Shell::new(PreviewDispatcher),
            config,
            output_file,
        }
    }

    /// Runs one shell command and writes its reply in the configured format.
    pub async fn execute(&mut self, command: &str, mut invocation: Invocation) -> CliResult<()> {
        if let Some(schema) = catalog::find(command)
            && schema.accepts_connection()
            && !invocation.has_keyword(CONNECTION_PARAM)
        {
            // Validated commands always get the slot filled so positional
            // arguments line up with the first real parameter.
            match (&self.config.connection, schema.is_session()) {
                (Some(connection), _) => {
                    invocation.set_kwarg(CONNECTION_PARAM, connection.clone())
                }
                (None, false) => invocation.set_kwarg(CONNECTION_PARAM, None::<Connection>),
                (None, true) => {}
            }
        }

        let reply = self.shell.call(command, invocation).await?;
        match &reply {
            Reply::Connection(connection) => {
                tracing::info!(%connection, "Connected");
                self.config.connection = Some(connection.clone());
            }
            _ if command == "disconnect" => self.config.connection = None,
            _ => {}
        }

        render::write_reply(&mut self.output_file, self.config.format, &reply).await
    }
}
