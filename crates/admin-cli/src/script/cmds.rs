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

use super::Opts;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::{CliError, CliResult};
use crate::syntax;

pub async fn run(opts: &Opts, ctx: &mut RuntimeContext) -> CliResult<()> {
    let script = tokio::fs::read_to_string(&opts.file).await?;
    run_script(&script, opts.keep_going, ctx).await
}

// run_script runs each line in order against the same context, so a
// `connect` line carries over to the lines after it.
pub async fn run_script(script: &str, keep_going: bool, ctx: &mut RuntimeContext) -> CliResult<()> {
    let mut total = 0;
    let mut failed = 0;

    for (index, line) in script.lines().enumerate() {
        let number = index + 1;
        let result = match syntax::split_line(number, line) {
            Ok(None) => continue,
            Ok(Some((command, args))) => {
                total += 1;
                tracing::debug!(line = number, %command, "Running script line");
                ctx.execute(&command, syntax::parse_args(&args))
                    .await
                    .map_err(|source| CliError::ScriptLine {
                        line: number,
                        source: Box::new(source),
                    })
            }
            Err(error) => {
                total += 1;
                Err(error)
            }
        };

        if let Err(error) = result {
            if !keep_going {
                return Err(error);
            }
            tracing::error!("{error}");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(CliError::ScriptFailures { failed, total });
    }
    tracing::info!(total, "Script completed");
    Ok(())
}
