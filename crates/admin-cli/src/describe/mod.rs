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

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

pub use args::Opts;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let catalog = ctx.shell.catalog();
        match self.command {
            Some(command) => {
                cmds::show(catalog, &command, ctx.config.format, &mut ctx.output_file).await
            }
            None => cmds::list(catalog, ctx.config.format, &mut ctx.output_file).await,
        }
    }
}
