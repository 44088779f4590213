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
use crate::errors::CliResult;
use crate::syntax;

pub async fn call(opts: &Opts, ctx: &mut RuntimeContext) -> CliResult<()> {
    let invocation = syntax::parse_args(&opts.args);
    ctx.execute(&opts.command, invocation).await
}
