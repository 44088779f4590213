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

use clap::Parser;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(help = "Shell command to run, e.g. nodes or configprofiles")]
    pub command: String,

    #[clap(
        allow_hyphen_values = true,
        trailing_var_arg = true,
        help = "Arguments as `value` or `name=value`. `None` skips a positional slot"
    )]
    pub args: Vec<String>,
}
