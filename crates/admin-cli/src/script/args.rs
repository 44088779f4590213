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

use clap::Parser;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(help = "Script file, one command per line in call syntax")]
    pub file: PathBuf,

    #[clap(
        short,
        long,
        help = "Continue past failing lines and report a summary at the end"
    )]
    pub keep_going: bool,
}
