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

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Writes `bytes` and flushes, so partial script output is visible even
/// when a later line fails.
pub async fn write_flushed(
    writer: &mut Pin<Box<dyn AsyncWrite>>,
    bytes: &[u8],
) -> std::io::Result<()> {
    writer.write_all(bytes).await?;
    writer.flush().await
}

/// Like write! for the runtime output writer.
#[macro_export]
macro_rules! async_write {
    ($writer:expr, $($arg:tt)*) => {
        $crate::async_write::write_flushed($writer, format!($($arg)*).as_bytes()).await
    };
}

/// Like writeln! for the runtime output writer.
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {
        $crate::async_write::write_flushed($writer, b"\n").await
    };
    ($writer:expr, $($arg:tt)+) => {{
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        $crate::async_write::write_flushed($writer, formatted.as_bytes()).await
    }};
}
