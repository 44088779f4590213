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

use xclarity_shell::ShellError;

use crate::cfg::config_file::ConfigError;

/// CliError is the error type returned by every command handler.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Shell(#[from] ShellError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Line {line}: cannot split arguments: {error}")]
    ScriptSyntax {
        line: usize,
        error: shell_words::ParseError,
    },
    #[error("Line {line}: {source}")]
    ScriptLine {
        line: usize,
        source: Box<CliError>,
    },
    #[error("{failed} of {total} script lines failed")]
    ScriptFailures { failed: usize, total: usize },
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_line_error_display() {
        let error = CliError::ScriptLine {
            line: 4,
            source: Box::new(ShellError::UnknownCommand("reboot".to_string()).into()),
        };
        assert_eq!(error.to_string(), "Line 4: Unknown command 'reboot'");

        let error = CliError::ScriptFailures {
            failed: 2,
            total: 9,
        };
        assert_eq!(error.to_string(), "2 of 9 script lines failed");
    }
}
