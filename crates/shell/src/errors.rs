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

/// ValidationError enumerates the ways an invocation can fail to match
/// the schema of the command it targets.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Input Arguments: {command} requires parameter '{param}'")]
    MissingParameter {
        command: &'static str,
        param: &'static str,
    },
    #[error(
        "Invalid command invocation: {command} parameter '{param}' also requires {}",
        .missing.join(", ")
    )]
    UnmetDependency {
        command: &'static str,
        param: &'static str,
        missing: Vec<&'static str>,
    },
    #[error(
        "Invalid command invocation: {command} '{first}' and '{second}' are mutually exclusive"
    )]
    MutuallyExclusive {
        command: &'static str,
        first: &'static str,
        second: &'static str,
    },
    #[error("Invalid Input Arguments: {command} parameter '{param}' expects a connection")]
    ConnectionExpected {
        command: &'static str,
        param: &'static str,
    },
    #[error("Invalid Input Arguments: {command} parameter '{param}' cannot hold a connection")]
    UnexpectedConnection { command: &'static str, param: String },
    #[error(
        "Invalid Input Arguments: {command} takes at most {max} positional arguments, got {got}"
    )]
    TooManyArguments {
        command: &'static str,
        max: usize,
        got: usize,
    },
}

/// The broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A parameter that is not optional was not supplied.
    MissingParameter,
    /// A dependency rule or a mutual exclusion rule was violated.
    InvalidCombination,
    /// A value had the wrong shape for its slot.
    InvalidInput,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingParameter { .. } => ValidationErrorKind::MissingParameter,
            Self::UnmetDependency { .. } | Self::MutuallyExclusive { .. } => {
                ValidationErrorKind::InvalidCombination
            }
            Self::ConnectionExpected { .. }
            | Self::UnexpectedConnection { .. }
            | Self::TooManyArguments { .. } => ValidationErrorKind::InvalidInput,
        }
    }
}

/// DispatchError is returned by [`crate::Dispatcher`] implementations.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("Not connected to an XClarity Administrator")]
    NotConnected,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(thiserror::Error, Debug)]
pub enum ShellError {
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Command {command} failed: {source}")]
    Dispatch {
        command: &'static str,
        source: DispatchError,
    },
}

pub type ShellResult<T> = Result<T, ShellError>;
