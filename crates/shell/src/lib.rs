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

//! Scriptable command layer for the XClarity Administrator REST API.
//!
//! Every command is described by a static [`CommandSchema`] in the
//! [`catalog`]. An [`Invocation`] (positional plus keyword arguments) is
//! normalized against that schema by [`validate`], and the resulting
//! [`Request`] is handed to an injected [`Dispatcher`] through [`Shell`].

pub mod catalog;
mod connection;
mod dispatch;
mod errors;
mod schema;
mod shell;
mod validate;
mod value;

pub use connection::Connection;
pub use dispatch::{Dispatcher, MockDispatcher, Reply, Request};
pub use errors::{DispatchError, ShellError, ShellResult, ValidationError, ValidationErrorKind};
pub use schema::{CONNECTION_PARAM, CommandKind, CommandSchema, ParamSpec, ReplyShape};
pub use shell::{Shell, prepare};
pub use validate::{Normalized, pass_through, validate};
pub use value::{ArgValue, Invocation, ParamDict};
