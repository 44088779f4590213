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

use serde_json::Value;

use crate::catalog;
use crate::dispatch::{Dispatcher, Reply, Request};
use crate::errors::{ShellError, ShellResult};
use crate::schema::{CommandKind, CommandSchema, ReplyShape};
use crate::validate::{pass_through, validate};
use crate::value::Invocation;

/// Normalizes `invocation` for `command` without dispatching it.
///
/// Returns `None` for a session command that does nothing when called
/// without arguments.
pub fn prepare(command: &str, invocation: Invocation) -> ShellResult<Option<Request>> {
    let schema =
        catalog::find(command).ok_or_else(|| ShellError::UnknownCommand(command.to_string()))?;
    build_request(schema, invocation)
}

fn build_request(schema: &CommandSchema, invocation: Invocation) -> ShellResult<Option<Request>> {
    let normalized = match schema.kind {
        CommandKind::Session { noop_when_empty } => {
            if noop_when_empty && invocation.is_empty() {
                tracing::debug!(command = schema.name, "No arguments, nothing to do");
                return Ok(None);
            }
            pass_through(schema, invocation)?
        }
        CommandKind::Validated => validate(schema, invocation)?,
    };

    Ok(Some(Request {
        command: schema.name,
        connection: normalized.connection,
        params: normalized.params,
    }))
}

/// Shell is the generic entry point for every catalog command. All calls
/// go through the dispatcher it was built with.
pub struct Shell<D> {
    dispatcher: D,
}

impl<D: Dispatcher> Shell<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// Every command the shell accepts, in help order.
    pub fn catalog(&self) -> &'static [CommandSchema] {
        catalog::all()
    }

    pub fn prepare(&self, command: &str, invocation: Invocation) -> ShellResult<Option<Request>> {
        prepare(command, invocation)
    }

    pub async fn call(&self, command: &str, invocation: Invocation) -> ShellResult<Reply> {
        let schema =
            catalog::find(command).ok_or_else(|| ShellError::UnknownCommand(command.to_string()))?;
        let Some(request) = build_request(schema, invocation)? else {
            return Ok(Reply::Empty);
        };

        tracing::info!(command = schema.name, "Dispatching command");
        let reply = self
            .dispatcher
            .dispatch(request)
            .await
            .map_err(|source| ShellError::Dispatch {
                command: schema.name,
                source,
            })?;

        Ok(match schema.reply {
            ReplyShape::Forward => reply,
            ReplyShape::Acknowledge => Reply::Data(Value::Bool(true)),
        })
    }
}
