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

use serde::Serialize;

/// Name of the parameter that carries the connection handle.
pub const CONNECTION_PARAM: &str = "con";

/// ParamSpec describes one parameter of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub short: Option<&'static str>,
    pub optional: bool,
    pub help: &'static str,
}

impl ParamSpec {
    pub const fn optional(
        name: &'static str,
        short: Option<&'static str>,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            short,
            optional: true,
            help,
        }
    }

    pub const fn required(
        name: &'static str,
        short: Option<&'static str>,
        help: &'static str,
    ) -> Self {
        Self {
            name,
            short,
            optional: false,
            help,
        }
    }

    pub fn is_connection(&self) -> bool {
        self.name == CONNECTION_PARAM
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    /// Arguments are reconciled and checked against the schema.
    Validated,
    /// Arguments are forwarded as given. Positional values overwrite
    /// keywords of the same name. With `noop_when_empty` a call without any
    /// argument never reaches the dispatcher.
    Session { noop_when_empty: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyShape {
    /// The dispatcher reply is returned unchanged.
    Forward,
    /// The dispatcher reply is dropped and `true` is returned instead.
    Acknowledge,
}

/// CommandSchema is the static description of one shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandSchema {
    pub name: &'static str,
    pub about: &'static str,
    pub kind: CommandKind,
    /// Parameters in positional order.
    pub params: &'static [ParamSpec],
    /// At most one of these may be present in a call.
    pub exclusive: &'static [&'static str],
    /// When the first parameter is present, all of the listed ones must be
    /// present too.
    pub requires: &'static [(&'static str, &'static [&'static str])],
    pub reply: ReplyShape,
}

impl CommandSchema {
    pub fn param(&self, name: &str) -> Option<&'static ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Resolves a keyword used by a caller, long name first.
    pub fn lookup_keyword(&self, keyword: &str) -> Option<&'static ParamSpec> {
        self.param(keyword)
            .or_else(|| self.params.iter().find(|p| p.short == Some(keyword)))
    }

    pub fn requirements(&self, name: &str) -> Option<&'static [&'static str]> {
        self.requires
            .iter()
            .find(|(param, _)| *param == name)
            .map(|(_, required)| *required)
    }

    pub fn is_exclusive(&self, name: &str) -> bool {
        self.exclusive.contains(&name)
    }

    pub fn is_session(&self) -> bool {
        matches!(self.kind, CommandKind::Session { .. })
    }

    pub fn accepts_connection(&self) -> bool {
        self.params.iter().any(ParamSpec::is_connection)
    }
}
