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

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use serde_json::Value;

use crate::connection::Connection;
use crate::errors::DispatchError;
use crate::value::ParamDict;

/// Request is a validated command call, ready to hand to a [`Dispatcher`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Request {
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<Connection>,
    pub params: ParamDict,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Data returned by the administrator.
    Data(Value),
    /// A handle established by `connect`.
    Connection(Connection),
    Empty,
}

/// Dispatcher carries a request to the management endpoint and returns
/// its reply. It is the only place where I/O happens.
#[automock]
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError>;
}
