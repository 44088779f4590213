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

//! A dispatcher that shows what would be sent to the administrator
//! instead of sending it.

use async_trait::async_trait;
use serde_json::{Value, json};
use xclarity_shell::{Connection, DispatchError, Dispatcher, ParamDict, Reply, Request};

const MASKED_PARAMS: &[&str] = &["pw", "rpw"];
const MASK: &str = "********";

pub struct PreviewDispatcher;

#[async_trait]
impl Dispatcher for PreviewDispatcher {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError> {
        match request.command {
            "connect" => connect(&request.params).map(Reply::Connection),
            "disconnect" => Ok(Reply::Empty),
            _ => Ok(Reply::Data(describe_request(&request))),
        }
    }
}

fn connect(params: &ParamDict) -> Result<Connection, DispatchError> {
    let url = match params.get("url") {
        Some(Value::String(url)) if !url.is_empty() => url.clone(),
        _ => {
            return Err(DispatchError::InvalidRequest(
                "connect requires a url".to_string(),
            ));
        }
    };
    let user = match params.get("user") {
        Some(Value::String(user)) => Some(user.clone()),
        _ => None,
    };

    Ok(Connection::new(url)
        .with_user(user)
        .with_verify_tls(!is_truthy(params.get("noverify"))))
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(flag)) => flag.eq_ignore_ascii_case("true") || flag == "1",
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    }
}

fn describe_request(request: &Request) -> Value {
    let params: serde_json::Map<String, Value> = request
        .params
        .iter()
        .map(|(name, value)| {
            let value = if MASKED_PARAMS.contains(&name.as_str()) && !value.is_null() {
                Value::String(MASK.to_string())
            } else {
                value.clone()
            };
            (name.clone(), value)
        })
        .collect();

    let connection = request
        .connection
        .as_ref()
        .map(|c| json!({ "url": c.url(), "user": c.user() }));

    json!({
        "command": request.command,
        "connection": connection,
        "params": params,
    })
}
