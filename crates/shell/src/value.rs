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

use std::collections::BTreeMap;

use serde_json::Value;

use crate::connection::Connection;

/// ParamDict maps long parameter names to the values forwarded to the
/// dispatcher.
pub type ParamDict = BTreeMap<String, Value>;

/// ArgValue is a single argument as supplied by a caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    /// The "no value" sentinel. Supplied positionally it only skips a slot.
    None,
    Value(Value),
    Connection(Connection),
}

impl ArgValue {
    pub fn is_none(&self) -> bool {
        matches!(self, ArgValue::None)
    }
}

impl From<Value> for ArgValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ArgValue::None,
            value => ArgValue::Value(value),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Value(Value::String(value.to_string()))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Value(Value::String(value))
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Value(Value::Bool(value))
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Value(Value::from(value))
    }
}

impl From<Connection> for ArgValue {
    fn from(value: Connection) -> Self {
        ArgValue::Connection(value)
    }
}

impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ArgValue::None, Into::into)
    }
}

/// Invocation holds the positional and keyword arguments of one command
/// call, before they are reconciled against a schema.
///
/// Keywords are keyed by the name the caller used, which may be either the
/// long name or the short alias of a parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    pub(crate) positional: Vec<ArgValue>,
    pub(crate) keywords: BTreeMap<String, ArgValue>,
}

impl Invocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<ArgValue>) -> Self {
        self.push_arg(value);
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.set_kwarg(name, value);
        self
    }

    pub fn push_arg(&mut self, value: impl Into<ArgValue>) {
        self.positional.push(value.into());
    }

    /// Sets a keyword argument, replacing an earlier one of the same name.
    pub fn set_kwarg(&mut self, name: impl Into<String>, value: impl Into<ArgValue>) {
        self.keywords.insert(name.into(), value.into());
    }

    pub fn positional(&self) -> &[ArgValue] {
        &self.positional
    }

    pub fn keyword(&self, name: &str) -> Option<&ArgValue> {
        self.keywords.get(name)
    }

    pub fn has_keyword(&self, name: &str) -> bool {
        self.keywords.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }
}
