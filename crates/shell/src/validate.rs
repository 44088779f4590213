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
use crate::errors::ValidationError;
use crate::schema::{CommandSchema, ParamSpec};
use crate::value::{ArgValue, Invocation, ParamDict};

/// Normalized is the outcome of reconciling an invocation with a schema:
/// the connection handle, lifted out of the arguments, and the parameter
/// dictionary keyed by long names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    pub connection: Option<Connection>,
    pub params: ParamDict,
}

/// validate reconciles the positional and keyword arguments of
/// `invocation` against `schema` and checks the dependency and mutual
/// exclusion rules.
///
/// Parameters are filled in declared order. For each one, the long keyword
/// is used if given, then the short keyword, then the next positional value.
/// A slot claimed by keyword does not consume a positional value, and a
/// positional sentinel consumes its slot without populating it.
pub fn validate(
    schema: &CommandSchema,
    invocation: Invocation,
) -> Result<Normalized, ValidationError> {
    let Invocation {
        positional,
        keywords,
    } = invocation;
    let mut positional = positional.into_iter();
    let mut normalized = Normalized::default();

    // Keywords keyed by long name. A long name replaces a short alias given
    // for the same parameter, never the other way round.
    let mut claimed: BTreeMap<&'static str, ArgValue> = BTreeMap::new();
    let mut unknown = Vec::new();
    for (keyword, value) in keywords {
        match schema.lookup_keyword(&keyword) {
            Some(spec) if spec.name == keyword => {
                claimed.insert(spec.name, value);
            }
            Some(spec) => {
                claimed.entry(spec.name).or_insert(value);
            }
            None => unknown.push(keyword),
        }
    }

    for spec in schema.params {
        let supplied = match claimed.remove(spec.name) {
            Some(value) => Some(value),
            None => match positional.next() {
                Some(ArgValue::None) => None,
                Some(value) => Some(value),
                None if !spec.optional => {
                    tracing::error!(
                        command = schema.name,
                        param = spec.name,
                        "Invalid Input args: parameter is not optional"
                    );
                    return Err(ValidationError::MissingParameter {
                        command: schema.name,
                        param: spec.name,
                    });
                }
                None => None,
            },
        };

        if let Some(value) = supplied {
            store(schema, spec, value, &mut normalized)?;
        }
    }

    if !unknown.is_empty() {
        tracing::warn!(
            command = schema.name,
            ignored = ?unknown,
            "Ignoring unknown keyword arguments"
        );
    }
    let extra = positional.len();
    if extra > 0 {
        tracing::warn!(
            command = schema.name,
            extra,
            "Ignoring positional arguments beyond the parameter list"
        );
    }

    tracing::debug!(command = schema.name, params = ?normalized.params, "Parameter dict");

    check_rules(schema, &normalized.params)?;
    Ok(normalized)
}

// Places one supplied value. The connection slot only takes a connection
// (or the sentinel), every other slot only takes plain values; a keyword
// sentinel is kept as null so it still counts as present.
fn store(
    schema: &CommandSchema,
    spec: &ParamSpec,
    value: ArgValue,
    normalized: &mut Normalized,
) -> Result<(), ValidationError> {
    match (spec.is_connection(), value) {
        (true, ArgValue::Connection(connection)) => normalized.connection = Some(connection),
        (true, ArgValue::None) => {}
        (true, ArgValue::Value(_)) => {
            tracing::error!(command = schema.name, "Connection parameter holds a plain value");
            return Err(ValidationError::ConnectionExpected {
                command: schema.name,
                param: spec.name,
            });
        }
        (false, ArgValue::Connection(_)) => {
            return Err(ValidationError::UnexpectedConnection {
                command: schema.name,
                param: spec.name.to_string(),
            });
        }
        (false, ArgValue::Value(value)) => {
            normalized.params.insert(spec.name.to_string(), value);
        }
        (false, ArgValue::None) => {
            normalized.params.insert(spec.name.to_string(), Value::Null);
        }
    }
    Ok(())
}

fn check_rules(schema: &CommandSchema, params: &ParamDict) -> Result<(), ValidationError> {
    let mut exclusive_seen: Option<&'static str> = None;

    for spec in schema.params {
        if !params.contains_key(spec.name) {
            continue;
        }

        if let Some(required) = schema.requirements(spec.name) {
            let missing: Vec<&'static str> = required
                .iter()
                .copied()
                .filter(|name| !params.contains_key(*name))
                .collect();
            if !missing.is_empty() {
                tracing::error!(
                    command = schema.name,
                    param = spec.name,
                    ?missing,
                    "Invalid command invocation: mandatory parameters not provided"
                );
                return Err(ValidationError::UnmetDependency {
                    command: schema.name,
                    param: spec.name,
                    missing,
                });
            }
        }

        if schema.is_exclusive(spec.name) {
            if let Some(first) = exclusive_seen {
                tracing::error!(
                    command = schema.name,
                    first,
                    second = spec.name,
                    "Invalid command invocation: mutually exclusive parameters"
                );
                return Err(ValidationError::MutuallyExclusive {
                    command: schema.name,
                    first,
                    second: spec.name,
                });
            }
            exclusive_seen = Some(spec.name);
        }
    }
    Ok(())
}

/// pass_through maps the arguments of a session command without schema
/// checks. Positional values are written onto the parameter names in order
/// and win over keywords of the same name. Keywords outside the parameter
/// list are forwarded as given.
pub fn pass_through(
    schema: &CommandSchema,
    invocation: Invocation,
) -> Result<Normalized, ValidationError> {
    let Invocation {
        positional,
        mut keywords,
    } = invocation;

    if positional.len() > schema.params.len() {
        return Err(ValidationError::TooManyArguments {
            command: schema.name,
            max: schema.params.len(),
            got: positional.len(),
        });
    }
    for (spec, value) in schema.params.iter().zip(positional) {
        keywords.insert(spec.name.to_string(), value);
    }

    let mut normalized = Normalized::default();
    for (name, value) in keywords {
        match schema.param(&name) {
            Some(spec) => store(schema, spec, value, &mut normalized)?,
            None => match value {
                ArgValue::Connection(_) => {
                    return Err(ValidationError::UnexpectedConnection {
                        command: schema.name,
                        param: name,
                    });
                }
                ArgValue::Value(value) => {
                    normalized.params.insert(name, value);
                }
                ArgValue::None => {
                    normalized.params.insert(name, Value::Null);
                }
            },
        }
    }

    tracing::debug!(command = schema.name, params = ?normalized.params, "Session parameters");
    Ok(normalized)
}
