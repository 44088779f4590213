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

//! Call syntax used on the command line and in scripts.
//!
//! Each argument is either `value` (positional) or `name=value` (keyword).
//! Values that parse as JSON are taken as JSON, the bare word `None` is the
//! "no value" sentinel, and anything else is a string.

use serde_json::Value;
use xclarity_shell::{ArgValue, Invocation};

use crate::errors::{CliError, CliResult};

const NONE_SENTINEL: &str = "None";

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Invocation {
    let mut invocation = Invocation::new();
    for arg in args {
        let arg = arg.as_ref();
        match arg.split_once('=') {
            Some((name, value)) if is_identifier(name) => {
                invocation.set_kwarg(name, parse_value(value));
            }
            _ => invocation.push_arg(parse_value(arg)),
        }
    }
    invocation
}

pub fn parse_value(raw: &str) -> ArgValue {
    if raw == NONE_SENTINEL {
        return ArgValue::None;
    }
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value.into(),
        Err(_) => ArgValue::from(raw),
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits one script line into a command and its arguments. Blank lines
/// and `#` comments yield `None`.
pub fn split_line(number: usize, line: &str) -> CliResult<Option<(String, Vec<String>)>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = shell_words::split(line)
        .map_err(|error| CliError::ScriptSyntax {
            line: number,
            error,
        })?
        .into_iter();
    Ok(words.next().map(|command| (command, words.collect())))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn keywords_and_positionals() {
        let invocation = parse_args(&["abc", "status=managed", "None", "https://a/b?x=1"]);
        assert_eq!(invocation.positional().len(), 3);
        assert!(invocation.positional()[1].is_none());
        assert_eq!(
            invocation.positional()[2],
            ArgValue::from("https://a/b?x=1")
        );
        assert_eq!(
            invocation.keyword("status"),
            Some(&ArgValue::from("managed"))
        );
    }

    #[test]
    fn values_parse_as_json_when_they_can() {
        assert_eq!(parse_value("42"), ArgValue::Value(json!(42)));
        assert_eq!(parse_value("true"), ArgValue::Value(json!(true)));
        assert_eq!(parse_value(r#"["a","b"]"#), ArgValue::Value(json!(["a", "b"])));
        assert_eq!(parse_value(r#""42""#), ArgValue::from("42"));
        assert_eq!(parse_value("node-1"), ArgValue::from("node-1"));
        assert!(parse_value("None").is_none());
    }

    #[test]
    fn keyword_value_may_contain_equals() {
        let invocation = parse_args(&["filter=a=b"]);
        assert_eq!(invocation.keyword("filter"), Some(&ArgValue::from("a=b")));
        assert!(invocation.positional().is_empty());
    }

    #[test]
    fn split_line_honors_quotes_and_comments() {
        assert_eq!(split_line(1, "   ").unwrap(), None);
        assert_eq!(split_line(2, "# nodes").unwrap(), None);

        let (command, args) = split_line(3, r#"resourcegroups name="rack 1" type=static"#)
            .unwrap()
            .unwrap();
        assert_eq!(command, "resourcegroups");
        assert_eq!(args, vec!["name=rack 1", "type=static"]);

        let err = split_line(7, r#"nodes "unterminated"#).unwrap_err();
        assert!(err.to_string().starts_with("Line 7: cannot split arguments"));
    }
}
