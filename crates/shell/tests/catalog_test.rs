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

use serde_json::json;
use xclarity_shell::{
    ArgValue, CommandSchema, Connection, Invocation, Normalized, ParamSpec, ValidationError,
    ValidationErrorKind, catalog, pass_through, prepare, validate,
};

fn sample_value(command: &str, spec: &ParamSpec) -> ArgValue {
    if spec.is_connection() {
        Connection::new("https://lxca.example.com")
            .with_user(Some(format!("{command}-user")))
            .into()
    } else {
        format!("{command}-{}", spec.name).into()
    }
}

// The parameters a call can supply together without breaking a rule:
// only the first exclusive member, and nothing that depends on a
// parameter left out.
fn compatible_params(schema: &CommandSchema) -> Vec<&'static ParamSpec> {
    let left_out: Vec<&str> = schema.exclusive.iter().skip(1).copied().collect();
    schema
        .params
        .iter()
        .filter(|spec| !left_out.contains(&spec.name))
        .filter(|spec| {
            schema
                .requirements(spec.name)
                .is_none_or(|required| !required.iter().any(|name| left_out.contains(name)))
        })
        .collect()
}

fn assert_supplied(schema: &CommandSchema, included: &[&ParamSpec], out: &Normalized) {
    for spec in included {
        if spec.is_connection() {
            assert!(out.connection.is_some(), "{}: connection", schema.name);
        } else {
            assert_eq!(
                out.params.get(spec.name),
                Some(&json!(format!("{}-{}", schema.name, spec.name))),
                "{}: {}",
                schema.name,
                spec.name
            );
        }
    }
    assert_eq!(
        out.params.len(),
        included.iter().filter(|spec| !spec.is_connection()).count(),
        "{}",
        schema.name
    );
}

#[test]
fn positional_and_long_keyword_calls_agree() {
    for schema in catalog::all().iter().filter(|s| !s.is_session()) {
        let included = compatible_params(schema);
        let mut by_position = Invocation::new();
        let mut by_keyword = Invocation::new();
        for spec in schema.params {
            if included.iter().any(|kept| kept.name == spec.name) {
                by_position.push_arg(sample_value(schema.name, spec));
                by_keyword.set_kwarg(spec.name, sample_value(schema.name, spec));
            } else {
                by_position.push_arg(ArgValue::None);
            }
        }

        let positional = validate(schema, by_position)
            .unwrap_or_else(|err| panic!("{} by position: {err}", schema.name));
        let keyword = validate(schema, by_keyword)
            .unwrap_or_else(|err| panic!("{} by keyword: {err}", schema.name));
        assert_eq!(positional, keyword, "{}", schema.name);
        assert_supplied(schema, &included, &positional);
    }
}

#[test]
fn session_positional_and_keyword_calls_agree() {
    for schema in catalog::all().iter().filter(|s| s.is_session()) {
        let mut by_position = Invocation::new();
        let mut by_keyword = Invocation::new();
        for spec in schema.params {
            by_position.push_arg(sample_value(schema.name, spec));
            by_keyword.set_kwarg(spec.name, sample_value(schema.name, spec));
        }

        let positional = pass_through(schema, by_position).unwrap();
        let keyword = pass_through(schema, by_keyword).unwrap();
        assert_eq!(positional, keyword, "{}", schema.name);
    }
}

#[test]
fn short_and_long_keyword_calls_agree() {
    for schema in catalog::all().iter().filter(|s| !s.is_session()) {
        let included = compatible_params(schema);
        let mut by_long = Invocation::new();
        let mut by_short = Invocation::new();
        for spec in &included {
            by_long.set_kwarg(spec.name, sample_value(schema.name, spec));
            by_short.set_kwarg(
                spec.short.unwrap_or(spec.name),
                sample_value(schema.name, spec),
            );
        }

        let long = validate(schema, by_long)
            .unwrap_or_else(|err| panic!("{} by long name: {err}", schema.name));
        let short = validate(schema, by_short)
            .unwrap_or_else(|err| panic!("{} by short alias: {err}", schema.name));
        assert_eq!(long.params, short.params, "{}", schema.name);
        assert_eq!(long.connection, short.connection, "{}", schema.name);
        assert_supplied(schema, &included, &long);
    }
}

#[test]
fn manage_ip_requires_credentials() {
    let schema = catalog::find("manage").unwrap();

    let err = validate(schema, Invocation::new().kwarg("ip", "10.0.0.5")).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidCombination);
    assert_eq!(
        err.to_string(),
        "Invalid command invocation: manage parameter 'ip' also requires user, pw"
    );

    let out = validate(
        schema,
        Invocation::new()
            .kwarg("i", "10.0.0.5")
            .kwarg("u", "USERID")
            .kwarg("p", "secret"),
    )
    .unwrap();
    assert_eq!(out.params.get("ip"), Some(&json!("10.0.0.5")));
    assert_eq!(out.params.len(), 3);
}

#[test]
fn manage_ip_and_job_are_exclusive() {
    let schema = catalog::find("manage").unwrap();
    let err = validate(
        schema,
        Invocation::new()
            .kwarg("ip", "10.0.0.5")
            .kwarg("user", "USERID")
            .kwarg("pw", "secret")
            .kwarg("job", "12"),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidCombination);
}

#[test]
fn manage_dependency_is_reported_before_exclusion() {
    let schema = catalog::find("manage").unwrap();
    let err = validate(
        schema,
        Invocation::new().kwarg("ip", "10.0.0.5").kwarg("job", "12"),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnmetDependency {
            command: "manage",
            param: "ip",
            missing: vec!["user", "pw"],
        }
    );
}

#[test]
fn required_parameters_are_enforced() {
    for command in ["configtargets", "manifests"] {
        let err = prepare(command, Invocation::new()).unwrap_err();
        assert!(
            err.to_string().starts_with("Invalid Input Arguments"),
            "{command}: {err}"
        );
    }
    assert!(prepare("configtargets", Invocation::new().kwarg("id", "3")).is_ok());
}

#[test]
fn configprofiles_endpoint_requires_restart() {
    let schema = catalog::find("configprofiles").unwrap();
    let err = validate(schema, Invocation::new().kwarg("endpoint", "node1")).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidCombination);

    let out = validate(
        schema,
        Invocation::new()
            .kwarg("endpoint", "node1")
            .kwarg("restart", "defer"),
    );
    assert!(out.is_ok());
}

#[test]
fn every_validated_command_accepts_no_arguments_but_required_ones() {
    for schema in catalog::all().iter().filter(|s| !s.is_session()) {
        let has_required = schema.params.iter().any(|p| !p.optional);
        let result = validate(schema, Invocation::new());
        assert_eq!(result.is_err(), has_required, "{}", schema.name);
    }
}
