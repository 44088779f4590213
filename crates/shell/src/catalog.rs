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

//! The command table. Command names, parameter names, aliases and rules are
//! the public contract of the shell and must not be renamed.

use crate::schema::{CONNECTION_PARAM, CommandKind, CommandSchema, ParamSpec, ReplyShape};

const CON: ParamSpec = ParamSpec::optional(
    CONNECTION_PARAM,
    None,
    "Connection object to the XClarity Administrator",
);

const fn validated(
    name: &'static str,
    about: &'static str,
    params: &'static [ParamSpec],
    exclusive: &'static [&'static str],
    requires: &'static [(&'static str, &'static [&'static str])],
) -> CommandSchema {
    CommandSchema {
        name,
        about,
        kind: CommandKind::Validated,
        params,
        exclusive,
        requires,
        reply: ReplyShape::Forward,
    }
}

const fn session(
    name: &'static str,
    about: &'static str,
    params: &'static [ParamSpec],
    noop_when_empty: bool,
) -> CommandSchema {
    CommandSchema {
        name,
        about,
        kind: CommandKind::Session { noop_when_empty },
        params,
        exclusive: &[],
        requires: &[],
        reply: ReplyShape::Forward,
    }
}

const CONNECT_PARAMS: &[ParamSpec] = &[
    ParamSpec::optional("url", None, "URL of the XClarity Administrator, e.g. https://a.b.c.d"),
    ParamSpec::optional("user", None, "User ID to authenticate with"),
    ParamSpec::optional("pw", None, "Password to authenticate with"),
    ParamSpec::optional("noverify", None, "Do not verify the server certificate"),
];
const DISCONNECT_PARAMS: &[ParamSpec] = &[CON];
const LOG_PARAMS: &[ParamSpec] = &[ParamSpec::optional("lvl", None, "Log level to apply")];

const CMMS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "CMM uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
];
const CHASSIS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Chassis uuid"),
    ParamSpec::optional("status", Some("s"), "Chassis manage status (managed/unmanaged)"),
];
const FANS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Fan uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
];
const FANMUXES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Fan mux uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
];
const NODES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Node uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
    ParamSpec::optional("status", Some("s"), "Node manage status (managed/unmanaged)"),
];
const SWITCHES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Switch uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
    ParamSpec::optional(
        "ports",
        None,
        "Comma separated ports; empty lists all ports of the switch",
    ),
    ParamSpec::optional("action", None, "enable/disable ports"),
];
const POWERSUPPLIES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "Power supply uuid"),
    ParamSpec::optional("chassis", Some("c"), "Chassis uuid"),
];
const SCALABLESYSTEM_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Scalable complex id"),
    ParamSpec::optional("type", Some("t"), "Complex type (flex/rackserver)"),
];
const DISCOVER_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("ip", Some("i"), "One or more IP addresses to discover"),
    ParamSpec::optional("job", Some("j"), "Job ID of a discover request"),
];
const MANAGE_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("ip", Some("i"), "One or more IP addresses to manage"),
    ParamSpec::optional("user", Some("u"), "User ID to access the endpoint"),
    ParamSpec::optional("pw", Some("p"), "Current password to access the endpoint"),
    ParamSpec::optional("rpw", Some("r"), "Recovery password for the endpoint"),
    ParamSpec::optional("job", Some("j"), "Job ID of an existing manage request"),
    ParamSpec::optional("force", Some("f"), "Force manage"),
];
const UNMANAGE_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional(
        "ip",
        Some("i"),
        "Endpoints to unmanage as ip;uuid;type entries, comma separated",
    ),
    ParamSpec::optional("force", Some("f"), "Force unmanage of the endpoint"),
    ParamSpec::optional("job", Some("j"), "Job ID of an unmanage request"),
];
const CONFIGPATTERNS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Server pattern id"),
    ParamSpec::optional("includeSettings", None, "Include the pattern settings"),
    ParamSpec::optional("endpoint", Some("e"), "Target server UUIDs or empty bay location IDs"),
    ParamSpec::optional("restart", Some("r"), "Activation: defer, immediate or pending"),
    ParamSpec::optional("type", Some("t"), "Server type: flex, node, rack or tower"),
    ParamSpec::optional("pattern_update_dict", None, "Category patterns to import"),
    ParamSpec::optional("name", Some("n"), "Pattern name"),
    ParamSpec::optional("status", Some("s"), "Check config status of the endpoint"),
];
const CONFIGPROFILES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Server profile id"),
    ParamSpec::optional("name", Some("n"), "Profile name"),
    ParamSpec::optional("endpoint", Some("e"), "Server UUID or flex location id"),
    ParamSpec::optional("restart", Some("r"), "Restart to activate: immediate or defer"),
    ParamSpec::optional("delete", Some("d"), "Delete the profile"),
    ParamSpec::optional("unassign", Some("u"), "Unassign the profile"),
    ParamSpec::optional("powerdown", Some("p"), "Power down the server"),
    ParamSpec::optional("resetimm", None, "Reset the IMM"),
    ParamSpec::optional("force", Some("f"), "Force the unassign operation"),
];
const CONFIGTARGETS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::required("id", Some("i"), "Config target id"),
];
const UPDATEPOLICY_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("info", Some("i"), "Information to return: FIRMWARE or RESULTS"),
    ParamSpec::optional("job", Some("j"), "Job ID of an assign compliance policy operation"),
    ParamSpec::optional("uuid", Some("u"), "Device to assign the compliance policy to"),
    ParamSpec::optional("policy", Some("p"), "Name of the compliance policy"),
    ParamSpec::optional(
        "type",
        Some("t"),
        "Device type: CMM, IOSwitch, RACKSWITCH, STORAGE or SERVER",
    ),
];
const UPDATEREPO_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("key", Some("k"), "Repository information to return"),
    ParamSpec::optional("action", Some("a"), "read, refresh, acquire or delete"),
    ParamSpec::optional("mt", Some("m"), "Comma separated machine types"),
    ParamSpec::optional("scope", Some("s"), "Scope of the operation"),
    ParamSpec::optional("fixids", Some("f"), "Comma separated fix ids"),
    ParamSpec::optional("type", Some("t"), "File type of a PUT operation"),
];
const UPDATECOMP_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("query", Some("q"), "Data to return: components or status"),
    ParamSpec::optional("mode", Some("m"), "Activation mode: immediate or delayed"),
    ParamSpec::optional("action", Some("a"), "apply, power or cancelApply"),
    ParamSpec::optional("cmm", Some("c"), "CMM update information"),
    ParamSpec::optional("switch", Some("w"), "Switch update information"),
    ParamSpec::optional("server", Some("s"), "Server update information"),
    ParamSpec::optional("storage", Some("t"), "Storage update information"),
];
const USERS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Unique ID of the user"),
];
const FFDC_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "UUID of the target endpoint"),
];
const LXCALOG_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("filter", Some("f"), "Event filter"),
];
const JOBS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Job id"),
    ParamSpec::optional("uuid", Some("u"), "Endpoint uuid to retrieve jobs for"),
    ParamSpec::optional("state", Some("s"), "Job state to filter on"),
    ParamSpec::optional("cancel", Some("c"), "Cancel the job with this id"),
    ParamSpec::optional("delete", Some("d"), "Delete the job with this id"),
];
const MANIFESTS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::required("id", Some("i"), "Solution id"),
    ParamSpec::optional("file", Some("f"), "Path to the manifest file"),
];
const TASKS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("jobUID", Some("j"), "UUID of the job"),
    ParamSpec::optional("children", Some("c"), "Include children in the result"),
    ParamSpec::optional("action", Some("a"), "cancel or update"),
    ParamSpec::optional("updateList", Some("u"), "Task updates, required for update"),
];
const RESOURCEGROUPS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("uuid", Some("u"), "UUID of an existing group"),
    ParamSpec::optional("name", Some("n"), "Group name"),
    ParamSpec::optional("description", Some("d"), "Group description"),
    ParamSpec::optional("type", Some("t"), "Group type: static, dynamic or solution"),
    ParamSpec::optional("solutionVPD", Some("s"), "Solution vital product data"),
    ParamSpec::optional("members", Some("m"), "Member URIs"),
    ParamSpec::optional("criteria", Some("c"), "Dynamic group criteria"),
];
const OSIMAGES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("osimages_info", Some("i"), "OS image sub-resource and its settings"),
];
const MANAGEMENTSERVER_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("key", Some("k"), "Update information to return"),
    ParamSpec::optional("fixids", Some("f"), "Comma separated fix ids"),
    ParamSpec::optional("type", Some("t"), "changeHistory or readme for a fix id"),
    ParamSpec::optional("action", Some("a"), "apply, refresh, acquire, delete or import"),
    ParamSpec::optional("files", None, "Comma separated files to import"),
    ParamSpec::optional("jobid", Some("j"), "Job ID of an import"),
];
const RULES_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Rule id"),
    ParamSpec::optional("name", Some("n"), "Rule name"),
    ParamSpec::optional("targetResourceType", Some("t"), "Resource type the rule targets"),
    ParamSpec::optional("targetGroup", Some("g"), "Groups the rule targets"),
    ParamSpec::optional("content", Some("c"), "Rule content"),
];
const COMPOSITE_RESULTS_PARAMS: &[ParamSpec] = &[
    CON,
    ParamSpec::optional("id", Some("i"), "Compliance result id"),
    ParamSpec::optional("solutionGroup", Some("s"), "Solution group"),
];

const UUID_OR_CHASSIS: &[&str] = &["uuid", "chassis"];
const IP_OR_JOB: &[&str] = &["ip", "job"];
const KEY_OR_ACTION: &[&str] = &["key", "action"];

static CATALOG: &[CommandSchema] = &[
    session("connect", "Connect to an XClarity Administrator", CONNECT_PARAMS, true),
    session("disconnect", "Disconnect from an XClarity Administrator", DISCONNECT_PARAMS, true),
    session("log", "Set the log level of the dispatcher", LOG_PARAMS, false),
    validated("chassis", "Get chassis information", CHASSIS_PARAMS, &[], &[]),
    validated("cmms", "Get CMM information", CMMS_PARAMS, UUID_OR_CHASSIS, &[]),
    validated("fans", "Get fan information", FANS_PARAMS, UUID_OR_CHASSIS, &[]),
    validated("fanmuxes", "Get fan mux information", FANMUXES_PARAMS, UUID_OR_CHASSIS, &[]),
    validated(
        "switches",
        "Get switch information or enable/disable ports",
        SWITCHES_PARAMS,
        UUID_OR_CHASSIS,
        &[],
    ),
    validated(
        "powersupplies",
        "Get power supply information",
        POWERSUPPLIES_PARAMS,
        UUID_OR_CHASSIS,
        &[],
    ),
    validated("nodes", "Get node information", NODES_PARAMS, UUID_OR_CHASSIS, &[]),
    validated(
        "scalablesystem",
        "Get scalable complex information",
        SCALABLESYSTEM_PARAMS,
        &[],
        &[],
    ),
    validated(
        "discover",
        "Discover endpoints or check a discovery job",
        DISCOVER_PARAMS,
        IP_OR_JOB,
        &[],
    ),
    validated(
        "manage",
        "Manage endpoints or check a manage job",
        MANAGE_PARAMS,
        IP_OR_JOB,
        &[("ip", &["user", "pw"]), ("job", &[])],
    ),
    validated(
        "unmanage",
        "Unmanage endpoints or check an unmanage job",
        UNMANAGE_PARAMS,
        IP_OR_JOB,
        &[],
    ),
    validated("jobs", "Get, cancel or delete jobs", JOBS_PARAMS, &["id", "cancel", "delete"], &[]),
    validated("users", "Get user information", USERS_PARAMS, &[], &[]),
    validated("lxcalog", "Get event log entries", LXCALOG_PARAMS, &[], &[]),
    validated("ffdc", "Collect first failure data for an endpoint", FFDC_PARAMS, &[], &[]),
    validated("updatecomp", "Query or apply firmware updates", UPDATECOMP_PARAMS, &[], &[]),
    validated("updatepolicy", "Query or assign compliance policies", UPDATEPOLICY_PARAMS, &[], &[]),
    validated(
        "updaterepo",
        "Query or act on the firmware update repository",
        UPDATEREPO_PARAMS,
        KEY_OR_ACTION,
        &[],
    ),
    validated(
        "configpatterns",
        "Get, deploy or import server patterns",
        CONFIGPATTERNS_PARAMS,
        &["id", "pattern_update_dict"],
        &[("id", &[]), ("pattern_update_dict", &[]), ("includeSettings", &["id"])],
    ),
    validated(
        "configprofiles",
        "Get, rename, activate, delete or unassign server profiles",
        CONFIGPROFILES_PARAMS,
        &[],
        &[("id", &[]), ("endpoint", &["restart"]), ("delete", &["id"]), ("unassign", &["id"])],
    ),
    validated("configtargets", "Get config target information", CONFIGTARGETS_PARAMS, &[], &[]),
    validated("tasks", "Get, cancel or update tasks", TASKS_PARAMS, &[], &[]),
    CommandSchema {
        name: "manifests",
        about: "Send a solution manifest",
        kind: CommandKind::Validated,
        params: MANIFESTS_PARAMS,
        exclusive: &[],
        requires: &[],
        reply: ReplyShape::Acknowledge,
    },
    validated("osimages", "Manage OS images, profiles and deployments", OSIMAGES_PARAMS, &[], &[]),
    validated(
        "resourcegroups",
        "Get or create resource groups",
        RESOURCEGROUPS_PARAMS,
        &["uuid", "name"],
        &[("uuid", &[]), ("name", &["type"])],
    ),
    validated(
        "managementserver",
        "Query or update the management server",
        MANAGEMENTSERVER_PARAMS,
        KEY_OR_ACTION,
        &[],
    ),
    validated("rules", "Get or set compliance rules", RULES_PARAMS, &["id", "name"], &[]),
    validated(
        "compositeResults",
        "Get or set compliance composite results",
        COMPOSITE_RESULTS_PARAMS,
        &["id", "solutionGroup"],
        &[],
    ),
];

/// All commands, in help order.
pub fn all() -> &'static [CommandSchema] {
    CATALOG
}

pub fn find(name: &str) -> Option<&'static CommandSchema> {
    CATALOG.iter().find(|schema| schema.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn command_names_are_unique() {
        let names: HashSet<_> = all().iter().map(|schema| schema.name).collect();
        assert_eq!(names.len(), all().len());
        assert_eq!(all().len(), 31);
    }

    #[test]
    fn rules_reference_declared_params() {
        for schema in all() {
            for name in schema.exclusive {
                assert!(schema.param(name).is_some(), "{}: {name}", schema.name);
            }
            for (name, required) in schema.requires {
                assert!(schema.param(name).is_some(), "{}: {name}", schema.name);
                for r in *required {
                    assert!(schema.param(r).is_some(), "{}: {r}", schema.name);
                }
            }
        }
    }

    #[test]
    fn aliases_are_unique_per_command() {
        for schema in all() {
            let mut seen = HashSet::new();
            for param in schema.params {
                assert!(seen.insert(param.name), "{}: {}", schema.name, param.name);
                if let Some(short) = param.short {
                    assert!(seen.insert(short), "{}: {short}", schema.name);
                }
            }
        }
    }

    #[test]
    fn validated_commands_take_connection_first() {
        for schema in all().iter().filter(|s| !s.is_session()) {
            assert_eq!(schema.params[0].name, CONNECTION_PARAM, "{}", schema.name);
            assert!(schema.params[0].optional);
        }
    }

    #[test]
    fn required_params() {
        let required: Vec<_> = all()
            .iter()
            .flat_map(|s| {
                s.params
                    .iter()
                    .filter(|p| !p.optional)
                    .map(move |p| (s.name, p.name))
            })
            .collect();
        assert_eq!(required, vec![("configtargets", "id"), ("manifests", "id")]);
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(find("compositeResults").is_some());
        assert!(find("compositeresults").is_none());
        assert_eq!(find("manifests").map(|s| s.reply), Some(ReplyShape::Acknowledge));
        assert_eq!(
            find("connect").map(|s| s.kind),
            Some(CommandKind::Session {
                noop_when_empty: true
            })
        );
    }
}
