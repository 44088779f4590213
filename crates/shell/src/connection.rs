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

/// Connection is the handle of an authenticated session against an
/// XClarity Administrator. It is produced by the `connect` command and
/// travels beside the parameter dictionary, never inside it.
///
/// Credentials are not part of the handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    url: String,
    user: Option<String>,
    verify_tls: bool,
}

impl Connection {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user: None,
            verify_tls: true,
        }
    }

    pub fn with_user(self, user: Option<String>) -> Self {
        Self { user, ..self }
    }

    pub fn with_verify_tls(self, verify_tls: bool) -> Self {
        Self { verify_tls, ..self }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }
}

impl std::fmt::Display for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.user {
            Some(user) => write!(f, "{user}@{}", self.url),
            None => write!(f, "{}", self.url),
        }
    }
}
