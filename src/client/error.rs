// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use thiserror::Error;

/// Failure of a single request. Every failure is terminal for that request; nothing retries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, TLS, body read).
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status; carries the status text.
    #[error("failed to fetch {url}: {status_text}")]
    Status { url: String, status: u16, status_text: String },

    /// Body was not the expected JSON shape.
    #[error("failed to decode {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
