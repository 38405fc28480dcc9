// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use jsonwebtoken::DecodingKey;

use crate::storage::RecordStore;

/// Token verification settings.
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HS256 secret used by the sign-in service
    jwt_secret: Arc<str>,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<Arc<str>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
        }
    }

    pub fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.jwt_secret.as_bytes())
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RecordStore>,
    pub auth_config: AuthConfig,
}

impl AppState {
    pub fn new(store: impl RecordStore + 'static, auth_config: AuthConfig) -> Self {
        Self {
            store: Arc::new(store),
            auth_config,
        }
    }

    /// Record store shared by every request.
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
