// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account management: registration, preferences, and the
//! password-reset flow.
//!
//! The reset flow is three steps: request a code for a phone number,
//! verify it, then set the new password. Each step's failure statuses
//! carry meaning for the screens (404 unknown user, 403 wrong code,
//! 410 expired code), so errors are returned with status intact.

use crate::error::{ClientError, Result};
use crate::gateway::ApiGateway;
use crate::models::UserProfile;
use serde::Serialize;
use validator::Validate;

/// Payload for creating an account.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub phone_number: String,
    #[validate(length(min = 8))]
    pub password: String,
}

#[derive(Serialize)]
struct PhonePayload<'a> {
    phone_number: &'a str,
}

#[derive(Serialize)]
struct VerifyCodePayload<'a> {
    code: &'a str,
    phone_number: &'a str,
}

#[derive(Serialize)]
struct ResetPasswordPayload<'a> {
    new_password: &'a str,
    repeat_password: &'a str,
    phone_number: &'a str,
}

#[derive(Serialize)]
struct PreferredActivity<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct PreferencesPayload<'a> {
    preferred_activities: Vec<PreferredActivity<'a>>,
}

#[derive(Clone)]
pub struct AccountService {
    gateway: ApiGateway,
}

impl AccountService {
    pub fn new(gateway: ApiGateway) -> Self {
        Self { gateway }
    }

    /// Create a new account. The payload is validated locally first.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        let response = self
            .gateway
            .post::<UserProfile, _>("/users/accounts/", request, None)
            .await?;
        Ok(response.data)
    }

    /// Replace the user's preferred activities (by name).
    pub async fn update_preferences(&self, user_id: u64, activity_names: &[String]) -> Result<()> {
        let payload = PreferencesPayload {
            preferred_activities: activity_names
                .iter()
                .map(|name| PreferredActivity { name })
                .collect(),
        };
        self.gateway
            .patch::<serde_json::Value, _>(&format!("/users/accounts/{user_id}/"), &payload, None)
            .await?;
        Ok(())
    }

    /// Request a password-reset code for the given phone number.
    pub async fn send_reset_code(&self, phone_number: &str) -> Result<()> {
        let payload = PhonePayload { phone_number };
        self.gateway
            .post::<serde_json::Value, _>("/auth/send-reset-password-code/", &payload, None)
            .await?;
        Ok(())
    }

    /// Re-send the account verification code.
    pub async fn resend_verification_code(&self, phone_number: &str) -> Result<()> {
        let payload = PhonePayload { phone_number };
        self.gateway
            .post::<serde_json::Value, _>("/auth/resend-verification-code/", &payload, None)
            .await?;
        Ok(())
    }

    /// Check a reset code. 403 means wrong code, 410 expired.
    pub async fn verify_reset_code(&self, code: &str, phone_number: &str) -> Result<()> {
        let payload = VerifyCodePayload { code, phone_number };
        self.gateway
            .post::<serde_json::Value, _>("/auth/verify-reset-password-code/", &payload, None)
            .await?;
        Ok(())
    }

    /// Set a new password after a verified reset code.
    pub async fn reset_password(
        &self,
        phone_number: &str,
        new_password: &str,
        repeat_password: &str,
    ) -> Result<()> {
        let payload = ResetPasswordPayload {
            new_password,
            repeat_password,
            phone_number,
        };
        self.gateway
            .post::<serde_json::Value, _>("/auth/reset-password/", &payload, None)
            .await?;
        Ok(())
    }
}
