// Rust guideline compliant 2026-10-15

//! Admin session capability.

use serde::Serialize;

/// Proof that an admin is signed in.
///
/// Only auth providers in this crate can mint a session, so holding one is
/// the capability required to build an `AdminMutationGateway` or to enter
/// the admin and upload routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSession {
    email: String,
    signed_in_at: i64,
}

impl AdminSession {
    pub(crate) fn new(email: String, signed_in_at: i64) -> Self {
        Self {
            email,
            signed_in_at,
        }
    }

    /// Returns the signed-in email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the Unix timestamp of the sign-in.
    #[must_use]
    pub fn signed_in_at(&self) -> i64 {
        self.signed_in_at
    }
}
