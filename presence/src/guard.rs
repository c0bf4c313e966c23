//! Per-navigation route policy.
//!
//! DESIGN
//! ======
//! Call sites only ever see [`RouteGuard::evaluate`]. Which rule runs behind
//! it is a [`GuardPolicy`] chosen at startup (see [`GuardPolicyKind`]), so
//! switching between the permissive default and the home-redirect rule is a
//! configuration change.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Route every redirect lands on under [`HomeRedirectPolicy`] by default.
pub const HOME_ROUTE: &str = "/";

/// Outcome of evaluating one navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDecision {
    pub redirect: bool,
    pub target_route: Option<String>,
    /// Open the login modal once any redirect has completed.
    pub should_prompt_auth: bool,
}

impl GuardDecision {
    #[must_use]
    pub fn allow() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn redirect_and_prompt(target: impl Into<String>) -> Self {
        Self { redirect: true, target_route: Some(target.into()), should_prompt_auth: true }
    }
}

/// Pure decision function over `(session, route)`.
pub trait GuardPolicy: Send + Sync {
    fn evaluate(&self, session: &Session, route: &str) -> GuardDecision;
}

/// Never redirects and never prompts.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermissivePolicy;

impl GuardPolicy for PermissivePolicy {
    fn evaluate(&self, _session: &Session, _route: &str) -> GuardDecision {
        GuardDecision::allow()
    }
}

/// Sends unauthenticated visitors on any non-home route back home, then
/// asks for the login modal.
#[derive(Clone, Debug)]
pub struct HomeRedirectPolicy {
    home: String,
}

impl HomeRedirectPolicy {
    #[must_use]
    pub fn new(home: impl Into<String>) -> Self {
        Self { home: home.into() }
    }

    fn is_home(&self, route: &str) -> bool {
        let path = route.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let home = self.home.trim_end_matches('/');
        trimmed == home
    }
}

impl Default for HomeRedirectPolicy {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

impl GuardPolicy for HomeRedirectPolicy {
    fn evaluate(&self, session: &Session, route: &str) -> GuardDecision {
        if session.is_authenticated || self.is_home(route) {
            return GuardDecision::allow();
        }
        GuardDecision::redirect_and_prompt(self.home.clone())
    }
}

/// Configuration name for a built-in policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardPolicyKind {
    #[default]
    Permissive,
    Strict,
}

impl GuardPolicyKind {
    #[must_use]
    pub fn build(self) -> Box<dyn GuardPolicy> {
        match self {
            Self::Permissive => Box::new(PermissivePolicy),
            Self::Strict => Box::new(HomeRedirectPolicy::default()),
        }
    }
}

impl FromStr for GuardPolicyKind {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "permissive" | "open" | "off" => Ok(Self::Permissive),
            "strict" | "home-redirect" | "on" => Ok(Self::Strict),
            other => Err(format!("unknown guard policy: {other}")),
        }
    }
}

/// Holder for the active policy.
pub struct RouteGuard {
    policy: Box<dyn GuardPolicy>,
}

impl RouteGuard {
    #[must_use]
    pub fn new(policy: Box<dyn GuardPolicy>) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn from_kind(kind: GuardPolicyKind) -> Self {
        Self::new(kind.build())
    }

    #[must_use]
    pub fn evaluate(&self, session: &Session, route: &str) -> GuardDecision {
        self.policy.evaluate(session, route)
    }

    pub fn set_policy(&mut self, policy: Box<dyn GuardPolicy>) {
        self.policy = policy;
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::from_kind(GuardPolicyKind::default())
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard").finish_non_exhaustive()
    }
}
