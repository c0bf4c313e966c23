use super::*;

const SIGNED_IN: Session = Session { is_authenticated: true };
const SIGNED_OUT: Session = Session { is_authenticated: false };

// =============================================================
// PermissivePolicy
// =============================================================

#[test]
fn permissive_never_redirects_or_prompts() {
    let guard = RouteGuard::default();
    for route in ["/", "/projects", "/contact?from=nav", "/unknown/deep/path"] {
        for session in [SIGNED_IN, SIGNED_OUT] {
            assert_eq!(guard.evaluate(&session, route), GuardDecision::allow());
        }
    }
}

#[test]
fn evaluate_is_deterministic() {
    let guard = RouteGuard::from_kind(GuardPolicyKind::Strict);
    let first = guard.evaluate(&SIGNED_OUT, "/projects");
    for _ in 0..10 {
        assert_eq!(guard.evaluate(&SIGNED_OUT, "/projects"), first);
    }
}

// =============================================================
// HomeRedirectPolicy
// =============================================================

#[test]
fn strict_redirects_unauthenticated_off_home() {
    let policy = HomeRedirectPolicy::default();
    let decision = policy.evaluate(&SIGNED_OUT, "/projects");
    assert!(decision.redirect);
    assert_eq!(decision.target_route.as_deref(), Some("/"));
    assert!(decision.should_prompt_auth);
}

#[test]
fn strict_allows_home_with_query_or_fragment() {
    let policy = HomeRedirectPolicy::default();
    assert_eq!(policy.evaluate(&SIGNED_OUT, "/"), GuardDecision::allow());
    assert_eq!(policy.evaluate(&SIGNED_OUT, "/?ref=ad"), GuardDecision::allow());
    assert_eq!(policy.evaluate(&SIGNED_OUT, "/#work"), GuardDecision::allow());
}

#[test]
fn strict_allows_authenticated_everywhere() {
    let policy = HomeRedirectPolicy::default();
    assert_eq!(policy.evaluate(&SIGNED_IN, "/projects"), GuardDecision::allow());
}

#[test]
fn strict_with_custom_home_ignores_trailing_slash() {
    let policy = HomeRedirectPolicy::new("/app/");
    assert_eq!(policy.evaluate(&SIGNED_OUT, "/app"), GuardDecision::allow());
    let decision = policy.evaluate(&SIGNED_OUT, "/app/settings");
    assert_eq!(decision.target_route.as_deref(), Some("/app/"));
}

// =============================================================
// Swapping policy
// =============================================================

#[test]
fn set_policy_changes_outcome_without_new_guard() {
    let mut guard = RouteGuard::default();
    assert!(!guard.evaluate(&SIGNED_OUT, "/contact").redirect);
    guard.set_policy(Box::new(HomeRedirectPolicy::default()));
    assert!(guard.evaluate(&SIGNED_OUT, "/contact").redirect);
}

#[test]
fn policy_kind_parses_config_values() {
    assert_eq!("permissive".parse::<GuardPolicyKind>(), Ok(GuardPolicyKind::Permissive));
    assert_eq!(" STRICT ".parse::<GuardPolicyKind>(), Ok(GuardPolicyKind::Strict));
    assert_eq!("home-redirect".parse::<GuardPolicyKind>(), Ok(GuardPolicyKind::Strict));
    assert!("sometimes".parse::<GuardPolicyKind>().is_err());
    assert_eq!(GuardPolicyKind::default(), GuardPolicyKind::Permissive);
}
