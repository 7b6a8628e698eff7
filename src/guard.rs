use crate::models::identity::{Identity, Role};

/// What a screen needs before it may render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequirement {
    pub path: String,
    pub required_role: Option<Role>,
}

impl RouteRequirement {
    pub fn new(path: impl Into<String>, required_role: Option<Role>) -> Self {
        Self {
            path: path.into(),
            required_role,
        }
    }
}

/// Outcome of evaluating one navigation. There is no transition history:
/// every navigation is reclassified from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restore has not finished; render a placeholder.
    Loading,
    /// No identity: go to the login screen, remembering where the user was
    /// headed so the login flow can return there (best-effort).
    RedirectToLogin { from: String },
    /// Signed in under the wrong role: go to that identity's own dashboard.
    RedirectToDashboard { to: String },
    /// Render the requested screen.
    Authorized,
}

/// Classify one navigation attempt against the current session state.
pub fn evaluate(route: &RouteRequirement, ready: bool, identity: Option<&Identity>) -> RouteDecision {
    if !ready {
        return RouteDecision::Loading;
    }

    let Some(identity) = identity else {
        return RouteDecision::RedirectToLogin {
            from: route.path.clone(),
        };
    };

    match route.required_role {
        Some(required) if identity.role != required => RouteDecision::RedirectToDashboard {
            to: identity.role.dashboard_path(),
        },
        _ => RouteDecision::Authorized,
    }
}
