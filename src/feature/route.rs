//! Route-version selection
//!
//! A versioned route is declared once per version segment (e.g. `/v1`, `/v2`).
//! Given the app's current version, the route to show is the latest declared
//! version the app has reached. Rewriting the URL is left to the host router.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::version::strategy::VersionStrategy;

/// A route declared for one version segment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteVersion {
    pub version: String,
}

impl RouteVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }
}

/// What the host router should do for the current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The current route is the right one, or nothing better is known
    Stay,
    /// Navigate to the route declared for `target`
    Redirect { target: String },
}

/// The route an empty path should land on: the first declared route
pub fn default_route(routes: &[RouteVersion]) -> Option<&RouteVersion> {
    routes.first()
}

/// Latest route whose version is not ahead of `app_version`
///
/// Ties keep declaration order.
pub fn latest_route<'a>(
    strategy: &mut dyn VersionStrategy,
    routes: &'a [RouteVersion],
    app_version: &str,
) -> Option<&'a RouteVersion> {
    let mut latest: Option<&'a RouteVersion> = None;

    for route in routes {
        if !strategy.gte(app_version, &route.version) {
            continue;
        }
        latest = match latest {
            Some(current)
                if strategy.compare(&route.version, &current.version) != Ordering::Greater =>
            {
                Some(current)
            }
            _ => Some(route),
        };
    }

    latest
}

/// Decide whether the route declared for `current_route` should be kept
pub fn route_decision(
    strategy: &mut dyn VersionStrategy,
    routes: &[RouteVersion],
    current_route: &str,
    app_version: Option<&str>,
) -> RouteDecision {
    if routes.is_empty() || current_route.is_empty() {
        return RouteDecision::Stay;
    }
    let Some(app_version) = app_version.filter(|v| !v.is_empty()) else {
        return RouteDecision::Stay;
    };

    match latest_route(strategy, routes, app_version) {
        Some(latest) if latest.version != current_route => RouteDecision::Redirect {
            target: latest.version.clone(),
        },
        _ => RouteDecision::Stay,
    }
}
