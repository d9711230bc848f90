use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::session::Role;

/// The unauthenticated entry screen.
pub const ENTRY_ROUTE: &str = "/";

/// Every protected view lives below this prefix.
pub const DASHBOARD_PREFIX: &str = "/dashboard/";

/// Icon
///
/// Reference to a client-side icon. The client maps these names onto its icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Icon {
    LayoutDashboard,
    Droplets,
    CloudRain,
    Truck,
    BarChart,
    AlertTriangle,
    Package,
    Route,
}

/// NavigationEntry
///
/// One item of a role's sidebar menu. Badges are static placeholder counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NavigationEntry {
    pub label: String,
    pub target_path: String,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// MenuItem
///
/// A resolved entry paired with its highlight state for the path being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct MenuItem {
    #[serde(flatten)]
    pub entry: NavigationEntry,
    pub active: bool,
}

/// EntryDef
///
/// Static form of a `NavigationEntry`, used to write role tables as constants.
pub struct EntryDef {
    label: &'static str,
    target_path: &'static str,
    icon: Icon,
    badge: Option<&'static str>,
}

pub const fn entry(label: &'static str, target_path: &'static str, icon: Icon) -> EntryDef {
    EntryDef {
        label,
        target_path,
        icon,
        badge: None,
    }
}

pub const fn badged(
    label: &'static str,
    target_path: &'static str,
    icon: Icon,
    badge: &'static str,
) -> EntryDef {
    EntryDef {
        label,
        target_path,
        icon,
        badge: Some(badge),
    }
}

/// RoleProfile
///
/// Everything the service knows about a role: how it is presented, where it lands after
/// signing in and which menu it sees. Landing routes and menus sit in the same table so
/// they cannot drift apart unnoticed; `check_consistency` enforces the link.
pub struct RoleProfile {
    pub role: Role,
    pub label: &'static str,
    pub description: &'static str,
    pub landing_route: &'static str,
    pub navigation: &'static [EntryDef],
}

pub static ROLE_PROFILES: [RoleProfile; 3] = [
    RoleProfile {
        role: Role::Public,
        label: "Public User",
        description: "Check water levels, drought alerts, and order tankers",
        landing_route: "/dashboard/public",
        navigation: &[
            entry("Dashboard", "/dashboard/public", Icon::LayoutDashboard),
            entry("Water Levels", "/dashboard/water-levels", Icon::Droplets),
            entry("Drought Alerts", "/dashboard/drought-prediction", Icon::CloudRain),
            entry("Order Tanker", "/dashboard/tanker-order", Icon::Truck),
        ],
    },
    RoleProfile {
        role: Role::Government,
        label: "Government Authority",
        description: "Full system access with predictions and management tools",
        landing_route: "/dashboard/government",
        navigation: &[
            entry("Overview", "/dashboard/government", Icon::LayoutDashboard),
            badged("Water Monitoring", "/dashboard/water-levels", Icon::Droplets, "Live"),
            entry("Drought Prediction", "/dashboard/drought-prediction", Icon::CloudRain),
            badged("Tanker Management", "/dashboard/tanker-order", Icon::Truck, "8"),
            entry("Analytics", "/dashboard/government#analytics", Icon::BarChart),
            badged("Alerts", "/dashboard/government#alerts", Icon::AlertTriangle, "3"),
        ],
    },
    RoleProfile {
        role: Role::Dealer,
        label: "Tanker Dealer",
        description: "Manage incoming orders, routes, and dispatch",
        landing_route: "/dashboard/dealer",
        navigation: &[
            entry("Dashboard", "/dashboard/dealer", Icon::LayoutDashboard),
            badged("Incoming Orders", "/dashboard/dealer#orders", Icon::Package, "5"),
            entry("Route Planning", "/dashboard/dealer#routes", Icon::Route),
            entry("Dispatch Status", "/dashboard/dealer#dispatch", Icon::Truck),
        ],
    },
];

/// Looks up the profile of `role`. Every role has exactly one.
pub fn profile(role: Role) -> &'static RoleProfile {
    match role {
        Role::Public => &ROLE_PROFILES[0],
        Role::Government => &ROLE_PROFILES[1],
        Role::Dealer => &ROLE_PROFILES[2],
    }
}

/// The route a role is sent to right after signing in.
pub fn landing_route(role: Role) -> &'static str {
    profile(role).landing_route
}

/// resolve
///
/// The ordered navigation menu for `role`. Pure: the same role always yields the same
/// entries, in the same order, with the same badges.
pub fn resolve(role: Role) -> Vec<NavigationEntry> {
    profile(role)
        .navigation
        .iter()
        .map(|def| NavigationEntry {
            label: def.label.to_string(),
            target_path: def.target_path.to_string(),
            icon: def.icon,
            badge: def.badge.map(str::to_string),
        })
        .collect()
}

/// is_active
///
/// Highlight rule for the sidebar. An entry is active when the current path is its target,
/// or lies strictly below the target's base path (the part before any `#`).
pub fn is_active(current_path: &str, entry: &NavigationEntry) -> bool {
    if current_path == entry.target_path {
        return true;
    }
    let base = entry
        .target_path
        .split_once('#')
        .map_or(entry.target_path.as_str(), |(base, _)| base);
    current_path
        .strip_prefix(base)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// The menu for `role` with highlight state computed for `current_path`.
pub fn menu(role: Role, current_path: &str) -> Vec<MenuItem> {
    resolve(role)
        .into_iter()
        .map(|entry| MenuItem {
            active: is_active(current_path, &entry),
            entry,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationConfigError {
    #[error("role `{0}` has no navigation entries")]
    EmptyMenu(Role),
    #[error("role `{role}` lands on `{landing}` but its first menu entry is `{first_entry}`")]
    LandingMismatch {
        role: Role,
        landing: &'static str,
        first_entry: &'static str,
    },
    #[error("role `{role}` links to `{path}`, outside the dashboard")]
    OutsideDashboard { role: Role, path: &'static str },
}

/// Verifies the built-in role table. Run once at start-up.
pub fn check_consistency() -> Result<(), NavigationConfigError> {
    check_consistency_of(&ROLE_PROFILES)
}

/// check_consistency_of
///
/// Verifies a role table: non-empty menus, each landing route equal to the first menu
/// entry of its role, and every link under `/dashboard/`. Reports the first violation.
pub fn check_consistency_of(profiles: &[RoleProfile]) -> Result<(), NavigationConfigError> {
    for profile in profiles {
        let first = profile
            .navigation
            .first()
            .ok_or(NavigationConfigError::EmptyMenu(profile.role))?;

        if first.target_path != profile.landing_route {
            return Err(NavigationConfigError::LandingMismatch {
                role: profile.role,
                landing: profile.landing_route,
                first_entry: first.target_path,
            });
        }

        if let Some(outside) = profile
            .navigation
            .iter()
            .find(|def| !def.target_path.starts_with(DASHBOARD_PREFIX))
        {
            return Err(NavigationConfigError::OutsideDashboard {
                role: profile.role,
                path: outside.target_path,
            });
        }
    }
    Ok(())
}
