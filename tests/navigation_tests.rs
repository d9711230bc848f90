use neer_manthan::{
    navigation::{
        self, EntryDef, Icon, NavigationConfigError, NavigationEntry, ROLE_PROFILES, RoleProfile,
        check_consistency, check_consistency_of, is_active, landing_route, menu, resolve,
    },
    session::Role,
};

fn entry(target_path: &str) -> NavigationEntry {
    NavigationEntry {
        label: "Test".to_string(),
        target_path: target_path.to_string(),
        icon: Icon::LayoutDashboard,
        badge: None,
    }
}

#[test]
fn test_resolve_is_deterministic_and_non_empty() {
    for role in Role::ALL {
        let first = resolve(role);
        assert!(!first.is_empty(), "{role} has an empty menu");
        assert_eq!(first, resolve(role));
    }
}

#[test]
fn test_landing_routes() {
    assert_eq!(landing_route(Role::Public), "/dashboard/public");
    assert_eq!(landing_route(Role::Government), "/dashboard/government");
    assert_eq!(landing_route(Role::Dealer), "/dashboard/dealer");
}

#[test]
fn test_landing_route_is_first_menu_entry() {
    for role in Role::ALL {
        assert_eq!(resolve(role)[0].target_path, landing_route(role));
    }
    assert_eq!(check_consistency(), Ok(()));
}

const PUBLIC_MENU: &[EntryDef] = &[
    navigation::entry("Dashboard", "/dashboard/public", Icon::LayoutDashboard),
    navigation::entry("Water Levels", "/dashboard/water-levels", Icon::Droplets),
];

const MENU_WITH_EXTERNAL_LINK: &[EntryDef] = &[
    navigation::entry("Dashboard", "/dashboard/public", Icon::LayoutDashboard),
    navigation::badged("Help", "/help", Icon::AlertTriangle, "New"),
];

fn profile(
    role: Role,
    landing_route: &'static str,
    navigation: &'static [EntryDef],
) -> RoleProfile {
    RoleProfile {
        role,
        label: "Test Role",
        description: "Test profile",
        landing_route,
        navigation,
    }
}

#[test]
fn test_consistent_table_passes() {
    let table = [profile(Role::Public, "/dashboard/public", PUBLIC_MENU)];
    assert_eq!(check_consistency_of(&table), Ok(()));
}

#[test]
fn test_empty_menu_is_rejected() {
    let table = [
        profile(Role::Public, "/dashboard/public", PUBLIC_MENU),
        profile(Role::Dealer, "/dashboard/dealer", &[]),
    ];

    assert_eq!(
        check_consistency_of(&table),
        Err(NavigationConfigError::EmptyMenu(Role::Dealer))
    );
}

#[test]
fn test_landing_route_that_differs_from_first_entry_is_rejected() {
    let table = [profile(Role::Government, "/dashboard/government", PUBLIC_MENU)];

    assert_eq!(
        check_consistency_of(&table),
        Err(NavigationConfigError::LandingMismatch {
            role: Role::Government,
            landing: "/dashboard/government",
            first_entry: "/dashboard/public",
        })
    );
}

#[test]
fn test_link_outside_dashboard_is_rejected() {
    let table = [profile(Role::Public, "/dashboard/public", MENU_WITH_EXTERNAL_LINK)];

    assert_eq!(
        check_consistency_of(&table),
        Err(NavigationConfigError::OutsideDashboard {
            role: Role::Public,
            path: "/help",
        })
    );
}

#[test]
fn test_every_role_has_exactly_one_profile() {
    for role in Role::ALL {
        let matching = ROLE_PROFILES.iter().filter(|p| p.role == role).count();
        assert_eq!(matching, 1);
        assert_eq!(navigation::profile(role).role, role);
    }
}

#[test]
fn test_government_menu_order_and_badges() {
    let labels_and_badges: Vec<(String, Option<String>)> = resolve(Role::Government)
        .into_iter()
        .map(|entry| (entry.label, entry.badge))
        .collect();

    assert_eq!(
        labels_and_badges,
        vec![
            ("Overview".to_string(), None),
            ("Water Monitoring".to_string(), Some("Live".to_string())),
            ("Drought Prediction".to_string(), None),
            ("Tanker Management".to_string(), Some("8".to_string())),
            ("Analytics".to_string(), None),
            ("Alerts".to_string(), Some("3".to_string())),
        ]
    );
}

#[test]
fn test_dealer_menu_uses_fragment_targets() {
    let paths: Vec<String> = resolve(Role::Dealer)
        .into_iter()
        .map(|entry| entry.target_path)
        .collect();

    assert_eq!(
        paths,
        vec![
            "/dashboard/dealer",
            "/dashboard/dealer#orders",
            "/dashboard/dealer#routes",
            "/dashboard/dealer#dispatch",
        ]
    );
}

#[test]
fn test_public_menu_has_no_badges() {
    assert!(resolve(Role::Public).iter().all(|entry| entry.badge.is_none()));
}

// --- Active Highlighting ---

#[test]
fn test_exact_path_is_active() {
    assert!(is_active("/dashboard/water-levels", &entry("/dashboard/water-levels")));
}

#[test]
fn test_descendant_path_is_active() {
    assert!(is_active("/dashboard/dealer/orders", &entry("/dashboard/dealer")));
}

#[test]
fn test_fragment_entry_is_active_for_descendants_of_its_base() {
    assert!(is_active("/dashboard/dealer/routes", &entry("/dashboard/dealer#routes")));
}

#[test]
fn test_fragment_entry_is_not_active_on_its_base_path() {
    assert!(!is_active("/dashboard/dealer", &entry("/dashboard/dealer#orders")));
}

#[test]
fn test_sibling_with_shared_prefix_is_not_active() {
    assert!(!is_active("/dashboard/dealers", &entry("/dashboard/dealer")));
    assert!(!is_active("/dashboard/water", &entry("/dashboard/water-levels")));
}

#[test]
fn test_menu_marks_only_the_current_page() {
    let items = menu(Role::Public, "/dashboard/drought-prediction");
    let active: Vec<&str> = items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.entry.label.as_str())
        .collect();

    assert_eq!(active, vec!["Drought Alerts"]);
}
