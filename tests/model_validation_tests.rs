use neer_manthan::{
    fixtures,
    models::{LoginRequest, Priority, Reservoir, StatCard, StatVariant, TankerOrderRequest},
    navigation::{self, Icon},
    session::Role,
};
use serde_json::json;

#[test]
fn test_role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::Government).unwrap(), json!("government"));
    let role: Role = serde_json::from_value(json!("dealer")).unwrap();
    assert_eq!(role, Role::Dealer);
}

#[test]
fn test_login_request_password_is_optional() {
    let request: LoginRequest =
        serde_json::from_value(json!({ "role": "public", "name": "Meena" })).unwrap();

    assert_eq!(request.role, Role::Public);
    assert_eq!(request.password, "");
}

#[test]
fn test_login_request_rejects_unknown_role() {
    let result = serde_json::from_value::<LoginRequest>(json!({ "role": "admin", "name": "Eve" }));
    assert!(result.is_err());
}

#[test]
fn test_alert_kind_is_sent_as_type() {
    let alert = &fixtures::alerts()[0];
    let value = serde_json::to_value(alert).unwrap();

    assert_eq!(value["type"], json!("critical"));
    assert!(value.get("kind").is_none());
    assert_eq!(
        alert.message,
        "Jodhpur district groundwater below critical threshold. Immediate tanker deployment \
         required."
    );
    assert!(!alert.message.contains("  "));
}

#[test]
fn test_menu_item_is_flattened_and_omits_missing_badge() {
    let items = navigation::menu(Role::Government, "/dashboard/government");
    let value = serde_json::to_value(&items).unwrap();

    assert_eq!(
        value[0],
        json!({
            "label": "Overview",
            "target_path": "/dashboard/government",
            "icon": "layout-dashboard",
            "active": true
        })
    );
    assert_eq!(value[1]["badge"], json!("Live"));
}

#[test]
fn test_icon_names_are_kebab_case() {
    assert_eq!(serde_json::to_value(Icon::AlertTriangle).unwrap(), json!("alert-triangle"));
    assert_eq!(serde_json::to_value(Icon::CloudRain).unwrap(), json!("cloud-rain"));
}

#[test]
fn test_stat_card_omits_missing_subtitle() {
    let card = StatCard {
        title: "Total Tankers".to_string(),
        value: "342".to_string(),
        subtitle: None,
        variant: StatVariant::Primary,
    };
    let value = serde_json::to_value(&card).unwrap();

    assert!(value.get("subtitle").is_none());
    assert_eq!(value["variant"], json!("primary"));
}

#[test]
fn test_reservoir_fill_percent_rounds() {
    let percents: Vec<u32> = fixtures::reservoirs()
        .iter()
        .map(Reservoir::fill_percent)
        .collect();

    // Bhakra, Sardar Sarovar, Nagarjuna Sagar, Hirakud, Tungabhadra, Mettur
    assert_eq!(percents, vec![60, 45, 60, 70, 40, 35]);
}

#[test]
fn test_reservoir_with_zero_capacity_is_empty() {
    let reservoir = Reservoir {
        name: "Dry".to_string(),
        state: "Nowhere".to_string(),
        capacity: 0,
        current: 10,
    };
    assert_eq!(reservoir.fill_percent(), 0);
}

#[test]
fn test_tanker_order_request_shape() {
    let request: TankerOrderRequest = serde_json::from_value(json!({
        "name": "Meena",
        "phone": "12345",
        "district": "Pune",
        "address": "Zone 2",
        "quantity": 8000,
        "priority": "critical"
    }))
    .unwrap();

    assert_eq!(request.priority, Some(Priority::Critical));
    assert_eq!(Priority::Critical.window(), "Urgent");
}

#[test]
fn test_tanker_order_request_priority_is_optional() {
    let request: TankerOrderRequest = serde_json::from_value(json!({
        "name": "Meena",
        "phone": "12345",
        "district": "Pune",
        "address": "Zone 2",
        "quantity": 8000
    }))
    .unwrap();

    assert_eq!(request.priority, None);
}

#[test]
fn test_fixture_collections_have_expected_sizes() {
    assert_eq!(fixtures::districts().len(), 12);
    assert_eq!(fixtures::reservoirs().len(), 6);
    assert_eq!(fixtures::rainfall().len(), 12);
    assert_eq!(fixtures::consumption().len(), 12);
    assert_eq!(fixtures::drought_predictions().len(), 8);
    assert_eq!(fixtures::sensors().len(), 6);
    assert_eq!(fixtures::tanker_orders().len(), 8);
    assert_eq!(fixtures::alerts().len(), 5);
    assert_eq!(fixtures::tanker_routes().len(), 5);
    assert_eq!(fixtures::dispatch_timeline().len(), 6);
}
