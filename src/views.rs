//! Composition of the dashboard view models from the data layer. Headline figures that are
//! fixed copy on the dashboards stay fixed here; everything countable is counted.

use rand::Rng;

use crate::{
    error::AppError,
    models::{
        Alert, AlertCounts, AlertKind, DealerDashboard, District, DroughtPredictionPage,
        FleetMetric, GovernmentDashboard, HeadlineFigure, Insight, LoginScreen, NavigationMenu,
        OrderForm, OrderStatus, Priority, PriorityOption, PublicDashboard, QuantityOption,
        ReservoirStatus, RiskBucket, RiskLevel, RoleOption, Severity, ShellView, StatCard,
        StatVariant, TankerOrder, TankerOrderPage, TankerOrderReceipt, TankerOrderRequest,
        WaterLevelsPage,
    },
    navigation::{self, ROLE_PROFILES},
    repository::Repository,
    session::{Identity, Role},
};

pub const APP_NAME: &str = "Neer Manthan";
const TAGLINE: &str = "AI Water Management";
const REGION: &str = "India";
const NOTIFICATION_COUNT: u32 = 3;

/// Litre amounts offered on the tanker order form.
pub const ORDER_QUANTITIES: [u32; 5] = [2000, 5000, 8000, 10000, 12000];

/// Districts a tanker can be ordered to.
pub const ORDER_DISTRICTS: [&str; 8] = [
    "Jaipur",
    "Jodhpur",
    "Chennai",
    "Ahmedabad",
    "Indore",
    "Bengaluru",
    "Pune",
    "Hyderabad",
];

fn stat(
    title: &str,
    value: impl ToString,
    subtitle: Option<&str>,
    variant: StatVariant,
) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        subtitle: subtitle.map(str::to_string),
        variant,
    }
}

fn count_orders(orders: &[TankerOrder], status: OrderStatus) -> usize {
    orders.iter().filter(|order| order.status == status).count()
}

fn count_risk(districts: &[District], level: RiskLevel) -> usize {
    districts
        .iter()
        .filter(|district| district.risk_level == level)
        .count()
}

/// Integer mean rounded half away from zero; `None` for an empty input.
fn rounded_mean(values: impl IntoIterator<Item = u32>) -> Option<u32> {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), value| (sum + u64::from(value), count + 1));
    if count == 0 {
        return None;
    }
    Some((sum as f64 / count as f64).round() as u32)
}

/// Groups digits in thousands, `12000` -> `12,000`.
fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn shell(identity: &Identity, current_path: &str) -> ShellView {
    ShellView {
        app_name: APP_NAME.to_string(),
        tagline: TAGLINE.to_string(),
        role: identity.role,
        role_label: navigation::profile(identity.role).label.to_string(),
        display_name: identity.display_name.clone(),
        initial: identity.initial(),
        notifications: NOTIFICATION_COUNT,
        region: REGION.to_string(),
        navigation: navigation::menu(identity.role, current_path),
    }
}

pub fn navigation_menu(role: Role, current_path: &str) -> NavigationMenu {
    NavigationMenu {
        role,
        landing_route: navigation::landing_route(role).to_string(),
        entries: navigation::menu(role, current_path),
    }
}

pub fn login_screen() -> LoginScreen {
    LoginScreen {
        app_name: APP_NAME.to_string(),
        headline: "AI Powered Drought Prediction & Smart Water Tanker Management".to_string(),
        summary: "Leveraging satellite data, DWLR sensors, and machine learning to predict \
                  droughts and efficiently manage water distribution across districts."
            .to_string(),
        figures: [
            ("750+", "Districts Monitored"),
            ("1.2K", "DWLR Sensors"),
            ("98.5%", "Prediction Accuracy"),
        ]
        .into_iter()
        .map(|(value, label)| HeadlineFigure {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect(),
        roles: ROLE_PROFILES
            .iter()
            .map(|profile| RoleOption {
                value: profile.role,
                label: profile.label.to_string(),
                description: profile.description.to_string(),
            })
            .collect(),
        default_role: Role::Public,
        notice: "This is a demo system. Enter any name to proceed.".to_string(),
    }
}

pub async fn public_dashboard(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
) -> PublicDashboard {
    PublicDashboard {
        shell: shell(identity, current_path),
        title: "Water Status Dashboard".to_string(),
        subtitle: "Real-time groundwater levels, drought alerts, and tanker ordering for your area"
            .to_string(),
        stats: vec![
            stat(
                "Ground Water Level",
                "47.2%",
                Some("Across monitored districts"),
                StatVariant::Primary,
            ),
            stat(
                "Active Alerts",
                "5",
                Some("2 critical, 3 warning"),
                StatVariant::Destructive,
            ),
            stat(
                "Temperature",
                "38.5 C",
                Some("Regional average"),
                StatVariant::Warning,
            ),
        ],
        districts: repo.districts().await.into_iter().take(6).collect(),
        alerts: repo.alerts().await.into_iter().take(3).collect(),
        reservoirs: repo
            .reservoirs()
            .await
            .iter()
            .take(4)
            .map(ReservoirStatus::from)
            .collect(),
    }
}

fn alert_counts(alerts: &[Alert]) -> AlertCounts {
    let count = |kind: AlertKind| alerts.iter().filter(|alert| alert.kind == kind).count();
    AlertCounts {
        critical: count(AlertKind::Critical),
        warning: count(AlertKind::Warning),
        info: count(AlertKind::Info),
    }
}

pub async fn government_dashboard(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
) -> GovernmentDashboard {
    let districts = repo.districts().await;
    let orders = repo.tanker_orders().await;
    let alerts = repo.alerts().await;

    let critical = count_risk(&districts, RiskLevel::Critical);
    let high = count_risk(&districts, RiskLevel::High);
    let zones_subtitle = format!("{critical} critical, {high} high");

    GovernmentDashboard {
        shell: shell(identity, current_path),
        title: "Government Command Center".to_string(),
        subtitle: "National water overview with AI-driven drought prediction and tanker management"
            .to_string(),
        stats: vec![
            stat("Districts Monitored", "750", Some("All India"), StatVariant::Default),
            stat(
                "Critical Zones",
                critical + high,
                Some(zones_subtitle.as_str()),
                StatVariant::Destructive,
            ),
            stat("Active Tankers", "342", Some("Across 18 states"), StatVariant::Primary),
            stat("Population Affected", "2.8M", Some("In drought zones"), StatVariant::Default),
        ],
        rainfall: repo.rainfall().await,
        risk_distribution: RiskLevel::ALL
            .into_iter()
            .map(|level| RiskBucket {
                level,
                count: count_risk(&districts, level),
            })
            .collect(),
        consumption: repo.consumption().await,
        reservoirs: repo
            .reservoirs()
            .await
            .iter()
            .map(ReservoirStatus::from)
            .collect(),
        predictions: repo.drought_predictions().await,
        tanker_stats: vec![
            stat("Total Tankers", "342", None, StatVariant::Primary),
            stat("Active Dispatches", "156", None, StatVariant::Default),
            stat(
                "Water Purchased",
                "2.4M L",
                Some("From corporations today"),
                StatVariant::Default,
            ),
        ],
        pending_orders: count_orders(&orders, OrderStatus::Pending),
        orders,
        alert_counts: alert_counts(&alerts),
        alerts,
    }
}

pub async fn dealer_dashboard(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
) -> DealerDashboard {
    let orders = repo.tanker_orders().await;

    DealerDashboard {
        shell: shell(identity, current_path),
        title: "Tanker Operations".to_string(),
        subtitle: "Manage incoming orders, route allocation, and dispatch status".to_string(),
        stats: vec![
            stat(
                "Pending Orders",
                count_orders(&orders, OrderStatus::Pending),
                Some("Awaiting dispatch"),
                StatVariant::Warning,
            ),
            stat(
                "In Transit",
                count_orders(&orders, OrderStatus::Dispatched),
                Some("Currently delivering"),
                StatVariant::Primary,
            ),
            stat(
                "Delivered Today",
                count_orders(&orders, OrderStatus::Delivered),
                Some("Successfully completed"),
                StatVariant::Success,
            ),
            stat(
                "Govt. Purchase",
                "48K L",
                Some("Total water purchased today"),
                StatVariant::Default,
            ),
        ],
        orders,
        routes: repo.tanker_routes().await,
        fleet: [
            ("Fleet Utilization", "78%", 78, "18 of 23 tankers active"),
            ("Avg Delivery Time", "2h 15m", 65, "Target: 2h 00m"),
            ("Water Delivered", "124K L", 82, "Daily target: 150K L"),
        ]
        .into_iter()
        .map(|(label, value, progress, note)| FleetMetric {
            label: label.to_string(),
            value: value.to_string(),
            progress,
            note: note.to_string(),
        })
        .collect(),
        timeline: repo.dispatch_timeline().await,
    }
}

/// Distinct states in first-seen order.
pub fn states_of(districts: &[District]) -> Vec<String> {
    let mut states: Vec<String> = Vec::new();
    for district in districts {
        if !states.contains(&district.state) {
            states.push(district.state.clone());
        }
    }
    states
}

/// filter_districts
///
/// Narrows districts to one state. `None`, an empty string and `"all"` keep everything.
pub fn filter_districts(districts: Vec<District>, state: Option<&str>) -> Vec<District> {
    match state {
        None | Some("") | Some("all") => districts,
        Some(state) => districts
            .into_iter()
            .filter(|district| district.state == state)
            .collect(),
    }
}

pub async fn water_levels_page(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
    state: Option<&str>,
) -> WaterLevelsPage {
    let all = repo.districts().await;
    let states = states_of(&all);
    let districts = filter_districts(all, state);
    let sensors = repo.sensors().await;

    let average_level = rounded_mean(districts.iter().map(|district| district.water_level));
    let critical = count_risk(&districts, RiskLevel::Critical);
    let average_display =
        average_level.map_or_else(|| "-".to_string(), |level| format!("{level}%"));

    WaterLevelsPage {
        shell: shell(identity, current_path),
        title: "Water Level Monitoring".to_string(),
        subtitle: "Real-time groundwater and surface water monitoring with DWLR sensors"
            .to_string(),
        states,
        selected_state: state
            .filter(|state| !state.is_empty() && *state != "all")
            .map(str::to_string),
        average_level,
        stats: vec![
            stat(
                "Average Level",
                average_display,
                Some("Across selected area"),
                StatVariant::Primary,
            ),
            stat("Critical Zones", critical, Some("Immediate attention"), StatVariant::Destructive),
            stat("DWLR Sensors", sensors.len(), Some("Active sensors"), StatVariant::Default),
            stat("Data Freshness", "2 min", Some("Last update"), StatVariant::Success),
        ],
        districts,
        alerts: repo
            .alerts()
            .await
            .into_iter()
            .filter(|alert| matches!(alert.kind, AlertKind::Critical | AlertKind::Warning))
            .take(4)
            .collect(),
        sensors,
    }
}

pub async fn drought_prediction_page(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
) -> DroughtPredictionPage {
    let predictions = repo.drought_predictions().await;
    let average_probability =
        rounded_mean(predictions.iter().map(|prediction| prediction.probability)).unwrap_or(0);
    let high_risk_zones = predictions
        .iter()
        .filter(|prediction| matches!(prediction.severity, Severity::Extreme | Severity::Severe))
        .count();

    DroughtPredictionPage {
        shell: shell(identity, current_path),
        title: "Drought Prediction".to_string(),
        subtitle: "AI-powered drought forecasting using weather, soil moisture, and historical data"
            .to_string(),
        average_probability,
        high_risk_zones,
        stats: vec![
            stat(
                "Avg Drought Risk",
                format!("{average_probability}%"),
                Some("Across monitored areas"),
                StatVariant::Warning,
            ),
            stat(
                "High Risk Zones",
                high_risk_zones,
                Some("Extreme/Severe rating"),
                StatVariant::Destructive,
            ),
            stat("Avg Temperature", "38.5 C", Some("Above normal by 2.3 C"), StatVariant::Default),
            stat("Monsoon Deficit", "12%", Some("Below 30-year average"), StatVariant::Default),
        ],
        heatmap: predictions.iter().take(4).cloned().collect(),
        rainfall: repo.rainfall().await,
        insights: [
            (
                "High Alert",
                "Jodhpur and Indore districts show extreme drought probability exceeding 80%. \
                 Immediate water conservation measures recommended.",
            ),
            (
                "Monsoon Outlook",
                "AI models predict 12% below-normal monsoon for western regions. Eastern and \
                 northeastern regions expected to receive normal rainfall.",
            ),
            (
                "AI Recommendation",
                "Pre-position water tankers in high-risk districts. Activate groundwater \
                 recharge programs in moderate-risk zones.",
            ),
        ]
        .into_iter()
        .map(|(title, message)| Insight {
            title: title.to_string(),
            message: message.to_string(),
        })
        .collect(),
        predictions,
    }
}

pub fn order_form() -> OrderForm {
    OrderForm {
        districts: ORDER_DISTRICTS.iter().map(|district| district.to_string()).collect(),
        quantities: ORDER_QUANTITIES
            .into_iter()
            .map(|litres| QuantityOption {
                litres,
                label: format!("{} Litres", thousands(litres)),
            })
            .collect(),
        priorities: Priority::ALL
            .into_iter()
            .map(|priority| PriorityOption {
                value: priority,
                label: format!("{} - {}", priority_name(priority), priority.window()),
            })
            .collect(),
    }
}

fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
        Priority::Critical => "Critical",
    }
}

pub async fn tanker_order_page(
    repo: &dyn Repository,
    identity: &Identity,
    current_path: &str,
) -> TankerOrderPage {
    let history = repo.tanker_orders().await;
    let subtitle = match identity.role {
        Role::Public => "Request a water tanker delivery for your area",
        Role::Government | Role::Dealer => "Monitor and manage all tanker orders",
    };

    TankerOrderPage {
        shell: shell(identity, current_path),
        title: "Water Tanker Orders".to_string(),
        subtitle: subtitle.to_string(),
        form: order_form(),
        pending: count_orders(&history, OrderStatus::Pending),
        dispatched: count_orders(&history, OrderStatus::Dispatched),
        history,
    }
}

/// tanker_order_receipt
///
/// Validates a submitted order form and acknowledges it. The reference number is drawn
/// from 100..=999 in the `ORD-2024-NNN` scheme the order history uses.
pub fn tanker_order_receipt(request: &TankerOrderRequest) -> Result<TankerOrderReceipt, AppError> {
    let required = [
        ("name", &request.name),
        ("phone number", &request.phone),
        ("delivery address", &request.address),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::Validation(format!("Please enter your {field}.")));
    }

    let district = ORDER_DISTRICTS
        .iter()
        .find(|district| district.eq_ignore_ascii_case(request.district.trim()))
        .ok_or_else(|| {
            AppError::Validation(format!("Tankers cannot be ordered to `{}`.", request.district))
        })?;

    if !ORDER_QUANTITIES.contains(&request.quantity) {
        return Err(AppError::Validation(format!(
            "{} litres is not an available tanker size.",
            request.quantity
        )));
    }

    let reference: u32 = rand::thread_rng().gen_range(100..=999);
    Ok(TankerOrderReceipt {
        order_id: format!("ORD-2024-{reference}"),
        district: district.to_string(),
        quantity: request.quantity,
        priority: request.priority,
        message: "Your tanker request has been submitted. You will receive a confirmation \
                  shortly."
            .to_string(),
    })
}
