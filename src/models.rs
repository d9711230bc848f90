use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{navigation::MenuItem, session::Role};

// --- Fixture Records (read-only display inputs) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Critical,
        RiskLevel::High,
        RiskLevel::Moderate,
        RiskLevel::Low,
    ];
}

/// District
///
/// Groundwater status of one monitored district. `water_level` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct District {
    pub name: String,
    pub state: String,
    pub water_level: u32,
    pub risk_level: RiskLevel,
    pub population: u64,
}

/// Reservoir
///
/// Storage of a major reservoir, in million cubic metres (MCM).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Reservoir {
    pub name: String,
    pub state: String,
    pub capacity: u32,
    pub current: u32,
}

impl Reservoir {
    /// Fill level as a whole percentage of capacity, rounded half away from zero.
    pub fn fill_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.current) / f64::from(self.capacity) * 100.0).round() as u32
    }
}

/// Monthly rainfall in millimetres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RainfallPoint {
    pub month: String,
    pub actual: u32,
    pub predicted: u32,
    pub normal: u32,
}

/// Monthly consumption by sector, in million litres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ConsumptionPoint {
    pub month: String,
    pub domestic: u32,
    pub industrial: u32,
    pub agricultural: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Extreme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

/// DroughtPrediction
///
/// A precomputed 30-day drought forecast for a district. `probability` is a percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DroughtPrediction {
    pub district: String,
    pub state: String,
    pub probability: u32,
    pub severity: Severity,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SensorStatus {
    Active,
    Warning,
    Critical,
}

/// SensorReading
///
/// Latest reading of a Digital Water Level Recorder (DWLR). `depth` is in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SensorReading {
    pub id: String,
    pub location: String,
    pub depth: f64,
    pub status: SensorStatus,
    pub last_reading: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum OrderStatus {
    Pending,
    Dispatched,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    /// The delivery window promised for this priority on the order form.
    pub fn window(&self) -> &'static str {
        match self {
            Priority::Low => "Within 48 hours",
            Priority::Medium => "Within 24 hours",
            Priority::High => "Within 12 hours",
            Priority::Critical => "Urgent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TankerOrder {
    pub id: String,
    pub customer: String,
    pub location: String,
    /// Litres.
    pub quantity: u32,
    pub status: OrderStatus,
    pub date: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

/// Alert
///
/// An operational notice. The kind is sent as `type` for the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Alert {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum RouteStatus {
    InTransit,
    Loading,
    Queued,
}

/// TankerRoute
///
/// A dealer's current route allocation for one tanker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TankerRoute {
    pub id: String,
    pub from: String,
    pub to: String,
    pub distance: String,
    pub eta: String,
    pub tanker: String,
    pub status: RouteStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DispatchStatus {
    Dispatched,
    Loading,
    Delivered,
    Queued,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DispatchEvent {
    pub time: String,
    pub action: String,
    pub status: DispatchStatus,
}

// --- Request Payloads ---

/// LoginRequest
///
/// Input of the login form (POST /login). The password is accepted for form parity but
/// never checked, stored or logged.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginRequest {
    pub role: Role,
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// TankerOrderRequest
///
/// Input of the tanker order form (POST /dashboard/tanker-order).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TankerOrderRequest {
    pub name: String,
    pub phone: String,
    pub district: String,
    pub address: String,
    pub quantity: u32,
    /// Optional on the form; absent means no stated urgency.
    #[serde(default)]
    pub priority: Option<Priority>,
}

// --- View Models (Output) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StatVariant {
    Default,
    Primary,
    Warning,
    Destructive,
    Success,
}

/// StatCard
///
/// A headline figure. Values are pre-formatted strings; counts are rendered as digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub variant: StatVariant,
}

/// SessionView
///
/// The current session as seen by the client (GET /session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SessionView {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RoleOption {
    pub value: Role,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct HeadlineFigure {
    pub value: String,
    pub label: String,
}

/// LoginScreen
///
/// Everything the entry screen shows to an anonymous viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct LoginScreen {
    pub app_name: String,
    pub headline: String,
    pub summary: String,
    pub figures: Vec<HeadlineFigure>,
    pub roles: Vec<RoleOption>,
    pub default_role: Role,
    pub notice: String,
}

/// ShellView
///
/// The frame around every dashboard view: who is signed in and the sidebar menu with the
/// current page highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ShellView {
    pub app_name: String,
    pub tagline: String,
    pub role: Role,
    pub role_label: String,
    pub display_name: String,
    pub initial: String,
    pub notifications: u32,
    pub region: String,
    pub navigation: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ReservoirStatus {
    pub name: String,
    pub state: String,
    pub capacity: u32,
    pub current: u32,
    pub percent: u32,
}

impl From<&Reservoir> for ReservoirStatus {
    fn from(reservoir: &Reservoir) -> Self {
        Self {
            name: reservoir.name.clone(),
            state: reservoir.state.clone(),
            capacity: reservoir.capacity,
            current: reservoir.current,
            percent: reservoir.fill_percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RiskBucket {
    pub level: RiskLevel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct AlertCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Insight {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PublicDashboard {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub districts: Vec<District>,
    pub alerts: Vec<Alert>,
    pub reservoirs: Vec<ReservoirStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct GovernmentDashboard {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub rainfall: Vec<RainfallPoint>,
    pub risk_distribution: Vec<RiskBucket>,
    pub consumption: Vec<ConsumptionPoint>,
    pub reservoirs: Vec<ReservoirStatus>,
    pub predictions: Vec<DroughtPrediction>,
    pub tanker_stats: Vec<StatCard>,
    pub pending_orders: usize,
    pub orders: Vec<TankerOrder>,
    pub alert_counts: AlertCounts,
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct FleetMetric {
    pub label: String,
    pub value: String,
    pub progress: u32,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DealerDashboard {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub stats: Vec<StatCard>,
    pub orders: Vec<TankerOrder>,
    pub routes: Vec<TankerRoute>,
    pub fleet: Vec<FleetMetric>,
    pub timeline: Vec<DispatchEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct WaterLevelsPage {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub states: Vec<String>,
    pub selected_state: Option<String>,
    /// `None` when the filter matches no district.
    pub average_level: Option<u32>,
    pub stats: Vec<StatCard>,
    pub districts: Vec<District>,
    pub alerts: Vec<Alert>,
    pub sensors: Vec<SensorReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct DroughtPredictionPage {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub average_probability: u32,
    pub high_risk_zones: usize,
    pub stats: Vec<StatCard>,
    pub heatmap: Vec<DroughtPrediction>,
    pub rainfall: Vec<RainfallPoint>,
    pub insights: Vec<Insight>,
    pub predictions: Vec<DroughtPrediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct QuantityOption {
    pub litres: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PriorityOption {
    pub value: Priority,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct OrderForm {
    pub districts: Vec<String>,
    pub quantities: Vec<QuantityOption>,
    pub priorities: Vec<PriorityOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TankerOrderPage {
    pub shell: ShellView,
    pub title: String,
    pub subtitle: String,
    pub form: OrderForm,
    pub pending: usize,
    pub dispatched: usize,
    pub history: Vec<TankerOrder>,
}

/// TankerOrderReceipt
///
/// Acknowledgement of a submitted order form. The order is not stored or dispatched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct TankerOrderReceipt {
    pub order_id: String,
    pub district: String,
    pub quantity: u32,
    pub priority: Option<Priority>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NavigationMenu {
    pub role: Role,
    pub landing_route: String,
    pub entries: Vec<MenuItem>,
}
