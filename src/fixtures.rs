//! The mock water-resource data set. Every collection is built fresh on each call and never
//! mutated afterwards.

use crate::models::{
    Alert, AlertKind, ConsumptionPoint, DispatchEvent, DispatchStatus, District,
    DroughtPrediction, OrderStatus, Priority, RainfallPoint, Reservoir, RiskLevel,
    RouteStatus, SensorReading, SensorStatus, Severity, TankerOrder, TankerRoute, Trend,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn districts() -> Vec<District> {
    [
        ("Jaipur", "Rajasthan", 42, RiskLevel::High, 3_073_350),
        ("Jodhpur", "Rajasthan", 28, RiskLevel::Critical, 1_033_918),
        ("Pune", "Maharashtra", 68, RiskLevel::Moderate, 3_124_458),
        ("Nagpur", "Maharashtra", 55, RiskLevel::Moderate, 2_405_421),
        ("Chennai", "Tamil Nadu", 35, RiskLevel::High, 4_681_087),
        ("Madurai", "Tamil Nadu", 48, RiskLevel::Moderate, 1_016_885),
        ("Ahmedabad", "Gujarat", 38, RiskLevel::High, 5_570_585),
        ("Surat", "Gujarat", 72, RiskLevel::Low, 4_467_797),
        ("Bengaluru", "Karnataka", 45, RiskLevel::Moderate, 8_443_675),
        ("Hyderabad", "Telangana", 52, RiskLevel::Moderate, 6_809_970),
        ("Bhopal", "Madhya Pradesh", 60, RiskLevel::Low, 1_798_218),
        ("Indore", "Madhya Pradesh", 22, RiskLevel::Critical, 1_994_397),
    ]
    .into_iter()
    .map(|(name, state, water_level, risk_level, population)| District {
        name: name.to_string(),
        state: state.to_string(),
        water_level,
        risk_level,
        population,
    })
    .collect()
}

pub fn reservoirs() -> Vec<Reservoir> {
    [
        ("Bhakra Dam", 9621, 5772, "Himachal Pradesh"),
        ("Sardar Sarovar", 9500, 4275, "Gujarat"),
        ("Nagarjuna Sagar", 11472, 6883, "Telangana"),
        ("Hirakud Dam", 8136, 5695, "Odisha"),
        ("Tungabhadra Dam", 3322, 1329, "Karnataka"),
        ("Mettur Dam", 2646, 926, "Tamil Nadu"),
    ]
    .into_iter()
    .map(|(name, capacity, current, state)| Reservoir {
        name: name.to_string(),
        state: state.to_string(),
        capacity,
        current,
    })
    .collect()
}

pub fn rainfall() -> Vec<RainfallPoint> {
    let series: [(u32, u32, u32); 12] = [
        (12, 15, 14),
        (8, 10, 12),
        (15, 18, 16),
        (25, 30, 28),
        (45, 40, 42),
        (180, 160, 175),
        (280, 250, 270),
        (260, 240, 255),
        (170, 180, 165),
        (80, 75, 82),
        (20, 22, 18),
        (10, 12, 11),
    ];

    MONTHS
        .iter()
        .zip(series)
        .map(|(month, (actual, predicted, normal))| RainfallPoint {
            month: month.to_string(),
            actual,
            predicted,
            normal,
        })
        .collect()
}

pub fn consumption() -> Vec<ConsumptionPoint> {
    let series: [(u32, u32, u32); 12] = [
        (1200, 800, 2400),
        (1300, 820, 2600),
        (1500, 850, 3200),
        (1800, 900, 3800),
        (2200, 950, 4200),
        (2000, 880, 3000),
        (1600, 800, 1800),
        (1500, 780, 1600),
        (1400, 790, 2000),
        (1350, 810, 2400),
        (1250, 800, 2200),
        (1200, 790, 2100),
    ];

    MONTHS
        .iter()
        .zip(series)
        .map(|(month, (domestic, industrial, agricultural))| ConsumptionPoint {
            month: month.to_string(),
            domestic,
            industrial,
            agricultural,
        })
        .collect()
}

pub fn drought_predictions() -> Vec<DroughtPrediction> {
    [
        ("Jodhpur", "Rajasthan", 89, Severity::Extreme, Trend::Increasing),
        ("Indore", "Madhya Pradesh", 82, Severity::Severe, Trend::Increasing),
        ("Jaipur", "Rajasthan", 71, Severity::Moderate, Trend::Stable),
        ("Chennai", "Tamil Nadu", 65, Severity::Moderate, Trend::Increasing),
        ("Ahmedabad", "Gujarat", 58, Severity::Moderate, Trend::Decreasing),
        ("Madurai", "Tamil Nadu", 45, Severity::Mild, Trend::Stable),
        ("Bengaluru", "Karnataka", 38, Severity::Mild, Trend::Decreasing),
        ("Nagpur", "Maharashtra", 32, Severity::Mild, Trend::Stable),
    ]
    .into_iter()
    .map(|(district, state, probability, severity, trend)| DroughtPrediction {
        district: district.to_string(),
        state: state.to_string(),
        probability,
        severity,
        trend,
    })
    .collect()
}

pub fn sensors() -> Vec<SensorReading> {
    [
        ("DWLR-001", "Jaipur North", 45.2, SensorStatus::Active, "2 min ago"),
        ("DWLR-002", "Jodhpur East", 62.8, SensorStatus::Active, "5 min ago"),
        ("DWLR-003", "Chennai South", 38.1, SensorStatus::Warning, "1 min ago"),
        ("DWLR-004", "Pune West", 22.4, SensorStatus::Active, "3 min ago"),
        ("DWLR-005", "Ahmedabad Central", 51.6, SensorStatus::Critical, "8 min ago"),
        ("DWLR-006", "Bengaluru North", 33.7, SensorStatus::Active, "1 min ago"),
    ]
    .into_iter()
    .map(|(id, location, depth, status, last_reading)| SensorReading {
        id: id.to_string(),
        location: location.to_string(),
        depth,
        status,
        last_reading: last_reading.to_string(),
    })
    .collect()
}

pub fn tanker_orders() -> Vec<TankerOrder> {
    use OrderStatus::{Delivered, Dispatched, Pending};

    [
        (
            "ORD-2024-001",
            "Rajesh Kumar",
            "Jaipur, Sector 12",
            5000,
            Pending,
            "2026-02-20",
            Priority::High,
        ),
        (
            "ORD-2024-002",
            "Priya Sharma",
            "Jodhpur, Block C",
            10000,
            Dispatched,
            "2026-02-19",
            Priority::Critical,
        ),
        (
            "ORD-2024-003",
            "Amit Patel",
            "Ahmedabad, Ward 7",
            3000,
            Delivered,
            "2026-02-18",
            Priority::Medium,
        ),
        (
            "ORD-2024-004",
            "Sunita Devi",
            "Chennai, Zone 4",
            8000,
            Pending,
            "2026-02-21",
            Priority::High,
        ),
        (
            "ORD-2024-005",
            "Manoj Singh",
            "Indore, Area 3",
            6000,
            Dispatched,
            "2026-02-20",
            Priority::Medium,
        ),
        (
            "ORD-2024-006",
            "Kavita Nair",
            "Bengaluru, Sector 9",
            4000,
            Pending,
            "2026-02-21",
            Priority::Low,
        ),
        (
            "ORD-2024-007",
            "Vikram Reddy",
            "Hyderabad, Block D",
            12000,
            Dispatched,
            "2026-02-19",
            Priority::Critical,
        ),
        (
            "ORD-2024-008",
            "Neha Gupta",
            "Pune, Zone 2",
            2000,
            Delivered,
            "2026-02-17",
            Priority::Low,
        ),
    ]
    .into_iter()
    .map(|(id, customer, location, quantity, status, date, priority)| TankerOrder {
        id: id.to_string(),
        customer: customer.to_string(),
        location: location.to_string(),
        quantity,
        status,
        date: date.to_string(),
        priority,
    })
    .collect()
}

pub fn alerts() -> Vec<Alert> {
    [
        (
            1,
            AlertKind::Critical,
            "Severe Water Shortage",
            "Jodhpur district groundwater below critical threshold. Immediate tanker deployment \
             required.",
            "10 min ago",
        ),
        (
            2,
            AlertKind::Warning,
            "Drought Warning Issued",
            "AI model predicts 89% drought probability for Jodhpur in next 30 days.",
            "25 min ago",
        ),
        (
            3,
            AlertKind::Critical,
            "Reservoir Level Critical",
            "Mettur Dam at 35% capacity. Water rationing advisory issued for downstream districts.",
            "1 hr ago",
        ),
        (
            4,
            AlertKind::Info,
            "Tanker Dispatch Update",
            "12 tankers dispatched to Indore district. ETA: 4 hours.",
            "2 hr ago",
        ),
        (
            5,
            AlertKind::Warning,
            "DWLR Sensor Alert",
            "DWLR-005 in Ahmedabad reports 51.6m depth - approaching danger level.",
            "3 hr ago",
        ),
    ]
    .into_iter()
    .map(|(id, kind, title, message, time)| Alert {
        id,
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
    })
    .collect()
}

pub fn tanker_routes() -> Vec<TankerRoute> {
    use RouteStatus::{InTransit, Loading, Queued};

    [
        ("RT-01", "Central Depot", "Jaipur Sector 12", "24 km", "45 min", "TK-104", InTransit),
        ("RT-02", "East Hub", "Jodhpur Block C", "38 km", "1 hr 10 min", "TK-107", InTransit),
        ("RT-03", "Central Depot", "Ahmedabad Ward 7", "12 km", "25 min", "TK-112", Loading),
        ("RT-04", "South Terminal", "Chennai Zone 4", "31 km", "55 min", "TK-119", Queued),
        ("RT-05", "West Hub", "Indore Area 3", "18 km", "35 min", "TK-121", InTransit),
    ]
    .into_iter()
    .map(|(id, from, to, distance, eta, tanker, status)| TankerRoute {
        id: id.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        distance: distance.to_string(),
        eta: eta.to_string(),
        tanker: tanker.to_string(),
        status,
    })
    .collect()
}

pub fn dispatch_timeline() -> Vec<DispatchEvent> {
    use DispatchStatus::{Delivered, Dispatched, Loading, Queued};

    [
        ("14:32", "TK-107 dispatched to Jodhpur Block C", Dispatched),
        ("13:45", "TK-112 loaded at Central Depot (10,000L)", Loading),
        ("12:20", "TK-104 delivered to Jaipur Sector 12", Delivered),
        ("11:15", "TK-119 queued for Chennai Zone 4", Queued),
        ("10:30", "TK-121 dispatched to Indore Area 3", Dispatched),
        ("09:45", "TK-103 delivered to Nagpur Ward 5", Delivered),
    ]
    .into_iter()
    .map(|(time, action, status)| DispatchEvent {
        time: time.to_string(),
        action: action.to_string(),
        status,
    })
    .collect()
}
