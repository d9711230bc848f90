use crate::{
    fixtures,
    models::{
        Alert, ConsumptionPoint, DispatchEvent, District, DroughtPrediction, RainfallPoint,
        Reservoir, SensorReading, TankerOrder, TankerRoute,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

/// Repository Trait
///
/// Read-only access to the water-resource data the dashboards display. Handlers only see
/// this contract, so the mock data set can later be swapped for a live source without
/// touching the views.
///
/// **Send + Sync + async_trait** make the trait object (`Arc<dyn Repository>`) usable across
/// Axum's asynchronous task boundaries.
#[async_trait]
pub trait Repository: Send + Sync {
    async fn districts(&self) -> Vec<District>;
    async fn reservoirs(&self) -> Vec<Reservoir>;
    async fn rainfall(&self) -> Vec<RainfallPoint>;
    async fn consumption(&self) -> Vec<ConsumptionPoint>;
    async fn drought_predictions(&self) -> Vec<DroughtPrediction>;
    async fn sensors(&self) -> Vec<SensorReading>;
    async fn tanker_orders(&self) -> Vec<TankerOrder>;
    async fn alerts(&self) -> Vec<Alert>;
    async fn tanker_routes(&self) -> Vec<TankerRoute>;
    async fn dispatch_timeline(&self) -> Vec<DispatchEvent>;
}

/// RepositoryState
///
/// The concrete type used to share the data layer across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// FixtureRepository
///
/// Serves the static mock data set.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository;

impl FixtureRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Repository for FixtureRepository {
    async fn districts(&self) -> Vec<District> {
        fixtures::districts()
    }

    async fn reservoirs(&self) -> Vec<Reservoir> {
        fixtures::reservoirs()
    }

    async fn rainfall(&self) -> Vec<RainfallPoint> {
        fixtures::rainfall()
    }

    async fn consumption(&self) -> Vec<ConsumptionPoint> {
        fixtures::consumption()
    }

    async fn drought_predictions(&self) -> Vec<DroughtPrediction> {
        fixtures::drought_predictions()
    }

    async fn sensors(&self) -> Vec<SensorReading> {
        fixtures::sensors()
    }

    async fn tanker_orders(&self) -> Vec<TankerOrder> {
        fixtures::tanker_orders()
    }

    async fn alerts(&self) -> Vec<Alert> {
        fixtures::alerts()
    }

    async fn tanker_routes(&self) -> Vec<TankerRoute> {
        fixtures::tanker_routes()
    }

    async fn dispatch_timeline(&self) -> Vec<DispatchEvent> {
        fixtures::dispatch_timeline()
    }
}
