//! Route planning data model and the placeholder planner

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minutes added per leg of the route
pub const MINUTES_PER_LEG: usize = 15;

/// Kilometres added per leg of the route
pub const KM_PER_LEG: usize = 2;

/// Success message attached to every planned route
pub const ROUTE_BUILT_MESSAGE: &str = "Маршрут построен успешно! (демо-версия)";

/// Route calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub addresses: Vec<String>,
    /// "time" or "distance"; accepted but not consulted by the planner yet
    #[serde(default = "default_optimize_by")]
    pub optimize_by: String,
}

fn default_optimize_by() -> String {
    "time".to_string()
}

/// One stop in the calculated route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub address: String,
    pub order: usize,
    pub estimated_time: String,
    pub distance: String,
}

/// Route calculation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub optimized_route: Vec<RoutePoint>,
    pub total_time: String,
    pub total_distance: String,
    pub message: String,
}

/// Build a route for the requested addresses.
///
/// Placeholder logic until a real optimizer lands: stops keep their input
/// order and the per-stop estimates grow linearly with the stop index.
/// The result is a pure function of the input sequence.
pub fn plan_route(request: &RouteRequest) -> Result<RouteResponse> {
    if request.addresses.is_empty() {
        return Err(Error::invalid_request("Список адресов пуст"));
    }

    let optimized_route: Vec<RoutePoint> = request
        .addresses
        .iter()
        .enumerate()
        .map(|(index, address)| RoutePoint {
            address: address.clone(),
            order: index + 1,
            estimated_time: format_minutes(index * MINUTES_PER_LEG),
            distance: format_kilometres(index * KM_PER_LEG),
        })
        .collect();

    let stops = request.addresses.len();

    Ok(RouteResponse {
        optimized_route,
        total_time: format_minutes(stops * MINUTES_PER_LEG),
        total_distance: format_kilometres(stops * KM_PER_LEG),
        message: ROUTE_BUILT_MESSAGE.to_string(),
    })
}

fn format_minutes(minutes: usize) -> String {
    format!("{} мин", minutes)
}

fn format_kilometres(km: usize) -> String {
    format!("{} км", km)
}
