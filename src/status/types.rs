//! Robot status records as served by the fleet status endpoint.

use serde::{Deserialize, Serialize};

/// One robot's last reported state.
///
/// The status service speaks camelCase; PascalCase field names are accepted
/// too because older deployments emit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotStatus {
    #[serde(alias = "RobotId")]
    pub robot_id: String,
    #[serde(alias = "BatteryLevel")]
    pub battery_level: i32,
    #[serde(alias = "X")]
    pub x: f64,
    #[serde(alias = "Y")]
    pub y: f64,
}
