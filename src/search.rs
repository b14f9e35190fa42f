//! The dispatch search: fetch the live roster, pick the best robot for a load.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::selector::{Goal, ScoredRobot, select_best_robot};
use crate::status::StatusSource;

/// Where a load is waiting. `load_id` is carried for logging only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub load_id: String,
    pub x: f64,
    pub y: f64,
}

impl SearchRequest {
    pub fn goal(&self) -> Goal {
        Goal::new(self.x, self.y)
    }
}

/// The robot chosen for a load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub robot_id: String,
    pub battery_level: i32,
    pub distance_to_goal: f64,
}

impl From<ScoredRobot> for SearchResponse {
    fn from(robot: ScoredRobot) -> Self {
        Self {
            robot_id: robot.robot_id,
            battery_level: robot.battery_level,
            distance_to_goal: robot.distance,
        }
    }
}

/// Fetch the roster once and select the best robot for `request`.
///
/// A fetch failure aborts the search before any scoring happens.
pub async fn search_best_robot(
    source: &impl StatusSource,
    request: &SearchRequest,
) -> Result<SearchResponse, DispatchError> {
    let statuses = source.fetch_statuses().await?;
    tracing::info!(
        load_id = %request.load_id,
        robots = statuses.len(),
        x = request.x,
        y = request.y,
        "selecting robot for load"
    );

    let best = select_best_robot(request.goal(), &statuses)?;
    tracing::info!(
        load_id = %request.load_id,
        robot_id = %best.robot_id,
        battery_level = best.battery_level,
        distance = best.distance,
        "robot selected"
    );
    Ok(best.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{RobotStatus, StatusSourceError};
    use std::cell::Cell;

    struct MockSource {
        response: Result<Vec<RobotStatus>, u16>,
        calls: Cell<u32>,
    }

    impl MockSource {
        fn ok(roster: Vec<RobotStatus>) -> Self {
            Self {
                response: Ok(roster),
                calls: Cell::new(0),
            }
        }
        fn err(status: u16) -> Self {
            Self {
                response: Err(status),
                calls: Cell::new(0),
            }
        }
    }

    impl StatusSource for MockSource {
        async fn fetch_statuses(&self) -> Result<Vec<RobotStatus>, StatusSourceError> {
            self.calls.set(self.calls.get() + 1);
            match &self.response {
                Ok(roster) => Ok(roster.clone()),
                Err(status) => Err(StatusSourceError::Status {
                    status: *status,
                    message: "mock error".to_string(),
                }),
            }
        }
    }

    fn robot(id: &str, battery_level: i32, x: f64, y: f64) -> RobotStatus {
        RobotStatus {
            robot_id: id.into(),
            battery_level,
            x,
            y,
        }
    }

    fn request(x: f64, y: f64) -> SearchRequest {
        SearchRequest {
            load_id: "123".into(),
            x,
            y,
        }
    }

    #[tokio::test]
    async fn search_returns_selected_robot_as_response() {
        let source = MockSource::ok(vec![
            robot("1", 99, 92.0, 48.0),
            robot("2", 49, 0.0, 0.0),
            robot("3", 99, 84.0, 91.0),
            robot("4", 37, 2.0, 2.0),
        ]);

        let response = search_best_robot(&source, &request(1.0, 1.0)).await.unwrap();

        assert_eq!(response.robot_id, "2");
        assert_eq!(response.battery_level, 49);
        assert!((response.distance_to_goal - 1.414).abs() < 0.001);
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn load_id_does_not_influence_selection() {
        let source = MockSource::ok(vec![robot("a", 10, 30.0, 0.0), robot("b", 90, 0.0, 40.0)]);
        let mut req = request(0.0, 0.0);
        let first = search_best_robot(&source, &req).await.unwrap();
        req.load_id = "something-else".into();
        let second = search_best_robot(&source, &req).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.robot_id, "a");
    }

    #[tokio::test]
    async fn empty_roster_means_no_candidates() {
        let source = MockSource::ok(vec![]);
        let err = search_best_robot(&source, &request(1.0, 1.0)).await.unwrap_err();
        assert!(matches!(err, DispatchError::NoCandidates));
    }

    #[tokio::test]
    async fn fetch_failure_is_propagated() {
        let source = MockSource::err(502);
        let err = search_best_robot(&source, &request(1.0, 1.0)).await.unwrap_err();
        match err {
            DispatchError::StatusSource(StatusSourceError::Status { status, .. }) => {
                assert_eq!(status, 502)
            }
            other => panic!("expected StatusSource, got {other:?}"),
        }
    }

    #[test]
    fn response_uses_wire_field_names() {
        let response = SearchResponse {
            robot_id: "4".into(),
            battery_level: 37,
            distance_to_goal: 6.5,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"robotId": "4", "batteryLevel": 37, "distanceToGoal": 6.5})
        );
    }

    #[test]
    fn request_deserializes_from_wire_format() {
        let req: SearchRequest =
            serde_json::from_str(r#"{"loadId": "231", "x": 5, "y": -3}"#).unwrap();
        assert_eq!(req.load_id, "231");
        assert_eq!(req.goal(), Goal::new(5.0, -3.0));
    }
}
