//! Best-robot selection over a roster of status records.
//!
//! [`select_best_robot`] scores every robot by its Euclidean distance to the
//! [`Goal`] and then applies a two-tier policy:
//! - robots within [`NEAR_THRESHOLD`] are ranked by battery level only;
//! - if none are that close, the closest robot overall wins, with battery
//!   level breaking exact distance ties.
//!
//! Ties that survive both keys go to the robot seen first in the roster.

use thiserror::Error;

use crate::status::RobotStatus;

/// Distance (inclusive) under which a robot counts as "near" the goal.
pub const NEAR_THRESHOLD: f64 = 10.0;

/// The coordinate a load has to be picked up from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub x: f64,
    pub y: f64,
}

impl Goal {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A robot annotated with its distance to the current goal.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRobot {
    pub robot_id: String,
    pub battery_level: i32,
    pub distance: f64,
}

impl ScoredRobot {
    fn score(status: &RobotStatus, goal: Goal) -> Self {
        Self {
            robot_id: status.robot_id.clone(),
            battery_level: status.battery_level,
            distance: calculate_distance(goal.x, goal.y, status.x, status.y),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no robot statuses to select from")]
    EmptyInput,
}

/// Planar Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn calculate_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Select the robot to dispatch towards `goal`.
///
/// `statuses` is scored in slice order, so repeated calls with the same
/// roster always resolve ties the same way.
pub fn select_best_robot(
    goal: Goal,
    statuses: &[RobotStatus],
) -> Result<ScoredRobot, SelectionError> {
    let scored: Vec<ScoredRobot> = statuses
        .iter()
        .map(|status| ScoredRobot::score(status, goal))
        .collect();

    let best_near = scored
        .iter()
        .filter(|robot| robot.distance <= NEAR_THRESHOLD)
        .fold(None::<&ScoredRobot>, |best, robot| match best {
            Some(current) if robot.battery_level <= current.battery_level => Some(current),
            _ => Some(robot),
        });

    if let Some(robot) = best_near {
        return Ok(robot.clone());
    }

    // Nothing is close enough: closest wins, battery breaks exact ties.
    scored
        .into_iter()
        .reduce(|current, robot| {
            if robot.distance < current.distance
                || (robot.distance == current.distance
                    && robot.battery_level > current.battery_level)
            {
                robot
            } else {
                current
            }
        })
        .ok_or(SelectionError::EmptyInput)
}
