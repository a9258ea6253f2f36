//! Bridge specification data structures

use crate::error::EntryError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const DEFAULT_PUBLISHER_QUEUE: usize = 10;
pub const DEFAULT_SUBSCRIBER_QUEUE: usize = 10;

/// Which way messages are allowed to flow through a bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeDirection {
    #[default]
    Bidirectional,
    GzToRos,
    RosToGz,
}

impl BridgeDirection {
    pub const BIDIRECTIONAL: &'static str = "BIDIRECTIONAL";
    pub const GZ_TO_ROS: &'static str = "GZ_TO_ROS";
    pub const ROS_TO_GZ: &'static str = "ROS_TO_GZ";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bidirectional => Self::BIDIRECTIONAL,
            Self::GzToRos => Self::GZ_TO_ROS,
            Self::RosToGz => Self::ROS_TO_GZ,
        }
    }

    /// ROS publishers feed Gazebo subscribers
    pub fn is_ros_to_gz(&self) -> bool {
        matches!(self, Self::Bidirectional | Self::RosToGz)
    }

    /// Gazebo publishers feed ROS subscribers
    pub fn is_gz_to_ros(&self) -> bool {
        matches!(self, Self::Bidirectional | Self::GzToRos)
    }

    fn arrow(&self) -> &'static str {
        match self {
            Self::Bidirectional => "<->",
            Self::GzToRos => "<-",
            Self::RosToGz => "->",
        }
    }
}

impl FromStr for BridgeDirection {
    type Err = EntryError;

    /// Tokens are matched case-sensitively; there is no fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::BIDIRECTIONAL => Ok(Self::Bidirectional),
            Self::GZ_TO_ROS => Ok(Self::GzToRos),
            Self::ROS_TO_GZ => Ok(Self::RosToGz),
            other => Err(EntryError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for BridgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated bridge between a ROS topic and a Gazebo topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSpec {
    pub ros_topic_name: String,
    pub gz_topic_name: String,
    pub ros_type_name: String,
    pub gz_type_name: String,
    pub direction: BridgeDirection,
    pub publisher_queue_size: usize,
    pub subscriber_queue_size: usize,
    pub is_lazy: bool,
}

impl BridgeSpec {
    /// Bidirectional bridge with default queue sizes
    pub fn new(
        ros_topic_name: impl Into<String>,
        gz_topic_name: impl Into<String>,
        ros_type_name: impl Into<String>,
        gz_type_name: impl Into<String>,
    ) -> Self {
        Self {
            ros_topic_name: ros_topic_name.into(),
            gz_topic_name: gz_topic_name.into(),
            ros_type_name: ros_type_name.into(),
            gz_type_name: gz_type_name.into(),
            direction: BridgeDirection::default(),
            publisher_queue_size: DEFAULT_PUBLISHER_QUEUE,
            subscriber_queue_size: DEFAULT_SUBSCRIBER_QUEUE,
            is_lazy: false,
        }
    }
}

impl fmt::Display for BridgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} ({}) {} {} ({})]",
            self.ros_topic_name,
            self.ros_type_name,
            self.direction.arrow(),
            self.gz_topic_name,
            self.gz_type_name
        )?;
        if self.is_lazy {
            f.write_str(" lazy")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_tokens() {
        assert_eq!(
            "BIDIRECTIONAL".parse::<BridgeDirection>().unwrap(),
            BridgeDirection::Bidirectional
        );
        assert_eq!(
            "GZ_TO_ROS".parse::<BridgeDirection>().unwrap(),
            BridgeDirection::GzToRos
        );
        assert_eq!(
            "ROS_TO_GZ".parse::<BridgeDirection>().unwrap(),
            BridgeDirection::RosToGz
        );
    }

    #[test]
    fn test_direction_is_case_sensitive() {
        let err = "gz_to_ros".parse::<BridgeDirection>().unwrap_err();
        assert_eq!(err, EntryError::InvalidDirection("gz_to_ros".to_string()));
        assert!(err.to_string().contains("[gz_to_ros]"));
        assert!("".parse::<BridgeDirection>().is_err());
    }

    #[test]
    fn test_direction_flows() {
        assert!(BridgeDirection::Bidirectional.is_ros_to_gz());
        assert!(BridgeDirection::Bidirectional.is_gz_to_ros());
        assert!(BridgeDirection::RosToGz.is_ros_to_gz());
        assert!(!BridgeDirection::RosToGz.is_gz_to_ros());
        assert!(BridgeDirection::GzToRos.is_gz_to_ros());
        assert!(!BridgeDirection::GzToRos.is_ros_to_gz());
    }

    #[test]
    fn test_new_uses_defaults() {
        let spec = BridgeSpec::new("/clock", "/clock", "rosgraph_msgs/msg/Clock", "gz.msgs.Clock");
        assert_eq!(spec.direction, BridgeDirection::Bidirectional);
        assert_eq!(spec.publisher_queue_size, DEFAULT_PUBLISHER_QUEUE);
        assert_eq!(spec.subscriber_queue_size, DEFAULT_SUBSCRIBER_QUEUE);
        assert!(!spec.is_lazy);
    }

    #[test]
    fn test_display_summary() {
        let mut spec = BridgeSpec::new("/in", "/out", "std_msgs/msg/String", "gz.msgs.StringMsg");
        spec.direction = BridgeDirection::RosToGz;
        assert_eq!(
            spec.to_string(),
            "[/in (std_msgs/msg/String) -> /out (gz.msgs.StringMsg)]"
        );

        spec.is_lazy = true;
        assert!(spec.to_string().ends_with(" lazy"));
    }

    #[test]
    fn test_serialize_direction_token() {
        let spec = BridgeSpec::new("/a", "/b", "A", "B");
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"direction\":\"BIDIRECTIONAL\""));
        assert!(json.contains("\"publisher_queue_size\":10"));
        assert!(json.contains("\"is_lazy\":false"));
    }
}
