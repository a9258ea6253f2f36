//! ros_gz_bridge_config library
//!
//! Loads YAML documents describing ROS 2 <-> Gazebo topic bridges into
//! validated [`BridgeSpec`] records. A document is a sequence of maps:
//!
//! ```yaml
//! - topic_name: /clock
//!   ros_type_name: rosgraph_msgs/msg/Clock
//!   gz_type_name: gz.msgs.Clock
//!   direction: GZ_TO_ROS
//! ```
//!
//! Malformed entries are logged and skipped; only syntax errors and
//! unreadable files fail a whole load.

pub mod bridge;
pub mod entry;
pub mod error;
pub mod loader;
pub mod yaml;

pub use bridge::{BridgeDirection, BridgeSpec};
pub use entry::{parse_entry, try_parse_entry};
pub use error::{ConfigError, EntryError, Result};
pub use loader::{
    bridges_from_value, open_config_file, parse_document, read_from_yaml, read_from_yaml_file,
    read_from_yaml_string,
};
