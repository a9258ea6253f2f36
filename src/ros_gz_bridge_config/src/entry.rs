//! Single bridge entry parsing

use crate::{
    bridge::{BridgeDirection, BridgeSpec},
    error::EntryError,
    yaml::{Entity, EntityExt, YamlEntity},
};
use serde_yaml::Value;

pub const TOPIC_NAME: &str = "topic_name";
pub const ROS_TOPIC_NAME: &str = "ros_topic_name";
pub const GZ_TOPIC_NAME: &str = "gz_topic_name";
pub const ROS_TYPE_NAME: &str = "ros_type_name";
pub const GZ_TYPE_NAME: &str = "gz_type_name";
pub const DIRECTION: &str = "direction";
pub const PUBLISHER_QUEUE: &str = "publisher_queue_size";
pub const SUBSCRIBER_QUEUE: &str = "subscriber_queue_size";
pub const LAZY: &str = "lazy";

// Older configs spell the queue keys without the `_size` suffix
const PUBLISHER_QUEUE_ALIAS: &str = "publisher_queue";
const SUBSCRIBER_QUEUE_ALIAS: &str = "subscriber_queue";

/// Parse one sequence entry, logging the reason on failure
pub fn parse_entry(node: &Value) -> Option<BridgeSpec> {
    match try_parse_entry(node) {
        Ok(spec) => Some(spec),
        Err(e) => {
            log::error!("Could not parse entry: {}", e);
            None
        }
    }
}

/// Parse one sequence entry into a [`BridgeSpec`].
///
/// Checks run in a fixed order and the first violation wins: map shape,
/// `topic_name` exclusivity against each side-specific name, presence of both
/// type names, then the direction token.
pub fn try_parse_entry(node: &Value) -> Result<BridgeSpec, EntryError> {
    let entity = YamlEntity::new(node)?;

    for side in [ROS_TOPIC_NAME, GZ_TOPIC_NAME] {
        if entity.has(TOPIC_NAME) && entity.has(side) {
            return Err(EntryError::MutuallyExclusive {
                first: TOPIC_NAME,
                second: side,
            });
        }
    }

    if !entity.has(ROS_TYPE_NAME) || !entity.has(GZ_TYPE_NAME) {
        return Err(EntryError::MissingTypeNames {
            ros: ROS_TYPE_NAME,
            gz: GZ_TYPE_NAME,
        });
    }

    let direction = match entity.get_attr_str(DIRECTION)? {
        Some(token) => token.parse::<BridgeDirection>()?,
        None => BridgeDirection::default(),
    };

    let (ros_topic_name, gz_topic_name) = resolve_topic_names(&entity)?;
    let ros_type_name = required(&entity, ROS_TYPE_NAME)?;
    let gz_type_name = required(&entity, GZ_TYPE_NAME)?;

    let mut spec = BridgeSpec::new(ros_topic_name, gz_topic_name, ros_type_name, gz_type_name);
    spec.direction = direction;

    if let Some(size) = queue_size(&entity, PUBLISHER_QUEUE, PUBLISHER_QUEUE_ALIAS)? {
        spec.publisher_queue_size = size;
    }
    if let Some(size) = queue_size(&entity, SUBSCRIBER_QUEUE, SUBSCRIBER_QUEUE_ALIAS)? {
        spec.subscriber_queue_size = size;
    }
    if let Some(lazy) = entity.get_bool(LAZY)? {
        spec.is_lazy = lazy;
    }

    Ok(spec)
}

/// Decide the (ROS, Gazebo) topic names from whichever name fields are present.
///
/// A single declared name is mirrored on both sides; only when both
/// side-specific names are given may the two differ.
fn resolve_topic_names<E: Entity>(entity: &E) -> Result<(String, String), EntryError> {
    let topic = non_empty(entity, TOPIC_NAME)?;
    let ros = non_empty(entity, ROS_TOPIC_NAME)?;
    let gz = non_empty(entity, GZ_TOPIC_NAME)?;

    match (topic, ros, gz) {
        (Some(name), _, _) => Ok((name.clone(), name)),
        (None, Some(ros), None) => Ok((ros.clone(), ros)),
        (None, None, Some(gz)) => Ok((gz.clone(), gz)),
        (None, Some(ros), Some(gz)) => Ok((ros, gz)),
        (None, None, None) => Err(EntryError::MissingTopicName),
    }
}

fn required<E: Entity>(entity: &E, field: &'static str) -> Result<String, EntryError> {
    non_empty(entity, field)?.ok_or(EntryError::MissingTypeNames {
        ros: ROS_TYPE_NAME,
        gz: GZ_TYPE_NAME,
    })
}

fn non_empty<E: Entity>(entity: &E, field: &'static str) -> Result<Option<String>, EntryError> {
    match entity.get_attr_str(field)? {
        Some(value) if value.is_empty() => Err(EntryError::EmptyField { field }),
        value => Ok(value),
    }
}

fn queue_size<E: Entity>(
    entity: &E,
    field: &str,
    alias: &str,
) -> Result<Option<usize>, EntryError> {
    match entity.get_attr::<usize>(field)? {
        Some(size) => Ok(Some(size)),
        None => entity.get_attr::<usize>(alias),
    }
}
