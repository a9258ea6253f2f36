use ros_gz_bridge_config::{
    read_from_yaml, read_from_yaml_file, read_from_yaml_string, BridgeDirection, BridgeSpec,
};
use std::{fs::File, path::PathBuf};

/// Helper to get fixture path from crate tests directory
fn get_fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/config")
        .join(filename)
}

#[test]
fn test_simulation_bridges_fixture() {
    let bridges = read_from_yaml_file(&get_fixture_path("simulation_bridges.yaml")).unwrap();
    assert_eq!(bridges.len(), 4);

    let clock = &bridges[0];
    assert_eq!(clock.ros_topic_name, "/clock");
    assert_eq!(clock.gz_topic_name, "/clock");
    assert_eq!(clock.direction, BridgeDirection::GzToRos);

    let cmd_vel = &bridges[1];
    assert_eq!(cmd_vel.ros_topic_name, "/cmd_vel");
    assert_eq!(cmd_vel.gz_topic_name, "/model/vehicle/cmd_vel");
    assert_eq!(cmd_vel.direction, BridgeDirection::RosToGz);
    assert_eq!(cmd_vel.subscriber_queue_size, 1);
    assert_eq!(cmd_vel.publisher_queue_size, 10);

    let lidar = &bridges[2];
    assert_eq!(lidar.ros_topic_name, "/lidar/points");
    assert_eq!(lidar.gz_topic_name, "/lidar/points");
    assert_eq!(lidar.publisher_queue_size, 5);
    assert!(lidar.is_lazy);

    let chatter = &bridges[3];
    assert_eq!(chatter.direction, BridgeDirection::Bidirectional);
    assert!(!chatter.is_lazy);
}

#[test]
fn test_mixed_validity_keeps_order() {
    let bridges = read_from_yaml_file(&get_fixture_path("mixed_validity.yaml")).unwrap();

    let names: Vec<_> = bridges.iter().map(|b| b.ros_topic_name.as_str()).collect();
    assert_eq!(names, vec!["/first", "/fifth"]);
}

#[test]
fn test_not_a_sequence_fixture() {
    let bridges = read_from_yaml_file(&get_fixture_path("not_a_sequence.yaml")).unwrap();
    assert!(bridges.is_empty());
}

#[test]
fn test_stream_and_string_agree() {
    let path = get_fixture_path("simulation_bridges.yaml");
    let from_stream = read_from_yaml(File::open(&path).unwrap()).unwrap();
    let from_string = read_from_yaml_string(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let from_file = read_from_yaml_file(&path).unwrap();

    assert_eq!(from_stream, from_string);
    assert_eq!(from_stream, from_file);
}

#[test]
fn test_clock_example() {
    let bridges = read_from_yaml_string(
        r#"[{topic_name: "/clock", ros_type_name: "rosgraph_msgs/Clock", gz_type_name: "gz.msgs.Clock"}]"#,
    )
    .unwrap();

    assert_eq!(
        bridges,
        vec![BridgeSpec::new(
            "/clock",
            "/clock",
            "rosgraph_msgs/Clock",
            "gz.msgs.Clock"
        )]
    );
}

#[test]
fn test_asymmetric_lazy_example() {
    let bridges = read_from_yaml_string(
        r#"[{ros_topic_name: "/in", gz_topic_name: "/out", ros_type_name: "A", gz_type_name: "B", direction: "ROS_TO_GZ", lazy: true}]"#,
    )
    .unwrap();

    assert_eq!(bridges.len(), 1);
    assert_eq!(bridges[0].ros_topic_name, "/in");
    assert_eq!(bridges[0].gz_topic_name, "/out");
    assert_eq!(bridges[0].direction, BridgeDirection::RosToGz);
    assert!(bridges[0].is_lazy);
}

#[test]
fn test_bridges_serialize_to_json() {
    let bridges = read_from_yaml_file(&get_fixture_path("simulation_bridges.yaml")).unwrap();
    let json = serde_json::to_string(&bridges).unwrap();

    assert!(json.contains("\"direction\":\"GZ_TO_ROS\""));
    assert!(json.contains("\"direction\":\"ROS_TO_GZ\""));
    assert!(json.contains("\"gz_topic_name\":\"/model/vehicle/cmd_vel\""));
}
