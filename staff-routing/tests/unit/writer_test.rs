use super::*;
use crate::helpers::{create_test_data, create_test_solution};

fn write_to_string(data: &RoutingData, solution: &RoutingSolution) -> String {
    let mut buffer = Vec::new();
    write_routing_solution(&mut buffer, data, solution).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn can_write_routes_with_legs_and_totals() {
    let data = create_test_data(3, vec![2, 2]);
    let solution = create_test_solution(&data, vec![vec![4, 1, 2, 0], vec![5, 3, 0]], vec![]);

    let result = write_to_string(&data, &solution);

    assert_eq!(
        result,
        "Total staff: 3\n\
         Total vehicle capacity: 4\n\n\
         ------ Vehicle 0 (capacity: 2) ------\n\n \
         #1 : 4 -> 1 (distance: 2.00 km)\n \
         #2 : 1 -> 2 (distance: 1.00 km)\n \
         #3 : 2 -> 0 (distance: 2.00 km)\n\
         Total distance: 5.00 km\n\
         Total Load: 2\n\n\
         ------ Vehicle 1 (capacity: 2) ------\n\n \
         #1 : 5 -> 3 (distance: 5.00 km)\n \
         #2 : 3 -> 0 (distance: 3.00 km)\n\
         Total distance: 8.00 km\n\
         Total Load: 1\n\n\
         Total distance of all routes: 13.00 km\n"
    );
}

#[test]
fn can_write_unassigned_staff() {
    let data = create_test_data(3, vec![1]);
    let solution = create_test_solution(&data, vec![vec![4, 1, 0]], vec![2, 3]);

    let result = write_to_string(&data, &solution);

    assert!(result.contains("Unassigned staff: [2, 3]\n"));
    assert!(result.ends_with("Total distance of all routes: 3.00 km\n"));
}

#[test]
fn can_write_unused_vehicle() {
    let data = create_test_data(0, vec![4]);
    let solution = create_test_solution(&data, vec![vec![1, 0]], vec![]);

    let result = write_to_string(&data, &solution);

    assert!(result.contains("------ Vehicle 0 (capacity: 4) ------\n\n #1 : 1 -> 0 (distance: 1.00 km)\n"));
    assert!(result.contains("Total Load: 0\n"));
}

parameterized_test! {can_format_km, (distance, expected), {
    assert_eq!(format_km(distance), expected);
}}

can_format_km! {
    case01_zero: (0, "0.00 km"),
    case02_meters: (1234, "1.23 km"),
    case03_rounds: (1999, "2.00 km"),
}
