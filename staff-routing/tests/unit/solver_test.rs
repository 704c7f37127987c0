use super::*;
use crate::helpers::{create_test_data, create_test_solution};
use std::sync::Mutex;

fn create_test_settings() -> SolverSettings {
    SolverSettings { max_time: 10, max_generations: Some(50) }
}

fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

#[test]
fn can_calculate_route_load_and_distance() {
    let data = create_test_data(3, vec![2, 2]);

    let route = VehicleRoute::new(&data, 0, vec![4, 1, 2, 0]);

    assert_eq!(route.capacity, 2);
    assert_eq!(route.load, 2);
    assert_eq!(route.legs(&data).collect::<Vec<_>>(), vec![(4, 1, 2000), (1, 2, 1000), (2, 0, 2000)]);
    assert_eq!(route.distance(&data), 5000);
}

#[test]
fn can_calculate_total_distance() {
    let data = create_test_data(3, vec![2, 2]);
    let solution = create_test_solution(&data, vec![vec![4, 1, 2, 0], vec![5, 3, 0]], vec![]);

    assert_eq!(solution.distance(&data), 5000 + 5000 + 3000);
}

#[test]
fn can_solve_problem_with_enough_capacity() {
    let data = create_test_data(4, vec![2, 2]);

    let solution = solve_routing(&data, &create_test_settings(), create_silent_logger()).unwrap();

    assert!(solution.unassigned.is_empty());
    assert_eq!(solution.routes.len(), 2);
    assert_eq!(solution.routes.iter().map(|route| route.load).sum::<i32>(), 4);
    solution.routes.iter().for_each(|route| {
        assert!(route.load <= route.capacity);
        assert_eq!(route.stops.first().copied(), Some(data.vehicle_starts[route.vehicle]));
        assert_eq!(route.stops.last().copied(), Some(data.depot));
    });

    let mut visited = solution.routes.iter().flat_map(|route| route.stops.iter().copied()).collect::<Vec<_>>();
    visited.retain(|idx| data.demands[*idx] > 0);
    visited.sort_unstable();
    assert_eq!(visited, vec![1, 2, 3, 4]);
}

#[test]
fn can_report_unassigned_staff_when_capacity_is_not_enough() {
    let data = create_test_data(4, vec![1, 2]);

    let solution = solve_routing(&data, &create_test_settings(), create_silent_logger()).unwrap();

    assert_eq!(solution.unassigned.len(), 1);
    assert_eq!(solution.routes.iter().map(|route| route.load).sum::<i32>(), 3);
    assert!(solution.routes.iter().all(|route| route.load <= route.capacity));
}

#[test]
fn can_log_solver_result() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = Arc::new({
        let messages = messages.clone();
        move |msg: &str| messages.lock().unwrap().push(msg.to_string())
    });

    solve_routing(&create_test_data(2, vec![2]), &create_test_settings(), logger).unwrap();

    assert!(messages.lock().unwrap().iter().any(|msg| msg.starts_with("solver finished in")));
}
