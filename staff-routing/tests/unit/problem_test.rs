use super::*;
use crate::helpers::create_test_data;
use vrp_core::models::common::Profile;

#[test]
fn can_create_transport_from_distance_matrix() {
    let data = create_test_data(3, vec![2, 2]);

    let transport = create_transport(&data).unwrap();

    assert_eq!(transport.distance_approx(&Profile::default(), 0, 3), 3000.);
    assert_eq!(transport.duration_approx(&Profile::default(), 3, 0), 3000.);
    assert_eq!(transport.distance_approx(&Profile::default(), 4, 1), 2000.);
}

#[test]
fn can_reject_non_square_distance_matrix() {
    let mut data = create_test_data(3, vec![2]);
    data.distance_matrix[1].pop();

    assert!(create_transport(&data).is_err());
}

#[test]
fn can_create_job_per_staff_and_vehicle_per_capacity() {
    let data = create_test_data(4, vec![2, 3, 5]);

    let problem = create_problem(&data).unwrap();

    assert_eq!(problem.jobs.all().len(), 4);
    assert_eq!(problem.fleet.vehicles.len(), 3);

    let mut staff =
        problem.jobs.all().iter().filter_map(|job| job.dimens().get_staff_index().copied()).collect::<Vec<_>>();
    staff.sort_unstable();
    assert_eq!(staff, vec![1, 2, 3, 4]);

    let mut vehicles =
        problem.fleet.vehicles.iter().filter_map(|vehicle| vehicle.dimens.get_vehicle_index().copied()).collect::<Vec<_>>();
    vehicles.sort_unstable();
    assert_eq!(vehicles, vec![0, 1, 2]);
}

#[test]
fn can_reject_inconsistent_vehicle_data() {
    let mut data = create_test_data(2, vec![2, 2]);
    data.vehicle_ends.pop();

    assert!(create_problem(&data).is_err());
}
