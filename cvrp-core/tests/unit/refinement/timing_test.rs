use super::*;
use crate::helpers::models::{raw_stops, stops_of, test_customer, test_matrix, test_route};

#[test]
fn can_wait_for_window_opening() {
    let customers = vec![test_customer("c1", 50., 0., 1.).with_time_window(100., 110.)];
    let matrix = test_matrix(&customers);

    let schedule = simulate_schedule(&stops_of(&[0, 1, 0]), &customers, &matrix);

    assert!(schedule.is_feasible());
    assert_eq!(schedule.arrivals[1], 100.);
    assert_eq!(schedule.arrivals[2], 150.);
}

#[test]
fn can_detect_violation_position() {
    let customers = vec![test_customer("c1", 10., 0., 1.).with_time_window(0., 5.)];
    let matrix = test_matrix(&customers);

    let schedule = simulate_schedule(&stops_of(&[0, 1, 0]), &customers, &matrix);

    assert_eq!(schedule.violation, Some(1));
    assert_eq!(schedule.arrivals[1], 10.);
}

#[test]
fn can_account_for_service_time() {
    let customers = vec![
        test_customer("c1", 10., 0., 1.).with_service_time(20.),
        test_customer("c2", 20., 0., 1.).with_time_window(0., 35.),
    ];
    let matrix = test_matrix(&customers);

    let schedule = simulate_schedule(&stops_of(&[0, 1, 2, 0]), &customers, &matrix);
    assert_eq!(schedule.violation, Some(2));
    assert_eq!(schedule.arrivals[2], 40.);

    let customers = vec![
        test_customer("c1", 10., 0., 1.).with_service_time(20.),
        test_customer("c2", 20., 0., 1.).with_time_window(0., 45.),
    ];
    let schedule = simulate_schedule(&stops_of(&[0, 1, 2, 0]), &customers, &test_matrix(&customers));
    assert!(schedule.is_feasible());
    assert_eq!(schedule.arrivals, vec![0., 10., 40., 60.]);
}

#[test]
fn can_split_route_at_violation() {
    // c2 misses its window after serving c1, yet fits alone
    let customers = vec![
        test_customer("c1", 10., 0., 1.).with_service_time(20.),
        test_customer("c2", 20., 0., 1.).with_time_window(0., 25.),
    ];
    let matrix = test_matrix(&customers);

    let repaired = enforce_time_windows(vec![test_route(&[0, 1, 2, 0], &customers)], &customers, &matrix);

    assert_eq!(repaired.len(), 2);
    assert_eq!(raw_stops(&repaired[0].0), vec![0, 1, 0]);
    assert_eq!(raw_stops(&repaired[1].0), vec![0, 2, 0]);
    assert!(repaired.iter().all(|(_, is_feasible)| *is_feasible));
}

#[test]
fn can_emit_best_effort_singleton() {
    let customers = vec![test_customer("c1", 10., 0., 1.).with_time_window(0., 5.)];
    let matrix = test_matrix(&customers);

    let repaired = enforce_time_windows(vec![test_route(&[0, 1, 0], &customers)], &customers, &matrix);

    assert_eq!(repaired.len(), 1);
    assert_eq!(raw_stops(&repaired[0].0), vec![0, 1, 0]);
    assert!(!repaired[0].1);
}

#[test]
fn can_carve_unreachable_first_customer() {
    // c1 cannot be reached in time even directly from the depot, c2 can
    let customers = vec![
        test_customer("c1", 30., 0., 1.).with_time_window(0., 5.),
        test_customer("c2", 10., 0., 1.),
    ];
    let matrix = test_matrix(&customers);

    let repaired = enforce_time_windows(vec![test_route(&[0, 1, 2, 0], &customers)], &customers, &matrix);

    assert_eq!(repaired.len(), 2);
    assert_eq!((raw_stops(&repaired[0].0), repaired[0].1), (vec![0, 1, 0], false));
    assert_eq!((raw_stops(&repaired[1].0), repaired[1].1), (vec![0, 2, 0], true));
}

#[test]
fn can_keep_feasible_route_intact() {
    let customers = vec![
        test_customer("c1", 10., 0., 1.).with_time_window(0., 15.),
        test_customer("c2", 20., 0., 1.).with_time_window(15., 30.),
    ];
    let matrix = test_matrix(&customers);

    let repaired = enforce_time_windows(vec![test_route(&[0, 1, 2, 0], &customers)], &customers, &matrix);

    assert_eq!(repaired.len(), 1);
    assert_eq!(raw_stops(&repaired[0].0), vec![0, 1, 2, 0]);
    assert!(repaired[0].1);
}
