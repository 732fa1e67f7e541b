//! End-to-end engine tests against the floor scoring sheet.

use linetally_engine::{rank_floor, rank_floor_default, MarkTables};
use linetally_test_utils::line_aggregate;

#[test]
fn two_line_floor_matches_scoring_sheet() {
    let input = vec![
        line_aggregate("Line-1")
            .production(1000.0, 1000.0, 80.0)
            .quality(500.0, 2.0)
            .manpower(40.0, 2.0)
            .build(),
        line_aggregate("Line-2")
            .production(1000.0, 500.0, 60.0)
            .quality(200.0, 10.0)
            .manpower(40.0, 8.0)
            .build(),
    ];

    let out = rank_floor_default(&input).unwrap();
    assert_eq!(out.len(), 2);

    let line1 = &out[0];
    assert_eq!(line1.label, "Line-1");
    assert_eq!(line1.place, 1);
    assert_eq!(line1.amount_hit_rate_percent, 100.0);
    assert_eq!(line1.amount_marks, 25);
    assert_eq!(line1.efficiency_hit_rate_percent, 80.0);
    assert_eq!(line1.efficiency_marks, 10);
    assert_eq!(line1.absenteeism_percent, 5.0);
    assert_eq!(line1.absenteeism_marks, 15);
    assert_eq!(line1.rejection_percent, 2.0);
    assert_eq!(line1.rejection_marks, 25);
    assert_eq!(line1.total_marks, 75);

    // Rank 2 still sits inside every top bucket (ceilings 2, 2, 6, 4),
    // so a two-line floor ties on total marks and the placement cascade
    // decides on absenteeism.
    let line2 = &out[1];
    assert_eq!(line2.label, "Line-2");
    assert_eq!(line2.place, 2);
    assert_eq!(line2.amount_hit_rate_percent, 50.0);
    assert_eq!(line2.amount_marks, 25);
    assert_eq!(line2.efficiency_hit_rate_percent, 60.0);
    assert_eq!(line2.efficiency_marks, 10);
    assert_eq!(line2.absenteeism_percent, 20.0);
    assert_eq!(line2.absenteeism_marks, 15);
    assert_eq!(line2.rejection_percent, 10.0);
    assert_eq!(line2.rejection_marks, 25);
    assert_eq!(line2.total_marks, 75);
}

#[test]
fn inactive_line_scores_zero_and_places_last() {
    let input = vec![
        line_aggregate("Busy")
            .production(100.0, 90.0, 70.0)
            .quality(50.0, 4.0)
            .manpower(20.0, 1.0)
            .build(),
        line_aggregate("Idle").manpower(20.0, 5.0).build(),
    ];

    let out = rank_floor_default(&input).unwrap();
    let idle = out.iter().find(|r| r.label == "Idle").unwrap();
    assert!(!idle.active);
    assert_eq!(idle.total_marks, 0);
    assert_eq!(idle.place, 2);
}

#[test]
fn determinism_across_invocations_and_input_order() {
    let a = line_aggregate("A")
        .production(900.0, 850.0, 88.0)
        .quality(300.0, 3.0)
        .manpower(30.0, 2.0)
        .build();
    let b = line_aggregate("B")
        .production(900.0, 700.0, 74.0)
        .quality(280.0, 6.0)
        .manpower(30.0, 4.0)
        .build();
    let c = line_aggregate("C").build();

    let first = rank_floor_default(&[a.clone(), b.clone(), c.clone()]).unwrap();
    let second = rank_floor_default(&[a.clone(), b.clone(), c.clone()]).unwrap();
    assert_eq!(first, second);

    let reordered = rank_floor_default(&[c, b, a]).unwrap();
    assert_eq!(first, reordered);
}

#[test]
fn many_lines_tied_at_rank_one_all_take_top_marks() {
    // Dense ranking lets every tied line occupy rank 1 simultaneously;
    // the next distinct value lands on rank 2, still inside the top
    // marks bucket. Confirmed business behaviour, not a bug.
    let input: Vec<_> = (0..4)
        .map(|i| {
            line_aggregate(&format!("L{i}"))
                .production(100.0, 100.0, 90.0)
                .quality(100.0, 1.0)
                .manpower(10.0, 0.0)
                .build()
        })
        .collect();

    let out = rank_floor_default(&input).unwrap();
    for line in &out {
        assert_eq!(line.amount_marks, 25);
        assert_eq!(line.efficiency_marks, 10);
        assert_eq!(line.absenteeism_marks, 15);
        assert_eq!(line.rejection_marks, 25);
        assert_eq!(line.total_marks, 75);
    }
    // Placement is still strict thanks to the label cascade.
    let places: Vec<u32> = out.iter().map(|r| r.place).collect();
    assert_eq!(places, vec![1, 2, 3, 4]);
    assert_eq!(out[0].label, "L0");
}

#[test]
fn total_marks_never_exceed_sheet_maximum() {
    let input: Vec<_> = (0..15)
        .map(|i| {
            line_aggregate(&format!("Line-{i:02}"))
                .production(1000.0, 850.0 + i as f64 * 10.0, 60.0 + i as f64 * 2.0)
                .quality(400.0, 1.0 + i as f64 * 0.5)
                .manpower(35.0, i as f64 % 6.0)
                .build()
        })
        .collect();

    let out = rank_floor_default(&input).unwrap();
    for line in &out {
        assert!(line.total_marks <= 75, "{} exceeded 75", line.label);
    }
    let mut places: Vec<u32> = out.iter().map(|r| r.place).collect();
    places.sort_unstable();
    assert_eq!(places, (1..=15).collect::<Vec<u32>>());
}

#[test]
fn substituted_tables_change_marks_not_ordering_keys() {
    let input = vec![
        line_aggregate("A")
            .production(100.0, 100.0, 90.0)
            .quality(100.0, 1.0)
            .manpower(10.0, 0.0)
            .build(),
        line_aggregate("B")
            .production(100.0, 50.0, 45.0)
            .quality(100.0, 8.0)
            .manpower(10.0, 3.0)
            .build(),
    ];

    let flat = MarkTables {
        amount: vec![linetally_engine::MarkRule::otherwise(1)],
        efficiency: vec![linetally_engine::MarkRule::otherwise(1)],
        absenteeism: vec![linetally_engine::MarkRule::otherwise(1)],
        rejection: vec![linetally_engine::MarkRule::otherwise(1)],
    };
    let out = rank_floor(&input, &flat).unwrap();
    assert!(out.iter().all(|r| r.total_marks == 4));
    // Equal totals: cascade falls through to absenteeism, A wins.
    assert_eq!(out[0].label, "A");
}
