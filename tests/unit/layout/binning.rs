use super::*;

#[test]
fn empty_bins_are_retained_in_ascending_order() {
    let values = [5.0, 95.0];
    let bins = bin(&values, |v| *v, (0.0, 100.0), 10);
    assert_eq!(bins.len(), 10);
    assert_eq!(bins[0].members, vec![&5.0]);
    assert_eq!(bins[9].members, vec![&95.0]);
    assert!(bins[1..9].iter().all(Bin::is_empty));
    for w in bins.windows(2) {
        assert_eq!(w[0].upper, w[1].lower);
    }
    assert_eq!(bins[0].lower, 0.0);
    assert_eq!(bins[9].upper, 100.0);
}

#[test]
fn threshold_values_fall_into_the_lower_bin() {
    let values = [0.0, 10.0, 10.000001, 20.0, 100.0];
    let bins = bin(&values, |v| *v, (0.0, 100.0), 10);
    assert_eq!(bins[0].members, vec![&0.0, &10.0]);
    assert_eq!(bins[1].members, vec![&10.000001, &20.0]);
    assert_eq!(bins[9].members, vec![&100.0]);
}

#[test]
fn out_of_domain_values_are_clamped_not_dropped() {
    let values = [-5.0, 250.0, f64::NAN];
    let bins = bin(&values, |v| *v, (0.0, 100.0), 4);
    let total: usize = bins.iter().map(Bin::len).sum();
    assert_eq!(total, 3);
    assert_eq!(bins[0].len(), 2);
    assert_eq!(bins[3].len(), 1);
}

#[test]
fn members_keep_encounter_order() {
    let values = [3.0, 1.0, 2.0];
    let bins = bin(&values, |v| *v, (0.0, 100.0), 2);
    assert_eq!(bins[0].members, vec![&3.0, &1.0, &2.0]);
}

#[test]
fn degenerate_domain_collects_everything_in_first_bin() {
    let values = [1.0, 2.0];
    let bins = bin(&values, |v| *v, (5.0, 5.0), 3);
    assert_eq!(bins.len(), 3);
    assert_eq!(bins[0].len(), 2);
    assert!(bins.iter().all(|b| b.midpoint().is_finite()));
}

#[test]
fn zero_count_yields_a_single_bin() {
    let values = [1.0];
    let bins = bin(&values, |v| *v, (0.0, 1.0), 0);
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].len(), 1);
}
