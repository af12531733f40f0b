//! End-to-end enumerations. Presentations come from Holt et al. (ch. 5) and
//! Cannon, Dimino, Havas, Watson (1973).

use super::felsch::FelschRunner;
use super::*;
use super::Strategy;
use proptest::prelude::*;

fn w(letters: &[i32]) -> Word {
    Word::from(letters)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pres(generators: usize, relators: &[Word]) -> Presentation {
    Presentation::new(generators, relators.to_vec()).unwrap()
}

/// Enumerate with both strategies and return the standardized tables.
fn both(p: &Presentation, h: &[Word], cfg: EnumCfg) -> (CosetTable, CosetTable) {
    let mut r = enumerate(Strategy::Hlt, p, h, cfg).unwrap();
    let mut c = enumerate(Strategy::Felsch, p, h, cfg).unwrap();
    for t in [&mut r, &mut c] {
        t.verify().unwrap();
        assert!(t.is_complete());
        t.compress();
        t.standardize();
        t.verify().unwrap();
    }
    (r, c)
}

fn example_5_1() -> Presentation {
    pres(2, &[w(&[1, 1, 1]), w(&[2, 2, 2]), w(&[-1, -2, 1, 2])])
}

fn some(rows: &[&[usize]]) -> Vec<Vec<Option<usize>>> {
    rows.iter()
        .map(|r| r.iter().copied().map(Some).collect())
        .collect()
}

#[test]
fn example_5_1_index_three() {
    init_tracing();
    let (r, c) = both(&example_5_1(), &[w(&[1])], EnumCfg::default());
    let expected = some(&[&[0, 0, 1, 2], &[1, 1, 2, 0], &[2, 2, 0, 1]]);
    assert_eq!(r.table(), expected);
    assert_eq!(c.table(), expected);
    assert_eq!(r.index(), 3);
    assert_eq!(c.index(), 3);
}

#[test]
fn example_5_1_trivial_subgroup_gives_group_order() {
    // Z3 × Z3.
    let (r, c) = both(&example_5_1(), &[], EnumCfg::default());
    assert_eq!(r.index(), 9);
    assert_eq!(r.table(), c.table());
}

#[test]
fn e1_is_trivial() {
    init_tracing();
    let e1 = pres(
        3,
        &[
            w(&[-3, 1, 3, -1, -1]),
            w(&[-1, 2, 1, -2, -2]),
            w(&[-2, 3, 2, -3, -3]),
        ],
    );
    let expected = some(&[&[0, 0, 0, 0, 0, 0]]);
    for strategy in [Strategy::Hlt, Strategy::Felsch] {
        let mut t = enumerate(strategy, &e1, &[], EnumCfg::default()).unwrap();
        t.compress();
        assert_eq!(t.table(), expected, "{strategy:?}");
        assert_eq!(t.index(), 1);
    }
}

#[test]
fn cox_group_index_500() {
    init_tracing();
    let a = w(&[1]);
    let b = w(&[2]);
    let cox = pres(
        2,
        &[
            a.pow(6),
            b.pow(6),
            (&a * &b).pow(2),
            (a.pow(2) * b.pow(2)).pow(2),
            (a.pow(3) * b.pow(3)).pow(5),
        ],
    );
    let (r, c) = both(&cox, &[a], EnumCfg::default());
    assert_eq!(r.index(), 500);
    assert_eq!(r.table(), c.table());
    assert_eq!(r.table()[0], vec![Some(0), Some(0), Some(1), Some(2)]);
}

#[test]
fn b_2_4_index_1024() {
    init_tracing();
    let a = w(&[1]);
    let b = w(&[2]);
    let ai = a.inverse();
    let bi = b.inverse();
    let rels: Vec<Word> = [
        a.clone(),
        b.clone(),
        &a * &b,
        &ai * &b,
        a.pow(2) * b.clone(),
        &a * &b.pow(2),
        a.pow(2) * b.pow(2),
        ai.clone() * b.clone() * a.clone() * b.clone(),
        a.clone() * bi * a.clone() * b.clone(),
    ]
    .iter()
    .map(|r| r.pow(4))
    .collect();
    let b24 = pres(2, &rels);
    let (r, c) = both(&b24, &[a], EnumCfg::default());
    assert_eq!(r.index(), 1024);
    assert_eq!(c.index(), 1024);
    assert_eq!(r.table(), c.table());
}

#[test]
fn macdonald_g22_is_trivial() {
    let m = pres(
        2,
        &[
            w(&[-2, -1, 2, 1, -2, 1, 2, -1, -1]),
            w(&[-1, -2, 1, 2, -1, 2, 1, -2, -2]),
        ],
    );
    let (r, c) = both(&m, &[w(&[1])], EnumCfg::default());
    assert_eq!(r.table(), some(&[&[0, 0, 0, 0]]));
    assert_eq!(c.table(), some(&[&[0, 0, 0, 0]]));
}

#[test]
fn felsch_with_small_stack_matches_reference_rows() {
    init_tracing();
    // Cannon et al., section 3.2, example (d).
    let (a, b, c) = (w(&[1]), w(&[2]), w(&[3]));
    let p = pres(
        3,
        &[
            a.pow(11),
            b.pow(5),
            c.pow(4),
            (&a * &c).pow(3),
            w(&[2, 2, -3, -2, 3]),
            w(&[1, 1, 1, 1, -2, -1, 2]),
        ],
    );
    let h = [c.clone(), b, c.pow(2)];
    let cfg = EnumCfg::default().with_max_stack_size(10);
    let mut t = enumerate(Strategy::Felsch, &p, &h, cfg).unwrap();
    assert!(t.stats().lookaheads > 0);
    t.compress();
    t.standardize();
    let expected = some(&[
        &[1, 2, 0, 0, 0, 0],
        &[3, 0, 4, 5, 6, 7],
        &[0, 8, 9, 10, 11, 12],
        &[5, 1, 10, 13, 14, 15],
        &[16, 5, 16, 1, 17, 18],
        &[4, 3, 1, 8, 19, 20],
        &[12, 21, 22, 23, 24, 1],
        &[25, 26, 27, 28, 1, 24],
        &[2, 10, 5, 16, 22, 28],
        &[10, 13, 13, 2, 29, 30],
    ]);
    assert_eq!(&t.table()[..10], expected);

    let mut r = enumerate(Strategy::Hlt, &p, &h, EnumCfg::default()).unwrap();
    r.standardize();
    assert_eq!(r.table(), t.table());
}

#[test]
fn felsch_with_lookahead_on_every_deduction_still_closes() {
    let (r, s) = (w(&[1]), w(&[2]));
    let d12 = pres(2, &[r.pow(12), s.pow(2), (&r * &s).pow(2)]);
    let cfg = EnumCfg::default().with_max_stack_size(1);
    for (p, h, index) in [
        (d12.clone(), vec![], 24),
        (d12, vec![s], 12),
        (example_5_1(), vec![], 9),
        (example_5_1(), vec![w(&[1])], 3),
    ] {
        let mut t = enumerate(Strategy::Felsch, &p, &h, cfg).unwrap();
        assert!(t.stats().lookaheads > 0);
        assert!(t.is_complete());
        t.verify().unwrap();
        t.standardize();
        let (reference, _) = both(&p, &h, EnumCfg::default());
        assert_eq!(t.index(), index);
        assert_eq!(t.table(), reference.table());
    }
}

#[test]
fn stack_at_max_size_triggers_one_lookahead() {
    let mut t = enumerate(Strategy::Felsch, &example_5_1(), &[w(&[1])], EnumCfg::default())
        .unwrap();
    t.compress();
    t.set_limits(EnumCfg::default().with_max_stack_size(3));
    let before = t.stats().lookaheads;
    {
        let mut runner = FelschRunner::new(&mut t);
        runner.push((0, 0));
        runner.push((0, 2));
        runner.process_deductions().unwrap();
        assert_eq!(runner.pending(), 0);
    }
    assert_eq!(t.stats().lookaheads, before);
    {
        let mut runner = FelschRunner::new(&mut t);
        runner.push((0, 0));
        runner.push((0, 2));
        runner.push((1, 3));
        runner.process_deductions().unwrap();
        assert_eq!(runner.pending(), 0);
    }
    assert_eq!(t.stats().lookaheads, before + 1);
    t.verify().unwrap();
}

#[test]
fn free_group_hits_cap() {
    let free = pres(1, &[]);
    let cfg = EnumCfg::default().with_max_cosets(50);
    for strategy in [Strategy::Hlt, Strategy::Felsch] {
        let err = enumerate(strategy, &free, &[], cfg).unwrap_err();
        assert_eq!(err, CosetError::ResourceExceeded { limit: 50 });

        let t = enumerate(strategy, &free, &[], cfg.with_incomplete(true)).unwrap();
        assert!(!t.is_complete());
        assert!(t.n() <= 50);
        t.verify().unwrap();
    }
}

#[test]
fn resume_after_cap_matches_direct_run() {
    let a = w(&[1]);
    let b = w(&[2]);
    let cox = pres(
        2,
        &[
            a.pow(6),
            b.pow(6),
            (&a * &b).pow(2),
            (a.pow(2) * b.pow(2)).pow(2),
            (a.pow(3) * b.pow(3)).pow(5),
        ],
    );
    let h = [a];
    let (direct, _) = both(&cox, &h, EnumCfg::default());
    let capped = EnumCfg::default().with_max_cosets(200).with_incomplete(true);
    for (first, second) in [
        (Strategy::Hlt, Strategy::Hlt),
        (Strategy::Felsch, Strategy::Felsch),
        (Strategy::Felsch, Strategy::Hlt),
        (Strategy::Hlt, Strategy::Felsch),
    ] {
        let draft = enumerate(first, &cox, &h, capped).unwrap();
        assert!(!draft.is_complete());
        let mut t = enumerate_from(second, draft, EnumCfg::default()).unwrap();
        assert!(t.is_complete());
        t.standardize();
        assert_eq!(t.table(), direct.table(), "{first:?} then {second:?}");
    }
}

#[test]
fn malformed_subgroup_word_is_rejected() {
    let err = enumerate(Strategy::Hlt, &example_5_1(), &[w(&[1, -5])], EnumCfg::default())
        .unwrap_err();
    assert_eq!(
        err,
        CosetError::MalformedWord {
            letter: -5,
            generators: 2
        }
    );
}

#[test]
fn no_generators_means_one_coset() {
    let p = pres(0, &[]);
    for strategy in [Strategy::Hlt, Strategy::Felsch] {
        let t = enumerate(strategy, &p, &[], EnumCfg::default()).unwrap();
        assert_eq!(t.index(), 1);
        assert!(t.is_complete());
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn cyclic_index_is_gcd(n in 1usize..30, k in 0i32..40) {
        let x = w(&[1]);
        let p = pres(1, &[x.pow(n as i32)]);
        let (r, c) = both(&p, &[x.pow(k)], EnumCfg::default());
        prop_assert_eq!(r.index(), gcd(n, k as usize));
        prop_assert_eq!(r.table(), c.table());
    }

    #[test]
    fn dihedral_indices(n in 1i32..15, stack in 1usize..20) {
        let (r, s) = (w(&[1]), w(&[2]));
        let p = pres(2, &[r.pow(n), s.pow(2), (&r * &s).pow(2)]);
        let cfg = EnumCfg::default().with_max_stack_size(stack);
        let (hr, hc) = both(&p, &[s], cfg);
        prop_assert_eq!(hr.index(), n as usize);
        prop_assert_eq!(hr.table(), hc.table());
        let (tr, tc) = both(&p, &[], cfg);
        prop_assert_eq!(tr.index(), 2 * n as usize);
        prop_assert_eq!(tr.table(), tc.table());

        let mut again = tr.clone();
        again.standardize();
        prop_assert_eq!(again.table(), tr.table());
    }
}
