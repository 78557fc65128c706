use qp_core::{
    Arrow, DetachedCycle, DifferenceOfPaths, ErrorKind, Generator, Path, Potential, Quiver,
    QuiverWithPotential, SemimonomialIdealFactory,
};

fn cycle(vertices: &[u32]) -> DetachedCycle<u32> {
    DetachedCycle::from_vertices(vertices).unwrap()
}

fn path(vertices: &[u32]) -> Path<u32> {
    Path::from_vertices(vertices).unwrap()
}

/// The smallest non-cancellative QP: two 4-cycles sharing the arrows 4→5 and 5→1.
fn classic_potential() -> Potential<u32> {
    Potential::from_terms([(cycle(&[1, 2, 4, 5, 1]), -1), (cycle(&[1, 3, 4, 5, 1]), 1)])
}

#[test]
fn classic_non_cancellative_qp() {
    let ideal = SemimonomialIdealFactory
        .create_semimonomial_ideal_from_potential(&classic_potential())
        .unwrap();

    assert_eq!(ideal.len(), 6);

    let monomials: Vec<Path<u32>> = ideal.monomial_generators().into_iter().cloned().collect();
    assert_eq!(
        monomials,
        vec![
            path(&[2, 4, 5, 1]),
            path(&[3, 4, 5, 1]),
            path(&[4, 5, 1, 2]),
            path(&[4, 5, 1, 3]),
        ]
    );

    let binomials: Vec<DifferenceOfPaths<u32>> =
        ideal.binomial_generators().into_iter().cloned().collect();
    assert_eq!(
        binomials,
        vec![
            DifferenceOfPaths::new(path(&[5, 1, 3, 4]), path(&[5, 1, 2, 4])).unwrap(),
            DifferenceOfPaths::new(path(&[1, 3, 4, 5]), path(&[1, 2, 4, 5])).unwrap(),
        ]
    );
}

#[test]
fn classic_generators_are_keyed_by_arrow() {
    let ideal = SemimonomialIdealFactory
        .create_semimonomial_ideal_from_potential(&classic_potential())
        .unwrap();

    let arrows: Vec<&Arrow<u32>> = ideal.generators().map(|(arrow, _)| arrow).collect();
    assert_eq!(
        arrows,
        vec![
            &Arrow::new(1, 2),
            &Arrow::new(1, 3),
            &Arrow::new(2, 4),
            &Arrow::new(3, 4),
            &Arrow::new(4, 5),
            &Arrow::new(5, 1),
        ]
    );

    match ideal.generator(&Arrow::new(5, 1)) {
        Some(Generator::Binomial(difference)) => {
            assert_eq!(difference.to_string(), "(1, 3, 4, 5) - (1, 2, 4, 5)");
        }
        other => panic!("expected a binomial for 5→1, got {:?}", other),
    }
    assert_eq!(ideal.generator(&Arrow::new(2, 1)), None);
}

#[test]
fn classic_qp_through_the_quiver() {
    let potential = classic_potential();
    let quiver = Quiver::from_potential(&potential);
    assert_eq!(quiver.vertex_count(), 5);
    assert_eq!(quiver.arrow_count(), 6);

    let qp = QuiverWithPotential::new(quiver, potential).unwrap();
    let ideal = qp.semimonomial_ideal(&SemimonomialIdealFactory).unwrap();
    assert_eq!(ideal.monomial_generators().len(), 4);
    assert_eq!(ideal.binomial_generators().len(), 2);
}

#[test]
fn rotated_input_gives_the_same_ideal() {
    let rotated = Potential::from_terms([(cycle(&[4, 5, 1, 2, 4]), -1), (cycle(&[5, 1, 3, 4, 5]), 1)]);
    assert_eq!(rotated, classic_potential());

    let factory = SemimonomialIdealFactory::new();
    assert_eq!(
        factory.create_semimonomial_ideal_from_potential(&rotated).unwrap(),
        factory
            .create_semimonomial_ideal_from_potential(&classic_potential())
            .unwrap()
    );
}

#[test]
fn non_unit_coefficient_is_recoverable_in_theory() {
    let potential = classic_potential().add_cycle(1, cycle(&[1, 3, 4, 5, 1]));
    assert_eq!(potential.coefficient(&cycle(&[1, 3, 4, 5, 1])), 2);

    let err = SemimonomialIdealFactory
        .create_semimonomial_ideal_from_potential(&potential)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RecoverableInTheory);
}

#[test]
fn same_arrow_with_same_sign_is_mathematically_impossible() {
    let potential = Potential::from_terms([(cycle(&[1, 2, 4, 5, 1]), 1), (cycle(&[1, 3, 4, 5, 1]), 1)]);

    let err = SemimonomialIdealFactory
        .create_semimonomial_ideal_from_potential(&potential)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MathematicallyImpossible);
    assert!(err.to_string().contains("(4, 5)"));
}

#[test]
fn non_adjacent_arrows_are_structural() {
    let err = Path::from_arrows(vec![Arrow::new(1, 2), Arrow::new(3, 4)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert_eq!(
        err.to_string(),
        "Arrow (1, 2) at position 0 is not followed by an adjacent arrow: (3, 4)."
    );
}

#[test]
fn cancelled_cycle_leaves_no_generators() {
    let potential = classic_potential()
        .add_cycle(1, cycle(&[6, 7, 6]))
        .add_cycle(-1, cycle(&[7, 6, 7]));

    let ideal = SemimonomialIdealFactory
        .create_semimonomial_ideal_from_potential(&potential)
        .unwrap();
    assert_eq!(ideal.len(), 6);
    assert_eq!(ideal.generator(&Arrow::new(6, 7)), None);
}
