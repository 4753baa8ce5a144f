use mpoly::{Mono, OverflowKind, Poly, PolyError, parse_poly};
use num_traits::{One, Zero};

fn poly(input: &str) -> Poly {
    parse_poly(input).expect("parse polynomial")
}

fn c(value: i64) -> Poly {
    Poly::from_coeff(value)
}

#[test]
fn add_constant_to_variable() {
    let x = Poly::from_monos(vec![Mono::new(c(1), 1)]);
    assert_eq!(poly("(1,0)+(1,1)"), c(1).add(&x));
    assert_eq!(x.add(&c(1)), c(1).add(&x));
}

#[test]
fn add_with_zero_returns_other_operand() {
    let p = poly("((2,1),3)+(1,0)");
    assert_eq!(p.add(&Poly::zero()), p);
    assert_eq!(Poly::zero().add(&p), p);
}

#[test]
fn add_cancels_to_constant() {
    let sum = poly("(1,2)+(5,0)").add(&poly("(-1,2)"));
    assert_eq!(sum, c(5));
    assert!(sum.is_coeff());
}

#[test]
fn add_merges_nested_levels() {
    let sum = poly("((1,1),1)").add(&poly("((2,1)+(1,0),1)"));
    assert_eq!(sum, poly("((3,1)+(1,0),1)"));
}

#[test]
fn sub_self_is_zero() {
    let p = poly("((1,2)+(-4,0),3)+(7,1)+(2,0)");
    assert!(p.sub(&p).is_zero());
    assert!((p.clone() - &p).is_zero());
}

#[test]
fn sub_gives_difference() {
    assert_eq!(poly("(3,2)+(1,0)").sub(&poly("(1,2)")), poly("(2,2)+(1,0)"));
    assert_eq!(c(1).sub(&poly("(1,1)")), poly("(-1,1)+(1,0)"));
}

#[test]
fn neg_flips_every_leaf() {
    let p = poly("((1,2)+(-4,0),3)+(7,0)");
    assert_eq!(p.neg(), poly("((-1,2)+(4,0),3)+(-7,0)"));
    assert_eq!(-p.clone(), p.neg());
    assert_eq!(p.neg().neg(), p);
}

#[test]
fn scale_special_cases() {
    let p = poly("((2,1),2)+(3,0)");
    assert!(p.scale(0).is_zero());
    assert_eq!(p.scale(1), p);
    assert_eq!(p.scale(-2), poly("((-4,1),2)+(-6,0)"));
    assert_eq!(c(6).scale(7), c(42));
}

#[test]
fn scale_reports_coefficient_overflow() {
    let big = 1_i64 << 32;
    let p = Poly::from_monos(vec![Mono::new(c(big), 2), Mono::new(c(3), 0)]);
    assert_eq!(
        p.checked_scale(big),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
    assert_eq!(p.checked_scale(2), Ok(p.add(&p)));
}

#[test]
#[should_panic(expected = "coefficient overflow")]
fn scale_panics_on_coefficient_overflow() {
    let big = 1_i64 << 32;
    let _ = poly("(4294967296,2)+(3,0)").scale(big);
}

#[test]
fn add_reports_coefficient_overflow() {
    let max = poly("(9223372036854775807,1)");
    assert_eq!(
        max.checked_add(&poly("(1,1)")),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
    assert_eq!(
        c(i64::MAX).checked_add(&c(1)),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
    assert_eq!(max.checked_add(&poly("(-1,1)")), Ok(poly("(9223372036854775806,1)")));
}

#[test]
fn neg_of_min_coefficient_overflows() {
    assert_eq!(
        poly("(-9223372036854775808,3)").checked_neg(),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
    assert_eq!(
        c(1).checked_sub(&c(i64::MIN)),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
}

#[test]
fn at_reports_power_overflow() {
    let p = poly("(1,64)+(1,0)");
    assert_eq!(
        p.checked_at(2),
        Err(PolyError::Overflow(OverflowKind::Coefficient))
    );
    assert_eq!(p.checked_at(-1), Ok(c(2)));
}

#[test]
fn mul_by_zero_is_zero() {
    let p = poly("((1,2)+(-4,0),3)+(7,1)");
    assert!(c(0).mul(&p).is_zero());
    assert!(p.mul(&c(0)).is_zero());
    assert!(Poly::zero().mul(&Poly::zero()).is_zero());
}

#[test]
fn mul_binomials() {
    let x_plus_1 = poly("(1,1)+(1,0)");
    let x_minus_1 = poly("(1,1)+(-1,0)");
    assert_eq!(x_plus_1.mul(&x_minus_1), poly("(1,2)+(-1,0)"));
}

#[test]
fn mul_two_variables() {
    let x = poly("(1,1)");
    let y = poly("((1,1),0)");
    let xy = x.mul(&y);
    assert_eq!(xy, poly("((1,1),1)"));
    assert_eq!(xy.deg(), 2);
    assert_eq!(y.clone() * x.clone(), xy);
}

#[test]
fn mul_with_cancelling_cross_terms() {
    // (x + y)(x - y) = x^2 - y^2
    let x_plus_y = poly("(1,1)+((1,1),0)");
    let x_minus_y = poly("(1,1)+((-1,1),0)");
    assert_eq!(x_plus_y.mul(&x_minus_y), poly("(1,2)+((-1,2),0)"));
}

#[test]
fn degree_of_constants() {
    assert_eq!(Poly::zero().deg(), -1);
    assert_eq!(c(5).deg(), 0);
    assert_eq!(c(-1).deg(), 0);
}

#[test]
fn total_degree_sums_over_variables() {
    let p = poly("((1,4),1)+((1,1)+(1,0),3)");
    assert_eq!(p.deg(), 5);
}

#[test]
fn degree_by_variable() {
    let p = poly("((1,4),1)+((1,1)+(1,0),3)");
    assert_eq!(p.deg_by(0), 3);
    assert_eq!(p.deg_by(1), 4);
    assert_eq!(p.deg_by(2), 0);
    assert_eq!(Poly::zero().deg_by(0), -1);
    assert_eq!(Poly::zero().deg_by(7), -1);
    assert_eq!(c(5).deg_by(3), 0);
}

#[test]
fn at_evaluates_outer_variable() {
    let p = poly("(1,0)+(1,2)");
    assert_eq!(p.at(3), c(10));
    assert_eq!(p.at(0), c(1));
    assert_eq!(p.at(-2), c(5));
}

#[test]
fn at_shifts_remaining_variables_up() {
    // x^2 * y + x = at x=2: 4y + 2
    let p = poly("((1,1),2)+(1,1)");
    assert_eq!(p.at(2), poly("(4,1)+(2,0)"));
}

#[test]
fn at_constant_is_identity() {
    assert_eq!(c(17).at(4), c(17));
    assert!(Poly::zero().at(4).is_zero());
}

#[test]
fn at_zero_keeps_constant_term_only() {
    let p = poly("((1,1),2)+((3,2),0)");
    assert_eq!(p.at(0), poly("(3,2)"));
}

#[test]
fn operator_traits_match_methods() {
    let p = poly("(2,3)+(1,0)");
    let q = poly("((1,1),1)+(-1,0)");
    assert_eq!(p.clone() + q.clone(), p.add(&q));
    assert_eq!(p.clone() + &q, p.add(&q));
    assert_eq!(p.clone() - q.clone(), p.sub(&q));
    assert_eq!(p.clone() * q.clone(), p.mul(&q));
    assert_eq!(p.clone() * &q, p.mul(&q));
    assert_eq!(-&p, p.neg());
}

#[test]
fn num_traits_identities() {
    let p = poly("(2,3)+(1,0)");
    assert!(<Poly as Zero>::zero().is_zero());
    assert!(<Poly as One>::one().is_one());
    assert_eq!(p.clone() * <Poly as One>::one(), p);
}

#[test]
fn sum_of_iterator() {
    let total: Poly = ["(1,1)", "(2,1)", "(1,0)", "-1"].iter().map(|s| poly(s)).sum();
    assert_eq!(total, poly("(3,1)"));
}

#[test]
fn mul_reports_exponent_overflow() {
    let big = poly("(1,2147483647)");
    assert_eq!(
        big.checked_mul(&poly("(1,1)")),
        Err(PolyError::Overflow(OverflowKind::Exponent))
    );
    assert_eq!(big.checked_mul(&c(3)), Ok(poly("(3,2147483647)")));
}

#[test]
#[should_panic(expected = "exponent overflow")]
fn mul_panics_on_exponent_overflow() {
    let _ = poly("(1,2147483647)").mul(&poly("(1,1)"));
}
