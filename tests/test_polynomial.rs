//! Integration tests for polynomials over Galois fields

use galoisrs::galois::wellknown;
use galoisrs::polynomial::{Polynomial, PolynomialError};
use std::cmp::Ordering;

fn poly(coefficients: &[u8]) -> Polynomial {
    Polynomial::new(wellknown::default_field(), coefficients)
}

#[test]
fn test_new_polynomial() {
    struct Row {
        input: Polynomial,
        display: &'static str,
        degree: usize,
        coefficients: &'static [u8],
    }
    let rows = [
        Row {
            input: poly(&[]),
            display: "0",
            degree: 0,
            coefficients: &[],
        },
        Row {
            input: poly(&[1]),
            display: "1",
            degree: 0,
            coefficients: &[1],
        },
        Row {
            input: poly(&[2]),
            display: "2",
            degree: 0,
            coefficients: &[2],
        },
        Row {
            input: poly(&[17]),
            display: "17",
            degree: 0,
            coefficients: &[17],
        },
        Row {
            input: poly(&[0, 2]),
            display: "2x",
            degree: 1,
            coefficients: &[0, 2],
        },
        Row {
            input: poly(&[1, 2]),
            display: "2x + 1",
            degree: 1,
            coefficients: &[1, 2],
        },
        Row {
            input: poly(&[1, 0, 1]),
            display: "x^2 + 1",
            degree: 2,
            coefficients: &[1, 0, 1],
        },
        Row {
            input: poly(&[0, 1, 1]),
            display: "x^2 + x",
            degree: 2,
            coefficients: &[0, 1, 1],
        },
        Row {
            input: poly(&[0, 1, 1, 0]),
            display: "x^2 + x",
            degree: 2,
            coefficients: &[0, 1, 1],
        },
        Row {
            input: poly(&[3, 1, 4]),
            display: "4x^2 + x + 3",
            degree: 2,
            coefficients: &[3, 1, 4],
        },
    ];
    for (idx, row) in rows.iter().enumerate() {
        assert_eq!(row.input.to_string(), row.display, "[{idx}] display");
        assert!(
            std::ptr::eq(row.input.field(), wellknown::default_field()),
            "[{idx}] field"
        );
        assert_eq!(row.input.degree(), row.degree, "[{idx}] degree");
        assert_eq!(row.input.coefficients(), row.coefficients, "[{idx}] coefficients");
        for (i, &k) in row.coefficients.iter().enumerate() {
            assert_eq!(row.input.coefficient(i), k, "[{idx}] coefficient({i})");
        }
        for i in row.coefficients.len()..2 * row.coefficients.len() + 1 {
            assert_eq!(row.input.coefficient(i), 0, "[{idx}] coefficient({i})");
        }
    }
}

#[test]
fn test_scale() {
    let rows = [
        (5u8, poly(&[3, 0, 1]), poly(&[15, 0, 5])),
        (1u8, poly(&[3, 0, 1]), poly(&[3, 0, 1])),
        (0u8, poly(&[3, 0, 1]), poly(&[])),
    ];
    for (scalar, input, expected) in rows {
        assert_eq!(input.scale(scalar), expected, "{scalar}*({input})");
    }
}

#[test]
fn test_compare() {
    let rows = [
        (poly(&[]), poly(&[]), Ordering::Equal),
        (poly(&[5]), poly(&[5]), Ordering::Equal),
        (poly(&[3, 5]), poly(&[3, 5]), Ordering::Equal),
        (poly(&[]), poly(&[1]), Ordering::Less),
        (poly(&[0]), poly(&[1]), Ordering::Less),
        (poly(&[2, 1]), poly(&[1, 2]), Ordering::Less),
        (
            Polynomial::new(wellknown::poly310_g2(), &[]),
            Polynomial::new(wellknown::poly210_g2(), &[]),
            Ordering::Greater,
        ),
    ];
    for (a, b, expected) in rows {
        assert_eq!(a.compare(&b), expected, "{a:?} cmp {b:?}");
        assert_eq!(b.compare(&a), expected.reverse());
        match expected {
            Ordering::Equal => assert_eq!(a, b),
            Ordering::Less => assert!(a < b),
            Ordering::Greater => assert!(b < a),
        }
    }
}

#[test]
fn test_add() {
    let rows = [
        (poly(&[1, 0, 0, 1]), poly(&[]), poly(&[1, 0, 0, 1])),
        (poly(&[1, 0, 0, 1]), poly(&[0, 1]), poly(&[1, 1, 0, 1])),
        (poly(&[1, 0, 0, 1]), poly(&[0, 0, 1, 1]), poly(&[1, 0, 1])),
    ];
    for (a, b, expected) in rows {
        let actual = a.add(std::slice::from_ref(&b)).unwrap();
        assert_eq!(actual, expected, "({a}) + ({b})");
    }
}

#[test]
fn test_add_multiple_operands() {
    let a = poly(&[1, 2]);
    let b = poly(&[0, 2, 3]);
    let c = poly(&[1]);
    let sum = a.add(&[b, c]).unwrap();
    assert_eq!(sum, poly(&[0, 0, 3]));
}

#[test]
fn test_mul() {
    // (x + 1)(x + 1) = x^2 + 2x + 1 = x^2 + 1 over characteristic 2.
    let a = poly(&[1, 1]);
    let square = a.mul(std::slice::from_ref(&a)).unwrap();
    assert_eq!(square, poly(&[1, 0, 1]));

    // Multiplying by zero annihilates.
    let zero = poly(&[]);
    assert_eq!(a.mul(std::slice::from_ref(&zero)).unwrap(), zero);

    // Multiplying by one is the identity.
    let one = poly(&[1]);
    assert_eq!(a.mul(std::slice::from_ref(&one)).unwrap(), a);
}

#[test]
fn test_evaluate() {
    // 4x^2 + x + 3 at x = 2 in the default field:
    // 4*4 = 0x10, + 2 + 3 -> 0x10 ^ 2 ^ 3 = 0x11.
    let p = poly(&[3, 1, 4]);
    assert_eq!(p.evaluate(2), 0x11);
    assert_eq!(p.evaluate(0), 3);
    assert_eq!(poly(&[]).evaluate(7), 0);
}

#[test]
fn test_add_incompatible_fields() {
    let a = Polynomial::new(wellknown::poly210_g2(), &[]);
    let b = Polynomial::new(wellknown::poly310_g2(), &[]);
    assert_eq!(
        a.add(std::slice::from_ref(&b)),
        Err(PolynomialError::IncompatibleFields)
    );
}

#[test]
fn test_mul_incompatible_fields() {
    let a = Polynomial::new(wellknown::poly210_g2(), &[]);
    let b = Polynomial::new(wellknown::poly310_g2(), &[]);
    assert_eq!(
        a.mul(std::slice::from_ref(&b)),
        Err(PolynomialError::IncompatibleFields)
    );
}
