//! Numeric differentiation of sampled signals over irregular timestamps.

use super::errors::KinematicsError;

/// Derivative of `y` with respect to `t`, same length as the input.
///
/// Interior samples use second-order central differences weighted by the
/// spacing on each side; the two boundary samples use one-sided first-order
/// differences. Fewer than two samples yield all zeros.
///
/// # Errors
///
/// `ShapeMismatch` when `y` and `t` differ in length.
pub fn finite_diff(y: &[f64], t: &[f64]) -> Result<Vec<f64>, KinematicsError> {
    if y.len() != t.len() {
        return Err(KinematicsError::shape_mismatch(y.len(), t.len()));
    }

    let n = y.len();
    if n <= 1 {
        return Ok(vec![0.0; n]);
    }

    let mut dy = Vec::with_capacity(n);
    dy.push((y[1] - y[0]) / (t[1] - t[0]));

    for i in 1..n - 1 {
        let hs = t[i] - t[i - 1];
        let hd = t[i + 1] - t[i];
        // Weighted in difference form so constant runs give exactly zero.
        let num = hs * hs * (y[i + 1] - y[i]) + hd * hd * (y[i] - y[i - 1]);
        dy.push(num / (hs * hd * (hs + hd)));
    }

    dy.push((y[n - 1] - y[n - 2]) / (t[n - 1] - t[n - 2]));
    Ok(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = finite_diff(&[1.0, 2.0, 3.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, KinematicsError::shape_mismatch(3, 2));
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(finite_diff(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn single_sample_is_zero() {
        assert_eq!(finite_diff(&[42.0], &[0.5]).unwrap(), vec![0.0]);
    }

    #[test]
    fn constant_slope_everywhere() {
        let dy = finite_diff(&[0.0, 2.0, 4.0, 6.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(dy.len(), 4);
        for d in dy {
            assert!((d - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn constant_signal_is_exactly_zero_on_rounded_grid() {
        // i / 15 spacing is not exactly representable, so hs and hd differ in the last bits.
        let t: Vec<f64> = (0..6u32).map(|i| f64::from(i) / 15.0).collect();
        let dy = finite_diff(&[160.0; 6], &t).unwrap();
        assert_eq!(dy, vec![0.0; 6]);
    }

    #[test]
    fn two_samples_use_one_sided_difference() {
        let dy = finite_diff(&[1.0, 4.0], &[0.0, 0.5]).unwrap();
        assert_eq!(dy, vec![6.0, 6.0]);
    }

    #[test]
    fn quadratic_interior_is_exact_on_uneven_grid() {
        // y = t^2, so dy/dt = 2t; the weighted central stencil is exact for quadratics.
        let t = [0.0, 0.1, 0.35, 0.5, 0.9];
        let y: Vec<f64> = t.iter().map(|v| v * v).collect();
        let dy = finite_diff(&y, &t).unwrap();
        for i in 1..t.len() - 1 {
            assert!((dy[i] - 2.0 * t[i]).abs() < 1e-9, "index {i}: {}", dy[i]);
        }
        // Boundaries are first order: secant slopes.
        assert!((dy[0] - 0.1).abs() < 1e-9);
        assert!((dy[4] - 1.4).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn linear_signals_differentiate_exactly(
            slope in -100.0f64..100.0,
            offset in -100.0f64..100.0,
            steps in proptest::collection::vec(0.01f64..1.0, 2..20),
        ) {
            let mut t = vec![0.0];
            for s in &steps {
                let last = t[t.len() - 1];
                t.push(last + s);
            }
            let y: Vec<f64> = t.iter().map(|v| slope * v + offset).collect();
            let dy = finite_diff(&y, &t).unwrap();
            prop_assert_eq!(dy.len(), t.len());
            for d in dy {
                prop_assert!((d - slope).abs() < 1e-6 * (1.0 + slope.abs()));
            }
        }

        #[test]
        fn constant_signals_have_zero_derivative(
            value in -1000.0f64..1000.0,
            steps in proptest::collection::vec(0.001f64..1.0, 2..20),
        ) {
            let mut t = vec![0.0];
            for s in &steps {
                let last = t[t.len() - 1];
                t.push(last + s);
            }
            let y = vec![value; t.len()];
            let dy = finite_diff(&y, &t).unwrap();
            prop_assert!(dy.iter().all(|d| *d == 0.0));
        }
    }
}
