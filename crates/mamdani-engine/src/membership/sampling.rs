use mamdani_core::Universe;

use super::MembershipShape;

/// Evaluate `shape` at every sample point of `universe`.
pub fn sample(shape: &MembershipShape, universe: &Universe) -> Vec<f64> {
    universe
        .points()
        .iter()
        .map(|&x| shape.membership(x))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_align_with_points() {
        let universe = Universe::new(0.0, 10.0, 1.0).unwrap();
        let shape = MembershipShape::triangular(0.0, 0.0, 5.0).unwrap();
        let samples = sample(&shape, &universe);
        assert_eq!(samples.len(), universe.len());
        assert_eq!(&samples[..6], &[1.0, 0.8, 0.6, 0.4, 0.2, 0.0]);
        assert!(samples[6..].iter().all(|&m| m == 0.0));
    }
}
