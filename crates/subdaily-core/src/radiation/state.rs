/// Radiation estimator state.
///
/// The only quantity carried between calls: the most recently derived cloud
/// fraction, read when a step has no fresh way to derive one.
use crate::error::{ForcingError, Result};
use crate::traits::EstimatorState;

/// Number of elements in the flat state representation.
pub const STATE_SIZE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudState {
    /// Last cloud fraction derived from measured shortwave [-].
    pub last_cloud_fraction: f64,
}

impl Default for CloudState {
    /// Clear sky until the first cloud fraction is derived.
    fn default() -> Self {
        Self {
            last_cloud_fraction: 0.0,
        }
    }
}

impl CloudState {
    pub fn with_cloud_fraction(cloud_fraction: f64) -> Self {
        Self {
            last_cloud_fraction: cloud_fraction,
        }
    }

    /// Like `with_cloud_fraction`, for values from outside the crate.
    pub fn checked(cloud_fraction: f64) -> Result<Self> {
        if !cloud_fraction.is_finite() || cloud_fraction < 0.0 {
            return Err(ForcingError::invalid(
                "last_cloud_fraction",
                cloud_fraction,
                "must be finite and non-negative",
            ));
        }
        Ok(Self::with_cloud_fraction(cloud_fraction))
    }
}

impl EstimatorState for CloudState {
    fn to_vec(&self) -> Vec<f64> {
        vec![self.last_cloud_fraction]
    }

    fn from_slice(arr: &[f64]) -> Result<Self> {
        if arr.len() != STATE_SIZE {
            return Err(ForcingError::invalid(
                "state",
                format!("{} elements", arr.len()),
                format!("expected {}", STATE_SIZE),
            ));
        }
        Self::checked(arr[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clear_sky() {
        assert_eq!(CloudState::default().last_cloud_fraction, 0.0);
    }

    #[test]
    fn state_roundtrip() {
        let s = CloudState::with_cloud_fraction(0.42);
        let s2 = CloudState::from_slice(&s.to_vec()).unwrap();
        assert_eq!(s, s2);
    }

    #[test]
    fn state_wrong_length() {
        assert!(CloudState::from_slice(&[]).is_err());
        assert!(CloudState::from_slice(&[0.1, 0.2]).is_err());
    }

    #[test]
    fn state_rejects_nan() {
        assert!(CloudState::from_slice(&[f64::NAN]).is_err());
    }

    #[test]
    fn checked_rejects_out_of_domain() {
        assert!(CloudState::checked(-0.1).is_err());
        assert!(CloudState::checked(f64::INFINITY).is_err());
        assert!(matches!(
            CloudState::checked(f64::NAN),
            Err(ForcingError::InvalidParameter { name: "last_cloud_fraction", .. })
        ));
        assert_eq!(CloudState::checked(0.3).unwrap().last_cloud_fraction, 0.3);
    }
}
