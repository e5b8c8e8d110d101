use crate::domain::{Coordinate, OfficeZone};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        Coordinate::new(inner.latitude, inner.longitude).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for OfficeZone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            latitude: f64,
            longitude: f64,
            radius_km: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        let center = Coordinate::new(inner.latitude, inner.longitude).map_err(D::Error::custom)?;
        OfficeZone::new(center, inner.radius_km).map_err(D::Error::custom)
    }
}
