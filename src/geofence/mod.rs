mod evaluator;
mod haversine;

pub use evaluator::{GeofenceEvaluation, GeofenceEvaluator};
pub use haversine::haversine_km;
