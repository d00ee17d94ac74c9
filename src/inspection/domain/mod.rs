pub mod category;
pub mod compliance_snapshot;
pub mod observation;
pub mod scoring_config;
pub mod session;

pub use category::{AssetCategory, ObservationCategory, NON_MAINTENANCE_CATEGORY};
pub use compliance_snapshot::ComplianceSnapshot;
pub use observation::{Observation, PhotoPayload, RiskLevel, MAX_PHOTOS_PER_OBSERVATION};
pub use scoring_config::ScoringConfig;
pub use session::{InspectionSession, SiteType};
