mod eligibility;
mod provenance;
mod record;

pub use eligibility::is_eligible;
pub use provenance::{extract_provenance, Provenance};
pub use record::{ImageId, ImageRecord};
