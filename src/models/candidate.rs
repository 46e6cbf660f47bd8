//! Candidate model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The candidate an offer is being prepared for.
///
/// Consumed by the offer-document renderer and echoed in simulation
/// responses. The engine applies no validation beyond presence; identity
/// checks belong to the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Full name.
    pub full_name: String,
    /// National identity number.
    pub national_id: String,
    /// Intended role.
    pub role: String,
    /// Organizational unit.
    pub department: String,
    /// Direct manager.
    pub manager: String,
    /// Target start date.
    pub start_date: NaiveDate,
}
