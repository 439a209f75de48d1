//! Weighment slip lifecycle model
//!
//! A slip is created at the gross weighing and completed at the tare
//! weighing. The two states are distinct types: tare and net fields exist
//! only on [`CompleteSlip`], and completion consumes the [`PendingSlip`], so
//! a slip cannot be completed twice or lose its derived fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kanta_types::{Error, Result};

use crate::service::weight::net_weight;

/// Lifecycle state of a slip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlipStatus {
    Pending,
    Complete,
}

impl std::fmt::Display for SlipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlipStatus::Pending => write!(f, "Pending"),
            SlipStatus::Complete => write!(f, "Complete"),
        }
    }
}

/// A weighbridge transaction record
///
/// Serialized form is tagged on `status`; pending slips carry no tare or net
/// keys at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum Slip {
    Pending(PendingSlip),
    Complete(CompleteSlip),
}

/// A slip after the gross weighing, waiting for the empty vehicle to return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingSlip {
    /// Unique identifier, never reused
    pub id: String,
    /// Zero-padded sequential number, unique across the register
    pub slip_number: String,
    /// Vehicle registration, upper-cased
    pub vehicle_number: String,
    /// Material description
    pub material: String,
    /// Weight of the loaded vehicle in tons
    pub gross_weight: f64,
    /// When the gross weighing happened
    pub gross_weight_time: DateTime<Utc>,
}

/// A finished slip with the derived net cargo weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteSlip {
    pub id: String,
    pub slip_number: String,
    pub vehicle_number: String,
    pub material: String,
    pub gross_weight: f64,
    pub gross_weight_time: DateTime<Utc>,
    /// Weight of the empty vehicle in tons
    pub tare_weight: f64,
    /// When the tare weighing happened
    pub tare_weight_time: DateTime<Utc>,
    /// `abs(gross - tare)`, derived once at completion
    pub net_weight: f64,
}

impl PendingSlip {
    /// Create a pending slip from the gross weighing.
    ///
    /// Trims and upper-cases the vehicle number, trims the material, mints
    /// the id, and stamps the gross weighing time.
    pub fn new(
        slip_number: String,
        vehicle_number: &str,
        material: &str,
        gross_weight: f64,
    ) -> Result<Self> {
        let vehicle_number = vehicle_number.trim();
        let material = material.trim();

        if vehicle_number.is_empty() {
            return Err(Error::Validation("vehicle number is required".to_string()));
        }
        if material.is_empty() {
            return Err(Error::Validation("material is required".to_string()));
        }
        validate_weight("gross weight", gross_weight)?;

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            slip_number,
            vehicle_number: vehicle_number.to_uppercase(),
            material: material.to_string(),
            gross_weight,
            gross_weight_time: Utc::now(),
        })
    }

    /// Complete the slip with the tare weighing.
    ///
    /// Consumes the pending record; the returned slip carries the derived
    /// net weight and the tare weighing time.
    pub fn complete(self, tare_weight: f64) -> Result<CompleteSlip> {
        validate_weight("tare weight", tare_weight)?;

        Ok(CompleteSlip {
            net_weight: net_weight(self.gross_weight, tare_weight),
            id: self.id,
            slip_number: self.slip_number,
            vehicle_number: self.vehicle_number,
            material: self.material,
            gross_weight: self.gross_weight,
            gross_weight_time: self.gross_weight_time,
            tare_weight,
            tare_weight_time: Utc::now(),
        })
    }
}

fn validate_weight(label: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(Error::Validation(format!(
            "{label} must be a positive number of tons, got {weight}"
        )));
    }
    Ok(())
}

impl Slip {
    pub fn id(&self) -> &str {
        match self {
            Slip::Pending(s) => &s.id,
            Slip::Complete(s) => &s.id,
        }
    }

    pub fn slip_number(&self) -> &str {
        match self {
            Slip::Pending(s) => &s.slip_number,
            Slip::Complete(s) => &s.slip_number,
        }
    }

    pub fn vehicle_number(&self) -> &str {
        match self {
            Slip::Pending(s) => &s.vehicle_number,
            Slip::Complete(s) => &s.vehicle_number,
        }
    }

    pub fn material(&self) -> &str {
        match self {
            Slip::Pending(s) => &s.material,
            Slip::Complete(s) => &s.material,
        }
    }

    pub fn gross_weight(&self) -> f64 {
        match self {
            Slip::Pending(s) => s.gross_weight,
            Slip::Complete(s) => s.gross_weight,
        }
    }

    pub fn gross_weight_time(&self) -> DateTime<Utc> {
        match self {
            Slip::Pending(s) => s.gross_weight_time,
            Slip::Complete(s) => s.gross_weight_time,
        }
    }

    pub fn status(&self) -> SlipStatus {
        match self {
            Slip::Pending(_) => SlipStatus::Pending,
            Slip::Complete(_) => SlipStatus::Complete,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Slip::Pending(_))
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Slip::Complete(_))
    }

    pub fn as_complete(&self) -> Option<&CompleteSlip> {
        match self {
            Slip::Pending(_) => None,
            Slip::Complete(s) => Some(s),
        }
    }
}
