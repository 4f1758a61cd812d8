//! Ready-made systems.

pub mod depression_risk;

pub use depression_risk::{depression_risk_system, RiskAssessment, RiskBand};
