//! Dashboard View Models
//!
//! One owned struct per role. A view is built per request by a
//! [`DashboardSource`](crate::domain::repository::DashboardSource) and handed
//! to the caller; nothing here is shared between requests.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::domain::value_object::role::Role;

// ============================================================================
// Shared pieces
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Headline number with its change over a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub period: String,
}

impl StatCard {
    pub fn new(label: &str, value: &str, change: &str, trend: Trend, period: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            change: change.to_string(),
            trend,
            period: period.to_string(),
        }
    }
}

// ============================================================================
// Patient
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: u32,
    pub doctor: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDashboard {
    pub next_appointment: Option<Appointment>,
    pub upcoming_appointments: Vec<Appointment>,
    pub health_stats: Vec<StatCard>,
}

// ============================================================================
// Professional
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Scheduled,
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledVisit {
    pub id: u32,
    pub patient: String,
    pub time: NaiveTime,
    pub visit_type: String,
    pub status: VisitStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub id: u32,
    pub name: String,
    pub last_visit: NaiveDate,
    pub condition: String,
    pub next_visit: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalDashboard {
    pub todays_appointments: Vec<ScheduledVisit>,
    /// Visits of the day still waiting for confirmation
    pub pending_confirmations: usize,
    pub recent_patients: Vec<PatientSummary>,
    pub stats: Vec<StatCard>,
}

impl ProfessionalDashboard {
    pub fn new(
        todays_appointments: Vec<ScheduledVisit>,
        recent_patients: Vec<PatientSummary>,
        stats: Vec<StatCard>,
    ) -> Self {
        let pending_confirmations = todays_appointments
            .iter()
            .filter(|v| v.status == VisitStatus::Scheduled)
            .count();
        Self {
            todays_appointments,
            pending_confirmations,
            recent_patients,
            stats,
        }
    }
}

// ============================================================================
// Admin
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrantKind {
    Doctor,
    Patient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationEntry {
    pub id: u32,
    pub name: String,
    pub kind: RegistrantKind,
    /// Specialty for doctors, reason of visit for patients
    pub detail: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedOccupancy {
    pub available: u32,
    pub total: u32,
    /// Occupied share in whole percent, rounded down
    pub occupancy_percent: u32,
}

impl BedOccupancy {
    /// `occupancy_percent` is `0` when there are no beds.
    pub fn new(available: u32, total: u32) -> Self {
        let occupancy_percent = match total {
            0 => 0,
            _ => total.saturating_sub(available) * 100 / total,
        };
        Self {
            available,
            total,
            occupancy_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLoad {
    pub name: String,
    pub patients: u32,
    pub trend: Trend,
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub stats: Vec<StatCard>,
    pub recent_registrations: Vec<RegistrationEntry>,
    pub beds: BedOccupancy,
    pub icu_occupancy_percent: u32,
    pub average_stay_days: f32,
    pub departments: Vec<DepartmentLoad>,
}

// ============================================================================
// Role-tagged view
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum DashboardView {
    Patient(PatientDashboard),
    Professional(ProfessionalDashboard),
    Admin(AdminDashboard),
}

impl DashboardView {
    pub fn role(&self) -> Role {
        match self {
            DashboardView::Patient(_) => Role::Patient,
            DashboardView::Professional(_) => Role::Professional,
            DashboardView::Admin(_) => Role::Admin,
        }
    }
}
