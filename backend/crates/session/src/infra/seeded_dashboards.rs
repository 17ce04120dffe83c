//! Seeded Dashboard Source
//!
//! Demo data for the three dashboards. Every `load` builds a new view, so a
//! caller may edit what it gets back without affecting anyone else.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::entity::dashboard::{
    AdminDashboard, Appointment, BedOccupancy, DashboardView, DepartmentLoad, PatientDashboard,
    PatientSummary, ProfessionalDashboard, RegistrantKind, RegistrationEntry, ScheduledVisit,
    StatCard, Trend, VisitStatus,
};
use crate::domain::repository::DashboardSource;
use crate::domain::value_object::role::Role;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeededDashboardSource;

impl SeededDashboardSource {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, role: Role) -> DashboardView {
        match role {
            Role::Patient => DashboardView::Patient(patient()),
            Role::Professional => DashboardView::Professional(professional()),
            Role::Admin => DashboardView::Admin(admin()),
        }
    }
}

impl DashboardSource for SeededDashboardSource {
    async fn load(&self, role: Role) -> DashboardView {
        self.build(role)
    }
}

// Seed values are literals; out-of-range ones fall back to the epoch so the
// source never panics.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

fn appointment(
    id: u32,
    doctor: &str,
    specialty: &str,
    date: NaiveDate,
    time: NaiveTime,
    location: &str,
) -> Appointment {
    Appointment {
        id,
        doctor: doctor.to_string(),
        specialty: specialty.to_string(),
        date,
        time,
        location: location.to_string(),
    }
}

fn patient() -> PatientDashboard {
    PatientDashboard {
        next_appointment: Some(appointment(
            0,
            "Dra. Maria Silva",
            "Cardiologia",
            date(2024, 4, 15),
            time(14, 30),
            "Clínica Central",
        )),
        upcoming_appointments: vec![
            appointment(
                1,
                "Dr. Carlos Santos",
                "Dermatologia",
                date(2024, 4, 20),
                time(15, 30),
                "Unidade Sul",
            ),
            appointment(
                2,
                "Dra. Ana Oliveira",
                "Oftalmologia",
                date(2024, 4, 25),
                time(10, 0),
                "Centro Médico Norte",
            ),
            appointment(
                3,
                "Dr. João Lima",
                "Ortopedia",
                date(2024, 4, 30),
                time(16, 15),
                "Clínica Central",
            ),
        ],
        health_stats: vec![
            StatCard::new("Consultas", "12", "+2", Trend::Up, "último mês"),
            StatCard::new("Exames", "8", "+3", Trend::Up, "último mês"),
            StatCard::new("Teleconsultas", "5", "+1", Trend::Up, "último mês"),
        ],
    }
}

fn professional() -> ProfessionalDashboard {
    let visit = |id, patient: &str, at, visit_type: &str, status| ScheduledVisit {
        id,
        patient: patient.to_string(),
        time: at,
        visit_type: visit_type.to_string(),
        status,
    };
    let summary = |id, name: &str, last_visit, condition: &str, next_visit| PatientSummary {
        id,
        name: name.to_string(),
        last_visit,
        condition: condition.to_string(),
        next_visit,
    };

    ProfessionalDashboard::new(
        vec![
            visit(1, "Maria Silva", time(9, 0), "Consulta Regular", VisitStatus::Scheduled),
            visit(2, "João Santos", time(10, 30), "Retorno", VisitStatus::Confirmed),
            visit(3, "Ana Oliveira", time(14, 0), "Primeira Consulta", VisitStatus::Confirmed),
        ],
        vec![
            summary(1, "Pedro Costa", date(2024, 3, 12), "Hipertensão", date(2024, 3, 20)),
            summary(2, "Lucia Ferreira", date(2024, 3, 11), "Diabetes Tipo 2", date(2024, 3, 25)),
            summary(3, "Carlos Mendes", date(2024, 3, 10), "Check-up Anual", date(2024, 4, 10)),
        ],
        vec![
            StatCard::new("Total de Consultas", "128", "+12%", Trend::Up, "vs. mês anterior"),
            StatCard::new("Pacientes Ativos", "85", "+5%", Trend::Up, "vs. mês anterior"),
            StatCard::new("Taxa de Retorno", "92%", "+2%", Trend::Up, "vs. mês anterior"),
        ],
    )
}

fn admin() -> AdminDashboard {
    let entry = |id, name: &str, kind, detail: &str, on| RegistrationEntry {
        id,
        name: name.to_string(),
        kind,
        detail: detail.to_string(),
        date: on,
    };
    let department = |name: &str, patients, trend, percentage| DepartmentLoad {
        name: name.to_string(),
        patients,
        trend,
        percentage,
    };

    AdminDashboard {
        stats: vec![
            StatCard::new("Total de Pacientes", "1,284", "+12.5%", Trend::Up, "vs. mês anterior"),
            StatCard::new("Internações Ativas", "64", "-3.2%", Trend::Down, "vs. mês anterior"),
            StatCard::new("Taxa de Ocupação", "85%", "+2.1%", Trend::Up, "vs. mês anterior"),
            StatCard::new("Consultas Hoje", "128", "+8.4%", Trend::Up, "vs. ontem"),
        ],
        recent_registrations: vec![
            entry(1, "Dr. Carlos Silva", RegistrantKind::Doctor, "Cardiologia", date(2024, 3, 15)),
            entry(2, "Maria Oliveira", RegistrantKind::Patient, "Consulta de rotina", date(2024, 3, 14)),
            entry(3, "Dra. Ana Santos", RegistrantKind::Doctor, "Pediatria", date(2024, 3, 14)),
        ],
        beds: BedOccupancy::new(15, 80),
        icu_occupancy_percent: 90,
        average_stay_days: 5.2,
        departments: vec![
            department("Cardiologia", 45, Trend::Up, 12),
            department("Pediatria", 38, Trend::Up, 8),
            department("Ortopedia", 32, Trend::Down, 3),
        ],
    }
}
