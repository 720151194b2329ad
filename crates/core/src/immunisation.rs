//! Permenkes infant immunisation schedule.
//!
//! Read-only reference data served alongside growth reports. Keyed by the age
//! in months at which each set of vaccines is due.

/// Vaccines due at each scheduled month.
const SCHEDULE: [(u32, &[&str]); 10] = [
    (0, &["HB-0 (< 24 jam)", "BCG", "Polio 0 (OPV)"]),
    (1, &["HB-1", "Polio 1", "DPT-HB-Hib 1", "PCV 1", "Rotavirus 1"]),
    (2, &["Polio 2", "DPT-HB-Hib 2", "PCV 2", "Rotavirus 2"]),
    (3, &["Polio 3", "DPT-HB-Hib 3", "PCV 3", "Rotavirus 3"]),
    (4, &["Polio 4", "DPT-HB-Hib 4"]),
    (9, &["Campak/MR 1"]),
    (12, &["Campak Booster", "PCV Booster"]),
    (15, &["Influenza (opsional)"]),
    (18, &["DPT-HB-Hib Booster", "Polio Booster"]),
    (
        24,
        &[
            "Campak Rubella (MR) 2",
            "Japanese Encephalitis (daerah endemis)",
        ],
    ),
];

/// The full schedule, ordered by month.
pub fn schedule() -> &'static [(u32, &'static [&'static str])] {
    &SCHEDULE
}

/// Vaccines due at exactly `age_months`, empty if none are scheduled.
pub fn due_at(age_months: u32) -> &'static [&'static str] {
    SCHEDULE
        .iter()
        .find(|(month, _)| *month == age_months)
        .map(|(_, vaccines)| *vaccines)
        .unwrap_or(&[])
}
