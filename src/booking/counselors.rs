//! Counseling staff and the sidebar data shown next to the booking form

use serde::Serialize;

/// A campus counselor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Counselor {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub rating: f32,
    pub experience: String,
    pub available: bool,
}

/// An already confirmed session shown under "Upcoming Sessions"
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingAppointment {
    pub id: u32,
    pub counselor: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CrisisLine {
    pub label: String,
    pub contact: String,
}

pub fn counselors() -> Vec<Counselor> {
    [
        (
            "dr-smith",
            "Dr. Sarah Smith",
            ["Anxiety", "Depression", "Academic Stress"],
            4.9,
            "8 years",
            true,
        ),
        (
            "dr-johnson",
            "Dr. Michael Johnson",
            ["Relationship Issues", "Self-Esteem", "Life Transitions"],
            4.8,
            "12 years",
            true,
        ),
        (
            "dr-williams",
            "Dr. Emily Williams",
            ["Trauma", "PTSD", "Crisis Counseling"],
            4.9,
            "10 years",
            false,
        ),
    ]
    .into_iter()
    .map(
        |(id, name, specialties, rating, experience, available)| Counselor {
            id: id.to_string(),
            name: name.to_string(),
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            rating,
            experience: experience.to_string(),
            available,
        },
    )
    .collect()
}

pub fn find_counselor<'a>(counselors: &'a [Counselor], id: &str) -> Option<&'a Counselor> {
    counselors.iter().find(|c| c.id == id)
}

pub fn upcoming_appointments() -> Vec<UpcomingAppointment> {
    vec![UpcomingAppointment {
        id: 1,
        counselor: "Dr. Sarah Smith".to_string(),
        date: "Tomorrow".to_string(),
        time: "2:00 PM".to_string(),
        session_type: "Video Call".to_string(),
        status: "confirmed".to_string(),
    }]
}

pub fn crisis_lines() -> Vec<CrisisLine> {
    [
        ("Campus Crisis Line", "24/7"),
        ("National Suicide Prevention", "988"),
    ]
    .into_iter()
    .map(|(label, contact)| CrisisLine {
        label: label.to_string(),
        contact: contact.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_counselor() {
        let staff = counselors();
        assert_eq!(find_counselor(&staff, "dr-smith").unwrap().name, "Dr. Sarah Smith");
        assert!(!find_counselor(&staff, "dr-williams").unwrap().available);
        assert!(find_counselor(&staff, "dr-who").is_none());
    }
}
