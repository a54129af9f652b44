use serde::{Deserialize, Serialize};

/// The fixed set of volunteer program categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Rehab,
    Education,
    HomelessShelter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Urgent,
    High,
    Medium,
}

/// Static display metadata for a program type
#[derive(Debug, Clone, Serialize)]
pub struct ProgramInfo {
    pub id: ProgramType,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

/// Promotional card metadata shown on the landing page
#[derive(Debug, Clone, Serialize)]
pub struct CardInfo {
    pub impact: &'static str,
    pub urgency: Urgency,
    pub time_commitment: &'static str,
    pub skills: &'static [&'static str],
    pub trending: bool,
    pub featured: bool,
}

impl ProgramType {
    pub const ALL: [ProgramType; 3] = [
        ProgramType::Rehab,
        ProgramType::Education,
        ProgramType::HomelessShelter,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProgramType::Rehab => "rehab",
            ProgramType::Education => "education",
            ProgramType::HomelessShelter => "homeless_shelter",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    pub fn info(&self) -> ProgramInfo {
        match self {
            ProgramType::Rehab => ProgramInfo {
                id: *self,
                name: "Rehabilitation Centers",
                icon: "medical",
                color: "#10B981",
                description: "Support addiction recovery and mental health programs",
            },
            ProgramType::Education => ProgramInfo {
                id: *self,
                name: "Education Centers",
                icon: "book",
                color: "#3B82F6",
                description: "Help provide educational support and tutoring",
            },
            ProgramType::HomelessShelter => ProgramInfo {
                id: *self,
                name: "Homeless Shelters",
                icon: "home",
                color: "#F59E0B",
                description: "Assist with housing and basic needs support",
            },
        }
    }

    pub fn card(&self) -> CardInfo {
        match self {
            ProgramType::Rehab => CardInfo {
                impact: "Life-Changing",
                urgency: Urgency::Urgent,
                time_commitment: "Medium",
                skills: &["Empathy", "Active Listening", "Patience"],
                trending: true,
                featured: true,
            },
            ProgramType::Education => CardInfo {
                impact: "Future-Building",
                urgency: Urgency::Medium,
                time_commitment: "Flexible",
                skills: &["Teaching", "Mentoring", "Subject Knowledge"],
                trending: false,
                featured: false,
            },
            ProgramType::HomelessShelter => CardInfo {
                impact: "Immediate Relief",
                urgency: Urgency::High,
                time_commitment: "High",
                skills: &["Compassion", "Physical Tasks", "Team Work"],
                trending: true,
                featured: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for program in ProgramType::ALL {
            assert_eq!(ProgramType::from_id(program.id()), Some(program));
        }
        assert_eq!(ProgramType::from_id("Rehab"), None);
        assert_eq!(ProgramType::from_id("nonexistent"), None);
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&ProgramType::HomelessShelter).unwrap();
        assert_eq!(json, "\"homeless_shelter\"");
    }
}
