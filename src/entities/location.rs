use serde::Serialize;

use crate::entities::program::ProgramType;
use crate::utils::geo::Coordinate;

/// A volunteer site shown on the map.
///
/// Built once with the catalog and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub contact: String,
    pub phone: String,
    pub hours_open: String,
    pub volunteers_needed: u32,
    /// Expected to stay at or below `volunteers_needed`; not enforced
    pub volunteers_signed_up: u32,
    pub commitment: String,
    pub next_event: String,
    /// Category tags, in display order
    pub programs: Vec<String>,
    pub requirements: Vec<String>,
    pub connected_programs: Vec<ProgramType>,
    pub coordinate: Coordinate,
}

/// Static description of an NGO, before a coordinate is attached
#[derive(Debug, Clone, Copy)]
pub struct LocationSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub address: &'static str,
    pub contact: &'static str,
    pub phone: &'static str,
    pub hours_open: &'static str,
    pub volunteers_needed: u32,
    pub volunteers_signed_up: u32,
    pub commitment: &'static str,
    pub next_event: &'static str,
    pub programs: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub connected_programs: &'static [ProgramType],
}

impl LocationSeed {
    /// Materialise the `index`-th location of a program at `coordinate`
    pub fn instantiate(&self, index: usize, coordinate: Coordinate) -> Location {
        Location {
            id: format!("{}_{}", self.id, index),
            name: self.name.to_string(),
            description: self.description.to_string(),
            address: self.address.to_string(),
            contact: self.contact.to_string(),
            phone: self.phone.to_string(),
            hours_open: self.hours_open.to_string(),
            volunteers_needed: self.volunteers_needed,
            volunteers_signed_up: self.volunteers_signed_up,
            commitment: self.commitment.to_string(),
            next_event: self.next_event.to_string(),
            programs: self.programs.iter().map(|p| p.to_string()).collect(),
            requirements: self.requirements.iter().map(|r| r.to_string()).collect(),
            connected_programs: self.connected_programs.to_vec(),
            coordinate,
        }
    }
}

impl Location {
    /// Leading number of the commitment text ("3-4 hours/week" -> 3)
    pub fn commitment_hours(&self) -> Option<u32> {
        let digits: String = self
            .commitment
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }

    /// Connected program ids, in the order they were declared
    pub fn connected_program_ids(&self) -> Vec<&'static str> {
        self.connected_programs.iter().map(|p| p.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commitment_hours() {
        let mut location = Location {
            commitment: "3-4 hours/week".to_string(),
            ..Location::default()
        };
        assert_eq!(location.commitment_hours(), Some(3));

        location.commitment = "About 12 hours a month".to_string();
        assert_eq!(location.commitment_hours(), Some(12));

        location.commitment = "Flexible".to_string();
        assert_eq!(location.commitment_hours(), None);
    }
}
