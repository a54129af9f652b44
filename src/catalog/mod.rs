//! In-memory catalog of program types and their locations.
//!
//! The catalog is generated once at startup from the static seeds in
//! [`seed`] and a ring of synthetic coordinates per program, then shared
//! read-only behind an `Arc`.

pub mod seed;

use std::collections::BTreeMap;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;

use crate::entities::location::Location;
use crate::entities::program::{CardInfo, ProgramInfo, ProgramType, Urgency};
use crate::utils::geo::{generate_ring, Coordinate};

/// Degrees between the default location and the education/shelter ring centres
const PROGRAM_CENTER_OFFSET: f64 = 0.02;

/// Hours assumed when a commitment text carries no number
const DEFAULT_COMMITMENT_HOURS: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    programs: BTreeMap<ProgramType, Vec<Location>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgramStats {
    pub locations: usize,
    pub volunteers_needed: u32,
    pub volunteers_signed_up: u32,
    pub available_spots: u32,
    pub average_commitment: u32,
    /// Percentage of needed volunteers already signed up
    pub fill_rate: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramCard {
    #[serde(flatten)]
    pub info: ProgramInfo,
    #[serde(flatten)]
    pub card: CardInfo,
    pub stats: ProgramStats,
}

/// Card filter offered next to the search box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFilter {
    #[default]
    All,
    Urgency(Urgency),
    Trending,
    Featured,
}

impl FromStr for CardFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CardFilter::All),
            "urgent" => Ok(CardFilter::Urgency(Urgency::Urgent)),
            "high" => Ok(CardFilter::Urgency(Urgency::High)),
            "medium" => Ok(CardFilter::Urgency(Urgency::Medium)),
            "trending" => Ok(CardFilter::Trending),
            "featured" => Ok(CardFilter::Featured),
            other => Err(format!("Unknown filter: {}", other)),
        }
    }
}

impl CardFilter {
    fn matches(&self, card: &CardInfo) -> bool {
        match self {
            CardFilter::All => true,
            CardFilter::Urgency(urgency) => card.urgency == *urgency,
            CardFilter::Trending => card.trending,
            CardFilter::Featured => card.featured,
        }
    }
}

/// Centre of the ring generated for `program`
pub fn ring_center(program: ProgramType, default_location: Coordinate) -> Coordinate {
    match program {
        ProgramType::Rehab => default_location,
        ProgramType::Education => {
            default_location.offset(PROGRAM_CENTER_OFFSET, -PROGRAM_CENTER_OFFSET)
        }
        ProgramType::HomelessShelter => {
            default_location.offset(-PROGRAM_CENTER_OFFSET, PROGRAM_CENTER_OFFSET)
        }
    }
}

impl Catalog {
    /// Generate `per_program` locations for every program type around
    /// `default_location`.
    pub fn build<R: Rng + ?Sized>(
        default_location: Coordinate,
        per_program: usize,
        radius_degrees: f64,
        rng: &mut R,
    ) -> Self {
        let programs = ProgramType::ALL
            .into_iter()
            .map(|program| {
                let seeds = seed::seeds_for(program);
                let ring = generate_ring(
                    ring_center(program, default_location),
                    per_program,
                    radius_degrees,
                    &mut *rng,
                );
                let locations: Vec<Location> = ring
                    .into_iter()
                    .enumerate()
                    .map(|(i, coordinate)| seeds[i % seeds.len()].instantiate(i, coordinate))
                    .collect();

                tracing::info!(
                    program = program.id(),
                    locations = locations.len(),
                    "Generated program locations"
                );
                (program, locations)
            })
            .collect();

        Self { programs }
    }

    /// Catalog over explicit location lists
    pub fn from_locations(programs: impl IntoIterator<Item = (ProgramType, Vec<Location>)>) -> Self {
        Self {
            programs: programs.into_iter().collect(),
        }
    }

    pub fn program_types(&self) -> impl Iterator<Item = ProgramType> + '_ {
        self.programs.keys().copied()
    }

    /// Program type and locations for a program id, if the catalog has it
    pub fn entry(&self, program_id: &str) -> Option<(ProgramType, &[Location])> {
        let program = ProgramType::from_id(program_id)?;
        self.programs
            .get(&program)
            .map(|locations| (program, locations.as_slice()))
    }

    pub fn locations(&self, program_id: &str) -> Option<&[Location]> {
        self.entry(program_id).map(|(_, locations)| locations)
    }

    pub fn locations_of(&self, program: ProgramType) -> &[Location] {
        self.programs
            .get(&program)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn find_location(&self, program: ProgramType, location_id: &str) -> Option<&Location> {
        self.locations_of(program)
            .iter()
            .find(|l| l.id == location_id)
    }

    pub fn stats(&self, program: ProgramType) -> ProgramStats {
        let locations = self.locations_of(program);
        let volunteers_needed: u32 = locations.iter().map(|l| l.volunteers_needed).sum();
        let volunteers_signed_up: u32 = locations.iter().map(|l| l.volunteers_signed_up).sum();

        let average_commitment = if locations.is_empty() {
            0
        } else {
            let hours: u32 = locations
                .iter()
                .map(|l| l.commitment_hours().unwrap_or(DEFAULT_COMMITMENT_HOURS))
                .sum();
            (hours as f64 / locations.len() as f64).round() as u32
        };

        let fill_rate = if volunteers_needed == 0 {
            0
        } else {
            (volunteers_signed_up as f64 / volunteers_needed as f64 * 100.0).round() as u32
        };

        ProgramStats {
            locations: locations.len(),
            volunteers_needed,
            volunteers_signed_up,
            available_spots: volunteers_needed.saturating_sub(volunteers_signed_up),
            average_commitment,
            fill_rate,
        }
    }

    pub fn card(&self, program: ProgramType) -> ProgramCard {
        ProgramCard {
            info: program.info(),
            card: program.card(),
            stats: self.stats(program),
        }
    }

    /// Cards whose name, description or skills contain `term`
    /// (case-insensitive, whitespace kept as typed) and that pass `filter`
    pub fn search_cards(&self, term: &str, filter: CardFilter) -> Vec<ProgramCard> {
        let term = term.to_lowercase();

        self.program_types()
            .map(|program| self.card(program))
            .filter(|card| {
                let matches_search = term.is_empty()
                    || card.info.name.to_lowercase().contains(&term)
                    || card.info.description.to_lowercase().contains(&term)
                    || card
                        .card
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&term));

                matches_search && filter.matches(&card.card)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CAPE_TOWN: Coordinate = Coordinate::new(-33.9249, 18.4241);

    fn catalog() -> Catalog {
        Catalog::build(CAPE_TOWN, 5, 0.04, &mut StdRng::seed_from_u64(42))
    }

    #[test]
    fn test_build_cycles_seeds() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog
            .locations("rehab")
            .unwrap()
            .iter()
            .map(|l| l.id.as_str())
            .collect();

        assert_eq!(
            ids,
            vec![
                "hope_recovery_0",
                "healing_minds_1",
                "new_beginnings_2",
                "hope_recovery_3",
                "healing_minds_4"
            ]
        );
    }

    #[test]
    fn test_build_is_repeatable_with_seed() {
        let a = catalog();
        let b = catalog();

        for program in ProgramType::ALL {
            assert_eq!(a.locations_of(program), b.locations_of(program));
        }
    }

    #[test]
    fn test_locations_sit_around_their_program_center() {
        let catalog = catalog();

        for program in ProgramType::ALL {
            let center = ring_center(program, CAPE_TOWN);
            for location in catalog.locations_of(program) {
                let offset = ((location.coordinate.lat - center.lat).powi(2)
                    + (location.coordinate.lng - center.lng).powi(2))
                .sqrt();
                assert!(offset <= 0.04 + 1e-12, "{} too far from center", location.id);
            }
        }
    }

    #[test]
    fn test_entry_unknown_program() {
        let catalog = catalog();
        assert!(catalog.entry("nonexistent").is_none());
        assert!(catalog.locations("").is_none());
    }

    #[test]
    fn test_missing_program_has_no_locations() {
        let catalog = Catalog::from_locations([(ProgramType::Rehab, Vec::new())]);

        assert!(catalog.locations_of(ProgramType::Education).is_empty());
        assert!(catalog.locations("education").is_none());
        assert_eq!(catalog.stats(ProgramType::Education).locations, 0);
        assert_eq!(catalog.stats(ProgramType::Education).fill_rate, 0);
    }

    #[test]
    fn test_rehab_stats() {
        let stats = catalog().stats(ProgramType::Rehab);

        // hope_recovery, healing_minds, new_beginnings, hope_recovery, healing_minds
        assert_eq!(stats.locations, 5);
        assert_eq!(stats.volunteers_needed, 12 + 15 + 20 + 12 + 15);
        assert_eq!(stats.volunteers_signed_up, 8 + 11 + 14 + 8 + 11);
        assert_eq!(stats.available_spots, 74 - 52);
        // (3 + 4 + 2 + 3 + 4) / 5 = 3.2
        assert_eq!(stats.average_commitment, 3);
        // 52 / 74 = 70.27%
        assert_eq!(stats.fill_rate, 70);
    }

    #[test]
    fn test_search_cards_by_skill() {
        let cards = catalog().search_cards("MENTOR", CardFilter::All);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].info.id, ProgramType::Education);
    }

    #[test]
    fn test_search_cards_empty_term_matches_all() {
        let cards = catalog().search_cards("", CardFilter::All);
        assert_eq!(cards.len(), 3);
    }

    #[test]
    fn test_search_cards_keeps_whitespace() {
        let catalog = catalog();

        assert!(catalog.search_cards("  ", CardFilter::All).is_empty());

        // "...mental health programs"
        let cards = catalog.search_cards("health ", CardFilter::All);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].info.id, ProgramType::Rehab);
    }

    #[test]
    fn test_search_cards_with_filter() {
        let catalog = catalog();

        let trending: Vec<ProgramType> = catalog
            .search_cards("", CardFilter::Trending)
            .into_iter()
            .map(|c| c.info.id)
            .collect();
        assert_eq!(trending, vec![ProgramType::Rehab, ProgramType::HomelessShelter]);

        let urgent_shelters = catalog.search_cards("shelter", "urgent".parse().unwrap());
        assert!(urgent_shelters.is_empty());

        let high_shelters = catalog.search_cards("shelter", "high".parse().unwrap());
        assert_eq!(high_shelters.len(), 1);
    }

    #[test]
    fn test_card_filter_parse() {
        assert_eq!("featured".parse::<CardFilter>(), Ok(CardFilter::Featured));
        assert_eq!(
            "medium".parse::<CardFilter>(),
            Ok(CardFilter::Urgency(Urgency::Medium))
        );
        assert!("popular".parse::<CardFilter>().is_err());
    }
}
