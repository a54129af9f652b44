//! Base NGO records for each program type.
//!
//! A program with more locations than seeds reuses them cyclically.

use crate::entities::location::LocationSeed;
use crate::entities::program::ProgramType;

pub const REHAB_SEEDS: &[LocationSeed] = &[
    LocationSeed {
        id: "hope_recovery",
        name: "Hope Recovery Center",
        description: "Comprehensive addiction recovery and mental health support",
        address: "123 Recovery Ave, Cape Town",
        contact: "volunteer@hoperecovery.org",
        phone: "+27 21 123 4567",
        hours_open: "Mon-Fri: 8AM-6PM, Sat: 9AM-4PM",
        volunteers_needed: 12,
        volunteers_signed_up: 8,
        commitment: "3-4 hours/week",
        next_event: "Group Therapy Support - Wednesday 2 PM",
        programs: &["Addiction Counseling", "Art Therapy", "Life Skills Training"],
        requirements: &["Background check required", "Training provided", "Minimum 6 month commitment"],
        connected_programs: &[ProgramType::Education, ProgramType::HomelessShelter],
    },
    LocationSeed {
        id: "healing_minds",
        name: "Healing Minds Foundation",
        description: "Mental health awareness and crisis intervention support",
        address: "456 Wellness St, Cape Town",
        contact: "help@healingminds.org",
        phone: "+27 21 234 5678",
        hours_open: "Daily: 9AM-9PM",
        volunteers_needed: 15,
        volunteers_signed_up: 11,
        commitment: "4-6 hours/week",
        next_event: "Crisis Hotline Training - Saturday 10 AM",
        programs: &["Crisis Hotline", "Peer Support", "Community Outreach"],
        requirements: &["Mental health first aid certification preferred", "Excellent listening skills"],
        connected_programs: &[ProgramType::Education],
    },
    LocationSeed {
        id: "new_beginnings",
        name: "New Beginnings Rehab",
        description: "Residential rehabilitation and aftercare programs",
        address: "789 Fresh Start Rd, Cape Town",
        contact: "volunteer@newbeginnings.org",
        phone: "+27 21 345 6789",
        hours_open: "Mon-Sun: 7AM-10PM",
        volunteers_needed: 20,
        volunteers_signed_up: 14,
        commitment: "2-3 hours/week",
        next_event: "Recovery Workshop - Friday 4 PM",
        programs: &["Residential Care", "Aftercare Support", "Family Counseling"],
        requirements: &["Must be 21+", "Substance-free lifestyle", "Regular availability"],
        connected_programs: &[ProgramType::HomelessShelter],
    },
];

pub const EDUCATION_SEEDS: &[LocationSeed] = &[
    LocationSeed {
        id: "bright_futures",
        name: "Bright Futures Learning Center",
        description: "Educational support for underprivileged children and adults",
        address: "321 Education Blvd, Cape Town",
        contact: "teach@brightfutures.org",
        phone: "+27 21 456 7890",
        hours_open: "Mon-Fri: 2PM-8PM, Sat: 9AM-5PM",
        volunteers_needed: 18,
        volunteers_signed_up: 12,
        commitment: "3-5 hours/week",
        next_event: "Math Tutoring Session - Monday 4 PM",
        programs: &["Academic Tutoring", "Computer Literacy", "Adult Education"],
        requirements: &["High school diploma minimum", "Patience with learners", "Reliable schedule"],
        connected_programs: &[ProgramType::Rehab, ProgramType::HomelessShelter],
    },
    LocationSeed {
        id: "knowledge_bridge",
        name: "Knowledge Bridge Academy",
        description: "Bridging educational gaps in disadvantaged communities",
        address: "654 Learning Lane, Cape Town",
        contact: "volunteer@knowledgebridge.org",
        phone: "+27 21 567 8901",
        hours_open: "Mon-Fri: 3PM-7PM, Sat: 10AM-4PM",
        volunteers_needed: 10,
        volunteers_signed_up: 7,
        commitment: "2-4 hours/week",
        next_event: "Reading Program - Tuesday 3:30 PM",
        programs: &["Reading Support", "Science Labs", "Career Guidance"],
        requirements: &["Subject expertise preferred", "Background check required"],
        connected_programs: &[ProgramType::Rehab],
    },
    LocationSeed {
        id: "digital_literacy",
        name: "Digital Literacy Hub",
        description: "Teaching essential computer and digital skills",
        address: "987 Tech Center Way, Cape Town",
        contact: "info@digitalliteracy.org",
        phone: "+27 21 678 9012",
        hours_open: "Mon-Sat: 10AM-6PM",
        volunteers_needed: 8,
        volunteers_signed_up: 5,
        commitment: "4-6 hours/week",
        next_event: "Basic Computer Skills - Thursday 11 AM",
        programs: &["Basic Computing", "Internet Safety", "Digital Job Skills"],
        requirements: &["Computer proficiency required", "Teaching experience preferred"],
        connected_programs: &[ProgramType::HomelessShelter],
    },
];

pub const HOMELESS_SHELTER_SEEDS: &[LocationSeed] = &[
    LocationSeed {
        id: "safe_harbor",
        name: "Safe Harbor Shelter",
        description: "Emergency housing and support services for homeless individuals",
        address: "147 Shelter St, Cape Town",
        contact: "help@safeharbor.org",
        phone: "+27 21 789 0123",
        hours_open: "Daily: 24/7 (Volunteer shifts vary)",
        volunteers_needed: 25,
        volunteers_signed_up: 19,
        commitment: "4-8 hours/week",
        next_event: "Meal Service - Daily 6 PM",
        programs: &["Emergency Housing", "Meal Service", "Case Management"],
        requirements: &["Flexible schedule", "Compassionate attitude", "Physical ability for meal prep"],
        connected_programs: &[ProgramType::Rehab, ProgramType::Education],
    },
    LocationSeed {
        id: "hope_house",
        name: "Hope House Transitional Living",
        description: "Transitional housing and life skills development",
        address: "258 Transition Ave, Cape Town",
        contact: "volunteer@hopehouse.org",
        phone: "+27 21 890 1234",
        hours_open: "Mon-Fri: 8AM-8PM, Weekends: 10AM-6PM",
        volunteers_needed: 16,
        volunteers_signed_up: 12,
        commitment: "3-5 hours/week",
        next_event: "Life Skills Workshop - Wednesday 1 PM",
        programs: &["Transitional Housing", "Job Training", "Financial Literacy"],
        requirements: &["Professional experience helpful", "Long-term commitment preferred"],
        connected_programs: &[ProgramType::Education],
    },
    LocationSeed {
        id: "community_outreach",
        name: "Community Outreach Mobile Unit",
        description: "Mobile services bringing aid directly to homeless communities",
        address: "369 Outreach Rd, Cape Town",
        contact: "mobile@communityoutreach.org",
        phone: "+27 21 901 2345",
        hours_open: "Daily: 6AM-10PM (Mobile schedule)",
        volunteers_needed: 12,
        volunteers_signed_up: 8,
        commitment: "6-8 hours/week",
        next_event: "Street Outreach - Saturday 7 AM",
        programs: &["Mobile Services", "Health Screenings", "Resource Connection"],
        requirements: &["Ability to work outdoors", "Valid driver license preferred", "Strong communication skills"],
        connected_programs: &[ProgramType::Rehab],
    },
];
/// Seeds for `program`, never empty
pub fn seeds_for(program: ProgramType) -> &'static [LocationSeed] {
    match program {
        ProgramType::Rehab => REHAB_SEEDS,
        ProgramType::Education => EDUCATION_SEEDS,
        ProgramType::HomelessShelter => HOMELESS_SHELTER_SEEDS,
    }
}
