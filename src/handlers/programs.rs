use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{CardFilter, ProgramCard, ProgramStats};
use crate::entities::location::Location;
use crate::entities::program::{ProgramInfo, ProgramType};
use crate::error::{AppError, AppResult};
use crate::handlers::{parse_position, ApiQuery, PositionQuery};
use crate::utils::geo::{haversine, nearest, resolve_connections, resolve_reference, Coordinate, DistanceResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgramSearchQuery {
    #[serde(default)]
    pub search: String,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProgramDetailResponse {
    pub program: ProgramInfo,
    pub stats: ProgramStats,
}

#[derive(Debug, Serialize)]
pub struct LocationDistanceResponse {
    pub location: Location,
    pub distance: DistanceResult,
    pub distance_km_text: String,
}

#[derive(Debug, Serialize)]
pub struct NearestResponse {
    pub reference: Coordinate,
    pub program: ProgramInfo,
    pub location: Location,
    pub distance: DistanceResult,
}

#[derive(Debug, Serialize)]
pub struct ConnectedProgramResponse {
    pub program: ProgramInfo,
    pub location: Location,
    pub distance: DistanceResult,
}

#[derive(Debug, Serialize)]
pub struct LocationDetailResponse {
    pub reference: Coordinate,
    pub location: Location,
    pub distance: DistanceResult,
    pub connected_programs: Vec<ConnectedProgramResponse>,
}

#[derive(Debug, Deserialize)]
pub struct ConnectionsQuery {
    /// Comma separated program ids
    pub programs: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub location_id: String,
    pub registered: bool,
    pub message: String,
}

fn program_from_path(program_id: &str) -> AppResult<ProgramType> {
    ProgramType::from_id(program_id)
        .ok_or_else(|| AppError::NotFound(format!("Program not found: {}", program_id)))
}

fn with_distance(reference: Coordinate, location: &Location) -> LocationDistanceResponse {
    let distance = haversine(reference, location.coordinate);
    LocationDistanceResponse {
        location: location.clone(),
        distance,
        distance_km_text: distance.km_text(),
    }
}

fn connected_programs(
    state: &AppState,
    reference: Coordinate,
    program_ids: &[&str],
) -> Vec<ConnectedProgramResponse> {
    resolve_connections(reference, program_ids, &state.catalog)
        .into_iter()
        .map(|connected| ConnectedProgramResponse {
            program: connected.program_type.info(),
            location: connected.location.clone(),
            distance: haversine(reference, connected.location.coordinate),
        })
        .collect()
}

/// Placeholder text shown instead of a real registration flow
pub fn registration_message(location: &Location, distance: Option<&DistanceResult>) -> String {
    let mut message = format!(
        "Organization: {}\nCurrent Volunteers: {}/{}\nCommitment: {}\nNext Event: {}\n",
        location.name,
        location.volunteers_signed_up,
        location.volunteers_needed,
        location.commitment,
        location.next_event,
    );
    if let Some(distance) = distance {
        message.push_str(&format!("Distance: {} km away\n", distance.km_text()));
    }
    message.push_str(&format!(
        "\nThis would open the registration form for {}.\n\
         Registration process includes:\n\
         - Application form\n\
         - Background check\n\
         - Orientation scheduling\n\
         - Training programs",
        location.name
    ));
    message
}

/// List program cards, optionally filtered by search text and card filter
pub async fn list_programs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ProgramSearchQuery>,
) -> AppResult<Json<Vec<ProgramCard>>> {
    let filter = match query.filter.as_deref() {
        Some(raw) => raw.parse::<CardFilter>().map_err(AppError::BadRequest)?,
        None => CardFilter::All,
    };

    Ok(Json(state.catalog.search_cards(&query.search, filter)))
}

/// Get a program type with its aggregate stats
pub async fn get_program(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
) -> AppResult<Json<ProgramDetailResponse>> {
    let program = program_from_path(&program_id)?;

    Ok(Json(ProgramDetailResponse {
        program: program.info(),
        stats: state.catalog.stats(program),
    }))
}

/// List a program's locations with their distance from the reference point
pub async fn list_locations(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    ApiQuery(query): ApiQuery<PositionQuery>,
) -> AppResult<Json<Vec<LocationDistanceResponse>>> {
    let program = program_from_path(&program_id)?;
    let reference = resolve_reference(
        parse_position(query.lat, query.lng)?,
        state.config.default_location,
    );

    let responses = state
        .catalog
        .locations_of(program)
        .iter()
        .map(|location| with_distance(reference, location))
        .collect();

    Ok(Json(responses))
}

/// Find the program location closest to the reference point
pub async fn nearest_location(
    State(state): State<AppState>,
    Path(program_id): Path<String>,
    ApiQuery(query): ApiQuery<PositionQuery>,
) -> AppResult<Json<NearestResponse>> {
    let program = program_from_path(&program_id)?;
    let reference = resolve_reference(
        parse_position(query.lat, query.lng)?,
        state.config.default_location,
    );

    let location = nearest(reference, state.catalog.locations_of(program)).ok_or_else(|| {
        AppError::NotFound(format!("No locations for program: {}", program.id()))
    })?;

    Ok(Json(NearestResponse {
        reference,
        program: program.info(),
        location: location.clone(),
        distance: haversine(reference, location.coordinate),
    }))
}

/// Location details with its connected programs resolved to their nearest sites
pub async fn get_location(
    State(state): State<AppState>,
    Path((program_id, location_id)): Path<(String, String)>,
    ApiQuery(query): ApiQuery<PositionQuery>,
) -> AppResult<Json<LocationDetailResponse>> {
    let program = program_from_path(&program_id)?;
    let reference = resolve_reference(
        parse_position(query.lat, query.lng)?,
        state.config.default_location,
    );

    let location = state
        .catalog
        .find_location(program, &location_id)
        .ok_or_else(|| AppError::NotFound(format!("Location not found: {}", location_id)))?;

    let connected = connected_programs(&state, reference, &location.connected_program_ids());

    Ok(Json(LocationDetailResponse {
        reference,
        location: location.clone(),
        distance: haversine(reference, location.coordinate),
        connected_programs: connected,
    }))
}

/// Resolve an arbitrary list of program ids; unknown ids are left out
pub async fn resolve_program_connections(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ConnectionsQuery>,
) -> AppResult<Json<Vec<ConnectedProgramResponse>>> {
    let reference = resolve_reference(
        parse_position(query.lat, query.lng)?,
        state.config.default_location,
    );
    let ids: Vec<&str> = query
        .programs
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    Ok(Json(connected_programs(&state, reference, &ids)))
}

/// Placeholder registration: nothing is stored
pub async fn register_interest(
    State(state): State<AppState>,
    Path((program_id, location_id)): Path<(String, String)>,
    ApiQuery(query): ApiQuery<PositionQuery>,
) -> AppResult<Json<RegistrationResponse>> {
    let program = program_from_path(&program_id)?;
    let position = parse_position(query.lat, query.lng)?;

    let location = state
        .catalog
        .find_location(program, &location_id)
        .ok_or_else(|| AppError::NotFound(format!("Location not found: {}", location_id)))?;

    let distance = position.map(|p| haversine(p, location.coordinate));
    tracing::info!(location_id = %location.id, "Placeholder registration requested");

    Ok(Json(RegistrationResponse {
        location_id: location.id.clone(),
        registered: false,
        message: registration_message(location, distance.as_ref()),
    }))
}
