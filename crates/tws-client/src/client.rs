//! Blocking client for the real-estate property backend.
//!
//! One method per endpoint the tower structuring flow consumes. Lookup
//! responses are cached for the session; write operations always hit the
//! network. Requests authenticate via the `secret_key` header.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use tws_model::wire::{CreatedTowerWire, TowerDetailsWire};
use tws_model::{
    AreaOption, CreateTowerRequest, SerializePropertyPayload, SocietyBlock, StructureOption,
    TowerDetails, TowerStructure, UpdateTowerPayload,
};

use crate::credentials::Credentials;
use crate::error::{ClientError, Result};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the auth token.
const SECRET_KEY_HEADER: &str = "secret_key";

/// Path prefix shared by every endpoint in this contract.
const API_PREFIX: &str = "real-estate-properties";

/// Lookup query for the structure catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructureQuery {
    pub project_id: i64,
    pub sub_property_type_id: i64,
    pub floor_unit_id: i64,
}

/// Lookup query for the area catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AreaQuery {
    pub project_id: i64,
    pub sub_property_type_id: i64,
    pub floor_unit_id: i64,
    pub structure_id: i64,
}

/// Query for the backend-computed maximum linkable units.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityQuery {
    pub project_id: i64,
    pub sub_property_type_id: i64,
    pub floor_unit_id: i64,
    pub structure_id: i64,
    pub area: f64,
    pub area_unit_id: i64,
}

/// Client for the property backend, holding explicit credentials and a
/// session-scoped cache of lookup responses.
pub struct ApiClient {
    http: Client,
    credentials: Credentials,
    structure_cache: Mutex<HashMap<StructureQuery, Vec<StructureOption>>>,
    area_cache: Mutex<HashMap<AreaQuery, Vec<AreaOption>>>,
}

impl ApiClient {
    /// Create a new client.
    pub fn new(credentials: Credentials) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self {
            http,
            credentials,
            structure_cache: Mutex::new(HashMap::new()),
            area_cache: Mutex::new(HashMap::new()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{API_PREFIX}/{path}", self.credentials.base_url())
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header(SECRET_KEY_HEADER, self.credentials.secret_key())
    }

    fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .unwrap_or_else(|_| "unknown error".to_string());
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.authed(self.http.get(self.url(path))).send()?;
        Self::check(response)?
            .json()
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn send_json<B: serde::Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<Response> {
        let response = self.authed(builder).json(body).send()?;
        Self::check(response)
    }

    // -----------------------------------------------------------------------
    // Lookups (cached for the session)
    // -----------------------------------------------------------------------

    /// Structure catalog for a (project, sub-property type, floor unit).
    pub fn structures(&self, query: &StructureQuery) -> Result<Vec<StructureOption>> {
        if let Some(hit) = self.structure_cache.lock().unwrap().get(query) {
            debug!(?query, "structure lookup served from cache");
            return Ok(hit.clone());
        }
        let path = format!(
            "getStructureByProjectIdAndSubPropertyTypeIdOfLinkableProperty?projectId={}&subPropertyTypeId={}&floorUnitId={}",
            query.project_id, query.sub_property_type_id, query.floor_unit_id
        );
        let options: Vec<StructureOption> = self.get_json(&path)?;
        self.structure_cache
            .lock()
            .unwrap()
            .insert(query.clone(), options.clone());
        Ok(options)
    }

    /// Like [`Self::structures`] but degrades to an empty list on failure,
    /// leaving the rest of the flow usable.
    pub fn structures_or_empty(&self, query: &StructureQuery) -> Vec<StructureOption> {
        match self.structures(query) {
            Ok(options) => options,
            Err(error) => {
                warn!(%error, "structure lookup failed, degrading to empty list");
                Vec::new()
            }
        }
    }

    /// Area catalog for a (sub-property type, structure, floor unit).
    pub fn areas(&self, query: &AreaQuery) -> Result<Vec<AreaOption>> {
        if let Some(hit) = self.area_cache.lock().unwrap().get(query) {
            debug!(?query, "area lookup served from cache");
            return Ok(hit.clone());
        }
        let path = format!(
            "getPropertyAreasBySubPropertyTypeIdAndStructureIdAndFloorUnit?projectId={}&subPropertyTypeId={}&floorUnitId={}&structureId={}",
            query.project_id, query.sub_property_type_id, query.floor_unit_id, query.structure_id
        );
        let options: Vec<AreaOption> = self.get_json(&path)?;
        self.area_cache
            .lock()
            .unwrap()
            .insert(query.clone(), options.clone());
        Ok(options)
    }

    /// Like [`Self::areas`] but degrades to an empty list on failure.
    pub fn areas_or_empty(&self, query: &AreaQuery) -> Vec<AreaOption> {
        match self.areas(query) {
            Ok(options) => options,
            Err(error) => {
                warn!(%error, "area lookup failed, degrading to empty list");
                Vec::new()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Capacity
    // -----------------------------------------------------------------------

    /// Maximum linkable units for a (structure, area) pair, backend-computed.
    pub fn total_linkable_unit(&self, query: &CapacityQuery) -> Result<u32> {
        let path = format!(
            "getTotalLinkableUnit?projectId={}&subPropertyTypeId={}&floorUnitId={}&structureId={}&area={}&areaUnitId={}",
            query.project_id,
            query.sub_property_type_id,
            query.floor_unit_id,
            query.structure_id,
            query.area,
            query.area_unit_id
        );
        self.get_json(&path)
    }

    /// Fail-closed capacity fetch: a failure yields `0`, blocking further
    /// additions rather than risking oversubscription. The error comes back
    /// alongside so the caller can surface it.
    pub fn total_linkable_unit_or_zero(&self, query: &CapacityQuery) -> (u32, Option<ClientError>) {
        match self.total_linkable_unit(query) {
            Ok(total) => (total, None),
            Err(error) => {
                warn!(%error, "capacity fetch failed, treating capacity as 0/0");
                (0, Some(error))
            }
        }
    }

    // -----------------------------------------------------------------------
    // Tower structure
    // -----------------------------------------------------------------------

    /// Create a tower skeleton; returns the fully materialized structure.
    pub fn create_tower_structure(&self, request: &CreateTowerRequest) -> Result<TowerStructure> {
        debug!(tower = %request.tower_name, floors = request.no_of_floors, "creating tower structure");
        let response =
            self.send_json(self.http.post(self.url("createTowerStructureForApi")), request)?;
        let wire: CreatedTowerWire = response
            .json()
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(wire.into_tower_structure())
    }

    /// Persist unit numbers for a freshly created structure.
    pub fn serialize_property(&self, payload: &SerializePropertyPayload) -> Result<()> {
        self.send_json(self.http.post(self.url("serializeProperty")), payload)?;
        Ok(())
    }

    /// List persisted blocks for a project.
    pub fn society_blocks(&self, project_id: i64) -> Result<Vec<SocietyBlock>> {
        self.get_json(&format!("getAllSocietyBlocksByProjectId/{project_id}"))
    }

    /// Fetch a persisted tower by block id; flats arrive keyed by `flatId`.
    pub fn tower_details(&self, block_id: i64) -> Result<TowerDetails> {
        let wire: TowerDetailsWire =
            self.get_json(&format!("getTowerDetailsByTowerId/{block_id}"))?;
        Ok(wire.into_tower_details()?)
    }

    /// Persist unit numbers for an existing tower.
    ///
    /// The PUT carries the full structure and no version token; concurrent
    /// edits resolve last-writer-wins.
    pub fn update_tower_details(&self, payload: &UpdateTowerPayload) -> Result<()> {
        self.send_json(self.http.put(self.url("updateTowerDetails")), payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(Credentials::new("https://backend.example.com/", "token")).unwrap()
    }

    #[test]
    fn url_building() {
        let client = client();
        assert_eq!(
            client.url("getAllSocietyBlocksByProjectId/12"),
            "https://backend.example.com/real-estate-properties/getAllSocietyBlocksByProjectId/12"
        );
    }

    #[test]
    fn client_creation() {
        let client = ApiClient::new(Credentials::new("https://backend.example.com", "token"));
        assert!(client.is_ok());
    }
}
