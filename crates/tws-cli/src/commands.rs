//! Command implementations.
//!
//! Each subcommand exercises one flow of the tower structuring pipeline:
//! lookups, capacity queries, draft creation, and the two unit-numbering
//! paths. Draft and buffer state stay local to the command; a failed
//! backend call leaves them as they were so the user can retry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use tracing::{info, warn};

use tws_client::{ApiClient, AreaQuery, CapacityQuery, StructureQuery};
use tws_draft::{AssignmentCandidate, AssignmentKey, PerFloorSame, TowerDraft, build_create_request};
use tws_model::TowerStructure;
use tws_serial::{ExistingAssignment, SerializeSession};

use tws_cli::types::DraftFile;

use crate::cli::{
    AreaArgs, AssignArgs, BlocksArgs, CapacityArgs, CreateArgs, LookupArgs, SerializeArgs,
};

fn lookup_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(headers.to_vec());
    table
}

/// `structures`: list the structure catalog for a selection.
///
/// A failed lookup degrades to an empty list (logged by the client) so the
/// rest of a scripted flow stays usable.
pub fn run_structures(client: &ApiClient, args: &LookupArgs) -> Result<()> {
    let options = client.structures_or_empty(&StructureQuery {
        project_id: args.project_id,
        sub_property_type_id: args.sub_property_type_id,
        floor_unit_id: args.floor_unit_id,
    });
    let mut table = lookup_table(&["Id", "Structure", "Type"]);
    for option in &options {
        table.add_row(vec![
            option.id.to_string(),
            option.structure_name.clone(),
            option.structure_type.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `areas`: list the area catalog for a structure.
pub fn run_areas(client: &ApiClient, args: &AreaArgs) -> Result<()> {
    let options = client.areas_or_empty(&AreaQuery {
        project_id: args.lookup.project_id,
        sub_property_type_id: args.lookup.sub_property_type_id,
        floor_unit_id: args.lookup.floor_unit_id,
        structure_id: args.structure_id,
    });
    let mut table = lookup_table(&["Id", "Area", "Unit"]);
    for option in &options {
        table.add_row(vec![
            option.id.to_string(),
            option.area.to_string(),
            option.area_unit.unit_name.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `capacity`: print the backend-computed maximum linkable units.
pub fn run_capacity(client: &ApiClient, args: &CapacityArgs) -> Result<()> {
    let total = client.total_linkable_unit(&CapacityQuery {
        project_id: args.lookup.project_id,
        sub_property_type_id: args.lookup.sub_property_type_id,
        floor_unit_id: args.lookup.floor_unit_id,
        structure_id: args.structure_id,
        area: args.area,
        area_unit_id: args.area_unit_id,
    })?;
    println!("Total linkable units: {total}");
    Ok(())
}

/// `blocks`: list persisted blocks of a project.
pub fn run_blocks(client: &ApiClient, args: &BlocksArgs) -> Result<()> {
    print_blocks(client, args.project_id)
}

fn print_blocks(client: &ApiClient, project_id: i64) -> Result<()> {
    let blocks = client.society_blocks(project_id)?;
    let mut table = lookup_table(&["Id", "Block"]);
    for block in &blocks {
        table.add_row(vec![block.id.to_string(), block.block_house_name.clone()]);
    }
    println!("{table}");
    Ok(())
}

/// `create`: build a capacity-checked draft from a file and submit it.
pub fn run_create(client: &ApiClient, args: &CreateArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.draft)
        .with_context(|| format!("reading draft file {}", args.draft.display()))?;
    let file: DraftFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing draft file {}", args.draft.display()))?;

    let mut draft = build_draft(client, &file)?;
    let request = build_create_request(&draft, file.project_id)?;

    let structure = client.create_tower_structure(&request)?;
    // The backend accepted the draft; clear it so the next tower starts clean.
    draft.reset();
    info!(
        tower = %structure.tower_name,
        floors = structure.floors.len(),
        flats = structure.flat_count(),
        "tower structure created"
    );
    println!(
        "Created tower '{}' ({} floors, {} flats), id {}",
        structure.tower_name,
        structure.floors.len(),
        structure.flat_count(),
        structure.id
    );

    if let Some(path) = &args.output {
        write_structure(path, &structure)?;
        println!("Structure written to {}", path.display());
    }
    Ok(())
}

/// Resolve draft-file lines against the backend catalogs and stake them
/// into a capacity-tracked draft.
fn build_draft(client: &ApiClient, file: &DraftFile) -> Result<TowerDraft> {
    let mut draft = TowerDraft::new(file.sub_property_type.clone());
    draft.set_tower_name(&file.tower_name);
    draft.set_total_floors(file.no_of_floors);
    draft.set_per_floor_same(if file.is_flat_per_floor_same {
        PerFloorSame::Yes
    } else {
        PerFloorSame::No
    });
    draft.set_floor_unit(file.floor_unit.clone());

    for line in &file.assignments {
        let structure_query = StructureQuery {
            project_id: file.project_id,
            sub_property_type_id: file.sub_property_type.id,
            floor_unit_id: file.floor_unit.id,
        };
        let structure = client
            .structures(&structure_query)?
            .into_iter()
            .find(|s| s.id == line.structure_id)
            .with_context(|| format!("structure {} not in catalog", line.structure_id))?;
        let area = client
            .areas(&AreaQuery {
                project_id: file.project_id,
                sub_property_type_id: file.sub_property_type.id,
                floor_unit_id: file.floor_unit.id,
                structure_id: line.structure_id,
            })?
            .into_iter()
            .find(|a| a.id == line.area_id)
            .with_context(|| format!("area {} not in catalog", line.area_id))?;

        if draft.capacity_applicable() {
            let key = AssignmentKey {
                structure_id: structure.id,
                area_id: area.id,
            };
            let (total, error) = client.total_linkable_unit_or_zero(&CapacityQuery {
                project_id: file.project_id,
                sub_property_type_id: file.sub_property_type.id,
                floor_unit_id: file.floor_unit.id,
                structure_id: structure.id,
                area: area.area,
                area_unit_id: area.area_unit.id,
            });
            if let Some(error) = error {
                eprintln!("warning: {}", error.user_message());
            }
            draft.load_capacity(key, total);
        }

        let outcome = draft.add_assignment(AssignmentCandidate {
            structure,
            area,
            quantity: line.quantity,
        })?;
        info!(?outcome, structure_id = line.structure_id, area_id = line.area_id, "assignment staked");
        if let Some(capacity) = draft.capacity() {
            println!(
                "Assignment staked; capacity {}/{} remaining",
                capacity.remaining(),
                capacity.total()
            );
        }
    }
    Ok(draft)
}

fn write_structure(path: &Path, structure: &TowerStructure) -> Result<()> {
    let json = serde_json::to_string_pretty(structure)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// `serialize`: number a freshly created tower and persist it.
pub fn run_serialize(client: &ApiClient, args: &SerializeArgs) -> Result<()> {
    let raw = fs::read_to_string(&args.structure)
        .with_context(|| format!("reading structure file {}", args.structure.display()))?;
    let structure: TowerStructure = serde_json::from_str(&raw)
        .with_context(|| format!("parsing structure file {}", args.structure.display()))?;

    let mut session = SerializeSession::load(structure);
    if session.buffer().is_empty() {
        bail!("the structure holds no flats to number");
    }
    let outcome = session.buffer_mut().bulk_fill(args.from, args.to)?;
    if outcome.remaining_unnumbered > 0 {
        warn!(
            remaining = outcome.remaining_unnumbered,
            "some flats remain unnumbered; submission will be blocked until all are filled"
        );
    }

    let payload = session.payload()?;
    client.serialize_property(&payload)?;
    println!(
        "Numbered {} flats ({}..={}) and persisted the structure",
        outcome.filled, args.from, args.to
    );
    Ok(())
}

/// `assign`: renumber an already persisted tower by block id.
pub fn run_assign(client: &ApiClient, args: &AssignArgs) -> Result<()> {
    let details = client.tower_details(args.block_id)?;
    let mut session = ExistingAssignment::load(details)?;
    let outcome = session.buffer_mut().bulk_fill(args.from, args.to)?;
    if outcome.remaining_unnumbered > 0 {
        warn!(
            remaining = outcome.remaining_unnumbered,
            "some flats remain unnumbered; submission will be blocked until all are filled"
        );
    }

    let payload = session.payload()?;
    client.update_tower_details(&payload)?;
    println!(
        "Updated numbering for block {} ({} flats)",
        args.block_id, outcome.filled
    );

    // Selection resets after a successful update; show the refreshed list.
    print_blocks(client, args.project_id)?;
    Ok(())
}
