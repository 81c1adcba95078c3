//! Multigrid agglomeration linkage.
//!
//! A coarse loop lists the fine loops it represents; each of those fine
//! loops points back at it through `coarse_grid_loop`. Aggregating
//! solution fields across the fine list is the multigrid driver's job;
//! these helpers only write and check the links.
//!
//! Levels are usually separate tables, in which case ids on different
//! levels are unrelated. Drivers that keep every level in one table use
//! [`validate_single_table`], which also rules out self-reference and
//! coarse-pointer cycles.

use std::collections::HashSet;

use aerolattice_types::{LatticeError, LatticeResult, LoopId};

use crate::surface_loop::SurfaceLoop;

fn lookup<'a>(level: &'a [SurfaceLoop], id: LoopId, what: &str) -> LatticeResult<&'a SurfaceLoop> {
    if !id.is_assigned() || id.index() >= level.len() {
        return Err(LatticeError::InvalidTopology(format!(
            "{what} {:?} outside loop table of length {}",
            id,
            level.len()
        )));
    }
    Ok(&level[id.index()])
}

/// Makes `coarse` (id `coarse_id` on its own level) the agglomerate of
/// `members` on `fine_level`, writing both directions of the link.
///
/// Nothing is written unless every member is in range, listed once, and
/// not already claimed by a different coarse loop.
pub fn agglomerate(
    fine_level: &mut [SurfaceLoop],
    coarse_id: LoopId,
    coarse: &mut SurfaceLoop,
    members: &[LoopId],
) -> LatticeResult<()> {
    if !coarse_id.is_assigned() {
        return Err(LatticeError::InvalidTopology("coarse loop id is unassigned".into()));
    }
    if members.is_empty() {
        return Err(LatticeError::InvalidTopology(format!(
            "coarse loop {:?} has no members",
            coarse_id
        )));
    }

    let mut seen = HashSet::with_capacity(members.len());
    for &m in members {
        let fine = lookup(fine_level, m, "fine loop")?;
        if !seen.insert(m) {
            return Err(LatticeError::InvariantViolation(format!(
                "fine loop {:?} listed twice",
                m
            )));
        }
        if fine.coarse_grid_loop.is_assigned() && fine.coarse_grid_loop != coarse_id {
            return Err(LatticeError::InvariantViolation(format!(
                "fine loop {:?} already agglomerated into {:?}",
                m, fine.coarse_grid_loop
            )));
        }
    }

    coarse.size_fine_grid_loop_list(members.len());
    for (i, &m) in members.iter().enumerate() {
        *coarse.fine_grid_loop_mut(i + 1) = m;
        fine_level[m.index()].coarse_grid_loop = coarse_id;
    }
    Ok(())
}

/// Checks bidirectional consistency between two adjacent levels.
///
/// Every fine id listed by a coarse loop must point back at that coarse
/// loop, and every fine loop with an assigned coarse pointer must appear
/// in that coarse loop's list.
///
/// The two levels are separate tables, so there is no self-reference to
/// check; see [`validate_single_table`] for hierarchies kept in one table.
pub fn validate_agglomeration(
    fine_level: &[SurfaceLoop],
    coarse_level: &[SurfaceLoop],
) -> LatticeResult<()> {
    for (c, coarse) in coarse_level.iter().enumerate() {
        let coarse_id = LoopId::from_index(c);
        for &f in coarse.fine_grid_loops() {
            let fine = lookup(fine_level, f, "fine loop")?;
            if fine.coarse_grid_loop != coarse_id {
                return Err(LatticeError::InvariantViolation(format!(
                    "coarse loop {:?} lists {:?}, which points at {:?}",
                    coarse_id, f, fine.coarse_grid_loop
                )));
            }
        }
    }

    for (f, fine) in fine_level.iter().enumerate() {
        if !fine.coarse_grid_loop.is_assigned() {
            continue;
        }
        let fine_id = LoopId::from_index(f);
        let coarse = lookup(coarse_level, fine.coarse_grid_loop, "coarse loop")?;
        if !coarse.fine_grid_loops().contains(&fine_id) {
            return Err(LatticeError::InvariantViolation(format!(
                "fine loop {:?} points at {:?}, which does not list it",
                fine_id, fine.coarse_grid_loop
            )));
        }
    }
    Ok(())
}

/// Returns `true` if following `coarse_grid_loop` pointers inside one
/// table never revisits a loop.
pub fn coarse_chain_is_acyclic(loops: &[SurfaceLoop]) -> bool {
    // 0 = unvisited, 1 = on current path, 2 = known to terminate
    let mut state = vec![0u8; loops.len()];
    for start in 0..loops.len() {
        let mut path = Vec::new();
        let mut current = Some(start);
        while let Some(i) = current {
            match state[i] {
                1 => return false,
                2 => break,
                _ => {}
            }
            state[i] = 1;
            path.push(i);
            let next = loops[i].coarse_grid_loop;
            current = (next.is_assigned() && next.index() < loops.len()).then(|| next.index());
        }
        for i in path {
            state[i] = 2;
        }
    }
    true
}

/// Checks a hierarchy stored in a single table: no loop lists itself or
/// points at itself, links are bidirectional, and coarse chains are acyclic.
pub fn validate_single_table(loops: &[SurfaceLoop]) -> LatticeResult<()> {
    for (i, lp) in loops.iter().enumerate() {
        let id = LoopId::from_index(i);
        if lp.coarse_grid_loop == id || lp.fine_grid_loops().contains(&id) {
            return Err(LatticeError::InvariantViolation(format!(
                "loop {:?} references itself",
                id
            )));
        }
    }
    validate_agglomeration(loops, loops)?;
    if !coarse_chain_is_acyclic(loops) {
        return Err(LatticeError::InvariantViolation(
            "coarse-grid pointers form a cycle".into(),
        ));
    }
    Ok(())
}
