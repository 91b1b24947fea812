// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;

use crate::model::{CatalogueRecord, NodeKey};

use super::build::{TreeBuildError, TreeLimits};

/// Nests a flat payload under `parent_id` links.
///
/// Nested payloads (no top-level record points at another top-level record) are returned as-is.
/// Otherwise:
/// - children keep their payload order, after any children the record already carried
/// - records whose parent is missing become roots
/// - records caught in a parent cycle become roots at the first cycle member in payload order
pub fn assemble_catalogue(records: Vec<CatalogueRecord>) -> Vec<CatalogueRecord> {
    match assemble_with(records, |_, _| Ok::<(), Infallible>(())) {
        Ok(records) => records,
        Err(never) => match never {},
    }
}

/// Like [`assemble_catalogue`], but rejects `parent_id` chains deeper than `limits` before any
/// record is nested.
pub fn assemble_catalogue_checked(
    records: Vec<CatalogueRecord>,
    limits: TreeLimits,
) -> Result<Vec<CatalogueRecord>, TreeBuildError> {
    assemble_with(records, |record, level| {
        if level >= limits.max_depth {
            return Err(TreeBuildError::DepthExceeded {
                key: record.id.clone(),
                depth: level + 1,
                max_depth: limits.max_depth,
            });
        }
        Ok(())
    })
}

fn assemble_with<E>(
    records: Vec<CatalogueRecord>,
    mut visit: impl FnMut(&CatalogueRecord, usize) -> Result<(), E>,
) -> Result<Vec<CatalogueRecord>, E> {
    let mut index = HashMap::<NodeKey, usize>::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        index.entry(record.id.clone()).or_insert(idx);
    }

    let parent_of = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            record
                .parent_id
                .as_ref()
                .and_then(|parent_id| index.get(parent_id).copied())
                .filter(|&parent| parent != idx)
        })
        .collect::<Vec<_>>();

    if parent_of.iter().all(Option::is_none) {
        return Ok(records);
    }

    let mut children_of = vec![Vec::<usize>::new(); records.len()];
    for (idx, parent) in parent_of.iter().enumerate() {
        if let Some(parent) = parent {
            children_of[*parent].push(idx);
        }
    }

    // Breadth-first from the natural roots, then from any record a cycle kept unreachable.
    let mut attached_to = vec![None::<usize>; records.len()];
    let mut level = vec![0usize; records.len()];
    let mut visited = vec![false; records.len()];
    let mut order = Vec::<usize>::with_capacity(records.len());
    let mut roots = Vec::<usize>::new();

    let natural_roots = (0..records.len())
        .filter(|&idx| parent_of[idx].is_none())
        .collect::<Vec<_>>();
    for start in natural_roots.into_iter().chain(0..records.len()) {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        roots.push(start);

        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &child in &children_of[current] {
                if !visited[child] {
                    visited[child] = true;
                    attached_to[child] = Some(current);
                    level[child] = level[current] + 1;
                    visit(&records[child], level[child])?;
                    queue.push_back(child);
                }
            }
        }
    }

    if roots.len() < records.len() {
        tracing::debug!(
            records = records.len(),
            roots = roots.len(),
            "assembled flat catalogue payload"
        );
    }

    let mut pending = records.into_iter().map(Some).collect::<Vec<_>>();
    let mut built = (0..pending.len()).map(|_| None::<CatalogueRecord>).collect::<Vec<_>>();

    // Reverse breadth-first order finishes every child before its parent.
    for &idx in order.iter().rev() {
        let Some(mut record) = pending[idx].take() else {
            continue;
        };
        for &child in &children_of[idx] {
            if attached_to[child] == Some(idx) {
                if let Some(child_record) = built[child].take() {
                    record.children.push(child_record);
                }
            }
        }
        built[idx] = Some(record);
    }

    Ok(roots.into_iter().filter_map(|idx| built[idx].take()).collect())
}

#[cfg(test)]
mod tests {
    use super::{assemble_catalogue, assemble_catalogue_checked};
    use crate::model::fixtures::{flat_chain, key, leaf, sample_catalogue};
    use crate::model::CatalogueRecord;
    use crate::tree::{TreeBuildError, TreeLimits};

    fn flat(id: &str, parent: Option<&str>) -> CatalogueRecord {
        let record = leaf(id, id, Some(id));
        match parent {
            Some(parent) => record.with_parent(key(parent)),
            None => record,
        }
    }

    fn shape(records: &[CatalogueRecord]) -> String {
        records
            .iter()
            .map(|record| {
                if record.children.is_empty() {
                    record.id.to_string()
                } else {
                    format!("{}({})", record.id, shape(&record.children))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn nested_payload_passes_through() {
        let records = sample_catalogue();
        assert_eq!(assemble_catalogue(records.clone()), records);
    }

    #[test]
    fn flat_payload_is_nested_in_payload_order() {
        let records = vec![
            flat("b1", Some("b")),
            flat("a", None),
            flat("b", None),
            flat("a2", Some("a")),
            flat("a1", Some("a")),
            flat("b1x", Some("b1")),
        ];
        let nested = assemble_catalogue(records);
        assert_eq!(shape(&nested), "a(a2 a1) b(b1(b1x))");
    }

    #[test]
    fn missing_parent_becomes_root() {
        let records = vec![flat("a", None), flat("orphan", Some("gone")), flat("a1", Some("a"))];
        assert_eq!(shape(&assemble_catalogue(records)), "a(a1) orphan");
    }

    #[test]
    fn parent_cycle_is_broken_at_first_member() {
        let records = vec![
            flat("root", None),
            flat("x", Some("y")),
            flat("y", Some("x")),
            flat("kid", Some("root")),
        ];
        assert_eq!(shape(&assemble_catalogue(records)), "root(kid) x(y)");
    }

    #[test]
    fn checked_assembly_rejects_long_parent_chains_before_nesting() {
        let err = assemble_catalogue_checked(flat_chain(100_000), TreeLimits { max_depth: 64 })
            .expect_err("chain too deep");
        assert_eq!(
            err,
            TreeBuildError::DepthExceeded {
                key: key("c64"),
                depth: 65,
                max_depth: 64,
            }
        );
    }

    #[test]
    fn checked_assembly_accepts_chains_at_the_limit() {
        let nested = assemble_catalogue_checked(flat_chain(3), TreeLimits { max_depth: 3 })
            .expect("within limit");
        assert_eq!(shape(&nested), "c0(c1(c2))");
    }
}
