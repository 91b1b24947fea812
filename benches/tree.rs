// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Wikiview-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Wikiview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wikiview::format::markdown::{extract_outline, split_blocks};
use wikiview::query::{find_first_leaf_with_content, walk};
use wikiview::tree::{assemble_catalogue, build_tree, build_tree_checked, TreeLimits};

mod fixtures;
mod profiler;

use fixtures::catalogue::Case;

// Benchmark identity (keep stable):
// - Group names: `tree.build`, `tree.build_checked`, `tree.assemble_flat`,
//   `query.first_leaf`, `markdown.outline`, `markdown.split_blocks`
// - Case IDs (`small`, `wide`, `deep`, `sections_*`) must not be renamed.
fn benches_tree(c: &mut Criterion) {
    let cases = [Case::Small, Case::Wide, Case::Deep];

    {
        let mut group = c.benchmark_group("tree.build");
        for case in cases {
            let records = fixtures::catalogue::nested(case.params());
            let nodes = walk(&build_tree(&records)).count() as u64;
            group.throughput(Throughput::Elements(nodes));
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let tree = build_tree(black_box(&records));
                    black_box(fixtures::checksum_tree(&tree))
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("tree.build_checked");
        for case in cases {
            let records = fixtures::catalogue::nested(case.params());
            group.bench_function(case.id(), move |b| {
                b.iter(|| {
                    let tree = build_tree_checked(black_box(&records), TreeLimits::default())
                        .expect("within limits");
                    black_box(tree.len())
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("tree.assemble_flat");
        for case in cases {
            let records = fixtures::catalogue::flat(case.params());
            group.throughput(Throughput::Elements(records.len() as u64));
            group.bench_function(case.id(), move |b| {
                b.iter(|| black_box(assemble_catalogue(black_box(records.clone())).len()))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("query.first_leaf");
        for case in cases {
            let tree = build_tree(&fixtures::catalogue::nested(case.params()));
            group.bench_function(case.id(), move |b| {
                b.iter(|| black_box(find_first_leaf_with_content(black_box(&tree)).is_some()))
            });
        }
        group.finish();
    }

    let documents = [8usize, 64, 512].map(|sections| (sections, fixtures::document(sections, 4)));

    {
        let mut group = c.benchmark_group("markdown.outline");
        for (sections, body) in &documents {
            group.throughput(Throughput::Bytes(body.len() as u64));
            group.bench_function(format!("sections_{sections}"), |b| {
                b.iter(|| black_box(extract_outline(black_box(body)).len()))
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("markdown.split_blocks");
        for (sections, body) in &documents {
            group.throughput(Throughput::Bytes(body.len() as u64));
            group.bench_function(format!("sections_{sections}"), |b| {
                b.iter(|| black_box(split_blocks(black_box(body)).len()))
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_tree
}
criterion_main!(benches);
