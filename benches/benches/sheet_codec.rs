//! Benchmark suite for DMI parsing and sheet packing
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rsi_benches::{generate_dmi_text, generate_sheet, generated_tile_count, sizes};
use rsi_types::{
	config::{ConvertConfig, SaveConfig},
	dmi::Metadata,
	geometry::{PackLayout, pack_grid},
	rsi::json,
	size::Size,
};
use std::hint::black_box;

const TILE: u32 = 32;

/// Benchmark DMI description parsing
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("dmi_parse");

	for states in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
		let text = generate_dmi_text(states, TILE);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::from_parameter(states), &text, |b, text| {
			b.iter(|| black_box(Metadata::from_text(black_box(text))));
		});
	}

	group.finish();
}

/// Benchmark grid computation
fn bench_pack_grid(c: &mut Criterion) {
	let mut group = c.benchmark_group("pack_grid");

	group.bench_function("1..=4096", |b| {
		b.iter(|| {
			for n in 1..=4096 {
				black_box(pack_grid(black_box(n)));
			}
		});
	});

	group.bench_function("layout_1500", |b| {
		b.iter(|| black_box(PackLayout::new(Size::new(TILE, TILE), black_box(1500))));
	});

	group.finish();
}

/// Benchmark slicing a DMI sheet and re-packing every state
fn bench_convert(c: &mut Criterion) {
	let mut group = c.benchmark_group("dmi_convert");

	for states in [sizes::SMALL, sizes::MEDIUM] {
		let metadata = match Metadata::from_text(&generate_dmi_text(states, TILE)) {
			Ok(m) => m,
			Err(e) => {
				eprintln!("Warning: Could not parse generated text: {e}");
				continue;
			}
		};
		let tiles = generated_tile_count(states);
		let sheet = generate_sheet(tiles, TILE);
		let config = ConvertConfig::default();

		group.throughput(Throughput::Elements(tiles as u64));
		group.bench_with_input(BenchmarkId::new("slice", states), &sheet, |b, sheet| {
			b.iter(|| black_box(metadata.to_rsi(black_box(sheet), &config)));
		});

		let Ok(rsi) = metadata.to_rsi(&sheet, &config) else {
			continue;
		};
		group.bench_with_input(BenchmarkId::new("pack", states), &rsi, |b, rsi| {
			b.iter(|| {
				for state in rsi.states() {
					black_box(state.pack(rsi.size()));
				}
			});
		});
		group.bench_with_input(BenchmarkId::new("meta_json", states), &rsi, |b, rsi| {
			b.iter(|| black_box(json::to_json(rsi, &SaveConfig::compact())));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_parse, bench_pack_grid, bench_convert);
criterion_main!(benches);
