//! DMI import tests

use rsi_rs::prelude::*;

use crate::common::{ANIMATED, FOUR_DIRECTIONS, TILE, indexed_sheet, tile_index, write_dmi};

#[test_log::test]
fn test_minimal_import_rectangles() {
	let tile = Size::new(TILE, TILE);
	let rects: Vec<_> =
		(0..4).map(|direction| geometry::first_frame_rectangle_for(None, tile, direction, 64, 64)).collect();

	assert_eq!(
		rects,
		[
			Some(Rect::new(0, 0, 32, 32)),
			Some(Rect::new(32, 0, 32, 32)),
			Some(Rect::new(0, 32, 32, 32)),
			Some(Rect::new(32, 32, 32, 32)),
		]
	);
	assert_eq!(geometry::first_frame_rectangle_for(None, tile, 4, 64, 64), None);
}

#[test_log::test]
fn test_minimal_import() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_dmi(dir.path(), "body.dmi", FOUR_DIRECTIONS, &indexed_sheet(2, 2));

	let rsi = dmi::import_file(&path, &ConvertConfig::default()).unwrap();
	assert_eq!(rsi.version(), CURRENT_RSI_VERSION);
	assert_eq!(rsi.size(), Size::new(32, 32));
	assert_eq!(rsi.states().len(), 1);

	let state = &rsi.states()[0];
	assert_eq!(state.name(), "body");
	assert_eq!(state.directions(), DirectionMode::Cardinal);
	assert_eq!(state.delays(), None);
	assert_eq!(state.population(), FramePopulation::Loaded);

	for direction in 0..4 {
		let frame = state.frame(direction, 0).unwrap();
		assert_eq!(frame.dimensions(), (32, 32));
		assert_eq!(tile_index(frame), direction as u8);
	}
}

#[test_log::test]
fn test_animated_import_is_frame_major() {
	let dir = tempfile::tempdir().unwrap();
	// 13 tiles: walk uses 0..12, dead uses 12
	let path = write_dmi(dir.path(), "mob.dmi", ANIMATED, &indexed_sheet(4, 4));

	let rsi = dmi::import_file(&path, &ConvertConfig::default()).unwrap();
	let walk = &rsi.states()[0];
	assert_eq!(walk.frame_len(), 3);
	assert_eq!(walk.delays().unwrap(), &vec![vec![1.0, 1.0, 2.0]; 4][..]);

	for frame in 0..3 {
		for direction in 0..4 {
			let tile = walk.frame(direction, frame).unwrap();
			assert_eq!(tile_index(tile) as usize, frame * 4 + direction);
		}
	}

	let dead = &rsi.states()[1];
	assert_eq!(tile_index(dead.frame(0, 0).unwrap()), 12);
}

#[test_log::test]
fn test_metadata_without_dmi_text() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("plain.dmi");
	indexed_sheet(1, 1).save_with_format(&path, image::ImageFormat::Png).unwrap();

	let err = dmi::import_file(&path, &ConvertConfig::default()).unwrap_err();
	assert_eq!(err.parse_kind(), Some(ParseErrorKind::NoDmiTag));
}

#[test_log::test]
fn test_metadata_without_version() {
	let dir = tempfile::tempdir().unwrap();
	let path = write_dmi(dir.path(), "bad.dmi", "# BEGIN DMI\nstate = \"a\"\n# END DMI", &indexed_sheet(1, 1));

	let err = dmi::import_file(&path, &ConvertConfig::default()).unwrap_err();
	assert_eq!(err.parse_kind(), Some(ParseErrorKind::NoVersion));
}
