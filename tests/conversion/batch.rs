//! Batch conversion tests

use std::fs;

use rsi_rs::prelude::*;

use crate::common::{ANIMATED, FOUR_DIRECTIONS, indexed_sheet, write_dmi};

#[test_log::test]
fn test_batch_isolates_failures() {
	let input = tempfile::tempdir().unwrap();
	let output = tempfile::tempdir().unwrap();

	write_dmi(input.path(), "a_body.dmi", FOUR_DIRECTIONS, &indexed_sheet(2, 2));
	fs::write(input.path().join("b_broken.dmi"), b"not a png").unwrap();
	write_dmi(input.path(), "c_mob.dmi", ANIMATED, &indexed_sheet(4, 4));
	write_dmi(input.path(), "d_noversion.dmi", "# BEGIN DMI\nstate = \"x\"\n# END DMI", &indexed_sheet(1, 1));
	fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

	let report =
		convert_directory(input.path(), output.path(), &ConvertConfig::default(), &SaveConfig::default()).unwrap();

	assert_eq!(report.total(), 4);
	let converted: Vec<_> = report.converted.iter().map(|(_, out)| out.file_name().unwrap().to_owned()).collect();
	assert_eq!(converted, ["a_body.rsi", "c_mob.rsi"]);

	let failed: Vec<_> = report.failed.iter().map(|(path, _)| path.file_name().unwrap().to_owned()).collect();
	assert_eq!(failed, ["b_broken.dmi", "d_noversion.dmi"]);
	assert_eq!(report.failed[1].1.parse_kind(), Some(ParseErrorKind::NoVersion));

	for (_, out) in &report.converted {
		let source = Source::detect(out).unwrap();
		let loaded = source.load(&ConvertConfig::default()).unwrap();
		assert!(loaded.is_clean());
	}
}

/// Tile size far larger than the sheet it describes.
const OVERSIZED_TILE: &str = "# BEGIN DMI
version = 4.0
	width = 200000
	height = 200000
state = \"huge\"
# END DMI
";

/// Frame count far beyond what any sheet holds.
const OVERLONG_STATE: &str = "# BEGIN DMI
version = 4.0
	width = 32
	height = 32
state = \"spin\"
	dirs = 8
	frames = 2000000000
# END DMI
";

#[test_log::test]
fn test_batch_survives_oversized_declarations() {
	let input = tempfile::tempdir().unwrap();
	let output = tempfile::tempdir().unwrap();

	write_dmi(input.path(), "a_huge.dmi", OVERSIZED_TILE, &indexed_sheet(1, 1));
	write_dmi(input.path(), "b_spin.dmi", OVERLONG_STATE, &indexed_sheet(2, 2));
	write_dmi(input.path(), "c_body.dmi", FOUR_DIRECTIONS, &indexed_sheet(2, 2));

	let report =
		convert_directory(input.path(), output.path(), &ConvertConfig::default(), &SaveConfig::default()).unwrap();
	assert_eq!(report.total(), 3);

	let failed: Vec<_> = report.failed.iter().map(|(path, _)| path.file_name().unwrap().to_owned()).collect();
	assert_eq!(failed, ["a_huge.dmi"]);
	assert!(matches!(report.failed[0].1, RsiError::SheetTooSmall { .. }));

	// the sheet only has tiles for the first frame of each direction
	let spin = Rsi::open(output.path().join("b_spin.rsi")).unwrap();
	let state = &spin.rsi.states()[0];
	assert_eq!(state.frame_len(), 1);
	assert_eq!(state.delays(), None);
	assert!(output.path().join("c_body.rsi").join("body.png").is_file());
}

#[test_log::test]
fn test_batch_missing_input() {
	let output = tempfile::tempdir().unwrap();
	let missing = output.path().join("nope");
	assert!(convert_directory(&missing, output.path(), &ConvertConfig::default(), &SaveConfig::default()).is_err());
}
