//! RSI directory tests

use std::fs;

use rsi_rs::prelude::*;

use crate::common::{ANIMATED, indexed_sheet, write_dmi};

fn imported(dir: &std::path::Path) -> Rsi {
	let path = write_dmi(dir, "mob.dmi", ANIMATED, &indexed_sheet(4, 4));
	let config = ConvertConfig::new(Some("CC-BY-SA-3.0".into()), Some("Test fixture".into()));
	dmi::import_file(path, &config).unwrap()
}

#[test_log::test]
fn test_save_open_roundtrip() {
	let dir = tempfile::tempdir().unwrap();
	let rsi = imported(dir.path());

	for config in [SaveConfig::pretty(), SaveConfig::compact()] {
		let out = dir.path().join(format!("mob_{}.rsi", config.minify_json));
		rsi.save(&out, &config).unwrap();

		let loaded = Rsi::open(&out).unwrap();
		assert!(loaded.is_clean());
		assert_eq!(loaded.rsi, rsi);
	}
}

#[test_log::test]
fn test_saved_meta_json() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("mob.rsi");
	imported(dir.path()).save(&out, &SaveConfig::compact()).unwrap();

	let text = fs::read_to_string(out.join("meta.json")).unwrap();
	assert!(text.starts_with(r#"{"version":1,"size":{"x":32,"y":32},"states":[{"name":"walk","directions":4"#));
	assert!(text.ends_with(r#""license":"CC-BY-SA-3.0","copyright":"Test fixture"}"#));

	// 12 walk frames pack into 4 rows of 3
	let sheet = image::open(out.join("walk.png")).unwrap();
	assert_eq!((sheet.width(), sheet.height()), (96, 128));
}

#[test_log::test]
fn test_missing_companion_png() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("mob.rsi");
	let rsi = imported(dir.path());
	rsi.save(&out, &SaveConfig::default()).unwrap();
	fs::remove_file(out.join("walk.png")).unwrap();

	let loaded = Rsi::open(&out).unwrap();
	assert_eq!(loaded.warnings.len(), 1);
	match &loaded.warnings[0] {
		RsiError::MissingStateImage {
			state,
			path,
		} => {
			assert_eq!(state, "walk");
			assert_eq!(path, &out.join("walk.png"));
		}
		other => panic!("unexpected warning: {other}"),
	}

	let states = loaded.rsi.states();
	assert_eq!(states.len(), 2);
	assert_eq!(states[0].population(), FramePopulation::Empty);
	assert_eq!(states[0].delays(), rsi.states()[0].delays());
	assert_eq!(states[1], rsi.states()[1]);
}

#[test_log::test]
fn test_undo_after_reopen() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join("mob.rsi");
	imported(dir.path()).save(&out, &SaveConfig::default()).unwrap();

	let mut rsi = Rsi::open(&out).unwrap().rsi;
	let mut history = DeletionHistory::default();
	history.delete(&mut rsi, 0).unwrap();
	rsi.save(&out, &SaveConfig::default()).unwrap();
	assert_eq!(Rsi::open(&out).unwrap().rsi.states().len(), 1);

	assert_eq!(history.undo(&mut rsi), Some(0));
	rsi.save(&out, &SaveConfig::default()).unwrap();

	let reopened = Rsi::open(&out).unwrap();
	assert!(reopened.is_clean());
	assert_eq!(reopened.rsi.states()[0].population(), FramePopulation::Loaded);
}

#[test_log::test]
fn test_open_rejects_oversized_tile() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("meta.json"), r#"{"version":1,"size":{"x":200000,"y":200000},"states":[{"name":"a"}]}"#)
		.unwrap();

	let err = Rsi::open(dir.path()).unwrap_err();
	assert!(matches!(err, RsiError::Codec(CodecError::InvalidSize { .. })));
}
