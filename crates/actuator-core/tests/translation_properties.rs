//! Integration tests for the actuator-core translator and frame encoder.
//!
//! These tests exercise the public API the way the bridge uses it: a raw
//! token goes in through [`Alphabet::translate`] and a frame comes out of
//! [`encode_frame`].

use actuator_core::{encode_frame, Alphabet, CommandError, MotionCommand};

const MOTION_NAMES: [(&str, &str); 6] = [
    ("UP", "1"),
    ("RIGHT", "2"),
    ("LEFT", "3"),
    ("DOWN", "4"),
    ("CW", "5"),
    ("CCW", "6"),
];

fn motion(raw: &str) -> String {
    Alphabet::Motion
        .translate(raw)
        .expect("motion translation is total")
        .to_string()
}

#[test]
fn test_motion_names_are_case_and_whitespace_insensitive() {
    for (name, code) in MOTION_NAMES {
        let lower = name.to_lowercase();
        let padded = format!(" {name} ");
        assert_eq!(motion(name), code);
        assert_eq!(motion(&lower), code);
        assert_eq!(motion(&padded), code);
    }
}

#[test]
fn test_motion_digits_are_idempotent() {
    for digit in ["1", "2", "3", "4", "5", "6"] {
        assert_eq!(motion(digit), digit);
        // Translating the output again must not change it.
        assert_eq!(motion(&motion(digit)), digit);
    }
}

#[test]
fn test_motion_unknown_tokens_map_to_cancel() {
    let unknown = [
        "spin", "0", "7", "-1", "", "\n", "u p", "upward", "ccww", "R", "G", "B", "exit",
    ];
    for raw in unknown {
        assert_eq!(motion(raw), "0", "token {raw:?} must cancel");
    }
}

#[test]
fn test_translate_is_repeatable() {
    for raw in ["up", "Spin", " 6 ", "😀"] {
        let first = motion(raw);
        for _ in 0..3 {
            assert_eq!(motion(raw), first);
        }
    }
}

#[test]
fn test_end_to_end_up_becomes_frame_one() {
    let code = Alphabet::Motion.translate("up").unwrap();
    assert_eq!(&encode_frame(code), b"1\n");
}

#[test]
fn test_end_to_end_spin_becomes_cancel_frame() {
    let code = Alphabet::Motion.translate("spin").unwrap();
    assert_eq!(&encode_frame(code), b"0\n");
}

#[test]
fn test_end_to_end_ccw_becomes_frame_six() {
    let code = Alphabet::Motion.translate("CCW").unwrap();
    assert_eq!(&encode_frame(code), b"6\n");
}

#[test]
fn test_color_accepts_g_and_rejects_x() {
    let code = Alphabet::Color.translate("g").unwrap();
    assert_eq!(&encode_frame(code), b"G\n");

    let err = Alphabet::Color.translate("X").unwrap_err();
    assert!(matches!(err, CommandError::UnknownColor(ref t) if t == "X"));
}

#[test]
fn test_motion_command_code_matches_alphabet_translation() {
    for cmd in MotionCommand::NAMED {
        assert_eq!(Alphabet::Motion.translate(cmd.name()).unwrap(), cmd.code());
    }
}

#[test]
fn test_alphabet_deserializes_from_toml() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        alphabet: Alphabet,
    }

    let w: Wrapper = toml::from_str("alphabet = \"color\"").unwrap();
    assert_eq!(w.alphabet, Alphabet::Color);

    let w: Wrapper = toml::from_str("alphabet = \"colour\"").unwrap();
    assert_eq!(w.alphabet, Alphabet::Color);

    let w: Wrapper = toml::from_str("alphabet = \"motion\"").unwrap();
    assert_eq!(w.alphabet, Alphabet::Motion);

    assert!(toml::from_str::<Wrapper>("alphabet = \"plasma\"").is_err());
}
