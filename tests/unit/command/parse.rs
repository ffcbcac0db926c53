use super::*;

#[test]
fn blank_and_comment_lines_carry_nothing() {
    assert!(is_blank_or_comment(""));
    assert!(is_blank_or_comment("   \t"));
    assert!(is_blank_or_comment("# load a.ppm a"));
    assert!(is_blank_or_comment("   # indented comment"));
    assert!(!is_blank_or_comment("load a.ppm a"));
}

#[test]
fn parses_every_command_shape() {
    assert_eq!(
        parse_command("load images/koala.ppm koala").unwrap(),
        Command::Load {
            file: "images/koala.ppm".into(),
            name: "koala".into()
        }
    );
    assert_eq!(
        parse_command("save out.png koala").unwrap(),
        Command::Save {
            file: "out.png".into(),
            name: "koala".into()
        }
    );
    assert_eq!(
        parse_command("luma-component koala koala-luma").unwrap(),
        Command::Component {
            component: Component::Luma,
            src: "koala".into(),
            dest: "koala-luma".into()
        }
    );
    assert_eq!(
        parse_command("brighten -25 koala dark").unwrap(),
        Command::Brighten {
            amount: -25,
            src: "koala".into(),
            dest: "dark".into()
        }
    );
    assert_eq!(
        parse_command("vertical-flip a b").unwrap(),
        Command::VerticalFlip {
            src: "a".into(),
            dest: "b".into()
        }
    );
    assert_eq!(
        parse_command("rgb-split k r g b").unwrap(),
        Command::RgbSplit {
            src: "k".into(),
            red: "r".into(),
            green: "g".into(),
            blue: "b".into()
        }
    );
    assert_eq!(
        parse_command("rgb-combine k r g b").unwrap(),
        Command::RgbCombine {
            dest: "k".into(),
            red: "r".into(),
            green: "g".into(),
            blue: "b".into()
        }
    );
}

#[test]
fn keyword_is_case_insensitive_and_whitespace_is_collapsed() {
    let cmd = parse_command("  SEPIA\t koala   old ").unwrap();
    assert_eq!(
        cmd,
        Command::Sepia {
            src: "koala".into(),
            dest: "old".into()
        }
    );
    assert_eq!(cmd.keyword(), "sepia");
}

#[test]
fn wrong_arity_is_reported_per_command() {
    let cases = [
        ("load a.ppm", 2, 1),
        ("save a.ppm b c", 2, 3),
        ("red-component a", 2, 1),
        ("brighten 10 a", 3, 2),
        ("blur", 2, 0),
        ("horizontal-flip a b c", 2, 3),
        ("rgb-split a r g", 4, 3),
        ("rgb-combine a r g b x", 4, 5),
    ];
    for (line, expected, got) in cases {
        match parse_command(line) {
            Err(PhotolabError::Arity {
                expected: e, got: g, ..
            }) => {
                assert_eq!((e, g), (expected, got), "{line}");
            }
            other => panic!("{line}: expected arity error, got {other:?}"),
        }
    }
}

#[test]
fn unknown_commands_are_rejected() {
    for line in ["crop a b", "alpha-component a b", "-component a b", "rgb a b"] {
        assert!(
            matches!(parse_command(line), Err(PhotolabError::UnknownCommand(_))),
            "{line}"
        );
    }
}

#[test]
fn non_integer_brighten_amount_is_invalid() {
    let err = parse_command("brighten lots a b").unwrap_err();
    assert!(matches!(err, PhotolabError::InvalidArgument(_)));
}

#[test]
fn sources_list_the_names_a_command_reads() {
    assert!(parse_command("load a.ppm a").unwrap().sources().is_empty());
    assert_eq!(parse_command("save a.ppm a").unwrap().sources(), vec!["a"]);
    assert_eq!(parse_command("blur src dst").unwrap().sources(), vec!["src"]);
    assert_eq!(
        parse_command("rgb-combine d r g b").unwrap().sources(),
        vec!["r", "g", "b"]
    );
}

#[test]
fn keyword_round_trips_through_parse() {
    for line in [
        "load f n",
        "save f n",
        "intensity-component a b",
        "brighten 1 a b",
        "blur a b",
        "sharpen a b",
        "horizontal-flip a b",
        "rgb-split a r g b",
        "rgb-combine a r g b",
    ] {
        let cmd = parse_command(line).unwrap();
        let head = line.split_whitespace().next().unwrap();
        assert_eq!(cmd.keyword(), head);
    }
}
