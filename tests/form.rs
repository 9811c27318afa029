//! Integration tests for turning the options form into DrawOptions.

use team_draw::{DrawError, DrawForm, DrawOptions, DrawResult, GameplayMode, PLACEHOLDER};

fn filled_form() -> DrawForm {
    DrawForm {
        group_id: "3".to_string(),
        selection_id: "7".to_string(),
        teams_per_participant: "2".to_string(),
        gameplay_mode: "pair".to_string(),
        allow_repeats: "false".to_string(),
    }
}

#[test]
fn default_form_is_incomplete() {
    let form = DrawForm::default();
    assert!(!form.is_complete());
    assert_eq!(form.missing_fields().len(), 5);
    assert_eq!(form.group_id, PLACEHOLDER);
}

#[test]
fn filled_form_parses() {
    let form = filled_form();
    assert!(form.is_complete());
    let o = DrawOptions::try_from(&form).unwrap();
    assert_eq!(
        o,
        DrawOptions {
            group_id: 3,
            selection_id: 7,
            teams_per_participant: 2,
            gameplay_mode: GameplayMode::Pair,
            allow_repeats: false,
        }
    );
}

#[test]
fn placeholder_field_is_missing() {
    let form = DrawForm {
        selection_id: PLACEHOLDER.to_string(),
        ..filled_form()
    };
    assert_eq!(form.missing_fields(), vec!["selection_id"]);
    assert_eq!(
        DrawOptions::try_from(&form),
        Err(DrawError::MissingField("selection_id"))
    );
}

#[test]
fn teams_per_participant_must_be_positive() {
    for (raw, n) in [("0", 0), ("-3", -3)] {
        let form = DrawForm {
            teams_per_participant: raw.to_string(),
            ..filled_form()
        };
        assert_eq!(
            DrawOptions::try_from(&form),
            Err(DrawError::InvalidTeamsPerParticipant(n))
        );
    }
}

#[test]
fn bad_values_are_rejected() {
    let form = DrawForm {
        group_id: "abc".to_string(),
        ..filled_form()
    };
    assert!(matches!(
        DrawOptions::try_from(&form),
        Err(DrawError::InvalidField { field: "group_id", .. })
    ));

    let form = DrawForm {
        gameplay_mode: "trio".to_string(),
        ..filled_form()
    };
    assert!(matches!(
        DrawOptions::try_from(&form),
        Err(DrawError::InvalidField { field: "gameplay_mode", .. })
    ));
}

#[test]
fn numeric_mode_codes_and_repeat_flag() {
    let form = DrawForm {
        gameplay_mode: "0".to_string(),
        allow_repeats: "true".to_string(),
        ..filled_form()
    };
    let o = DrawOptions::try_from(&form).unwrap();
    assert_eq!(o.gameplay_mode, GameplayMode::Single);
    assert!(o.allow_repeats);

    let form = DrawForm {
        gameplay_mode: "1".to_string(),
        allow_repeats: "yes".to_string(),
        ..filled_form()
    };
    let o = DrawOptions::try_from(&form).unwrap();
    assert_eq!(o.gameplay_mode, GameplayMode::Pair);
    assert!(!o.allow_repeats);
}

#[test]
fn previous_draw_refills_the_form() {
    let options = DrawOptions {
        group_id: 4,
        selection_id: 2,
        teams_per_participant: 3,
        gameplay_mode: GameplayMode::Single,
        allow_repeats: true,
    };
    let previous = DrawResult {
        options,
        participants: Vec::new(),
    };
    let form = DrawForm::from_previous(&previous);
    assert!(form.is_complete());
    assert_eq!(DrawOptions::try_from(&form).unwrap(), options);
}
