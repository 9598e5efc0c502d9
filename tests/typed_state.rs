//! A typed record as slice state.
//!
//! Instead of walking a dynamic document, the record maps path segments onto
//! its named fields and rejects values of the wrong variant.

use serde::{Deserialize, Serialize};
use slicekit::core::{Action, Handler, KeyPath, State};
use slicekit::factory::SliceBuilder;
use slicekit::handlers::{build_simple, build_toggle};

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Player {
    muted: bool,
    volume: u8,
    track: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
enum PlayerField {
    #[default]
    Unset,
    Muted(bool),
    Volume(u8),
    Track(String),
}

impl State for Player {
    type Value = PlayerField;

    fn get_in(&self, path: &KeyPath) -> Option<PlayerField> {
        match path.segments() {
            [field] => match field.as_str() {
                "muted" => Some(PlayerField::Muted(self.muted)),
                "volume" => Some(PlayerField::Volume(self.volume)),
                "track" => Some(PlayerField::Track(self.track.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    fn set_in(&self, path: &KeyPath, value: PlayerField) -> Self {
        let mut next = self.clone();
        match (path.segments(), value) {
            ([field], PlayerField::Muted(muted)) if field == "muted" => next.muted = muted,
            ([field], PlayerField::Volume(volume)) if field == "volume" => next.volume = volume,
            ([field], PlayerField::Track(track)) if field == "track" => next.track = track,
            _ => {}
        }
        next
    }

    fn fields(&self) -> Vec<(String, PlayerField)> {
        ["muted", "volume", "track"]
            .into_iter()
            .filter_map(|name| Some((name.to_string(), self.get_in(&KeyPath::from(name))?)))
            .collect()
    }

    fn truthy(value: &PlayerField) -> bool {
        match value {
            PlayerField::Unset => false,
            PlayerField::Muted(muted) => *muted,
            PlayerField::Volume(volume) => *volume != 0,
            PlayerField::Track(track) => !track.is_empty(),
        }
    }

    fn from_bool(flag: bool) -> PlayerField {
        PlayerField::Muted(flag)
    }

    fn is_absent(value: &PlayerField) -> bool {
        matches!(value, PlayerField::Unset)
    }
}

fn player() -> Player {
    Player {
        muted: false,
        volume: 5,
        track: "intro".to_string(),
    }
}

fn player_slice() -> slicekit::Slice<Player, PlayerField> {
    SliceBuilder::new()
        .prefix("player/")
        .initial_state(player())
        .public("toggle_mute", build_toggle("muted"))
        .public("set_volume", build_simple("volume"))
        .private(
            "skip",
            Handler::payload(|state: &Player, action: &Action<PlayerField>| match action.payload() {
                Some(PlayerField::Track(track)) => Player {
                    track: track.clone(),
                    volume: state.volume,
                    muted: state.muted,
                },
                _ => state.clone(),
            }),
        )
        .build()
        .unwrap()
}

#[test]
fn typed_toggle_flips_field() {
    let slice = player_slice();
    let action = slice.actions.get("toggle_mute").unwrap().create();

    let state = slice.reducer.reduce(None, &action);

    assert!(state.muted);
    assert!(!slice.reducer.initial_state().muted);
}

#[test]
fn typed_simple_handler_sets_field() {
    let slice = player_slice();
    let action = slice
        .actions
        .get("set_volume")
        .unwrap()
        .create_with(PlayerField::Volume(9));

    let state = slice.reducer.reduce(None, &action);

    assert_eq!(state.volume, 9);
    assert_eq!(state.track, "intro");
}

#[test]
fn mismatched_variant_leaves_state_unchanged() {
    let slice = player_slice();
    let action = Action::with_payload("player/set_volume", PlayerField::Track("x".to_string()));

    let state = slice.reducer.reduce(None, &action);

    assert_eq!(*state, player());
}

#[test]
fn private_typed_handler_reads_payload() {
    let slice = player_slice();
    let action = slice
        .private_actions
        .get("skip")
        .unwrap()
        .create_with(PlayerField::Track("outro".to_string()));

    let state = slice.reducer.reduce(None, &action);

    assert_eq!(state.track, "outro");
    assert!(!slice.actions.contains("skip"));
}

#[test]
fn typed_fields_expose_shape() {
    let names: Vec<String> = player().fields().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["muted", "volume", "track"]);
}
