//! Property-based tests for the substitution laws of every component.
//!
//! Uses proptest to check, over random settings and messages: plugboard and
//! reflector involution, the rotor forward/reverse inverse law, machine
//! reciprocity, the fixed-point-free property and message filtering.

use proptest::prelude::*;

use enigma_machine::{tables, Letter, Machine, MachineConfig, Plugboard, Reflector, Rotor};

const WALZEN: [&str; 8] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"];

// ── Strategies ───────────────────────────────────────────────────────────

fn any_letter() -> impl Strategy<Value = Letter> {
    (0usize..26).prop_map(Letter::from_index)
}

fn any_setting() -> impl Strategy<Value = i32> {
    1i32..=26
}

fn any_rotor_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(tables::rotor_names().collect::<Vec<_>>())
}

fn any_reflector_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(tables::reflector_names().collect::<Vec<_>>())
}

/// A shuffled alphabet cut into up to 13 disjoint pairs.
fn any_plugboard_pairs() -> impl Strategy<Value = Vec<String>> {
    (Just(Letter::all().collect::<Vec<_>>()).prop_shuffle(), 0usize..=13).prop_map(
        |(letters, count)| {
            letters
                .chunks(2)
                .take(count)
                .map(|pair| [pair[0].to_char(), pair[1].to_char()].iter().collect())
                .collect()
        },
    )
}

/// Three distinct rotors I..VIII, right to left.
fn any_walzen() -> impl Strategy<Value = Vec<&'static str>> {
    Just(WALZEN.to_vec())
        .prop_shuffle()
        .prop_map(|names| names.into_iter().take(3).collect())
}

fn any_m3_config() -> impl Strategy<Value = MachineConfig> {
    (
        prop::sample::select(vec!["B", "C"]),
        any_walzen(),
        any_plugboard_pairs(),
        prop::array::uniform3(any_setting()),
        prop::array::uniform3(any_setting()),
    )
        .prop_map(|(reflector, walzen, pairs, rings, positions)| {
            MachineConfig::m3(reflector, walzen[0], walzen[1], walzen[2])
                .with_plugboard(pairs)
                .with_ring_settings(rings[0], rings[1], rings[2], 1)
                .with_positions(positions[0], positions[1], positions[2], 1)
        })
}

fn any_m4_config() -> impl Strategy<Value = MachineConfig> {
    (
        any_m3_config(),
        prop::sample::select(vec!["b", "g"]),
        prop::sample::select(vec!["b_thin", "c_thin"]),
        any_setting(),
        any_setting(),
    )
        .prop_map(|(m3, greek, reflector, ring, position)| {
            MachineConfig::m4(
                reflector,
                &m3.right.rotor,
                &m3.middle.rotor,
                &m3.left.rotor,
                greek,
            )
            .with_plugboard(m3.plugboard.clone())
            .with_ring_settings(
                m3.right.ring_setting,
                m3.middle.ring_setting,
                m3.left.ring_setting,
                ring,
            )
            .with_positions(
                m3.right.position,
                m3.middle.position,
                m3.left.position,
                position,
            )
        })
}

// ── 1. Component laws ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_plugboard_involution(pairs in any_plugboard_pairs(), letter in any_letter()) {
        let plugboard = Plugboard::new(&pairs).unwrap();
        prop_assert_eq!(plugboard.map(plugboard.map(letter)), letter);
        prop_assert_eq!(plugboard.len(), pairs.len());
    }

    #[test]
    fn prop_reflector_involution(name in any_reflector_name(), letter in any_letter()) {
        let reflector = Reflector::from_table(name).unwrap();
        let out = reflector.map(letter);
        prop_assert_ne!(out, letter);
        prop_assert_eq!(reflector.map(out), letter);
    }

    #[test]
    fn prop_rotor_inverse_law(
        name in any_rotor_name(),
        ring in any::<i32>(),
        position in any::<i32>(),
        letter in any_letter(),
    ) {
        let rotor = Rotor::from_table(name, ring, position).unwrap();
        prop_assert_eq!(rotor.map_reverse(rotor.map_forward(letter)), letter);
        prop_assert!((1..=26).contains(&rotor.ring_setting()));
        prop_assert!((1..=26).contains(&rotor.position()));
    }

    #[test]
    fn prop_rotor_step_up_then_down(name in any_rotor_name(), position in any_setting()) {
        let mut rotor = Rotor::from_table(name, 1, position).unwrap();
        rotor.step_up();
        prop_assert_eq!(rotor.position(), position % 26 + 1);
        rotor.step_down();
        prop_assert_eq!(rotor.position(), position);
    }
}

// ── 2. Machine reciprocity ───────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_m3_reciprocity(config in any_m3_config(), text in "[A-Z]{0,200}") {
        let mut encoder = Machine::new(&config).unwrap();
        let mut decoder = Machine::new(&config).unwrap();
        let ciphertext = encoder.encode_message(&text, 0);
        prop_assert_eq!(decoder.encode_message(&ciphertext, 0), text);
        prop_assert_eq!(encoder.config().right.position, decoder.config().right.position);
    }

    #[test]
    fn prop_m4_reciprocity(config in any_m4_config(), text in "[A-Z]{0,200}") {
        let mut encoder = Machine::new(&config).unwrap();
        let mut decoder = Machine::new(&config).unwrap();
        let ciphertext = encoder.encode_message(&text, 0);
        prop_assert_eq!(decoder.encode_message(&ciphertext, 0), text);
        prop_assert_eq!(
            encoder.fourth().unwrap().position(),
            config.fourth.as_ref().unwrap().position
        );
    }

    #[test]
    fn prop_never_encodes_to_itself(config in any_m3_config(), text in "[A-Z]{1,100}") {
        let mut machine = Machine::new(&config).unwrap();
        let ciphertext = machine.encode_message(&text, 0);
        for (plain, cipher) in text.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn prop_reset_replays(config in any_m3_config(), text in "[A-Z]{1,100}") {
        let mut machine = Machine::new(&config).unwrap();
        let first = machine.encode_message(&text, 0);
        machine.reset();
        prop_assert_eq!(machine.encode_message(&text, 0), first);
    }
}

// ── 3. Message filtering and grouping ────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_filtering_matches_letters_only(
        config in any_m3_config(),
        text in "[a-zA-Z0-9 ,.!?'\\-]{0,120}",
        group in 0usize..8,
    ) {
        let letters: String = text.chars().filter(char::is_ascii_alphabetic).collect();
        let mut noisy = Machine::new(&config).unwrap();
        let mut clean = Machine::new(&config).unwrap();

        let grouped = noisy.encode_message(&text, group);
        let plain = clean.encode_message(&letters, 0);

        prop_assert!(grouped.chars().all(|c| c == ' ' || c.is_ascii_uppercase()));
        prop_assert_eq!(grouped.replace(' ', ""), plain);
        let spaces = if group == 0 || letters.is_empty() {
            0
        } else {
            (letters.len() - 1) / group
        };
        prop_assert_eq!(grouped.len(), letters.len() + spaces);
        prop_assert!(!grouped.starts_with(' '));
        prop_assert_eq!(noisy.window(), clean.window());
    }
}
