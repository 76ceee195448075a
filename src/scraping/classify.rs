use crate::models::{Category, State};

// Table order is significant: the first entry with any matching substring wins.
const STATE_PATTERNS: &[(State, &[&str])] = &[
    (
        State::Nsw,
        &[
            "nsw",
            "new south wales",
            "sydney",
            "newcastle",
            "wollongong",
            "bathurst",
            "orange",
            "goulburn",
            "singleton",
            "dungog",
            "kempsey",
        ],
    ),
    (
        State::Vic,
        &[
            "vic",
            "victoria",
            "melbourne",
            "geelong",
            "phillip island",
            "ballarat",
            "bendigo",
            "bright",
            "scoresby",
            "newstead",
            "casterton",
        ],
    ),
    (
        State::Qld,
        &[
            "qld",
            "queensland",
            "brisbane",
            "gold coast",
            "sunshine coast",
            "cairns",
            "townsville",
            "roma",
            "maleny",
            "toowoomba",
        ],
    ),
    (State::Wa, &["wa", "western australia", "perth", "fremantle"]),
    (
        State::Sa,
        &["sa", "south australia", "adelaide", "the bend", "coonalpyn"],
    ),
    (State::Tas, &["tas", "tasmania", "hobart", "launceston"]),
    (
        State::Act,
        &["act", "canberra", "australian capital territory"],
    ),
    (
        State::Nt,
        &["nt", "northern territory", "darwin", "alice springs"],
    ),
];

// `rally` is checked before `racing`, so "ride ... championship" lands in rally.
const CATEGORY_PATTERNS: &[(Category, &[&str])] = &[
    (
        Category::SwapMeet,
        &["swap", "swap meet", "swapmeet", "parts", "memorabilia"],
    ),
    (
        Category::Rally,
        &["rally", "ride", "run", "tour", "adventure"],
    ),
    (
        Category::Track,
        &["track day", "trackday", "circuit", "racing", "race"],
    ),
    (
        Category::Show,
        &["show", "display", "exhibition", "concours"],
    ),
    (
        Category::Racing,
        &[
            "race",
            "racing",
            "championship",
            "superbike",
            "motogp",
            "grand prix",
        ],
    ),
];

pub fn classify_state(text: &str) -> State {
    first_match(STATE_PATTERNS, text).unwrap_or_default()
}

pub fn classify_category(text: &str) -> Category {
    first_match(CATEGORY_PATTERNS, text).unwrap_or_default()
}

fn first_match<T: Copy>(table: &[(T, &[&str])], text: &str) -> Option<T> {
    let lower = text.to_lowercase();
    table
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|pattern| lower.contains(pattern)))
        .map(|(tag, _)| *tag)
}
