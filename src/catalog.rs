//! Hand-curated events used to backfill thin scrape runs.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::models::{Category, Event, State};

type Origin = (&'static str, &'static str);

const OLD_BIKE: Origin = (
    "https://www.oldbikemag.com.au/october-rally-calendar/",
    "Old Bike Australasia",
);
const IMCA: Origin = (
    "https://www.indianmotorcycleclub.com.au/events/",
    "Indian Motorcycle Club",
);
const MA: Origin = ("https://www.ma.org.au/ma-calendar/", "Motorcycling Australia");
const MOTOGP: Origin = ("https://www.motogp.com.au/", "MotoGP Australia");
const AMCA: Origin = ("https://www.amcaaustralia.org/", "AMCA Australia");

static CATALOG: Lazy<Vec<Event>> = Lazy::new(|| {
    vec![
        curated(
            "curated_001",
            "Scoresby Swap Meet",
            "Presented by Vintage Motorcycle Club of Vic. Gates open 6am for stallholders, general public entry 7am-12 noon. Entry $10 per person, Swap Site $20.",
            (ymd(2026, 4, 12), None),
            "National Steam Centre, Scoresby VIC",
            (State::Vic, Category::SwapMeet),
            OLD_BIKE,
        ),
        curated(
            "curated_002",
            "Maleny Motorcycle Swap Meet",
            "Hosted by Sunshine Coast HMCCQ. Free parking inside grounds. Entry $10 per person, Swap Sites $10.",
            (ymd(2026, 6, 13), None),
            "Maleny Showgrounds, QLD",
            (State::Qld, Category::SwapMeet),
            OLD_BIKE,
        ),
        curated(
            "curated_003",
            "Goulburn CRCG Motorcycle Only Swap Meet",
            "Motorcycle only swap meet in Goulburn.",
            (ymd(2026, 3, 22), None),
            "Goulburn, NSW",
            (State::Nsw, Category::SwapMeet),
            OLD_BIKE,
        ),
        curated(
            "curated_004",
            "Classic & Enthusiasts MCC NSW 43rd Annual Orange Rally",
            "Saturday and Sunday rides, presentation dinner Saturday night at Scout Camp, Lake Canobolas.",
            (ymd(2026, 2, 14), ymd(2026, 2, 15)),
            "Scout Camp, Lake Canobolas, Orange NSW",
            (State::Nsw, Category::Rally),
            OLD_BIKE,
        ),
        curated(
            "curated_005",
            "48th All British Rally",
            "Presented by BSA Motorcycle Owners Association of Victoria. Pre-paid entries $80 close 5th April.",
            (ymd(2026, 4, 24), ymd(2026, 4, 26)),
            "Old Newstead Racecourse, Newstead VIC",
            (State::Vic, Category::Rally),
            OLD_BIKE,
        ),
        curated(
            "curated_006",
            "30th Annual Heart of the Hunter Rally",
            "Presented by the Singleton Classic Motorcycle Club. 30th anniversary event.",
            (ymd(2026, 5, 1), ymd(2026, 5, 3)),
            "Singleton, NSW",
            (State::Nsw, Category::Rally),
            OLD_BIKE,
        ),
        curated(
            "curated_007",
            "Australian Classic Motorcycle TT",
            "Featuring Classic & Historic, Solo classes, BEARS, Sidecars, Roaring Sporties, Superbike Feature Events and Classic Bike Parade Laps.",
            (ymd(2026, 3, 20), ymd(2026, 3, 22)),
            "One Raceway, Goulburn NSW",
            (State::Nsw, Category::Racing),
            OLD_BIKE,
        ),
        curated(
            "curated_008",
            "IMCA Krusty Rally 2026",
            "Indian Motorcycle Club of Australia annual rally.",
            (ymd(2026, 10, 31), ymd(2026, 11, 3)),
            "TBA",
            (State::All, Category::Rally),
            IMCA,
        ),
        curated(
            "curated_009",
            "ASBK Round 1 - Phillip Island",
            "Australian Superbike Championship Round 1 with WorldSBK.",
            (ymd(2026, 2, 20), ymd(2026, 2, 22)),
            "Phillip Island Grand Prix Circuit, VIC",
            (State::Vic, Category::Racing),
            MA,
        ),
        curated(
            "curated_010",
            "ASBK Round 2 - Sydney Motorsport Park",
            "Australian Superbike Championship Round 2.",
            (ymd(2026, 3, 27), ymd(2026, 3, 28)),
            "Sydney Motorsport Park, NSW",
            (State::Nsw, Category::Racing),
            MA,
        ),
        curated(
            "curated_011",
            "ASBK Round 3 - The Bend",
            "Australian Superbike Championship Round 3.",
            (ymd(2026, 5, 1), ymd(2026, 5, 3)),
            "The Bend Motorsport Park, SA",
            (State::Sa, Category::Racing),
            MA,
        ),
        curated(
            "curated_012",
            "MotoGP Australian Grand Prix 2026",
            "MotoGP World Championship at the legendary Phillip Island circuit.",
            (ymd(2026, 10, 16), ymd(2026, 10, 18)),
            "Phillip Island Grand Prix Circuit, VIC",
            (State::Vic, Category::Racing),
            MOTOGP,
        ),
        curated(
            "curated_013",
            "Bulli Antique Motorcycle Weekend",
            "10th Anniversary of the Bulli Antique Motorcycle Weekend event.",
            (ymd(2026, 8, 15), ymd(2026, 8, 16)),
            "Bulli Showground, NSW",
            (State::Nsw, Category::Show),
            AMCA,
        ),
    ]
});

pub fn fallback_events() -> &'static [Event] {
    &CATALOG
}

fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn curated(
    id: &str,
    title: &str,
    description: &str,
    (start_date, end_date): (Option<NaiveDate>, Option<NaiveDate>),
    location: &str,
    (state, category): (State, Category),
    (source_url, source_name): Origin,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        start_date,
        end_date,
        location: location.to_string(),
        state,
        category,
        source_url: source_url.to_string(),
        source_name: source_name.to_string(),
    }
}
