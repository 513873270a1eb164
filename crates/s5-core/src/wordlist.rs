//! The fixed 1024-word vocabulary used by the seed phrase codec.
//!
//! This is the S5 (Skynet) list: the first 1024 words of the sorted Sia
//! English dictionary. Index order is part of the phrase format.
//!
//! Every entry is lowercase, at least three characters long, and no two
//! entries share their first three characters. Validation relies on that:
//! a phrase token is resolved by its three-letter prefix alone.

/// Number of entries in [`WORDLIST`].
pub const WORDLIST_LEN: usize = 1024;

/// Length of the prefix that identifies a word during validation.
pub const PREFIX_LEN: usize = 3;

/// The vocabulary, in index order. The first 256 entries are the only ones
/// allowed as the first word of a phrase.
pub const WORDLIST: [&str; WORDLIST_LEN] = [
    "abbey", "ablaze", "abort", "absorb", "abyss", "aces", "aching", "acidic", "acoustic",
    "acquire", "across", "actress", "acumen", "adapt", "addicted", "adept", "adhesive", "adjust",
    "adopt", "adrenalin", "adult", "adventure", "aerial", "afar", "affair", "afield", "afloat",
    "afoot", "afraid", "after", "against", "agenda", "aggravate", "agile", "aglow", "agnostic",
    "agony", "agreed", "ahead", "aided", "aimless", "airport", "ajar", "akin", "alarms", "album",
    "alchemy", "alerts", "algebra", "alkaline", "alley", "almost", "aloof", "alpine", "already",
    "also", "altitude", "alumni", "always", "amaze", "ambush", "amended", "amidst", "ammo",
    "amnesty", "among", "amply", "amused", "anchor", "android", "anecdote", "angled", "ankle",
    "annoyed", "answers", "antics", "anvil", "anxiety", "anybody", "apart", "apex", "aphid",
    "aplomb", "apology", "apply", "apricot", "aptitude", "aquarium", "arbitrary", "archer",
    "ardent", "arena", "argue", "arises", "army", "around", "arrow", "arsenic", "artistic",
    "ascend", "ashtray", "aside", "asked", "asleep", "aspire", "assorted", "asylum", "athlete",
    "atlas", "atom", "atrium", "attire", "auburn", "auctions", "audio", "august", "aunt",
    "austere", "autumn", "avatar", "avidly", "avoid", "awakened", "awesome", "awful", "awkward",
    "awning", "awoken", "axes", "axis", "axle", "aztec", "azure", "baby", "bacon", "badge",
    "baffles", "bagpipe", "bailed", "bakery", "balding", "bamboo", "banjo", "baptism", "basin",
    "batch", "bawled", "bays", "because", "beer", "befit", "begun", "behind", "being", "below",
    "bemused", "benches", "berries", "bested", "betting", "bevel", "beware", "beyond", "bias",
    "bicycle", "bids", "bifocals", "biggest", "bikini", "bimonthly", "binocular", "biology",
    "biplane", "birth", "biscuit", "bite", "biweekly", "blip", "bluntly", "boat", "bobsled",
    "bodies", "bogeys", "boil", "boldly", "bomb", "border", "boss", "both", "bounced", "bovine",
    "bowling", "boxes", "boyfriend", "broken", "brunt", "bubble", "buckets", "budget", "buffet",
    "bugs", "building", "bulb", "bumper", "bunch", "business", "butter", "buying", "buzzer",
    "bygones", "byline", "bypass", "cabin", "cactus", "cadets", "cafe", "cage", "cajun", "cake",
    "calamity", "camp", "candy", "casket", "catch", "cause", "cavernous", "cease", "cedar",
    "ceiling", "cell", "cement", "cent", "certain", "chlorine", "chrome", "cider", "cigar",
    "cinema", "circle", "cistern", "citadel", "civilian", "claim", "click", "clue", "coal",
    "cobra", "cocoa", "code", "coexist", "coffee", "cogs", "cohesive", "coils", "colony", "comb",
    "cool", "copy", "corrode", "costume", "cottage", "cousin", "cowl", "criminal", "cube",
    "cucumber", "cuddled", "cuffs", "cuisine", "cunning", "cupcake", "custom", "cycling",
    "cylinder", "cynical", "dabbing", "dads", "daft", "dagger", "daily", "damp", "dangerous",
    "dapper", "darted", "dash", "dating", "dauntless", "dawn", "daytime", "dazed", "debut",
    "decay", "dedicated", "deepest", "deftly", "degrees", "dehydrate", "deity", "dejected",
    "delayed", "demonstrate", "dented", "deodorant", "depth", "desk", "devoid", "dewdrop",
    "dexterity", "dialect", "dice", "diet", "different", "digit", "dilute", "dime", "dinner",
    "diode", "diplomat", "directed", "distance", "ditch", "divers", "dizzy", "doctor", "dodge",
    "does", "dogs", "doing", "dolphin", "domestic", "donuts", "doorway", "dormant", "dosage",
    "dotted", "double", "dove", "down", "dozen", "dreams", "drinks", "drowning", "drunk", "drying",
    "dual", "dubbed", "duckling", "dude", "duets", "duke", "dullness", "dummy", "dunes", "duplex",
    "duration", "dusted", "duties", "dwarf", "dwelt", "dwindling", "dying", "dynamite", "dyslexic",
    "each", "eagle", "earth", "easy", "eating", "eavesdrop", "eccentric", "echo", "eclipse",
    "economics", "ecstatic", "eden", "edgy", "edited", "educated", "eels", "efficient", "eggs",
    "egotistic", "eight", "either", "eject", "elapse", "elbow", "eldest", "eleven", "elite",
    "elope", "else", "eluded", "emails", "ember", "emerge", "emit", "emotion", "empty", "emulate",
    "energy", "enforce", "enhanced", "enigma", "enjoy", "enlist", "enmity", "enough", "enraged",
    "ensign", "entrance", "envy", "epoxy", "equip", "erase", "erected", "erosion", "error",
    "eskimos", "espionage", "essential", "estate", "etched", "eternal", "ethics", "etiquette",
    "evaluate", "evenings", "evicted", "evolved", "examine", "excess", "exhale", "exit", "exotic",
    "exquisite", "extra", "exult", "fabrics", "factual", "fading", "fainted", "faked", "fall",
    "family", "fancy", "farming", "fatal", "faulty", "fawns", "faxed", "fazed", "feast",
    "february", "federal", "feel", "feline", "females", "fences", "ferry", "festival", "fetches",
    "fever", "fewest", "fiat", "fibula", "fictional", "fidget", "fierce", "fifteen", "fight",
    "films", "firm", "fishing", "fitting", "five", "fixate", "fizzle", "fleet", "flippant",
    "flying", "foamy", "focus", "foes", "foggy", "foiled", "folding", "fonts", "foolish", "fossil",
    "fountain", "fowls", "foxes", "foyer", "framed", "friendly", "frown", "fruit", "frying",
    "fudge", "fuel", "fugitive", "fully", "fuming", "fungal", "furnished", "fuselage", "future",
    "fuzzy", "gables", "gadget", "gags", "gained", "galaxy", "gambit", "gang", "gasp", "gather",
    "gauze", "gave", "gawk", "gaze", "gearbox", "gecko", "geek", "gels", "gemstone", "general",
    "geometry", "germs", "gesture", "getting", "geyser", "ghetto", "ghost", "giant", "giddy",
    "gifts", "gigantic", "gills", "gimmick", "ginger", "girth", "giving", "glass", "gleeful",
    "glide", "gnaw", "gnome", "goat", "goblet", "godfather", "goes", "goggles", "going",
    "goldfish", "gone", "goodbye", "gopher", "gorilla", "gossip", "gotten", "gourmet", "governing",
    "gown", "greater", "grunt", "guarded", "guest", "guide", "gulp", "gumball", "guru", "gusts",
    "gutter", "guys", "gymnast", "gypsy", "gyrate", "habitat", "hacksaw", "haggled", "hairy",
    "hamburger", "happens", "hashing", "hatchet", "haunted", "having", "hawk", "haystack",
    "hazard", "hectare", "hedgehog", "heels", "hefty", "height", "hemlock", "hence", "heron",
    "hesitate", "hexagon", "hickory", "hiding", "highway", "hijack", "hiker", "hills", "himself",
    "hinder", "hippo", "hire", "history", "hitched", "hive", "hoax", "hobby", "hockey", "hoisting",
    "hold", "honked", "hookup", "hope", "hornet", "hospital", "hotel", "hounded", "hover", "howls",
    "hubcaps", "huddle", "huge", "hull", "humid", "hunter", "hurried", "husband", "huts", "hybrid",
    "hydrogen", "hyper", "iceberg", "icing", "icon", "identity", "idiom", "idled", "idols",
    "igloo", "ignore", "iguana", "illness", "imagine", "imbalance", "imitate", "impel", "inactive",
    "inbound", "incur", "industrial", "inexact", "inflamed", "ingested", "initiate", "injury",
    "inkling", "inline", "inmate", "innocent", "inorganic", "input", "inquest", "inroads",
    "insult", "intended", "inundate", "invoke", "inwardly", "ionic", "irate", "iris", "irony",
    "irritate", "island", "isolated", "issued", "italics", "itches", "items", "itinerary",
    "itself", "ivory", "jabbed", "jackets", "jaded", "jagged", "jailed", "jamming", "january",
    "jargon", "jaunt", "javelin", "jaws", "jazz", "jeans", "jeers", "jellyfish", "jeopardy",
    "jerseys", "jester", "jetting", "jewels", "jigsaw", "jingle", "jittery", "jive", "jobs",
    "jockey", "jogger", "joining", "joking", "jolted", "jostle", "journal", "joyous", "jubilee",
    "judge", "juggled", "juicy", "jukebox", "july", "jump", "junk", "jury", "justice", "juvenile",
    "kangaroo", "karate", "keep", "kennel", "kept", "kernels", "kettle", "keyboard", "kickoff",
    "kidneys", "king", "kiosk", "kisses", "kitchens", "kiwi", "knapsack", "knee", "knife",
    "knowledge", "knuckle", "koala", "laboratory", "ladder", "lagoon", "lair", "lakes", "lamb",
    "language", "laptop", "large", "last", "later", "launching", "lava", "lawsuit", "layout",
    "lazy", "lectures", "ledge", "leech", "left", "legion", "leisure", "lemon", "lending",
    "leopard", "lesson", "lettuce", "lexicon", "liar", "library", "licks", "lids", "lied",
    "lifestyle", "light", "likewise", "lilac", "limits", "linen", "lion", "lipstick", "liquid",
    "listen", "lively", "loaded", "lobster", "locker", "lodge", "lofty", "logic", "loincloth",
    "long", "looking", "lopped", "lordship", "losing", "lottery", "loudly", "love", "lower",
    "loyal", "lucky", "luggage", "lukewarm", "lullaby", "lumber", "lunar", "lurk", "lush",
    "luxury", "lymph", "lynx", "lyrics", "macro", "madness", "magically", "mailed", "major",
    "makeup", "malady", "mammal", "maps", "masterful", "match", "maul", "maverick", "maximum",
    "mayor", "maze", "meant", "mechanic", "medicate", "meeting", "megabyte", "melting", "memoir",
    "menu", "merger", "mesh", "metro", "mews", "mice", "midst", "mighty", "mime", "mirror",
    "misery", "mittens", "mixture", "moat", "mobile", "mocked", "mohawk", "moisture", "molten",
    "moment", "money", "moon", "mops", "morsel", "mostly", "motherly", "mouth", "movement",
    "mowing", "much", "muddy", "muffin", "mugged", "mullet", "mumble", "mundane", "muppet",
    "mural", "musical", "muzzle", "myriad", "mystery", "myth", "nabbing", "nagged", "nail",
    "names", "nanny", "napkin", "narrate", "nasty", "natural", "nautical", "navy", "nearby",
    "necklace", "needed", "negative", "neither", "neon", "nephew", "nerves", "nestle", "network",
    "neutral", "never", "newt", "nexus", "nibs", "niche", "niece", "nifty", "nightly", "nimbly",
    "nineteen", "nirvana", "nitrogen", "nobody", "nocturnal", "nodes", "noises", "nomad",
    "noodles", "northern", "nostril", "noted", "nouns", "novelty", "nowhere", "nozzle", "nuance",
    "nucleus", "nudged", "nugget", "nuisance", "null", "number", "nuns", "nurse", "nutshell",
    "nylon", "oaks", "oars", "oasis", "oatmeal", "obedient", "object", "obliged", "obnoxious",
    "observant", "obtains", "obvious", "occur", "ocean", "october", "odds", "odometer", "offend",
    "often", "oilfield", "ointment", "okay", "older", "olive", "olympics", "omega", "omission",
    "omnibus", "onboard", "oncoming", "oneself", "ongoing", "onion", "online", "onslaught", "onto",
    "onward", "oozed", "opacity", "opened", "opposite", "optical", "opus", "orange", "orbit",
    "orchid", "orders", "organs", "origin", "ornament", "orphans", "oscar", "ostrich", "otherwise",
    "otter", "ouch", "ought", "ounce", "ourselves", "oust", "outbreak", "oval", "oven", "owed",
    "owls", "owner", "oxidant", "oxygen", "oyster", "ozone", "pact",
];

/// Word stored at `index`.
///
/// Callers pass indices produced by the phrase codec, which are always below
/// [`WORDLIST_LEN`].
pub fn word_at(index: u16) -> &'static str {
    debug_assert!((index as usize) < WORDLIST_LEN);
    WORDLIST[index as usize]
}

/// Index of the first word whose first three characters equal `prefix`.
///
/// With `first_256_only` set the scan stops after the first 256 entries.
/// The scan runs in vocabulary order and the first match wins.
pub fn find_by_prefix(prefix: &str, first_256_only: bool) -> Option<u16> {
    let bound = if first_256_only { 256 } else { WORDLIST_LEN };
    WORDLIST[..bound]
        .iter()
        .position(|word| word_prefix(word) == prefix)
        .map(|idx| idx as u16)
}

/// Shortest prefix length (never below three) that tells `word` apart from
/// every other vocabulary entry. The entry at `index` is the word itself and
/// is skipped.
///
/// Only meant for UIs that display shortened phrases; validation always
/// compares exactly three characters.
pub fn unique_prefix_len(word: &str, index: usize) -> usize {
    let word_len = word.chars().count();
    let mut len = PREFIX_LEN;
    while len < word_len {
        let prefix = char_prefix(word, len);
        let clash = WORDLIST
            .iter()
            .enumerate()
            .any(|(i, other)| i != index && other.starts_with(prefix));
        if !clash {
            break;
        }
        len += 1;
    }
    len
}

/// First three characters of `word` (or all of it when shorter).
pub fn word_prefix(word: &str) -> &str {
    char_prefix(word, PREFIX_LEN)
}

fn char_prefix(word: &str, chars: usize) -> &str {
    match word.char_indices().nth(chars) {
        Some((end, _)) => &word[..end],
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_has_unique_three_letter_prefixes() {
        let prefixes: HashSet<&str> = WORDLIST.iter().map(|w| word_prefix(w)).collect();
        assert_eq!(prefixes.len(), WORDLIST_LEN);
        assert!(WORDLIST.iter().all(|w| w.len() >= PREFIX_LEN));
        assert!(WORDLIST
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn vocabulary_order_is_stable() {
        assert_eq!(
            &WORDLIST[..10],
            &[
                "abbey", "ablaze", "abort", "absorb", "abyss", "aces", "aching", "acidic",
                "acoustic", "acquire",
            ]
        );
        assert_eq!(find_by_prefix("ace", true), Some(5));
        assert_eq!(find_by_prefix(word_prefix("acquire"), true), Some(9));
    }

    #[test]
    fn finds_words_by_prefix() {
        for (idx, word) in WORDLIST.iter().enumerate() {
            assert_eq!(find_by_prefix(word_prefix(word), false), Some(idx as u16));
        }
        assert_eq!(find_by_prefix("zzz", false), None);
    }

    #[test]
    fn restricted_search_ignores_tail_of_vocabulary() {
        let late = WORDLIST[WORDLIST_LEN - 1];
        assert_eq!(find_by_prefix(word_prefix(late), true), None);
        assert_eq!(find_by_prefix(word_prefix(WORDLIST[255]), true), Some(255));
    }

    #[test]
    fn unique_prefix_is_three_for_every_entry() {
        for (idx, word) in WORDLIST.iter().enumerate() {
            assert_eq!(unique_prefix_len(word, idx), PREFIX_LEN, "{word}");
        }
    }

    #[test]
    fn unique_prefix_grows_for_words_outside_the_vocabulary() {
        // "abbeyx" shares its first 5 letters with entry 0.
        let extended = format!("{}x", WORDLIST[0]);
        assert_eq!(unique_prefix_len(&extended, usize::MAX), WORDLIST[0].len() + 1);
        assert_eq!(unique_prefix_len(WORDLIST[0], usize::MAX), WORDLIST[0].len());
    }
}
