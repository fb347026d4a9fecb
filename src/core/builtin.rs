//! Built-in catalogs and template sets.
//!
//! The hand-curated content the app ships with. Each function builds a
//! fresh catalog so tests and generators get their own copy; nothing here
//! is module-global state.

use super::catalog::Catalog;
use super::template::TemplateSet;

/// Genre-partitioned writing prompts.
pub fn writing_prompts() -> Catalog {
    Catalog::new("writing-prompts")
        .with_category(
            "fantasy",
            [
                "The last dragon egg hatches in a city that outlawed magic a century ago.",
                "A cartographer discovers her maps change the places they describe.",
                "The royal food taster develops an immunity nobody was supposed to survive.",
                "Every hundred years the forest walks, and this year it is early.",
                "A retired knight teaches letters in a village where swords are currency.",
                "The library lends out memories, and someone has returned one damaged.",
            ],
        )
        .with_category(
            "scifi",
            [
                "The generation ship arrives to find the destination already colonized by its own descendants.",
                "A translator for first contact realizes the aliens are quoting human radio dramas.",
                "Maintenance droids keep repairing a crew that no longer exists.",
                "The colony's weather is subscription-based, and the payment just failed.",
                "An archivist discovers the backup of Earth is missing one continent.",
            ],
        )
        .with_category(
            "mystery",
            [
                "The victim's alibi is perfect because she was investigating her own murder.",
                "Every clock in the house stopped at a different time.",
                "A small-town librarian notices the same stranger in photographs fifty years apart.",
                "The confession arrived by mail two days before the crime.",
                "Nobody remembers hiring the lighthouse keeper.",
            ],
        )
        .with_category(
            "romance",
            [
                "Two rival street vendors are assigned adjacent stalls for an entire festival season.",
                "She writes the horoscopes; he plans his week around them.",
                "The wrong-number text arrives every morning at 6:04 exactly.",
                "A wedding planner and a divorce lawyer share an office wall.",
            ],
        )
        .with_category(
            "horror",
            [
                "The new house has one more room at night than in daylight.",
                "Your reflection started waving yesterday, and today it stopped.",
                "The town's missing persons posters all show the same face.",
                "Something in the orchard counts the windfall apples every dawn.",
            ],
        )
}

/// Flat list of opening lines.
pub fn story_starters() -> Catalog {
    Catalog::flat(
        "story-starters",
        vec![
            "The tide went out and did not come back.".to_string(),
            "On the third day of the festival, the statues began to hum.".to_string(),
            "My grandmother left me a house, a dog, and a list of rules.".to_string(),
            "Nobody claimed the piano that arrived on the ferry.".to_string(),
            "The elevator had a button for a floor that wasn't there.".to_string(),
            "It was the kind of rain that made people confess things.".to_string(),
            "The letter was addressed to me, in my own handwriting.".to_string(),
        ],
    )
}

/// Flat list of overheard-dialogue snippets.
pub fn dialogue_snippets() -> Catalog {
    Catalog::flat(
        "dialogue-snippets",
        vec![
            "\"You promised you'd stop doing that after the funeral.\"".to_string(),
            "\"I counted the spoons. Twice.\"".to_string(),
            "\"It's not stealing if the house wants you to have it.\"".to_string(),
            "\"Say that again, but slower, and in front of the detective.\"".to_string(),
            "\"We don't talk about the lighthouse. Especially not to it.\"".to_string(),
            "\"Of course I trust you. That's what worries me.\"".to_string(),
        ],
    )
}

/// Template set for villain concepts.
pub fn villain_templates() -> TemplateSet {
    TemplateSet::new()
        .with_template("{title} {name}, who {scheme} because {motivation}.")
        .with_template("{name} the {epithet}: {scheme}, undone by {flaw}.")
        .with_template("A {epithet} {profession} who {scheme}, hiding {flaw}.")
        .with_token("title", ["Baroness", "Doctor", "Warden", "Archivist", "Admiral"])
        .with_token("name", ["Vesper", "Corwin", "Maelis", "Oru", "Halloway"])
        .with_token(
            "epithet",
            ["Unblinking", "Gilded", "Hollow", "Patient", "Smiling"],
        )
        .with_token(
            "profession",
            ["clockmaker", "cartographer", "judge", "apothecary", "choirmaster"],
        )
        .with_token(
            "scheme",
            [
                "collects the last words of dying languages",
                "rewrites maps so towns forget each other",
                "sells weather to the highest bidder",
                "replaces portraits with better likenesses",
            ],
        )
        .with_token(
            "motivation",
            [
                "the city forgot their name first",
                "someone has to keep the archive complete",
                "beauty should outlast its subjects",
                "debts accrue interest, even moral ones",
            ],
        )
        .with_token(
            "flaw",
            [
                "a ledger of every kindness received",
                "an unsent apology",
                "perfect pitch and a cursed bell",
                "the one map drawn honestly",
            ],
        )
}

/// All built-in catalogs, for registry-style iteration.
pub fn catalogs() -> Vec<Catalog> {
    vec![writing_prompts(), story_starters(), dialogue_snippets()]
}

// ============================================================================
// Tests
// ============================================================================
