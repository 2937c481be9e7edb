//! Universe context table - static genre/tone descriptors for references
//!
//! Generation grounded in a named fictional setting must stay inside that
//! setting's genre and technology level. This table supplies the descriptor
//! the prompt builder embeds. Lookups never fail: an unrecognized reference
//! resolves to a generic context.

/// Genre and tone descriptor for a named reference universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseContext {
    pub genre: &'static str,
    pub description: &'static str,
    pub tech_level: &'static str,
    pub setting: &'static str,
}

/// Generic context used when a reference is not in the table.
pub const GENERIC_CONTEXT: UniverseContext = UniverseContext {
    genre: "as implied by the source material",
    description: "Stay faithful to the tone and conventions of the named source",
    tech_level: "matching the source material",
    setting: "the world depicted in the source material",
};

/// Look up the context for a reference universe by name.
///
/// Matching is case-insensitive. Unknown references yield
/// [`GENERIC_CONTEXT`], never an error.
pub fn universe_context_for(reference: &str) -> UniverseContext {
    match reference.trim().to_lowercase().as_str() {
        "the office" => UniverseContext {
            genre: "contemporary workplace comedy",
            description: "Mundane office life, dry humor, interpersonal drama; no supernatural or futuristic elements",
            tech_level: "present-day, ordinary office technology",
            setting: "a mid-sized paper company branch in suburban Pennsylvania",
        },
        "star trek" => UniverseContext {
            genre: "optimistic science fiction",
            description: "Space exploration, diplomacy, and scientific problem solving aboard starships",
            tech_level: "far-future: warp drive, transporters, replicators",
            setting: "the United Federation of Planets and surrounding space",
        },
        "star wars" => UniverseContext {
            genre: "space opera",
            description: "Galactic conflict between light and dark, mystic orders, smugglers and rebellions",
            tech_level: "advanced starfaring with energy weapons and droids",
            setting: "a galaxy of core worlds and lawless outer-rim frontiers",
        },
        "the lord of the rings" => UniverseContext {
            genre: "high fantasy",
            description: "Epic struggle against ancient evil across a mythic landscape",
            tech_level: "pre-industrial, medieval arms and craft",
            setting: "Middle-earth: shires, elven realms, dwarven halls, and dark lands",
        },
        "dune" => UniverseContext {
            genre: "political science fiction",
            description: "Feudal great houses, ecological scarcity, prophecy and intrigue",
            tech_level: "far-future interstellar travel without thinking machines",
            setting: "a desert planet at the center of an interstellar empire",
        },
        "sherlock holmes" => UniverseContext {
            genre: "Victorian detective fiction",
            description: "Deductive investigation of crimes in fog-bound London",
            tech_level: "late nineteenth century: gaslight, telegrams, hansom cabs",
            setting: "Victorian London and the English countryside",
        },
        "the wire" => UniverseContext {
            genre: "contemporary crime drama",
            description: "Institutional decay, street-level policing, and urban politics; strictly realistic",
            tech_level: "present-day, early 2000s",
            setting: "the streets, docks, and city hall of Baltimore",
        },
        "mad max" => UniverseContext {
            genre: "post-apocalyptic action",
            description: "Scarcity, vehicular warfare, and survival in the wasteland",
            tech_level: "scavenged twentieth-century machinery, no high technology",
            setting: "a desert wasteland after societal collapse",
        },
        _ => GENERIC_CONTEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            universe_context_for("THE OFFICE"),
            universe_context_for("the office")
        );
    }

    #[test]
    fn test_known_reference_has_specific_genre() {
        let ctx = universe_context_for("The Office");
        assert_eq!(ctx.genre, "contemporary workplace comedy");
    }

    #[test]
    fn test_unknown_reference_yields_generic_context() {
        let ctx = universe_context_for("Some Obscure Novel");
        assert_eq!(ctx, GENERIC_CONTEXT);
    }
}
