//! Built-in species taxonomy.
//!
//! Frequencies are the 2015 results of the furry survey
//! (<http://vis.adjectivespecies.com/furrysurvey/explorer/>).

use crate::error::Result;
use crate::taxonomy::{CategoryDefinition, ChoiceDefinition, Taxonomy, TaxonomyDefinition};

fn category(name: &str, label: &str, choices: &[(&str, &str, u64)]) -> CategoryDefinition {
    CategoryDefinition::new(
        name,
        label,
        choices
            .iter()
            .map(|&(name, label, frequency)| ChoiceDefinition::new(name, label, frequency))
            .collect(),
    )
}

/// The built-in definition, in display order.
pub fn definition() -> TaxonomyDefinition {
    TaxonomyDefinition::new(vec![
        category(
            "vulpini",
            "yip",
            &[
                ("redfox", "Red Fox", 1018),
                ("arcticfox", "Arctic Fox", 354),
                ("greyfox", "Grey Fox", 202),
                ("kitsune", "Kitsune", 320),
                ("otherfox", "Other Fox", 521),
            ],
        ),
        category(
            "canidae",
            "woof",
            &[
                ("germanshepherd", "German Shepherd", 282),
                ("husky", "Husky", 758),
                ("otherdog", "Other Dog", 716),
                ("coyote", "Coyote", 247),
                ("wolf", "Wolf", 2672),
                ("othercanine", "Other Canid", 311),
            ],
        ),
        category(
            "felidae",
            "meow",
            &[
                ("domesticcat", "Domestic Cat", 790),
                ("tiger", "Tiger", 430),
                ("lion", "Lion", 295),
                ("cheetah", "Cheetah", 147),
                ("panther", "Panther", 125),
                ("leopard", "Leopard", 117),
                ("otherfeline", "Other Felid", 542),
            ],
        ),
        category(
            "othermammal",
            "sound",
            &[
                ("hyaena", "Hyena", 207),
                ("raccoon", "Raccoon", 261),
                ("riverotter", "River Otter", 216),
                ("rabbit", "Rabbit", 367),
                ("bat", "Bat", 211),
                ("horse", "Horse", 255),
            ],
        ),
        category(
            "othernonmammal",
            "othersound",
            &[
                ("raven", "Raven", 119),
                ("otherbird", "Other Avian", 229),
                ("kangaroo", "Kangaroo", 117),
                ("lizard", "Lizard", 186),
                ("dragon", "Dragon", 1268),
                ("griffin", "Griffin", 152),
            ],
        ),
        category("other", "other", &[("other", "Other", 1815)]),
        category("nothing", "silence", &[("nothing", "No Species", 0)]),
    ])
}

/// Load the built-in taxonomy.
pub fn taxonomy() -> Result<Taxonomy> {
    Taxonomy::load(definition())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{NOTHING_CHOICE, OTHER_CHOICE};

    #[test]
    fn builtin_loads() {
        let taxonomy = taxonomy().unwrap();
        assert_eq!(taxonomy.categories().len(), 7);
        assert_eq!(taxonomy.len(), 32);
        assert_eq!(taxonomy.total_frequency(), 15_250);
        assert!(taxonomy.contains(OTHER_CHOICE));
        assert_eq!(taxonomy.baseline_percent(NOTHING_CHOICE), Some(0.0));
    }

    #[test]
    fn wolf_is_the_most_common_choice() {
        let taxonomy = taxonomy().unwrap();
        let (_, top) = taxonomy
            .iter()
            .max_by_key(|(_, choice)| choice.frequency)
            .unwrap();
        assert_eq!(top.name, "wolf");
    }
}
