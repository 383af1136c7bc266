//! Compiled-in seed list.

use crate::model::Monkey;

const SEED: [(&str, &str, &str, &str); 6] = [
    (
        "Capuchin Monkey",
        "Cebinae",
        "Central & South America",
        "Small, intelligent; often seen in media; adaptable omnivore.",
    ),
    (
        "Howler Monkey",
        "Alouatta",
        "Central & South America",
        "Known for extremely loud howls that can travel several miles.",
    ),
    (
        "Spider Monkey",
        "Ateles",
        "Central & South America",
        "Long limbs & prehensile tail used like a fifth arm for agility.",
    ),
    (
        "Proboscis Monkey",
        "Nasalis larvatus",
        "Borneo",
        "Distinctive large nose; excellent swimmer; lives near mangroves.",
    ),
    (
        "Golden Snub-nosed Monkey",
        "Rhinopithecus roxellana",
        "China (mountain forests)",
        "Bright golden fur; cold-adapted; lives in multi-level social groups.",
    ),
    (
        "Mandrill",
        "Mandrillus sphinx",
        "Central Africa",
        "Brightly colored face; powerful; lives in large groups called hordes.",
    ),
];

/// The six seed monkeys, in display order.
pub fn seed_monkeys() -> Vec<Monkey> {
    SEED.iter()
        .map(|&(name, scientific, region, description)| {
            Monkey::new(name, scientific, region, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_list_is_complete_and_ordered() {
        let names: Vec<String> = seed_monkeys().into_iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            [
                "Capuchin Monkey",
                "Howler Monkey",
                "Spider Monkey",
                "Proboscis Monkey",
                "Golden Snub-nosed Monkey",
                "Mandrill",
            ]
        );
    }
}
