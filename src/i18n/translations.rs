//! Flat translation tables for every label the views print

use crate::api::StatKind;
use crate::i18n::Language;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translations {
    pub language: &'static str,
    pub french: &'static str,
    pub english: &'static str,
    pub error: &'static str,
    pub not_found: &'static str,
    pub no_results: &'static str,
    pub generation: &'static str,
    pub height: &'static str,
    pub weight: &'static str,
    pub types: &'static str,
    pub stats: &'static str,
    pub total: &'static str,
    pub hp: &'static str,
    pub attack: &'static str,
    pub defense: &'static str,
    pub special_attack: &'static str,
    pub special_defense: &'static str,
    pub speed: &'static str,
    pub evolutions: &'static str,
    pub pre_evolutions: &'static str,
    pub next_evolutions: &'static str,
    pub no_evolutions: &'static str,
    pub evolution_tree: &'static str,
    pub level_up: &'static str,
    pub item: &'static str,
    pub trade: &'static str,
    pub special_condition: &'static str,
    pub image: &'static str,
    pub shiny: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub generations: &'static str,
    pub language_saved: &'static str,
    pub results: &'static str,
}

pub static FR: Translations = Translations {
    language: "Langue",
    french: "Français",
    english: "Anglais",
    error: "Erreur",
    not_found: "Pokémon non trouvé",
    no_results: "Aucun Pokémon ne correspond à votre recherche",
    generation: "Génération",
    height: "Taille",
    weight: "Poids",
    types: "Types",
    stats: "Statistiques",
    total: "Total",
    hp: "PV",
    attack: "Attaque",
    defense: "Défense",
    special_attack: "Att. Spé",
    special_defense: "Déf. Spé",
    speed: "Vitesse",
    evolutions: "Évolutions",
    pre_evolutions: "Pré-évolutions",
    next_evolutions: "Prochaines évolutions",
    no_evolutions: "Ce Pokémon n'évolue pas",
    evolution_tree: "Arbre d'évolution",
    level_up: "Niveau",
    item: "Objet",
    trade: "Échange",
    special_condition: "Condition spéciale",
    image: "Image",
    shiny: "Chromatique",
    previous: "Précédent",
    next: "Suivant",
    generations: "Générations",
    language_saved: "Langue enregistrée",
    results: "résultat(s)",
};

pub static EN: Translations = Translations {
    language: "Language",
    french: "French",
    english: "English",
    error: "Error",
    not_found: "Pokémon not found",
    no_results: "No Pokémon matches your search",
    generation: "Generation",
    height: "Height",
    weight: "Weight",
    types: "Types",
    stats: "Stats",
    total: "Total",
    hp: "HP",
    attack: "Attack",
    defense: "Defense",
    special_attack: "Sp. Atk",
    special_defense: "Sp. Def",
    speed: "Speed",
    evolutions: "Evolutions",
    pre_evolutions: "Pre-evolutions",
    next_evolutions: "Next evolutions",
    no_evolutions: "This Pokémon does not evolve",
    evolution_tree: "Evolution tree",
    level_up: "Level",
    item: "Item",
    trade: "Trade",
    special_condition: "Special condition",
    image: "Image",
    shiny: "Shiny",
    previous: "Previous",
    next: "Next",
    generations: "Generations",
    language_saved: "Language saved",
    results: "result(s)",
};

pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::Fr => &FR,
        Language::En => &EN,
    }
}

impl Translations {
    pub fn stat_label(&self, stat: StatKind) -> &'static str {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn language_name(&self, language: Language) -> &'static str {
        match language {
            Language::Fr => self.french,
            Language::En => self.english,
        }
    }
}
