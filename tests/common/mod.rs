//! Shared fixtures for integration tests
//!
//! A small catalog spanning several types and generations, served from a
//! wiremock server that stands in for the remote API.

#![allow(dead_code)]

use pokedex::PokedexClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

pub const TYPES_JSON: &str = r#"[
    { "id": 1, "name": { "fr": "Normal", "en": "Normal" }, "image": "https://img/types/1.png" },
    { "id": 4, "name": { "fr": "Poison", "en": "Poison" }, "image": "https://img/types/4.png" },
    { "id": 10, "name": { "fr": "Feu", "en": "Fire" }, "image": "https://img/types/10.png" },
    { "id": 11, "name": { "fr": "Eau", "en": "Water" }, "image": "https://img/types/11.png" },
    { "id": 12, "name": { "fr": "Plante", "en": "Grass" }, "image": "https://img/types/12.png" },
    { "id": 13, "name": { "fr": "Électrik", "en": "Electric" }, "image": "https://img/types/13.png" }
]"#;

// Kept as raw text so `evolvesTo` key order survives on the wire
pub const POKEMON_JSON: &str = r#"[
    { "id": 1, "name": { "fr": "Bulbizarre", "en": "Bulbasaur" }, "image": "https://img/1.png", "image_shiny": "https://img/1s.png",
      "generation": 1, "height": 0.7, "weight": 6.9,
      "stats": { "hp": 45, "atk": 49, "def": 49, "spe_atk": 65, "spe_def": 65, "vit": 45 },
      "types": [12, 4], "evolvesTo": { "2": { "trigger": "level-up", "level": 16 } }, "evolvedFrom": [] },
    { "id": 2, "name": { "fr": "Herbizarre", "en": "Ivysaur" }, "image": "https://img/2.png", "image_shiny": "https://img/2s.png",
      "generation": 1, "height": 1.0, "weight": 13.0,
      "stats": { "hp": 60, "atk": 62, "def": 63, "spe_atk": 80, "spe_def": 80, "vit": 60 },
      "types": [12, 4], "evolvesTo": { "3": { "trigger": "level-up", "level": 32 } }, "evolvedFrom": [1] },
    { "id": 3, "name": { "fr": "Florizarre", "en": "Venusaur" }, "image": "https://img/3.png", "image_shiny": "https://img/3s.png",
      "generation": 1, "height": 2.0, "weight": 100.0,
      "stats": { "hp": 80, "atk": 82, "def": 83, "spe_atk": 100, "spe_def": 100, "vit": 80 },
      "types": [12, 4], "evolvesTo": {}, "evolvedFrom": [2] },
    { "id": 25, "name": { "fr": "Pikachu", "en": "Pikachu" }, "image": "https://img/25.png", "image_shiny": "https://img/25s.png",
      "generation": 1, "height": 0.4, "weight": 6.0,
      "stats": { "hp": 35, "atk": 55, "def": 40, "spe_atk": 50, "spe_def": 50, "vit": 90 },
      "types": [13, 99], "evolvesTo": { "26": { "trigger": "item", "item": "Pierre Foudre" } }, "evolvedFrom": [172] },
    { "id": 26, "name": { "fr": "Raichu", "en": "Raichu" }, "image": "https://img/26.png", "image_shiny": "https://img/26s.png",
      "generation": 1, "height": 0.8, "weight": 30.0,
      "stats": { "hp": 60, "atk": 90, "def": 55, "spe_atk": 90, "spe_def": 80, "vit": 110 },
      "types": [13], "evolvesTo": {} },
    { "id": 133, "name": { "fr": "Évoli", "en": "Eevee" }, "image": "https://img/133.png", "image_shiny": "https://img/133s.png",
      "generation": 1, "height": 0.3, "weight": 6.5,
      "stats": { "hp": 55, "atk": 55, "def": 50, "spe_atk": 45, "spe_def": 65, "vit": 55 },
      "types": [1],
      "evolvesTo": { "136": "Pierre Feu", "134": "Pierre Eau", "135": { "trigger": "item", "item": "Pierre Foudre" }, "999": "Inconnu" },
      "evolvedFrom": [] },
    { "id": 134, "name": { "fr": "Aquali", "en": "Vaporeon" }, "image": "https://img/134.png", "image_shiny": "https://img/134s.png",
      "generation": 1, "height": 1.0, "weight": 29.0,
      "stats": { "hp": 130, "atk": 65, "def": 60, "spe_atk": 110, "spe_def": 95, "vit": 65 },
      "types": [11], "evolvesTo": {}, "evolvedFrom": [133] },
    { "id": 135, "name": { "fr": "Voltali", "en": "Jolteon" }, "image": "https://img/135.png", "image_shiny": "https://img/135s.png",
      "generation": 1, "height": 0.8, "weight": 24.5,
      "stats": { "hp": 65, "atk": 65, "def": 60, "spe_atk": 110, "spe_def": 95, "vit": 130 },
      "types": [13], "evolvesTo": {}, "evolvedFrom": [133] },
    { "id": 136, "name": { "fr": "Pyroli", "en": "Flareon" }, "image": "https://img/136.png", "image_shiny": "https://img/136s.png",
      "generation": 1, "height": 0.9, "weight": 25.0,
      "stats": { "hp": 65, "atk": 130, "def": 60, "spe_atk": 95, "spe_def": 110, "vit": 65 },
      "types": [10], "evolvesTo": {}, "evolvedFrom": [133] },
    { "id": 152, "name": { "fr": "Germignon", "en": "Chikorita" }, "image": "https://img/152.png", "image_shiny": "https://img/152s.png",
      "generation": 2, "height": 0.9, "weight": 6.4,
      "stats": { "hp": 45, "atk": 49, "def": 65, "spe_atk": 49, "spe_def": 65, "vit": 45 },
      "types": [12], "evolvesTo": {}, "evolvedFrom": [] },
    { "id": 172, "name": { "fr": "Pichu", "en": "Pichu" }, "image": "https://img/172.png", "image_shiny": "https://img/172s.png",
      "generation": 2, "height": 0.3, "weight": 2.0,
      "stats": { "hp": 20, "atk": 40, "def": 15, "spe_atk": 35, "spe_def": 35, "vit": 60 },
      "types": [13], "evolvesTo": { "25": { "trigger": "other", "details": "Bonheur" } }, "evolvedFrom": [] }
]"#;

/// Wrap `data` in a successful envelope
pub fn envelope(data: &str) -> String {
    format!(r#"{{ "success": true, "data": {data} }}"#)
}

pub fn json_response(status: u16, body: String) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

/// Serve the type collection, expecting `times` requests
pub async fn mount_types(server: &MockServer, times: impl Into<Times>) {
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .respond_with(json_response(200, envelope(TYPES_JSON)))
        .expect(times)
        .mount(server)
        .await;
}

/// Serve the pokemon collection, expecting `times` requests
pub async fn mount_pokemon(server: &MockServer, times: impl Into<Times>) {
    Mock::given(method("GET"))
        .and(path("/api/pokemon"))
        .respond_with(json_response(200, envelope(POKEMON_JSON)))
        .expect(times)
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer) -> PokedexClient {
    PokedexClient::new(format!("{}/api", server.uri())).expect("client should build")
}
