//! Integration tests for the catalogue registry.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use example_data::{CatalogueRegistry, RegistryError};
use rstest::rstest;

const DIGEST: &str = "43999461d22f67840fcd9b8824293eaa4f18146e57b2c651bcd925e3b3e4e429";

fn registry_json(pokemon: &str, users: &str) -> String {
    format!(
        r#"{{
            "version": 1,
            "imageUrlTemplate": "https://img.test/{{id}}.png",
            "pokemon": [{pokemon}],
            "users": [{users}]
        }}"#
    )
}

#[test]
fn embedded_registry_holds_first_generation() {
    let registry = CatalogueRegistry::embedded().expect("embedded registry");

    assert_eq!(registry.version(), 1);
    assert_eq!(registry.pokemon().len(), 151);
    let ids: Vec<i32> = registry.pokemon().iter().map(|p| p.id()).collect();
    assert_eq!(ids, (1..=151).collect::<Vec<_>>());
}

#[test]
fn embedded_registry_contains_demo_account() {
    let registry = CatalogueRegistry::embedded().expect("embedded registry");
    let ash = registry.find_user("ash").expect("ash account");

    assert_eq!(ash.id(), 7);
    assert_eq!(ash.password_sha256(), DIGEST);
}

#[test]
fn image_urls_are_rendered_from_template() {
    let json = registry_json(
        r#"{"id": 25, "name": "Pikachu", "primaryType": "Electric"}"#,
        "",
    );
    let registry = CatalogueRegistry::from_json(&json).expect("valid registry");
    let pikachu = registry.find_pokemon(25).expect("pikachu");

    assert_eq!(pikachu.image_url(), Some("https://img.test/25.png"));
    assert_eq!(pikachu.primary_type(), "electric");
    assert_eq!(pikachu.secondary_type(), None);
}

#[test]
fn entries_are_sorted_by_id() {
    let json = registry_json(
        r#"{"id": 4, "name": "Charmander", "primaryType": "fire"},
           {"id": 1, "name": "Bulbasaur", "primaryType": "grass", "secondaryType": "poison"}"#,
        "",
    );
    let registry = CatalogueRegistry::from_json(&json).expect("valid registry");

    let names: Vec<&str> = registry.pokemon().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Bulbasaur", "Charmander"]);
}

#[rstest]
#[case::empty_catalogue("", "", RegistryError::EmptyCatalogue)]
#[case::duplicate_id(
    r#"{"id": 1, "name": "A", "primaryType": "grass"}, {"id": 1, "name": "B", "primaryType": "fire"}"#,
    "",
    RegistryError::DuplicatePokemonId { id: 1 }
)]
#[case::zero_id(
    r#"{"id": 0, "name": "A", "primaryType": "grass"}"#,
    "",
    RegistryError::NonPositivePokemonId { index: 0, id: 0 }
)]
#[case::blank_name(
    r#"{"id": 3, "name": "  ", "primaryType": "grass"}"#,
    "",
    RegistryError::BlankPokemonField { id: 3, field: "name" }
)]
#[case::bad_username(
    r#"{"id": 1, "name": "A", "primaryType": "grass"}"#,
    r#"{"id": 7, "username": "ash ketchum", "passwordSha256": "43999461d22f67840fcd9b8824293eaa4f18146e57b2c651bcd925e3b3e4e429"}"#,
    RegistryError::InvalidUsername { username: "ash ketchum".to_owned() }
)]
#[case::bad_digest(
    r#"{"id": 1, "name": "A", "primaryType": "grass"}"#,
    r#"{"id": 7, "username": "ash", "passwordSha256": "pikachu"}"#,
    RegistryError::InvalidPasswordDigest { username: "ash".to_owned() }
)]
fn rejects_invalid_registries(
    #[case] pokemon: &str,
    #[case] users: &str,
    #[case] expected: RegistryError,
) {
    let json = registry_json(pokemon, users);
    assert_eq!(CatalogueRegistry::from_json(&json), Err(expected));
}

#[test]
fn rejects_unsupported_version() {
    let json = r#"{"version": 2, "pokemon": [{"id": 1, "name": "A", "primaryType": "grass"}]}"#;
    assert_eq!(
        CatalogueRegistry::from_json(json),
        Err(RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2
        })
    );
}

#[test]
fn malformed_json_is_a_parse_error() {
    let result = CatalogueRegistry::from_json("not json");
    assert!(matches!(result, Err(RegistryError::ParseError { .. })));
}
