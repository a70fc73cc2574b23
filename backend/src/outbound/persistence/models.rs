//! Diesel row structs.
//!
//! These stay inside the persistence adapter; repositories convert them to
//! domain records before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{favourites, pokemon, users};

/// Row read from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub username: String,
    pub password_sha256: String,
}

/// Row written to `users` by seeding.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i64,
    pub username: &'a str,
    pub password_sha256: &'a str,
}

/// Row read from `pokemon`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pokemon)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PokemonRow {
    pub id: i32,
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub image_url: Option<String>,
}

/// Row written to `pokemon` by seeding.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pokemon)]
pub(crate) struct NewPokemonRow<'a> {
    pub id: i32,
    pub name: &'a str,
    pub primary_type: &'a str,
    pub secondary_type: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

/// Row written to `favourites`.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favourites)]
pub(crate) struct NewFavouriteRow {
    pub user_id: i64,
    pub pokemon_id: i32,
    pub created_at: DateTime<Utc>,
}

/// `{id, name}` projection joined through `favourites`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pokemon)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PokemonSummaryRow {
    pub id: i32,
    pub name: String,
}
