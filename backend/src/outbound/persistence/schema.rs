//! Diesel table definitions.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Accounts that can sign in and own favourites.
    users (id) {
        /// Primary key.
        id -> Int8,
        /// Unique login handle (max 32 characters).
        username -> Varchar,
        /// Lower-case hex SHA-256 of the password.
        password_sha256 -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Catalogue entries keyed by national dex number.
    pokemon (id) {
        /// Primary key: national dex number.
        id -> Int4,
        /// Display name.
        name -> Varchar,
        /// Primary elemental type.
        primary_type -> Varchar,
        /// Optional secondary type.
        secondary_type -> Nullable<Varchar>,
        /// Artwork URL.
        image_url -> Nullable<Text>,
    }
}

diesel::table! {
    /// Join rows marking a user's favourite entries.
    ///
    /// The composite primary key enforces one row per pair.
    favourites (user_id, pokemon_id) {
        /// Owning user.
        user_id -> Int8,
        /// Favourited entry.
        pokemon_id -> Int4,
        /// Insertion timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(favourites -> users (user_id));
diesel::joinable!(favourites -> pokemon (pokemon_id));

diesel::allow_tables_to_appear_in_same_query!(favourites, pokemon, users);
