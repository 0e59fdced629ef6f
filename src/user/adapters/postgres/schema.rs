//! Diesel schema for user persistence.

diesel::table! {
    /// User records.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Email address, unique across users.
        #[max_length = 255]
        email -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
