//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Task description.
        description -> Text,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Optional assignee; not a foreign key.
        assigned_to -> Nullable<Uuid>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
