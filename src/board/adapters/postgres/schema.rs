//! Diesel schema for board persistence.

diesel::table! {
    /// Board tasks, soft-deleted rows included.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user.
        owner_id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Column status (`TODO`, `IN_PROGRESS`, `DONE`).
        #[max_length = 20]
        status -> Varchar,
        /// Zero-based position inside the `(owner_id, status)` column.
        position -> Int4,
        /// Hosted image URL.
        image -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
        /// Soft-deletion timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Per-user column order stored as three status ordinals.
    column_preferences (user_id) {
        /// Owning user.
        user_id -> Uuid,
        /// Ordinal shown in the leftmost slot.
        first -> Int4,
        /// Ordinal shown in the middle slot.
        second -> Int4,
        /// Ordinal shown in the rightmost slot.
        third -> Int4,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
