//! Diesel schema for board task persistence.

diesel::table! {
    /// Board tasks with denormalized assignee display fields.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Owning project.
        project_id -> Int8,
        /// Task title; length is bounded by board validation.
        title -> Text,
        /// Task description, possibly empty.
        description -> Text,
        /// Board column.
        #[max_length = 20]
        status -> Varchar,
        /// Rank within the (project, status) partition.
        position -> Int8,
        /// Assigned user identifier.
        assignee_id -> Nullable<Int8>,
        /// Assigned user display name.
        #[max_length = 255]
        assignee_name -> Nullable<Varchar>,
        /// Assigned user avatar reference.
        assignee_avatar -> Nullable<Text>,
        /// Optional due date.
        due_date -> Nullable<Date>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
