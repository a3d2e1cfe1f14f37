//! Diesel schema for project persistence.

diesel::table! {
    /// Projects grouping tasks and team members.
    projects (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Project name.
        #[max_length = 255]
        name -> Varchar,
        /// Project description.
        description -> Text,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Progress percentage.
        progress -> Int2,
        /// Team member user identifiers.
        team_members -> Array<Int8>,
        /// Optional creation template.
        #[max_length = 20]
        template -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
