//! Diesel schema for team member persistence.

diesel::table! {
    /// Team members referenced by tasks and projects.
    users (id) {
        /// Store-assigned identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Normalized email address.
        #[max_length = 320]
        email -> Varchar,
        /// Optional avatar reference.
        avatar -> Nullable<Text>,
    }
}
